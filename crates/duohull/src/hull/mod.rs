//! Dual convex-hull engine: Graham scan vs. exhaustive edge test.
//!
//! Purpose
//! - `graham_scan`: O(n log n) ordered hull (pivot → polar sort → collinear
//!   prune → monotonic stack). Returns a counterclockwise polygon.
//! - `brute_force_hull`: O(n³) extreme-point set from every ordered pair and
//!   a side test against every other point. Returns an unordered set.
//! - Both report an operation count for their own invocation only; nothing is
//!   shared between calls.
//!
//! Why two result types
//! - The scan knows adjacency, the brute-force finder does not. `ScanHull` and
//!   `ExtremeSet` keep that difference visible instead of inventing an order.
//!
//! Degenerate inputs
//! - Fewer than 3 points: both return the input unchanged.
//! - All points collinear: the scan returns the input unchanged; brute force
//!   returns the two extreme endpoints (or nothing if all points coincide).
//!
//! Code cross-refs: `geom::{orientation_eps, orientation_exact, HullCfg, CounterMode}`

mod brute;
mod counter;
mod graham;
mod polar;
mod report;

pub use brute::{brute_force_hull, ExtremeSet};
pub use counter::{sort_estimate, OpCounter};
pub use graham::{graham_scan, ScanHull, ScanOutcome};
pub use polar::{prune_collinear_prefix, select_pivot, sort_by_polar_angle};
pub use report::{compute_hulls, HullReport};
