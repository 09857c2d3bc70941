//! Dual convex-hull engine with operation counters.
//!
//! Two algorithms over the same 2D point set, each instrumented so the gap
//! between O(n log n) and O(n³) shows up in plain numbers:
//! - `hull::graham_scan`: ordered, counterclockwise hull polygon.
//! - `hull::brute_force_hull`: unordered set of extreme points.
//!
//! Layout
//! - `geom`: point type, tolerance config, the orientation predicate.
//! - `hull`: both algorithms, counters, and `compute_hulls`.
//! - `session`: point entry (`PointSet`) and the add/clear/calculate cycle.
//! - `rand`: seeded point clouds for demos and benches.
//!
//! Everything is synchronous and allocation-local; results and counters are
//! returned by value and no state survives between calls.

pub mod geom;
pub mod hull;
pub mod rand;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{CounterMode, HullCfg, Orientation, Point};
pub use hull::{
    brute_force_hull, compute_hulls, graham_scan, ExtremeSet, HullReport, ScanHull, ScanOutcome,
};
pub use session::{HullSession, PointError, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{orientation, orientation_eps, CounterMode, HullCfg, Orientation, Point};
    pub use crate::hull::{
        brute_force_hull, compute_hulls, graham_scan, ExtremeSet, HullReport, ScanHull,
        ScanOutcome,
    };
    pub use crate::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
    pub use crate::session::{HullSession, PointError, PointSet};
}
