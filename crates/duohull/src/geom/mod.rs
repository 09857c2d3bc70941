//! Planar primitives shared by both hull algorithms.
//!
//! Purpose
//! - Hold the single tolerant predicate (`orientation_eps`) and the relative
//!   tolerance it runs under, so the scan and the brute-force finder classify
//!   every borderline triple the same way. `orientation_exact` only orders
//!   the polar sort.
//! - Provide small polygon helpers (area, on-or-inside tests) used by reports
//!   and tests.
//!
//! Conventions
//! - `Point` is `nalgebra::Vector2<f64>`; equality is exact (`PartialEq`).
//! - y grows upward. "Counterclockwise" is a left turn in that frame.
//! - Code cross-refs: `hull::{graham_scan, brute_force_hull}`

mod cfg;
mod orient;
mod polygon;

pub use cfg::{CounterMode, HullCfg, ORIENT_EPS};
pub use orient::{
    on_segment, orientation, orientation_eps, orientation_exact, turn_value, Orientation,
};
pub use polygon::{contains_eps, parallelogram_area, polygon_area};

/// A point in the plane.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
