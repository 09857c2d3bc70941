//! Point entry and the add / clear / calculate lifecycle.
//!
//! - `PointSet`: insertion-ordered points, duplicates allowed, append-only
//!   apart from `clear`.
//! - `HullSession`: a point set plus the last computed `HullReport`. Adding a
//!   point invalidates the report; clearing drops points, hulls and counters.
//!   Nothing is carried from one calculation to the next.

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom::{HullCfg, Point};
use crate::hull::{compute_hulls, HullReport};

/// Rejected point entry.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PointError {
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinite { x: f64, y: f64 },
}

/// Insertion-ordered point sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from coordinates, rejecting the first non-finite entry.
    pub fn try_from_xy<I>(coords: I) -> Result<Self, PointError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut set = Self::new();
        for (x, y) in coords {
            set.add_point(x, y)?;
        }
        Ok(set)
    }

    pub(crate) fn from_finite(points: Vec<Point>) -> Self {
        debug_assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        Self { points }
    }

    /// Append `(x, y)`.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), PointError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(PointError::NonFinite { x, y });
        }
        self.points.push(Vector2::new(x, y));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

/// Interactive session: accumulate points, calculate on demand.
#[derive(Clone, Debug, Default)]
pub struct HullSession {
    points: PointSet,
    cfg: HullCfg,
    report: Option<HullReport>,
}

impl HullSession {
    pub fn new(cfg: HullCfg) -> Self {
        Self {
            points: PointSet::new(),
            cfg,
            report: None,
        }
    }

    /// Append a point and drop the current hulls.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), PointError> {
        self.points.add_point(x, y)?;
        self.report = None;
        Ok(())
    }

    /// Empty the points and forget both hulls and counters.
    pub fn clear(&mut self) {
        self.points.clear();
        self.report = None;
    }

    /// Recompute both hulls from scratch.
    ///
    /// Needs at least 3 points; below that the session keeps no report and
    /// `None` is returned.
    pub fn calculate(&mut self) -> Option<&HullReport> {
        if self.points.len() < 3 {
            tracing::debug!(n = self.points.len(), "calculate skipped: fewer than 3 points");
            return None;
        }
        let report = compute_hulls(self.points.as_slice(), &self.cfg);
        tracing::debug!(
            n = report.points.len(),
            scan_ops = report.scan_ops(),
            brute_ops = report.brute_ops(),
            "hulls recomputed"
        );
        self.report = Some(report);
        self.report.as_ref()
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }
    #[inline]
    pub fn report(&self) -> Option<&HullReport> {
        self.report.as_ref()
    }
    /// Scan counter of the current report (0 without one).
    pub fn scan_ops(&self) -> u64 {
        self.report.as_ref().map_or(0, HullReport::scan_ops)
    }
    /// Brute-force counter of the current report (0 without one).
    pub fn brute_ops(&self) -> u64 {
        self.report.as_ref().map_or(0, HullReport::brute_ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_rejects_non_finite() {
        let mut set = PointSet::new();
        assert!(set.add_point(1.0, 2.0).is_ok());
        assert!(matches!(
            set.add_point(f64::NAN, 0.0),
            Err(PointError::NonFinite { y, .. }) if y == 0.0
        ));
        assert_eq!(
            set.add_point(0.0, f64::INFINITY),
            Err(PointError::NonFinite {
                x: 0.0,
                y: f64::INFINITY
            })
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn try_from_xy_keeps_order_and_duplicates() {
        let set = PointSet::try_from_xy([(1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice()[0], Vector2::new(1.0, 1.0));
        assert_eq!(set.as_slice()[2], Vector2::new(1.0, 1.0));
        assert!(PointSet::try_from_xy([(0.0, f64::NEG_INFINITY)]).is_err());
    }

    #[test]
    fn session_lifecycle() {
        let mut s = HullSession::new(HullCfg::default());
        s.add_point(0.0, 0.0).unwrap();
        s.add_point(4.0, 0.0).unwrap();
        assert!(s.calculate().is_none());
        assert_eq!(s.scan_ops(), 0);

        s.add_point(0.0, 4.0).unwrap();
        let report = s.calculate().expect("three points");
        assert!(report.scan.is_polygon());
        assert_eq!(report.brute.len(), 3);
        assert!(s.brute_ops() > 0 && s.scan_ops() > 0);

        // new point invalidates the shown hulls
        s.add_point(1.0, 1.0).unwrap();
        assert!(s.report().is_none());

        let first = s.calculate().cloned().unwrap();
        let second = s.calculate().cloned().unwrap();
        assert_eq!(first, second);

        s.clear();
        assert!(s.points().is_empty());
        assert!(s.report().is_none());
        assert_eq!(s.scan_ops(), 0);
        assert_eq!(s.brute_ops(), 0);
    }
}
