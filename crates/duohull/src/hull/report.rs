use std::fmt;

use crate::geom::{HullCfg, Point};

use super::brute::{brute_force_hull, ExtremeSet};
use super::graham::{graham_scan, ScanHull};

/// Both hulls of one point set plus their counters.
#[derive(Clone, Debug, PartialEq)]
pub struct HullReport {
    pub points: Vec<Point>,
    pub scan: ScanHull,
    pub brute: ExtremeSet,
}

impl HullReport {
    #[inline]
    pub fn scan_ops(&self) -> u64 {
        self.scan.ops
    }
    #[inline]
    pub fn brute_ops(&self) -> u64 {
        self.brute.ops
    }

    /// Whether the scan polygon and the extreme set hold the same points,
    /// ignoring order. Only meaningful when the scan produced a polygon.
    pub fn same_vertex_set(&self) -> bool {
        self.scan.vertices.len() == self.brute.len()
            && self.scan.vertices.iter().all(|v| self.brute.contains(v))
    }
}

impl fmt::Display for HullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Brute-Force Iterations: {} (O(N^3))", self.brute.ops)?;
        writeln!(f, "General Hull Iterations: {} (O(N log N))", self.scan.ops)?;
        write!(f, "Total Points: {}", self.points.len())
    }
}

/// Run both algorithms on the same points under the same configuration.
///
/// Pure function of `points` and `cfg`; repeated calls give identical reports.
pub fn compute_hulls(points: &[Point], cfg: &HullCfg) -> HullReport {
    let _span = tracing::debug_span!("compute_hulls", n = points.len()).entered();
    HullReport {
        points: points.to_vec(),
        scan: graham_scan(points, cfg),
        brute: brute_force_hull(points, cfg),
    }
}
