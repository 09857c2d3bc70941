//! Graham scan with an instrumented monotonic stack.

use crate::geom::{
    contains_eps, orientation_eps, polygon_area, CounterMode, HullCfg, Orientation, Point,
};

use super::counter::{sort_estimate, OpCounter};
use super::polar::{prune_collinear_prefix, select_pivot, sort_by_polar_angle};

/// How a scan ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// `vertices` is a counterclockwise convex polygon starting at the pivot.
    Polygon,
    /// Fewer than 3 input points; `vertices` is the input.
    TooFewPoints,
    /// All points collinear (fewer than 2 usable points after pruning);
    /// `vertices` is the input.
    Degenerate,
}

/// Ordered hull produced by the scan.
///
/// Invariants (for `ScanOutcome::Polygon`):
/// - Counterclockwise, strictly convex, first vertex is the pivot.
/// - The closing edge back to the first vertex is implicit; see `closed`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanHull {
    pub vertices: Vec<Point>,
    pub ops: u64,
    pub outcome: ScanOutcome,
}

impl ScanHull {
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.outcome == ScanOutcome::Polygon
    }

    /// Vertices with the first one repeated at the end (drawing form).
    pub fn closed(&self) -> Vec<Point> {
        let mut ring = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            ring.push(*first);
        }
        ring
    }

    /// Enclosed area; zero unless the scan produced a polygon.
    pub fn area(&self) -> f64 {
        if self.is_polygon() {
            polygon_area(&self.vertices)
        } else {
            0.0
        }
    }

    /// On-or-inside test with slack `eps` on the turn value.
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        self.is_polygon() && contains_eps(&self.vertices, p, eps)
    }
}

/// Ordered convex hull of `points` (counterclockwise, starting at the pivot).
///
/// Steps
/// - Pivot: lowest, then leftmost point.
/// - Sort the rest by polar angle around it (`sort_by_polar_angle`).
/// - Prune the collinear prefix of the first ray.
/// - Stack: seed with pivot and the first two sorted points; for each further
///   point pop while the top does not make a left turn, then push.
///
/// Counter: in `CounterMode::Hybrid` the count starts at `sort_estimate(n)`;
/// every comparator call and every stack orientation test adds one.
pub fn graham_scan(points: &[Point], cfg: &HullCfg) -> ScanHull {
    let n = points.len();
    let unchanged = |ops: u64, outcome: ScanOutcome| ScanHull {
        vertices: points.to_vec(),
        ops,
        outcome,
    };
    if n < 3 {
        return unchanged(0, ScanOutcome::TooFewPoints);
    }
    let Some(pivot_idx) = select_pivot(points) else {
        return unchanged(0, ScanOutcome::TooFewPoints);
    };
    let pivot = points[pivot_idx];
    tracing::debug!(n, x = pivot.x, y = pivot.y, "graham pivot");

    let mut ops = OpCounter::new();
    if cfg.counter == CounterMode::Hybrid {
        ops.add(sort_estimate(n));
    }

    let mut sorted: Vec<Point> = Vec::with_capacity(n - 1);
    sorted.extend_from_slice(&points[..pivot_idx]);
    sorted.extend_from_slice(&points[pivot_idx + 1..]);
    sort_by_polar_angle(&pivot, &mut sorted, &mut ops);
    prune_collinear_prefix(&pivot, &mut sorted, cfg.eps);

    if sorted.len() < 2 {
        tracing::debug!(ops = ops.get(), "graham aborted: collinear input");
        return unchanged(ops.get(), ScanOutcome::Degenerate);
    }

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    stack.push(pivot);
    stack.push(sorted[0]);
    stack.push(sorted[1]);
    for p in sorted.into_iter().skip(2) {
        while stack.len() > 1 {
            ops.tick();
            let l = stack.len();
            if orientation_eps(&stack[l - 2], &stack[l - 1], &p, cfg.eps)
                == Orientation::CounterClockwise
            {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }

    tracing::debug!(vertices = stack.len(), ops = ops.get(), "graham done");
    ScanHull {
        vertices: stack,
        ops: ops.get(),
        outcome: ScanOutcome::Polygon,
    }
}
