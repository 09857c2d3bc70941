//! Exhaustive hull-edge test (deliberately O(n³)).

use crate::geom::{on_segment, orientation_eps, HullCfg, Orientation, Point};

use super::counter::OpCounter;

/// Unordered, deduplicated extreme points.
///
/// Carries no adjacency. Order is discovery order and means nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtremeSet {
    pub points: Vec<Point>,
    pub ops: u64,
}

impl ExtremeSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Exact-value membership.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    fn insert(&mut self, p: Point) {
        if !self.contains(&p) {
            self.points.push(p);
        }
    }
}

/// Extreme points of `points` by testing every ordered pair as a hull edge.
///
/// A pair (i, j) survives when every other point k lies on one side of the
/// directed line i→j or on the closed segment between them. The first
/// non-collinear k fixes the side; a later k on the other side, or a collinear
/// k beyond either endpoint, rejects the pair. Every orientation test ticks
/// the counter, for every ordered pair i ≠ j. A pair whose endpoints coincide
/// spans no line: its tests run and are counted, then the pair is rejected.
///
/// For fewer than 3 points the input is returned unchanged with a zero count.
pub fn brute_force_hull(points: &[Point], cfg: &HullCfg) -> ExtremeSet {
    let n = points.len();
    if n < 3 {
        return ExtremeSet {
            points: points.to_vec(),
            ops: 0,
        };
    }
    let mut ops = OpCounter::new();
    let mut out = ExtremeSet {
        points: Vec::new(),
        ops: 0,
    };

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if is_hull_edge(points, i, j, cfg.eps, &mut ops) && points[i] != points[j] {
                out.insert(points[i]);
                out.insert(points[j]);
            }
        }
    }

    out.ops = ops.get();
    tracing::debug!(n, extreme = out.len(), ops = out.ops, "brute force done");
    out
}

fn is_hull_edge(points: &[Point], i: usize, j: usize, eps: f64, ops: &mut OpCounter) -> bool {
    let (a, b) = (&points[i], &points[j]);
    let mut side: Option<Orientation> = None;
    for (k, p) in points.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        ops.tick();
        match orientation_eps(a, b, p, eps) {
            Orientation::Collinear => {
                if !on_segment(a, b, p) {
                    tracing::trace!(i, j, k, "pair rejected: collinear beyond endpoint");
                    return false;
                }
            }
            o => match side {
                None => side = Some(o),
                Some(s) if s != o => {
                    tracing::trace!(i, j, k, "pair rejected: points on both sides");
                    return false;
                }
                Some(_) => {}
            },
        }
    }
    true
}
