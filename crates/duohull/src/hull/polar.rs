//! Scan preparation: pivot choice, polar-angle sort, collinear prefix prune.

use std::cmp::Ordering;

use crate::geom::{orientation_eps, orientation_exact, Orientation, Point};

use super::counter::OpCounter;

/// Index of the lowest point (smallest y, then smallest x).
///
/// The first occurrence wins among exact duplicates. `None` for empty input.
pub fn select_pivot(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = &points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Sort `points` by angle around `pivot`, counterclockwise first.
///
/// Every comparison is one exact orientation test and ticks `ops`; exact
/// ties on the same ray are ordered by squared distance, nearest first. All
/// points lie in the half-plane at or above the pivot, so this is a total
/// order. No trigonometry.
pub fn sort_by_polar_angle(pivot: &Point, points: &mut [Point], ops: &mut OpCounter) {
    points.sort_by(|a, b| {
        ops.tick();
        match orientation_exact(pivot, a, b) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => {
                let da = (a - pivot).norm_squared();
                let db = (b - pivot).norm_squared();
                da.total_cmp(&db)
            }
        }
    });
}

/// Drop leading points that are collinear with `pivot` and their successor.
///
/// Of each collinear leading pair the nearer point goes, so the farthest
/// point of the first ray survives even when the tolerance merges rays the
/// exact sort kept apart. Stops once fewer than two points remain.
pub fn prune_collinear_prefix(pivot: &Point, sorted: &mut Vec<Point>, eps: f64) {
    let mut start = 0usize;
    while sorted.len() - start > 1
        && orientation_eps(pivot, &sorted[start], &sorted[start + 1], eps) == Orientation::Collinear
    {
        let d0 = (sorted[start] - pivot).norm_squared();
        let d1 = (sorted[start + 1] - pivot).norm_squared();
        if d0 > d1 {
            sorted.swap(start, start + 1);
        }
        start += 1;
    }
    sorted.drain(..start);
}
