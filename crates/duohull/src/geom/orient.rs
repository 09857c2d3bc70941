//! Orientation of three ordered points.

use super::cfg::ORIENT_EPS;
use super::Point;

/// Rotational direction of the path p → q → r.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Turn value `(q.y−p.y)(r.x−q.x) − (q.x−p.x)(r.y−q.y)`.
///
/// Positive for a clockwise (right) turn, negative for a counterclockwise
/// (left) turn. This is the negated 2D cross product of `q−p` and `r−p`.
#[inline]
pub fn turn_value(p: &Point, q: &Point, r: &Point) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Classify p → q → r with the default tolerance.
#[inline]
pub fn orientation(p: &Point, q: &Point, r: &Point) -> Orientation {
    orientation_eps(p, q, r, ORIENT_EPS)
}

/// Classify p → q → r under a relative tolerance.
///
/// Collinear iff `|turn| <= eps·|q−p|·|r−q|`, i.e. the sine of the turn at `q`
/// is at most `eps`. The test is invariant under uniform scaling, so a tiny
/// triangle is still a triangle. A repeated point (`q == p` or `r == q`) is
/// always collinear.
#[inline]
pub fn orientation_eps(p: &Point, q: &Point, r: &Point, eps: f64) -> Orientation {
    let val = turn_value(p, q, r);
    let scale = (q - p).norm() * (r - q).norm();
    if val.abs() <= eps * scale {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Exact classification of p → q → r (adaptive-precision determinant).
///
/// Agrees with the sign of the true turn of the stored coordinates, so
/// comparisons built on it are transitive.
#[inline]
pub fn orientation_exact(p: &Point, q: &Point, r: &Point) -> Orientation {
    let det = robust::orient2d(coord(p), coord(q), coord(r));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[inline]
fn coord(p: &Point) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Whether the projection of `k` onto the line a→b falls on the closed
/// segment `a`–`b`.
///
/// Meant for a `k` that `orientation_eps(a, b, k, eps)` already called
/// collinear; its distance from the line is then at most `eps·|k−b|`.
#[inline]
pub fn on_segment(a: &Point, b: &Point, k: &Point) -> bool {
    let ab = b - a;
    let ak = k - a;
    let t = ak.dot(&ab);
    t >= 0.0 && t <= ab.dot(&ab)
}
