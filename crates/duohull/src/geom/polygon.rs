use super::orient::turn_value;
use super::Point;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed shoelace area of a vertex ring (implicitly closed).
/// Positive for counterclockwise order.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..vertices.len() {
        let p = vertices[k];
        let q = vertices[(k + 1) % vertices.len()];
        twice += parallelogram_area(p, q);
    }
    0.5 * twice
}

/// On-or-inside test for a convex polygon given in counterclockwise order.
///
/// `eps` is slack on the turn value; `eps > 0` admits points marginally
/// outside an edge. Rings with fewer than 3 vertices contain nothing.
pub fn contains_eps(ccw: &[Point], p: &Point, eps: f64) -> bool {
    if ccw.len() < 3 {
        return false;
    }
    (0..ccw.len()).all(|k| {
        let a = &ccw[k];
        let b = &ccw[(k + 1) % ccw.len()];
        // right turn a→b→p means p is outside edge ab
        turn_value(a, b, p) <= eps
    })
}
