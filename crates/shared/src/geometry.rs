//! Tolerance-based 2D primitives used by the polygon cutter

use crate::Point2D;

/// Absolute tolerance for coordinate comparisons
pub const EPSILON: f64 = 1e-6;

// ============================================================================
// Vector helpers
// ============================================================================

#[inline]
fn sub(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new(a.x - b.x, a.y - b.y)
}

#[inline]
fn dot(a: Point2D, b: Point2D) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Euclidean length of a direction vector
#[inline]
pub fn norm(v: Point2D) -> f64 {
    v.x.hypot(v.y)
}

// ============================================================================
// Predicates
// ============================================================================

/// Component-wise comparison within `EPSILON`.
///
/// Not transitive: `a ~ b` and `b ~ c` do not imply `a ~ c`.
pub fn are_equal(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Signed distance from `point` to the line through `line_origin` with normal `line_normal`.
///
/// Positive on the side the normal points to. `line_normal` must not be the zero vector.
pub fn distance_to_line(point: Point2D, line_origin: Point2D, line_normal: Point2D) -> f64 {
    dot(sub(point, line_origin), line_normal) / norm(line_normal)
}

pub fn is_point_on_line(point: Point2D, line_origin: Point2D, line_normal: Point2D) -> bool {
    distance_to_line(point, line_origin, line_normal).abs() < EPSILON
}

// ============================================================================
// Intersection
// ============================================================================

/// Intersect the segment `edge_start..edge_end` with a line.
///
/// Returns `None` when the segment is parallel to the line or the hit lies
/// outside the segment. The parameter is not clamped, so a hit exactly on a
/// vertex may be reported by either adjacent edge.
pub fn intersect_edge_with_line(
    edge_start: Point2D,
    edge_end: Point2D,
    line_origin: Point2D,
    line_normal: Point2D,
) -> Option<Point2D> {
    let d = sub(edge_end, edge_start);
    let denom = dot(line_normal, d);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = dot(sub(line_origin, edge_start), line_normal) / denom;
    if t < 0.0 || t > 1.0 {
        return None;
    }

    Some(Point2D::new(edge_start.x + t * d.x, edge_start.y + t * d.y))
}

/// True if both endpoints of some edge (including last -> first) lie on the line
pub fn is_line_tangent_to_any_edge(
    polygon: &[Point2D],
    line_origin: Point2D,
    line_normal: Point2D,
) -> bool {
    let n = polygon.len();
    (0..n).any(|i| {
        let v1 = polygon[i];
        let v2 = polygon[(i + 1) % n];
        is_point_on_line(v1, line_origin, line_normal)
            && is_point_on_line(v2, line_origin, line_normal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    // --- are_equal ---

    #[test]
    fn test_are_equal_reflexive() {
        for pt in [p(0.0, 0.0), p(1.0, -1.0), p(1e9, 3.5)] {
            assert!(are_equal(pt, pt));
        }
    }

    #[test]
    fn test_are_equal_symmetric() {
        let a = p(1.0, 1.0);
        let b = p(1.0 + EPSILON / 2.0, 1.0);
        assert_eq!(are_equal(a, b), are_equal(b, a));
        let c = p(1.0, 2.0);
        assert_eq!(are_equal(a, c), are_equal(c, a));
    }

    #[test]
    fn test_are_equal_false() {
        assert!(!are_equal(p(1.0, 1.0), p(1.0, 2.0)));
    }

    #[test]
    fn test_are_equal_exact_epsilon_is_not_equal() {
        assert!(!are_equal(p(0.0, 0.0), p(EPSILON, 0.0)));
        assert!(!are_equal(p(0.0, 0.0), p(0.0, EPSILON)));
    }

    #[test]
    fn test_are_equal_half_epsilon_is_equal() {
        assert!(are_equal(p(0.0, 0.0), p(EPSILON / 2.0, EPSILON / 2.0)));
    }

    #[test]
    fn test_are_equal_not_transitive() {
        let a = p(0.0, 0.0);
        let b = p(0.6 * EPSILON, 0.0);
        let c = p(1.2 * EPSILON, 0.0);
        assert!(are_equal(a, b));
        assert!(are_equal(b, c));
        assert!(!are_equal(a, c));
    }

    // --- distance_to_line ---

    #[test]
    fn test_distance_to_line_zero_on_line() {
        assert_eq!(
            distance_to_line(p(1.0, 1.0), p(0.0, 0.0), p(-2.0, 2.0)),
            0.0
        );
    }

    #[test]
    fn test_distance_to_line_sign_flips() {
        let origin = p(0.0, 0.0);
        let normal = p(0.0, 2.0);
        let above = distance_to_line(p(3.0, 1.5), origin, normal);
        let below = distance_to_line(p(3.0, -1.5), origin, normal);
        assert!((above - 1.5).abs() < 1e-12);
        assert!((below + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_is_point_on_line() {
        assert!(is_point_on_line(p(0.0, 1.0), p(1.0, 0.0), p(2.0, 2.0)));
        assert!(!is_point_on_line(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 2.0)));
    }

    // --- intersect_edge_with_line ---

    #[test]
    fn test_intersect_edge_with_line() {
        let hit = intersect_edge_with_line(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 1.0));
        assert_eq!(hit, Some(p(0.5, 0.5)));
    }

    #[test]
    fn test_intersect_parallel_edge() {
        let hit = intersect_edge_with_line(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 1.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_intersect_outside_segment() {
        // Line x = 2 misses the segment from (0,0) to (1,1)
        let hit = intersect_edge_with_line(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0), p(1.0, 0.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_intersect_at_segment_endpoints() {
        let start = intersect_edge_with_line(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 5.0), p(1.0, 0.0));
        assert_eq!(start, Some(p(0.0, 0.0)));
        let end = intersect_edge_with_line(p(0.0, 0.0), p(2.0, 0.0), p(2.0, 5.0), p(1.0, 0.0));
        assert_eq!(end, Some(p(2.0, 0.0)));
    }

    // --- is_line_tangent_to_any_edge ---

    #[test]
    fn test_is_line_tangent_to_any_edge() {
        let polygon = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(is_line_tangent_to_any_edge(&polygon, p(0.0, 0.0), p(-1.0, 1.0)));
    }

    #[test]
    fn test_tangent_on_wrap_edge() {
        let polygon = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)];
        assert!(is_line_tangent_to_any_edge(&polygon, p(1.0, 0.0), p(0.0, 1.0)));
    }

    #[test]
    fn test_single_vertex_on_line_is_not_tangent() {
        let polygon = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)];
        assert!(!is_line_tangent_to_any_edge(&polygon, p(0.0, 1.0), p(0.0, 1.0)));
    }
}
