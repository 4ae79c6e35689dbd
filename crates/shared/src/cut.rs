//! Cutting a planar polygon in two with a plane orthogonal to XY

use crate::geometry::{are_equal, intersect_edge_with_line, is_line_tangent_to_any_edge};
use crate::{CutOutcome, CutRequest, Intersection, Point2D, Point3D};

/// Try to cut the polygon of `request` with its plane.
///
/// Checks run in a fixed order and the first failing one decides the outcome.
pub fn try_cut_polygon(request: &CutRequest) -> CutOutcome {
    if !request.polygon.iter().all(|v| v.z == 0.0) {
        return CutOutcome::PolygonNotPlanar;
    }

    if request.plane_normal.z != 0.0 {
        return CutOutcome::CutPlaneNotOrthogonal;
    }

    let line_origin = request.plane_origin.to_2d();
    let line_normal = request.plane_normal.to_2d();

    // Zero normal: no plane at all. Tiny but non-zero normals go through and
    // end up as parallel to every edge.
    if line_normal.x == 0.0 && line_normal.y == 0.0 {
        return CutOutcome::CutPlaneNotOrthogonal;
    }

    let polygon: Vec<Point2D> = request.polygon.iter().map(|v| v.to_2d()).collect();
    let polygon = collapse_cyclic(polygon, |a, b| are_equal(*a, *b));

    if polygon.len() < 3 {
        return CutOutcome::PolygonTooFewVertices;
    }

    if is_line_tangent_to_any_edge(&polygon, line_origin, line_normal) {
        return CutOutcome::LineTangentToSegment;
    }

    let n = polygon.len();
    let intersections: Vec<Intersection> = (0..n)
        .filter_map(|i| {
            intersect_edge_with_line(
                polygon[i],
                polygon[(i + 1) % n],
                line_origin,
                line_normal,
            )
            .map(|position| Intersection {
                edge_index: i,
                position,
            })
        })
        .collect();

    // A hit on a shared vertex is reported by both adjacent edges
    let mut intersections =
        collapse_cyclic(intersections, |a, b| are_equal(a.position, b.position));

    tracing::debug!(
        "Cut line hits polygon ({} vertices) at {} point(s)",
        n,
        intersections.len()
    );

    match intersections.len() {
        0 => CutOutcome::NoCut,
        1 => CutOutcome::LineVertexTangent,
        2 => {
            intersections.sort_by_key(|i| i.edge_index);
            let (left, right) = split_polygon(&polygon, &intersections[0], &intersections[1]);
            CutOutcome::Successful {
                result_polygons: vec![embed(&left), embed(&right)],
            }
        }
        _ => CutOutcome::PolygonNotConvex,
    }
}

/// Split `polygon` at two intersections, `first.edge_index < second.edge_index`.
///
/// Returns (left, right). Both are implicitly closed and both contain the two
/// intersection points.
pub fn split_polygon(
    polygon: &[Point2D],
    first: &Intersection,
    second: &Intersection,
) -> (Vec<Point2D>, Vec<Point2D>) {
    debug_assert!(first.edge_index < second.edge_index);

    let mut left = Vec::with_capacity(polygon.len() + 2);
    let mut right = Vec::with_capacity(polygon.len() + 2);

    for (i, &v) in polygon.iter().enumerate() {
        if i < first.edge_index || i > second.edge_index {
            left.push(v);
        } else if i == first.edge_index {
            left.push(v);
            left.push(first.position);
            right.push(first.position);
        } else if i < second.edge_index {
            right.push(v);
        } else {
            right.push(v);
            right.push(second.position);
            left.push(second.position);
        }
    }

    (left, right)
}

/// Drop every element equal to its cyclic successor.
///
/// Only neighbouring pairs are compared. If all elements collapse into each
/// other the first one is kept.
fn collapse_cyclic<T: Copy>(items: Vec<T>, eq: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let n = items.len();
    if n < 2 {
        return items;
    }

    let kept: Vec<T> = (0..n)
        .filter(|&i| !eq(&items[i], &items[(i + 1) % n]))
        .map(|i| items[i])
        .collect();

    if kept.is_empty() {
        vec![items[0]]
    } else {
        kept
    }
}

fn embed(polygon: &[Point2D]) -> Vec<Point3D> {
    polygon.iter().map(|v| v.to_3d()).collect()
}
