//! Maximum allowed rectangle solver.
//!
//! Fits a candidate rectangle that may have drifted outside the boundary
//! polygon back into it while keeping as much of the user's placement as
//! possible: one corner stays put and the two edges leaving it are cut back
//! to the farthest point of the overlap region.

use smallvec::SmallVec;
use tracing::debug;

use crate::primitives::{
    closest_corner_of_quad, farthest_point_on_line, point_in_convex_quad, segment_intersection,
};
use crate::shapes::{BoundaryPolygon, Rectangle};
use crate::vector::Vec2;

/// Up to 16 edge intersections plus 4 boundary corners.
type OverlapPoints = SmallVec<[Vec2; 20]>;

/// Computes the largest rectangle derived from `rect` that fits `boundary`.
///
/// - With at most one corner outside the boundary, `rect` is returned
///   unchanged; a single violating corner is tolerated.
/// - When the rectangle and the boundary do not overlap at all, returns
///   `None`: there is no placement to preserve.
/// - Otherwise the result keeps an anchor corner of `rect` and is returned as
///   `[anchor, along-next-edge, opposite, along-previous-edge]`.
///
/// The anchor is the first corner inside the boundary, else the corner
/// closest to `anchor_hint`, else the corner closest to the boundary centre.
pub fn max_allowed_rect(
    rect: &Rectangle,
    boundary: &BoundaryPolygon,
    anchor_hint: Option<Vec2>,
) -> Option<Rectangle> {
    let corners = rect.corners();

    let inside_rect: SmallVec<[usize; 4]> = (0..corners.len())
        .filter(|&i| point_in_convex_quad(boundary.as_ref(), corners[i]))
        .collect();

    if inside_rect.len() + 1 >= corners.len() {
        debug!(
            inside = inside_rect.len(),
            "rectangle accepted without reshaping"
        );
        return Some(*rect);
    }

    let allowed = overlap_points(rect, boundary);
    if allowed.is_empty() {
        debug!("rectangle does not overlap the boundary");
        return None;
    }

    let anchor_index = match inside_rect.first() {
        Some(&index) => index,
        None => {
            let target = anchor_hint.unwrap_or_else(|| boundary.center());
            let closest = closest_corner_of_quad(target, corners);
            corners.iter().position(|&c| c == closest).unwrap_or(0)
        }
    };
    let anchor = corners[anchor_index];
    let (prev_anchor, next_anchor) = rect.neighbors(anchor_index);

    let edge1_far = farthest_point_on_line(&allowed, anchor, prev_anchor);
    let edge2_far = farthest_point_on_line(&allowed, anchor, next_anchor);
    let mirrored = anchor.rotate_about(edge1_far.midpoint(edge2_far), std::f64::consts::PI);

    debug!(
        %anchor,
        overlap_points = allowed.len(),
        "rectangle reshaped to fit boundary"
    );

    Some(Rectangle::new([anchor, edge2_far, mirrored, edge1_far]))
}

/// Vertices of the overlap region: edge intersections first, then the
/// boundary corners lying inside `rect`.
///
/// The order matters: farthest-point searches keep the first of equally
/// distant candidates.
fn overlap_points(rect: &Rectangle, boundary: &BoundaryPolygon) -> OverlapPoints {
    let mut points = OverlapPoints::new();

    for (r1, r2) in rect.edges() {
        for (b1, b2) in boundary.edges() {
            if let Some(point) = segment_intersection(r1, r2, b1, b2) {
                points.push(point);
            }
        }
    }

    points.extend(
        boundary
            .corners()
            .iter()
            .copied()
            .filter(|&corner| point_in_convex_quad(rect.as_ref(), corner)),
    );

    points
}
