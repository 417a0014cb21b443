//! Pure geometric primitives.
//!
//! Every function here is total except [`next_corner`] and [`prev_corner`],
//! which reject an empty corner list. Degenerate segments are tolerated and
//! handled explicitly.

use printarea_core::GeometryError;

use crate::vector::Vec2;

/// Projects `p` onto the segment `[a, b]`, clamped to the segment's ends.
///
/// A zero-length segment returns `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = (p - a).dot(ab) / len_sq;
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + ab * t
    }
}

/// Intersection point of segments `[p1, p2]` and `[q1, q2]`.
///
/// Returns `None` when either segment has zero length, when they are
/// parallel (collinear overlaps included), or when the intersection lies
/// outside either segment. Endpoints count as intersecting.
pub fn segment_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    let r = p2 - p1;
    let s = q2 - q1;
    if r.length_squared() == 0.0 || s.length_squared() == 0.0 {
        return None;
    }

    let denom = r.cross(s);
    if denom == 0.0 {
        return None;
    }

    let qp = q1 - p1;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// Tests whether `p` lies inside (or on) a convex quadrilateral.
///
/// Projects `p - quad[0]` onto the two edges leaving `quad[0]` (towards
/// `quad[1]` and `quad[3]`); both projections must fall within
/// `[0, edge_length²]`. Only meaningful for convex, non-self-intersecting
/// parallelograms such as rectangles and extent boxes. Returns `false` for
/// fewer than four corners.
pub fn point_in_convex_quad(quad: &[Vec2], p: Vec2) -> bool {
    if quad.len() < 4 {
        return false;
    }
    let origin = quad[0];
    let edge_a = quad[1] - origin;
    let edge_b = quad[3] - origin;
    let rel = p - origin;

    let proj_a = rel.dot(edge_a);
    let proj_b = rel.dot(edge_b);

    (0.0..=edge_a.length_squared()).contains(&proj_a)
        && (0.0..=edge_b.length_squared()).contains(&proj_b)
}

/// Projects every point of `points` onto `[l1, l2]` and returns the
/// projection lying farthest from `l1`.
///
/// The result always lies on the segment. Ties keep the first point found;
/// an empty slice returns `l1`.
pub fn farthest_point_on_line(points: &[Vec2], l1: Vec2, l2: Vec2) -> Vec2 {
    let mut farthest = l1;
    let mut max_distance = f64::NEG_INFINITY;

    for &point in points {
        let projected = closest_point_on_segment(point, l1, l2);
        let distance = projected.distance_to(l1);
        if distance > max_distance {
            max_distance = distance;
            farthest = projected;
        }
    }

    farthest
}

/// The corner of `quad` nearest to `point`; ties keep the first found.
///
/// An empty `quad` returns `point` itself.
pub fn closest_corner_of_quad(point: Vec2, quad: &[Vec2]) -> Vec2 {
    let mut closest = point;
    let mut min_distance = f64::INFINITY;

    for &corner in quad {
        let distance = corner.distance_to(point);
        if distance < min_distance {
            min_distance = distance;
            closest = corner;
        }
    }

    closest
}

/// Cyclic successor of `corner` in `quad`.
///
/// A corner that is not part of `quad` yields the first element.
pub fn next_corner(quad: &[Vec2], corner: Vec2) -> Result<Vec2, GeometryError> {
    let (first, _) = quad.split_first().ok_or_else(|| {
        GeometryError::invalid_input("cannot take the next corner of an empty sequence")
    })?;

    Ok(match quad.iter().position(|&c| c == corner) {
        Some(index) => quad[(index + 1) % quad.len()],
        None => *first,
    })
}

/// Cyclic predecessor of `corner` in `quad`.
///
/// A corner that is not part of `quad` yields the last element.
pub fn prev_corner(quad: &[Vec2], corner: Vec2) -> Result<Vec2, GeometryError> {
    let (last, _) = quad.split_last().ok_or_else(|| {
        GeometryError::invalid_input("cannot take the previous corner of an empty sequence")
    })?;

    Ok(match quad.iter().position(|&c| c == corner) {
        Some(index) => quad[(index + quad.len() - 1) % quad.len()],
        None => *last,
    })
}
