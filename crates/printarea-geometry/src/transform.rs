//! Affine helpers for scaling under rotation and handle placement.
//!
//! All angles are radians measured clockwise from north.

use nalgebra::{Matrix3, Point2, Rotation2, Vector2};
use printarea_core::constants::{MIN_SCALE_RATIO, ROTATE_HANDLE_OFFSET_PX};

use crate::shapes::Rectangle;
use crate::vector::Vec2;

/// Scales `coords` by `(scale_x, scale_y)` in the rectangle's own frame,
/// keeping `anchor` fixed.
///
/// The composed transform moves `anchor` to the origin, un-rotates by
/// `angle`, scales, rotates back and translates back. Every corner goes
/// through the same matrix.
pub fn scale_rect(
    coords: &Rectangle,
    anchor: Vec2,
    angle: f64,
    scale_x: f64,
    scale_y: f64,
) -> Rectangle {
    let to_origin = Matrix3::new_translation(&-Vector2::from(anchor));
    let unrotate = Rotation2::new(angle).to_homogeneous();
    let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(scale_x, scale_y));
    let rotate = Rotation2::new(-angle).to_homogeneous();
    let back = Matrix3::new_translation(&Vector2::from(anchor));

    let transform = back * rotate * scale * unrotate * to_origin;

    Rectangle::new(
        coords
            .corners()
            .map(|corner| Vec2::from(transform.transform_point(&Point2::from(corner)))),
    )
}

/// Scale factors for a Scale gesture, floored at [`MIN_SCALE_RATIO`].
///
/// See [`scale_ratio_with_min`].
pub fn scale_ratio(
    start: Vec2,
    point: Vec2,
    angle: f64,
    center: Vec2,
    width: f64,
    height: f64,
) -> (f64, f64) {
    scale_ratio_with_min(start, point, angle, center, width, height, MIN_SCALE_RATIO)
}

/// Derives `(scale_x, scale_y)` from the pointer travel `start → point`.
///
/// The travel is measured in the rectangle's local frame. Its sign follows
/// the side of `center` the dragged corner sits on, so pulling a corner away
/// from the fixed opposite corner grows the rectangle and pushing it back
/// shrinks it. Both ratios are floored at `min_ratio`; a degenerate width or
/// height leaves that axis unscaled.
pub fn scale_ratio_with_min(
    start: Vec2,
    point: Vec2,
    angle: f64,
    center: Vec2,
    width: f64,
    height: f64,
    min_ratio: f64,
) -> (f64, f64) {
    let travel = (point - start).rotate(angle);
    let side = (start - center).rotate(angle);

    let sign_x = if side.x < 0.0 { -1.0 } else { 1.0 };
    let sign_y = if side.y < 0.0 { -1.0 } else { 1.0 };

    let ratio = |extent: f64, delta: f64| {
        if extent > 0.0 {
            ((extent + delta) / extent).max(min_ratio)
        } else {
            1.0
        }
    };

    (
        ratio(width, sign_x * travel.x),
        ratio(height, sign_y * travel.y),
    )
}

/// Position of the rotate handle using the default pixel offset.
///
/// See [`rotate_point_from_rect_with_offset`].
pub fn rotate_point_from_rect(coords: &Rectangle, resolution: f64, angle: Option<f64>) -> Vec2 {
    rotate_point_from_rect_with_offset(coords, resolution, angle, ROTATE_HANDLE_OFFSET_PX)
}

/// Places the rotate handle above the middle of the rectangle's top edge.
///
/// The rectangle is un-rotated about its centre, the handle is put
/// `offset_px * resolution` map units north of the top-edge midpoint, and the
/// result is rotated back by `angle`. Scaling the offset by the view
/// resolution keeps the handle at a constant on-screen distance at any zoom.
/// When `angle` is `None` it is derived from the rectangle's geometry.
pub fn rotate_point_from_rect_with_offset(
    coords: &Rectangle,
    resolution: f64,
    angle: Option<f64>,
    offset_px: f64,
) -> Vec2 {
    let angle = angle.unwrap_or_else(|| rect_angle(coords));
    let center = coords.center();

    let nw = coords.north_west().rotate_about(center, angle);
    let ne = coords.north_east().rotate_about(center, angle);
    let handle = nw.midpoint(ne) + Vec2::new(0.0, offset_px * resolution);

    handle.rotate_about(center, -angle)
}

/// Signed angle of `point` around `center`, measured clockwise from north.
///
/// Directly north is `0`, east is `π/2`, west is `-π/2`; the range is
/// `(-π, π]`.
pub fn relative_angle(point: Vec2, center: Vec2) -> f64 {
    let v = point - center;
    v.cross(Vec2::NORTH).atan2(v.dot(Vec2::NORTH))
}

/// Rotation of a rectangle read from its geometry: the relative angle of the
/// top-edge midpoint around the centre.
pub fn rect_angle(coords: &Rectangle) -> f64 {
    relative_angle(
        coords.north_west().midpoint(coords.north_east()),
        coords.center(),
    )
}
