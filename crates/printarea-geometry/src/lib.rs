//! # PrintArea Geometry
//!
//! Computational-geometry core for the interactive print-area rectangle.
//!
//! ## Components
//!
//! - **Vector**: [`Vec2`] value type with the usual 2D operations
//! - **Primitives**: segment intersection, closest point, point-in-quad,
//!   farthest point along an edge, corner neighbours
//! - **Shapes**: [`Rectangle`] (corner order NW, NE, SE, SW), [`BoundaryPolygon`],
//!   [`Extent`]
//! - **Solver**: [`max_allowed_rect`] fits a rectangle against a boundary
//! - **Canonicalizer**: [`canonicalize`] restores the semantic corner order
//! - **Transform**: scaling under rotation and handle placement helpers
//!
//! ## Angles
//!
//! Angles are radians measured clockwise from north, so an unrotated
//! rectangle reads as `0.0`. [`Vec2::rotate_about`] follows the mathematical
//! (counter-clockwise) convention; callers negate when applying a
//! clockwise angle.
//!
//! ## Usage
//!
//! ```rust
//! use printarea_geometry::{max_allowed_rect, BoundaryPolygon, Rectangle};
//!
//! let boundary = BoundaryPolygon::from([[0.0, 8.0], [16.0, 8.0], [16.0, -12.0], [0.0, -12.0]]);
//! let rect = Rectangle::from([[5.0, 5.0], [7.0, 5.0], [7.0, 7.0], [5.0, 7.0]]);
//!
//! assert_eq!(max_allowed_rect(&rect, &boundary, None), Some(rect));
//! ```

pub mod canonical;
pub mod primitives;
pub mod shapes;
pub mod solver;
pub mod transform;
pub mod vector;

pub use canonical::canonicalize;
pub use primitives::{
    closest_corner_of_quad, closest_point_on_segment, farthest_point_on_line, next_corner,
    point_in_convex_quad, prev_corner, segment_intersection,
};
pub use shapes::{BoundaryPolygon, Corner, Extent, Rectangle};
pub use solver::max_allowed_rect;
pub use transform::{
    rect_angle, relative_angle, rotate_point_from_rect, rotate_point_from_rect_with_offset,
    scale_ratio, scale_ratio_with_min, scale_rect,
};
pub use vector::Vec2;
