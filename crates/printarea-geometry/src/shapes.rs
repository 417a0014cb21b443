//! Rectangle, boundary and extent types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::point_in_convex_quad;
use crate::transform::rect_angle;
use crate::vector::Vec2;

/// Semantic corner role of a rectangle, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];

    /// Position of the corner in the canonical sequence (0..=3).
    pub fn index(self) -> usize {
        match self {
            Corner::NorthWest => 0,
            Corner::NorthEast => 1,
            Corner::SouthEast => 2,
            Corner::SouthWest => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Corner> {
        Corner::ALL.get(index).copied()
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::NorthWest => Corner::SouthEast,
            Corner::NorthEast => Corner::SouthWest,
            Corner::SouthEast => Corner::NorthWest,
            Corner::SouthWest => Corner::NorthEast,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NorthWest => write!(f, "northwest"),
            Self::NorthEast => write!(f, "northeast"),
            Self::SouthEast => write!(f, "southeast"),
            Self::SouthWest => write!(f, "southwest"),
        }
    }
}

/// A possibly rotated rectangle.
///
/// Corners are stored as northwest, northeast, southeast, southwest. The
/// order is semantic: translating, rotating or scaling keeps each corner in
/// its slot even when "northwest" no longer lies top-left on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rectangle {
    corners: [Vec2; 4],
}

impl Rectangle {
    pub fn new(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// Builds a rectangle of `width` × `height` centred on `center`, rotated
    /// clockwise by `angle` radians.
    pub fn from_center(center: Vec2, width: f64, height: f64, angle: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let corners = [
            Vec2::new(-hw, hh),
            Vec2::new(hw, hh),
            Vec2::new(hw, -hh),
            Vec2::new(-hw, -hh),
        ]
        .map(|offset| center + offset.rotate(-angle));
        Self { corners }
    }

    pub fn corners(&self) -> &[Vec2; 4] {
        &self.corners
    }

    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.corners[corner.index()]
    }

    pub fn north_west(&self) -> Vec2 {
        self.corners[0]
    }

    pub fn north_east(&self) -> Vec2 {
        self.corners[1]
    }

    pub fn south_east(&self) -> Vec2 {
        self.corners[2]
    }

    pub fn south_west(&self) -> Vec2 {
        self.corners[3]
    }

    /// Midpoint of the northwest–southeast diagonal.
    pub fn center(&self) -> Vec2 {
        self.north_west().midpoint(self.south_east())
    }

    /// Length of the northwest–northeast edge.
    pub fn width(&self) -> f64 {
        self.north_west().distance_to(self.north_east())
    }

    /// Length of the northwest–southwest edge.
    pub fn height(&self) -> f64 {
        self.north_west().distance_to(self.south_west())
    }

    /// Clockwise rotation from north derived from the corner geometry.
    pub fn angle(&self) -> f64 {
        rect_angle(self)
    }

    /// Corners adjacent to the corner at `index`, as `(previous, next)`.
    pub fn neighbors(&self, index: usize) -> (Vec2, Vec2) {
        let index = index % 4;
        (self.corners[(index + 3) % 4], self.corners[(index + 1) % 4])
    }

    /// The four edges, each running from a corner to its successor.
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        std::array::from_fn(|i| (self.corners[i], self.corners[(i + 1) % 4]))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_convex_quad(&self.corners, point)
    }

    pub fn translate(&mut self, delta: Vec2) {
        for corner in &mut self.corners {
            *corner += delta;
        }
    }

    /// Rotates every corner counter-clockwise by `angle` around `center`.
    pub fn rotate_about(&mut self, center: Vec2, angle: f64) {
        for corner in &mut self.corners {
            *corner = corner.rotate_about(center, angle);
        }
    }

    pub fn approx_eq(&self, other: &Rectangle, epsilon: f64) -> bool {
        self.corners
            .iter()
            .zip(other.corners.iter())
            .all(|(a, b)| a.approx_eq(*b, epsilon))
    }

    pub fn to_array(&self) -> [[f64; 2]; 4] {
        self.corners.map(<[f64; 2]>::from)
    }
}

impl From<[Vec2; 4]> for Rectangle {
    fn from(corners: [Vec2; 4]) -> Self {
        Self::new(corners)
    }
}

impl From<[[f64; 2]; 4]> for Rectangle {
    fn from(corners: [[f64; 2]; 4]) -> Self {
        Self::new(corners.map(Vec2::from))
    }
}

impl AsRef<[Vec2]> for Rectangle {
    fn as_ref(&self) -> &[Vec2] {
        &self.corners
    }
}

/// An axis-aligned overlay extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest extent covering both `self` and `other`.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// The convex region the print rectangle must stay within.
///
/// Four corners, treated as read-only; a new selection of overlays replaces
/// the whole polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPolygon {
    corners: [Vec2; 4],
}

impl BoundaryPolygon {
    pub fn new(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// Builds the boundary covering the union of `extents`.
    ///
    /// Corners come out as northwest, northeast, southeast, southwest.
    /// Returns `None` when no extent is given.
    pub fn from_extents<'a, I>(extents: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Extent>,
    {
        let union = extents
            .into_iter()
            .copied()
            .reduce(|acc, extent| acc.union(&extent))?;
        Some(Self::from(union))
    }

    pub fn corners(&self) -> &[Vec2; 4] {
        &self.corners
    }

    /// Midpoint of the first/third corner diagonal.
    pub fn center(&self) -> Vec2 {
        self.corners[0].midpoint(self.corners[2])
    }

    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        std::array::from_fn(|i| (self.corners[i], self.corners[(i + 1) % 4]))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_convex_quad(&self.corners, point)
    }
}

impl From<Extent> for BoundaryPolygon {
    fn from(extent: Extent) -> Self {
        Self::new([
            Vec2::new(extent.min_x, extent.max_y),
            Vec2::new(extent.max_x, extent.max_y),
            Vec2::new(extent.max_x, extent.min_y),
            Vec2::new(extent.min_x, extent.min_y),
        ])
    }
}

impl From<[Vec2; 4]> for BoundaryPolygon {
    fn from(corners: [Vec2; 4]) -> Self {
        Self::new(corners)
    }
}

impl From<[[f64; 2]; 4]> for BoundaryPolygon {
    fn from(corners: [[f64; 2]; 4]) -> Self {
        Self::new(corners.map(Vec2::from))
    }
}

impl AsRef<[Vec2]> for BoundaryPolygon {
    fn as_ref(&self) -> &[Vec2] {
        &self.corners
    }
}
