//! Corner canonicalization.
//!
//! The solver returns its rectangle starting at whichever corner it kept as
//! anchor. Canonicalization reads the corners off again so that slot 0 is the
//! semantic northwest corner of the reference rectangle.

use printarea_core::constants::CORNER_MATCH_TOLERANCE;
use printarea_core::GeometryError;
use smallvec::SmallVec;

use crate::primitives::{next_corner, prev_corner};
use crate::shapes::{Corner, Rectangle};

/// Reorders `rect` so its corners follow the canonical order of `reference`.
///
/// The candidate's first corner is located relative to the reference by
/// comparing its distance from the reference northwest corner with the
/// reference's own northwest–southwest, northwest–northeast and diagonal
/// lengths (a zero distance means it already is the northwest corner).
/// Northwest, northeast and southwest are then read off the candidate's
/// cyclic neighbours, and southeast is the northwest corner rotated π about
/// the centre (midpoint of northeast and southwest).
///
/// # Errors
///
/// [`GeometryError::AmbiguousCorners`] when the distance matches none of the
/// reference lengths.
pub fn canonicalize(rect: &Rectangle, reference: &Rectangle) -> Result<Rectangle, GeometryError> {
    let corners = rect.corners();
    let first = corners[0];
    let ref_nw = reference.north_west();

    let distance = first.distance_to(ref_nw);
    let tolerance = CORNER_MATCH_TOLERANCE * ref_nw.distance_to(reference.south_east()).max(1.0);

    let candidates: SmallVec<[Corner; 4]> = [
        (Corner::NorthWest, 0.0),
        (Corner::SouthWest, ref_nw.distance_to(reference.south_west())),
        (Corner::NorthEast, ref_nw.distance_to(reference.north_east())),
        (Corner::SouthEast, ref_nw.distance_to(reference.south_east())),
    ]
    .into_iter()
    .filter(|(_, length)| (distance - length).abs() <= tolerance)
    .map(|(corner, _)| corner)
    .collect();

    // Squares match two edge lengths; fall back to the nearest reference corner.
    let role = candidates
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = first.distance_to(reference.corner(*a));
            let db = first.distance_to(reference.corner(*b));
            da.total_cmp(&db)
        })
        .ok_or(GeometryError::AmbiguousCorners { distance })?;

    let (nw, ne, sw) = match role {
        Corner::NorthWest => {
            let nw = first;
            (nw, next_corner(corners, nw)?, prev_corner(corners, nw)?)
        }
        Corner::SouthWest => {
            let sw = first;
            let nw = next_corner(corners, sw)?;
            (nw, next_corner(corners, nw)?, sw)
        }
        Corner::NorthEast => {
            let ne = first;
            let nw = prev_corner(corners, ne)?;
            (nw, ne, prev_corner(corners, nw)?)
        }
        Corner::SouthEast => {
            let sw = next_corner(corners, first)?;
            let nw = next_corner(corners, sw)?;
            (nw, next_corner(corners, nw)?, sw)
        }
    };

    let se = nw.rotate_about(ne.midpoint(sw), std::f64::consts::PI);

    Ok(Rectangle::new([nw, ne, se, sw]))
}
