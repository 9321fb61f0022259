//! Sign-pattern classification of star board cells into point regions
//!
//! Beyond the inner hexagon, every cell of a triangular point shares the
//! same pattern of component signs: walking out along one point keeps the
//! same axes positive. Packing "is the component positive" for (q, r, s)
//! into three bits therefore identifies the point. The constraint
//! q + r + s = 0 rules out the all-positive and all-nonpositive patterns
//! for any cell beyond the centre, which leaves exactly six realizable
//! keys, one per point.

use crate::error::{Result, invalid_region};
use crate::geometry::{Axial, neighbour};

/// Number of triangular point regions on a star board
pub const REGION_COUNT: usize = 6;

/// Sign-pattern key of a coordinate, `4·[q>0] + 2·[r>0] + 1·[s>0]`.
const fn sign_key(coordinate: Axial) -> usize {
    let q = (coordinate.q > 0) as usize;
    let r = (coordinate.r > 0) as usize;
    let s = (coordinate.s() > 0) as usize;
    (q << 2) | (r << 1) | s
}

/// Region id for a sign-pattern key.
///
/// Keys 0b000 and 0b111 are unreachable for cells beyond the centre and map
/// to `None` so callers can fail defensively instead of trusting that.
const fn region_for_key(key: usize) -> Option<usize> {
    match key {
        0b101 => Some(0),
        0b100 => Some(1),
        0b110 => Some(2),
        0b010 => Some(3),
        0b011 => Some(4),
        0b001 => Some(5),
        _ => None,
    }
}

/// Smallest absolute component of the (q, r, s) triple.
///
/// Measures how far a cell sits from the nearest primary axis: cells in the
/// gaps between two points hug an axis and score low, cells inside a point
/// do not.
pub(crate) const fn min_abs_axis(coordinate: Axial) -> i32 {
    let q = coordinate.q.abs();
    let r = coordinate.r.abs();
    let s = coordinate.s().abs();
    let smaller = if q < r { q } else { r };
    if smaller < s { smaller } else { s }
}

/// Whether the coordinate lies on the star silhouette.
///
/// The silhouette is the inner hexagon plus the six triangles on its
/// corners: a cell on ring `k > inner_radius` belongs to a triangle exactly
/// when its smallest absolute component reaches `k - inner_radius`, the
/// distance the triangle has narrowed by at that ring.
pub(crate) const fn in_silhouette(coordinate: Axial, inner_radius: i32) -> bool {
    let length = coordinate.length();
    if length <= inner_radius {
        return true;
    }
    length <= 2 * inner_radius && min_abs_axis(coordinate) >= length - inner_radius
}

/// Point region holding a star board cell, `None` for the inner hexagon.
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidRegion`] for coordinates outside the
/// star silhouette, whether beyond the outermost ring or in a gap between
/// two points.
pub fn classify(coordinate: Axial, inner_radius: i32) -> Result<Option<usize>> {
    if !in_silhouette(coordinate, inner_radius) {
        return Err(invalid_region(format!(
            "coordinate {coordinate} is not a cell of the star with inner radius {inner_radius}"
        )));
    }

    if coordinate.length() <= inner_radius {
        return Ok(None);
    }

    let region = region_for_key(sign_key(coordinate)).ok_or_else(|| {
        invalid_region(format!(
            "coordinate {coordinate} has no realizable sign pattern"
        ))
    })?;
    Ok(Some(region))
}

/// Corner cell and row/column step directions of a point region.
///
/// The triangle of region `id` hangs off the inner hexagon corner
/// `neighbour(4 + id) * inner_radius`; its rows run along
/// `neighbour(4 + id + 1)` and its columns along `neighbour(4 + id + 2)`.
pub(crate) fn frame(region: usize, inner_radius: i32) -> (Axial, Axial, Axial) {
    let corner = neighbour(4 + region) * inner_radius;
    (corner, neighbour(5 + region), neighbour(6 + region))
}
