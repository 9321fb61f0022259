//! The six unit directions between neighbouring hexagonal cells

use super::axial::Axial;

/// Number of neighbouring cells around a hexagon
pub const NEIGHBOUR_COUNT: usize = 6;

/// Direction to a neighbouring cell, wrapping the index modulo six.
///
/// Region frames are laid out with offsets such as `4 + id + 1`, so lookups
/// wrap here instead of every call site reducing its own index.
pub const fn neighbour(index: usize) -> Axial {
    match index % NEIGHBOUR_COUNT {
        0 => Axial::new(1, 0),
        1 => Axial::new(0, 1),
        2 => Axial::new(-1, 1),
        3 => Axial::new(-1, 0),
        4 => Axial::new(0, -1),
        _ => Axial::new(1, -1),
    }
}

/// Unit vectors to the six neighbouring cells.
///
/// Ordered so that each entry is the previous one rotated by a single 60
/// degree step; ring walks rely on this to turn exactly one corner per side.
/// Entry 4, (0, -1), is the corner where ring traversal starts.
pub const NEIGHBOURS: [Axial; NEIGHBOUR_COUNT] = [
    neighbour(0),
    neighbour(1),
    neighbour(2),
    neighbour(3),
    neighbour(4),
    neighbour(5),
];
