//! Integer coordinate algebra for hexagonal grids
//!
//! This module contains the geometric vocabulary the boards are built from:
//! - Axial coordinates with exact arithmetic and rotation
//! - The ordered table of unit directions between neighbouring cells

/// The axial coordinate type and its arithmetic
pub mod axial;
/// Ordered unit directions between neighbouring cells
pub mod direction;

pub use axial::{Axial, CENTRE};
pub use direction::{NEIGHBOUR_COUNT, NEIGHBOURS, neighbour};
