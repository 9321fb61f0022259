//! Hexagonal grid and star board primitives for Sternhalma style games
//!
//! The crate models board geometry only: an integer axial coordinate system
//! with exact rotation, a dense hexagonal map with O(1) cell access and a
//! canonical ring-by-ring traversal, and the six pointed star silhouette
//! used by Chinese checkers. Piece rules, rendering and input stay with the
//! caller, which consumes the boards through cell access and iteration.

#![forbid(unsafe_code)]

/// Hexagonal maps and star boards with their traversal and regions
pub mod board;
/// Error types shared by all board operations
pub mod error;
/// Axial coordinates, directions and their arithmetic
pub mod geometry;

pub use board::{HexGrid, REGION_COUNT, StarBoard};
pub use error::{BoardError, Result};
pub use geometry::{Axial, CENTRE, NEIGHBOURS};
