//! Hexagonal maps and the star shaped boards built on them
//!
//! This module contains the board containers and their traversal:
//! - Dense hexagonal grids with checked cell access
//! - The canonical ring-by-ring enumeration order
//! - Star silhouettes with their six point regions

/// Dense hexagonal grid container
pub mod grid;
/// Sign-pattern classification of point regions
pub mod region;
/// Canonical ring-by-ring traversal order
pub mod rings;
/// Star silhouette boards
pub mod star;

pub use grid::HexGrid;
pub use region::REGION_COUNT;
pub use star::StarBoard;
