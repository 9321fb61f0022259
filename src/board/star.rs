//! Star shaped boards for Sternhalma style games
//!
//! A star board is a hexagonal map of radius `2 * inner_radius` with the
//! outer rings thinned down to six triangular points, one on each corner of
//! the inner hexagon. The inner radius fixes both the size of the central
//! playing field and the height of the points. Cells in the gaps between
//! points stay addressable in the backing grid but are skipped by every
//! traversal, so the board's cell set is a strict subset of the grid's.

use super::grid::{Entries, HexGrid};
use super::region::{self, REGION_COUNT};
use super::rings::{GridKeys, RingKeys};
use crate::error::{BoardError, Result, invalid_region};
use crate::geometry::Axial;

/// A hexagonal map bounded by a six pointed star.
#[derive(Debug, Clone)]
pub struct StarBoard<T> {
    grid: HexGrid<T>,
    inner_radius: i32,
}

impl<T> StarBoard<T> {
    /// Create an empty board with the given inner radius.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRadius`] if `inner_radius` is negative.
    pub fn new(inner_radius: i32) -> Result<Self> {
        if inner_radius < 0 {
            return Err(BoardError::InvalidRadius {
                radius: inner_radius,
            });
        }

        Ok(Self {
            grid: HexGrid::new(2 * inner_radius)?,
            inner_radius,
        })
    }

    /// Radius of the central hexagonal playing field.
    pub const fn inner_radius(&self) -> i32 {
        self.inner_radius
    }

    /// Radius of the backing grid, twice the inner radius.
    pub const fn radius(&self) -> i32 {
        self.grid.radius()
    }

    /// Read access to the backing grid, gap cells included.
    pub const fn grid(&self) -> &HexGrid<T> {
        &self.grid
    }

    /// Whether the coordinate is a cell of the star.
    pub const fn contains(&self, coordinate: Axial) -> bool {
        region::in_silhouette(coordinate, self.inner_radius)
    }

    /// Value stored at the coordinate, if any.
    ///
    /// Bounds follow the backing grid: gap cells between two points are
    /// addressable even though traversal never visits them.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is outside the
    /// backing grid.
    pub fn get(&self, coordinate: Axial) -> Result<Option<&T>> {
        self.grid.get(coordinate)
    }

    /// Mutable access to the value stored at the coordinate, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is outside the
    /// backing grid.
    pub fn get_mut(&mut self, coordinate: Axial) -> Result<Option<&mut T>> {
        self.grid.get_mut(coordinate)
    }

    /// Store a value at the coordinate, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is outside the
    /// backing grid.
    pub fn set(&mut self, coordinate: Axial, value: T) -> Result<Option<T>> {
        self.grid.set(coordinate, value)
    }

    /// Remove and return the value stored at the coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is outside the
    /// backing grid.
    pub fn take(&mut self, coordinate: Axial) -> Result<Option<T>> {
        self.grid.take(coordinate)
    }

    /// Board cells of the ring at distance `ring` from the centre.
    ///
    /// Rings up to the inner radius are complete hexagonal rings; past it
    /// only the cells inside a point survive, those whose smallest absolute
    /// component reaches `ring - inner_radius`.
    pub const fn ring_keys(&self, ring: i32) -> StarRingKeys {
        StarRingKeys {
            walk: RingKeys::new(ring),
            inner_radius: self.inner_radius,
        }
    }

    /// Every board coordinate, ring-major from the centre outwards.
    pub const fn keys(&self) -> StarKeys {
        StarKeys {
            walk: GridKeys::new(self.grid.radius()),
            inner_radius: self.inner_radius,
        }
    }

    /// Coordinate and value of every board cell, in canonical order.
    pub const fn entries(&self) -> Entries<'_, T, StarKeys> {
        Entries::new(self.keys(), &self.grid)
    }

    /// Point region holding the coordinate, `None` for the inner hexagon.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRegion`] if the coordinate is not a
    /// cell of the star.
    pub fn outer_region_id(&self, coordinate: Axial) -> Result<Option<usize>> {
        region::classify(coordinate, self.inner_radius)
    }

    /// Cells of point region `region`, row-major from the field corner.
    ///
    /// Each of the `inner_radius` rows starts one step further out along
    /// the region's row direction and is one cell shorter, for
    /// `inner_radius * (inner_radius + 1) / 2` cells in total.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRegion`] unless `region` is below
    /// [`REGION_COUNT`].
    pub fn outer_region_keys(&self, region: usize) -> Result<RegionKeys> {
        if region >= REGION_COUNT {
            return Err(invalid_region(format!(
                "region index {region} is out of range"
            )));
        }

        let (corner, delta_row, delta_column) = region::frame(region, self.inner_radius);
        Ok(RegionKeys {
            corner,
            delta_row,
            delta_column,
            inner_radius: self.inner_radius,
            row: 1,
            column: 0,
        })
    }
}

/// Iterator over one ring of a star board, skipping gap cells.
#[derive(Debug, Clone)]
pub struct StarRingKeys {
    walk: RingKeys,
    inner_radius: i32,
}

impl Iterator for StarRingKeys {
    type Item = Axial;

    fn next(&mut self) -> Option<Axial> {
        loop {
            let key = self.walk.next()?;
            if region::in_silhouette(key, self.inner_radius) {
                return Some(key);
            }
        }
    }
}

/// Ring-major iterator over every cell of a star board.
#[derive(Debug, Clone)]
pub struct StarKeys {
    walk: GridKeys,
    inner_radius: i32,
}

impl Iterator for StarKeys {
    type Item = Axial;

    fn next(&mut self) -> Option<Axial> {
        loop {
            let key = self.walk.next()?;
            if region::in_silhouette(key, self.inner_radius) {
                return Some(key);
            }
        }
    }
}

/// Row-major iterator over the cells of one triangular point region.
#[derive(Debug, Clone)]
pub struct RegionKeys {
    corner: Axial,
    delta_row: Axial,
    delta_column: Axial,
    inner_radius: i32,
    row: i32,
    column: i32,
}

impl Iterator for RegionKeys {
    type Item = Axial;

    fn next(&mut self) -> Option<Axial> {
        if self.row > self.inner_radius {
            return None;
        }

        let key = self.corner + self.delta_row * self.row + self.delta_column * self.column;

        self.column += 1;
        if self.column > self.inner_radius - self.row {
            self.column = 0;
            self.row += 1;
        }

        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CENTRE;
    use std::collections::HashSet;

    #[test]
    fn test_negative_inner_radius_is_rejected() {
        assert_eq!(
            StarBoard::<u8>::new(-1).err(),
            Some(BoardError::InvalidRadius { radius: -1 })
        );
    }

    #[test]
    fn test_inner_rings_are_complete_and_outer_rings_thin_out() {
        let board = StarBoard::<u8>::new(2).unwrap();

        assert_eq!(board.ring_keys(0).count(), 1);
        assert_eq!(board.ring_keys(1).count(), 6);
        assert_eq!(board.ring_keys(2).count(), 12);
        assert_eq!(board.ring_keys(3).count(), 12);
        assert_eq!(board.ring_keys(4).count(), 6);
        assert_eq!(board.ring_keys(5).count(), 0);
    }

    #[test]
    fn test_cell_count_is_hexagon_plus_six_triangles() {
        // 19 inner cells plus 6 points of 3 cells each.
        let board = StarBoard::<u8>::new(2).unwrap();
        assert_eq!(board.keys().count(), 37);

        // The classic Sternhalma field: 61 inner cells, 10 per point.
        let classic = StarBoard::<u8>::new(4).unwrap();
        assert_eq!(classic.keys().count(), 121);
    }

    #[test]
    fn test_every_board_cell_is_valid_on_the_backing_grid() {
        let board = StarBoard::<u8>::new(3).unwrap();
        for ring in 0..=board.radius() {
            for key in board.ring_keys(ring) {
                assert!(board.grid().is_valid(key), "{key} escaped the grid");
                assert_eq!(key.length(), ring);
            }
        }
    }

    #[test]
    fn test_board_keys_are_the_filtered_grid_keys() {
        let board = StarBoard::<u8>::new(2).unwrap();
        let star_keys: HashSet<Axial> = board.keys().collect();
        let grid_keys: HashSet<Axial> = board.grid().keys().collect();

        assert!(star_keys.is_subset(&grid_keys));
        assert!(star_keys.len() < grid_keys.len());

        for key in grid_keys {
            assert_eq!(star_keys.contains(&key), board.contains(key));
        }
    }

    #[test]
    fn test_gap_cells_are_addressable_but_never_visited() {
        let mut board = StarBoard::new(2).unwrap();
        let gap = Axial::new(3, 0);

        assert!(!board.contains(gap));
        assert_eq!(board.set(gap, 1_u8), Ok(None));
        assert_eq!(board.get(gap), Ok(Some(&1)));
        assert!(board.keys().all(|key| key != gap));
        assert!(board.entries().all(|(key, _)| key != gap));
    }

    #[test]
    fn test_entries_pair_board_cells_with_their_values() {
        let mut board = StarBoard::new(1).unwrap();
        let tip = Axial::new(1, -2);
        board.set(tip, 'a').unwrap();
        board.set(CENTRE, 'b').unwrap();

        let found: Vec<(Axial, Option<&char>)> = board
            .entries()
            .filter(|(_, value)| value.is_some())
            .collect();
        assert_eq!(found, vec![(CENTRE, Some(&'b')), (tip, Some(&'a'))]);
    }

    #[test]
    fn test_region_sizes_are_triangular_numbers() {
        for inner_radius in [1, 2, 4] {
            let board = StarBoard::<u8>::new(inner_radius).unwrap();
            let expected = (inner_radius * (inner_radius + 1) / 2) as usize;

            for region in 0..REGION_COUNT {
                let keys: Vec<Axial> = board.outer_region_keys(region).unwrap().collect();
                assert_eq!(keys.len(), expected, "region {region} miscounted");

                let unique: HashSet<Axial> = keys.iter().copied().collect();
                assert_eq!(unique.len(), keys.len());
            }
        }
    }

    #[test]
    fn test_region_keys_classify_back_to_their_region() {
        let board = StarBoard::<u8>::new(3).unwrap();
        for region in 0..REGION_COUNT {
            for key in board.outer_region_keys(region).unwrap() {
                assert_eq!(
                    board.outer_region_id(key),
                    Ok(Some(region)),
                    "cell {key} strayed from region {region}"
                );
            }
        }
    }

    #[test]
    fn test_regions_partition_the_cells_beyond_the_inner_hexagon() {
        let board = StarBoard::<u8>::new(3).unwrap();

        let mut from_regions = HashSet::new();
        for region in 0..REGION_COUNT {
            from_regions.extend(board.outer_region_keys(region).unwrap());
        }

        let outer: HashSet<Axial> = board
            .keys()
            .filter(|key| key.length() > board.inner_radius())
            .collect();
        assert_eq!(from_regions, outer);
    }

    #[test]
    fn test_region_queries_reject_out_of_domain_input() {
        let board = StarBoard::<u8>::new(2).unwrap();

        assert!(board.outer_region_keys(REGION_COUNT).is_err());
        assert!(board.outer_region_id(Axial::new(3, 0)).is_err());
        assert!(board.outer_region_id(Axial::new(9, -9)).is_err());
        assert_eq!(board.outer_region_id(CENTRE), Ok(None));
    }

    #[test]
    fn test_restarted_traversals_repeat_the_same_order() {
        let board = StarBoard::<u8>::new(2).unwrap();
        let first: Vec<Axial> = board.keys().collect();
        let second: Vec<Axial> = board.keys().collect();
        assert_eq!(first, second);
    }
}
