//! Dense storage for hexagonal maps

use ndarray::Array2;

use super::rings::{GridKeys, RingKeys};
use crate::error::{BoardError, Result};
use crate::geometry::Axial;

/// A hexagonal map with O(1) cell access.
///
/// The map is a set of concentric rings around a centre cell, defined
/// uniquely by the index of its outermost ring. Cells hold optional values
/// and live in a dense (2·radius + 1)² array, addressed by offsetting q and
/// r by the radius; the corners of that array fall outside every ring, which
/// trades about a quarter of the space for constant-time access.
#[derive(Debug, Clone)]
pub struct HexGrid<T> {
    cells: Array2<Option<T>>,
    radius: i32,
}

impl<T> HexGrid<T> {
    /// Create an empty map with the given number of rings around the centre.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRadius`] if `radius` is negative.
    pub fn new(radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(BoardError::InvalidRadius { radius });
        }

        let side = 2 * radius as usize + 1;
        Ok(Self {
            cells: Array2::default((side, side)),
            radius,
        })
    }

    /// Index of the outermost ring.
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Whether the coordinate addresses a cell of this map.
    pub const fn is_valid(&self, coordinate: Axial) -> bool {
        coordinate.length() <= self.radius
    }

    /// Backing array index for a coordinate, rejecting cells off the map.
    const fn storage_index(&self, coordinate: Axial) -> Result<[usize; 2]> {
        if !self.is_valid(coordinate) {
            return Err(BoardError::OutOfBounds {
                coordinate,
                radius: self.radius,
            });
        }

        // Validity bounds both offsets to 0..=2*radius.
        Ok([
            (coordinate.q + self.radius) as usize,
            (coordinate.r + self.radius) as usize,
        ])
    }

    fn cell(&self, coordinate: Axial) -> Result<&Option<T>> {
        let radius = self.radius;
        let index = self.storage_index(coordinate)?;
        self.cells
            .get(index)
            .ok_or(BoardError::OutOfBounds { coordinate, radius })
    }

    fn cell_mut(&mut self, coordinate: Axial) -> Result<&mut Option<T>> {
        let radius = self.radius;
        let index = self.storage_index(coordinate)?;
        self.cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { coordinate, radius })
    }

    /// Value stored at the coordinate, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is off the map.
    pub fn get(&self, coordinate: Axial) -> Result<Option<&T>> {
        Ok(self.cell(coordinate)?.as_ref())
    }

    /// Mutable access to the value stored at the coordinate, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is off the map.
    pub fn get_mut(&mut self, coordinate: Axial) -> Result<Option<&mut T>> {
        Ok(self.cell_mut(coordinate)?.as_mut())
    }

    /// Store a value at the coordinate, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is off the map.
    pub fn set(&mut self, coordinate: Axial, value: T) -> Result<Option<T>> {
        Ok(self.cell_mut(coordinate)?.replace(value))
    }

    /// Remove and return the value stored at the coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinate is off the map.
    pub fn take(&mut self, coordinate: Axial) -> Result<Option<T>> {
        Ok(self.cell_mut(coordinate)?.take())
    }

    /// Cells of the ring at distance `ring` from the centre.
    ///
    /// The walk is pure geometry: it is restartable, yields `6 * ring`
    /// coordinates (one for ring 0), and does not check that the ring lies
    /// within this map.
    // Lives on the grid so callers find it next to keys(); the walk itself
    // needs nothing from the instance.
    #[allow(clippy::unused_self)]
    pub const fn ring_keys(&self, ring: i32) -> RingKeys {
        RingKeys::new(ring)
    }

    /// Every cell coordinate, ring-major from the centre outwards.
    pub const fn keys(&self) -> GridKeys {
        GridKeys::new(self.radius)
    }

    /// Coordinate and value of every cell, in canonical traversal order.
    pub const fn entries(&self) -> Entries<'_, T, GridKeys> {
        Entries::new(self.keys(), self)
    }

    /// Infallible lookup for keys produced by the map's own traversal.
    pub(crate) fn stored(&self, coordinate: Axial) -> Option<&T> {
        self.cell(coordinate).ok()?.as_ref()
    }
}

/// Iterator over (coordinate, value) pairs of a grid.
///
/// Follows whatever key order the wrapped walk produces; both full grids and
/// star boards pair their keys with cell values through this type.
#[derive(Debug)]
pub struct Entries<'a, T, K> {
    keys: K,
    grid: &'a HexGrid<T>,
}

impl<'a, T, K> Entries<'a, T, K> {
    pub(crate) const fn new(keys: K, grid: &'a HexGrid<T>) -> Self {
        Self { keys, grid }
    }
}

impl<'a, T, K> Iterator for Entries<'a, T, K>
where
    K: Iterator<Item = Axial>,
{
    type Item = (Axial, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some((key, self.grid.stored(key)))
    }
}
