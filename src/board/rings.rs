//! Canonical ring-by-ring traversal of hexagonal grids
//!
//! A grid is enumerated ring-major: ring 0 is the centre alone, and ring k
//! holds the 6k cells at distance k. Within a ring the walk starts on the
//! corner `NEIGHBOURS[4] * k` and crosses the six sides in direction-table
//! order, advancing k steps along direction i on side i and yielding each
//! cell before stepping off it. Every cell of the ring appears exactly once,
//! and the order is stable across calls: the iterators hold no references
//! and recompute the walk from scratch each time they are created.

use crate::geometry::{Axial, CENTRE, NEIGHBOUR_COUNT, neighbour};

/// Restartable walk over the cells of a single ring.
///
/// Yields one coordinate for ring 0 and `6 * ring` coordinates of length
/// `ring` otherwise, independent of any particular grid.
#[derive(Debug, Clone)]
pub struct RingKeys {
    ring: i32,
    side: usize,
    step: i32,
    next: Option<Axial>,
}

impl RingKeys {
    /// Walk of the ring at distance `ring` from the centre.
    ///
    /// Negative rings hold no cells and yield nothing.
    pub const fn new(ring: i32) -> Self {
        let corner = neighbour(4);
        let next = if ring < 0 {
            None
        } else if ring == 0 {
            Some(CENTRE)
        } else {
            Some(Axial::new(corner.q * ring, corner.r * ring))
        };

        Self {
            ring,
            side: 0,
            step: 0,
            next,
        }
    }
}

impl Iterator for RingKeys {
    type Item = Axial;

    fn next(&mut self) -> Option<Axial> {
        let current = self.next.take()?;

        if self.ring > 0 {
            // The successor always continues along the side the current
            // cell was reached on; corners are turned after the full side.
            let successor = current + neighbour(self.side);
            self.step += 1;
            if self.step == self.ring {
                self.step = 0;
                self.side += 1;
            }
            if self.side < NEIGHBOUR_COUNT {
                self.next = Some(successor);
            }
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            None => 0,
            Some(_) if self.ring == 0 => 1,
            Some(_) => {
                (NEIGHBOUR_COUNT - self.side) * self.ring as usize - self.step as usize
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingKeys {}

/// Ring-major walk over every cell of a hexagonal grid.
///
/// Concatenates [`RingKeys`] for rings 0 through `radius`; this is the
/// canonical enumeration order the whole crate shares.
#[derive(Debug, Clone)]
pub struct GridKeys {
    radius: i32,
    ring: i32,
    walk: RingKeys,
}

impl GridKeys {
    /// Enumerate all rings of a grid of the given radius.
    ///
    /// A negative radius holds no rings and yields nothing.
    pub const fn new(radius: i32) -> Self {
        let first = if radius < 0 { -1 } else { 0 };
        Self {
            radius,
            ring: 0,
            walk: RingKeys::new(first),
        }
    }
}

impl Iterator for GridKeys {
    type Item = Axial;

    fn next(&mut self) -> Option<Axial> {
        loop {
            if let Some(key) = self.walk.next() {
                return Some(key);
            }

            self.ring += 1;
            if self.ring > self.radius {
                return None;
            }
            self.walk = RingKeys::new(self.ring);
        }
    }
}
