//! Axial coordinates on a hexagonal grid
//!
//! Positions are addressed by projecting three primary axes (q, r, s) onto a
//! plane such that q + r + s = 0, keeping the axes 120 degrees apart. Only q
//! and r are stored; s is always derived, so the invariant cannot be broken
//! by construction or arithmetic. All operations are closed-form integer
//! computations, including rotation by multiples of 60 degrees.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A position on a hexagonal grid, in axial coordinates.
///
/// See [the redblobgames reference](https://www.redblobgames.com/grids/hexagons/#coordinates)
/// for the coordinate model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Axial {
    /// First primary axis
    pub q: i32,
    /// Second primary axis
    pub r: i32,
}

/// The origin of the coordinate system
pub const CENTRE: Axial = Axial::new(0, 0);

impl Axial {
    /// Create a coordinate from its two stored components
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived third axis, always `-(q + r)`
    pub const fn s(self) -> i32 {
        -(self.q + self.r)
    }

    /// Distance from the origin, in grid steps.
    ///
    /// Equals the largest absolute component of the (q, r, s) triple, which
    /// is also the index of the ring the coordinate lies on.
    pub const fn length(self) -> i32 {
        let q = self.q.abs();
        let r = self.r.abs();
        let s = self.s().abs();
        let larger = if q > r { q } else { r };
        if larger > s { larger } else { s }
    }

    /// Rotate around the origin by `steps` sixths of a full turn.
    ///
    /// A single step is an exact 60 degree clockwise rotation mapping
    /// (q, r, s) to (-r, -s, -q): the triple is cycled one place and every
    /// component negated. Even step counts leave the signs alone and cycle
    /// twice per pair, so any count reduces to a cyclic shift of the triple
    /// plus a parity-dependent negation. Negative counts rotate the other
    /// way; six steps are the identity.
    #[must_use]
    pub const fn rotate(self, steps: i32) -> Self {
        let steps = steps.rem_euclid(6);
        let sign = if steps % 2 == 0 { 1 } else { -1 };
        let (first, second) = match steps % 3 {
            0 => (self.q, self.r),
            1 => (self.r, self.s()),
            _ => (self.s(), self.q),
        };
        Self::new(first * sign, second * sign)
    }
}

impl Add for Axial {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }
}

impl AddAssign for Axial {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Axial {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }
}

impl SubAssign for Axial {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<i32> for Axial {
    type Output = Self;

    /// Scale both stored components; the factor may be zero or negative
    fn mul(self, factor: i32) -> Self {
        Self::new(self.q * factor, self.r * factor)
    }
}

impl MulAssign<i32> for Axial {
    fn mul_assign(&mut self, factor: i32) {
        *self = *self * factor;
    }
}

impl Neg for Axial {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_coordinate(rng: &mut impl Rng) -> Axial {
        Axial::new(rng.random_range(-50..=50), rng.random_range(-50..=50))
    }

    #[test]
    fn test_components_always_sum_to_zero() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let a = random_coordinate(&mut rng);
            let b = random_coordinate(&mut rng);
            let factor = rng.random_range(-4..=4);
            let steps = rng.random_range(-12..=12);

            for derived in [a, a + b, a - b, a * factor, -a, a.rotate(steps)] {
                assert_eq!(derived.q + derived.r + derived.s(), 0, "violated by {derived}");
            }
        }
    }

    #[test]
    fn test_length_is_the_largest_absolute_component() {
        assert_eq!(CENTRE.length(), 0);
        assert_eq!(Axial::new(2, -1).length(), 2);
        assert_eq!(Axial::new(-3, -2).length(), 5);
        assert_eq!(Axial::new(0, -4).length(), 4);
    }

    #[test]
    fn test_rotation_by_full_turn_is_identity() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let coordinate = random_coordinate(&mut rng);
            assert_eq!(coordinate.rotate(0), coordinate);
            assert_eq!(coordinate.rotate(6), coordinate);
            assert_eq!(coordinate.rotate(-6), coordinate);
        }
    }

    #[test]
    fn test_rotation_is_invertible() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let coordinate = random_coordinate(&mut rng);
            for steps in 0..6 {
                assert_eq!(coordinate.rotate(steps).rotate(6 - steps), coordinate);
                assert_eq!(coordinate.rotate(steps).rotate(-steps), coordinate);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let coordinate = random_coordinate(&mut rng);
            let steps = rng.random_range(-12..=12);
            assert_eq!(coordinate.rotate(steps).length(), coordinate.length());
        }
    }

    #[test]
    fn test_single_step_cycles_and_negates_the_triple() {
        let coordinate = Axial::new(3, -1);
        let rotated = coordinate.rotate(1);
        assert_eq!(rotated.q, -coordinate.r);
        assert_eq!(rotated.r, -coordinate.s());
        assert_eq!(rotated.s(), -coordinate.q);
    }

    #[test]
    fn test_scaling_by_negative_one_reverses_direction() {
        let coordinate = Axial::new(2, -5);
        assert_eq!(coordinate * -1, -coordinate);
        assert_eq!(coordinate + coordinate * -1, CENTRE);
        assert_eq!(coordinate * 0, CENTRE);
    }

    #[test]
    fn test_assignment_operators_match_their_binary_forms() {
        let mut coordinate = Axial::new(1, 2);
        coordinate += Axial::new(3, -1);
        assert_eq!(coordinate, Axial::new(4, 1));
        coordinate -= Axial::new(4, 0);
        assert_eq!(coordinate, Axial::new(0, 1));
        coordinate *= 3;
        assert_eq!(coordinate, Axial::new(0, 3));
    }
}
