//! Hexagonal grids with overlaid coordinate systems.
pub mod cube;
pub mod offset;

pub use self::cube::*;

use num_traits::bounds::Bounded;
use std::fmt::{ Debug, Display };
use std::hash::Hash;

/// Coordinates on a grid. A grid coordinate system must be fully
/// embedded in the cube coordinate system, i.e. support lossless
/// conversion in both directions.
pub trait Coords:
    From<Cube> + Into<Cube> + Eq + Copy + Debug + Display + Hash {
}

/// Iterate over the neighbouring (adjacent) coordinates.
pub fn neighbours<C: Coords>(c: C) -> impl Iterator<Item=C> {
    CubeVec::directions().map(move |v| C::from(c.into() + v))
}

/// The distance between two coordinates, i.e. the number of
/// steps between adjacent coordinates needed to get from
/// `from` to `to` on an unobstructed grid.
pub fn distance<C: Coords>(from: C, to: C) -> u32 {
    let a: Cube = from.into();
    let b: Cube = to.into();
    a.distance(b)
}

/// A fraction in the unit interval `[0,1]`.
///
/// Used to track the progress of a unit's move interpolation
/// between its previous and current position.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Frac1(f32);

impl Frac1 {
    /// Create a new fraction in the unit interval [0,1].
    /// If the numerator is greater than the denominator or if
    /// the denominator is zero, a panic is triggered.
    pub fn new(numer: f32, denom: f32) -> Frac1 {
        if numer > denom {
            panic!("numer > denom");
        }
        if denom == 0. {
            panic!("denom == 0");
        }
        Frac1(numer / denom)
    }

    /// Advance the fraction by `delta`, saturating at 1.
    pub fn advanced(self, delta: f32) -> Frac1 {
        Frac1((self.0 + delta).min(1.))
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 1.
    }
}

impl Bounded for Frac1 {
    fn min_value() -> Frac1 {
        Frac1(0.)
    }
    fn max_value() -> Frac1 {
        Frac1(1.)
    }
}

impl From<Frac1> for f32 {
    fn from(Frac1(f): Frac1) -> f32 { f }
}
