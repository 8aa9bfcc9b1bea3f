//! Offset coordinates.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use super::*;

pub trait OffsetType: Debug + Hash + Eq + Copy + Clone + Send + 'static {}

/// Offset coordinates on a rectangular grid of pointy-top hexagons,
/// where alternating rows are indented by half a hexagon width.
///
/// Guide: [Offset Coordinates]
///
/// [Offset Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Offset<T: OffsetType> {
    pub col: i32,
    pub row: i32,
    _ty: PhantomData<T>,
}

impl<T: OffsetType> Coords for Offset<T>
where Offset<T>: From<Cube> + Into<Cube> {}

/// The type of offset coordinates for grids whose even rows are
/// indented, i.e. shifted right by half a hexagon width.
///
/// The induced neighbourhood of a cell `(col, row)` is asymmetric
/// w.r.t. row parity: on odd rows the relative neighbours are
/// `(-1,-1), (0,-1), (1,0), (0,1), (-1,1), (-1,0)`, while on even
/// rows the four diagonal entries gain an extra `+1` column shift.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EvenRow;
impl OffsetType for EvenRow {}

/// The type of offset coordinates for grids whose odd rows are
/// indented, i.e. shifted right by half a hexagon width.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct OddRow;
impl OffsetType for OddRow {}

impl<T: OffsetType> Offset<T> {
    pub fn new(col: i32, row: i32) -> Offset<T> {
        Offset { col, row, _ty: PhantomData }
    }
}

impl From<Cube> for Offset<EvenRow> {
    fn from(c: Cube) -> Self {
        let row = c.z();
        let col = c.x() + (row + (row & 1)) / 2;
        Offset { col, row, _ty: PhantomData }
    }
}

impl From<Offset<EvenRow>> for Cube {
    fn from(o: Offset<EvenRow>) -> Cube {
        let x = o.col - (o.row + (o.row & 1)) / 2;
        Cube::new_xz(x, o.row)
    }
}

impl From<Cube> for Offset<OddRow> {
    fn from(c: Cube) -> Self {
        let row = c.z();
        let col = c.x() + (row - (row & 1)) / 2;
        Offset { col, row, _ty: PhantomData }
    }
}

impl From<Offset<OddRow>> for Cube {
    fn from(o: Offset<OddRow>) -> Cube {
        let x = o.col - (o.row - (o.row & 1)) / 2;
        Cube::new_xz(x, o.row)
    }
}

impl<T: OffsetType> fmt::Display for Offset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
