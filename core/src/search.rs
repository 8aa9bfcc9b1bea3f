//! Movement reachability over offset grids.
pub mod wavefront;

use std::marker::PhantomData;

use crate::grid::offset::{ Offset, OffsetType };

/// Movement points, i.e. the number of steps a unit may take.
pub type Budget = u16;

/// The context of a reachability search defines the searchable area
/// and which cells the acting unit may enter.
pub trait Context<T: OffsetType> {
    /// The `(width, height)` of the searchable grid. The search never
    /// leaves `[0,width) x [0,height)`.
    fn dimensions(&self) -> (i32, i32);

    /// The movement points available to the acting unit.
    fn budget(&self) -> Budget;

    /// Whether the acting unit may enter the given cell. Occupied
    /// cells and cells whose terrain blocks the unit report `false`.
    /// Called at most once per cell and never for the start cell.
    fn passable(&mut self, to: Offset<T>) -> bool;
}

/// The movement costs resulting from a reachability search: one entry
/// per grid cell, holding the minimum number of steps needed to reach
/// the cell from the start of the search, or nothing when the cell is
/// out of reach. The start cell itself is never part of the map, as
/// it is not a valid move target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMap<T: OffsetType> {
    width: i32,
    height: i32,
    cells: Vec<Option<Budget>>,
    _ty: PhantomData<T>,
}

impl<T: OffsetType> CostMap<T> {
    /// A cost map of the given dimensions with every cell unreached.
    pub fn new(width: i32, height: i32) -> CostMap<T> {
        debug_assert!(width > 0 && height > 0);
        CostMap {
            width,
            height,
            cells: vec![None; (width * height) as usize],
            _ty: PhantomData,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, c: Offset<T>) -> bool {
        c.col >= 0 && c.col < self.width && c.row >= 0 && c.row < self.height
    }

    /// The cost of reaching the given cell, if it is reachable.
    pub fn get(&self, c: Offset<T>) -> Option<Budget> {
        if self.in_bounds(c) {
            self.cells[(c.row * self.width + c.col) as usize]
        } else {
            None
        }
    }

    pub fn contains(&self, c: Offset<T>) -> bool {
        self.get(c).is_some()
    }

    /// Whether no cell is reachable.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Iterate over the reachable cells and their costs.
    pub fn iter(&self) -> impl Iterator<Item=(Offset<T>, Budget)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            let i = i as i32;
            c.map(|cost| (Offset::new(i % width, i / width), cost))
        })
    }

    fn set(&mut self, c: Offset<T>, cost: Budget) {
        let i = (c.row * self.width + c.col) as usize;
        self.cells[i] = Some(cost);
    }
}
