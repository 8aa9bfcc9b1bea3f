//! Bounded-radius wavefront expansion.
//!
//! Every permitted step costs exactly one movement point, so the
//! layered breadth-first expansion below labels each cell with its
//! minimum cost directly and never needs to revisit a cell, unlike a
//! general cost-aware search. Layer `k` holds exactly the cells at
//! cost `k` from the start.

use super::{ Budget, Context, CostMap };

use crate::grid;
use crate::grid::Coords;
use crate::grid::offset::{ Offset, OffsetType };

/// Beginning at the given start coordinates, expand the wavefront of
/// reachable cells one layer per movement point, up to the budget of
/// the context, and return the resulting cost map.
///
/// The expansion stops early when a whole layer yields no new cells.
/// Cells outside the context's dimensions are skipped. The start cell
/// seeds the expansion but is excluded from the result. All scratch
/// state is owned by this function; the context is only queried.
pub fn costs<T>(start: Offset<T>, ctx: &mut impl Context<T>) -> CostMap<T>
where
    T: OffsetType,
    Offset<T>: Coords,
{
    let (width, height) = ctx.dimensions();
    let mut map = CostMap::new(width, height);
    if !map.in_bounds(start) {
        return map
    }

    // Cells already labeled or ruled out, so that passability is
    // queried at most once per cell.
    let mut seen = vec![false; (width * height) as usize];
    seen[(start.row * width + start.col) as usize] = true;

    let mut front = vec![start];
    let mut layer: Budget = 0;
    while layer < ctx.budget() && !front.is_empty() {
        layer += 1;
        let mut next = Vec::new();
        for c in front {
            for n in grid::neighbours(c) {
                if !map.in_bounds(n) {
                    continue
                }
                let i = (n.row * width + n.col) as usize;
                if seen[i] {
                    continue
                }
                seen[i] = true;
                if ctx.passable(n) {
                    map.set(n, layer);
                    next.push(n);
                }
            }
        }
        front = next;
    }
    map
}
