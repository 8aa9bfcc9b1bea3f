//! Hexagonal grid model and movement reachability.
//!
//! This crate provides the deterministic foundations of a turn-based
//! tactics simulation on a hexagonal grid:
//!
//!   * [`grid`]: coordinate systems for hexagonal grids, i.e. cube
//!     coordinates and row-offset coordinates with conversions
//!     between them.
//!   * [`map`]: a rectangular terrain map over offset coordinates,
//!     together with the terrain sets that decide which terrain
//!     halts which unit class.
//!   * [`search`]: bounded-radius wavefront expansion computing the
//!     per-cell movement costs reachable within a movement budget.

#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod grid;
pub mod map;
pub mod search;
