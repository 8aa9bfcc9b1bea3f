//! The simulation core of a turn-based hexagonal tactics game.
//!
//! The crate tracks units and teams on a terrain map, computes which
//! cells a selected unit can reach with its remaining movement
//! points, and commits moves. It is headless: rendering, input
//! decoding and level file parsing live outside and talk to this
//! crate through [`LevelSnapshot`], [`Input`] and the read accessors
//! on [`World`] and [`Controller`].
//!
//! Everything runs single-threaded: inputs are applied one at a time
//! through [`Controller::apply`], and move interpolation advances in
//! fixed steps through [`World::tick`], driven by a
//! [`clock::FixedTimestep`] accumulator.

#[macro_use]
extern crate num_derive;

pub mod clock;
pub mod controller;
pub mod level;
pub mod unit;
pub mod world;

use hexfield::grid::offset::EvenRow;

/// The coordinates of the game grid: row-offset with even rows
/// indented, matching the classic staggered-row tile layout.
pub type Coords = hexfield::grid::offset::Offset<EvenRow>;

/// The cost map computed for a selected unit.
pub type CostMap = hexfield::search::CostMap<EvenRow>;

/// The terrain map of a loaded level.
pub type TerrainMap = hexfield::map::TerrainMap<EvenRow>;

pub use controller::{ Controller, Input, Selection };
pub use level::{ LevelSnapshot, LoadError, TeamRecord, UnitRecord };
pub use unit::{ Mobility, UnitClass };
pub use world::{ Team, TeamId, Unit, UnitId, World, MAX_TEAMS, MAX_UNITS };
