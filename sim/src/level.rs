//! The level snapshot contract.
//!
//! A level file is parsed outside this crate; what arrives here is an
//! immutable snapshot of the initial board: grid dimensions, per-cell
//! terrain ids and the initial team and unit records. [`crate::World`]
//! validates the snapshot once at load time; the conditions below are
//! fatal and refuse the level, everything after a successful load is
//! policy-checked instead of erroring.

use serde::{ Deserialize, Serialize };
use thiserror::Error;

use hexfield::map::MapError;

use crate::world::{ MAX_TEAMS, MAX_UNITS };

/// The initial state of a level as supplied by the external loader.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major terrain ids, `width * height` entries.
    pub terrain: Vec<u8>,
    pub teams: Vec<TeamRecord>,
    pub units: Vec<UnitRecord>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TeamRecord {
    pub flag: u8,
    pub cash: i32,
    pub income: i32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Index into the snapshot's team list.
    pub team: u8,
    /// Class id, see [`crate::UnitClass`].
    pub class: u8,
    pub col: i32,
    pub row: i32,
}

/// Fatal conditions that refuse a level at load time.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("level has {0} teams, more than the {max} team slots", max = MAX_TEAMS)]
    TooManyTeams(usize),
    #[error("level has {0} units, more than the {max} unit slots", max = MAX_UNITS)]
    TooManyUnits(usize),
    #[error("unknown unit class id {0}")]
    UnknownClass(u8),
    #[error("unit references team {0}, which is not part of the level")]
    UnknownTeam(u8),
    #[error("unit at ({col},{row}) is outside the map")]
    UnitOutOfBounds { col: i32, row: i32 },
    #[error("two units occupy ({col},{row})")]
    CellOccupiedTwice { col: i32, row: i32 },
}
