//! A rectangular terrain map over row-offset coordinates.
//!
//! The map is the static part of a battlefield: per-cell terrain that
//! never changes after a level has been loaded. Which terrain halts
//! which unit is not a property of the map itself but of the moving
//! unit, expressed as a [`TerrainSet`] of blocked terrain.

use num_traits::cast::FromPrimitive;
use thiserror::Error;

use crate::grid::offset::{ Offset, OffsetType };

/// The kinds of terrain a cell can hold.
///
/// The discriminants are the terrain ids used in level data.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[derive(FromPrimitive)]
pub enum Terrain {
    Water     = 0,
    Plains    = 1,
    Woods     = 2,
    Mountains = 3,
}

impl Terrain {
    /// Decode a terrain id as found in level data.
    pub fn from_id(id: u8) -> Result<Terrain, MapError> {
        Terrain::from_u8(id).ok_or(MapError::UnknownTerrain(id))
    }
}

/// A set of terrain kinds, e.g. the terrain that blocks the
/// movement of a particular unit class.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct TerrainSet(u8);

impl TerrainSet {
    pub fn of(terrain: &[Terrain]) -> TerrainSet {
        let mut bits = 0;
        for t in terrain {
            bits |= 1 << *t as u8;
        }
        TerrainSet(bits)
    }

    pub fn contains(&self, t: Terrain) -> bool {
        self.0 & (1 << t as u8) != 0
    }
}

/// Errors that prevent the construction of a terrain map.
/// These are fatal at level load time; a running simulation
/// never produces them.
#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum MapError {
    #[error("invalid grid dimensions {width}x{height}")]
    Dimensions { width: i32, height: i32 },
    #[error("terrain data holds {len} cells, expected {expected}")]
    TerrainSize { len: usize, expected: usize },
    #[error("unknown terrain id {0}")]
    UnknownTerrain(u8),
}

/// A dense rectangular map of terrain, addressed by offset
/// coordinates in `[0,width) x [0,height)`.
#[derive(Clone, Debug)]
pub struct TerrainMap<T: OffsetType> {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
    _ty: std::marker::PhantomData<T>,
}

impl<T: OffsetType> TerrainMap<T> {
    /// Create a map with every cell holding the same terrain.
    pub fn filled(width: i32, height: i32, t: Terrain) -> Result<TerrainMap<T>, MapError> {
        Self::check_dimensions(width, height)?;
        Ok(TerrainMap {
            width,
            height,
            cells: vec![t; (width * height) as usize],
            _ty: std::marker::PhantomData,
        })
    }

    /// Create a map from row-major terrain ids as found in level data.
    pub fn from_ids(width: i32, height: i32, ids: &[u8]) -> Result<TerrainMap<T>, MapError> {
        Self::check_dimensions(width, height)?;
        let expected = (width * height) as usize;
        if ids.len() != expected {
            return Err(MapError::TerrainSize { len: ids.len(), expected })
        }
        let cells = ids.iter()
            .map(|id| Terrain::from_id(*id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TerrainMap { width, height, cells, _ty: std::marker::PhantomData })
    }

    fn check_dimensions(width: i32, height: i32) -> Result<(), MapError> {
        if width <= 0 || height <= 0 {
            Err(MapError::Dimensions { width, height })
        } else {
            Ok(())
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

    /// The terrain at the given coordinates, if they are on the map.
    pub fn get(&self, c: Offset<T>) -> Option<Terrain> {
        if self.in_bounds(c) {
            Some(self.cells[(c.row * self.width + c.col) as usize])
        } else {
            None
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item=(Offset<T>, Terrain)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, t)| {
            let i = i as i32;
            (Offset::new(i % width, i / width), *t)
        })
    }
}
