//! Unit classes and their movement characteristics.

use hexfield::map::{ Terrain, TerrainSet };
use hexfield::search::Budget;

use num_traits::cast::FromPrimitive;

/// The classes a unit can belong to.
///
/// The discriminants are the class ids used in level data. Ids below
/// 8 are emplacements that never move; the mobile classes start at 8.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[derive(FromPrimitive)]
pub enum UnitClass {
    Headquarters = 0,
    Factory      = 1,
    Harbor       = 2,
    Turret       = 3,
    Infantry     = 8,
    Cavalry      = 9,
    Artillery    = 10,
    Gunboat      = 11,
    Engineer     = 12,
    Grenadier    = 13,
    Sniper       = 14,
}

/// The movement characteristics of a mobile unit class: how far it
/// gets on a fresh turn and which terrain it cannot enter.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Mobility {
    pub range: Budget,
    pub blocked: TerrainSet,
}

impl Mobility {
    fn land(range: Budget) -> Mobility {
        Mobility {
            range,
            blocked: TerrainSet::of(&[Terrain::Water, Terrain::Mountains]),
        }
    }

    fn naval(range: Budget) -> Mobility {
        Mobility {
            range,
            blocked: TerrainSet::of(&[Terrain::Plains, Terrain::Woods, Terrain::Mountains]),
        }
    }
}

impl UnitClass {
    /// Decode a class id as found in level data.
    pub fn from_id(id: u8) -> Option<UnitClass> {
        UnitClass::from_u8(id)
    }

    /// The movement characteristics of the class, or `None` for
    /// emplacements. Callers interested in reachability must check
    /// this before anything else.
    pub fn mobility(self) -> Option<Mobility> {
        use UnitClass::*;
        match self {
            Headquarters | Factory | Harbor | Turret => None,
            Infantry  => Some(Mobility::land(2)),
            Cavalry   => Some(Mobility::land(4)),
            Artillery => Some(Mobility::land(2)),
            Gunboat   => Some(Mobility::naval(6)),
            Engineer  => Some(Mobility::land(2)),
            Grenadier => Some(Mobility::land(2)),
            Sniper    => Some(Mobility::land(2)),
        }
    }

    pub fn name(&self) -> &str {
        use UnitClass::*;
        match self {
            Headquarters => "Headquarters",
            Factory      => "Factory",
            Harbor       => "Harbor",
            Turret       => "Turret",
            Infantry     => "Infantry",
            Cavalry      => "Cavalry",
            Artillery    => "Artillery",
            Gunboat      => "Gunboat",
            Engineer     => "Engineer",
            Grenadier    => "Grenadier",
            Sniper       => "Sniper",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ids_round_trip() {
        for &class in &[
            UnitClass::Headquarters, UnitClass::Factory, UnitClass::Harbor,
            UnitClass::Turret, UnitClass::Infantry, UnitClass::Cavalry,
            UnitClass::Artillery, UnitClass::Gunboat, UnitClass::Engineer,
            UnitClass::Grenadier, UnitClass::Sniper,
        ] {
            assert_eq!(UnitClass::from_id(class as u8), Some(class));
        }
        assert_eq!(UnitClass::from_id(4), None);
        assert_eq!(UnitClass::from_id(15), None);
    }

    #[test]
    fn emplacements_are_immobile() {
        assert!(UnitClass::Headquarters.mobility().is_none());
        assert!(UnitClass::Turret.mobility().is_none());
    }

    #[test]
    fn land_and_naval_blocking_disagree_on_water() {
        let land = UnitClass::Infantry.mobility().unwrap();
        let naval = UnitClass::Gunboat.mobility().unwrap();
        assert!(land.blocked.contains(Terrain::Water));
        assert!(!naval.blocked.contains(Terrain::Water));
        assert!(!land.blocked.contains(Terrain::Plains));
        assert!(naval.blocked.contains(Terrain::Plains));
        assert_eq!(naval.range, 6);
        assert_eq!(land.range, 2);
    }
}
