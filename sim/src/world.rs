//! The game world: units, teams and the terrain they contend for.

use hexfield::grid::Frac1;
use hexfield::grid::offset::EvenRow;
use hexfield::search;
use hexfield::search::Budget;
use hexfield::map::TerrainSet;

use num_traits::bounds::Bounded;
use tracing::debug;

use crate::level::{ LevelSnapshot, LoadError };
use crate::unit::UnitClass;
use crate::{ Coords, CostMap, TerrainMap };

/// The number of unit slots of a world.
pub const MAX_UNITS: usize = 75;

/// The number of team slots of a world.
pub const MAX_TEAMS: usize = 8;

/// How much of a move interpolation completes per fixed tick.
const PROGRESS_PER_TICK: f32 = 0.1;

/// A stable handle to a unit slot. Handles stay valid for the
/// lifetime of the world; a handle to a vacated slot simply resolves
/// to no unit.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct UnitId(usize);

impl UnitId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A stable handle to a team slot.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct TeamId(usize);

impl TeamId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Unit {
    /// The cell the unit stands on.
    pub pos: Coords,
    /// Where the unit stood before its last move. Only consumed by
    /// the rendering layer, which interpolates between the two
    /// positions as `progress` advances.
    pub prev_pos: Coords,
    /// Interpolation progress of the last move, in `[0,1]`.
    pub progress: Frac1,
    pub class: UnitClass,
    pub team: TeamId,
    /// Movement points left this turn. Never exceeds the class range.
    pub moves: Budget,
}

#[derive(Clone, Copy, Debug)]
pub struct Team {
    pub cash: i32,
    pub income: i32,
    pub flag: u8,
}

/// The core state of the game world: the immutable terrain map and
/// the slot arenas for units and teams.
#[derive(Clone, Debug)]
pub struct World {
    map: TerrainMap,
    units: Vec<Option<Unit>>,
    teams: Vec<Option<Team>>,
    turn: usize,
    active_team: TeamId,
}

impl World {
    /// Build a world from a level snapshot and start the first
    /// team's turn.
    pub fn from_snapshot(snap: &LevelSnapshot) -> Result<World, LoadError> {
        let map = TerrainMap::from_ids(snap.width, snap.height, &snap.terrain)?;

        if snap.teams.len() > MAX_TEAMS {
            return Err(LoadError::TooManyTeams(snap.teams.len()))
        }
        if snap.units.len() > MAX_UNITS {
            return Err(LoadError::TooManyUnits(snap.units.len()))
        }

        let mut teams = vec![None; MAX_TEAMS];
        for (i, t) in snap.teams.iter().enumerate() {
            teams[i] = Some(Team { cash: t.cash, income: t.income, flag: t.flag });
        }

        let mut units: Vec<Option<Unit>> = vec![None; MAX_UNITS];
        for (i, u) in snap.units.iter().enumerate() {
            let class = UnitClass::from_id(u.class)
                .ok_or(LoadError::UnknownClass(u.class))?;
            if (u.team as usize) >= snap.teams.len() {
                return Err(LoadError::UnknownTeam(u.team))
            }
            let pos = Coords::new(u.col, u.row);
            if !map.in_bounds(pos) {
                return Err(LoadError::UnitOutOfBounds { col: u.col, row: u.row })
            }
            let occupied = units.iter().flatten().any(|other| other.pos == pos);
            if occupied {
                return Err(LoadError::CellOccupiedTwice { col: u.col, row: u.row })
            }
            units[i] = Some(Unit {
                pos,
                prev_pos: pos,
                progress: Frac1::max_value(),
                class,
                team: TeamId(u.team as usize),
                moves: 0,
            });
        }

        let mut world = World {
            map,
            units,
            teams,
            turn: 1,
            active_team: TeamId(0),
        };
        world.begin_turn(TeamId(0));
        Ok(world)
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn active_team(&self) -> TeamId {
        self.active_team
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Iterate over the live units and their handles.
    pub fn units(&self) -> impl Iterator<Item=(UnitId, &Unit)> {
        self.units.iter().enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|u| (UnitId(i), u)))
    }

    pub fn teams(&self) -> impl Iterator<Item=(TeamId, &Team)> {
        self.teams.iter().enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|t| (TeamId(i), t)))
    }

    /// The unit standing on the given cell, if any.
    pub fn unit_at(&self, c: Coords) -> Option<UnitId> {
        self.units().find(|(_, u)| u.pos == c).map(|(id, _)| id)
    }

    /// Compute the cells the given unit can move to this turn and
    /// their costs. Emplacements, units with no movement points left
    /// and vacated handles all yield a map with no reachable cells.
    pub fn reachable(&self, id: UnitId) -> CostMap {
        let (width, height) = (self.map.width(), self.map.height());
        let unit = match self.unit(id) {
            Some(u) => u,
            None => return CostMap::new(width, height),
        };
        let mobility = match unit.class.mobility() {
            Some(m) => m,
            None => return CostMap::new(width, height),
        };
        let mut ctx = MovementContext {
            world: self,
            blocked: mobility.blocked,
            budget: unit.moves,
        };
        search::wavefront::costs(unit.pos, &mut ctx)
    }

    /// Move a unit to `to` for the given cost. The caller is expected
    /// to have validated the target against the unit's current cost
    /// map; a request that would break an invariant (occupied or
    /// off-map target, cost exceeding the remaining moves) is
    /// rejected silently.
    pub fn apply_move(&mut self, id: UnitId, to: Coords, cost: Budget) {
        if !self.map.in_bounds(to) || self.unit_at(to).is_some() {
            return
        }
        if let Some(unit) = self.units.get_mut(id.0).and_then(|s| s.as_mut()) {
            if cost > unit.moves {
                return
            }
            unit.prev_pos = unit.pos;
            unit.pos = to;
            unit.moves -= cost;
            unit.progress = Frac1::min_value();
            debug!(unit = id.0, to = %to, cost, "move committed");
        }
    }

    /// End the active team's turn and start the next one.
    pub fn end_turn(&mut self) {
        let next = self.next_team();
        self.turn += 1;
        self.begin_turn(next);
    }

    /// Start a turn for the given team: its mobile units get their
    /// full class range back, every other unit drops to zero moves.
    pub fn begin_turn(&mut self, team: TeamId) {
        self.active_team = team;
        for unit in self.units.iter_mut().flatten() {
            unit.moves = if unit.team == team {
                unit.class.mobility().map_or(0, |m| m.range)
            } else {
                0
            };
        }
        debug!(turn = self.turn, team = team.0, "turn started");
    }

    /// Advance move interpolation by one fixed tick. Purely cosmetic
    /// state: selection and reachability are never touched here.
    pub fn tick(&mut self) {
        for unit in self.units.iter_mut().flatten() {
            if !unit.progress.is_complete() {
                unit.progress = unit.progress.advanced(PROGRESS_PER_TICK);
                if unit.progress.is_complete() {
                    unit.prev_pos = unit.pos;
                }
            }
        }
    }

    fn next_team(&self) -> TeamId {
        for i in 1..=self.teams.len() {
            let t = (self.active_team.0 + i) % self.teams.len();
            if self.teams[t].is_some() {
                return TeamId(t)
            }
        }
        self.active_team
    }
}

/// The search context of a single reachability query: terrain not in
/// the unit's blocked set is passable unless some unit stands on it.
struct MovementContext<'a> {
    world: &'a World,
    blocked: TerrainSet,
    budget: Budget,
}

impl<'a> search::Context<EvenRow> for MovementContext<'a> {
    fn dimensions(&self) -> (i32, i32) {
        (self.world.map.width(), self.world.map.height())
    }

    fn budget(&self) -> Budget {
        self.budget
    }

    fn passable(&mut self, to: Coords) -> bool {
        match self.world.map.get(to) {
            Some(terrain) =>
                !self.blocked.contains(terrain)
                    && self.world.unit_at(to).is_none(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{ TeamRecord, UnitRecord };

    fn two_team_snapshot(
        width: i32,
        height: i32,
        units: &[(u8, u8, i32, i32)],
    ) -> LevelSnapshot {
        LevelSnapshot {
            width,
            height,
            terrain: vec![1; (width * height) as usize],
            teams: vec![
                TeamRecord { flag: 0, cash: 150, income: 25 },
                TeamRecord { flag: 1, cash: 150, income: 25 },
            ],
            units: units.iter()
                .map(|&(team, class, col, row)| UnitRecord { team, class, col, row })
                .collect(),
        }
    }

    fn world(units: &[(u8, u8, i32, i32)]) -> World {
        World::from_snapshot(&two_team_snapshot(8, 8, units)).unwrap()
    }

    #[test]
    fn load_starts_first_team_turn() {
        let w = world(&[(0, 8, 1, 1), (1, 9, 5, 5), (0, 0, 3, 3)]);
        assert_eq!(w.turn(), 1);
        assert_eq!(w.active_team(), TeamId(0));
        let infantry = w.unit_at(Coords::new(1, 1)).unwrap();
        let enemy = w.unit_at(Coords::new(5, 5)).unwrap();
        let hq = w.unit_at(Coords::new(3, 3)).unwrap();
        assert_eq!(w.unit(infantry).unwrap().moves, 2);
        assert_eq!(w.unit(enemy).unwrap().moves, 0);
        assert_eq!(w.unit(hq).unwrap().moves, 0);
    }

    #[test]
    fn load_rejects_bad_snapshots() {
        let snap = two_team_snapshot(4, 4, &[(0, 5, 0, 0)]);
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::UnknownClass(5)));

        let snap = two_team_snapshot(4, 4, &[(7, 8, 0, 0)]);
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::UnknownTeam(7)));

        let snap = two_team_snapshot(4, 4, &[(0, 8, 4, 0)]);
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::UnitOutOfBounds { col: 4, row: 0 }));

        let snap = two_team_snapshot(4, 4, &[(0, 8, 2, 2), (1, 9, 2, 2)]);
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::CellOccupiedTwice { col: 2, row: 2 }));

        let mut snap = two_team_snapshot(4, 4, &[]);
        snap.units = (0..MAX_UNITS as i32 + 1)
            .map(|i| UnitRecord { team: 0, class: 0, col: i % 4, row: i / 4 })
            .collect();
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::TooManyUnits(_)));

        let mut snap = two_team_snapshot(4, 4, &[]);
        snap.teams = vec![TeamRecord { flag: 0, cash: 0, income: 0 }; MAX_TEAMS + 1];
        assert!(matches!(
            World::from_snapshot(&snap).unwrap_err(),
            LoadError::TooManyTeams(_)));
    }

    #[test]
    fn reachable_respects_occupancy() {
        // A cavalry unit next to a friendly unit: the occupied cell
        // never shows up in the cost map, cells behind it do.
        let w = world(&[(0, 9, 2, 2), (0, 8, 3, 2)]);
        let cavalry = w.unit_at(Coords::new(2, 2)).unwrap();
        let map = w.reachable(cavalry);
        assert!(!map.contains(Coords::new(3, 2)));
        assert!(!map.contains(Coords::new(2, 2)));
        assert_eq!(map.get(Coords::new(4, 2)), Some(3));
    }

    #[test]
    fn reachable_is_empty_for_emplacements_and_spent_units() {
        let mut w = world(&[(0, 0, 2, 2), (0, 8, 5, 5)]);
        let hq = w.unit_at(Coords::new(2, 2)).unwrap();
        assert!(w.reachable(hq).is_empty());

        let infantry = w.unit_at(Coords::new(5, 5)).unwrap();
        w.apply_move(infantry, Coords::new(5, 7), 2);
        assert_eq!(w.unit(infantry).unwrap().moves, 0);
        assert!(w.reachable(infantry).is_empty());
    }

    #[test]
    fn apply_move_updates_interpolation_handoff() {
        let mut w = world(&[(0, 8, 1, 1)]);
        let id = w.unit_at(Coords::new(1, 1)).unwrap();
        w.apply_move(id, Coords::new(2, 1), 1);
        let u = w.unit(id).unwrap();
        assert_eq!(u.pos, Coords::new(2, 1));
        assert_eq!(u.prev_pos, Coords::new(1, 1));
        assert_eq!(u.moves, 1);
        assert!(!u.progress.is_complete());
    }

    #[test]
    fn apply_move_rejects_invalid_requests() {
        let mut w = world(&[(0, 8, 1, 1), (0, 9, 3, 1)]);
        let id = w.unit_at(Coords::new(1, 1)).unwrap();

        // Occupied target.
        w.apply_move(id, Coords::new(3, 1), 2);
        assert_eq!(w.unit(id).unwrap().pos, Coords::new(1, 1));

        // Cost above the remaining moves.
        w.apply_move(id, Coords::new(1, 3), 3);
        assert_eq!(w.unit(id).unwrap().pos, Coords::new(1, 1));
        assert_eq!(w.unit(id).unwrap().moves, 2);

        // Off-map target.
        w.apply_move(id, Coords::new(-1, 1), 1);
        assert_eq!(w.unit(id).unwrap().pos, Coords::new(1, 1));
    }

    #[test]
    fn end_turn_cycles_teams_and_resets_moves() {
        let mut w = world(&[(0, 8, 1, 1), (1, 9, 5, 5)]);
        let infantry = w.unit_at(Coords::new(1, 1)).unwrap();
        let cavalry = w.unit_at(Coords::new(5, 5)).unwrap();

        w.apply_move(infantry, Coords::new(1, 2), 1);
        w.end_turn();
        assert_eq!(w.turn(), 2);
        assert_eq!(w.active_team(), TeamId(1));
        assert_eq!(w.unit(infantry).unwrap().moves, 0);
        assert_eq!(w.unit(cavalry).unwrap().moves, 4);

        w.end_turn();
        assert_eq!(w.active_team(), TeamId(0));
        assert_eq!(w.unit(infantry).unwrap().moves, 2);
    }

    #[test]
    fn tick_advances_and_completes_interpolation() {
        let mut w = world(&[(0, 8, 1, 1)]);
        let id = w.unit_at(Coords::new(1, 1)).unwrap();
        w.apply_move(id, Coords::new(2, 1), 1);
        for _ in 0..9 {
            w.tick();
            assert_eq!(w.unit(id).unwrap().prev_pos, Coords::new(1, 1));
        }
        w.tick();
        let u = w.unit(id).unwrap();
        assert!(u.progress.is_complete());
        assert_eq!(u.prev_pos, Coords::new(2, 1));
    }
}
