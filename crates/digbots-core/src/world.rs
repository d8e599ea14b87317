//! The tile world: the [`GridWorld`] query interface and the concrete
//! [`LevelMap`] that owns tile state.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::config::LevelConfig;
use crate::geom::{Point, Range};
use crate::tile::{Tile, TileKind};

/// Read-only view of a tile grid, consumed by the pathfinding core.
pub trait GridWorld {
    /// Grid bounds: `min` inclusive, `max` exclusive.
    fn bounds(&self) -> Range;

    /// Snapshot of the tile at `p`, `None` if the cell is empty.
    fn tile_at(&self, p: Point) -> Option<Tile>;

    fn bounds_min(&self) -> Point {
        self.bounds().min
    }

    fn bounds_max(&self) -> Point {
        self.bounds().max
    }

    fn is_empty_at(&self, p: Point) -> bool {
        self.tile_at(p).is_none()
    }
}

impl<W: GridWorld + ?Sized> GridWorld for &W {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn tile_at(&self, p: Point) -> Option<Tile> {
        (**self).tile_at(p)
    }
}

/// Notification published when tile state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldEvent {
    TileDestroyed(Point),
    LevelUpdated,
}

/// Result of a single [`LevelMap::dig_tile`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigOutcome {
    NoTile,
    Unbreakable,
    Damaged { hp: i32 },
    Destroyed,
}

type Observer = Box<dyn FnMut(&WorldEvent)>;

/// Sparse tile map with fog of war and change notifications.
///
/// Events are delivered twice: synchronously to every subscribed observer,
/// and into a buffer that callers drain with
/// [`drain_events`](Self::drain_events).
pub struct LevelMap {
    bounds: Range,
    tiles: HashMap<Point, Tile>,
    revealed: Vec<bool>,
    config: LevelConfig,
    pending: Vec<WorldEvent>,
    observers: Vec<Observer>,
}

impl LevelMap {
    /// An empty, fully fogged level.
    pub fn new(bounds: Range) -> Self {
        Self::with_config(bounds, LevelConfig::default())
    }

    pub fn with_config(bounds: Range, config: LevelConfig) -> Self {
        Self {
            bounds,
            tiles: HashMap::new(),
            revealed: vec![false; bounds.len()],
            config,
            pending: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Place a fresh tile of `kind`, replacing whatever was there.
    /// Out-of-bounds cells are ignored.
    pub fn place(&mut self, p: Point, kind: TileKind) {
        self.set_tile(p, self.config.definition(kind).build());
    }

    /// Place an unbreakable ground tile.
    pub fn place_bedrock(&mut self, p: Point) {
        self.set_tile(p, self.config.bedrock.build());
    }

    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        if self.bounds.contains(p) {
            self.tiles.insert(p, tile);
        }
    }

    /// Number of solid tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Hit the tile at `p` once. A breakable tile loses one HP and is
    /// destroyed once its HP reaches zero.
    pub fn dig_tile(&mut self, p: Point) -> DigOutcome {
        let Some(tile) = self.tiles.get_mut(&p) else {
            return DigOutcome::NoTile;
        };
        if !tile.breakable {
            return DigOutcome::Unbreakable;
        }
        tile.hp -= 1;
        let hp = tile.hp;
        trace!("dig {p}: hp {hp}");
        if hp <= 0 {
            self.destroy_tile(p);
            DigOutcome::Destroyed
        } else {
            DigOutcome::Damaged { hp }
        }
    }

    /// Remove the tile at `p` regardless of breakability.
    ///
    /// Publishes [`WorldEvent::TileDestroyed`] then
    /// [`WorldEvent::LevelUpdated`]. Returns `false` if there was no tile.
    pub fn destroy_tile(&mut self, p: Point) -> bool {
        let Some(tile) = self.tiles.remove(&p) else {
            return false;
        };
        debug!("destroyed {tile} at {p}");
        self.publish(WorldEvent::TileDestroyed(p));
        self.publish(WorldEvent::LevelUpdated);
        true
    }

    /// Register an observer called for every published event.
    pub fn subscribe(&mut self, observer: impl FnMut(&WorldEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Take every event published since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.pending)
    }

    fn publish(&mut self, event: WorldEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
        self.pending.push(event);
    }

    // -----------------------------------------------------------------------
    // Fog of war
    // -----------------------------------------------------------------------

    /// Whether `p` is still hidden. Cells outside the level are always fogged.
    pub fn is_in_fog(&self, p: Point) -> bool {
        match self.bounds.index_of(p) {
            Some(i) => !self.revealed[i],
            None => true,
        }
    }

    /// Reveal `p`. Returns `true` if it was hidden before.
    pub fn clear_fog(&mut self, p: Point) -> bool {
        let Some(i) = self.bounds.index_of(p) else {
            return false;
        };
        let was_hidden = !self.revealed[i];
        self.revealed[i] = true;
        was_hidden
    }

    /// Reveal every cell within Chebyshev distance `radius` of `center`.
    /// Returns how many cells were newly revealed.
    pub fn clear_fog_around(&mut self, center: Point, radius: i32) -> usize {
        let mut n = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if self.clear_fog(center.shift(dx, dy)) {
                    n += 1;
                }
            }
        }
        n
    }

    /// Re-hide the whole level.
    pub fn fill_fog(&mut self) {
        self.revealed.iter_mut().for_each(|r| *r = false);
    }

    /// Ore tiles outside the fog, in row-major order.
    pub fn discovered_ore(&self) -> Vec<Point> {
        let mut ore: Vec<Point> = self
            .tiles
            .iter()
            .filter(|(p, t)| t.is_ore() && !self.is_in_fog(**p))
            .map(|(p, _)| *p)
            .collect();
        ore.sort();
        ore
    }
}

impl GridWorld for LevelMap {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn tile_at(&self, p: Point) -> Option<Tile> {
        self.tiles.get(&p).copied()
    }
}

impl fmt::Debug for LevelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelMap")
            .field("bounds", &self.bounds)
            .field("tiles", &self.tiles.len())
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn small() -> LevelMap {
        let mut m = LevelMap::new(Range::sized(4, 4));
        m.place(Point::new(1, 1), TileKind::Ground);
        m.place(Point::new(2, 2), TileKind::Ore);
        m.place_bedrock(Point::new(3, 3));
        m
    }

    #[test]
    fn tile_queries() {
        let m = small();
        assert_eq!(m.bounds_min(), Point::new(0, 0));
        assert_eq!(m.bounds_max(), Point::new(4, 4));
        assert!(m.is_empty_at(Point::new(0, 0)));
        assert_eq!(m.tile_at(Point::new(2, 2)).map(|t| t.kind), Some(TileKind::Ore));
        assert_eq!(m.tile_count(), 3);
    }

    #[test]
    fn place_ignores_out_of_bounds() {
        let mut m = small();
        m.place(Point::new(4, 0), TileKind::Ground);
        assert_eq!(m.tile_count(), 3);
    }

    #[test]
    fn dig_decrements_then_destroys() {
        let mut m = small();
        let p = Point::new(1, 1);
        assert_eq!(m.dig_tile(p), DigOutcome::Damaged { hp: 2 });
        assert_eq!(m.dig_tile(p), DigOutcome::Damaged { hp: 1 });
        assert!(m.drain_events().is_empty());
        assert_eq!(m.dig_tile(p), DigOutcome::Destroyed);
        assert!(m.is_empty_at(p));
        assert_eq!(
            m.drain_events(),
            vec![WorldEvent::TileDestroyed(p), WorldEvent::LevelUpdated]
        );
        assert_eq!(m.dig_tile(p), DigOutcome::NoTile);
    }

    #[test]
    fn bedrock_cannot_be_dug() {
        let mut m = small();
        let p = Point::new(3, 3);
        assert_eq!(m.dig_tile(p), DigOutcome::Unbreakable);
        assert_eq!(m.tile_at(p).map(|t| t.hp), Some(1));
        assert!(m.destroy_tile(p));
        assert!(!m.destroy_tile(p));
    }

    #[test]
    fn observers_see_events_in_order() {
        let mut m = small();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        m.subscribe(move |e| sink.borrow_mut().push(*e));
        m.destroy_tile(Point::new(2, 2));
        assert_eq!(
            *seen.borrow(),
            vec![
                WorldEvent::TileDestroyed(Point::new(2, 2)),
                WorldEvent::LevelUpdated
            ]
        );
    }

    #[test]
    fn fog_reveals_ore() {
        let mut m = small();
        assert!(m.is_in_fog(Point::new(2, 2)));
        assert!(m.discovered_ore().is_empty());
        assert_eq!(m.clear_fog_around(Point::new(1, 1), 1), 9);
        assert_eq!(m.discovered_ore(), vec![Point::new(2, 2)]);
        assert!(!m.clear_fog(Point::new(2, 2)));
        m.fill_fog();
        assert!(m.discovered_ore().is_empty());
        assert!(m.is_in_fog(Point::new(-1, 0)));
    }
}
