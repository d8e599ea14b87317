use digbots_core::{GridWorld, Point, Range};

use crate::config::PathConfig;
use crate::distance::euclidean;
use crate::neighbors::traversable;
use crate::traits::{AstarPather, Pather, WeightedPather};

// ---------------------------------------------------------------------------
// DigPather
// ---------------------------------------------------------------------------

/// Orthogonal movement over a [`GridWorld`], optionally through breakable
/// tiles, priced by the [`PathConfig`] cost model.
pub struct DigPather<'a, W: ?Sized> {
    world: &'a W,
    config: &'a PathConfig,
    can_dig: bool,
}

impl<'a, W: GridWorld + ?Sized> DigPather<'a, W> {
    pub fn new(world: &'a W, config: &'a PathConfig, can_dig: bool) -> Self {
        Self {
            world,
            config,
            can_dig,
        }
    }

    /// Penalty for entering `p`: flat when empty, proportional to the
    /// tile's current HP otherwise.
    pub fn entry_cost(&self, p: Point) -> f64 {
        match self.world.tile_at(p) {
            None => self.config.empty_cell_cost,
            Some(t) => self.config.dig_cost_per_hp * f64::from(t.hp),
        }
    }
}

impl<W: GridWorld + ?Sized> Pather for DigPather<'_, W> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.world.bounds();
        for n in p.neighbors_4() {
            if bounds.contains(n) && traversable(self.world, n, self.can_dig) {
                buf.push(n);
            }
        }
    }
}

impl<W: GridWorld + ?Sized> WeightedPather for DigPather<'_, W> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to) + self.entry_cost(to)
    }
}

impl<W: GridWorld + ?Sized> AstarPather for DigPather<'_, W> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Entry point for every query against one world.
///
/// A `Navigator` only borrows the world; each query allocates its own
/// scratch state and drops it before returning, so results always reflect
/// the tiles as they are at call time.
pub struct Navigator<'w, W> {
    pub(crate) world: &'w W,
    pub(crate) config: PathConfig,
}

impl<'w, W: GridWorld> Navigator<'w, W> {
    pub fn new(world: &'w W) -> Self {
        Self::with_config(world, PathConfig::default())
    }

    pub fn with_config(world: &'w W, config: PathConfig) -> Self {
        Self { world, config }
    }

    #[inline]
    pub fn world(&self) -> &'w W {
        self.world
    }

    #[inline]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.world.bounds()
    }

    /// Whether a search may step into `p`, bounds included.
    pub fn is_traversable(&self, p: Point, can_dig: bool) -> bool {
        self.bounds().contains(p) && traversable(self.world, p, can_dig)
    }

    pub(crate) fn pather(&self, can_dig: bool) -> DigPather<'_, W> {
        DigPather::new(self.world, &self.config, can_dig)
    }
}

#[cfg(test)]
mod tests {
    use digbots_core::{LevelMap, TileKind};

    use super::*;

    #[test]
    fn entry_cost_scales_with_hp() {
        let mut m = LevelMap::new(Range::sized(3, 1));
        m.place(Point::new(1, 0), TileKind::Ground);
        m.place(Point::new(2, 0), TileKind::Ore);
        let cfg = PathConfig::default();
        let p = DigPather::new(&m, &cfg, true);
        assert_eq!(p.entry_cost(Point::new(0, 0)), 1.0);
        assert_eq!(p.entry_cost(Point::new(1, 0)), 45.0);
        assert_eq!(p.cost(Point::new(1, 0), Point::new(2, 0)), 76.0);
        assert_eq!(p.estimate(Point::new(0, 0), Point::new(2, 0)), 2.0);
    }

    #[test]
    fn traversable_respects_bounds() {
        let m = LevelMap::new(Range::sized(2, 2));
        let nav = Navigator::new(&m);
        assert!(nav.is_traversable(Point::new(1, 1), false));
        assert!(!nav.is_traversable(Point::new(2, 1), true));
    }
}
