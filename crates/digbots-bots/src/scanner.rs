//! A bot that patrols its cavity and lifts the fog of war.

use digbots_core::{GridWorld, LevelMap, Point, WorldEvent};
use digbots_paths::{Navigator, PathConfig};
use log::{info, trace};

use crate::bot::BotAction;
use crate::config::BotConfig;

/// Walks the patrol route of its cavity over and over, clearing fog around
/// every cell it passes and remembering the ore it uncovers.
#[derive(Debug)]
pub struct ScannerBot {
    position: Point,
    route: Vec<Point>,
    /// Index of the next cell to walk to.
    route_idx: usize,
    needs_replan: bool,
    found_ore: Vec<Point>,
    config: BotConfig,
    path_config: PathConfig,
}

impl ScannerBot {
    pub fn new(position: Point) -> Self {
        Self::with_config(position, BotConfig::default(), PathConfig::default())
    }

    pub fn with_config(position: Point, config: BotConfig, path_config: PathConfig) -> Self {
        Self {
            position,
            route: Vec::new(),
            route_idx: 0,
            needs_replan: true,
            found_ore: Vec::new(),
            config,
            path_config,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The full planned walk, approach leg included.
    pub fn route(&self) -> &[Point] {
        &self.route
    }

    /// Ore cells this bot uncovered, in discovery order.
    pub fn found_ore(&self) -> &[Point] {
        &self.found_ore
    }

    /// Plan a patrol of the current cavity.
    ///
    /// The patrol does not start where the bot stands, so the walk is
    /// prefixed with a path to its first cell. The bot already occupies
    /// index 0, so walking resumes at index 1.
    fn plan(&mut self, world: &impl GridWorld) {
        let nav = Navigator::with_config(world, self.path_config.clone());
        let patrol = nav.patrol_route(self.position);
        self.route = match patrol.first() {
            None => Vec::new(),
            Some(&first) if first == self.position => patrol,
            Some(&first) => {
                let mut walk = nav.find_path(self.position, first, false);
                if walk.is_empty() {
                    walk.push(self.position);
                }
                walk.extend_from_slice(&patrol[1..]);
                walk
            }
        };
        self.route_idx = 1;
        self.needs_replan = false;
        trace!(
            "scanner at {} planned a {}-step patrol",
            self.position,
            self.route.len()
        );
    }

    fn reveal(&mut self, world: &mut LevelMap) {
        let r = self.config.reveal_radius;
        for dy in -r..=r {
            for dx in -r..=r {
                let p = self.position.shift(dx, dy);
                if world.clear_fog(p) && world.tile_at(p).is_some_and(|t| t.is_ore()) {
                    info!("scanner found ore at {p}");
                    self.found_ore.push(p);
                }
            }
        }
    }

    /// Take one action: step along the patrol, replanning at its end.
    pub fn act(&mut self, world: &mut LevelMap) -> BotAction {
        if self.route.is_empty() && !self.needs_replan {
            return BotAction::Waiting;
        }
        if self.needs_replan || self.route_idx >= self.route.len() {
            self.reveal(world);
            self.plan(&*world);
        }

        let Some(&next) = self.route.get(self.route_idx) else {
            return BotAction::Waiting;
        };
        if !world.is_empty_at(next) || !next.is_adjacent_4(self.position) {
            self.needs_replan = true;
            return BotAction::Waiting;
        }

        self.position = next;
        self.route_idx += 1;
        self.reveal(world);
        BotAction::Moved(next)
    }

    pub fn on_world_event(&mut self, event: &WorldEvent) {
        if matches!(event, WorldEvent::LevelUpdated) {
            self.needs_replan = true;
        }
    }
}
