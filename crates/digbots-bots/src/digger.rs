//! A bot that tunnels its way to a target cell.

use digbots_core::{DigOutcome, GridWorld, LevelMap, Point, WorldEvent};
use digbots_paths::{Navigator, PathConfig};
use log::{info, trace};

use crate::bot::BotAction;
use crate::config::BotConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigState {
    /// No path planned yet.
    Idle,
    Moving,
    Digging { cell: Point },
    Finished,
    /// The last plan found no way to the target.
    Stuck,
}

/// Follows a dig-through path to `target`, hitting every breakable tile on
/// the way until it breaks.
///
/// The path is planned lazily on the first action and again after every
/// [`WorldEvent::LevelUpdated`].
#[derive(Debug)]
pub struct DigBot {
    position: Point,
    target: Point,
    path: Vec<Point>,
    /// Index of `position` in `path`.
    path_idx: usize,
    state: DigState,
    needs_replan: bool,
    config: BotConfig,
    path_config: PathConfig,
}

impl DigBot {
    pub fn new(position: Point, target: Point) -> Self {
        Self::with_config(position, target, BotConfig::default(), PathConfig::default())
    }

    pub fn with_config(
        position: Point,
        target: Point,
        config: BotConfig,
        path_config: PathConfig,
    ) -> Self {
        Self {
            position,
            target,
            path: Vec::new(),
            path_idx: 0,
            state: DigState::Idle,
            needs_replan: true,
            config,
            path_config,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn state(&self) -> DigState {
        self.state
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The cells still ahead, the current position excluded.
    pub fn remaining_path(&self) -> &[Point] {
        self.path.get(self.path_idx + 1..).unwrap_or(&[])
    }

    /// Point the bot at a new target.
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
        self.state = DigState::Idle;
        self.needs_replan = true;
    }

    fn plan(&mut self, world: &impl GridWorld) {
        let nav = Navigator::with_config(world, self.path_config.clone());
        self.path = nav.find_path(self.position, self.target, true);
        self.path_idx = 0;
        self.needs_replan = false;
        self.state = if self.path.is_empty() {
            DigState::Stuck
        } else {
            DigState::Moving
        };
        trace!(
            "digger at {} planned {} cells to {}",
            self.position,
            self.path.len(),
            self.target
        );
    }

    /// Take one action: move a cell, hit a tile, or wait.
    pub fn act(&mut self, world: &mut LevelMap) -> BotAction {
        if self.state == DigState::Finished {
            return BotAction::Finished;
        }
        if self.position == self.target {
            info!("digger reached {}", self.target);
            self.state = DigState::Finished;
            return BotAction::Finished;
        }
        if self.needs_replan {
            self.plan(&*world);
        }

        let Some(&next) = self.path.get(self.path_idx + 1) else {
            self.state = DigState::Stuck;
            return BotAction::Waiting;
        };

        match world.tile_at(next) {
            None => {
                self.position = next;
                self.path_idx += 1;
                self.state = DigState::Moving;
                trace!("digger moved to {next}");
                BotAction::Moved(next)
            }
            Some(tile) if tile.breakable => {
                self.state = DigState::Digging { cell: next };
                let outcome = world.dig_tile(next);
                trace!("digger hit {next}: {outcome:?}");
                BotAction::Dug {
                    cell: next,
                    outcome,
                }
            }
            Some(_) => {
                // Bedrock appeared on the path; wait for the next replan.
                self.needs_replan = true;
                self.state = DigState::Stuck;
                BotAction::Waiting
            }
        }
    }

    pub fn on_world_event(&mut self, event: &WorldEvent) {
        if matches!(event, WorldEvent::LevelUpdated) {
            self.needs_replan = true;
        }
    }

    /// Whether the last dig broke the tile the bot was working on.
    pub fn broke_through(action: &BotAction) -> bool {
        matches!(
            action,
            BotAction::Dug {
                outcome: DigOutcome::Destroyed,
                ..
            }
        )
    }
}
