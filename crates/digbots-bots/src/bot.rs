use digbots_core::{DigOutcome, LevelMap, Point, WorldEvent};

use crate::config::BotConfig;
use crate::digger::DigBot;
use crate::scanner::ScannerBot;

/// What a bot did with one action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BotAction {
    Moved(Point),
    Dug { cell: Point, outcome: DigOutcome },
    /// Nothing to do right now; try again later.
    Waiting,
    /// The bot is done and needs no further actions.
    Finished,
}

impl BotAction {
    /// Ticks until the bot should act again, `None` once it is finished.
    pub fn delay(&self, config: &BotConfig) -> Option<u64> {
        match self {
            Self::Moved(_) | Self::Waiting => Some(config.move_delay),
            Self::Dug { .. } => Some(config.dig_delay),
            Self::Finished => None,
        }
    }
}

/// Any bot the simulation can drive.
#[derive(Debug)]
pub enum Bot {
    Digger(DigBot),
    Scanner(ScannerBot),
}

impl Bot {
    pub fn position(&self) -> Point {
        match self {
            Self::Digger(b) => b.position(),
            Self::Scanner(b) => b.position(),
        }
    }

    pub fn config(&self) -> &BotConfig {
        match self {
            Self::Digger(b) => b.config(),
            Self::Scanner(b) => b.config(),
        }
    }

    pub fn act(&mut self, world: &mut LevelMap) -> BotAction {
        match self {
            Self::Digger(b) => b.act(world),
            Self::Scanner(b) => b.act(world),
        }
    }

    pub fn on_world_event(&mut self, event: &WorldEvent) {
        match self {
            Self::Digger(b) => b.on_world_event(event),
            Self::Scanner(b) => b.on_world_event(event),
        }
    }
}

impl From<DigBot> for Bot {
    fn from(b: DigBot) -> Self {
        Self::Digger(b)
    }
}

impl From<ScannerBot> for Bot {
    fn from(b: ScannerBot) -> Self {
        Self::Scanner(b)
    }
}
