//! Bot controllers driven by the digbots pathfinding queries.
//!
//! - [`DigBot`] tunnels to a target along a dig-through A\* path.
//! - [`ScannerBot`] patrols its cavity and clears the fog of war.
//! - [`Simulation`] owns a [`LevelMap`](digbots_core::LevelMap), schedules
//!   bot actions by tick and forwards world events to every bot.

mod bot;
mod config;
mod digger;
mod scanner;
mod sim;

pub use bot::{Bot, BotAction};
pub use config::BotConfig;
pub use digger::{DigBot, DigState};
pub use scanner::ScannerBot;
pub use sim::{BotId, Simulation};
