//! **digbots-core**: the tile world shared by the digbots crates.
//!
//! Geometry primitives, tile records, the [`GridWorld`] query interface the
//! pathfinding crate consumes, and [`LevelMap`], the concrete world that
//! owns tile state, fog of war and change notifications.

pub mod config;
pub mod events;
pub mod geom;
pub mod level;
pub mod tile;
pub mod world;

pub use config::LevelConfig;
pub use events::EventQueue;
pub use geom::{Point, Range};
pub use level::LevelError;
pub use tile::{Tile, TileDefinition, TileKind};
pub use world::{DigOutcome, GridWorld, LevelMap, WorldEvent};
