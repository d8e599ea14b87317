//! Level construction parameters.

use crate::tile::{TileDefinition, TileKind};

/// Tile templates used when building a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelConfig {
    pub ground: TileDefinition,
    pub ore: TileDefinition,
    /// Unbreakable ground.
    pub bedrock: TileDefinition,
}

impl LevelConfig {
    pub const DEFAULT_GROUND_HP: i32 = 3;
    pub const DEFAULT_ORE_HP: i32 = 5;

    pub fn new() -> Self {
        Self {
            ground: TileDefinition::new(TileKind::Ground, Self::DEFAULT_GROUND_HP, true),
            ore: TileDefinition::new(TileKind::Ore, Self::DEFAULT_ORE_HP, true),
            bedrock: TileDefinition::new(TileKind::Ground, 1, false),
        }
    }

    pub fn with_ground_hp(mut self, hp: i32) -> Self {
        self.ground.hp = hp;
        self
    }

    pub fn with_ore_hp(mut self, hp: i32) -> Self {
        self.ore.hp = hp;
        self
    }

    /// Template for a tile kind. Bedrock is only reachable through
    /// [`bedrock`](Self::bedrock) since it shares the ground kind.
    pub fn definition(&self, kind: TileKind) -> TileDefinition {
        match kind {
            TileKind::Ground => self.ground,
            TileKind::Ore => self.ore,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new()
    }
}
