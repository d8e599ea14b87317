//! Tile records held by the level map.

use std::fmt;

/// Material of a solid tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Ground,
    Ore,
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => f.write_str("ground"),
            Self::Ore => f.write_str("ore"),
        }
    }
}

/// Template a [`Tile`] is instantiated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileDefinition {
    pub kind: TileKind,
    pub hp: i32,
    pub breakable: bool,
}

impl TileDefinition {
    pub const fn new(kind: TileKind, hp: i32, breakable: bool) -> Self {
        Self {
            kind,
            hp,
            breakable,
        }
    }

    /// A fresh tile at full health.
    pub const fn build(self) -> Tile {
        Tile {
            kind: self.kind,
            hp: self.hp,
            max_hp: self.hp,
            breakable: self.breakable,
        }
    }
}

/// A solid cell. An absent tile means the cell is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub hp: i32,
    pub max_hp: i32,
    pub breakable: bool,
}

impl Tile {
    /// Whether a search may step into this tile.
    #[inline]
    pub fn diggable(&self, can_dig: bool) -> bool {
        self.breakable && can_dig
    }

    pub fn is_ore(&self) -> bool {
        self.kind == TileKind::Ore
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tile, hp {}/{}{}",
            self.kind,
            self.hp,
            self.max_hp,
            if self.breakable { "" } else { ", unbreakable" }
        )
    }
}
