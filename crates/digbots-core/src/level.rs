//! ASCII level layouts.
//!
//! Each line is one row of cells and the first line is the **top** row, so
//! a layout reads the way it is drawn. Runes:
//!
//! | Rune | Cell |
//! |---|---|
//! | `.` | empty |
//! | `#` | ground |
//! | `*` | ore |
//! | `%` | bedrock (unbreakable ground) |

use thiserror::Error;

use crate::config::LevelConfig;
use crate::geom::{Point, Range};
use crate::tile::TileKind;
use crate::world::{GridWorld, LevelMap};

pub const EMPTY: char = '.';
pub const GROUND: char = '#';
pub const ORE: char = '*';
pub const BEDROCK: char = '%';

/// Errors produced while parsing a level layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level layout is empty")]
    Empty,
    #[error("level row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level contains invalid rune {ch:?} at {pos}")]
    InvalidRune { ch: char, pos: Point },
}

impl LevelMap {
    /// Parse a layout with the default tile templates.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        Self::parse_with_config(s, LevelConfig::default())
    }

    /// Parse a layout. Leading and trailing whitespace on every line is
    /// ignored, as are blank lines around the layout.
    pub fn parse_with_config(s: &str, config: LevelConfig) -> Result<Self, LevelError> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(LevelError::Empty);
        }
        let height = rows.len() as i32;

        let mut map = LevelMap::with_config(Range::sized(width as i32, height), config);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                match ch {
                    EMPTY => {}
                    GROUND => map.place(pos, TileKind::Ground),
                    ORE => map.place(pos, TileKind::Ore),
                    BEDROCK => map.place_bedrock(pos),
                    _ => return Err(LevelError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(map)
    }

    /// Draw the level back into its layout form.
    pub fn render(&self) -> String {
        render(self)
    }
}

/// Draw any world as a layout, top row first.
pub fn render(world: &impl GridWorld) -> String {
    let b = world.bounds();
    let mut out = String::with_capacity(b.len() + b.height().max(0) as usize);
    for y in (b.min.y..b.max.y).rev() {
        for x in b.min.x..b.max.x {
            let ch = match world.tile_at(Point::new(x, y)) {
                None => EMPTY,
                Some(t) if !t.breakable => BEDROCK,
                Some(t) if t.is_ore() => ORE,
                Some(_) => GROUND,
            };
            out.push(ch);
        }
        if y > b.min.y {
            out.push('\n');
        }
    }
    out
}
