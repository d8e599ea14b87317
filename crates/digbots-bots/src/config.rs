/// Bot timing, in simulation ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotConfig {
    /// Ticks between two moves, also used while waiting.
    pub move_delay: u64,
    /// Ticks between two hits on the same tile.
    pub dig_delay: u64,
    /// Fog cleared around a scanner, in cells (Chebyshev distance).
    pub reveal_radius: i32,
}

impl BotConfig {
    pub const DEFAULT_MOVE_DELAY: u64 = 1;
    pub const DEFAULT_DIG_DELAY: u64 = 4;
    pub const DEFAULT_REVEAL_RADIUS: i32 = 1;

    pub fn new() -> Self {
        Self {
            move_delay: Self::DEFAULT_MOVE_DELAY,
            dig_delay: Self::DEFAULT_DIG_DELAY,
            reveal_radius: Self::DEFAULT_REVEAL_RADIUS,
        }
    }

    pub fn with_dig_delay(mut self, ticks: u64) -> Self {
        self.dig_delay = ticks;
        self
    }

    pub fn with_reveal_radius(mut self, radius: i32) -> Self {
        self.reveal_radius = radius;
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BotAction;

    #[test]
    fn digging_is_slower_than_walking() {
        let cfg = BotConfig::default();
        let dug = BotAction::Dug {
            cell: digbots_core::Point::ZERO,
            outcome: digbots_core::DigOutcome::Destroyed,
        };
        assert_eq!(dug.delay(&cfg), Some(4));
        assert_eq!(BotAction::Waiting.delay(&cfg), Some(1));
        assert_eq!(BotAction::Finished.delay(&cfg), None);
        assert_eq!(cfg.with_dig_delay(9).dig_delay, 9);
    }
}
