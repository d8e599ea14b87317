/// Cost model and limits used by the searches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Penalty for stepping into an empty cell.
    pub empty_cell_cost: f64,
    /// Penalty per remaining HP for stepping into a solid tile.
    pub dig_cost_per_hp: f64,
    /// Added to the previous cell's score when a patrol picks its next step.
    pub backtrack_penalty: f64,
    /// Maximum patrol length. `None` derives it from the region size.
    pub patrol_step_limit: Option<usize>,
}

impl PathConfig {
    pub const DEFAULT_EMPTY_CELL_COST: f64 = 1.0;
    pub const DEFAULT_DIG_COST_PER_HP: f64 = 15.0;
    pub const DEFAULT_BACKTRACK_PENALTY: f64 = 2.0;
    pub const MIN_PATROL_STEP_LIMIT: usize = 64;

    pub fn new() -> Self {
        Self {
            empty_cell_cost: Self::DEFAULT_EMPTY_CELL_COST,
            dig_cost_per_hp: Self::DEFAULT_DIG_COST_PER_HP,
            backtrack_penalty: Self::DEFAULT_BACKTRACK_PENALTY,
            patrol_step_limit: None,
        }
    }

    pub fn with_dig_cost_per_hp(mut self, cost: f64) -> Self {
        self.dig_cost_per_hp = cost;
        self
    }

    pub fn with_patrol_step_limit(mut self, limit: usize) -> Self {
        self.patrol_step_limit = Some(limit);
        self
    }

    /// Step budget for a patrol over `candidates` cells.
    pub fn patrol_limit(&self, candidates: usize) -> usize {
        self.patrol_step_limit.unwrap_or_else(|| {
            candidates
                .saturating_mul(candidates)
                .max(Self::MIN_PATROL_STEP_LIMIT)
        })
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_config_round_trip() {
        let cfg = PathConfig::new().with_dig_cost_per_hp(4.5);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PathConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
