#![no_std]

extern crate alloc;

use core::ops::BitOr;
use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pool::*;
pub use scheduler::*;
pub use session::*;
pub use shuffle::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod pool;
mod scheduler;
mod session;
mod shuffle;
mod tile;
mod types;
mod view;

/// Scoring and timing rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long a mismatched pair stays face up before it flips back.
    pub revert_delay: Duration,
    pub match_reward: Score,
    /// Deducted on mismatch, the score floors at zero.
    pub mismatch_penalty: Score,
}

impl GameConfig {
    pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(1000);

    pub const fn new(revert_delay: Duration, match_reward: Score, mismatch_penalty: Score) -> Self {
        Self {
            revert_delay,
            match_reward,
            mismatch_penalty,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REVERT_DELAY, 10, 2)
    }
}

/// Starting point of a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub level: Level,
    pub category: Category,
    /// Force a seed instead of random
    pub seed: Option<u64>,
    pub rules: GameConfig,
}

/// Outcome of selecting a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Flipped,
    Matched,
    Mismatched,
    LevelComplete,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Matched => true,
            Mismatched => true,
            LevelComplete => true,
        }
    }
}

/// Outcome of letting time pass
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Reverted([TileIndex; 2]),
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Reverted(_))
    }
}

/// Used to merge outcomes when several ticks are folded together
impl BitOr for TickOutcome {
    type Output = TickOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (reverted @ Self::Reverted(_), _) => reverted,
            (_, reverted) => reverted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = GameConfig::default();

        assert_eq!(rules.revert_delay, Duration::from_secs(1));
        assert_eq!(rules.match_reward, 10);
        assert_eq!(rules.mismatch_penalty, 2);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "level": 2, "category": "animal" }"#).unwrap();

        assert_eq!(config.level, Level::new(2).unwrap());
        assert_eq!(config.category, Category::Animal);
        assert_eq!(config.seed, None);
        assert_eq!(config.rules, GameConfig::default());
    }

    #[test]
    fn config_rejects_bad_level() {
        let result = serde_json::from_str::<SessionConfig>(r#"{ "level": 7 }"#);

        assert!(result.is_err());
    }

    #[test]
    fn tick_outcomes_merge() {
        use TickOutcome::*;

        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(NoChange | Reverted([0, 1]), Reverted([0, 1]));
        assert_eq!(Reverted([2, 3]) | NoChange, Reverted([2, 3]));
    }
}
