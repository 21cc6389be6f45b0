use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Stable identity of a tile within one deck.
pub type TileId = u16;

/// Position of a tile in the current deck ordering.
pub type TileIndex = usize;

/// Points accumulated over a session.
pub type Score = u32;

/// Identifies one engine instance within a session, bumped on every regeneration.
pub type Generation = u64;

/// Difficulty tier, controls how many pairs a deck holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(3);

    pub const fn new(level: u8) -> Result<Self> {
        if level >= Self::MIN.0 && level <= Self::MAX.0 {
            Ok(Self(level))
        } else {
            Err(GameError::InvalidLevel(level))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Distinct images drawn from the pool for this level.
    pub const fn pair_count(self) -> usize {
        2 * self.0 as usize
    }

    pub const fn tile_count(self) -> usize {
        4 * self.0 as usize
    }

    pub const fn is_last(self) -> bool {
        self.0 >= Self::MAX.0
    }

    /// Next level, clamped to the last one.
    pub const fn saturating_next(self) -> Self {
        if self.is_last() {
            Self::MAX
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

/// Image theme a deck draws from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flower,
    Animal,
    Random,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Flower, Category::Animal, Category::Random];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flower => "flower",
            Self::Animal => "animal",
            Self::Random => "random",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Flower
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(key.trim()))
            .ok_or(GameError::InvalidCategory)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message shown after the most recent resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    Match,
    Retry,
}

impl Feedback {
    pub const fn message(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Match => "🌟 Great job! You found a match!",
            Self::Retry => "🌀 Try again!",
        }
    }
}

/// Where the selection protocol currently stands, derived from selection and lock.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OnePicked,
    Resolving,
}

/// What the caller may do once a level is finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progression {
    InProgress,
    NextLevel(Level),
    GameComplete,
}
