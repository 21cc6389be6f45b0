use serde::{Deserialize, Serialize};

use crate::*;

/// A single card in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub image: ImageId,
    pub flipped: bool,
    pub matched: bool,
}

impl Tile {
    pub const fn new(id: TileId, image: ImageId) -> Self {
        Self {
            id,
            image,
            flipped: false,
            matched: false,
        }
    }

    /// Whether a selection may flip this tile.
    pub const fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    pub fn face(&self) -> TileFace {
        if self.flipped || self.matched {
            TileFace::Shown(self.image.clone())
        } else {
            TileFace::Hidden
        }
    }
}

/// Player-visible side of a tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    #[default]
    Hidden,
    Shown(ImageId),
}

impl TileFace {
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}
