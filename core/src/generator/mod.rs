use alloc::vec::Vec;
use core::ops::Index;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, pool: &impl ImagePool, level: Level, category: Category) -> Result<Deck>;
}

/// Ordered tiles of one level/category instance. Every image appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Lays out `images` in the given order, numbering tiles from zero.
    pub fn from_images<I>(images: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        let tiles = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| {
                let id = TileId::try_from(i).map_err(|_| GameError::InvalidIndex(i))?;
                Ok(Tile::new(id, image.into()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(tiles)
    }

    pub fn validate(&self) -> Result<()> {
        let mut counts: HashMap<&ImageId, usize> = HashMap::with_capacity(self.tiles.len() / 2);
        for tile in &self.tiles {
            *counts.entry(&tile.image).or_default() += 1;
        }
        if counts.values().all(|&count| count == 2) {
            Ok(())
        } else {
            Err(GameError::UnpairedImage)
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: TileIndex) -> &mut Tile {
        &mut self.tiles[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn is_all_matched(&self) -> bool {
        self.tiles.iter().all(|tile| tile.matched)
    }
}

impl TryFrom<Vec<Tile>> for Deck {
    type Error = GameError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        let deck = Self { tiles };
        deck.validate()?;
        Ok(deck)
    }
}

impl From<Deck> for Vec<Tile> {
    fn from(deck: Deck) -> Self {
        deck.tiles
    }
}

impl Index<TileIndex> for Deck {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.tiles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_images_numbers_tiles_in_order() {
        let deck = Deck::from_images(["a", "b", "a", "b"]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck[2].id, 2);
        assert_eq!(deck[2].image.as_str(), "a");
        assert!(deck.iter().all(Tile::is_selectable));
    }

    #[test]
    fn from_images_rejects_unpaired_layouts() {
        assert_eq!(
            Deck::from_images(["a", "b", "a"]),
            Err(GameError::UnpairedImage)
        );
        assert_eq!(
            Deck::from_images(["a", "a", "a", "a"]),
            Err(GameError::UnpairedImage)
        );
    }

    #[test]
    fn deserialize_validates_pairing() {
        let paired = r#"[
            {"id":0,"image":"a","flipped":false,"matched":false},
            {"id":1,"image":"a","flipped":false,"matched":false}
        ]"#;
        let deck: Deck = serde_json::from_str(paired).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(
            serde_json::to_value(&deck).unwrap(),
            serde_json::to_value(deck.tiles()).unwrap()
        );

        let unpaired = r#"[
            {"id":0,"image":"a","flipped":false,"matched":false},
            {"id":1,"image":"b","flipped":false,"matched":false}
        ]"#;
        assert!(serde_json::from_str::<Deck>(unpaired).unwrap_err().is_data());
    }
}
