use hashbrown::HashSet;

use super::*;

/// Generation strategy that draws distinct images at random and deals each pair into a shuffled layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, pool: &impl ImagePool, level: Level, category: Category) -> Result<Deck> {
        let images = pool
            .images_for(category)
            .ok_or(GameError::InvalidCategory)?;

        // duplicates in the pool would break pairing
        let mut seen = HashSet::with_capacity(images.len());
        let distinct: Vec<&ImageId> = images.iter().filter(|&image| seen.insert(image)).collect();
        if distinct.len() < images.len() {
            log::warn!(
                "Pool for {} lists {} duplicate images, ignoring them",
                category,
                images.len() - distinct.len()
            );
        }

        let required = level.pair_count();
        if distinct.len() < required {
            return Err(GameError::InsufficientPoolSize {
                required,
                available: distinct.len(),
            });
        }

        let mut shuffle = ShuffleEngine::from_seed(self.seed);
        let picked = shuffle.shuffled(&distinct);
        let picked = &picked[..required];

        let mut layout: Vec<ImageId> = picked
            .iter()
            .chain(picked.iter())
            .map(|&image| image.clone())
            .collect();
        shuffle.shuffle_in_place(&mut layout);

        let deck = Deck::from_images(layout)?;
        log::debug!(
            "Generated {} deck for {} with {} tiles, seed {}",
            category,
            level,
            deck.len(),
            self.seed
        );
        Ok(deck)
    }
}
