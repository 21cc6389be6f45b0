use alloc::vec::Vec;
use rand::prelude::*;

/// Seeded source of uniform permutations.
#[derive(Clone, Debug)]
pub struct ShuffleEngine {
    rng: SmallRng,
}

impl ShuffleEngine {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fisher-Yates: walk from the last index down, swapping each slot with a uniformly chosen one at or
    /// before it.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }

    /// Returns a shuffled copy, `items` is left untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle_in_place(&mut copy);
        copy
    }

    /// Derives a seed for a child generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sorted(mut items: Vec<u32>) -> Vec<u32> {
        items.sort_unstable();
        items
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut engine = ShuffleEngine::from_seed(7);

        assert!(engine.shuffled::<u32>(&[]).is_empty());
        assert_eq!(engine.shuffled(&[42]), vec![42]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut engine = ShuffleEngine::from_seed(11);
        let input = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

        for _ in 0..32 {
            let output = engine.shuffled(&input);
            assert_eq!(sorted(output), sorted(input.clone()));
        }
    }

    #[test]
    fn shuffled_leaves_input_untouched() {
        let mut engine = ShuffleEngine::from_seed(3);
        let input = [1, 2, 3, 4, 5, 6];

        let _ = engine.shuffled(&input);

        assert_eq!(input, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let input: Vec<u32> = (0..20).collect();

        let a = ShuffleEngine::from_seed(99).shuffled(&input);
        let b = ShuffleEngine::from_seed(99).shuffled(&input);

        assert_eq!(a, b);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut engine = ShuffleEngine::from_seed(5);
        let mut seen_first = [false; 4];

        for _ in 0..256 {
            let output = engine.shuffled(&[0usize, 1, 2, 3]);
            seen_first[output[0]] = true;
        }

        assert_eq!(seen_first, [true; 4]);
    }
}
