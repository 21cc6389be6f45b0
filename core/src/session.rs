use core::time::Duration;
use web_time::{Instant, SystemTime, UNIX_EPOCH};

use crate::*;

/// A single player's run through the levels; owns the live engine and replaces it on every regeneration.
#[derive(Clone, Debug)]
pub struct Session<P: ImagePool = BuiltinPool> {
    pool: P,
    rules: GameConfig,
    seeds: ShuffleEngine,
    generation: Generation,
    engine: PlayEngine,
    last_poll: Option<Instant>,
}

impl Session<BuiltinPool> {
    pub fn with_builtin_pool(config: SessionConfig) -> Result<Self> {
        Self::new(BuiltinPool, config)
    }
}

impl<P: ImagePool> Session<P> {
    pub fn new(pool: P, config: SessionConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        log::debug!("seed: {}", seed);
        let mut seeds = ShuffleEngine::from_seed(seed);
        let deck = RandomDeckGenerator::new(seeds.next_seed()).generate(
            &pool,
            config.level,
            config.category,
        )?;
        let engine = PlayEngine::with_generation(
            deck,
            config.level,
            config.category,
            config.rules,
            0,
            0,
        );
        Ok(Self {
            pool,
            rules: config.rules,
            seeds,
            generation: 0,
            engine,
            last_poll: None,
        })
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn level(&self) -> Level {
        self.engine.level()
    }

    pub fn category(&self) -> Category {
        self.engine.category()
    }

    pub fn score(&self) -> Score {
        self.engine.score()
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        let level = Level::new(level)?;
        self.regenerate(level, self.category())
    }

    pub fn set_category(&mut self, category: Category) -> Result<()> {
        self.regenerate(self.level(), category)
    }

    /// Deals a fresh deck for the current level and category.
    pub fn restart(&mut self) -> Result<()> {
        self.regenerate(self.level(), self.category())
    }

    pub fn select(&mut self, index: TileIndex) -> Result<SelectOutcome> {
        let outcome = self.engine.select(index)?;
        if outcome == SelectOutcome::Mismatched {
            // the revert delay counts from the next poll, not from the last idle one
            self.last_poll = None;
        }
        Ok(outcome)
    }

    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        self.engine.tick(elapsed)
    }

    /// Advances the pending revert by the wall-clock time since the previous poll, or since the first poll
    /// after the mismatch that armed it.
    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        let elapsed = self
            .last_poll
            .replace(now)
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.tick(elapsed)
    }

    pub fn progression(&self) -> Progression {
        self.engine.progression()
    }

    /// Moves to the next level once the current one is complete, clamped at the last level.
    pub fn advance_level(&mut self) -> Result<Progression> {
        let progression = self.progression();
        if let Progression::NextLevel(level) = progression {
            self.regenerate(level, self.category())?;
        }
        Ok(progression)
    }

    fn regenerate(&mut self, level: Level, category: Category) -> Result<()> {
        let deck = RandomDeckGenerator::new(self.seeds.next_seed())
            .generate(&self.pool, level, category)
            .inspect_err(|err| log::warn!("Keeping current deck, regeneration failed: {}", err))?;

        if let Some(stale) = self.engine.cancel_pending() {
            log::debug!(
                "Cancelled revert of {:?} from generation {}",
                stale.pair,
                stale.generation
            );
        }

        self.generation = self.generation.wrapping_add(1);
        self.engine = PlayEngine::with_generation(
            deck,
            level,
            category,
            self.rules,
            self.generation,
            self.engine.score(),
        );
        self.last_poll = None;
        log::debug!(
            "Regenerated {} / {} as generation {}",
            level,
            category,
            self.generation
        );
        Ok(())
    }
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since| since.as_nanos() as u64)
        .unwrap_or_default()
}
