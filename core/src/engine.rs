use core::num::Saturating;
use core::time::Duration;
use serde::Serialize;
use smallvec::SmallVec;

use crate::*;

/// Indices flipped and not yet resolved, never more than two.
pub type Selection = SmallVec<[TileIndex; 2]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayEngine {
    deck: Deck,
    level: Level,
    category: Category,
    generation: Generation,
    rules: GameConfig,
    selection: Selection,
    scheduler: ResolutionScheduler,
    locked: bool,
    score: Saturating<Score>,
    feedback: Feedback,
}

impl PlayEngine {
    pub fn new(deck: Deck, level: Level, category: Category, rules: GameConfig) -> Self {
        Self::with_generation(deck, level, category, rules, 0, 0)
    }

    /// Fresh engine for one regeneration of a session, carrying the session score over.
    pub fn with_generation(
        deck: Deck,
        level: Level,
        category: Category,
        rules: GameConfig,
        generation: Generation,
        score: Score,
    ) -> Self {
        Self {
            deck,
            level,
            category,
            generation,
            rules,
            selection: SmallVec::new(),
            scheduler: ResolutionScheduler::new(),
            locked: false,
            score: Saturating(score),
            feedback: Feedback::None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn tiles(&self) -> &[Tile] {
        self.deck.tiles()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn rules(&self) -> &GameConfig {
        &self.rules
    }

    pub fn selection(&self) -> &[TileIndex] {
        &self.selection
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn pending_revert(&self) -> Option<&PendingRevert> {
        self.scheduler.pending()
    }

    pub fn phase(&self) -> Phase {
        match (self.locked, self.selection.len()) {
            (true, _) => Phase::Resolving,
            (false, 0) => Phase::Idle,
            (false, _) => Phase::OnePicked,
        }
    }

    pub fn is_level_complete(&self) -> bool {
        self.deck.is_all_matched()
    }

    pub fn progression(&self) -> Progression {
        if !self.is_level_complete() {
            Progression::InProgress
        } else if self.level.is_last() {
            Progression::GameComplete
        } else {
            Progression::NextLevel(self.level.saturating_next())
        }
    }

    pub fn can_select(&self, index: TileIndex) -> bool {
        !self.locked && self.deck.get(index).is_some_and(Tile::is_selectable)
    }

    pub fn select(&mut self, index: TileIndex) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        if index >= self.deck.len() {
            return Err(GameError::InvalidIndex(index));
        }

        if !self.can_select(index) {
            log::trace!("Ignored selection of tile {} (locked: {})", index, self.locked);
            return Ok(NoChange);
        }

        self.deck.tile_mut(index).flipped = true;
        self.selection.push(index);

        let &[first, second] = self.selection.as_slice() else {
            return Ok(Flipped);
        };

        Ok(if self.deck[first].image == self.deck[second].image {
            self.resolve_match(first, second)
        } else {
            self.resolve_mismatch(first, second)?
        })
    }

    fn resolve_match(&mut self, first: TileIndex, second: TileIndex) -> SelectOutcome {
        self.deck.tile_mut(first).matched = true;
        self.deck.tile_mut(second).matched = true;
        self.score += self.rules.match_reward;
        self.feedback = Feedback::Match;
        self.selection.clear();
        log::debug!(
            "Matched tiles {} and {} ({}), score {}",
            first,
            second,
            self.deck[first].image,
            self.score
        );

        if self.is_level_complete() {
            log::debug!("{} complete for {}", self.level, self.category);
            SelectOutcome::LevelComplete
        } else {
            SelectOutcome::Matched
        }
    }

    fn resolve_mismatch(&mut self, first: TileIndex, second: TileIndex) -> Result<SelectOutcome> {
        self.scheduler
            .arm(self.generation, [first, second], self.rules.revert_delay)?;
        self.feedback = Feedback::Retry;
        self.locked = true;
        self.score -= self.rules.mismatch_penalty;
        log::debug!(
            "Mismatched tiles {} and {}, score {}",
            first,
            second,
            self.score
        );
        Ok(SelectOutcome::Mismatched)
    }

    /// Lets `elapsed` pass on the pending revert, applying it once due.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        let Some(pending) = self.scheduler.advance(elapsed) else {
            return TickOutcome::NoChange;
        };

        if pending.generation != self.generation {
            log::warn!(
                "Dropping stale revert from generation {}, current is {}",
                pending.generation,
                self.generation
            );
            return TickOutcome::NoChange;
        }

        for index in pending.pair {
            let tile = self.deck.tile_mut(index);
            if !tile.matched {
                tile.flipped = false;
            }
        }
        self.selection.clear();
        self.locked = false;
        log::trace!("Reverted tiles {:?}", pending.pair);
        TickOutcome::Reverted(pending.pair)
    }

    /// Drops any pending revert and returns to idle with the pair face down, used before the engine is
    /// replaced.
    pub(crate) fn cancel_pending(&mut self) -> Option<PendingRevert> {
        let cancelled = self.scheduler.cancel()?;
        for &index in &self.selection {
            let tile = self.deck.tile_mut(index);
            if !tile.matched {
                tile.flipped = false;
            }
        }
        self.selection.clear();
        self.locked = false;
        Some(cancelled)
    }
}
