use core::time::Duration;
use serde::Serialize;

use crate::*;

/// Deferred unflip of a mismatched pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PendingRevert {
    pub generation: Generation,
    pub pair: [TileIndex; 2],
    remaining: Duration,
}

impl PendingRevert {
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Single-slot, cancellable countdown driven by elapsed time from the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionScheduler {
    slot: Option<PendingRevert>,
}

impl ResolutionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    pub fn pending(&self) -> Option<&PendingRevert> {
        self.slot.as_ref()
    }

    pub fn arm(&mut self, generation: Generation, pair: [TileIndex; 2], delay: Duration) -> Result<()> {
        if self.slot.is_some() {
            return Err(GameError::ResolutionPending);
        }
        log::trace!("Armed revert of {:?} in {:?}", pair, delay);
        self.slot = Some(PendingRevert {
            generation,
            pair,
            remaining: delay,
        });
        Ok(())
    }

    /// Drops the pending action without firing it.
    pub fn cancel(&mut self) -> Option<PendingRevert> {
        let cancelled = self.slot.take();
        if let Some(pending) = &cancelled {
            log::trace!(
                "Cancelled revert of {:?} with {:?} left",
                pending.pair,
                pending.remaining
            );
        }
        cancelled
    }

    /// Counts down by `elapsed`, handing back the action once it is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PendingRevert> {
        let pending = self.slot.as_mut()?;
        pending.remaining = pending.remaining.saturating_sub(elapsed);
        if pending.remaining.is_zero() {
            self.slot.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn fires_once_after_delay() {
        let mut scheduler = ResolutionScheduler::new();
        scheduler.arm(1, [0, 1], DELAY).unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(400)), None);
        assert_eq!(
            scheduler.pending().map(PendingRevert::remaining),
            Some(Duration::from_millis(600))
        );

        let fired = scheduler.advance(Duration::from_millis(600)).unwrap();
        assert_eq!(fired.pair, [0, 1]);
        assert_eq!(fired.generation, 1);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.advance(DELAY), None);
    }

    #[test]
    fn overshoot_still_fires() {
        let mut scheduler = ResolutionScheduler::new();
        scheduler.arm(1, [2, 3], DELAY).unwrap();

        assert!(scheduler.advance(Duration::from_secs(5)).is_some());
    }

    #[test]
    fn second_arm_is_rejected() {
        let mut scheduler = ResolutionScheduler::new();
        scheduler.arm(1, [0, 1], DELAY).unwrap();

        assert_eq!(
            scheduler.arm(1, [2, 3], DELAY),
            Err(GameError::ResolutionPending)
        );
        assert_eq!(scheduler.pending().map(|pending| pending.pair), Some([0, 1]));
    }

    #[test]
    fn cancelled_action_never_fires() {
        let mut scheduler = ResolutionScheduler::new();
        scheduler.arm(4, [0, 1], DELAY).unwrap();

        assert!(scheduler.cancel().is_some());
        assert_eq!(scheduler.advance(DELAY), None);
        assert!(scheduler.arm(5, [0, 1], DELAY).is_ok());
    }
}
