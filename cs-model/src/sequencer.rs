use std::time::Duration;

use bevy::time::{Timer, TimerMode};

pub const DEFAULT_TRIGGER_THRESHOLD: u32 = 3;
pub const DEFAULT_EXPLOSION_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub enum SequencerState {
    Rest,
    /// Counted triggers, still below the threshold.
    Triggered(u32),
    /// Threshold reached; the fuse burns down with the frame clock.
    Pending { fuse: Timer, triggers: u32 },
    Exploded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Counted; nothing visible yet.
    Counted(u32),
    /// This trigger reached the threshold and lit the fuse.
    Armed,
    /// The fuse is already burning; the trigger is counted but changes nothing.
    AlreadyArmed(u32),
    /// The model has already gone off.
    Ignored,
}

/// Trigger count, delayed explosion, reset.
///
/// The fuse timer lives inside [`SequencerState::Pending`], so leaving that
/// state drops it and a stale fuse can never fire.
#[derive(Debug, Clone)]
pub struct Sequencer {
    state: SequencerState,
    threshold: u32,
    delay: Duration,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_THRESHOLD, DEFAULT_EXPLOSION_DELAY)
    }
}

impl Sequencer {
    pub fn new(threshold: u32, delay: Duration) -> Self {
        Self {
            state: SequencerState::Rest,
            threshold: threshold.max(1),
            delay,
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn trigger_count(&self) -> u32 {
        match &self.state {
            SequencerState::Rest | SequencerState::Exploded => 0,
            SequencerState::Triggered(n) => *n,
            SequencerState::Pending { triggers, .. } => *triggers,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SequencerState::Pending { .. })
    }

    pub fn is_exploded(&self) -> bool {
        matches!(self.state, SequencerState::Exploded)
    }

    pub fn trigger(&mut self) -> TriggerOutcome {
        match &mut self.state {
            SequencerState::Exploded => TriggerOutcome::Ignored,
            SequencerState::Pending { triggers, .. } => {
                *triggers += 1;
                TriggerOutcome::AlreadyArmed(*triggers)
            }
            SequencerState::Rest | SequencerState::Triggered(_) => {
                let count = self.trigger_count() + 1;
                if count < self.threshold {
                    self.state = SequencerState::Triggered(count);
                    TriggerOutcome::Counted(count)
                } else {
                    self.state = SequencerState::Pending {
                        fuse: Timer::new(self.delay, TimerMode::Once),
                        triggers: count,
                    };
                    TriggerOutcome::Armed
                }
            }
        }
    }

    /// Burns the fuse by `delta`. Returns `true` on the tick it runs out; the
    /// caller is expected to detonate and then call [`Sequencer::mark_exploded`].
    pub fn tick(&mut self, delta: Duration) -> bool {
        let SequencerState::Pending { fuse, .. } = &mut self.state else {
            return false;
        };
        fuse.tick(delta);
        fuse.finished()
    }

    pub fn mark_exploded(&mut self) {
        self.state = SequencerState::Exploded;
    }

    /// Puts out a burning fuse. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = SequencerState::Rest;
        true
    }

    pub fn rearm(&mut self) {
        self.state = SequencerState::Rest;
    }
}
