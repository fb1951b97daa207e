//! Cancellable hint timer.
//!
//! A hint is shown immediately and undone later. The engine owns a single
//! `HintTimer`; scheduling a new hint drops whatever the previous one still
//! had pending, so two hints can never race.
//!
//! The timer never reads a wall clock. The caller advances it with the time
//! elapsed since its last call, which keeps the engine synchronous and makes
//! every schedule reproducible in tests.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardFace, SET_SIZE};

/// What a hint is pointing at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintKind {
    /// A set on the tableau, shown by selecting it.
    Set([CardFace; SET_SIZE]),
    /// No set exists; the add-cards control is flashed instead.
    AddCards,
}

/// A deferred action of a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintStep {
    /// Deselect the hinted set.
    ClearSelection,
    /// Raise the add-cards prompt.
    PromptOn,
    /// Lower the add-cards prompt.
    PromptOff,
}

/// Single-slot scheduler for hint steps.
#[derive(Clone, Debug, Default)]
pub struct HintTimer {
    now: Duration,
    pending: VecDeque<(Duration, HintStep)>,
    active: Option<HintKind>,
}

impl HintTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a hint, replacing any hint still pending.
    ///
    /// `steps` are offsets from now and must be in ascending order.
    pub fn schedule(
        &mut self,
        kind: HintKind,
        steps: impl IntoIterator<Item = (Duration, HintStep)>,
    ) {
        let now = self.now;

        self.pending = steps
            .into_iter()
            .map(|(offset, step)| (now + offset, step))
            .collect();
        debug_assert!(
            self.pending.iter().zip(self.pending.iter().skip(1)).all(|(a, b)| a.0 <= b.0),
            "hint steps must be in ascending order"
        );
        self.active = Some(kind);
    }

    /// Drop the active hint and its pending steps.
    ///
    /// Returns what was being hinted, if anything.
    pub fn cancel(&mut self) -> Option<HintKind> {
        self.pending.clear();
        self.active.take()
    }

    /// Move the clock forward and return the steps that fell due, in order.
    ///
    /// The hint is finished once its last step has been returned.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[HintStep; 3]> {
        self.now += elapsed;

        let mut due = SmallVec::new();
        while let Some(&(at, step)) = self.pending.front() {
            if at > self.now {
                break;
            }
            self.pending.pop_front();
            due.push(step);
        }

        if self.pending.is_empty() {
            self.active = None;
        }
        due
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_kind(&self) -> Option<HintKind> {
        self.active
    }

    /// Time left until the next step, or `None` when idle.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|&(at, _)| at.saturating_sub(self.now))
    }
}
