//! Game events, the event history, and observers.
//!
//! Every change the engine makes is described by a `GameEvent`. Events are
//! appended to an `EventHistory` and handed to every subscribed
//! `GameObserver`, so a UI layer can redraw on change without polling and
//! without the engine knowing anything about the UI.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::hint::HintKind;
use super::selection::SelectionState;
use crate::cards::{CardFace, SET_SIZE};

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    GameStarted {
        /// Cards placed on the tableau.
        dealt: usize,
    },

    /// Cards were added to the end of the tableau.
    CardsDealt {
        count: usize,
    },

    CardSelected(CardFace),
    CardDeselected(CardFace),

    /// Every selected card was deselected.
    SelectionCleared,

    /// Three selected cards form a set.
    SetFound([CardFace; SET_SIZE]),

    /// Three selected cards do not form a set.
    NonSetSelected([CardFace; SET_SIZE]),

    /// A confirmed set left the tableau.
    SetReplaced {
        /// Slots refilled from the deck.
        replaced: usize,
        /// Slots removed because the deck ran short.
        removed: usize,
    },

    /// The selection state machine moved.
    SelectionStateChanged(SelectionState),

    ScoreChanged {
        delta: i64,
        score: i64,
    },

    HintShown(HintKind),

    /// The hint finished or was cancelled.
    HintCleared,

    /// The add-cards prompt was raised (`true`) or lowered.
    AddCardsPrompt(bool),

    /// No further play is possible.
    GameOver {
        score: i64,
    },
}

/// An event with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Zero-based, strictly increasing within one engine.
    pub sequence: u32,
    pub event: GameEvent,
}

/// Append-only event log.
///
/// Backed by a persistent vector, so snapshots of the history are O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHistory {
    records: Vector<EventRecord>,
    next_sequence: u32,
}

impl EventHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event and return its record.
    pub fn push(&mut self, event: GameEvent) -> &EventRecord {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.records.push_back(EventRecord { sequence, event });
        &self.records[self.records.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Events only, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.records.iter().map(|r| &r.event)
    }

    #[must_use]
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// Records with `sequence >= from`.
    pub fn since(&self, from: u32) -> impl Iterator<Item = &EventRecord> {
        self.records.iter().filter(move |r| r.sequence >= from)
    }

    /// Drop all records. Sequence numbers keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Receives engine events as they happen.
///
/// Implemented for any `FnMut(&GameEvent)` closure.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u32);

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_id: u32,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns true if the observer was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
