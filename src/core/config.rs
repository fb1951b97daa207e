//! Game configuration types.
//!
//! Scoring, hint timing and deck composition come from a `GameConfig`.
//! `GameConfig::default()` is the standard game. Deal sizes follow from the
//! matching rule and live with the card model (`cards::SET_SIZE`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which cards go into a new deck.
///
/// The reduced decks keep the matching rule intact while shortening a game,
/// which makes them useful for exercising the end-of-deck paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// All 81 combinations of the four features.
    #[default]
    Full,
    /// 27 cards: every shape, shading and color, all with a count of one.
    Limited,
    /// 9 cards: every shape and shading, first color, count of one.
    VeryLimited,
}

impl DeckKind {
    /// Number of cards a fresh deck of this kind holds.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckKind::Full => 81,
            DeckKind::Limited => 27,
            DeckKind::VeryLimited => 9,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shuffle stream.
    pub seed: u64,

    /// Deck composition.
    pub deck: DeckKind,

    /// Score gained for a correct set.
    pub reward: i64,

    /// Score lost for a wrong triple, a hint, or asking for cards while a
    /// set is available.
    pub penalty: i64,

    /// How long a hinted set stays selected.
    pub hint_duration: Duration,

    /// Spacing of the add-cards prompt blink during a cap-set hint.
    pub add_cards_blink_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            deck: DeckKind::Full,
            reward: 2,
            penalty: 1,
            hint_duration: Duration::from_millis(1000),
            add_cards_blink_interval: Duration::from_millis(500),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    /// Set the reward and penalty.
    #[must_use]
    pub fn with_scoring(mut self, reward: i64, penalty: i64) -> Self {
        self.reward = reward;
        self.penalty = penalty;
        self
    }

    /// Set the hint display time.
    #[must_use]
    pub fn with_hint_duration(mut self, duration: Duration) -> Self {
        self.hint_duration = duration;
        self
    }

    /// Set the add-cards blink spacing.
    #[must_use]
    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.add_cards_blink_interval = interval;
        self
    }
}
