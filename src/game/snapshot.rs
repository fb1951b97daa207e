//! Observable game state for rendering.
//!
//! `GameSnapshot` gathers everything a UI reads after a change: the tableau
//! with its flags, the score, and the status predicates. It is a plain value
//! and serializes, so it can cross any boundary the caller needs.

use serde::{Deserialize, Serialize};

use super::selection::SelectionState;
use crate::cards::Card;

/// Point-in-time view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Visible cards in tableau order.
    pub tableau: Vec<Card>,

    pub score: i64,

    pub selection: SelectionState,

    /// Cards left to deal.
    pub cards_in_deck: usize,

    pub game_has_begun: bool,
    pub is_over: bool,
    pub has_cap_set: bool,
    pub has_full_non_set_selected: bool,

    /// True while a cap-set hint is flashing the add-cards control.
    pub in_add_cards_hint: bool,
}

impl GameSnapshot {
    /// Number of cards the UI has to lay out.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.len()
    }

    /// Whether the add-cards control should be enabled.
    #[must_use]
    pub fn can_add_cards(&self) -> bool {
        self.cards_in_deck > 0
    }
}
