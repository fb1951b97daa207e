//! The selection state machine.
//!
//! Every click on a tableau card runs through `transition`, a pure function
//! from (state, tableau, clicked index) to the next state plus a list of
//! effects. The engine applies the effects; nothing here touches the
//! tableau, which keeps the transition table testable on its own.
//!
//! | State | Click | Effects | Next |
//! |---|---|---|---|
//! | `LessThanMaxSelected` | unselected card, < 3 now selected | select | `LessThanMaxSelected` |
//! | `LessThanMaxSelected` | selected card | deselect | `LessThanMaxSelected` |
//! | `LessThanMaxSelected` | 3rd card, forms a set | select, mark set, reward | `MaxSelectedAsSet` |
//! | `LessThanMaxSelected` | 3rd card, no set | select, mark non-set, penalty | `MaxSelectedAsNonSet` |
//! | `MaxSelectedAsSet` | any card | replace selected set | `LessThanMaxSelected` |
//! | `MaxSelectedAsNonSet` | any card | deselect all, select clicked | `LessThanMaxSelected` |

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::{Card, SET_SIZE};

/// Where the player is in building a triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    /// Zero to two cards selected.
    #[default]
    LessThanMaxSelected,
    /// Three cards selected and they form a set.
    MaxSelectedAsSet,
    /// Three cards selected and they do not form a set.
    MaxSelectedAsNonSet,
}

/// A change the engine must make to carry out a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Select the card at this tableau index.
    Select(usize),
    /// Deselect the card at this tableau index.
    Deselect(usize),
    /// Deselect every selected card.
    DeselectAll,
    /// Flag these cards as a confirmed set.
    MarkSet([usize; SET_SIZE]),
    /// Flag these cards as a rejected triple.
    MarkNonSet([usize; SET_SIZE]),
    /// Add the configured reward to the score.
    Reward,
    /// Subtract the configured penalty from the score.
    Penalty,
    /// Consume the selected set: refill from the deck or shrink the tableau.
    ReplaceSelectedSet,
}

/// Result of one click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: SelectionState,
    /// Applied in order.
    pub effects: SmallVec<[SelectionEffect; 4]>,
}

impl Transition {
    fn new(next: SelectionState, effects: SmallVec<[SelectionEffect; 4]>) -> Self {
        Self { next, effects }
    }
}

/// Indices of the selected cards, ascending.
#[must_use]
pub fn selected_indices(tableau: &[Card]) -> SmallVec<[usize; SET_SIZE]> {
    tableau
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_selected())
        .map(|(i, _)| i)
        .collect()
}

/// Compute the transition for a click on `tableau[clicked]`.
///
/// `clicked` must be a valid index; the engine checks this before calling.
#[must_use]
pub fn transition(state: SelectionState, tableau: &[Card], clicked: usize) -> Transition {
    debug_assert!(clicked < tableau.len(), "clicked index out of range");

    match state {
        SelectionState::MaxSelectedAsSet => Transition::new(
            SelectionState::LessThanMaxSelected,
            smallvec![SelectionEffect::ReplaceSelectedSet],
        ),
        SelectionState::MaxSelectedAsNonSet => Transition::new(
            SelectionState::LessThanMaxSelected,
            smallvec![SelectionEffect::DeselectAll, SelectionEffect::Select(clicked)],
        ),
        SelectionState::LessThanMaxSelected => less_than_max(tableau, clicked),
    }
}

fn less_than_max(tableau: &[Card], clicked: usize) -> Transition {
    let selected = selected_indices(tableau);

    if tableau[clicked].is_selected() {
        return Transition::new(
            SelectionState::LessThanMaxSelected,
            smallvec![SelectionEffect::Deselect(clicked)],
        );
    }

    // A full selection without a verdict cannot arise from clicks alone.
    if selected.len() >= SET_SIZE {
        return Transition::new(
            SelectionState::LessThanMaxSelected,
            smallvec![SelectionEffect::DeselectAll, SelectionEffect::Select(clicked)],
        );
    }

    if selected.len() + 1 < SET_SIZE {
        return Transition::new(
            SelectionState::LessThanMaxSelected,
            smallvec![SelectionEffect::Select(clicked)],
        );
    }

    let mut triple = [selected[0], selected[1], clicked];
    triple.sort_unstable();
    let [a, b, c] = triple;

    if tableau[a].face.forms_set_with(&tableau[b].face, &tableau[c].face) {
        Transition::new(
            SelectionState::MaxSelectedAsSet,
            smallvec![
                SelectionEffect::Select(clicked),
                SelectionEffect::MarkSet(triple),
                SelectionEffect::Reward,
            ],
        )
    } else {
        Transition::new(
            SelectionState::MaxSelectedAsNonSet,
            smallvec![
                SelectionEffect::Select(clicked),
                SelectionEffect::MarkNonSet(triple),
                SelectionEffect::Penalty,
            ],
        )
    }
}
