//! The Set game engine.
//!
//! `SetGame` owns the deck and the tableau, runs the selection state
//! machine, keeps score, and drives hints. The UI issues commands
//! (`start_game`, `select`, `add_cards`, `show_hint`, `advance_clock`) and
//! reads state back through the query methods or a `GameSnapshot`.
//!
//! All commands are synchronous. Before doing anything else, each command
//! cancels a hint that is still showing, so hint selection never mixes with
//! the player's own selection.

use std::time::Duration;

use crate::cards::{Card, CardFace, Deck, SET_SIZE};
use crate::core::{EngineError, GameConfig, GameRng, GameRngState};

use super::events::{EventHistory, GameEvent, GameObserver, ObserverId, Observers};
use super::hint::{HintKind, HintStep, HintTimer};
use super::search;
use super::selection::{self, SelectionEffect, SelectionState};
use super::snapshot::GameSnapshot;

/// A single-player game of Set.
#[derive(Debug)]
pub struct SetGame {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    tableau: Vec<Card>,
    selection: SelectionState,
    score: i64,
    started: bool,
    over_reported: bool,
    in_add_cards_hint: bool,
    hint: HintTimer,
    history: EventHistory,
    observers: Observers,
}

impl Default for SetGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SetGame {
    /// Create an engine with a shuffled deck and an empty tableau.
    ///
    /// Nothing is dealt until `start_game`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let deck = Deck::new(config.deck, &mut rng);
        Self {
            config,
            rng,
            deck,
            tableau: Vec::new(),
            selection: SelectionState::LessThanMaxSelected,
            score: 0,
            started: false,
            over_reported: false,
            in_add_cards_hint: false,
            hint: HintTimer::new(),
            history: EventHistory::new(),
            observers: Observers::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Commands ===

    /// Start a new game with a fresh shuffle.
    pub fn start_game(&mut self) {
        let deck = Deck::new(self.config.deck, &mut self.rng);
        self.start_with_deck(deck);
    }

    /// Start a new game from a prepared deck.
    ///
    /// The top `INITIAL_DEAL_SIZE` cards of `deck` become the tableau. The
    /// previous game's events are dropped from the history; sequence numbers
    /// keep counting.
    pub fn start_with_deck(&mut self, deck: Deck) {
        self.cancel_hint();
        self.history.clear();

        self.deck = deck;
        self.tableau = self.deck.deal_initial();
        self.selection = SelectionState::LessThanMaxSelected;
        self.score = 0;
        self.started = true;
        self.over_reported = false;

        let dealt = self.tableau.len();
        self.emit(GameEvent::GameStarted { dealt });
        self.check_game_over();
    }

    /// React to a click on the card with this face.
    ///
    /// Returns the new selection state, or an error if the card is not on
    /// the tableau.
    pub fn select(&mut self, face: CardFace) -> Result<SelectionState, EngineError> {
        let index = self
            .position_of(face)
            .ok_or(EngineError::CardNotOnTableau(face))?;
        self.select_at(index)
    }

    /// React to a click on the card at this tableau position.
    pub fn select_at(&mut self, index: usize) -> Result<SelectionState, EngineError> {
        if index >= self.tableau.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.tableau.len(),
            });
        }

        self.cancel_hint();

        let transition = selection::transition(self.selection, &self.tableau, index);
        for effect in transition.effects {
            self.apply(effect);
        }
        self.set_selection_state(transition.next);
        self.check_game_over();

        Ok(self.selection)
    }

    /// Deal more cards.
    ///
    /// A selected set is consumed instead, as if the player had clicked on.
    /// Otherwise up to three cards are appended, with a penalty if a set was
    /// already available. No-op before a game starts or after it ends.
    pub fn add_cards(&mut self) {
        self.cancel_hint();

        if !self.started || self.is_over() {
            return;
        }

        if self.has_set_selected() {
            self.replace_selected_set();
            self.set_selection_state(SelectionState::LessThanMaxSelected);
        } else if !self.deck.is_empty() {
            if !self.has_cap_set() {
                self.change_score(-self.config.penalty);
            }
            let dealt = self.deck.deal_subsequent();
            let count = dealt.len();
            self.tableau.extend(dealt);
            self.emit(GameEvent::CardsDealt { count });
        }

        self.check_game_over();
    }

    /// Point the player at a set, or at the add-cards control if there is
    /// none. Costs one penalty.
    ///
    /// A set hint replaces the current selection with the first set found
    /// and clears it after `hint_duration`. A cap-set hint raises the
    /// add-cards prompt and blinks it. Neither runs the selection state
    /// machine. No-op when the game is not running or a set is selected.
    pub fn show_hint(&mut self) {
        self.cancel_hint();

        if !self.started || self.is_over() || self.has_set_selected() {
            return;
        }

        self.change_score(-self.config.penalty);

        let found = if self.has_cap_set() {
            None
        } else {
            search::find_first_set(&self.tableau)
        };

        match found {
            Some(triple) => self.hint_set(triple),
            None => self.hint_add_cards(),
        }
    }

    /// Advance the hint clock by `elapsed` and run whatever fell due.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        let was_active = self.hint.is_active();

        for step in self.hint.advance(elapsed) {
            match step {
                HintStep::ClearSelection => self.deselect_all(),
                HintStep::PromptOn => self.set_prompt(true),
                HintStep::PromptOff => self.set_prompt(false),
            }
        }

        if was_active && !self.hint.is_active() {
            self.emit(GameEvent::HintCleared);
        }
    }

    /// Register an observer for every future event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Queries ===

    /// Visible cards in tableau order.
    #[must_use]
    pub fn tableau(&self) -> &[Card] {
        &self.tableau
    }

    #[must_use]
    pub fn card(&self, face: CardFace) -> Option<&Card> {
        self.tableau.iter().find(|card| card.face == face)
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    /// Indices of the selected cards, ascending.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        selection::selected_indices(&self.tableau).into_vec()
    }

    /// The player has selected three cards that form a set.
    ///
    /// Follows the selection state, so it stays false while a set hint has
    /// the hinted cards selected.
    #[must_use]
    pub fn has_set_selected(&self) -> bool {
        self.selection == SelectionState::MaxSelectedAsSet
    }

    /// Exactly three cards are selected and they do not form a set.
    #[must_use]
    pub fn has_full_non_set_selected(&self) -> bool {
        self.selection == SelectionState::MaxSelectedAsNonSet
    }

    /// No three cards on the tableau form a set.
    #[must_use]
    pub fn has_cap_set(&self) -> bool {
        search::is_cap_set(&self.tableau)
    }

    /// The deck is exhausted and no set can be made from what is left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() && (self.tableau.len() < SET_SIZE || self.has_cap_set())
    }

    #[must_use]
    pub fn deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// A game has been dealt since the engine was created.
    #[must_use]
    pub fn game_has_begun(&self) -> bool {
        self.started
    }

    /// The add-cards prompt is raised by a cap-set hint.
    #[must_use]
    pub fn in_add_cards_hint(&self) -> bool {
        self.in_add_cards_hint
    }

    #[must_use]
    pub fn active_hint(&self) -> Option<HintKind> {
        self.hint.active_kind()
    }

    /// Time until the hint timer next needs `advance_clock`, if a hint is
    /// running.
    #[must_use]
    pub fn next_hint_deadline(&self) -> Option<Duration> {
        self.hint.time_until_next()
    }

    /// Indices of the first set on the tableau.
    #[must_use]
    pub fn find_first_set(&self) -> Option<[usize; SET_SIZE]> {
        search::find_first_set(&self.tableau)
    }

    /// Indices of every set on the tableau.
    #[must_use]
    pub fn sets_on_tableau(&self) -> Vec<[usize; SET_SIZE]> {
        search::all_sets(&self.tableau)
    }

    #[must_use]
    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    /// Shuffle stream state, for reproducing the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the shuffle stream to a captured state.
    ///
    /// The next `start_game` deals what it would have dealt when the state
    /// was captured. The current game is left as it is.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tableau: self.tableau.clone(),
            score: self.score,
            selection: self.selection,
            cards_in_deck: self.deck.len(),
            game_has_begun: self.started,
            is_over: self.is_over(),
            has_cap_set: self.has_cap_set(),
            has_full_non_set_selected: self.has_full_non_set_selected(),
            in_add_cards_hint: self.in_add_cards_hint,
        }
    }

    // === Internals ===

    fn position_of(&self, face: CardFace) -> Option<usize> {
        self.tableau.iter().position(|card| card.face == face)
    }

    fn faces_at(&self, indices: [usize; SET_SIZE]) -> [CardFace; SET_SIZE] {
        indices.map(|i| self.tableau[i].face)
    }

    fn apply(&mut self, effect: SelectionEffect) {
        match effect {
            SelectionEffect::Select(i) => {
                self.tableau[i].select();
                self.emit(GameEvent::CardSelected(self.tableau[i].face));
            }
            SelectionEffect::Deselect(i) => {
                self.tableau[i].deselect();
                self.emit(GameEvent::CardDeselected(self.tableau[i].face));
            }
            SelectionEffect::DeselectAll => self.deselect_all(),
            SelectionEffect::MarkSet(triple) => {
                for i in triple {
                    self.tableau[i].mark_part_of_set();
                }
                self.emit(GameEvent::SetFound(self.faces_at(triple)));
            }
            SelectionEffect::MarkNonSet(triple) => {
                for i in triple {
                    self.tableau[i].mark_part_of_non_set();
                }
                self.emit(GameEvent::NonSetSelected(self.faces_at(triple)));
            }
            SelectionEffect::Reward => self.change_score(self.config.reward),
            SelectionEffect::Penalty => self.change_score(-self.config.penalty),
            SelectionEffect::ReplaceSelectedSet => self.replace_selected_set(),
        }
    }

    /// Refill the selected slots from the deck; slots the deck cannot fill
    /// are removed, highest index first.
    fn replace_selected_set(&mut self) {
        let slots = selection::selected_indices(&self.tableau);
        let replacements = self.deck.deal(slots.len());
        let replaced = replacements.len();

        for (&slot, card) in slots.iter().zip(replacements) {
            self.tableau[slot] = card;
        }
        for &slot in slots[replaced..].iter().rev() {
            self.tableau.remove(slot);
        }

        self.emit(GameEvent::SetReplaced {
            replaced,
            removed: slots.len() - replaced,
        });
    }

    fn deselect_all(&mut self) {
        let mut any = false;
        for card in self.tableau.iter_mut().filter(|card| card.is_selected()) {
            card.deselect();
            any = true;
        }
        if any {
            self.emit(GameEvent::SelectionCleared);
        }
    }

    fn hint_set(&mut self, triple: [usize; SET_SIZE]) {
        self.deselect_all();
        self.set_selection_state(SelectionState::LessThanMaxSelected);
        for i in triple {
            self.tableau[i].select();
        }

        let kind = HintKind::Set(self.faces_at(triple));
        self.hint.schedule(
            kind,
            [(self.config.hint_duration, HintStep::ClearSelection)],
        );
        self.emit(GameEvent::HintShown(kind));
    }

    fn hint_add_cards(&mut self) {
        let blink = self.config.add_cards_blink_interval;
        self.hint.schedule(
            HintKind::AddCards,
            [
                (blink, HintStep::PromptOff),
                (blink * 2, HintStep::PromptOn),
                (blink * 3, HintStep::PromptOff),
            ],
        );
        self.emit(GameEvent::HintShown(HintKind::AddCards));
        self.set_prompt(true);
    }

    /// Undo a hint that is still showing.
    fn cancel_hint(&mut self) {
        match self.hint.cancel() {
            Some(HintKind::Set(_)) => self.deselect_all(),
            Some(HintKind::AddCards) => self.set_prompt(false),
            None => return,
        }
        self.emit(GameEvent::HintCleared);
    }

    fn set_prompt(&mut self, on: bool) {
        if self.in_add_cards_hint != on {
            self.in_add_cards_hint = on;
            self.emit(GameEvent::AddCardsPrompt(on));
        }
    }

    fn change_score(&mut self, delta: i64) {
        self.score += delta;
        self.emit(GameEvent::ScoreChanged {
            delta,
            score: self.score,
        });
    }

    fn set_selection_state(&mut self, next: SelectionState) {
        if self.selection != next {
            self.selection = next;
            self.emit(GameEvent::SelectionStateChanged(next));
        }
    }

    fn check_game_over(&mut self) {
        if self.started && !self.over_reported && self.is_over() {
            self.over_reported = true;
            self.emit(GameEvent::GameOver { score: self.score });
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.observers.notify(&event);
        self.history.push(event);
    }
}
