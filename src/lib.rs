//! # set-game
//!
//! An engine for the card game Set, plus the grid packer used to lay out
//! its tableau.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine never renders. Callers issue commands,
//!    read state back, and subscribe to events.
//!
//! 2. **Deterministic**: Shuffles come from a seeded ChaCha8 stream and the
//!    hint timer runs on a caller-supplied clock, so every game replays
//!    exactly from its `GameConfig`.
//!
//! 3. **Configuration Over Constants**: Scoring, hint timing, deck size and
//!    grid geometry are all configurable; the defaults are the standard game.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors
//! - `cards`: Features, the matching rule, cards and the deck
//! - `game`: The selection state machine, engine, hints and events
//! - `layout`: Aspect-preserving grid sizing
//!
//! ## Example
//!
//! ```
//! use set_game::{GameConfig, GridPacker, SetGame};
//!
//! let mut game = SetGame::new(GameConfig::default().with_seed(7));
//! game.start_game();
//! assert_eq!(game.tableau().len(), 12);
//!
//! if let Some([a, b, c]) = game.find_first_set() {
//!     game.select_at(a).unwrap();
//!     game.select_at(b).unwrap();
//!     game.select_at(c).unwrap();
//!     assert!(game.has_set_selected());
//! }
//!
//! let layout = GridPacker::default().layout(390.0, 600.0, game.tableau().len());
//! assert!(layout.card_width >= 55.0);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod layout;

// Re-export commonly used types
pub use crate::core::{DeckKind, EngineError, GameConfig, GameRng, GameRngState};

pub use crate::cards::{
    faces, forms_set, third_card, Card, CardFace, Color, Count, Deck, Feature, Shading, Shape,
    INITIAL_DEAL_SIZE, MAX_CAP_SET_SIZE, SET_SIZE,
};

pub use crate::game::{
    EventHistory, EventRecord, GameEvent, GameObserver, GameSnapshot, HintKind, ObserverId,
    SelectionState, SetGame,
};

pub use crate::layout::{compute_layout, GridLayout, GridPacker, GridSpec};
