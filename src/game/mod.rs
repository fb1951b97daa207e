//! The game engine.
//!
//! ## Key Types
//!
//! - `SetGame`: owns deck, tableau and score; accepts commands from the UI
//! - `SelectionState`, `transition`: the click-handling state machine
//! - `HintTimer`: the single cancellable timer behind hints
//! - `GameEvent`, `EventHistory`, `GameObserver`: change notification
//! - `GameSnapshot`: a serializable view for rendering

pub mod engine;
pub mod events;
pub mod hint;
pub mod search;
pub mod selection;
pub mod snapshot;

pub use engine::SetGame;
pub use events::{EventHistory, EventRecord, GameEvent, GameObserver, ObserverId, Observers};
pub use hint::{HintKind, HintStep, HintTimer};
pub use search::{all_sets, find_first_set, is_cap_set};
pub use selection::{selected_indices, transition, SelectionEffect, SelectionState, Transition};
pub use snapshot::GameSnapshot;
