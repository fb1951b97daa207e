//! Core engine types: configuration, RNG, errors.
//!
//! These are shared by the card model and the game engine. Games are
//! configured through `GameConfig` rather than by editing constants.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckKind, GameConfig};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
