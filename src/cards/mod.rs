//! Card model: features, the matching rule, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Shape`, `Shading`, `Color`, `Count`: the four feature axes
//! - `forms_set`: the per-axis matching rule
//! - `CardFace`: a card's identity (one value per axis)
//! - `Card`: a face plus selection flags
//! - `Deck`: the shuffled draw pile

pub mod card;
pub mod deck;
pub mod feature;

pub use card::{third_card, Card, CardFace};
pub use deck::{faces, Deck};
pub use feature::{forms_set, Color, Count, Feature, Shading, Shape};

/// Cards in a set, and in every deal after the first.
pub const SET_SIZE: usize = 3;

/// Cards dealt when a game starts.
pub const INITIAL_DEAL_SIZE: usize = 4 * SET_SIZE;

/// Largest tableau that can be free of sets.
///
/// Any 21 cards of the standard game contain a set, so larger tableaus
/// never need the exhaustive scan.
pub const MAX_CAP_SET_SIZE: usize = 20;
