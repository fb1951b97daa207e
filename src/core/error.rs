//! Engine error type.
//!
//! Gameplay outcomes (a wrong triple, an empty deck) are state, not errors.
//! `EngineError` is reserved for callers breaking the engine's contract.

use thiserror::Error;

use crate::cards::CardFace;

/// Contract violations reported by the engine and the grid packer.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    /// A card was selected that is not currently on the tableau.
    #[error("card {0} is not on the tableau")]
    CardNotOnTableau(CardFace),

    /// A prepared deck holds the same face more than once.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(CardFace),

    /// A tableau position past the end was selected.
    #[error("tableau index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The tableau length at the time of the call.
        len: usize,
    },

    /// A grid spec failed validation.
    #[error("invalid grid spec: {0}")]
    InvalidGridSpec(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Count, Shading, Shape};

    #[test]
    fn test_display() {
        let face = CardFace::new(Shape::Oval, Shading::Solid, Color::Red, Count::Two);
        let err = EngineError::CardNotOnTableau(face);
        assert_eq!(err.to_string(), format!("card {face} is not on the tableau"));

        let err = EngineError::DuplicateCard(face);
        assert_eq!(err.to_string(), format!("card {face} appears more than once in the deck"));

        let err = EngineError::IndexOutOfRange { index: 14, len: 12 };
        assert_eq!(err.to_string(), "tableau index 14 out of range (len 12)");
    }
}
