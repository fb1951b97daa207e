//! The draw pile.
//!
//! A `Deck` is a stack: the top is the end of the vec, and cards only ever
//! leave from the top. Once empty it stays empty for the rest of the game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace};
use super::feature::{Color, Count, Feature, Shading, Shape};
use super::{INITIAL_DEAL_SIZE, SET_SIZE};
use crate::core::{DeckKind, EngineError, GameRng};

/// An ordered, shuffled pile of unique cards.
///
/// Cards in the deck are never selected or annotated. Serialized as the list
/// of faces, bottom first; deserializing checks for repeated faces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardFace>", into = "Vec<CardFace>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A freshly shuffled deck of every card of the given kind.
    #[must_use]
    pub fn new(kind: DeckKind, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = faces(kind).into_iter().map(Card::new).collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A freshly shuffled 81-card deck.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        Self::new(DeckKind::Full, rng)
    }

    /// A deck in exactly the given order (last face is dealt first).
    ///
    /// For fixtures and replays that need a known deal. Fails on the first
    /// face that appears twice.
    pub fn from_faces(faces: impl IntoIterator<Item = CardFace>) -> Result<Self, EngineError> {
        let mut seen = FxHashSet::default();
        let mut cards = Vec::new();
        for face in faces {
            if !seen.insert(face) {
                return Err(EngineError::DuplicateCard(face));
            }
            cards.push(Card::new(face));
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove up to `count` cards from the top.
    ///
    /// Returns fewer (possibly none) when the deck runs short. The returned
    /// cards keep their deck order.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.split_off(self.cards.len() - take)
    }

    /// The opening deal of `INITIAL_DEAL_SIZE` cards.
    pub fn deal_initial(&mut self) -> Vec<Card> {
        self.deal(INITIAL_DEAL_SIZE)
    }

    /// A follow-up deal of `SET_SIZE` cards.
    pub fn deal_subsequent(&mut self) -> Vec<Card> {
        self.deal(SET_SIZE)
    }
}

impl TryFrom<Vec<CardFace>> for Deck {
    type Error = EngineError;

    fn try_from(faces: Vec<CardFace>) -> Result<Self, Self::Error> {
        Deck::from_faces(faces)
    }
}

impl From<Deck> for Vec<CardFace> {
    fn from(deck: Deck) -> Self {
        deck.cards.into_iter().map(|card| card.face).collect()
    }
}

/// Every face of a deck kind, in feature order.
#[must_use]
pub fn faces(kind: DeckKind) -> Vec<CardFace> {
    let (colors, counts) = match kind {
        DeckKind::Full => (Color::ALL.to_vec(), Count::ALL.to_vec()),
        DeckKind::Limited => (Color::ALL.to_vec(), vec![Count::One]),
        DeckKind::VeryLimited => (vec![Color::Red], vec![Count::One]),
    };

    let mut faces = Vec::with_capacity(kind.size());
    for shape in Shape::ALL {
        for shading in Shading::ALL {
            for &color in &colors {
                for &count in &counts {
                    faces.push(CardFace::new(shape, shading, color, count));
                }
            }
        }
    }
    faces
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn test_standard_deck_complete() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        assert_eq!(deck.len(), 81);
        let unique: FxHashSet<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        assert_eq!(unique.len(), 81);
        assert!(deck.cards().iter().all(|c| !c.is_selected()));
    }

    #[test]
    fn test_deck_is_shuffled() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);
        let ordered: Vec<CardFace> = faces(DeckKind::Full);
        let dealt: Vec<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        assert_ne!(dealt, ordered);
    }

    #[test]
    fn test_reduced_decks() {
        let mut rng = GameRng::new(42);
        let limited = Deck::new(DeckKind::Limited, &mut rng);
        assert_eq!(limited.len(), 27);
        assert!(limited.cards().iter().all(|c| c.face.count == Count::One));

        let very = Deck::new(DeckKind::VeryLimited, &mut rng);
        assert_eq!(very.len(), 9);
        assert!(very
            .cards()
            .iter()
            .all(|c| c.face.count == Count::One && c.face.color == Color::Red));
    }

    #[test]
    fn test_deal_from_top() {
        let all = faces(DeckKind::VeryLimited);
        let mut deck = Deck::from_faces(all.iter().copied()).unwrap();

        let dealt = deck.deal_subsequent();
        let dealt_faces: Vec<CardFace> = dealt.iter().map(|c| c.face).collect();
        assert_eq!(dealt_faces, all[6..9].to_vec());
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn test_deal_initial() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        assert_eq!(deck.deal_initial().len(), 12);
        assert_eq!(deck.len(), 69);
    }

    #[test]
    fn test_deal_underflow() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(DeckKind::VeryLimited, &mut rng);

        assert_eq!(deck.deal_initial().len(), 9);
        assert!(deck.is_empty());
        assert!(deck.deal_subsequent().is_empty());
        assert!(deck.deal(5).is_empty());
    }

    #[test]
    fn test_partial_subsequent_deal() {
        let mut deck = Deck::from_faces(faces(DeckKind::VeryLimited)[..2].iter().copied()).unwrap();
        assert_eq!(deck.deal_subsequent().len(), 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_from_faces_rejects_duplicates() {
        let mut faces = faces(DeckKind::VeryLimited);
        let repeated = faces[4];
        faces.push(repeated);

        assert_eq!(Deck::from_faces(faces), Err(EngineError::DuplicateCard(repeated)));
    }

    #[test]
    fn test_deck_serde() {
        let mut rng = GameRng::new(7);
        let deck = Deck::new(DeckKind::Limited, &mut rng);

        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);

        let mut faces = faces(DeckKind::VeryLimited);
        let first = faces[0];
        faces.push(first);
        let json = serde_json::to_string(&faces).unwrap();
        assert!(serde_json::from_str::<Deck>(&json).is_err());
    }
}
