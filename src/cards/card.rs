//! Cards: an immutable face plus mutable selection flags.
//!
//! `CardFace` is the identity. Exactly one card exists per combination of
//! features, so equality of faces is equality of cards.
//!
//! `Card` adds the three flags the UI renders: selected, part of a set, and
//! part of a non-set. The two "part of" flags are mutually exclusive and are
//! both cleared whenever the card is deselected.

use serde::{Deserialize, Serialize};

use super::feature::{forms_set, Color, Count, Feature, Shading, Shape};

/// The four feature values that identify a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardFace {
    pub shape: Shape,
    pub shading: Shading,
    pub color: Color,
    pub count: Count,
}

impl CardFace {
    /// Create a face from its four features.
    #[must_use]
    pub const fn new(shape: Shape, shading: Shading, color: Color, count: Count) -> Self {
        Self {
            shape,
            shading,
            color,
            count,
        }
    }

    /// Packed key `shape*1000 + shading*100 + color*10 + count`.
    ///
    /// A display convenience only; identity is `==` on the face.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.shape.raw() * 1000 + self.shading.raw() * 100 + self.color.raw() * 10 + self.count.raw()
    }

    /// Whether `self`, `second` and `third` form a set.
    ///
    /// Returns false unless all three faces are distinct.
    #[must_use]
    pub fn forms_set_with(&self, second: &CardFace, third: &CardFace) -> bool {
        if self == second || self == third || second == third {
            return false;
        }
        forms_set(&self.shape, &second.shape, &third.shape)
            && forms_set(&self.shading, &second.shading, &third.shading)
            && forms_set(&self.color, &second.color, &third.color)
            && forms_set(&self.count, &second.count, &third.count)
    }

    /// The unique face that forms a set with `self` and `other`.
    #[must_use]
    pub fn third(&self, other: &CardFace) -> CardFace {
        CardFace {
            shape: Shape::third(self.shape, other.shape),
            shading: Shading::third(self.shading, other.shading),
            color: Color::third(self.color, other.color),
            count: Count::third(self.count, other.count),
        }
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.count, self.color, self.shading, self.shape
        )
    }
}

/// The face completing a set with two distinct faces.
///
/// Free-function form of [`CardFace::third`].
#[must_use]
pub fn third_card(a: &CardFace, b: &CardFace) -> CardFace {
    a.third(b)
}

/// A card on the table or in the deck.
///
/// Deserializing rejects flag combinations the engine never produces: an
/// annotation on an unselected card, or both annotations at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    /// Identity.
    pub face: CardFace,
    selected: bool,
    part_of_set: bool,
    part_of_non_set: bool,
}

impl Card {
    /// A fresh, unselected card.
    #[must_use]
    pub const fn new(face: CardFace) -> Self {
        Self {
            face,
            selected: false,
            part_of_set: false,
            part_of_non_set: false,
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn is_part_of_set(&self) -> bool {
        self.part_of_set
    }

    #[must_use]
    pub fn is_part_of_non_set(&self) -> bool {
        self.part_of_non_set
    }

    /// Packed display key of the face.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.face.id()
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Clear the selection and both annotations.
    pub fn deselect(&mut self) {
        self.selected = false;
        self.part_of_set = false;
        self.part_of_non_set = false;
    }

    pub fn toggle_selection(&mut self) {
        if self.selected {
            self.deselect();
        } else {
            self.select();
        }
    }

    /// Flag a selected card as part of a confirmed set.
    pub fn mark_part_of_set(&mut self) {
        debug_assert!(self.selected, "only selected cards can be annotated");
        self.part_of_set = true;
        self.part_of_non_set = false;
    }

    /// Flag a selected card as part of a rejected triple.
    pub fn mark_part_of_non_set(&mut self) {
        debug_assert!(self.selected, "only selected cards can be annotated");
        self.part_of_non_set = true;
        self.part_of_set = false;
    }
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct CardFields {
    face: CardFace,
    selected: bool,
    part_of_set: bool,
    part_of_non_set: bool,
}

impl TryFrom<CardFields> for Card {
    type Error = String;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        let annotated = fields.part_of_set || fields.part_of_non_set;
        if fields.part_of_set && fields.part_of_non_set {
            return Err(format!("card {} is marked both set and non-set", fields.face));
        }
        if annotated && !fields.selected {
            return Err(format!("card {} is annotated but not selected", fields.face));
        }
        Ok(Card {
            face: fields.face,
            selected: fields.selected,
            part_of_set: fields.part_of_set,
            part_of_non_set: fields.part_of_non_set,
        })
    }
}

impl From<CardFace> for Card {
    fn from(face: CardFace) -> Self {
        Card::new(face)
    }
}
