//! Card features and the matching rule.
//!
//! A card has one value on each of four axes. Three values of one axis
//! "form a set" when they are all equal or all different; three cards form a
//! set when every axis does. The rule is a single generic function, applied
//! per axis.

use serde::{Deserialize, Serialize};

/// Whether three values of one axis satisfy the matching rule.
///
/// True when all three are equal or all three are pairwise distinct.
/// Two-equal/one-different never matches. Order-independent.
///
/// ```
/// use set_game::cards::{forms_set, Color};
///
/// assert!(forms_set(&Color::Red, &Color::Red, &Color::Red));
/// assert!(forms_set(&Color::Red, &Color::Green, &Color::Blue));
/// assert!(!forms_set(&Color::Red, &Color::Red, &Color::Blue));
/// ```
#[must_use]
pub fn forms_set<T: PartialEq>(a: &T, b: &T, c: &T) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && a != c && b != c;
    all_same || all_different
}

/// One of the four feature axes. Each axis has exactly three values.
pub trait Feature: Copy + Eq + std::fmt::Debug + 'static {
    /// All values of this axis, in index order.
    const ALL: [Self; 3];

    /// Zero-based position in `ALL`.
    fn index(self) -> usize;

    /// The value used in the packed card key.
    fn raw(self) -> u32;

    /// The unique value that forms a set with `a` and `b`.
    ///
    /// Equal inputs need the same value again; distinct inputs need the
    /// remaining one.
    #[must_use]
    fn third(a: Self, b: Self) -> Self {
        Self::ALL[(6 - a.index() - b.index()) % 3]
    }
}

macro_rules! feature_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $raw:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl Feature for $name {
            const ALL: [Self; 3] = [$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn raw(self) -> u32 {
                match self {
                    $($name::$variant => $raw),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

feature_enum! {
    /// Symbol drawn on the card.
    Shape { Oval = 1, Diamond = 2, Squiggle = 3 }
}

feature_enum! {
    /// Fill of the symbols.
    Shading { Solid = 1, Striped = 2, Open = 3 }
}

feature_enum! {
    /// Ink color. Zero-based so it can index a palette.
    Color { Red = 0, Green = 1, Blue = 2 }
}

feature_enum! {
    /// Number of symbols (1-3).
    Count { One = 1, Two = 2, Three = 3 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_same() {
        assert!(forms_set(&Shape::Oval, &Shape::Oval, &Shape::Oval));
        assert!(forms_set(&1, &1, &1));
    }

    #[test]
    fn test_all_different() {
        assert!(forms_set(&Shading::Solid, &Shading::Striped, &Shading::Open));
        assert!(forms_set(&Count::Three, &Count::One, &Count::Two));
    }

    #[test]
    fn test_two_and_one() {
        assert!(!forms_set(&Color::Red, &Color::Red, &Color::Green));
        assert!(!forms_set(&Color::Red, &Color::Green, &Color::Red));
        assert!(!forms_set(&Color::Green, &Color::Red, &Color::Red));
    }

    #[test]
    fn test_third() {
        assert_eq!(Shape::third(Shape::Oval, Shape::Oval), Shape::Oval);
        assert_eq!(Shape::third(Shape::Oval, Shape::Diamond), Shape::Squiggle);
        assert_eq!(Color::third(Color::Blue, Color::Green), Color::Red);

        for a in Count::ALL {
            for b in Count::ALL {
                assert!(forms_set(&a, &b, &Count::third(a, b)));
            }
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(Shape::Oval.raw(), 1);
        assert_eq!(Shading::Open.raw(), 3);
        assert_eq!(Color::Red.raw(), 0);
        assert_eq!(Count::Two.raw(), 2);
    }
}
