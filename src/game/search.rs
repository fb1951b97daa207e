//! Set search over a tableau.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardFace, MAX_CAP_SET_SIZE, SET_SIZE};

/// Indices of the first set in `(i, j, k)` lexicographic order, `i < j < k`.
///
/// Exhaustive O(n^3) scan; tableaus stay small.
#[must_use]
pub fn find_first_set(tableau: &[Card]) -> Option<[usize; SET_SIZE]> {
    let n = tableau.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if tableau[i]
                    .face
                    .forms_set_with(&tableau[j].face, &tableau[k].face)
                {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

/// Every set on the tableau, in the same order `find_first_set` scans.
///
/// Each pair determines its third card, so this looks the third up instead
/// of scanning for it.
#[must_use]
pub fn all_sets(tableau: &[Card]) -> Vec<[usize; SET_SIZE]> {
    let positions: FxHashMap<CardFace, usize> = tableau
        .iter()
        .enumerate()
        .map(|(i, card)| (card.face, i))
        .collect();

    let mut sets = Vec::new();
    for i in 0..tableau.len() {
        for j in i + 1..tableau.len() {
            let wanted = tableau[i].face.third(&tableau[j].face);
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    sets.push([i, j, k]);
                }
            }
        }
    }
    sets
}

/// Whether no three cards on the tableau form a set.
///
/// Tableaus larger than `MAX_CAP_SET_SIZE` always contain a set, so they
/// skip the scan.
#[must_use]
pub fn is_cap_set(tableau: &[Card]) -> bool {
    if tableau.len() > MAX_CAP_SET_SIZE {
        return false;
    }
    find_first_set(tableau).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{faces, Color, Count, Shading, Shape};
    use crate::core::DeckKind;

    fn cards(faces: &[CardFace]) -> Vec<Card> {
        faces.iter().copied().map(Card::new).collect()
    }

    fn face(shape: Shape, shading: Shading, color: Color, count: Count) -> CardFace {
        CardFace::new(shape, shading, color, count)
    }

    /// Four cards, no three of which form a set.
    fn cap4() -> Vec<Card> {
        cards(&[
            face(Shape::Oval, Shading::Solid, Color::Red, Count::One),
            face(Shape::Oval, Shading::Solid, Color::Green, Count::One),
            face(Shape::Oval, Shading::Striped, Color::Red, Count::One),
            face(Shape::Oval, Shading::Striped, Color::Green, Count::One),
        ])
    }

    #[test]
    fn test_find_first_set() {
        let mut t = cap4();
        assert_eq!(find_first_set(&t), None);

        t.push(Card::new(face(Shape::Oval, Shading::Solid, Color::Blue, Count::One)));
        assert_eq!(find_first_set(&t), Some([0, 1, 4]));
    }

    #[test]
    fn test_all_sets_matches_scan() {
        let t = cards(&faces(DeckKind::VeryLimited));
        let sets = all_sets(&t);

        // 9 cards over two live axes form the affine plane of order 3.
        assert_eq!(sets.len(), 12);
        assert_eq!(sets.first().copied(), find_first_set(&t));
        for [i, j, k] in sets {
            assert!(i < j && j < k);
            assert!(t[i].face.forms_set_with(&t[j].face, &t[k].face));
        }
    }

    #[test]
    fn test_cap_set() {
        assert!(is_cap_set(&cap4()));
        assert!(is_cap_set(&[]));
        assert!(!is_cap_set(&cards(&faces(DeckKind::VeryLimited))));
    }

    #[test]
    fn test_large_tableau_short_circuits() {
        let t = cards(&faces(DeckKind::Full)[..21]);
        assert!(!is_cap_set(&t));
    }
}
