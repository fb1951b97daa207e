//! Property-based tests for the matching rule, the engine and the packer.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use set_game::{
    compute_layout, faces, forms_set, third_card, Card, CardFace, Color, Count, Deck, DeckKind,
    Feature, GameConfig, GameEvent, GameRng, GridPacker, SelectionState, SetGame, Shading, Shape,
};

/// Strategy: any one of the 81 faces.
fn face_strategy() -> impl Strategy<Value = CardFace> {
    (0..3usize, 0..3usize, 0..3usize, 0..3usize).prop_map(|(s, h, c, n)| {
        CardFace::new(Shape::ALL[s], Shading::ALL[h], Color::ALL[c], Count::ALL[n])
    })
}

/// Strategy: a tableau of distinct faces small enough to be a cap set.
fn small_tableau_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(faces(DeckKind::Full), 0..=20)
        .prop_map(|faces| faces.into_iter().map(Card::new).collect())
}

fn brute_force_has_set(tableau: &[Card]) -> bool {
    let n = tableau.len();
    (0..n).any(|i| {
        (i + 1..n).any(|j| {
            (j + 1..n).any(|k| {
                tableau[i]
                    .face
                    .forms_set_with(&tableau[j].face, &tableau[k].face)
            })
        })
    })
}

proptest! {
    // 1. The per-axis rule is all-same or all-different, in any order
    #[test]
    fn matching_rule(a in 0..3usize, b in 0..3usize, c in 0..3usize) {
        let (x, y, z) = (Color::ALL[a], Color::ALL[b], Color::ALL[c]);
        let expected = (a == b && b == c) || (a != b && a != c && b != c);

        prop_assert_eq!(forms_set(&x, &y, &z), expected);
        prop_assert_eq!(forms_set(&z, &x, &y), expected);
        prop_assert_eq!(forms_set(&y, &z, &x), expected);
    }

    // 2. Two distinct faces have exactly one completing face in the deck
    #[test]
    fn set_closure(a in face_strategy(), b in face_strategy()) {
        prop_assume!(a != b);

        let third = third_card(&a, &b);
        prop_assert!(a.forms_set_with(&b, &third));

        let completing: Vec<CardFace> = faces(DeckKind::Full)
            .into_iter()
            .filter(|c| a.forms_set_with(&b, c))
            .collect();
        prop_assert_eq!(completing, vec![third]);
    }

    // 3. Every shuffle is a complete deck
    #[test]
    fn deck_completeness(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::standard(&mut rng);

        prop_assert_eq!(deck.len(), 81);
        let unique: FxHashSet<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        prop_assert_eq!(unique.len(), 81);
    }

    // 4. The cap-set check agrees with an exhaustive scan
    #[test]
    fn cap_set_agrees_with_scan(cards in small_tableau_strategy()) {
        prop_assert_eq!(set_game::game::is_cap_set(&cards), !brute_force_has_set(&cards));
    }

    // 5. More than 20 cards always hold a set
    #[test]
    fn large_tableau_has_set(seed in any::<u64>(), size in 21..=30usize) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::standard(&mut rng);
        let cards = deck.deal(size);

        prop_assert!(!set_game::game::is_cap_set(&cards));
        prop_assert!(brute_force_has_set(&cards));
    }

    // 6. Clicks never leave more than three cards selected, and the state
    //    always describes the selection
    #[test]
    fn selection_invariants(seed in any::<u64>(), clicks in prop::collection::vec(0..64usize, 0..80)) {
        let mut game = SetGame::new(GameConfig::new().with_seed(seed));
        game.start_game();

        for click in clicks {
            if game.tableau().is_empty() {
                break;
            }
            let index = click % game.tableau().len();
            game.select_at(index).unwrap();

            let selected = game.selected_indices();
            prop_assert!(selected.len() <= 3);

            match game.selection_state() {
                SelectionState::LessThanMaxSelected => {
                    prop_assert!(selected.len() < 3);
                }
                SelectionState::MaxSelectedAsSet | SelectionState::MaxSelectedAsNonSet => {
                    prop_assert_eq!(selected.len(), 3);
                    let t = game.tableau();
                    let is_set = t[selected[0]]
                        .face
                        .forms_set_with(&t[selected[1]].face, &t[selected[2]].face);
                    prop_assert_eq!(is_set, game.has_set_selected());
                }
            }

            for card in game.tableau() {
                if card.is_part_of_set() || card.is_part_of_non_set() {
                    prop_assert!(card.is_selected());
                }
            }
        }

        let found = game.history().events().filter(|e| matches!(e, GameEvent::SetFound(_))).count() as i64;
        let missed = game.history().events().filter(|e| matches!(e, GameEvent::NonSetSelected(_))).count() as i64;
        prop_assert_eq!(game.score(), 2 * found - missed);
    }

    // 7. Sizing stays within the container unless scrolling is reported
    #[test]
    fn packer_bounds(width in 120.0..2000.0f64, height in 120.0..2000.0f64, count in 1..=81usize) {
        let layout = GridPacker::default().layout(width, height, count);

        prop_assert!(layout.card_width.is_finite());
        prop_assert!(layout.card_width >= 55.0);
        prop_assert!(layout.columns >= 1);
        prop_assert!(layout.columns * layout.rows >= count);
        if !layout.needs_scroll {
            prop_assert!(layout.total_height <= height + 1e-6);
        }
        if layout.card_width + 6.0 <= width {
            prop_assert!(layout.columns as f64 * (layout.card_width + 6.0) <= width + 1e-6);
        }
    }

    // 8. The free function and the packer agree
    #[test]
    fn packer_matches_free_function(width in 1.0..1500.0f64, height in 1.0..1500.0f64, count in 0..=30usize) {
        prop_assert_eq!(
            GridPacker::default().layout(width, height, count),
            compute_layout(width, height, count, 2.0 / 3.0, 55.0, 3.0)
        );
    }
}
