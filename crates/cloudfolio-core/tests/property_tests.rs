//! Property-based tests for flip card state and head styles
//!
//! Uses proptest to verify the isolation and idempotence invariants.

use cloudfolio_core::{FlipDeck, FlipFace, FlipTrigger, HeadStyles, FLIP_PERSPECTIVE};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn trigger_strategy() -> impl Strategy<Value = FlipTrigger> {
    prop_oneof![
        Just(FlipTrigger::Click),
        Just(FlipTrigger::Enter),
        Just(FlipTrigger::Space),
    ]
}

/// A deck size and a sequence of (index, trigger) activations within it
fn deck_ops_strategy() -> impl Strategy<Value = (usize, Vec<(usize, FlipTrigger)>)> {
    (1..16usize).prop_flat_map(|len| {
        (
            Just(len),
            prop::collection::vec((0..len, trigger_strategy()), 0..64),
        )
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card's face depends only on how often its own index was activated
    #[test]
    fn each_card_reflects_only_its_own_activations((len, ops) in deck_ops_strategy()) {
        let mut deck = FlipDeck::new(len);
        let mut counts = vec![0usize; len];

        for (index, trigger) in &ops {
            deck.apply(*index, *trigger);
            counts[*index] += 1;
        }

        for (i, count) in counts.iter().enumerate() {
            let expected = if count % 2 == 1 { FlipFace::Back } else { FlipFace::Front };
            prop_assert_eq!(deck.face(i), Some(expected));
        }
    }

    /// Toggling one card never changes another
    #[test]
    fn toggle_is_isolated((len, ops) in deck_ops_strategy(), pick in any::<prop::sample::Index>()) {
        let mut deck = FlipDeck::new(len);
        for (index, trigger) in &ops {
            deck.apply(*index, *trigger);
        }

        let target = pick.index(len);
        let before = deck.clone();
        deck.toggle(target);

        for i in 0..len {
            if i == target {
                prop_assert_ne!(deck.face(i), before.face(i));
            } else {
                prop_assert_eq!(deck.face(i), before.face(i));
            }
        }
    }

    /// Two activations of the same card cancel out, whatever the triggers
    #[test]
    fn activation_pairs_cancel(
        (len, ops) in deck_ops_strategy(),
        first in trigger_strategy(),
        second in trigger_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut deck = FlipDeck::new(len);
        for (index, trigger) in &ops {
            deck.apply(*index, *trigger);
        }

        let before = deck.clone();
        let target = pick.index(len);
        deck.apply(target, first);
        deck.apply(target, second);
        prop_assert_eq!(deck, before);
    }

    /// Registering the perspective rule any number of times yields one node
    #[test]
    fn perspective_rule_registers_once(mounts in 1..64usize) {
        let mut styles = HeadStyles::new();
        let inserted = (0..mounts).filter(|_| styles.register(FLIP_PERSPECTIVE)).count();
        prop_assert_eq!(inserted, 1);
        prop_assert_eq!(styles.len(), 1);
    }
}
