//! Property-based tests for OrderedSet
//!
//! Checked against a naive Vec model:
//! - Order: iteration order is first-insertion order
//! - Dedup: each value appears once
//! - Membership: contains agrees with the model after adds and discards

use gem_ir::OrderedSet;
use proptest::prelude::*;

fn model_dedup(values: &[u8]) -> Vec<u8> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(v) {
            seen.push(*v);
        }
    }
    seen
}

proptest! {
    #[test]
    fn prop_first_insertion_order(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let set: OrderedSet<u8> = values.iter().copied().collect();
        let expected = model_dedup(&values);

        prop_assert_eq!(set.len(), expected.len());
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_add_reports_novelty(values in prop::collection::vec(0u8..16, 0..64)) {
        let mut set = OrderedSet::new();
        let mut model: Vec<u8> = Vec::new();

        for v in values {
            let novel = !model.contains(&v);
            prop_assert_eq!(set.add(v), novel);
            if novel {
                model.push(v);
            }
        }
        prop_assert_eq!(set.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_discard_keeps_relative_order(
        values in prop::collection::vec(0u8..32, 0..48),
        removed in prop::collection::vec(0u8..32, 0..16),
    ) {
        let mut set: OrderedSet<u8> = values.iter().copied().collect();
        let mut model = model_dedup(&values);

        for r in &removed {
            let present = model.contains(r);
            prop_assert_eq!(set.discard(r), present);
            model.retain(|v| v != r);
        }

        for v in 0u8..32 {
            prop_assert_eq!(set.contains(&v), model.contains(&v));
        }
        prop_assert_eq!(set.into_vec(), model);
    }

    #[test]
    fn prop_iteration_is_repeatable(values in prop::collection::vec(any::<u8>(), 0..32)) {
        let set: OrderedSet<u8> = values.into_iter().collect();
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = (&set).into_iter().collect();
        prop_assert_eq!(first, second);
    }
}
