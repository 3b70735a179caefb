//! Property tests: the tree against a sorted-vector model.

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::error::BstError;
use crate::tree::test_utils::{assert_order_invariant, assert_search_order, ceil_log2, node_count};
use crate::tree::LinkedBst;

const N_VALUES: usize = 200;

/// Small key space so duplicates are common.
fn items() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..64, 0..N_VALUES)
}

/// A multiset together with a permutation of it.
fn permuted_items() -> impl Strategy<Value = (Vec<u16>, Vec<u16>)> {
    items().prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
}

fn sorted(values: &[u16]) -> Vec<u16> {
    let mut model = values.to_vec();
    model.sort_unstable();
    model
}

fn contents(tree: &LinkedBst<u16>) -> Vec<u16> {
    tree.inorder().into_iter().copied().collect()
}

proptest! {
    /// Sequential adds keep the order invariant and a consistent size.
    #[test]
    fn prop_add_keeps_invariants(values in items()) {
        let tree: LinkedBst<u16> = values.iter().copied().collect();

        assert_order_invariant(&tree);
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(node_count(&tree), tree.len());
        prop_assert_eq!(tree.inorder().len(), tree.len());
    }

    /// Any permutation of the same multiset yields the same sorted output.
    #[test]
    fn prop_inorder_independent_of_insertion_order(
        (values, shuffled) in permuted_items(),
    ) {
        let a: LinkedBst<u16> = values.iter().copied().collect();
        let b: LinkedBst<u16> = shuffled.into_iter().collect();

        prop_assert_eq!(contents(&a), sorted(&values));
        prop_assert_eq!(contents(&a), contents(&b));
    }

    /// Removing a stored item drops exactly one occurrence.
    #[test]
    fn prop_remove_one_occurrence(
        values in items(),
        removals in prop::collection::vec(0u16..64, 0..50),
    ) {
        let mut tree: LinkedBst<u16> = values.iter().copied().collect();
        let mut model = sorted(&values);

        for target in removals {
            match model.binary_search(&target) {
                Ok(idx) => {
                    model.remove(idx);
                    prop_assert_eq!(tree.remove(&target), Ok(target));
                }
                Err(_) => {
                    prop_assert_eq!(tree.remove(&target), Err(BstError::NotFound));
                }
            }
            // Promoting a left maximum can leave an equal item to its left
            assert_search_order(&tree);
            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(contents(&tree), model.clone());
        }
    }

    /// Rebalance keeps content, bounds height and reports balanced.
    #[test]
    fn prop_rebalance(values in items()) {
        let mut tree: LinkedBst<u16> = values.iter().copied().collect();
        let before = contents(&tree);

        tree.rebalance();

        prop_assert_eq!(contents(&tree), before);
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(node_count(&tree), tree.len());
        assert_search_order(&tree);
        prop_assert!(tree.height() <= ceil_log2(values.len() + 1) as isize);
        if !values.is_empty() {
            prop_assert!(tree.is_balanced());
        }
    }

    /// Lookups, removals and adds stay correct after a rebalance.
    #[test]
    fn prop_mutations_after_rebalance(
        values in items(),
        ops in prop::collection::vec((any::<bool>(), 0u16..64), 0..50),
    ) {
        let mut tree: LinkedBst<u16> = values.iter().copied().collect();
        let mut model = sorted(&values);
        tree.rebalance();

        for (is_add, value) in ops {
            if is_add {
                tree.add(value);
                let idx = model.partition_point(|v| *v <= value);
                model.insert(idx, value);
            } else {
                let expected = match model.binary_search(&value) {
                    Ok(idx) => {
                        model.remove(idx);
                        Ok(value)
                    }
                    Err(_) => Err(BstError::NotFound),
                };
                prop_assert_eq!(tree.remove(&value), expected);
            }
            assert_search_order(&tree);
            prop_assert_eq!(contents(&tree), model.clone());
        }

        for probe in 0u16..64 {
            prop_assert_eq!(tree.contains(&probe), model.binary_search(&probe).is_ok());
        }
    }

    /// Neighbor and range queries match a brute-force filter.
    #[test]
    fn prop_neighbor_queries(
        values in items(),
        probe in 0u16..70,
        low in 0u16..70,
        high in 0u16..70,
    ) {
        let tree: LinkedBst<u16> = values.iter().copied().collect();
        let model = sorted(&values);

        prop_assert_eq!(tree.successor(&probe, true).copied(), model.iter().copied().find(|v| *v > probe));
        prop_assert_eq!(tree.successor(&probe, false).copied(), model.iter().copied().find(|v| *v >= probe));
        prop_assert_eq!(tree.predecessor(&probe, true).copied(), model.iter().copied().rev().find(|v| *v < probe));
        prop_assert_eq!(tree.predecessor(&probe, false).copied(), model.iter().copied().rev().find(|v| *v <= probe));

        let expected: Vec<u16> = model.iter().copied().filter(|v| *v > low && *v < high).collect();
        let actual: Vec<u16> = tree.range_find(&low, &high).into_iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Pre-order walk visits every item exactly once.
    #[test]
    fn prop_preorder_is_permutation(values in items()) {
        let tree: LinkedBst<u16> = values.iter().copied().collect();

        let mut walked: Vec<u16> = tree.iter().copied().collect();
        walked.sort_unstable();
        prop_assert_eq!(walked, sorted(&values));
    }
}
