//! Property-based tests for the map, using proptest to push randomized
//! operation sequences through the tree and compare the outcome against
//! `std::collections::BTreeMap` as an oracle.
//!
//! Covered properties:
//!
//! - Insert-then-lookup: every inserted key is retrievable with its first
//!   value (insertion never overwrites)
//! - Remove-then-lookup: removed keys are gone
//! - Ordering: iteration always yields sorted keys, forward and reverse
//! - Length consistency: the length matches the oracle throughout
//! - Clone independence: mutating a clone never changes the original
//! - Equal-range cardinality: the window holds at most one entry

use proptest::prelude::*;
use std::collections::BTreeMap;

use bstmap::BstMap;

/// Operations that can be performed on the map
#[derive(Debug, Clone)]
enum Op {
    Insert(i32, i32),
    Remove(i32),
    RemoveRange(i32, i32),
}

/// Generate a sequence of random operations
fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            (any::<i32>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
            any::<i32>().prop_map(Op::Remove),
            (any::<i32>(), any::<i32>())
                .prop_map(|(a, b)| Op::RemoveRange(a.min(b), a.max(b))),
        ],
        0..max_ops,
    )
}

/// Generate a vector of key-value pairs
fn key_value_pairs(max_len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((any::<i32>(), any::<i32>()), 0..max_len)
}

proptest! {
    #[test]
    fn inserted_keys_are_found_with_their_first_value(pairs in key_value_pairs(200)) {
        let mut map = BstMap::new();
        let mut oracle = BTreeMap::new();

        for (k, v) in pairs {
            map.insert(k, v);
            oracle.entry(k).or_insert(v);
        }

        prop_assert_eq!(map.len(), oracle.len());
        for (k, v) in &oracle {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }

    #[test]
    fn removed_keys_are_gone(pairs in key_value_pairs(200), victims in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut map = BstMap::new();
        let mut oracle = BTreeMap::new();
        for (k, v) in pairs {
            map.insert(k, v);
            oracle.entry(k).or_insert(v);
        }

        for k in &victims {
            prop_assert_eq!(map.remove(k), oracle.remove_entry(k));
            prop_assert_eq!(map.get(k), None);
        }
        prop_assert_eq!(map.len(), oracle.len());
    }

    #[test]
    fn iteration_is_sorted_and_bidirectional(keys in prop::collection::hash_set(any::<i32>(), 0..200)) {
        let mut map = BstMap::new();
        for k in &keys {
            map.insert(*k, ());
        }

        let forward: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
        let mut sorted: Vec<i32> = keys.into_iter().collect();
        sorted.sort_unstable();
        prop_assert_eq!(&forward, &sorted);

        let mut backward: Vec<i32> = map.iter().rev().map(|(k, _)| *k).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn op_sequences_match_the_oracle(ops in operations(200)) {
        let mut map = BstMap::new();
        let mut oracle = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    map.insert(k, v);
                    oracle.entry(k).or_insert(v);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), oracle.remove_entry(&k));
                }
                Op::RemoveRange(lo, hi) => {
                    let doomed: Vec<i32> = oracle.range(lo..hi).map(|(k, _)| *k).collect();
                    prop_assert_eq!(map.remove_range(lo..hi), doomed.len());
                    for k in doomed {
                        oracle.remove(&k);
                    }
                }
            }
            prop_assert_eq!(map.len(), oracle.len());
        }

        prop_assert!(map.iter().eq(oracle.iter()));
    }

    #[test]
    fn clone_is_independent(pairs in key_value_pairs(100), victims in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut map = BstMap::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }

        let before: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let mut copy = map.clone();
        for k in &victims {
            copy.remove(k);
        }

        let after: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn equal_range_holds_at_most_one_entry(keys in prop::collection::hash_set(any::<i8>(), 0..50), probe in any::<i8>()) {
        let mut map = BstMap::new();
        for k in &keys {
            map.insert(*k, ());
        }

        let hits: Vec<i8> = map.equal_range(&probe).map(|(k, _)| *k).collect();
        if keys.contains(&probe) {
            prop_assert_eq!(hits, vec![probe]);
        } else {
            prop_assert!(hits.is_empty());
        }
    }

    #[test]
    fn bounds_partition_the_key_space(keys in prop::collection::hash_set(any::<i8>(), 0..50), probe in any::<i8>()) {
        let mut map = BstMap::new();
        for k in &keys {
            map.insert(*k, ());
        }

        let lower = map.lower_bound(&probe).key().copied();
        let upper = map.upper_bound(&probe).key().copied();

        let mut sorted: Vec<i8> = keys.into_iter().collect();
        sorted.sort_unstable();
        prop_assert_eq!(lower, sorted.iter().find(|k| **k >= probe).copied());
        prop_assert_eq!(upper, sorted.iter().find(|k| **k > probe).copied());
    }
}
