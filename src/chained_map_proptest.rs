#![cfg(test)]

// Property tests for ChainedMap kept inside the crate so they can check the
// internal bucket/chain invariants, not just the public behavior.

use crate::chained_map::ChainedMap;
use crate::hash::bucket_index;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (
        1usize..=6,
        proptest::collection::vec("[a-z]{0,5}", 1..=8),
    )
        .prop_flat_map(|(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                8 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                4 => idx.clone().prop_map(OpI::Remove),
                4 => idx.clone().prop_map(OpI::Get),
                2 => prop_oneof![
                    contains_pool.prop_map(|s: String| s),
                    "[a-z]{0,5}".prop_map(|s| s)
                ]
                .prop_map(OpI::Contains),
                2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
                1 => Just(OpI::Clear),
                1 => Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..60)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        })
}

// Structural check against the internals: every chained key must live in the
// bucket its hash selects, chains must be disjoint, and the keys reachable
// from the buckets must account for exactly the arena's live nodes.
fn assert_structure(m: &ChainedMap<i32>) {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for (idx, &head) in m.buckets.iter().enumerate() {
        for key in m.store.keys(head) {
            assert_eq!(bucket_index(key, m.capacity()), idx);
            assert!(seen.insert(key.to_owned()), "key reachable twice: {key:?}");
        }
    }
    assert_eq!(seen.len(), m.len());
}

// Property: State-machine equivalence against std::collections::HashMap,
// across small capacities (capacity 1 degenerates to a single chain, the
// worst collision case). Invariants exercised after every op:
// - get/contains/len/is_empty parity with the model.
// - Overwrites return the model's previous value and never change len.
// - remove returns the model's value; absent removes are no-ops.
// - Internal structure: bucket assignment, chain disjointness, node count.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let mut sut: ChainedMap<i32> = ChainedMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    let prev = sut.insert(k, v);
                    let model_prev = model.insert(k.clone(), v);
                    prop_assert_eq!(prev, model_prev);
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match (sut.get_mut(k), model.get_mut(k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.saturating_add(d);
                            *mv = mv.saturating_add(d);
                        }
                        (None, None) => {}
                        (sv, mv) => {
                            prop_assert!(false, "presence mismatch: {:?} vs {:?}", sv, mv);
                        }
                    }
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> =
                        sut.iter().map(|(k, _)| k.to_owned()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.capacity(), capacity);
            assert_structure(&sut);
        }

        // Final sweep: every pool key agrees with the model.
        for k in &pool {
            prop_assert_eq!(sut.get(k), model.get(k));
        }
    }
}

// Property: describe() is a faithful dump. The listed bucket indices are
// strictly increasing and in range, no listed bucket is empty, and the
// listed keys are exactly the map's key set.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_describe_is_faithful(
        capacity in 1usize..=6,
        entries in proptest::collection::btree_map("[a-z]{0,5}", any::<i32>(), 0..12),
    ) {
        let mut m: ChainedMap<i32> = ChainedMap::with_capacity(capacity).unwrap();
        for (k, v) in &entries {
            m.insert(k, *v);
        }

        let dump = m.describe();
        let mut last: Option<usize> = None;
        let mut listed: BTreeSet<String> = BTreeSet::new();
        for (idx, keys) in dump {
            prop_assert!(idx < capacity);
            prop_assert!(last.map_or(true, |l| idx > l), "indices must increase");
            prop_assert!(!keys.is_empty(), "empty buckets must be omitted");
            for key in keys {
                prop_assert_eq!(bucket_index(key, capacity), idx);
                listed.insert(key.to_owned());
            }
            last = Some(idx);
        }
        let expected: BTreeSet<String> = entries.keys().cloned().collect();
        prop_assert_eq!(listed, expected);
    }
}
