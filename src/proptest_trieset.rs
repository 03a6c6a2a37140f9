use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn keys_strategy(min_keys: usize, max_keys: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{0,6}".prop_map(String::from), min_keys..max_keys)
}

fn prefixed_keys(
    prefixes: Vec<&'static str>,
    min_keys: usize,
    max_keys: usize,
) -> impl Strategy<Value = Vec<String>> {
    let prefixes_strategy = proptest::sample::select(prefixes);
    proptest::collection::vec(
        prefixes_strategy
            .prop_flat_map(|prefix| "[a-z]{0,5}".prop_map(move |s| format!("{}{}", prefix, s))),
        min_keys..max_keys,
    )
}

fn unicode_keys(min_keys: usize, max_keys: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(any::<String>(), min_keys..max_keys)
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Remove(String),
    RemovePrefix(String),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => "[a-c]{0,4}".prop_map(Operation::Insert),
        2 => "[a-c]{0,4}".prop_map(Operation::Remove),
        1 => "[a-c]{0,3}".prop_map(Operation::RemovePrefix),
    ]
}

fn reference_set(keys: &[String]) -> BTreeSet<String> {
    keys.iter().cloned().collect()
}

#[test]
fn test_trieset_edge_cases() {
    let mut trie = TrieSet::new();

    // Very long key
    let long_key = "a".repeat(1000);
    trie.insert(&long_key);
    assert!(trie.contains(&long_key));
    assert_eq!(trie.prefix_len("a"), 1);

    // Every prefix of it as well
    for len in 0..1000 {
        trie.insert(&long_key[..len]);
    }
    assert_eq!(trie.len(), 1001);
    assert_eq!(trie.iter().next_back().as_deref(), Some(long_key.as_str()));

    assert_eq!(trie.remove_prefix("aa"), 999);
    assert_eq!(trie.len(), 2);
    assert!(trie.contains(""));
    assert!(trie.contains("a"));

    // Deep enough that recursive copy or teardown would exhaust the stack
    let deep_key = "z".repeat(250_000);
    trie.insert(&deep_key);
    let copy = trie.clone();
    assert_eq!(copy.prefix_len("zz"), 1);
    assert_eq!(trie.remove_prefix("z"), 1);
    assert!(copy.contains(&deep_key));
    trie.clear();
    drop(copy);
}

proptest! {
    #[test]
    fn len_counts_distinct_keys(keys in keys_strategy(0, 60)) {
        let trie: TrieSet = keys.iter().collect();
        let reference = reference_set(&keys);

        prop_assert_eq!(trie.len(), reference.len());
        for key in &keys {
            prop_assert!(trie.contains(key));
        }
    }

    #[test]
    fn iteration_matches_sorted_reference(keys in keys_strategy(0, 60)) {
        let trie: TrieSet = keys.iter().collect();
        let reference = reference_set(&keys);

        let forward: Vec<String> = trie.iter().collect();
        let expected: Vec<String> = reference.iter().cloned().collect();
        prop_assert_eq!(&forward, &expected);

        let backward: Vec<String> = trie.iter().rev().collect();
        let expected_rev: Vec<String> = reference.iter().rev().cloned().collect();
        prop_assert_eq!(backward, expected_rev);

        prop_assert_eq!(trie.iter().count(), trie.len());
        prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unicode_iteration_matches_string_order(keys in unicode_keys(0, 30)) {
        let trie: TrieSet = keys.iter().collect();
        let expected: Vec<String> = reference_set(&keys).into_iter().collect();

        prop_assert_eq!(trie.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn cursor_agrees_with_iterator(keys in keys_strategy(0, 40)) {
        let trie: TrieSet = keys.iter().collect();

        let mut walked = Vec::new();
        let mut cursor = trie.cursor_front();
        while let Some(key) = cursor.current() {
            walked.push(key.to_owned());
            cursor.move_next();
        }
        prop_assert_eq!(&walked, &trie.iter().collect::<Vec<_>>());

        let mut walked_back = Vec::new();
        let mut cursor = trie.cursor_back();
        while let Some(key) = cursor.current() {
            walked_back.push(key.to_owned());
            cursor.move_prev();
        }
        walked_back.reverse();
        prop_assert_eq!(walked_back, walked);
    }

    #[test]
    fn interleaved_ends_cover_every_key_once(
        keys in keys_strategy(0, 40),
        from_back in proptest::collection::vec(any::<bool>(), 0..80)
    ) {
        let trie: TrieSet = keys.iter().collect();
        let mut iter = trie.iter();
        let mut seen = BTreeSet::new();

        for back in from_back {
            let key = if back { iter.next_back() } else { iter.next() };
            if let Some(key) = key {
                prop_assert!(seen.insert(key));
            }
        }
        seen.extend(iter);

        prop_assert_eq!(seen, reference_set(&keys));
    }

    #[test]
    fn contains_prefix_iff_some_key_starts_with_it(
        keys in keys_strategy(0, 40),
        probe in "[a-d]{0,4}"
    ) {
        let trie: TrieSet = keys.iter().collect();
        let expected = probe.is_empty() || keys.iter().any(|k| k.starts_with(probe.as_str()));

        prop_assert_eq!(trie.contains_prefix(&probe), expected);

        let count = reference_set(&keys).iter().filter(|k| k.starts_with(probe.as_str())).count();
        prop_assert_eq!(trie.prefix_len(&probe), count);
        prop_assert_eq!(trie.prefix_is_empty(&probe), count == 0);
        prop_assert_eq!(trie.prefix_iter(&probe).count(), count);
    }

    #[test]
    fn insert_then_remove_restores_key_set(
        keys in keys_strategy(0, 40),
        extra in "[a-d]{0,6}"
    ) {
        let mut trie: TrieSet = keys.iter().collect();
        prop_assume!(!trie.contains(&extra));
        let before = trie.clone();

        prop_assert!(trie.insert(&extra));
        prop_assert!(trie.remove(&extra));

        prop_assert_eq!(trie, before);
    }

    #[test]
    fn operations_match_reference(ops in proptest::collection::vec(operation_strategy(), 1..120)) {
        let mut trie = TrieSet::new();
        let mut reference = BTreeSet::new();

        for op in ops {
            match op {
                Operation::Insert(key) => {
                    prop_assert_eq!(trie.insert(&key), reference.insert(key));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(trie.remove(&key), reference.remove(&key));
                }
                Operation::RemovePrefix(prefix) => {
                    let before = reference.len();
                    reference.retain(|k: &String| !k.starts_with(prefix.as_str()));
                    prop_assert_eq!(trie.remove_prefix(&prefix), before - reference.len());
                }
            }
            prop_assert_eq!(trie.len(), reference.len());
        }

        let keys: Vec<String> = trie.iter().collect();
        prop_assert_eq!(keys, reference.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn removals_never_leave_dead_branches(
        keys in keys_strategy(1, 50),
        removals in keys_strategy(1, 50)
    ) {
        let mut trie: TrieSet = keys.iter().collect();
        for key in &removals {
            trie.remove(key);
        }

        let mut stack = vec![&trie.root];
        while let Some(node) = stack.pop() {
            for child in node.children.values() {
                prop_assert!(child.is_end || !child.children.is_empty());
                stack.push(child);
            }
        }
    }

    #[test]
    fn union_and_difference_match_reference(
        a in keys_strategy(0, 30),
        b in keys_strategy(0, 30)
    ) {
        let ta: TrieSet = a.iter().collect();
        let tb: TrieSet = b.iter().collect();
        let ra = reference_set(&a);
        let rb = reference_set(&b);

        let union: BTreeSet<String> = (&ta + &tb).into();
        prop_assert_eq!(union, ra.union(&rb).cloned().collect::<BTreeSet<_>>());

        let difference: BTreeSet<String> = (&ta - &tb).into();
        prop_assert_eq!(difference, ra.difference(&rb).cloned().collect::<BTreeSet<_>>());

        prop_assert_eq!(
            ta.intersection(&tb).collect::<Vec<_>>(),
            ra.intersection(&rb).cloned().collect::<Vec<_>>()
        );
        prop_assert_eq!(
            ta.symmetric_difference(&tb).collect::<Vec<_>>(),
            ra.symmetric_difference(&rb).cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn comparisons_match_set_inclusion(
        a in keys_strategy(0, 12),
        b in keys_strategy(0, 12)
    ) {
        let ta: TrieSet = a.iter().collect();
        let tb: TrieSet = b.iter().collect();
        let ra = reference_set(&a);
        let rb = reference_set(&b);

        prop_assert_eq!(ta == tb, ra == rb);
        prop_assert_eq!(ta <= tb, ra.is_subset(&rb));
        prop_assert_eq!(ta >= tb, ra.is_superset(&rb));
        prop_assert_eq!(ta < tb, ra.is_subset(&rb) && ra != rb);
        prop_assert_eq!(ta > tb, ra.is_superset(&rb) && ra != rb);
        prop_assert_eq!(ta.is_disjoint(&tb), ra.is_disjoint(&rb));
    }

    #[test]
    fn prefixed_keys_are_removed_together(
        keys in prefixed_keys(vec!["app", "ban", "car", "dog"], 5, 50)
    ) {
        let mut trie: TrieSet = keys.iter().collect();
        let reference = reference_set(&keys);

        let app_count = reference.iter().filter(|k| k.starts_with("app")).count();
        prop_assert_eq!(trie.remove_prefix("app"), app_count);
        prop_assert!(!trie.contains_prefix("app"));
        prop_assert_eq!(trie.len(), reference.len() - app_count);

        for key in reference.iter().filter(|k| !k.starts_with("app")) {
            prop_assert!(trie.contains(key));
        }
    }

    #[test]
    fn trieset_round_trip_serialization(keys in keys_strategy(1, 60)) {
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct TestStruct {
            keys: Vec<String>,
        }

        let trie: TrieSet = keys.iter().collect();
        let test_struct = TestStruct { keys: trie.iter().collect() };

        let serialized = serde_json::to_string(&test_struct).unwrap();
        let deserialized: TestStruct = serde_json::from_str(&serialized).unwrap();

        let rebuilt: TrieSet = deserialized.keys.into_iter().collect();
        prop_assert_eq!(rebuilt, trie);
    }
}
