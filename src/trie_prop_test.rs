use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{DefaultIndex, Trie};

// Small alphabet so that shared prefixes are common; values 4 and 5 fall outside it.
type SmallTrie = Trie<u8, DefaultIndex, 4>;

fn word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..8)
}

fn noisy_word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..8)
}

fn build(words: &[Vec<u8>]) -> SmallTrie {
    words.iter().map(|w| w.iter().copied()).collect()
}

fn is_proper_or_exact_prefix(probe: &[u8], words: &[Vec<u8>]) -> bool {
    !probe.is_empty() && words.iter().any(|w| w.starts_with(probe))
}

proptest! {
    #[test]
    fn inserted_words_are_found(words in prop::collection::vec(word(), 0..32)) {
        let trie = build(&words);
        for w in words.iter().filter(|w| !w.is_empty()) {
            prop_assert!(trie.find_word(w.iter().copied()));
            prop_assert!(trie.is_prefix(w.iter().copied()));
        }
    }

    #[test]
    fn find_word_matches_set(words in prop::collection::vec(word(), 0..32), probe in word()) {
        let trie = build(&words);
        let set: BTreeSet<_> = words.iter().filter(|w| !w.is_empty()).cloned().collect();
        prop_assert_eq!(trie.find_word(probe.iter().copied()), set.contains(&probe));
        prop_assert_eq!(trie.len(), set.len());
    }

    #[test]
    fn is_prefix_matches_model(words in prop::collection::vec(word(), 0..32), probe in word()) {
        let trie = build(&words);
        prop_assert_eq!(
            trie.is_prefix(probe.iter().copied()),
            is_proper_or_exact_prefix(&probe, &words)
        );
    }

    #[test]
    fn find_prefix_agrees_with_is_prefix(
        words in prop::collection::vec(noisy_word(), 0..32),
        probe in noisy_word(),
    ) {
        let mut trie = SmallTrie::new();
        trie.extend(words.iter().map(|w| w.iter().copied()));

        let found = trie.find_prefix(probe.iter().copied());
        prop_assert!(found.len() <= probe.len());
        prop_assert_eq!(&found[..], &probe[..found.len()]);
        prop_assert_eq!(found.len(), trie.longest_prefix_len(probe.iter().copied()));
        prop_assert_eq!(
            !probe.is_empty() && found.len() == probe.len(),
            trie.is_prefix(probe.iter().copied())
        );
    }

    #[test]
    fn truncated_words_are_never_found(words in prop::collection::vec(noisy_word(), 0..32)) {
        let mut trie = SmallTrie::new();
        for w in &words {
            trie.insert(w.iter().copied());
        }
        for w in &words {
            let in_range = w.iter().all(|&e| e < 4);
            prop_assert_eq!(trie.find_word(w.iter().copied()), !w.is_empty() && in_range);
        }
    }

    #[test]
    fn insertion_is_idempotent(words in prop::collection::vec(noisy_word(), 0..16), probe in noisy_word()) {
        let mut once = SmallTrie::new();
        let mut twice = SmallTrie::new();
        for w in &words {
            once.insert(w.iter().copied());
            twice.insert(w.iter().copied());
            twice.insert(w.iter().copied());
        }
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.is_empty(), twice.is_empty());
        prop_assert_eq!(
            once.find_prefix(probe.iter().copied()),
            twice.find_prefix(probe.iter().copied())
        );
        prop_assert_eq!(
            once.find_word(probe.iter().copied()),
            twice.find_word(probe.iter().copied())
        );
    }

    #[test]
    fn empty_only_when_nothing_reached_the_root(words in prop::collection::vec(noisy_word(), 0..16)) {
        let mut trie = SmallTrie::new();
        trie.extend(words.iter().map(|w| w.iter().copied()));
        let touched_root = words.iter().any(|w| w.first().is_some_and(|&e| e < 4));
        prop_assert_eq!(trie.is_empty(), !touched_root);
    }
}
