#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqtrie::{RangeIndex, Trie};
use std::collections::HashSet;
use std::ops::RangeInclusive;

// Wide enough for any u8 range the fuzzer picks.
const ALPHABET: usize = 256;

#[derive(Arbitrary, Debug)]
struct Input {
    pub range: RangeInclusive<u8>,
    pub words: HashSet<Vec<u8>>,
    pub probes: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    let policy = RangeIndex::new().with_range(input.range.clone());
    let mut trie = Trie::<u8, RangeIndex, ALPHABET>::with_policy(policy);

    for word in input.words.iter() {
        trie.insert(word.iter().copied());
    }

    let stored: HashSet<&Vec<u8>> = input
        .words
        .iter()
        .filter(|w| !w.is_empty() && w.iter().all(|c| input.range.contains(c)))
        .collect();
    assert_eq!(trie.len(), stored.len());

    for word in input.words.iter().chain(input.probes.iter()) {
        let found = trie.find_word(word.iter().copied());
        assert_eq!(
            found,
            stored.contains(word),
            "find_word disagrees on '{:?}'",
            word
        );

        let prefix = trie.find_prefix(word.iter().copied());
        assert!(prefix.len() <= word.len());
        assert_eq!(prefix.as_slice(), &word[..prefix.len()]);
        assert_eq!(
            trie.is_prefix(word.iter().copied()),
            !word.is_empty() && prefix.len() == word.len()
        );
        if found {
            assert!(trie.is_prefix(word.iter().copied()));
        }
    }
});
