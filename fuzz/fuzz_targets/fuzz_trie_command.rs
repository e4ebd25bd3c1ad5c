#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqtrie::{DefaultIndex, Error, Trie};
use std::collections::BTreeSet;
use std::hint::black_box;

const ALPHABET: usize = 16;

type FuzzTrie = Trie<u8, DefaultIndex, ALPHABET>;

#[derive(Arbitrary, Debug)]
enum Command {
    Insert { key: Vec<u8> },
    TryInsert { key: Vec<u8> },
    FindWord { key: Vec<u8> },
    FindPrefix { key: Vec<u8> },
    IsPrefix { key: Vec<u8> },
    Clone,
}

fn in_range(key: &[u8]) -> bool {
    key.iter().all(|&c| usize::from(c) < ALPHABET)
}

fuzz_target!(|commands: Vec<Command>| {
    let mut trie = FuzzTrie::new();
    let mut words: BTreeSet<Vec<u8>> = BTreeSet::new();

    for command in commands.iter() {
        match command {
            Command::Insert { key } => {
                trie.insert(key.iter().copied());
                if !key.is_empty() && in_range(key) {
                    words.insert(key.clone());
                }
            }
            Command::TryInsert { key } => {
                let nodes = trie.node_count();
                match trie.try_insert(key.iter().copied()) {
                    Ok(()) => {
                        words.insert(key.clone());
                    }
                    Err(Error::Empty) => assert!(key.is_empty()),
                    Err(Error::OutOfRange { position }) => {
                        assert!(usize::from(key[position]) >= ALPHABET);
                        assert!(in_range(&key[..position]));
                        assert_eq!(nodes, trie.node_count());
                    }
                }
            }
            Command::FindWord { key } => {
                assert_eq!(trie.find_word(key.iter().copied()), words.contains(key));
            }
            Command::FindPrefix { key } => {
                black_box(trie.find_prefix(key.iter().copied()));
            }
            Command::IsPrefix { key } => {
                let expected = !key.is_empty() && words.iter().any(|w| w.starts_with(key));
                // truncated insertions leave paths behind, so only one direction holds
                if expected {
                    assert!(trie.is_prefix(key.iter().copied()));
                }
            }
            Command::Clone => {
                let copy = trie.clone();
                assert_eq!(copy.len(), trie.len());
                assert_eq!(copy.node_count(), trie.node_count());
            }
        }
        assert_eq!(trie.len(), words.len());
    }
});
