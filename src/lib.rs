#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub use error::{Error, Result};

pub use index::{DefaultIndex, IndexPolicy, RangeIndex};

pub use trie::Trie;

pub use types::{
    digits, longest_common_prefix, BoolTrie, ByteTrie, CharTrie, DigitTrie, Digits,
    BOOL_ALPHABET, BYTE_ALPHABET, DIGIT_ALPHABET, LATIN_ALPHABET,
};

mod error;
pub mod index;
mod node;
pub mod trie;
pub mod types;

#[cfg(all(test, feature = "std"))]
mod testutils;
#[cfg(all(test, feature = "std"))]
mod trie_prop_test;
