use crate::CharTrie;

/// One step of a scripted word-dictionary session.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Insert,
    Search,
    StartsWith,
}

/// Replays `script` against a fresh [`CharTrie`]. Inserts answer `None`, queries
/// answer `Some(found)`.
pub(crate) fn replay(script: &[(Op, &str)]) -> Vec<Option<bool>> {
    let mut trie = CharTrie::new();
    script
        .iter()
        .map(|&(op, word)| match op {
            Op::Insert => {
                trie.insert(word.chars());
                None
            }
            Op::Search => Some(trie.find_word(word.chars())),
            Op::StartsWith => Some(trie.is_prefix(word.chars())),
        })
        .collect()
}

/// `find_prefix` result as a `String`, for readable assertions.
pub(crate) fn prefix_of(trie: &CharTrie, word: &str) -> String {
    trie.find_prefix(word.chars()).into_iter().collect()
}
