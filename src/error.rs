use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Rejections reported by the strict insertion path, [`Trie::try_insert`].
///
/// The lenient operations never produce these; they truncate or miss instead.
///
/// [`Trie::try_insert`]: crate::Trie::try_insert
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("element at position {position} maps outside the alphabet")]
    OutOfRange { position: usize },

    #[error("cannot insert an empty sequence")]
    Empty,
}
