//! The generic prefix tree.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use tracing::debug;

use crate::error::{Error, Result};
use crate::index::{DefaultIndex, IndexPolicy};
use crate::node::Node;

/// A prefix tree over sequences of `T`.
///
/// Each element is turned into a child slot by the policy `P`; indices at or above
/// the alphabet size `N` are treated the same as elements the policy rejects. Two
/// sequences that map to the same indices are indistinguishable to the trie.
///
/// Insertion is lenient: an element that does not map stops the insertion where it
/// stands and nothing is marked as inserted. [`Trie::try_insert`] is the strict
/// alternative.
///
/// ```
/// use seqtrie::CharTrie;
///
/// let mut trie = CharTrie::new();
/// trie.insert("apple".chars());
///
/// assert!(trie.find_word("apple".chars()));
/// assert!(!trie.find_word("app".chars()));
/// assert!(trie.is_prefix("app".chars()));
/// assert_eq!(trie.find_prefix("apricot".chars()), vec!['a', 'p']);
/// ```
pub struct Trie<T, P = DefaultIndex, const N: usize = 26> {
    root: Node,
    policy: P,
    len: usize,
    nodes: usize,
    _element: PhantomData<fn(&T)>,
}

/// Where a query walk stopped.
struct Walk<'a> {
    node: &'a Node,
    matched: usize,
    complete: bool,
}

#[inline]
fn bounded<T, P, const N: usize>(policy: &P, element: &T) -> Option<usize>
where
    P: IndexPolicy<T>,
{
    policy.index(element).filter(|&index| index < N)
}

impl<T, P, const N: usize> Trie<T, P, N> {
    pub const ALPHABET_SIZE: usize = N;

    const ALPHABET_NOT_EMPTY: () = assert!(N > 0, "alphabet size must be at least 1");

    /// Creates an empty trie using `policy` to index elements.
    pub fn with_policy(policy: P) -> Self {
        let () = Self::ALPHABET_NOT_EMPTY;
        Trie {
            root: Node::default(),
            policy,
            len: 0,
            nodes: 0,
            _element: PhantomData,
        }
    }

    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_policy(P::default())
    }

    /// Creates a trie holding every sequence in `words`.
    pub fn from_words<W, S>(words: W) -> Self
    where
        P: IndexPolicy<T> + Default,
        W: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        words.into_iter().collect()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// True while the root has no children: nothing was inserted, or every insertion
    /// was rejected at its first element.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Number of distinct sequences fully inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes below the root, including those left by truncated insertions.
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl<T, P, const N: usize> Trie<T, P, N>
where
    P: IndexPolicy<T>,
{
    /// The child index of `element`, or `None` if it is out of range.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        bounded::<T, P, N>(&self.policy, element)
    }

    /// Adds `seq` to the trie.
    ///
    /// An empty sequence is a no-op. If some element is out of range, the elements
    /// before it are still added as a path, but the sequence is not recorded as
    /// inserted and the rest of it is dropped.
    pub fn insert<I>(&mut self, seq: I)
    where
        I: IntoIterator<Item = T>,
    {
        let Self {
            ref mut root,
            ref policy,
            ref mut len,
            ref mut nodes,
            ..
        } = *self;
        let growth = root.insert_path(
            seq.into_iter()
                .map(|element| bounded::<T, P, N>(policy, &element)),
        );
        *nodes += growth.created;
        *len += usize::from(growth.terminal);
    }

    /// Adds `seq` only if every element is in range. On error the trie is unchanged.
    pub fn try_insert<I>(&mut self, seq: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let path = seq
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                self.index_of(&element)
                    .ok_or(Error::OutOfRange { position })
            })
            .collect::<Result<Vec<_>>>()
            .and_then(|path| {
                if path.is_empty() {
                    Err(Error::Empty)
                } else {
                    Ok(path)
                }
            })
            .inspect_err(|err| debug!(?err, "strict insertion rejected"))?;

        let growth = self.root.insert_path(path.into_iter().map(Some));
        self.nodes += growth.created;
        self.len += usize::from(growth.terminal);
        Ok(())
    }

    /// True if exactly `seq` was inserted. A sequence that only exists as the prefix of
    /// a longer inserted one does not count, and the empty sequence never does.
    pub fn find_word<I>(&self, seq: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let walk = self.walk(seq, drop);
        walk.complete && walk.matched > 0 && walk.node.is_terminal()
    }

    /// The longest leading part of `seq` that exists as a path in the trie.
    ///
    /// The path does not have to end at an inserted sequence. The result is empty when
    /// `seq` is empty or its first element already fails to match.
    pub fn find_prefix<I>(&self, seq: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut matched = Vec::new();
        self.walk(seq, |element| matched.push(element));
        matched
    }

    /// Length of what [`Trie::find_prefix`] would return, without collecting it.
    pub fn longest_prefix_len<I>(&self, seq: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.walk(seq, drop).matched
    }

    /// True if the whole of `seq` is a path in the trie, whether or not it ends at an
    /// inserted sequence. Empty input yields false.
    pub fn is_prefix<I>(&self, seq: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let walk = self.walk(seq, drop);
        walk.complete && walk.matched > 0
    }

    fn walk<I, F>(&self, seq: I, mut visit: F) -> Walk<'_>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T),
    {
        let mut node = &self.root;
        let mut matched = 0;
        for element in seq {
            let Some(child) = self.index_of(&element).and_then(|index| node.child(index))
            else {
                return Walk {
                    node,
                    matched,
                    complete: false,
                };
            };
            visit(element);
            node = child;
            matched += 1;
        }
        Walk {
            node,
            matched,
            complete: true,
        }
    }
}

impl<T, P: Default, const N: usize> Default for Trie<T, P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Clone, const N: usize> Clone for Trie<T, P, N> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            policy: self.policy.clone(),
            len: self.len,
            nodes: self.nodes,
            _element: PhantomData,
        }
    }
}

impl<T, P, const N: usize> fmt::Debug for Trie<T, P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("alphabet_size", &N)
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl<T, P, S, const N: usize> Extend<S> for Trie<T, P, N>
where
    P: IndexPolicy<T>,
    S: IntoIterator<Item = T>,
{
    fn extend<W: IntoIterator<Item = S>>(&mut self, words: W) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<T, P, S, const N: usize> FromIterator<S> for Trie<T, P, N>
where
    P: IndexPolicy<T> + Default,
    S: IntoIterator<Item = T>,
{
    fn from_iter<W: IntoIterator<Item = S>>(words: W) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
