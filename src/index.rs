//! Index policies: how a trie turns one element of a sequence into a child slot.
//!
//! A policy answers `Some(index)` for elements it accepts and `None` for elements it
//! does not ("out of range"). `Some(0)` is a perfectly valid answer and is never
//! confused with a rejection. The trie itself additionally rejects indices that do
//! not fit its alphabet size, so a policy does not need to know that bound.
//!
//! Policies must be deterministic and must not have side effects; the trie calls them
//! freely and in any order.

use core::ops::RangeInclusive;

use rangemap::RangeInclusiveMap;

/// Maps a sequence element to a child index.
///
/// Any `Fn(&T) -> Option<usize>` is a policy, so a one-off mapping can be passed as a
/// closure:
///
/// ```
/// use seqtrie::Trie;
///
/// let upper = |c: &char| c.is_ascii_uppercase().then(|| (*c as u8 - b'A') as usize);
/// let mut trie = Trie::<char, _, 26>::with_policy(upper);
/// trie.insert("ABBA".chars());
/// assert!(trie.find_word("ABBA".chars()));
/// assert!(!trie.is_prefix("abba".chars()));
/// ```
pub trait IndexPolicy<T> {
    fn index(&self, element: &T) -> Option<usize>;
}

impl<T, F> IndexPolicy<T> for F
where
    F: Fn(&T) -> Option<usize>,
{
    #[inline]
    fn index(&self, element: &T) -> Option<usize> {
        self(element)
    }
}

/// The built-in policy.
///
/// - `char`: ASCII letters, case folded, onto `0..26`. Everything else is rejected.
/// - integers: the value itself. Negative values are rejected.
/// - `bool`: `false` is 0, `true` is 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultIndex;

impl IndexPolicy<char> for DefaultIndex {
    #[inline]
    fn index(&self, element: &char) -> Option<usize> {
        element
            .is_ascii_alphabetic()
            .then(|| usize::from(element.to_ascii_lowercase() as u8 - b'a'))
    }
}

impl IndexPolicy<bool> for DefaultIndex {
    #[inline]
    fn index(&self, element: &bool) -> Option<usize> {
        Some(usize::from(*element))
    }
}

macro_rules! identity_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IndexPolicy<$ty> for DefaultIndex {
                #[inline]
                fn index(&self, element: &$ty) -> Option<usize> {
                    usize::try_from(*element).ok()
                }
            }
        )*
    };
}

identity_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A policy assembled from inclusive ranges of code points.
///
/// Every range added receives the next block of consecutive indices, in the order the
/// ranges were added. Adding a range that overlaps earlier ones re-maps the
/// overlapping code points to the new block.
///
/// ```
/// use seqtrie::{IndexPolicy, RangeIndex};
///
/// let mut policy = RangeIndex::new();
/// policy.add_range('0'..='9').add_range('a'..='f');
/// assert_eq!(policy.len(), 16);
/// assert_eq!(policy.index(&'7'), Some(7));
/// assert_eq!(policy.index(&'b'), Some(11));
/// assert_eq!(policy.index(&'g'), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RangeIndex {
    // code point -> offset to add to reach its index
    offsets: RangeInclusiveMap<u32, i64>,
    len: usize,
}

impl RangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RangeIndex::add_range`].
    pub fn with_range<C>(mut self, range: RangeInclusive<C>) -> Self
    where
        C: Copy + Into<u32>,
    {
        self.add_range(range);
        self
    }

    /// Appends `range` to the policy. A range whose start is past its end is ignored.
    pub fn add_range<C>(&mut self, range: RangeInclusive<C>) -> &mut Self
    where
        C: Copy + Into<u32>,
    {
        let begin: u32 = (*range.start()).into();
        let end: u32 = (*range.end()).into();
        if begin > end {
            return self;
        }
        let offset = self.len as i64 - i64::from(begin);
        self.offsets.insert(begin..=end, offset);
        self.len += (end - begin) as usize + 1;
        self
    }

    /// Number of indices handed out so far; the smallest alphabet size that fits
    /// every mapped element.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of a raw code point.
    pub fn lookup(&self, code: u32) -> Option<usize> {
        let offset = *self.offsets.get(&code)?;
        usize::try_from(i64::from(code) + offset).ok()
    }
}

impl<C> IndexPolicy<C> for RangeIndex
where
    C: Copy + Into<u32>,
{
    #[inline]
    fn index(&self, element: &C) -> Option<usize> {
        self.lookup((*element).into())
    }
}
