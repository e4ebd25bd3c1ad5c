use arrayvec::ArrayVec;

use crate::index::DefaultIndex;
use crate::trie::Trie;

pub const LATIN_ALPHABET: usize = 26;
pub const DIGIT_ALPHABET: usize = 10;
pub const BOOL_ALPHABET: usize = 2;
pub const BYTE_ALPHABET: usize = 256;

/// Case-insensitive trie over ASCII letters.
pub type CharTrie = Trie<char, DefaultIndex, LATIN_ALPHABET>;
/// Trie over decimal digits stored as `u8` values `0..10`.
pub type DigitTrie = Trie<u8, DefaultIndex, DIGIT_ALPHABET>;
pub type BoolTrie = Trie<bool, DefaultIndex, BOOL_ALPHABET>;
pub type ByteTrie = Trie<u8, DefaultIndex, BYTE_ALPHABET>;

/// Decimal digits of a `u64`. Twenty is enough for `u64::MAX`.
pub type Digits = ArrayVec<u8, 20>;

/// Decimal digits of `n`, most significant first. Zero has the single digit `0`.
///
/// ```
/// assert_eq!(seqtrie::digits(1024).as_slice(), &[1, 0, 2, 4]);
/// assert_eq!(seqtrie::digits(0).as_slice(), &[0]);
/// ```
pub fn digits(mut n: u64) -> Digits {
    let mut out = Digits::new();
    loop {
        out.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Length of the longest decimal prefix shared by some number of `a` and some number
/// of `b`. Zero if either side is empty or no pair shares a leading digit.
///
/// ```
/// use seqtrie::longest_common_prefix;
///
/// assert_eq!(longest_common_prefix(&[1, 10, 100], &[1000]), 3);
/// assert_eq!(longest_common_prefix(&[1, 2, 3], &[4, 4, 4]), 0);
/// ```
pub fn longest_common_prefix(a: &[u64], b: &[u64]) -> usize {
    let (stored, probes) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let trie: DigitTrie = stored.iter().map(|&n| digits(n)).collect();
    probes
        .iter()
        .map(|&n| trie.longest_prefix_len(digits(n)))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_of_u64_max() {
        let d = digits(u64::MAX);
        assert_eq!(d.len(), 20);
        assert_eq!(d[0], 1);
        assert_eq!(d[19], 5);
    }

    #[test]
    fn lcp_uses_either_side_as_dictionary() {
        assert_eq!(longest_common_prefix(&[10], &[17, 11]), 1);
        assert_eq!(longest_common_prefix(&[17, 11], &[10]), 1);
        assert_eq!(longest_common_prefix(&[], &[17]), 0);
    }

    #[test]
    fn lcp_full_number_match() {
        assert_eq!(longest_common_prefix(&[12345], &[12345, 1]), 5);
        assert_eq!(longest_common_prefix(&[0], &[0, 5]), 1);
    }
}
