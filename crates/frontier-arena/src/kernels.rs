//! Slice-level algorithms shared by both array kinds.
//!
//! These work on the live `&[Word]` run of an array and know nothing about
//! headers or the arena.

use frontier_core::{Hash32, Word};
use sha2::{Digest, Sha256};

/// Ascending in-place insertion sort. O(n²) worst case.
pub fn insertion_sort(words: &mut [Word]) {
    for i in 1..words.len() {
        let key = words[i];
        let mut j = i;
        while j > 0 && words[j - 1] > key {
            words[j] = words[j - 1];
            j -= 1;
        }
        words[j] = key;
    }
}

/// Index of the first slot equal to `value`.
pub fn linear_search(words: &[Word], value: Word) -> Option<usize> {
    words.iter().position(|w| *w == value)
}

/// Binary search over an ascending run.
///
/// With duplicates, any matching index may be returned. On unsorted input
/// the result is meaningless but never out of range.
pub fn binary_search(words: &[Word], value: Word) -> Option<usize> {
    let (mut lo, mut hi) = (0, words.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match words[mid].cmp(&value) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

/// SHA-256 over the big-endian bytes of each word, in order.
pub fn content_hash(words: &[Word]) -> Hash32 {
    let mut hasher = Sha256::new();
    for w in words {
        hasher.update(w.as_bytes());
    }
    Hash32(hasher.finalize().into())
}
