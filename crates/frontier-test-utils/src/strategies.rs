//! Proptest strategies for words and word sequences.

use frontier_core::Word;
use proptest::prelude::*;

/// Any word: all 32 bytes random.
pub fn any_word() -> impl Strategy<Value = Word> {
    any::<[u8; 32]>().prop_map(Word::from_bytes)
}

/// Words drawn from a small range, so duplicates and ties are common.
pub fn small_word() -> impl Strategy<Value = Word> {
    (0u64..16).prop_map(Word::from_u64)
}

/// Up to `max_len` arbitrary words.
pub fn word_vec(max_len: usize) -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(any_word(), 0..=max_len)
}

/// A non-empty word vector together with an index into it.
pub fn word_vec_with_index(max_len: usize) -> impl Strategy<Value = (Vec<Word>, u32)> {
    prop::collection::vec(any_word(), 1..=max_len.max(1)).prop_flat_map(|words| {
        let len = words.len() as u32;
        (Just(words), 0..len)
    })
}

/// A word vector together with a valid `start <= end <= len` range.
pub fn word_vec_with_range(max_len: usize) -> impl Strategy<Value = (Vec<Word>, u32, u32)> {
    word_vec(max_len).prop_flat_map(|words| {
        let len = words.len() as u32;
        (Just(words), 0..=len).prop_flat_map(|(words, start)| {
            let len = words.len() as u32;
            (Just(words), Just(start), start..=len)
        })
    })
}
