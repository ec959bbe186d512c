//! Test utilities for frontier development.
//!
//! Provides a [`TestArenaBuilder`] for small, bounded arenas, helpers for
//! moving between `u64` literals and [`Word`]s, and a [`Sentinel`] block that
//! detects writes leaking out of a neighbouring array. Reusable array
//! fixtures live in [`fixtures`], proptest strategies in [`strategies`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use frontier_arena::{Arena, ArenaConfig, FixedArray, WordArray};
use frontier_core::Word;

/// Builder for arenas with test-sized limits.
///
/// Defaults to a 64-word initial reservation and no ceiling beyond the
/// library default.
pub struct TestArenaBuilder {
    config: ArenaConfig,
}

impl TestArenaBuilder {
    pub fn new() -> Self {
        Self {
            config: ArenaConfig::new(64),
        }
    }

    /// Start with `words` reserved words.
    pub fn initial_words(mut self, words: usize) -> Self {
        self.config = ArenaConfig::new(words).with_max_words(self.config.max_words);
        self
    }

    /// Fail allocations that would reach past `words`.
    pub fn max_words(mut self, words: usize) -> Self {
        self.config = self.config.with_max_words(words);
        self
    }

    pub fn build(self) -> Arena {
        Arena::new(self.config)
    }
}

impl Default for TestArenaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert `u64` literals to words.
pub fn words(values: &[u64]) -> Vec<Word> {
    values.iter().copied().map(Word::from_u64).collect()
}

/// Read the live slots of `array` back as `u64`s (low 64 bits of each word).
pub fn values(arena: &Arena, array: &impl WordArray) -> Vec<u64> {
    array.as_words(arena).iter().map(|w| w.to_u64()).collect()
}

/// A fixed block filled with a recognisable pattern.
///
/// Allocate one right after (or before) the array under test, run the
/// operation, then [`assert_intact`](Sentinel::assert_intact). Any write
/// that strays past the array's reserved run lands here.
pub struct Sentinel {
    array: FixedArray,
    pattern: Vec<Word>,
}

impl Sentinel {
    /// Allocate a sentinel of `len` slots at the frontier.
    pub fn new(arena: &mut Arena, len: u32) -> Self {
        let pattern: Vec<Word> = (0..len as u64)
            .map(|i| Word::from_halves(0xdead_beef, 0xa5a5_0000 + u128::from(i)))
            .collect();
        let array = FixedArray::from_words(arena, &pattern).expect("sentinel allocation");
        Self { array, pattern }
    }

    /// Header offset of the sentinel block.
    pub fn offset(&self) -> usize {
        self.array.offset()
    }

    /// Panic unless the header and every slot still hold the pattern.
    pub fn assert_intact(&self, arena: &Arena) {
        assert_eq!(
            self.array.len(arena) as usize,
            self.pattern.len(),
            "sentinel header at {} was overwritten",
            self.array.offset()
        );
        assert_eq!(
            self.array.as_words(arena),
            self.pattern.as_slice(),
            "sentinel slots after {} were overwritten",
            self.array.offset()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_limits() {
        let arena = TestArenaBuilder::new().initial_words(8).max_words(16).build();
        assert_eq!(arena.reserved_words(), 8);
        assert_eq!(arena.max_words(), 16);
    }

    #[test]
    #[should_panic(expected = "sentinel slots")]
    fn sentinel_detects_overwrite() {
        let mut arena = TestArenaBuilder::new().build();
        let sentinel = Sentinel::new(&mut arena, 3);
        sentinel.assert_intact(&arena);

        arena.set_word(sentinel.offset() + 2, Word::ZERO);
        sentinel.assert_intact(&arena);
    }
}
