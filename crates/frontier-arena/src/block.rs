//! Raw block descriptors.
//!
//! A [`Block`] names a contiguous run of arena words: one header word
//! followed by the slot run. It is what the allocator hands out and takes
//! back; arrays rebuild it from their header whenever they need it.

use std::fmt;

/// Words occupied by an array header.
pub const HEADER_WORDS: usize = 1;

/// Location and footprint of one allocation within the arena.
///
/// Blocks carry no ownership. Two blocks may describe the same words, and a
/// block stays constructible after the memory it names has been abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Block {
    /// Word offset of the header.
    pub(crate) start: usize,
    /// Footprint in words, header included.
    pub(crate) words: usize,
}

impl Block {
    pub(crate) fn new(start: usize, words: usize) -> Self {
        Self { start, words }
    }

    /// Build the block for a header at `start` followed by `slots` slots.
    pub(crate) fn with_slots(start: usize, slots: u32) -> Self {
        Self::new(start, HEADER_WORDS + slots as usize)
    }

    /// Word offset of the first word (the header).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Footprint in words, header included.
    pub fn words(&self) -> usize {
        self.words
    }

    /// One past the last word.
    pub fn end(&self) -> usize {
        self.start + self.words
    }

    /// Word offset of slot 0.
    pub fn data_start(&self) -> usize {
        self.start + HEADER_WORDS
    }

    /// Number of slots after the header.
    pub fn slots(&self) -> usize {
        self.words.saturating_sub(HEADER_WORDS)
    }

    /// The trailing part of this block starting `keep` words in.
    pub(crate) fn tail_after(&self, keep: usize) -> Block {
        let keep = keep.min(self.words);
        Block::new(self.start + keep, self.words - keep)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({}..{})", self.start, self.end())
    }
}
