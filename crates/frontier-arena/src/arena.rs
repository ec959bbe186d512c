//! The bump arena.
//!
//! An [`Arena`] is one growable `Vec<Word>` plus a frontier cursor. Every
//! allocation is placed at the frontier and advances it. The only way the
//! frontier moves back is [`Arena::reclaim`] on a block that ends exactly at
//! the frontier; anything else that is given up stays where it is, counted
//! in [`Arena::abandoned_words`] and never handed out again.

use frontier_core::{ArrayError, Word, WORD_BYTES};
use log::{debug, error, trace};

use crate::block::Block;
use crate::config::ArenaConfig;

/// Single contiguous word store with bump allocation.
///
/// The arena is an explicit context object: every array operation takes it
/// as a parameter. It is single-threaded by construction (`&mut self` for
/// every mutation); a multi-threaded host must wrap it in its own lock.
///
/// Lifecycle: create one per execution context, mutate it through arrays,
/// then drop or [`reset`](Arena::reset) it wholesale. Individual blocks are
/// never destroyed.
pub struct Arena {
    /// Backing storage. Grows by doubling, never shrinks.
    buffer: Vec<Word>,
    /// First word not covered by any allocation.
    frontier: usize,
    /// Words given up by relocation or non-frontier reclaim.
    abandoned: usize,
    /// Growth floor, from the config.
    min_growth: usize,
    /// Hard ceiling, from the config.
    max_words: usize,
}

impl Arena {
    /// Create an arena from a config.
    ///
    /// The initial reservation is zero-filled and clamped to `max_words`.
    pub fn new(config: ArenaConfig) -> Self {
        let initial = config.initial_words.min(config.max_words);
        Self {
            buffer: vec![Word::ZERO; initial],
            frontier: 0,
            abandoned: 0,
            min_growth: config.initial_words.max(1),
            max_words: config.max_words,
        }
    }

    /// Reserve a header plus `slots` slots at the frontier.
    ///
    /// The slot words are left as they are: fresh memory is zero, memory
    /// behind a rewound frontier may hold stale words.
    pub fn allocate(&mut self, slots: u32) -> Result<Block, ArrayError> {
        let block = Block::with_slots(self.frontier, slots);
        self.ensure(block.end())?;
        self.frontier = block.end();
        Ok(block)
    }

    /// Whether `block` ends exactly at the frontier.
    pub fn is_at_frontier(&self, block: &Block) -> bool {
        block.end() == self.frontier
    }

    /// Grow `block` in place by `extra` slots.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not at the frontier; extending anything else
    /// would overlap the block that follows it.
    pub fn extend(&mut self, block: &mut Block, extra: u32) -> Result<(), ArrayError> {
        assert!(
            self.is_at_frontier(block),
            "extend on {block} but frontier is {}",
            self.frontier
        );
        let end = block.end() + extra as usize;
        self.ensure(end)?;
        self.frontier = end;
        block.words += extra as usize;
        trace!("extended {block} in place by {extra} slots");
        Ok(())
    }

    /// Move a block's first `live` slots into a fresh block of `new_slots`.
    ///
    /// The header word is not copied; the caller writes the new header.
    /// The old block is abandoned.
    pub fn relocate_copy(
        &mut self,
        block: &Block,
        live: u32,
        new_slots: u32,
    ) -> Result<Block, ArrayError> {
        debug_assert!(
            live <= new_slots,
            "relocating {live} live slots into {new_slots}"
        );
        let fresh = self.allocate(new_slots)?;
        self.copy_words(block.data_start(), fresh.data_start(), live as usize);
        self.abandoned += block.words();
        debug!(
            "relocated {block} -> {fresh} ({live} live slots, {} words abandoned)",
            block.words()
        );
        Ok(fresh)
    }

    /// Give `block` back.
    ///
    /// If it ends at the frontier the frontier rewinds to its start and this
    /// returns `true`. Otherwise nothing moves, the words are counted as
    /// abandoned, and this returns `false`.
    pub fn reclaim(&mut self, block: Block) -> bool {
        if block.words() == 0 {
            return true;
        }
        if self.is_at_frontier(&block) {
            self.frontier = block.start();
            trace!("reclaimed {block}, frontier now {}", self.frontier);
            true
        } else {
            self.abandoned += block.words();
            trace!("{block} is behind frontier {}; leaked", self.frontier);
            false
        }
    }

    /// Read one word at an absolute offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is beyond the reserved buffer.
    pub fn word(&self, offset: usize) -> Word {
        self.buffer[offset]
    }

    /// Write one word at an absolute offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is beyond the reserved buffer.
    pub fn set_word(&mut self, offset: usize, value: Word) {
        self.buffer[offset] = value;
    }

    /// Borrow `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range is beyond the reserved buffer.
    pub fn words(&self, offset: usize, len: usize) -> &[Word] {
        &self.buffer[offset..offset + len]
    }

    /// Mutably borrow `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range is beyond the reserved buffer.
    pub fn words_mut(&mut self, offset: usize, len: usize) -> &mut [Word] {
        &mut self.buffer[offset..offset + len]
    }

    /// Copy `count` words from `src` to `dst`. The ranges may overlap.
    pub fn copy_words(&mut self, src: usize, dst: usize, count: usize) {
        self.buffer.copy_within(src..src + count, dst);
    }

    /// Swap two words at absolute offsets.
    pub fn swap_words(&mut self, a: usize, b: usize) {
        self.buffer.swap(a, b);
    }

    /// Zero `len` words starting at `offset`.
    pub fn zero_words(&mut self, offset: usize, len: usize) {
        self.words_mut(offset, len).fill(Word::ZERO);
    }

    /// Discard every allocation at once.
    ///
    /// The backing memory is kept and NOT zeroed.
    pub fn reset(&mut self) {
        self.frontier = 0;
        self.abandoned = 0;
    }

    /// Offset of the first unused word.
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// Words currently reserved in the backing buffer.
    pub fn reserved_words(&self) -> usize {
        self.buffer.len()
    }

    /// Words below the frontier that no array owns any more.
    pub fn abandoned_words(&self) -> usize {
        self.abandoned
    }

    /// Configured ceiling in words.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.len() * WORD_BYTES
    }

    /// Make sure words `[0, end)` exist in the buffer.
    fn ensure(&mut self, end: usize) -> Result<(), ArrayError> {
        if end > self.max_words {
            error!(
                "arena exhausted: frontier {} needs {end} words, limit {}",
                self.frontier, self.max_words
            );
            return Err(ArrayError::AllocatorExhausted {
                requested: end,
                limit: self.max_words,
            });
        }
        if end > self.buffer.len() {
            // Double, but never below the growth floor or past the ceiling.
            let new_len = self
                .buffer
                .len()
                .max(self.min_growth)
                .checked_mul(2)
                .unwrap_or(end)
                .max(end)
                .min(self.max_words);
            debug!("growing arena buffer {} -> {new_len} words", self.buffer.len());
            self.buffer.resize(new_len, Word::ZERO);
        }
        Ok(())
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}
