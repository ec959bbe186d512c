//! Fixed arrays: the length is the capacity.
//!
//! The header holds only the length. Every slot is live, so there is no
//! headroom to push into; size changes go through [`FixedArray::realloc`],
//! and [`FixedArray::free`] gives the whole block back when it sits at the
//! arena frontier.

use frontier_core::header::{pack_length, unpack_length};
use frontier_core::{ArrayError, PackedHeader, Word};

use crate::arena::Arena;
use crate::array::{check_live, check_range, joined_len, WordArray};
use crate::block::{Block, HEADER_WORDS};
use crate::dynamic::{copy_live_into, DynArray};
use crate::growth::GrowthPlan;

/// Handle to a fixed-length word array.
///
/// Not `Clone`, for the same reason as [`DynArray`]. [`free`](Self::free)
/// consumes the handle.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct FixedArray {
    offset: usize,
}

impl WordArray for FixedArray {
    fn offset(&self) -> usize {
        self.offset
    }

    fn header(&self, arena: &Arena) -> PackedHeader {
        let length = unpack_length(arena.word(self.offset));
        PackedHeader::new(length, length)
    }
}

impl FixedArray {
    /// Allocate `n` live slots left as found.
    pub fn malloc(arena: &mut Arena, n: u32) -> Result<Self, ArrayError> {
        let block = arena.allocate(n)?;
        let array = Self::at(block);
        array.write_len(arena, n);
        Ok(array)
    }

    /// Allocate `n` zeroed live slots.
    pub fn calloc(arena: &mut Arena, n: u32) -> Result<Self, ArrayError> {
        let array = Self::malloc(arena, n)?;
        arena.zero_words(array.data_offset(), n as usize);
        Ok(array)
    }

    /// Copy an external buffer into a new fixed array of the same length.
    pub fn from_words(arena: &mut Arena, words: &[Word]) -> Result<Self, ArrayError> {
        let n = u32::try_from(words.len()).map_err(|_| ArrayError::AllocatorExhausted {
            requested: words.len(),
            limit: arena.max_words(),
        })?;
        let array = Self::malloc(arena, n)?;
        arena
            .words_mut(array.data_offset(), words.len())
            .copy_from_slice(words);
        Ok(array)
    }

    pub(crate) fn at(block: Block) -> Self {
        Self {
            offset: block.start(),
        }
    }

    pub(crate) fn write_len(&self, arena: &mut Arena, len: u32) {
        arena.set_word(self.offset, pack_length(len));
    }

    /// Resize to exactly `new_len` slots.
    ///
    /// Shrinking truncates and hands the tail back to the arena. Growing
    /// extends in place at the frontier, otherwise copies to a new block and
    /// updates `self`. New slots are left as found.
    pub fn realloc(&mut self, arena: &mut Arena, new_len: u32) -> Result<(), ArrayError> {
        let len = self.len(arena);
        if new_len < len {
            self.truncate(arena, new_len);
        } else if new_len > len {
            let block = self.block(arena);
            let plan = GrowthPlan::plan(arena, &block, new_len, 0)?;
            let grown = plan.apply(arena, block, len)?;
            self.offset = grown.start();
            self.write_len(arena, new_len);
        }
        Ok(())
    }

    /// Give the array's memory back and drop the handle.
    ///
    /// At the frontier the whole block, header included, is reclaimed and
    /// this returns `true`. Anywhere else the header's length is zeroed and
    /// the slots are abandoned; this returns `false`.
    pub fn free(self, arena: &mut Arena) -> bool {
        let block = self.block(arena);
        if arena.is_at_frontier(&block) {
            arena.reclaim(block)
        } else {
            self.write_len(arena, 0);
            arena.reclaim(block.tail_after(HEADER_WORDS));
            false
        }
    }

    /// Write slot `index`, which must be live.
    pub fn set(&self, arena: &mut Arena, index: u32, value: Word) -> Result<(), ArrayError> {
        check_live(self.len(arena), index)?;
        self.set_unchecked(arena, index, value);
        Ok(())
    }

    /// Remove slot `index` by moving the last slot into it, then shrink by one.
    pub fn remove_cheap(&self, arena: &mut Arena, index: u32) -> Result<Word, ArrayError> {
        check_live(self.len(arena), index)?;
        Ok(self.remove_cheap_unchecked(arena, index))
    }

    /// Remove slot `index` by shifting the rest left, then shrink by one.
    pub fn remove_expensive(&self, arena: &mut Arena, index: u32) -> Result<Word, ArrayError> {
        check_live(self.len(arena), index)?;
        Ok(self.remove_expensive_unchecked(arena, index))
    }

    /// Remove and return the last slot, then shrink by one.
    pub fn pop(&self, arena: &mut Arena) -> Result<Word, ArrayError> {
        if self.is_empty(arena) {
            return Err(ArrayError::EmptyArray);
        }
        Ok(self.pop_unchecked(arena))
    }

    /// Copy slots `[start, end)` into a new fixed array.
    pub fn slice(&self, arena: &mut Arena, start: u32, end: u32) -> Result<FixedArray, ArrayError> {
        check_range(self.len(arena), start, end)?;
        self.slice_unchecked(arena, start, end)
    }

    /// A new fixed array holding this array's slots followed by `other`'s.
    pub fn concat(
        &self,
        arena: &mut Arena,
        other: &impl WordArray,
    ) -> Result<FixedArray, ArrayError> {
        let total = joined_len(arena, self.len(arena), other.len(arena))?;
        let joined = Self::malloc(arena, total)?;
        copy_live_into(arena, self, &joined, 0);
        copy_live_into(arena, other, &joined, self.len(arena));
        Ok(joined)
    }

    /// Copy into a new dynamic array with no spare capacity.
    pub fn to_dynamic(&self, arena: &mut Arena) -> Result<DynArray, ArrayError> {
        let len = self.len(arena);
        let dynamic = DynArray::malloc(arena, len)?;
        copy_live_into(arena, self, &dynamic, 0);
        dynamic.write_header(arena, PackedHeader::new(len, len));
        Ok(dynamic)
    }

    /// Shrink to `new_len` slots, zeroing and releasing the tail.
    pub(crate) fn truncate(&self, arena: &mut Arena, new_len: u32) {
        let block = self.block(arena);
        let kept = Block::with_slots(block.start(), new_len).words();
        let tail = block.tail_after(kept);
        arena.zero_words(tail.start(), tail.words());
        self.write_len(arena, new_len);
        arena.reclaim(tail);
    }
}
