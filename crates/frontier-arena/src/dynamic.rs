//! Growable arrays with a packed length+capacity header.
//!
//! Layout in the arena:
//!
//! ```text
//! offset      offset+1                         offset+1+capacity
//! [ header ][ slot 0 ][ slot 1 ] ... [ slot cap-1 ]
//!   (cap << 128) | len
//! ```
//!
//! Slots `[0, len)` are live. Slots `[len, cap)` are unspecified unless an
//! operation says it zeroes them.

use frontier_core::{ArrayError, PackedHeader, Word};

use crate::arena::Arena;
use crate::array::{check_live, check_range, joined_len, WordArray};
use crate::block::Block;
use crate::fixed::FixedArray;
use crate::growth::GrowthPlan;

/// Handle to a growable word array.
///
/// The handle is just the header offset. Operations that can move the slot
/// run (`push`, `realloc`) take `&mut self` and update it, so there is never
/// a stale copy to hold on to. Handles are deliberately not `Clone`: a slot
/// run belongs to exactly one array.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct DynArray {
    offset: usize,
}

impl WordArray for DynArray {
    fn offset(&self) -> usize {
        self.offset
    }

    fn header(&self, arena: &Arena) -> PackedHeader {
        PackedHeader::unpack(arena.word(self.offset))
    }
}

impl DynArray {
    /// Allocate an empty array with `capacity` zeroed slots.
    pub fn create(arena: &mut Arena, capacity: u32) -> Result<Self, ArrayError> {
        let array = Self::malloc(arena, capacity)?;
        arena.zero_words(array.data_offset(), capacity as usize);
        Ok(array)
    }

    /// Allocate an empty array with `n` slots left as found.
    pub fn malloc(arena: &mut Arena, n: u32) -> Result<Self, ArrayError> {
        let block = arena.allocate(n)?;
        let array = Self::at(block);
        array.write_header(arena, PackedHeader::empty(n));
        Ok(array)
    }

    /// Allocate `n` zeroed slots, all live.
    pub fn calloc(arena: &mut Arena, n: u32) -> Result<Self, ArrayError> {
        let array = Self::create(arena, n)?;
        array.write_header(arena, PackedHeader::new(n, n));
        Ok(array)
    }

    /// Copy an external buffer into a new, exactly-sized array.
    pub fn from_words(arena: &mut Arena, words: &[Word]) -> Result<Self, ArrayError> {
        let n = u32::try_from(words.len()).map_err(|_| ArrayError::AllocatorExhausted {
            requested: words.len(),
            limit: arena.max_words(),
        })?;
        let array = Self::malloc(arena, n)?;
        arena
            .words_mut(array.data_offset(), words.len())
            .copy_from_slice(words);
        array.write_header(arena, PackedHeader::new(n, n));
        Ok(array)
    }

    pub(crate) fn at(block: Block) -> Self {
        Self {
            offset: block.start(),
        }
    }

    pub(crate) fn write_header(&self, arena: &mut Arena, header: PackedHeader) {
        arena.set_word(self.offset, header.pack());
    }

    /// Change the capacity.
    ///
    /// Shrinking clamps the length and hands the trailing slots back to the
    /// arena (reclaimed if at the frontier, abandoned otherwise). Growing
    /// extends in place at the frontier, otherwise copies the live slots to
    /// a new block and updates `self`.
    pub fn realloc(&mut self, arena: &mut Arena, new_capacity: u32) -> Result<(), ArrayError> {
        let header = self.header(arena);
        let block = self.block(arena);
        if new_capacity < header.capacity {
            self.write_header(
                arena,
                PackedHeader::new(header.length.min(new_capacity), new_capacity),
            );
            let kept = Block::with_slots(block.start(), new_capacity).words();
            arena.reclaim(block.tail_after(kept));
        } else if new_capacity > header.capacity {
            let plan = GrowthPlan::plan(arena, &block, new_capacity, 0)?;
            self.grow(arena, block, header.length, plan)?;
        }
        Ok(())
    }

    fn grow(
        &mut self,
        arena: &mut Arena,
        block: Block,
        live: u32,
        plan: GrowthPlan,
    ) -> Result<(), ArrayError> {
        let grown = plan.apply(arena, block, live)?;
        self.offset = grown.start();
        self.write_header(arena, PackedHeader::new(live, plan.capacity()));
        Ok(())
    }

    /// Write slot `index`.
    ///
    /// Any `index < capacity` is accepted. Writing at or past the length
    /// makes `index` the last live slot; slots skipped over are zeroed.
    pub fn set(&self, arena: &mut Arena, index: u32, value: Word) -> Result<(), ArrayError> {
        let header = self.header(arena);
        if index >= header.capacity {
            return Err(ArrayError::IndexOutOfRange {
                index,
                bound: header.capacity,
            });
        }
        self.set_unchecked(arena, index, value);
        Ok(())
    }

    /// Append `value`, growing if the array is full.
    ///
    /// A full array at the frontier grows by exactly one slot. A full array
    /// anywhere else is copied into a new run with `ovr` extra slots of
    /// headroom, so repeated pushes do not copy every time.
    pub fn push(&mut self, arena: &mut Arena, value: Word, ovr: u32) -> Result<(), ArrayError> {
        let header = self.header(arena);
        if header.is_full() {
            let block = self.block(arena);
            let needed = header
                .capacity
                .checked_add(1)
                .ok_or(ArrayError::AllocatorExhausted {
                    requested: block.words() + 1,
                    limit: arena.max_words(),
                })?;
            let plan = GrowthPlan::plan(arena, &block, needed, ovr)?;
            self.grow(arena, block, header.length, plan)?;
        }
        self.push_unchecked(arena, value);
        Ok(())
    }

    /// Remove and return the last live slot, zeroing it.
    pub fn pop(&self, arena: &mut Arena) -> Result<Word, ArrayError> {
        if self.is_empty(arena) {
            return Err(ArrayError::EmptyArray);
        }
        Ok(self.pop_unchecked(arena))
    }

    /// Remove slot `index` by moving the last live slot into it. O(1).
    ///
    /// Relative order is not preserved. Returns the removed value.
    pub fn remove_cheap(&self, arena: &mut Arena, index: u32) -> Result<Word, ArrayError> {
        check_live(self.len(arena), index)?;
        Ok(self.remove_cheap_unchecked(arena, index))
    }

    /// Remove slot `index` by shifting everything after it left. O(n).
    ///
    /// Relative order is preserved. Returns the removed value.
    pub fn remove_expensive(&self, arena: &mut Arena, index: u32) -> Result<Word, ArrayError> {
        check_live(self.len(arena), index)?;
        Ok(self.remove_expensive_unchecked(arena, index))
    }

    /// Copy live slots `[start, end)` into a new array.
    ///
    /// Accepts `start <= end <= len`; `end == len` is valid.
    pub fn slice(&self, arena: &mut Arena, start: u32, end: u32) -> Result<DynArray, ArrayError> {
        check_range(self.len(arena), start, end)?;
        self.slice_unchecked(arena, start, end)
    }

    /// A new array holding this array's live slots followed by `other`'s.
    pub fn concat(&self, arena: &mut Arena, other: &impl WordArray) -> Result<DynArray, ArrayError> {
        let total = joined_len(arena, self.len(arena), other.len(arena))?;
        let joined = Self::malloc(arena, total)?;
        copy_live_into(arena, self, &joined, 0);
        copy_live_into(arena, other, &joined, self.len(arena));
        joined.write_header(arena, PackedHeader::new(total, total));
        Ok(joined)
    }

    /// Copy the live slots into a new fixed array.
    pub fn to_fixed(&self, arena: &mut Arena) -> Result<FixedArray, ArrayError> {
        let len = self.len(arena);
        let fixed = FixedArray::malloc(arena, len)?;
        copy_live_into(arena, self, &fixed, 0);
        Ok(fixed)
    }
}

/// Copy `src`'s live slots into `dst` starting at slot `at`. No bounds checks.
pub(crate) fn copy_live_into(
    arena: &mut Arena,
    src: &impl WordArray,
    dst: &impl WordArray,
    at: u32,
) {
    let len = src.len(arena) as usize;
    arena.copy_words(src.data_offset(), dst.slot_offset(at), len);
}
