//! The fast path: array operations that trust the caller.
//!
//! Every method here does exactly what its checked counterpart does, minus
//! the bounds and emptiness checks. The caller guarantees:
//!
//! - `index < capacity` for access (and `index < len` for removal),
//! - `len < capacity` before [`DynArray::push_unchecked`],
//! - `len > 0` before [`DynArray::pop_unchecked`] and
//!   [`FixedArray::pop_unchecked`],
//! - `start <= end <= len` for slices.
//!
//! Breaking the contract reads or writes neighbouring arena words, which
//! silently corrupts whatever block lives there. It cannot cause memory
//! unsafety: all access still goes through the arena's `Vec`, and an offset
//! past the reserved buffer panics.
//!
//! The only error these methods return is
//! [`ArrayError::AllocatorExhausted`], from the ones that allocate.

use frontier_core::{ArrayError, PackedHeader, Word};

use crate::arena::Arena;
use crate::array::WordArray;
use crate::dynamic::{copy_live_into, DynArray};
use crate::fixed::FixedArray;

impl DynArray {
    /// Re-wrap a raw header offset.
    ///
    /// Nothing checks that a dynamic-array header lives there.
    pub fn from_raw_offset(offset: usize) -> Self {
        Self::at(crate::block::Block::new(offset, 0))
    }

    /// [`set`](DynArray::set) without the capacity check.
    pub fn set_unchecked(&self, arena: &mut Arena, index: u32, value: Word) {
        let header = self.header(arena);
        if index >= header.length {
            let gap = index.wrapping_sub(header.length) as usize;
            arena.zero_words(self.slot_offset(header.length), gap);
            self.write_header(
                arena,
                PackedHeader {
                    length: index.wrapping_add(1),
                    capacity: header.capacity,
                },
            );
        }
        arena.set_word(self.slot_offset(index), value);
    }

    /// Append without growing.
    pub fn push_unchecked(&self, arena: &mut Arena, value: Word) {
        let header = self.header(arena);
        arena.set_word(self.slot_offset(header.length), value);
        self.write_header(
            arena,
            PackedHeader {
                length: header.length.wrapping_add(1),
                capacity: header.capacity,
            },
        );
    }

    /// Pop without the emptiness check.
    pub fn pop_unchecked(&self, arena: &mut Arena) -> Word {
        let header = self.header(arena);
        let last = header.length.wrapping_sub(1);
        let value = arena.word(self.slot_offset(last));
        arena.set_word(self.slot_offset(last), Word::ZERO);
        self.resize_unchecked(arena, last);
        value
    }

    /// [`remove_cheap`](DynArray::remove_cheap) without the index check.
    pub fn remove_cheap_unchecked(&self, arena: &mut Arena, index: u32) -> Word {
        let last = self.len(arena).wrapping_sub(1);
        let removed = move_last_into(arena, self, index, last);
        self.resize_unchecked(arena, last);
        removed
    }

    /// [`remove_expensive`](DynArray::remove_expensive) without the index check.
    pub fn remove_expensive_unchecked(&self, arena: &mut Arena, index: u32) -> Word {
        let last = self.len(arena).wrapping_sub(1);
        let removed = shift_left_over(arena, self, index, last);
        self.resize_unchecked(arena, last);
        removed
    }

    /// [`slice`](DynArray::slice) without the range check.
    pub fn slice_unchecked(
        &self,
        arena: &mut Arena,
        start: u32,
        end: u32,
    ) -> Result<DynArray, ArrayError> {
        let n = end.wrapping_sub(start);
        let out = Self::malloc(arena, n)?;
        arena.copy_words(self.slot_offset(start), out.data_offset(), n as usize);
        out.write_header(arena, PackedHeader::new(n, n));
        Ok(out)
    }

    /// [`concat`](DynArray::concat) with the combined length left unchecked.
    pub fn concat_unchecked(
        &self,
        arena: &mut Arena,
        other: &impl WordArray,
    ) -> Result<DynArray, ArrayError> {
        let head = self.len(arena);
        let total = head.wrapping_add(other.len(arena));
        let joined = Self::malloc(arena, total)?;
        copy_live_into(arena, self, &joined, 0);
        copy_live_into(arena, other, &joined, head);
        joined.write_header(arena, PackedHeader::new(total, total));
        Ok(joined)
    }

    /// Drop every live slot. Capacity and slot contents are untouched.
    pub fn clear(&self, arena: &mut Arena) {
        self.resize_unchecked(arena, 0);
    }

    /// Set the length directly. Capacity and slot contents are untouched.
    pub fn resize_unchecked(&self, arena: &mut Arena, len: u32) {
        let capacity = self.capacity(arena);
        self.write_header(
            arena,
            PackedHeader {
                length: len,
                capacity,
            },
        );
    }
}

impl FixedArray {
    /// Re-wrap a raw header offset.
    ///
    /// Nothing checks that a fixed-array header lives there.
    pub fn from_raw_offset(offset: usize) -> Self {
        Self::at(crate::block::Block::new(offset, 0))
    }

    /// [`set`](FixedArray::set) without the length check.
    pub fn set_unchecked(&self, arena: &mut Arena, index: u32, value: Word) {
        arena.set_word(self.slot_offset(index), value);
    }

    /// [`remove_cheap`](FixedArray::remove_cheap) without the index check.
    pub fn remove_cheap_unchecked(&self, arena: &mut Arena, index: u32) -> Word {
        let last = self.len(arena).wrapping_sub(1);
        let removed = move_last_into(arena, self, index, last);
        self.truncate(arena, last);
        removed
    }

    /// [`remove_expensive`](FixedArray::remove_expensive) without the index check.
    pub fn remove_expensive_unchecked(&self, arena: &mut Arena, index: u32) -> Word {
        let last = self.len(arena).wrapping_sub(1);
        let removed = shift_left_over(arena, self, index, last);
        self.truncate(arena, last);
        removed
    }

    /// [`slice`](FixedArray::slice) without the range check.
    pub fn slice_unchecked(
        &self,
        arena: &mut Arena,
        start: u32,
        end: u32,
    ) -> Result<FixedArray, ArrayError> {
        let n = end.wrapping_sub(start);
        let out = Self::malloc(arena, n)?;
        arena.copy_words(self.slot_offset(start), out.data_offset(), n as usize);
        Ok(out)
    }

    /// [`concat`](FixedArray::concat) with the combined length left unchecked.
    pub fn concat_unchecked(
        &self,
        arena: &mut Arena,
        other: &impl WordArray,
    ) -> Result<FixedArray, ArrayError> {
        let head = self.len(arena);
        let total = head.wrapping_add(other.len(arena));
        let joined = Self::malloc(arena, total)?;
        copy_live_into(arena, self, &joined, 0);
        copy_live_into(arena, other, &joined, head);
        Ok(joined)
    }

    /// Pop without the emptiness check. Shrinks by one like [`pop`](FixedArray::pop).
    pub fn pop_unchecked(&self, arena: &mut Arena) -> Word {
        let last = self.len(arena).wrapping_sub(1);
        let value = arena.word(self.slot_offset(last));
        self.truncate(arena, last);
        value
    }

    /// Set the length to zero. The footprint in the arena is unchanged.
    pub fn clear(&self, arena: &mut Arena) {
        self.write_len(arena, 0);
    }

    /// Overwrite the length header. The footprint in the arena is unchanged.
    pub fn resize_unchecked(&self, arena: &mut Arena, len: u32) {
        self.write_len(arena, len);
    }
}

/// Overwrite `index` with slot `last` and zero `last`. Returns the old `index` value.
fn move_last_into(arena: &mut Arena, array: &impl WordArray, index: u32, last: u32) -> Word {
    let removed = arena.word(array.slot_offset(index));
    if index != last {
        let tail = arena.word(array.slot_offset(last));
        arena.set_word(array.slot_offset(index), tail);
    }
    arena.set_word(array.slot_offset(last), Word::ZERO);
    removed
}

/// Shift slots `(index, last]` down by one and zero `last`. Returns the old `index` value.
fn shift_left_over(arena: &mut Arena, array: &impl WordArray, index: u32, last: u32) -> Word {
    let removed = arena.word(array.slot_offset(index));
    let count = last.wrapping_sub(index) as usize;
    arena.copy_words(array.slot_offset(index + 1), array.slot_offset(index), count);
    arena.set_word(array.slot_offset(last), Word::ZERO);
    removed
}
