//! Operations common to every arena array.
//!
//! [`WordArray`] is implemented by [`DynArray`](crate::DynArray) and
//! [`FixedArray`](crate::FixedArray). Each kind supplies its header offset
//! and decodes its own header; everything that only needs the live run
//! (`get`, `swap`, sorting, searching, hashing) is provided here once.
//!
//! Searching, sorting, reversing and hashing have no preconditions to
//! check, so the same methods serve both the checked and unchecked layers.

use frontier_core::{ArrayError, Hash32, PackedHeader, Word};

use crate::arena::Arena;
use crate::block::{Block, HEADER_WORDS};
use crate::kernels;

/// A handle to a header-prefixed run of words inside an [`Arena`].
///
/// Handles are plain offsets; the arena is passed to every call. A handle
/// is only meaningful for the arena that created it.
pub trait WordArray {
    /// Arena offset of the header word.
    fn offset(&self) -> usize;

    /// Decode the current header.
    fn header(&self, arena: &Arena) -> PackedHeader;

    /// Number of live slots.
    fn len(&self, arena: &Arena) -> u32 {
        self.header(arena).length
    }

    /// Number of reserved slots.
    fn capacity(&self, arena: &Arena) -> u32 {
        self.header(arena).capacity
    }

    /// Whether there are no live slots.
    fn is_empty(&self, arena: &Arena) -> bool {
        self.len(arena) == 0
    }

    /// Arena offset of slot 0.
    fn data_offset(&self) -> usize {
        self.offset() + HEADER_WORDS
    }

    /// Arena offset of slot `index`, whether or not it is in range.
    fn slot_offset(&self, index: u32) -> usize {
        self.data_offset() + index as usize
    }

    /// The block covering the header and every reserved slot.
    fn block(&self, arena: &Arena) -> Block {
        Block::with_slots(self.offset(), self.capacity(arena))
    }

    /// Whether the reserved run ends at the arena frontier.
    fn is_at_frontier(&self, arena: &Arena) -> bool {
        arena.is_at_frontier(&self.block(arena))
    }

    /// Borrow the live slots.
    fn as_words<'a>(&self, arena: &'a Arena) -> &'a [Word] {
        arena.words(self.data_offset(), self.len(arena) as usize)
    }

    /// Copy out the live slots.
    fn get_all(&self, arena: &Arena) -> Vec<Word> {
        self.as_words(arena).to_vec()
    }

    /// Read slot `index`.
    fn get(&self, arena: &Arena, index: u32) -> Result<Word, ArrayError> {
        check_live(self.len(arena), index)?;
        Ok(arena.word(self.slot_offset(index)))
    }

    /// Read slot `index` without checking it against the length.
    ///
    /// An index past the capacity reads whatever the neighbouring arena
    /// word holds. Panics only past the arena's reserved buffer.
    fn get_unchecked(&self, arena: &Arena, index: u32) -> Word {
        arena.word(self.slot_offset(index))
    }

    /// Exchange slots `i` and `j`.
    fn swap(&self, arena: &mut Arena, i: u32, j: u32) -> Result<(), ArrayError> {
        let len = self.len(arena);
        check_live(len, i)?;
        check_live(len, j)?;
        self.swap_unchecked(arena, i, j);
        Ok(())
    }

    /// Exchange slots `i` and `j` without checking either index.
    fn swap_unchecked(&self, arena: &mut Arena, i: u32, j: u32) {
        arena.swap_words(self.slot_offset(i), self.slot_offset(j));
    }

    /// Sort the live slots ascending with insertion sort.
    fn insertion_sort(&self, arena: &mut Arena) {
        let len = self.len(arena) as usize;
        kernels::insertion_sort(arena.words_mut(self.data_offset(), len));
    }

    /// Reverse the live slots in place.
    fn reverse(&self, arena: &mut Arena) {
        let len = self.len(arena) as usize;
        arena.words_mut(self.data_offset(), len).reverse();
    }

    /// Index of the first live slot equal to `value`.
    fn unsorted_search(&self, arena: &Arena, value: Word) -> Option<u32> {
        kernels::linear_search(self.as_words(arena), value).map(|i| i as u32)
    }

    /// Binary search, assuming the live slots are ascending.
    ///
    /// Returns some index holding `value`; with duplicates it need not be
    /// the leftmost.
    fn sorted_search(&self, arena: &Arena, value: Word) -> Option<u32> {
        kernels::binary_search(self.as_words(arena), value).map(|i| i as u32)
    }

    /// Order-sensitive SHA-256 of exactly the live slots.
    fn hash(&self, arena: &Arena) -> Hash32 {
        kernels::content_hash(self.as_words(arena))
    }
}

/// `index < len`, else `IndexOutOfRange` against `len`.
pub(crate) fn check_live(len: u32, index: u32) -> Result<(), ArrayError> {
    if index >= len {
        return Err(ArrayError::IndexOutOfRange { index, bound: len });
    }
    Ok(())
}

/// `start <= end <= len`, else `InvalidBounds`.
pub(crate) fn check_range(len: u32, start: u32, end: u32) -> Result<(), ArrayError> {
    if start > end || end > len {
        return Err(ArrayError::InvalidBounds { start, end, len });
    }
    Ok(())
}

/// Total length of two runs, or exhaustion if it does not fit a header.
pub(crate) fn joined_len(arena: &Arena, a: u32, b: u32) -> Result<u32, ArrayError> {
    a.checked_add(b).ok_or(ArrayError::AllocatorExhausted {
        requested: a as usize + b as usize + HEADER_WORDS,
        limit: arena.max_words(),
    })
}
