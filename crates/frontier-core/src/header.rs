//! Single-word array headers.
//!
//! A dynamic array's header packs its length and capacity into one [`Word`]:
//! the 256-bit value `(capacity << 128) | length`. A fixed array's header is
//! just its length stored as an integer word.

use std::fmt;

use crate::word::Word;

/// Length and capacity of a dynamic array, stored together in one word.
///
/// Both fields are read and written as a pair. `length <= capacity` holds
/// for every header the checked API produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedHeader {
    /// Number of live slots.
    pub length: u32,
    /// Number of reserved slots following the header.
    pub capacity: u32,
}

impl PackedHeader {
    /// Create a header. Debug builds check `length <= capacity`.
    pub fn new(length: u32, capacity: u32) -> Self {
        debug_assert!(
            length <= capacity,
            "header length {length} exceeds capacity {capacity}"
        );
        Self { length, capacity }
    }

    /// Header for an empty array with the given capacity.
    pub fn empty(capacity: u32) -> Self {
        Self::new(0, capacity)
    }

    /// Encode into one word: capacity in the high half, length in the low half.
    pub fn pack(self) -> Word {
        Word::from_halves(u128::from(self.capacity), u128::from(self.length))
    }

    /// Decode a word written by [`PackedHeader::pack`].
    ///
    /// Each half is truncated to `u32`. Words that were never written as a
    /// header decode to whatever those bits say; no validation happens here.
    pub fn unpack(word: Word) -> Self {
        Self {
            length: word.to_u128() as u32,
            capacity: word.high_u128() as u32,
        }
    }

    /// Slots still free before the array must grow.
    pub fn headroom(self) -> u32 {
        self.capacity.saturating_sub(self.length)
    }

    /// Whether a push would need to grow the slot run.
    pub fn is_full(self) -> bool {
        self.headroom() == 0
    }
}

impl fmt::Display for PackedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len={} cap={}", self.length, self.capacity)
    }
}

/// Encode a fixed array's length header.
pub fn pack_length(length: u32) -> Word {
    Word::from_u64(u64::from(length))
}

/// Decode a fixed array's length header, truncating to `u32`.
pub fn unpack_length(word: Word) -> u32 {
    word.to_u64() as u32
}
