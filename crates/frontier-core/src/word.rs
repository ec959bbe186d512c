//! Fixed-width storage words and their typed views.
//!
//! Every arena slot is one [`Word`]: 32 bytes holding a big-endian unsigned
//! 256-bit value. No type tag is stored. Callers pick the accessor that
//! matches what they wrote, and each accessor spells out its own
//! truncation / zero-extension rule.

use std::fmt;

/// Width of a [`Word`] in bytes.
pub const WORD_BYTES: usize = 32;

/// Width of an [`Address`] in bytes.
pub const ADDRESS_BYTES: usize = 20;

/// One arena slot: a 32-byte big-endian unsigned word.
///
/// The derived ordering compares the bytes lexicographically, which for a
/// big-endian encoding is exactly the unsigned numeric order. Sorting and
/// binary search rely on this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_BYTES]);

impl Word {
    /// The all-zero word.
    pub const ZERO: Word = Word([0; WORD_BYTES]);

    /// Wrap raw big-endian bytes.
    pub const fn from_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw big-endian bytes.
    pub const fn to_bytes(self) -> [u8; WORD_BYTES] {
        self.0
    }

    /// Borrow the raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Zero-extend a `u64` into the low-order bytes.
    pub fn from_u64(value: u64) -> Self {
        Self::from_u128(u128::from(value))
    }

    /// Zero-extend a `u128` into the low-order bytes.
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0; WORD_BYTES];
        bytes[16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Read the low-order 8 bytes, discarding anything above them.
    pub fn to_u64(self) -> u64 {
        self.to_u128() as u64
    }

    /// Read the low-order 16 bytes, discarding anything above them.
    pub fn to_u128(self) -> u128 {
        let mut low = [0; 16];
        low.copy_from_slice(&self.0[16..]);
        u128::from_be_bytes(low)
    }

    /// Read the high-order 16 bytes as an integer.
    pub fn high_u128(self) -> u128 {
        let mut high = [0; 16];
        high.copy_from_slice(&self.0[..16]);
        u128::from_be_bytes(high)
    }

    /// Build a word from explicit high and low 128-bit halves.
    pub fn from_halves(high: u128, low: u128) -> Self {
        let mut bytes = [0; WORD_BYTES];
        bytes[..16].copy_from_slice(&high.to_be_bytes());
        bytes[16..].copy_from_slice(&low.to_be_bytes());
        Self(bytes)
    }

    /// Store an address zero-extended in the low 20 bytes.
    pub fn from_address(address: Address) -> Self {
        let mut bytes = [0; WORD_BYTES];
        bytes[WORD_BYTES - ADDRESS_BYTES..].copy_from_slice(&address.0);
        Self(bytes)
    }

    /// Truncate to the low 20 bytes.
    pub fn to_address(self) -> Address {
        let mut bytes = [0; ADDRESS_BYTES];
        bytes.copy_from_slice(&self.0[WORD_BYTES - ADDRESS_BYTES..]);
        Address(bytes)
    }

    /// `true` is stored as 1, `false` as 0.
    pub fn from_bool(flag: bool) -> Self {
        Self::from_u64(u64::from(flag))
    }

    /// Any non-zero byte reads as `true`.
    pub fn to_bool(self) -> bool {
        !self.is_zero()
    }

    /// A hash occupies the whole word.
    pub fn from_hash(hash: Hash32) -> Self {
        Self(hash.0)
    }

    /// Reinterpret the whole word as a hash.
    pub fn to_hash(self) -> Hash32 {
        Hash32(self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl From<u64> for Word {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl From<u128> for Word {
    fn from(v: u128) -> Self {
        Self::from_u128(v)
    }
}

impl From<bool> for Word {
    fn from(v: bool) -> Self {
        Self::from_bool(v)
    }
}

impl From<Address> for Word {
    fn from(v: Address) -> Self {
        Self::from_address(v)
    }
}

impl From<Hash32> for Word {
    fn from(v: Hash32) -> Self {
        Self::from_hash(v)
    }
}

/// A 20-byte account-style address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// A 32-byte content hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash32(pub [u8; WORD_BYTES]);

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl From<[u8; WORD_BYTES]> for Hash32 {
    fn from(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}
