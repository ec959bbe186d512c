//! Leaky bump arena with packed-header word arrays.
//!
//! Every array lives in one [`Arena`]: a growable run of 32-byte [`Word`]s
//! with a single frontier cursor. Allocation bumps the frontier. A block
//! that ends at the frontier can grow in place or be handed back; a block
//! anywhere else can only be copied forward, and its old words are
//! abandoned until the arena is reset or dropped.
//!
//! # Layout
//!
//! ```text
//! Arena (Vec<Word>, frontier, abandoned count)
//! ├── DynArray   [ (cap << 128) | len ][ slot 0 ] ... [ slot cap-1 ]
//! └── FixedArray [ len ][ slot 0 ] ... [ slot len-1 ]
//! ```
//!
//! # Two layers
//!
//! The checked methods (`get`, `set`, `push`, `pop`, `slice`, ...) validate
//! indices and return [`ArrayError`]. The `*_unchecked` methods skip the
//! checks and trust the caller; a broken contract overwrites neighbouring
//! arena words but stays memory-safe.
//!
//! # Example
//!
//! ```
//! use frontier_arena::{Arena, ArenaConfig, DynArray, WordArray};
//! use frontier_core::Word;
//!
//! let mut arena = Arena::new(ArenaConfig::default());
//! let mut a = DynArray::create(&mut arena, 0).unwrap();
//! for i in 0..4u64 {
//!     a.push(&mut arena, Word::from_u64(i), 0).unwrap();
//! }
//! assert_eq!(a.len(&arena), 4);
//! assert_eq!(a.pop(&mut arena).unwrap(), Word::from_u64(3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod array;
pub mod block;
pub mod config;
pub mod dynamic;
pub mod fixed;
pub mod growth;
pub mod kernels;
mod unchecked;

pub use arena::Arena;
pub use array::WordArray;
pub use block::{Block, HEADER_WORDS};
pub use config::ArenaConfig;
pub use dynamic::DynArray;
pub use fixed::FixedArray;
pub use growth::GrowthPlan;

pub use frontier_core::{Address, ArrayError, Hash32, PackedHeader, Word};
