//! Frontier: growable and fixed word arrays in a leaky bump arena.
//!
//! This is the facade crate that re-exports the public API of the frontier
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use frontier::prelude::*;
//!
//! let mut arena = Arena::new(ArenaConfig::default());
//!
//! // A dynamic array pushed at the frontier grows in place.
//! let mut squares = DynArray::create(&mut arena, 0).unwrap();
//! for i in 0..10u64 {
//!     squares.push(&mut arena, Word::from_u64(i * i), 0).unwrap();
//! }
//! assert_eq!(squares.get(&arena, 3).unwrap(), Word::from_u64(9));
//!
//! // Sort, search and hash work on any array kind.
//! squares.reverse(&mut arena);
//! squares.insertion_sort(&mut arena);
//! assert_eq!(squares.sorted_search(&arena, Word::from_u64(49)), Some(7));
//!
//! // Fixed arrays have no spare capacity.
//! let fixed = squares.to_fixed(&mut arena).unwrap();
//! assert_eq!(fixed.hash(&arena), squares.hash(&arena));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `frontier-core` | `Word`, typed views, `PackedHeader`, `ArrayError` |
//! | [`arena`] | `frontier-arena` | `Arena`, `DynArray`, `FixedArray`, kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Words, headers and errors (`frontier-core`).
///
/// The [`types::Word`] cell and its typed views ([`types::Address`],
/// [`types::Hash32`]) plus the header codecs.
pub use frontier_core as types;

/// The arena and its arrays (`frontier-arena`).
///
/// [`arena::Arena`] owns the words; [`arena::DynArray`] and
/// [`arena::FixedArray`] are offset handles into it.
pub use frontier_arena as arena;

/// Common imports for typical frontier usage.
///
/// ```rust
/// use frontier::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use frontier_arena::{Arena, ArenaConfig};

    // Arrays
    pub use frontier_arena::{DynArray, FixedArray, WordArray};

    // Words and errors
    pub use frontier_core::{Address, ArrayError, Hash32, Word};
}
