//! Core types for the frontier bump-arena arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! storage [`Word`] and its typed views, the single-word array headers, and
//! the [`ArrayError`] taxonomy shared by the arena and both array kinds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod header;
pub mod word;

pub use error::ArrayError;
pub use header::PackedHeader;
pub use word::{Address, Hash32, Word, ADDRESS_BYTES, WORD_BYTES};
