//! Element-storage traits for index-based generic code, and a mapped
//! meta-container built on top of them.
//!
//! **ElementStorage** and **ElementStorageMut**
//!
//! [`ElementStorage`] is the seam generic container code programs against:
//! anything that can hand out elements by index. Slices, arrays, vectors,
//! boxes and references implement it, and so do the carefree handles from
//! [`cf_ptr`] — a handle behaves exactly like the bare slice it points to, so
//! algorithms accept it without a second code path.
//!
//! **IntoElementStorage**
//!
//! [`IntoElementStorage`] decides what a container actually stores when
//! handed a collection: owned collections move in, references are stored
//! as-is, and a carefree handle moves in unchanged because it already is the
//! smallest reference to its elements.
//!
//! **MappedContainer**
//!
//! [`MappedContainer`] applies an index mapping on every access instead of
//! storing mapped data. Positions mapped to [`INVALID_INDEX`] read as a
//! configurable default value.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod carefree;
mod error;
mod mapped;
mod storage;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::OutOfRangeError;
pub use mapped::{INVALID_INDEX, Iter, MappedContainer};
pub use storage::{ElementStorage, ElementStorageMut, IntoElementStorage};
