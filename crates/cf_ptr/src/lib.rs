//! This crate provides the carefree pointer: a handle that frees its data
//! only _if_ it owns it.
//!
//! The ownership decision is made once, at construction time, and from then
//! on every consumer goes through one uniform interface. Code that only reads
//! or writes through the handle never splits into an "I must free this" path
//! and an "I must not free this" path.
//!
//! **CarefreePtr**
//!
//! [`CarefreePtr<'a, T>`] is the shared-access flavor: it only ever hands out
//! `&T`. Construct it from a reference (borrowing), from a
//! [`Box`](alloc::boxed::Box) (owning), or from a bare address (borrowing,
//! `unsafe`).
//!
//! **CarefreePtrMut**
//!
//! [`CarefreePtrMut<'a, T>`] is the exclusive-access flavor. Shared access
//! goes through `&self` and mutable access through `&mut self`, so a shared
//! borrow of the handle can never leak a mutable view of the data — stricter
//! than a bare pointer would be, and deliberate.
//!
//! **Carefree**
//!
//! [`Carefree`] is a sealed marker implemented for exactly the two handle
//! types, for container plumbing that wants to opt handles in by bound.
//!
//! Both handles are move-only, like the single-owner pointer they may wrap.
//! Moving a whole new handle in is the only way to change the ownership
//! branch after construction.
#![expect(unsafe_code, reason = "Borrowed handles are bare pointers.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod carefree;
mod marker;

// -----------------------------------------------------------------------------
// Top-level exports

pub use carefree::{CarefreePtr, CarefreePtrMut};
pub use marker::Carefree;
