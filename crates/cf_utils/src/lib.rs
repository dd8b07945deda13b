#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod counter;

// -----------------------------------------------------------------------------
// Top-level exports

pub use counter::{Count, Counter, counter, counter_from};
