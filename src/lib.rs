#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cf_container as container;
pub use cf_ptr as ptr;
pub use cf_utils as utils;
