#![deny(unsafe_code)]

#[macro_use]
extern crate log;

// not concurrent
pub mod non_concurrent;

pub use non_concurrent::AvlTree;
