//! Constant values shared by the cipherflow crates
//!
//! Everything here is a plain `const`, so the crate is `no_std` and has no
//! dependencies.

#![no_std]

pub mod utils;
