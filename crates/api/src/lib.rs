//! Public API traits and types for the cipherflow streaming engine
//!
//! This crate holds what every other cipherflow crate agrees on: the error
//! taxonomy, the small enums describing a context (direction, mode, counter
//! policy) and the contract a block cipher primitive has to fulfil.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::BlockCipher;
pub use types::{CounterIncrement, Direction, Mode};
