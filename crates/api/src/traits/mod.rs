//! Trait definitions shared across the cipherflow crates

pub mod block;

pub use block::BlockCipher;
