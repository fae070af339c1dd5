//! Block cipher primitive adapter and modes of operation
//!
//! This crate provides the pieces the cipherflow streaming context is built
//! from:
//!
//! - [`block::Aes`], an adapter that exposes the RustCrypto `aes` crate through
//!   the [`api::BlockCipher`] contract
//! - the [`block::modes::ModeStrategy`] trait with one implementation per mode
//!   of operation (ECB, CBC, CFB, OFB, CTR)
//! - [`block::TailBuffer`], which holds sub-block residue between writes for
//!   the block-aligned modes
//!
//! Chaining registers, keystream blocks and buffered residue are kept in
//! zeroizing storage.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Block cipher adapter, modes and alignment helpers
pub mod block;
pub use block::{aligned_len, Aes, TailBuffer};
pub use block::modes::{Cbc, Cfb, Ctr, Ecb, ModeOptions, ModeStrategy, Ofb};

// Error module re-exports
pub use api::error::{validate, Error, Result};
