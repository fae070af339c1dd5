//! Streaming cipher contexts
//!
//! [`CipherContext`] is one engine generic over the mode strategy and the
//! primitive. The per-mode aliases below pair each strategy with AES.

mod context;
mod engine;
mod pending;

pub use context::{CipherContext, ContextState, WriteStatus};
pub use pending::PendingWrite;

use algorithms::{Aes, Cbc, Cfb, Ctr, Ecb, Ofb};

/// Electronic codebook context
pub type EcbContext = CipherContext<Ecb, Aes>;

/// Cipher block chaining context
pub type CbcContext = CipherContext<Cbc, Aes>;

/// Cipher feedback context
pub type CfbContext = CipherContext<Cfb, Aes>;

/// Output feedback context
pub type OfbContext = CipherContext<Ofb, Aes>;

/// Counter mode context
pub type CtrContext = CipherContext<Ctr, Aes>;
