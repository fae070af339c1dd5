//! Streaming block cipher contexts for cipherflow
//!
//! A [`CipherContext`] drives one mode of operation over a block cipher
//! primitive. Data can be written in pieces of any length; output is either
//! collected and returned from each write, or pushed chunk by chunk into a
//! [`Sink`]. A sink may ask the context to suspend after a chunk, in which
//! case the write hands back a [`PendingWrite`] that picks up exactly where
//! processing stopped.
//!
//! ```ignore
//! use cipherflow_symmetric::CbcContext;
//!
//! let mut ctx = CbcContext::encryptor()?;
//! ctx.open(&key, Some(&iv))?;
//! let mut ciphertext = ctx.process(&plaintext[..10])?;
//! ciphertext.extend(ctx.process(&plaintext[10..])?);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod sink;
pub mod streaming;

// Re-export main types for convenience
pub use config::ContextConfig;
pub use sink::{ChunkWriter, Sink, SinkFlow};
pub use streaming::{
    CbcContext, CfbContext, CipherContext, ContextState, CtrContext, EcbContext, OfbContext,
    PendingWrite, WriteStatus,
};

pub use algorithms::{Aes, Cbc, Cfb, Ctr, Ecb, ModeStrategy, Ofb};
pub use api::{BlockCipher, CounterIncrement, Direction, Mode};

// Re-export the API error system
pub use api::error::{validate, Error, Result};
