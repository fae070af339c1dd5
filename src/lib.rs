//! # cipherflow
//!
//! Streaming block cipher modes of operation with push sinks and resumable
//! writes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherflow = "0.1"
//! ```
//!
//! ```ignore
//! use cipherflow::prelude::*;
//!
//! let mut ctx = CtrContext::encryptor()?;
//! ctx.open(&key, Some(&counter))?;
//! ctx.set_sink(Some(Sink::io(file)))?;
//! if let WriteStatus::Suspended(pending) = ctx.write(&data)? {
//!     // ... later
//!     ctx.continue_write(pending)?;
//! }
//! ```
//!
//! ## Features
//!
//! - `streaming` (default): streaming contexts, sinks and resumable writes
//! - `algorithms`: the AES adapter and mode strategies on their own
//! - `serde`: `Serialize`/`Deserialize` for configuration and enums
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cipherflow-api`]: Errors, shared enums and the `BlockCipher` contract
//! - [`cipherflow-params`]: Key, block and chunk size constants
//! - [`cipherflow-algorithms`]: AES adapter, mode strategies, tail buffer
//! - [`cipherflow-symmetric`]: Streaming contexts, sinks, pending writes

// Core re-exports (always available)
pub use cipherflow_api as api;
pub use cipherflow_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use cipherflow_algorithms as algorithms;

#[cfg(feature = "streaming")]
pub use cipherflow_symmetric as symmetric;

/// Common imports for cipherflow users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and enums
    pub use crate::api::{BlockCipher, CounterIncrement, Direction, Mode};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Aes, ModeStrategy};

    #[cfg(feature = "streaming")]
    pub use crate::symmetric::{
        CbcContext, CfbContext, ChunkWriter, CipherContext, ContextConfig, ContextState,
        CtrContext, EcbContext, OfbContext, PendingWrite, Sink, SinkFlow, WriteStatus,
    };
}
