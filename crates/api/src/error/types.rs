//! Error type definitions for streaming cipher operations

use std::borrow::Cow;

/// Primary error type for streaming cipher operations
///
/// Every variant carries the name of the operation or value that failed so
/// the message stays useful without a backtrace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation is not valid for the current open/closed/destroyed state
    #[error("invalid state for {context}: {message}")]
    InvalidState {
        /// Operation that was attempted
        context: &'static str,
        /// What was wrong with the state
        message: &'static str,
    },

    /// A caller supplied argument is malformed
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why it was rejected
        reason: Cow<'static, str>,
    },

    /// The primitive does not support a key of this length
    #[error("invalid key length for {context}: {actual} bytes")]
    InvalidKeyLength {
        /// Primitive that rejected the key
        context: &'static str,
        /// Length of the rejected key
        actual: usize,
    },

    /// The IV / counter block is shorter than one cipher block
    #[error("invalid IV length for {context}: expected at least {expected}, got {actual}")]
    InvalidIvLength {
        /// Mode that rejected the IV
        context: &'static str,
        /// Minimum length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// A transform was handed a run that is not a whole number of blocks
    #[error("invalid block length for {context}: {actual} bytes is not a multiple of {block_size}")]
    InvalidBlockLength {
        /// Transform that rejected the run
        context: &'static str,
        /// Block size of the primitive
        block_size: usize,
        /// Length of the rejected run
        actual: usize,
    },

    /// A push consumer reported a failure
    #[error("sink error: {message}")]
    Sink {
        /// Message reported by the consumer
        message: String,
    },
}

/// Result type for streaming cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidArgument` error
    pub fn argument<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a `Sink` error from any displayable failure
    pub fn sink(message: impl Into<String>) -> Self {
        Error::Sink {
            message: message.into(),
        }
    }
}
