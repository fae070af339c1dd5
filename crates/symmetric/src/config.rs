//! Construction settings for streaming contexts

use api::error::{validate, Result};
use api::CounterIncrement;
use algorithms::ModeOptions;
use params::utils::symmetric::{DEFAULT_CHUNK_SIZE, MIN_CHUNK_BLOCKS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings fixed when a [`CipherContext`](crate::CipherContext) is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextConfig {
    /// Largest number of bytes produced per sink push; also the size of the
    /// context's scratch buffer
    pub chunk_size: usize,
    /// Counter increment policy, only consulted by CTR
    pub counter_increment: CounterIncrement,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            counter_increment: CounterIncrement::default(),
        }
    }
}

impl ContextConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the CTR counter increment policy
    pub fn with_counter_increment(mut self, counter_increment: CounterIncrement) -> Self {
        self.counter_increment = counter_increment;
        self
    }

    /// Checks the configuration against a primitive's block size
    ///
    /// The chunk size must hold at least two blocks.
    pub fn validate(&self, block_size: usize) -> Result<()> {
        validate::parameter(block_size > 0, "block_size", "must be non-zero")?;
        validate::parameter(
            self.chunk_size >= MIN_CHUNK_BLOCKS * block_size,
            "chunk_size",
            "must hold at least two cipher blocks",
        )
    }

    /// Options handed to the mode strategy
    pub fn mode_options(&self) -> ModeOptions {
        ModeOptions {
            counter_increment: self.counter_increment,
        }
    }
}
