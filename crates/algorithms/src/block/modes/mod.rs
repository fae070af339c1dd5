//! Block cipher modes of operation
//!
//! Each mode is a [`ModeStrategy`]: it owns the mode's chaining state (IV,
//! feedback register or counter, plus any keystream phase) and knows how to
//! turn one chunk of input into the same number of output bytes, given a key
//! schedule. The streaming context drives all five through this one trait.

use api::error::{validate, Error, Result};
use api::{BlockCipher, CounterIncrement, Direction, Mode};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

#[cfg(test)]
pub(crate) mod vectors;

/// Construction options for mode strategies
///
/// Only CTR currently has anything to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeOptions {
    /// Counter increment policy used by CTR
    pub counter_increment: CounterIncrement,
}

/// The per-mode half of a streaming cipher context
pub trait ModeStrategy {
    /// Mode implemented by this strategy
    const MODE: Mode;

    /// Creates a strategy for a primitive with the given block size
    fn new(block_size: usize, options: &ModeOptions) -> Self
    where
        Self: Sized;

    /// Whether every chunk handed to [`ModeStrategy::transform_chunk`] must be
    /// a whole number of blocks
    fn needs_alignment(&self) -> bool;

    /// Width of the chaining register in bytes (0 when the mode has none)
    fn chaining_width(&self) -> usize;

    /// Direction the key schedule has to be set up for
    ///
    /// Feedback and counter modes only ever run the primitive forwards.
    fn key_direction(&self, direction: Direction) -> Direction {
        direction
    }

    /// Installs a fresh chaining register from `iv` and clears any keystream
    /// phase
    ///
    /// Only the first block of a longer IV is used. Fails with
    /// `InvalidIvLength` when the mode needs an IV and `iv` is missing or
    /// shorter than one block.
    fn install(&mut self, iv: Option<&[u8]>) -> Result<()>;

    /// Current chaining register, if the mode has one
    fn register(&self) -> Option<&[u8]>;

    /// Transforms `input` into `output` (same length), advancing the chaining
    /// state
    fn transform_chunk<B: BlockCipher>(
        &mut self,
        cipher: &B,
        direction: Direction,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()>;

    /// Zeroizes all chaining state
    fn wipe(&mut self);
}

/// Copies the first `register.len()` bytes of `iv` into `register`
pub(crate) fn load_register(
    register: &mut [u8],
    iv: Option<&[u8]>,
    context: &'static str,
) -> Result<()> {
    let iv = iv.unwrap_or_default();
    validate::iv_length(context, iv.len(), register.len())?;
    register.copy_from_slice(&iv[..register.len()]);
    Ok(())
}

/// Input and output of a transform must have the same length
#[inline]
pub(crate) fn check_lengths(context: &'static str, input: &[u8], output: &[u8]) -> Result<()> {
    if input.len() != output.len() {
        return Err(Error::argument(
            context,
            format!(
                "output holds {} bytes but input has {}",
                output.len(),
                input.len()
            ),
        ));
    }
    Ok(())
}
