//! Validation utilities shared by the primitive adapter, the mode strategies
//! and the streaming context

use super::{Error, Result};

/// Validate an argument condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::argument(name, reason));
    }
    Ok(())
}

/// Validate a state condition
#[inline(always)]
pub fn state(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidState { context, message });
    }
    Ok(())
}

/// Validate that an IV covers at least one block
#[inline(always)]
pub fn iv_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidIvLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a run is a whole number of blocks
#[inline(always)]
pub fn block_length(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || actual % block_size != 0 {
        return Err(Error::InvalidBlockLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
