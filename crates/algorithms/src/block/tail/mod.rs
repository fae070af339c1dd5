//! Sub-block residue buffering for block-aligned modes
//!
//! ECB and CBC can only transform whole blocks. A streaming context accepts
//! writes of any length, so the bytes that do not yet complete a block are
//! kept here until the next write supplies the rest.
//!
//! Invariant: `len() < block_size()` between writes. The buffer is exactly
//! full only transiently, while the completed block is handed to the mode.

use zeroize::{Zeroize, Zeroizing};

use api::error::{Error, Result};

/// Largest block-aligned prefix length of a run of `len` bytes
#[inline]
pub fn aligned_len(len: usize, block_size: usize) -> usize {
    len - len % block_size
}

/// Zeroizing buffer of fewer than one block of pending input
pub struct TailBuffer {
    bytes: Zeroizing<Vec<u8>>,
    block_size: usize,
}

impl TailBuffer {
    /// Creates an empty buffer for the given block size
    pub fn new(block_size: usize) -> Self {
        Self {
            bytes: Zeroizing::new(Vec::with_capacity(block_size)),
            block_size,
        }
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Block size this buffer completes towards
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns `true` once a whole block has been gathered
    pub fn is_full(&self) -> bool {
        self.bytes.len() == self.block_size
    }

    /// Buffered bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies as many bytes from the front of `data` as are missing from a
    /// whole block and returns how many were taken
    pub fn fill_from(&mut self, data: &[u8]) -> usize {
        let take = (self.block_size - self.bytes.len()).min(data.len());
        self.bytes.extend_from_slice(&data[..take]);
        take
    }

    /// Appends the residue left after an aligned run
    ///
    /// Fails with `InvalidBlockLength` if the buffer would reach a whole
    /// block, which would mean the caller's alignment arithmetic is wrong.
    pub fn stash(&mut self, residue: &[u8]) -> Result<()> {
        let total = self.bytes.len() + residue.len();
        if total >= self.block_size {
            return Err(Error::InvalidBlockLength {
                context: "tail residue",
                block_size: self.block_size,
                actual: total,
            });
        }
        self.bytes.extend_from_slice(residue);
        Ok(())
    }

    /// Wipes and empties the buffer
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }
}
