//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed independently with the schedule for the
//! context's direction. There is no chaining state, so installing an IV or
//! resetting is a no-op.

use api::error::{validate, Result};
use api::{BlockCipher, Direction, Mode};

use super::{check_lengths, ModeOptions, ModeStrategy};

/// ECB mode strategy
#[derive(Debug, Clone)]
pub struct Ecb {
    block_size: usize,
}

impl ModeStrategy for Ecb {
    const MODE: Mode = Mode::Ecb;

    fn new(block_size: usize, _options: &ModeOptions) -> Self {
        Self { block_size }
    }

    fn needs_alignment(&self) -> bool {
        true
    }

    fn chaining_width(&self) -> usize {
        0
    }

    fn install(&mut self, _iv: Option<&[u8]>) -> Result<()> {
        Ok(())
    }

    fn register(&self) -> Option<&[u8]> {
        None
    }

    fn transform_chunk<B: BlockCipher>(
        &mut self,
        cipher: &B,
        direction: Direction,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        check_lengths("ECB output", input, output)?;
        validate::block_length("ECB chunk", input.len(), self.block_size)?;

        output.copy_from_slice(input);
        match direction {
            Direction::Encrypt => cipher.encrypt_blocks(output),
            Direction::Decrypt => cipher.decrypt_blocks(output),
        }
    }

    fn wipe(&mut self) {}
}
