//! Output Feedback (OFB) mode
//!
//! The keystream is the register encrypted over and over
//! (`register <- E(register)` at the start of every keystream block); input
//! is XORed with it. Encryption and decryption are the same operation.

use zeroize::{Zeroize, Zeroizing};

use api::error::Result;
use api::{BlockCipher, Direction, Mode};

use super::{check_lengths, load_register, ModeOptions, ModeStrategy};

/// OFB mode strategy
pub struct Ofb {
    register: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Ofb {
    /// Offset into the current keystream block
    pub fn phase(&self) -> usize {
        self.pos
    }
}

impl ModeStrategy for Ofb {
    const MODE: Mode = Mode::Ofb;

    fn new(block_size: usize, _options: &ModeOptions) -> Self {
        Self {
            register: Zeroizing::new(vec![0u8; block_size]),
            pos: 0,
        }
    }

    fn needs_alignment(&self) -> bool {
        false
    }

    fn chaining_width(&self) -> usize {
        self.register.len()
    }

    fn key_direction(&self, _direction: Direction) -> Direction {
        Direction::Encrypt
    }

    fn install(&mut self, iv: Option<&[u8]>) -> Result<()> {
        load_register(&mut self.register, iv, "OFB IV")?;
        self.pos = 0;
        Ok(())
    }

    fn register(&self) -> Option<&[u8]> {
        Some(&self.register)
    }

    fn transform_chunk<B: BlockCipher>(
        &mut self,
        cipher: &B,
        _direction: Direction,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        check_lengths("OFB output", input, output)?;
        let block_size = self.register.len();

        let mut done = 0;
        while done < input.len() {
            if self.pos == 0 {
                cipher.encrypt_block(&mut self.register[..])?;
            }
            let take = (block_size - self.pos).min(input.len() - done);
            let keystream = &self.register[self.pos..self.pos + take];
            for ((d, s), k) in output[done..done + take]
                .iter_mut()
                .zip(&input[done..done + take])
                .zip(keystream)
            {
                *d = s ^ k;
            }

            done += take;
            self.pos = (self.pos + take) % block_size;
        }

        Ok(())
    }

    fn wipe(&mut self) {
        self.register.as_mut_slice().zeroize();
        self.pos = 0;
    }
}
