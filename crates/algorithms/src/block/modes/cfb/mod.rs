//! Cipher Feedback (CFB) mode, full block feedback
//!
//! The register is encrypted in place whenever a new keystream block starts.
//! Each byte is then XORed with the register and the resulting *ciphertext*
//! byte is written back into the register, in both directions, so encryptor
//! and decryptor feed back the same stream. Writes of any length are
//! accepted; the byte phase inside the current block is kept between calls.

use zeroize::{Zeroize, Zeroizing};

use api::error::Result;
use api::{BlockCipher, Direction, Mode};

use super::{check_lengths, load_register, ModeOptions, ModeStrategy};

/// CFB mode strategy
pub struct Cfb {
    register: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Cfb {
    /// Offset into the current keystream block
    pub fn phase(&self) -> usize {
        self.pos
    }
}

impl ModeStrategy for Cfb {
    const MODE: Mode = Mode::Cfb;

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
        load_register(&mut self.register, iv, "CFB IV")?;
        self.pos = 0;
        Ok(())
    }

    fn register(&self) -> Option<&[u8]> {
        Some(&self.register)
    }

    fn transform_chunk<B: BlockCipher>(
        &mut self,
        cipher: &B,
        direction: Direction,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        check_lengths("CFB output", input, output)?;
        let block_size = self.register.len();

        let mut done = 0;
        while done < input.len() {
            if self.pos == 0 {
                cipher.encrypt_block(&mut self.register[..])?;
            }
            let take = (block_size - self.pos).min(input.len() - done);
            let register = &mut self.register[self.pos..self.pos + take];
            let src = &input[done..done + take];
            let dst = &mut output[done..done + take];

            match direction {
                Direction::Encrypt => {
                    for ((r, s), d) in register.iter_mut().zip(src).zip(dst.iter_mut()) {
                        *r ^= s;
                        *d = *r;
                    }
                }
                Direction::Decrypt => {
                    for ((r, s), d) in register.iter_mut().zip(src).zip(dst.iter_mut()) {
                        *d = *r ^ s;
                        *r = *s;
                    }
                }
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
