//! Cipher Block Chaining (CBC) mode
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! The register always holds the last ciphertext block seen, so a message
//! split across any number of aligned chunks chains exactly like one call.
//! This follows NIST SP 800-38A.

use zeroize::{Zeroize, Zeroizing};

use api::error::{validate, Result};
use api::{BlockCipher, Direction, Mode};

use super::{check_lengths, load_register, ModeOptions, ModeStrategy};

/// CBC mode strategy
pub struct Cbc {
    register: Zeroizing<Vec<u8>>,
}

impl ModeStrategy for Cbc {
    const MODE: Mode = Mode::Cbc;

    fn new(block_size: usize, _options: &ModeOptions) -> Self {
        Self {
            register: Zeroizing::new(vec![0u8; block_size]),
        }
    }

    fn needs_alignment(&self) -> bool {
        true
    }

    fn chaining_width(&self) -> usize {
        self.register.len()
    }

    fn install(&mut self, iv: Option<&[u8]>) -> Result<()> {
        load_register(&mut self.register, iv, "CBC IV")
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
        let block_size = self.register.len();
        check_lengths("CBC output", input, output)?;
        validate::block_length("CBC chunk", input.len(), block_size)?;

        for (src, dst) in input
            .chunks_exact(block_size)
            .zip(output.chunks_exact_mut(block_size))
        {
            match direction {
                Direction::Encrypt => {
                    // C_i = E(P_i ^ C_{i-1})
                    for ((d, s), r) in dst.iter_mut().zip(src).zip(self.register.iter()) {
                        *d = s ^ r;
                    }
                    cipher.encrypt_block(dst)?;
                    self.register.copy_from_slice(dst);
                }
                Direction::Decrypt => {
                    // P_i = D(C_i) ^ C_{i-1}
                    dst.copy_from_slice(src);
                    cipher.decrypt_block(dst)?;
                    for (d, r) in dst.iter_mut().zip(self.register.iter()) {
                        *d ^= r;
                    }
                    self.register.copy_from_slice(src);
                }
            }
        }

        Ok(())
    }

    fn wipe(&mut self) {
        self.register.as_mut_slice().zeroize();
    }
}
