//! Contract for the block cipher primitive driven by the streaming engine
//!
//! The engine never looks inside a key schedule. It only needs to set one up
//! for a direction and to run whole blocks through it.

use crate::error::{validate, Result};
use crate::types::Direction;

/// A keyed block cipher primitive
///
/// A value of an implementing type *is* the key schedule. It is owned by
/// exactly one streaming context and dropped (and zeroized by the
/// implementation) when that context is destroyed.
pub trait BlockCipher: Sized {
    /// Fixed block size in bytes
    const BLOCK_SIZE: usize;

    /// Expands `key` into a schedule for `direction`
    ///
    /// Fails with [`crate::Error::InvalidKeyLength`] for unsupported key sizes.
    fn key_setup(direction: Direction, key: &[u8]) -> Result<Self>;

    /// Human readable algorithm name, e.g. `"AES-128"`
    fn name(&self) -> &'static str;

    /// Direction this schedule was set up for
    fn direction(&self) -> Direction;

    /// Encrypts exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Encrypts an aligned run of blocks in place
    fn encrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        validate::block_length("block encryption", data.len(), Self::BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(Self::BLOCK_SIZE) {
            self.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypts an aligned run of blocks in place
    fn decrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        validate::block_length("block decryption", data.len(), Self::BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(Self::BLOCK_SIZE) {
            self.decrypt_block(block)?;
        }
        Ok(())
    }
}
