//! AES primitive adapter
//!
//! Wraps the RustCrypto `aes` crate behind the [`BlockCipher`] contract. The
//! key length selects AES-128, AES-192 or AES-256.
//!
//! A schedule remembers the direction it was set up for and refuses the
//! opposite transform, the same way a primitive with separate encryption and
//! decryption schedules would. Feedback and counter modes therefore request an
//! encryption schedule in both directions.
//!
//! The expanded round keys are zeroized when the schedule is dropped (the
//! `aes` crate's `zeroize` feature).

use core::fmt;

use ::aes::cipher::generic_array::GenericArray;
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use api::error::{validate, Error, Result};
use api::{BlockCipher, Direction};
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

#[derive(Clone)]
enum Schedule {
    Aes128(::aes::Aes128),
    Aes192(::aes::Aes192),
    Aes256(::aes::Aes256),
}

/// AES key schedule for one direction
#[derive(Clone)]
pub struct Aes {
    schedule: Schedule,
    direction: Direction,
}

impl Aes {
    fn check_block(&self, block: &[u8], wanted: Direction) -> Result<()> {
        validate::state(
            self.direction == wanted,
            "AES key schedule",
            "schedule was set up for the other direction",
        )?;
        if block.len() != AES_BLOCK_SIZE {
            return Err(Error::InvalidBlockLength {
                context: "AES block",
                block_size: AES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn key_setup(direction: Direction, key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidKeyLength {
            context: "AES",
            actual: key.len(),
        };
        let schedule = match key.len() {
            AES128_KEY_SIZE => Schedule::Aes128(::aes::Aes128::new_from_slice(key).map_err(invalid)?),
            AES192_KEY_SIZE => Schedule::Aes192(::aes::Aes192::new_from_slice(key).map_err(invalid)?),
            AES256_KEY_SIZE => Schedule::Aes256(::aes::Aes256::new_from_slice(key).map_err(invalid)?),
            actual => {
                return Err(Error::InvalidKeyLength {
                    context: "AES",
                    actual,
                })
            }
        };
        Ok(Self {
            schedule,
            direction,
        })
    }

    fn name(&self) -> &'static str {
        match self.schedule {
            Schedule::Aes128(_) => "AES-128",
            Schedule::Aes192(_) => "AES-192",
            Schedule::Aes256(_) => "AES-256",
        }
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.check_block(block, Direction::Encrypt)?;
        let block = GenericArray::from_mut_slice(block);
        match &self.schedule {
            Schedule::Aes128(cipher) => cipher.encrypt_block(block),
            Schedule::Aes192(cipher) => cipher.encrypt_block(block),
            Schedule::Aes256(cipher) => cipher.encrypt_block(block),
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.check_block(block, Direction::Decrypt)?;
        let block = GenericArray::from_mut_slice(block);
        match &self.schedule {
            Schedule::Aes128(cipher) => cipher.decrypt_block(block),
            Schedule::Aes192(cipher) => cipher.decrypt_block(block),
            Schedule::Aes256(cipher) => cipher.decrypt_block(block),
        }
        Ok(())
    }
}

// Never print round keys
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("algorithm", &self.name())
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
