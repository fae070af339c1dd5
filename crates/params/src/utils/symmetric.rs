//! Constants for symmetric block ciphers and their streaming contexts

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// IV / counter block size for AES based modes
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Default number of bytes a streaming context produces per sink push
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// A chunk must hold at least this many cipher blocks
pub const MIN_CHUNK_BLOCKS: usize = 2;
