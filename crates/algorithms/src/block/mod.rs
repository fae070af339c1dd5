//! Block cipher adapter, modes of operation and alignment helpers

pub mod aes;
pub mod modes;
pub mod tail;

// Re-exports
pub use self::aes::Aes;
pub use modes::{Cbc, Cfb, Ctr, Ecb, ModeStrategy, Ofb};
pub use tail::{aligned_len, TailBuffer};

pub use api::BlockCipher;
