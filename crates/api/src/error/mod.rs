//! Error handling for the cipherflow ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Sink {
            message: e.to_string(),
        }
    }
}
