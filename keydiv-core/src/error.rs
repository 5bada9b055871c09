//! Error types for key diversification.
//!
//! Every failure surfaces as one [`DiversificationError`] carrying its cause;
//! the engine never substitutes a default or partial key.

use keydiv_primitives::{CipherError, HexParseError};
use thiserror::Error;

use crate::standard::Standard;

/// Errors that can occur while configuring or running a diversification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiversificationError {
    /// The configured standard name does not match any supported standard.
    ///
    /// Raised at construction time, before any derivation work.
    #[error("unknown diversification standard: {0}")]
    UnknownStandard(String),

    /// The supplied key length does not fit the selected standard.
    #[error("key length {actual} is not valid for {standard}: expected {expected} bytes")]
    KeyFormat {
        /// Standard the key was offered to.
        standard: Standard,
        /// Key length the standard requires, in bytes.
        expected: usize,
        /// Length of the key actually supplied.
        actual: usize,
    },

    /// The card context cannot be turned into a valid diversification input.
    #[error("invalid diversification input: {0}")]
    InvalidDiversificationInput(String),

    /// The underlying block cipher rejected the operation.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// A hex-string setting could not be decoded.
    #[error("malformed hex value for `{field}`")]
    Parsing {
        /// Name of the offending settings field.
        field: &'static str,
        /// The underlying decode failure.
        #[source]
        source: HexParseError,
    },
}

/// A specialized Result type for diversification operations.
pub type Result<T> = std::result::Result<T, DiversificationError>;
