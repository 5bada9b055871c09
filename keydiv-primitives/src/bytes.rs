//! Byte-level helpers shared by the diversification algorithms.
//!
//! All functions return fresh buffers; inputs are never mutated in place.

use thiserror::Error;

/// Error raised when a hexadecimal setting value cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexParseError {
    /// The string holds an odd number of hex digits once separators are removed.
    #[error("hex string has an odd number of digits ({digits}) after cleaning")]
    OddDigitCount {
        /// Number of hex digits left after removing separator characters.
        digits: usize,
    },
}

/// XOR two byte buffers into a new buffer of the longer length.
///
/// Callers must pass buffers of compatible lengths: every index of the output
/// is read from both inputs, so a shorter buffer is a precondition violation.
///
/// # Panics
///
/// Panics if either buffer is shorter than the longer of the two.
#[must_use]
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    (0..len).map(|i| a[i] ^ b[i]).collect()
}

/// Shift a big-endian bit string left by one bit.
///
/// The most significant bit is dropped and a zero bit enters on the right;
/// the output has the same byte length as the input.
#[must_use]
pub fn left_shift_one_bit(block: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; block.len()];
    let mut carry = 0u8;
    for (i, &byte) in block.iter().enumerate().rev() {
        out[i] = (byte << 1) | carry;
        carry = byte >> 7;
    }
    out
}

/// Zero-pad `data` up to the smallest multiple of `multiple`.
///
/// Returns `data` unchanged when `multiple` is zero or the length already is
/// an exact multiple.
#[must_use]
pub fn pad_to_multiple(data: &[u8], multiple: usize) -> Vec<u8> {
    let mut padded = data.to_vec();
    if multiple == 0 || data.len() % multiple == 0 {
        return padded;
    }
    let target = (data.len() / multiple + 1) * multiple;
    padded.resize(target, 0);
    padded
}

/// Strip the trailing zero bytes added by [`pad_to_multiple`].
#[must_use]
pub fn unpad(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|&b| b != 0)
        .map_or(data.len(), |pos| pos + 1);
    &data[..end]
}

/// Return a new buffer with the byte order reversed.
#[must_use]
pub fn reverse(data: &[u8]) -> Vec<u8> {
    let mut reversed = data.to_vec();
    reversed.reverse();
    reversed
}

/// Decode a hexadecimal string, ignoring separator characters.
///
/// Everything outside `[0-9a-fA-F]` (whitespace, `:`, `-`, ...) is stripped
/// before decoding, matching the formats card tooling commonly emits.
///
/// # Errors
///
/// Returns [`HexParseError::OddDigitCount`] when the cleaned string cannot be
/// grouped into full bytes.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, HexParseError> {
    let cleaned: String = value.chars().filter(char::is_ascii_hexdigit).collect();
    if cleaned.len() % 2 != 0 {
        return Err(HexParseError::OddDigitCount { digits: cleaned.len() });
    }
    hex::decode(&cleaned).map_err(|_| HexParseError::OddDigitCount { digits: cleaned.len() })
}

/// Encode bytes as continuous uppercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Format bytes as uppercase hex pairs joined by `separator`, for display.
#[must_use]
pub fn format_hex(bytes: &[u8], separator: char) -> String {
    let mut formatted = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            formatted.push(separator);
        }
        formatted.push_str(&format!("{byte:02X}"));
    }
    formatted
}
