//! Shared helpers for the known-answer tests.

#![allow(dead_code)] // Not every helper is used by every vector module.

/// Decode a hex vector literal, accepting `:`/`-`/space separators.
pub(crate) fn decode_hex(hex_str: &str) -> Vec<u8> {
    keydiv::primitives::bytes::decode_hex(hex_str).expect("valid hex vector literal")
}

/// Encode bytes as continuous uppercase hex.
pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    keydiv::primitives::bytes::encode_hex(bytes)
}
