//! HID AN0148 known-answer vectors.

use keydiv::{DiversificationContext, Diversifier, Standard};

use super::common::decode_hex;

fn context(uid: &str, key_index: u8) -> DiversificationContext {
    DiversificationContext::new(&decode_hex(uid)).with_key_index(key_index)
}

/// AN0148 §5.1: single-DES example.
#[test]
fn an0148_des_nominal() {
    let key = decode_hex("01:23:45:67:89:AB:CD:EF");
    let derived = Diversifier::new(Standard::An0148Des)
        .diversify(&key, &context("04:5E:75:A9:C1:25:80", 1))
        .expect("single-DES diversification");
    assert_eq!(derived.to_hex(), "1A945225B3FAA445");
}

/// AN0148 §5.2: two-key 3DES example.
#[test]
fn an0148_3des_nominal() {
    let key = decode_hex("01:23:45:67:89:AB:CD:EF:FE:DC:BA:98:76:54:32:10");
    let derived = Diversifier::new(Standard::An0148TripleDes)
        .diversify(&key, &context("04:5E:75:A9:C1:25:80", 1))
        .expect("two-key 3DES diversification");
    assert_eq!(derived.to_hex(), "7BAA6C97BDA36BFF24445AFFA0B58CF6");
}

/// AN0148 §5.3: AES example.
#[test]
fn an0148_aes_nominal() {
    let key = decode_hex("01:23:45:67:89:AB:CD:EF:FE:DC:BA:98:76:54:32:10");
    let derived = Diversifier::new(Standard::An0148Aes)
        .diversify(&key, &context("04:6C:75:A9:C1:25:80", 1))
        .expect("AES diversification");
    assert_eq!(derived.to_hex(), "519A502E2F69CE7B17C3BFB12B304D28");
}

/// A 1-byte key must fail with a key-format error.
#[test]
fn an0148_aes_rejects_bad_key_length() {
    let result = Diversifier::new(Standard::An0148Aes)
        .diversify(&[0x01], &context("04:6C:75:A9:C1:25:80", 1));
    assert!(matches!(
        result,
        Err(keydiv::DiversificationError::KeyFormat { expected: 16, actual: 1, .. })
    ));
}

/// A UID longer than 7 bytes cannot fit the 8-byte diversification block and
/// is rejected instead of silently mis-deriving.
#[test]
fn an0148_rejects_oversized_uid() {
    let key = decode_hex("01:23:45:67:89:AB:CD:EF");
    let result = Diversifier::new(Standard::An0148Des)
        .diversify(&key, &context("04:5E:75:A9:C1:25:80:99", 1));
    assert!(matches!(
        result,
        Err(keydiv::DiversificationError::InvalidDiversificationInput(_))
    ));
}
