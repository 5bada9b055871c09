//! NXP AN10922 known-answer vectors.

use keydiv::{DiversificationContext, Diversifier, Standard};

use super::common::decode_hex;

const MASTER_AES128: &str = "00:11:22:33:44:55:66:77:88:99:AA:BB:CC:DD:EE:FF";
const MASTER_AES192: &str = "00:11:22:33:44:55:66:77:88:99:AA:BB:CC:DD:EE:FF:01:02:03:04:05:06:07:08";

/// AN10922 §2.2.1: AES-128 diversification example. The 18-byte input takes
/// the padded (K2) path.
#[test]
fn an10922_aes128_nominal() {
    let key = decode_hex(MASTER_AES128);
    let context = DiversificationContext::new(&decode_hex("04:78:2E:21:80:1D:80"))
        .with_aid(&decode_hex("F5:42:30"))
        .with_system_identifier(&decode_hex("4E:58:50:20:41:62:75"));

    let derived = Diversifier::new(Standard::An10922Aes128)
        .diversify(&key, &context)
        .expect("nominal AES-128 diversification");
    assert_eq!(derived.to_hex(), "A8DD63A3B89D54B37CA802473FDA9175");
}

/// A 21-byte system identifier makes the input exactly two blocks, taking the
/// unpadded (K1) path.
#[test]
fn an10922_aes128_two_full_blocks() {
    let key = decode_hex(MASTER_AES128);
    let seed = decode_hex(
        "01:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00:00",
    );
    assert_eq!(seed.len(), 21);
    let context = DiversificationContext::new(&decode_hex("11:22:33:44:55:66:77"))
        .with_aid(&decode_hex("AA:BB:CC"))
        .with_system_identifier(&seed);

    let derived = Diversifier::new(Standard::An10922Aes128)
        .diversify(&key, &context)
        .expect("two-full-block AES-128 diversification");
    assert_eq!(derived.to_hex(), "DB29A5E17D9414DE4BE5C0B10B49A1D2");
}

/// AN10922 §2.3.1: AES-192 diversification example (two CMAC passes with
/// constants 0x11 and 0x12, halves spliced into a 24-byte key).
#[test]
fn an10922_aes192_nominal() {
    let key = decode_hex(MASTER_AES192);
    let context = DiversificationContext::new(&decode_hex("04:78:2E:21:80:1D:80"))
        .with_aid(&decode_hex("F5:42:30"))
        .with_system_identifier(&decode_hex("4E:58:50:20:41:62:75"));

    let derived = Diversifier::new(Standard::An10922Aes192)
        .diversify(&key, &context)
        .expect("nominal AES-192 diversification");
    assert_eq!(derived.to_hex(), "CE39C8E1CD82D9A7BEDBE9D74AF59B23176755EE7586E12C");
}

/// A 1-byte key must fail with a key-format error, never return a truncated
/// or garbage key.
#[test]
fn an10922_aes128_rejects_bad_key_length() {
    let context = DiversificationContext::new(&decode_hex("04:78:2E:21:80:1D:80"))
        .with_aid(&decode_hex("F5:42:30"))
        .with_system_identifier(&decode_hex("4E:58:50:20:41:62:75"));

    let result = Diversifier::new(Standard::An10922Aes128).diversify(&[0xff], &context);
    assert!(matches!(
        result,
        Err(keydiv::DiversificationError::KeyFormat { expected: 16, actual: 1, .. })
    ));
}
