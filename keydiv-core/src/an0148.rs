//! HID AN0148 CBC-chaining key diversification.
//!
//! An 8-byte base block is built from the key index and the card UID, XORed
//! into the key material, and run through one or two chained CBC block
//! encryptions; the raw output is truncated to the original key length.

use keydiv_primitives::{bytes, encrypt_cbc, Algorithm};
use zeroize::Zeroizing;

use crate::error::{DiversificationError, Result};
use crate::observe::DerivationObserver;
use crate::types::DiversificationContext;

/// Length of the diversification base block, one DES block.
const BASE_BLOCK: usize = 8;

/// Longest UID that fits the base block next to the key index byte. The
/// AN0148 examples all use 7-byte CSNs; anything longer would spill past one
/// cipher block and mis-derive, so it is rejected outright.
const MAX_UID_LEN: usize = 7;

/// Build the 8-byte base block `D = pad(keyIndex || UID, 8)`.
fn base_block(context: &DiversificationContext) -> Result<Vec<u8>> {
    if context.uid.len() > MAX_UID_LEN {
        return Err(DiversificationError::InvalidDiversificationInput(format!(
            "AN0148 uid is {} bytes; at most {MAX_UID_LEN} fit the 8-byte diversification block",
            context.uid.len(),
        )));
    }
    let mut block = Vec::with_capacity(BASE_BLOCK);
    block.push(context.key_index);
    block.extend_from_slice(&context.uid);
    Ok(bytes::pad_to_multiple(&block, BASE_BLOCK))
}

/// Diversify a DES (8-byte) or two-key 3DES (16-byte) key.
///
/// The key is extended to 24 bytes of triple-DES keying material — an 8-byte
/// key replicates into three equal thirds (single-DES semantics), a 16-byte
/// key appends its own first half (K1 K2 K1). The two halves of the original
/// key are then pushed through one continuous CBC stream: the second block
/// encryption takes the first ciphertext block as its IV.
pub(crate) fn derive_des(
    key: &[u8],
    context: &DiversificationContext,
    observer: &mut dyn DerivationObserver,
) -> Result<Vec<u8>> {
    let base = base_block(context)?;
    observer.on_diversification_input(&base);

    let mut extended = Zeroizing::new(Vec::with_capacity(24));
    if key.len() == BASE_BLOCK {
        for _ in 0..3 {
            extended.extend_from_slice(key);
        }
    } else {
        extended.extend_from_slice(key);
        extended.extend_from_slice(&key[..BASE_BLOCK]);
    }

    let block1 = Zeroizing::new(bytes::xor(&extended[..BASE_BLOCK], &base));
    let cipher_block1 = encrypt_cbc(
        Algorithm::TripleDes,
        &extended,
        &Algorithm::TripleDes.zero_iv(),
        &block1,
    )?;
    // CBC continuation: the first ciphertext block seeds the second.
    let cipher_block2 = encrypt_cbc(
        Algorithm::TripleDes,
        &extended,
        &cipher_block1,
        &extended[BASE_BLOCK..2 * BASE_BLOCK],
    )?;

    let mut raw = Zeroizing::new(cipher_block1);
    raw.extend_from_slice(&cipher_block2);
    raw.truncate(key.len());
    Ok(raw.to_vec())
}

/// Diversify an AES-128 key.
///
/// The diversification sequence is the base block doubled to one AES block;
/// the key is XORed with it and encrypted under itself.
pub(crate) fn derive_aes(
    key: &[u8],
    context: &DiversificationContext,
    observer: &mut dyn DerivationObserver,
) -> Result<Vec<u8>> {
    let base = base_block(context)?;
    let mut sequence = base.clone();
    sequence.extend_from_slice(&base);
    observer.on_diversification_input(&sequence);

    let masked = Zeroizing::new(bytes::xor(key, &sequence));
    let mut raw = Zeroizing::new(encrypt_cbc(
        Algorithm::Aes128,
        key,
        &Algorithm::Aes128.zero_iv(),
        &masked,
    )?);
    raw.truncate(key.len());
    Ok(raw.to_vec())
}
