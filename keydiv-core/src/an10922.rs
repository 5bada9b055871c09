//! NXP AN10922 CMAC-based key diversification.
//!
//! The diversification input is forced to exactly two 16-byte blocks and run
//! through a CBC pass whose last block is masked with a CMAC subkey; the
//! final ciphertext block is the diversified key. AES-192 composes two such
//! passes with distinct constants and splices the halves.

use keydiv_primitives::{bytes, encrypt_cbc, Algorithm, Subkeys};
use zeroize::Zeroizing;

use crate::error::{DiversificationError, Result};
use crate::observe::DerivationObserver;
use crate::types::DiversificationContext;

const BLOCK: usize = 16;

/// Fixed length of the CMAC input: two cipher blocks.
const INPUT_LEN: usize = 2 * BLOCK;

/// Diversification constant for AES-128.
const AES128_DIV_CONSTANT: u8 = 0x01;

/// Diversification constants for the two AES-192 passes.
const AES192_DIV_CONSTANT_1: u8 = 0x11;
const AES192_DIV_CONSTANT_2: u8 = 0x12;

/// Build the diversification input: `constant || UID || reverse(AID) || systemIdentifier`.
fn build_input(constant: u8, context: &DiversificationContext) -> Vec<u8> {
    let mut input = Vec::with_capacity(
        1 + context.uid.len() + context.aid.len() + context.system_identifier.len(),
    );
    input.push(constant);
    input.extend_from_slice(&context.uid);
    input.extend_from_slice(&bytes::reverse(&context.aid));
    input.extend_from_slice(&context.system_identifier);
    input
}

/// One AN10922 CMAC pass: returns the 16-byte diversified key for `input`.
fn cmac_pass(
    algorithm: Algorithm,
    key: &[u8],
    input: &[u8],
    observer: &mut dyn DerivationObserver,
) -> Result<Vec<u8>> {
    if input.len() > INPUT_LEN {
        return Err(DiversificationError::InvalidDiversificationInput(format!(
            "diversification input is {} bytes; at most {INPUT_LEN} fit the two-block CMAC",
            input.len(),
        )));
    }
    observer.on_diversification_input(input);

    // Anything shorter than two blocks gets the 0x80 marker and zero padding;
    // an exact two-block input is used as-is. The padded flag selects the
    // subkey masking the last block, per SP 800-38B.
    let (mut blocks, padded) = if input.len() == INPUT_LEN {
        (input.to_vec(), false)
    } else {
        let mut marked = input.to_vec();
        marked.push(0x80);
        (bytes::pad_to_multiple(&marked, INPUT_LEN), true)
    };

    let subkeys = Subkeys::derive(algorithm, key)?;
    observer.on_subkeys(subkeys.l(), subkeys.k1(), subkeys.k2());

    let subkey = if padded { subkeys.k2() } else { subkeys.k1() };
    let masked = bytes::xor(&blocks[BLOCK..], subkey);
    blocks[BLOCK..].copy_from_slice(&masked);

    let ciphertext = Zeroizing::new(encrypt_cbc(algorithm, key, &algorithm.zero_iv(), &blocks)?);
    Ok(ciphertext[BLOCK..].to_vec())
}

/// Diversify an AES-128 key.
pub(crate) fn derive_aes128(
    key: &[u8],
    context: &DiversificationContext,
    observer: &mut dyn DerivationObserver,
) -> Result<Vec<u8>> {
    let input = build_input(AES128_DIV_CONSTANT, context);
    cmac_pass(Algorithm::Aes128, key, &input, observer)
}

/// Diversify an AES-192 key from two CMAC passes.
///
/// The 24-byte result is `P1[0..8] || (P1[8..16] ^ P2[0..8]) || P2[8..16]`
/// where P1 and P2 are the pass outputs for constants 0x11 and 0x12.
pub(crate) fn derive_aes192(
    key: &[u8],
    context: &DiversificationContext,
    observer: &mut dyn DerivationObserver,
) -> Result<Vec<u8>> {
    let input1 = build_input(AES192_DIV_CONSTANT_1, context);
    let input2 = build_input(AES192_DIV_CONSTANT_2, context);

    let pass1 = Zeroizing::new(cmac_pass(Algorithm::Aes192, key, &input1, observer)?);
    observer.on_pass_output(1, &pass1);
    let pass2 = Zeroizing::new(cmac_pass(Algorithm::Aes192, key, &input2, observer)?);
    observer.on_pass_output(2, &pass2);

    let mut derived = Vec::with_capacity(24);
    derived.extend_from_slice(&pass1[..8]);
    derived.extend_from_slice(&bytes::xor(&pass1[8..16], &pass2[..8]));
    derived.extend_from_slice(&pass2[8..16]);
    Ok(derived)
}
