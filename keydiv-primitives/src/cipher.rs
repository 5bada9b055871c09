//! CBC block-cipher adapter used by the diversification standards.
//!
//! The adapter exposes a single primitive: encrypt one or more full blocks
//! under an explicit IV. No padding is applied and no chaining state survives
//! a call; chained constructions (the AN0148 two-block stream) thread the
//! previous ciphertext block back in as the next IV.

use std::fmt;

use aes::{Aes128, Aes192};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use des::TdesEde3;
use thiserror::Error;

/// Block-cipher algorithms used by the supported diversification standards.
///
/// Single DES is keyed as triple DES with three equal sub-keys, the same
/// degenerate keying the standards themselves describe, so the DES family
/// collapses to one 24-byte-keyed variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Two- or three-key triple DES, 8-byte blocks, 24-byte key.
    TripleDes,
    /// AES-128, 16-byte blocks, 16-byte key.
    Aes128,
    /// AES-192, 16-byte blocks, 24-byte key.
    Aes192,
}

impl Algorithm {
    /// Cipher block size in bytes.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::TripleDes => 8,
            Algorithm::Aes128 | Algorithm::Aes192 => 16,
        }
    }

    /// Required key length in bytes.
    #[must_use]
    pub const fn key_size(self) -> usize {
        match self {
            Algorithm::Aes128 => 16,
            Algorithm::TripleDes | Algorithm::Aes192 => 24,
        }
    }

    /// An all-zero IV of the algorithm's block size.
    #[must_use]
    pub fn zero_iv(self) -> Vec<u8> {
        vec![0; self.block_size()]
    }

    /// Display name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::TripleDes => "3DES",
            Algorithm::Aes128 => "AES-128",
            Algorithm::Aes192 => "AES-192",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the cipher adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The key does not match the algorithm's required key size.
    #[error("invalid key length for {algorithm}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Algorithm the key was offered to.
        algorithm: Algorithm,
        /// Required key length in bytes.
        expected: usize,
        /// Length of the key actually supplied.
        actual: usize,
    },

    /// The plaintext is not an exact multiple of the block size.
    #[error("plaintext length {actual} is not a positive multiple of the {block_size}-byte block size")]
    UnalignedInput {
        /// Cipher block size in bytes.
        block_size: usize,
        /// Length of the plaintext actually supplied.
        actual: usize,
    },

    /// The IV does not match the cipher block size.
    #[error("IV length {actual} does not match the {block_size}-byte block size")]
    InvalidIv {
        /// Cipher block size in bytes.
        block_size: usize,
        /// Length of the IV actually supplied.
        actual: usize,
    },

    /// Subkey generation was requested for a cipher with the wrong block size.
    #[error("subkey generation requires a 16-byte block cipher, got {actual}-byte blocks")]
    UnsupportedBlockSize {
        /// Block size of the offending algorithm.
        actual: usize,
    },
}

/// Encrypt `plaintext` in CBC mode under `key` and the explicit `iv`.
///
/// `plaintext` must be one or more full blocks; nothing is padded here.
/// Encryption is deterministic, holds no state across calls, and never
/// mutates its inputs.
///
/// # Errors
///
/// - [`CipherError::InvalidKeyLength`] when the key size does not match
/// - [`CipherError::InvalidIv`] when the IV is not one block long
/// - [`CipherError::UnalignedInput`] when the plaintext is empty or not
///   block-aligned
pub fn encrypt_cbc(
    algorithm: Algorithm,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    if key.len() != algorithm.key_size() {
        return Err(CipherError::InvalidKeyLength {
            algorithm,
            expected: algorithm.key_size(),
            actual: key.len(),
        });
    }
    if iv.len() != algorithm.block_size() {
        return Err(CipherError::InvalidIv {
            block_size: algorithm.block_size(),
            actual: iv.len(),
        });
    }
    if plaintext.is_empty() || plaintext.len() % algorithm.block_size() != 0 {
        return Err(CipherError::UnalignedInput {
            block_size: algorithm.block_size(),
            actual: plaintext.len(),
        });
    }

    let mut buf = plaintext.to_vec();
    match algorithm {
        Algorithm::TripleDes => encrypt_in_place::<cbc::Encryptor<TdesEde3>>(algorithm, key, iv, &mut buf)?,
        Algorithm::Aes128 => encrypt_in_place::<cbc::Encryptor<Aes128>>(algorithm, key, iv, &mut buf)?,
        Algorithm::Aes192 => encrypt_in_place::<cbc::Encryptor<Aes192>>(algorithm, key, iv, &mut buf)?,
    }
    Ok(buf)
}

fn encrypt_in_place<C>(
    algorithm: Algorithm,
    key: &[u8],
    iv: &[u8],
    buf: &mut [u8],
) -> Result<(), CipherError>
where
    C: KeyIvInit + BlockEncryptMut,
{
    let msg_len = buf.len();
    let encryptor = C::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyLength {
        algorithm,
        expected: algorithm.key_size(),
        actual: key.len(),
    })?;
    encryptor
        .encrypt_padded_mut::<NoPadding>(buf, msg_len)
        .map_err(|_| CipherError::UnalignedInput {
            block_size: algorithm.block_size(),
            actual: msg_len,
        })?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_key_length() {
        let result = encrypt_cbc(Algorithm::Aes128, &[0u8; 1], &[0u8; 16], &[0u8; 16]);
        assert_eq!(
            result,
            Err(CipherError::InvalidKeyLength {
                algorithm: Algorithm::Aes128,
                expected: 16,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_unaligned_plaintext() {
        let result = encrypt_cbc(Algorithm::TripleDes, &[0u8; 24], &[0u8; 8], &[0u8; 7]);
        assert_eq!(
            result,
            Err(CipherError::UnalignedInput { block_size: 8, actual: 7 })
        );
    }

    #[test]
    fn rejects_empty_plaintext() {
        let result = encrypt_cbc(Algorithm::Aes128, &[0u8; 16], &[0u8; 16], &[]);
        assert_eq!(
            result,
            Err(CipherError::UnalignedInput { block_size: 16, actual: 0 })
        );
    }

    #[test]
    fn rejects_wrong_iv_length() {
        let result = encrypt_cbc(Algorithm::Aes128, &[0u8; 16], &[0u8; 8], &[0u8; 16]);
        assert_eq!(result, Err(CipherError::InvalidIv { block_size: 16, actual: 8 }));
    }

    /// FIPS 197 appendix C.1 single-block vector; with a zero IV the first
    /// CBC block is the raw cipher transform.
    #[test]
    fn aes128_matches_fips197_single_block() {
        let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let ciphertext = encrypt_cbc(Algorithm::Aes128, &key, &[0u8; 16], &plaintext).unwrap();
        assert_eq!(hex::encode(ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
    }

    #[test]
    fn cbc_chains_across_blocks() {
        let key = [0x42u8; 16];
        let plaintext = [0u8; 32];
        let two_blocks = encrypt_cbc(Algorithm::Aes128, &key, &[0u8; 16], &plaintext).unwrap();

        // Second block must chain on the first ciphertext block: encrypting
        // the second plaintext block with the first ciphertext as IV gives
        // the same output.
        let chained = encrypt_cbc(Algorithm::Aes128, &key, &two_blocks[..16], &plaintext[16..]).unwrap();
        assert_eq!(&two_blocks[16..], chained.as_slice());
        assert_ne!(&two_blocks[..16], &two_blocks[16..]);
    }

    /// Classic single-DES vector (key 0123456789ABCDEF, plaintext "Now is t").
    /// With three equal thirds, E-D-E collapses to one DES encryption, so the
    /// replicated-key 3DES output must match the published DES ciphertext.
    #[test]
    fn triple_des_with_equal_thirds_degenerates_to_single_des() {
        let single = hex::decode("0123456789abcdef").unwrap();
        let mut replicated = Vec::new();
        for _ in 0..3 {
            replicated.extend_from_slice(&single);
        }
        let plaintext = b"Now is t";
        let out = encrypt_cbc(Algorithm::TripleDes, &replicated, &[0u8; 8], plaintext).unwrap();
        assert_eq!(hex::encode(out), "3fa40e8a984d4815");
    }
}
