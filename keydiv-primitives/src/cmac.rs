//! CMAC subkey generation per NIST SP 800-38B section 5.3.
//!
//! The diversification standards use the CMAC construction as a one-way key
//! derivation rather than for authentication, so only the subkey half of the
//! algorithm lives here; the message processing is done by the standards
//! themselves over a fixed two-block input.

use zeroize::Zeroize;

use crate::bytes::left_shift_one_bit;
use crate::cipher::{encrypt_cbc, Algorithm, CipherError};

/// Subkey and block length for 128-bit block ciphers.
const SUBKEY_LEN: usize = 16;

/// Reduction constant for the GF(2^128) doubling step.
const RB: u8 = 0x87;

/// CMAC subkeys K1 and K2, together with the encrypted zero block L they are
/// derived from. Zeroized on drop.
#[derive(Debug)]
pub struct Subkeys {
    l: [u8; SUBKEY_LEN],
    k1: [u8; SUBKEY_LEN],
    k2: [u8; SUBKEY_LEN],
}

impl Subkeys {
    /// Derive the subkeys for `key` under a 16-byte-block `algorithm`.
    ///
    /// Computes `L = E_K(0^128)` and doubles it twice: each doubling shifts
    /// left by one bit and, when the shifted-out bit was set, folds the
    /// reduction constant `0x87` into the last byte.
    ///
    /// # Errors
    ///
    /// - [`CipherError::UnsupportedBlockSize`] for an 8-byte-block algorithm
    /// - any key-length error from the underlying cipher
    pub fn derive(algorithm: Algorithm, key: &[u8]) -> Result<Self, CipherError> {
        if algorithm.block_size() != SUBKEY_LEN {
            return Err(CipherError::UnsupportedBlockSize { actual: algorithm.block_size() });
        }

        let encrypted = encrypt_cbc(algorithm, key, &algorithm.zero_iv(), &[0u8; SUBKEY_LEN])?;
        let mut l = [0u8; SUBKEY_LEN];
        l.copy_from_slice(&encrypted);

        let k1 = double(&l);
        let k2 = double(&k1);
        Ok(Self { l, k1, k2 })
    }

    /// The encrypted zero block the subkeys were derived from.
    #[must_use]
    pub fn l(&self) -> &[u8; SUBKEY_LEN] {
        &self.l
    }

    /// First subkey, applied to an unpadded final block.
    #[must_use]
    pub fn k1(&self) -> &[u8; SUBKEY_LEN] {
        &self.k1
    }

    /// Second subkey, applied to a padded final block.
    #[must_use]
    pub fn k2(&self) -> &[u8; SUBKEY_LEN] {
        &self.k2
    }
}

impl Zeroize for Subkeys {
    fn zeroize(&mut self) {
        self.l.zeroize();
        self.k1.zeroize();
        self.k2.zeroize();
    }
}

impl Drop for Subkeys {
    fn drop(&mut self) {
        self.zeroize();
    }
}

fn double(block: &[u8; SUBKEY_LEN]) -> [u8; SUBKEY_LEN] {
    let shifted = left_shift_one_bit(block);
    let mut out = [0u8; SUBKEY_LEN];
    out.copy_from_slice(&shifted);
    if block[0] & 0x80 != 0 {
        out[SUBKEY_LEN - 1] ^= RB;
    }
    out
}
