//! The closed set of supported diversification standards.

use std::fmt;
use std::str::FromStr;

use keydiv_primitives::Algorithm;

use crate::error::DiversificationError;

/// A diversification standard, bound to exactly one cipher algorithm.
///
/// The binding is fixed at compile time and never changes after construction:
/// dispatching on this enum replaces the open inheritance hierarchy a
/// class-based design would use for what is a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    /// NXP AN10922 CMAC-based diversification, AES-128.
    An10922Aes128,
    /// NXP AN10922 CMAC-based diversification, AES-192 (two CMAC passes).
    An10922Aes192,
    /// HID AN0148 CBC-chaining diversification, single DES.
    An0148Des,
    /// HID AN0148 CBC-chaining diversification, two-key 3DES.
    An0148TripleDes,
    /// HID AN0148 CBC-chaining diversification, AES-128.
    An0148Aes,
}

impl Standard {
    /// Every supported standard, in declaration order.
    pub const ALL: [Standard; 5] = [
        Standard::An10922Aes128,
        Standard::An10922Aes192,
        Standard::An0148Des,
        Standard::An0148TripleDes,
        Standard::An0148Aes,
    ];

    /// The cipher algorithm this standard runs on.
    ///
    /// AN0148's DES variants run on a triple-DES cipher with the key extended
    /// to 24 bytes, exactly as the original scheme keys a `DESede` cipher.
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Standard::An10922Aes128 | Standard::An0148Aes => Algorithm::Aes128,
            Standard::An10922Aes192 => Algorithm::Aes192,
            Standard::An0148Des | Standard::An0148TripleDes => Algorithm::TripleDes,
        }
    }

    /// Length of the master key this standard accepts, in bytes.
    ///
    /// This is the length of the key as the caller supplies it, before any
    /// DES-family key extension; the derived key has the same length.
    #[must_use]
    pub const fn key_size(self) -> usize {
        match self {
            Standard::An0148Des => 8,
            Standard::An10922Aes128 | Standard::An0148TripleDes | Standard::An0148Aes => 16,
            Standard::An10922Aes192 => 24,
        }
    }

    /// The standard's configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Standard::An10922Aes128 => "AN10922_AES128",
            Standard::An10922Aes192 => "AN10922_AES192",
            Standard::An0148Des => "AN0148_DES",
            Standard::An0148TripleDes => "AN0148_3DES",
            Standard::An0148Aes => "AN0148_AES",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standard {
    type Err = DiversificationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Standard::ALL
            .into_iter()
            .find(|standard| standard.name() == name)
            .ok_or_else(|| DiversificationError::UnknownStandard(name.to_owned()))
    }
}
