//! The diversification engine and its entry points.

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{DiversificationError, Result};
use crate::observe::{DerivationObserver, NoopObserver};
use crate::standard::Standard;
use crate::types::{DerivedKey, DiversificationContext};
use crate::{an0148, an10922};

/// Derives card-specific keys for one diversification standard.
///
/// The engine holds nothing but the standard: every derivation call builds
/// its cipher state from scratch and releases it before returning, so a
/// `Diversifier` can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diversifier {
    standard: Standard,
}

impl Diversifier {
    /// Create an engine for `standard`.
    #[must_use]
    pub const fn new(standard: Standard) -> Self {
        Self { standard }
    }

    /// Create an engine from a configured standard name.
    ///
    /// # Errors
    ///
    /// Returns [`DiversificationError::UnknownStandard`] for a name outside
    /// the supported set — the configuration gate of the settings boundary.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map(Self::new)
    }

    /// The standard this engine derives for.
    #[must_use]
    pub const fn standard(&self) -> Standard {
        self.standard
    }

    /// Diversify `original_key` for the card described by `context`.
    ///
    /// Deterministic: identical inputs always produce the identical key, and
    /// the derived key has exactly the length of `original_key`.
    ///
    /// # Errors
    ///
    /// Returns [`DiversificationError::KeyFormat`] when the key length does
    /// not fit the standard, and never a truncated or partial key.
    pub fn diversify(
        &self,
        original_key: &[u8],
        context: &DiversificationContext,
    ) -> Result<DerivedKey> {
        self.diversify_observed(original_key, context, &mut NoopObserver)
    }

    /// Diversify, reporting intermediate material to `observer`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Diversifier::diversify`].
    pub fn diversify_observed(
        &self,
        original_key: &[u8],
        context: &DiversificationContext,
        observer: &mut dyn DerivationObserver,
    ) -> Result<DerivedKey> {
        debug!(
            standard = %self.standard,
            algorithm = %self.standard.algorithm(),
            key_len = original_key.len(),
            uid_len = context.uid.len(),
            "diversifying key"
        );

        if original_key.len() != self.standard.key_size() {
            return Err(DiversificationError::KeyFormat {
                standard: self.standard,
                expected: self.standard.key_size(),
                actual: original_key.len(),
            });
        }

        let raw = Zeroizing::new(match self.standard {
            Standard::An10922Aes128 => an10922::derive_aes128(original_key, context, observer)?,
            Standard::An10922Aes192 => an10922::derive_aes192(original_key, context, observer)?,
            Standard::An0148Des | Standard::An0148TripleDes => {
                an0148::derive_des(original_key, context, observer)?
            }
            Standard::An0148Aes => an0148::derive_aes(original_key, context, observer)?,
        });
        observer.on_derived_key(&raw);

        debug!(standard = %self.standard, derived_len = raw.len(), "key diversified");
        Ok(DerivedKey::new(raw.to_vec()))
    }
}

/// Diversify a key in one call.
///
/// Convenience wrapper over [`Diversifier`] taking the card inputs directly;
/// `aid` and `system_identifier` default to empty when `None`.
///
/// # Errors
///
/// Same failure modes as [`Diversifier::diversify`].
pub fn diversify(
    standard: Standard,
    original_key: &[u8],
    key_index: u8,
    uid: &[u8],
    aid: Option<&[u8]>,
    system_identifier: Option<&[u8]>,
) -> Result<DerivedKey> {
    let mut context = DiversificationContext::new(uid).with_key_index(key_index);
    if let Some(aid) = aid {
        context = context.with_aid(aid);
    }
    if let Some(system_identifier) = system_identifier {
        context = context.with_system_identifier(system_identifier);
    }
    Diversifier::new(standard).diversify(original_key, &context)
}
