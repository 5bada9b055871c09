//! The hex-string settings boundary.
//!
//! Settings mirror what card tooling configuration files carry: the standard
//! by name, key material and card identifiers as hex strings (whitespace,
//! `:` and `-` separators accepted), and the key index as a small integer.
//! Everything is validated and decoded up front, before any derivation work.

use keydiv_primitives::bytes;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::diversifier::Diversifier;
use crate::error::{DiversificationError, Result};
use crate::standard::Standard;
use crate::types::{DerivedKey, DiversificationContext};

/// Diversification settings as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Derivation standard to use.
    pub standard: String,
    /// Key to diversify, as hex.
    pub key: String,
    /// Card UID, as hex.
    pub uid: String,
    /// Application identifier, as hex (AN10922 only).
    pub aid: String,
    /// System identifier, as hex (AN10922 only).
    pub system_identifier: String,
    /// Index of the key to diversify (AN0148 only).
    pub key_index: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            standard: "AN10922_AES128".to_owned(),
            key: "00000000000000000000000000000000".to_owned(),
            uid: "00000000000000".to_owned(),
            aid: "000000".to_owned(),
            system_identifier: "00".to_owned(),
            key_index: 0,
        }
    }
}

impl Settings {
    /// Create settings with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standard name and return self for method chaining.
    #[must_use]
    pub fn with_standard(mut self, standard: &str) -> Self {
        self.standard = standard.to_owned();
        self
    }

    /// Set the key hex string and return self for method chaining.
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_owned();
        self
    }

    /// Set the UID hex string and return self for method chaining.
    #[must_use]
    pub fn with_uid(mut self, uid: &str) -> Self {
        self.uid = uid.to_owned();
        self
    }

    /// Set the AID hex string and return self for method chaining.
    #[must_use]
    pub fn with_aid(mut self, aid: &str) -> Self {
        self.aid = aid.to_owned();
        self
    }

    /// Set the system identifier hex string and return self for method chaining.
    #[must_use]
    pub fn with_system_identifier(mut self, system_identifier: &str) -> Self {
        self.system_identifier = system_identifier.to_owned();
        self
    }

    /// Set the key index and return self for method chaining.
    #[must_use]
    pub fn with_key_index(mut self, key_index: u8) -> Self {
        self.key_index = key_index;
        self
    }

    /// Validate without deriving anything.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Settings::resolve`].
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(drop)
    }

    /// Decode every field into its typed form.
    ///
    /// # Errors
    ///
    /// Returns [`DiversificationError::UnknownStandard`] for an unsupported
    /// standard name and [`DiversificationError::Parsing`] for malformed hex,
    /// naming the offending field. Nothing is derived on failure.
    pub fn resolve(&self) -> Result<ResolvedSettings> {
        let standard: Standard = self.standard.parse()?;
        let key = Zeroizing::new(decode_field("key", &self.key)?);
        let context = DiversificationContext {
            uid: decode_field("uid", &self.uid)?,
            aid: decode_field("aid", &self.aid)?,
            system_identifier: decode_field("system_identifier", &self.system_identifier)?,
            key_index: self.key_index,
        };
        Ok(ResolvedSettings { standard, key, context })
    }

    /// Resolve the settings and run the diversification they describe.
    ///
    /// # Errors
    ///
    /// Any resolution error, or any derivation error from
    /// [`Diversifier::diversify`].
    pub fn run(&self) -> Result<DerivedKey> {
        let resolved = self.resolve()?;
        Diversifier::new(resolved.standard).diversify(&resolved.key, &resolved.context)
    }
}

/// The typed form of [`Settings`].
#[derive(Debug)]
pub struct ResolvedSettings {
    /// The parsed standard.
    pub standard: Standard,
    /// Decoded key material, zeroized on drop.
    pub key: Zeroizing<Vec<u8>>,
    /// Decoded card context.
    pub context: DiversificationContext,
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>> {
    bytes::decode_hex(value).map_err(|source| DiversificationError::Parsing { field, source })
}
