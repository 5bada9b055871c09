//! Card context and derived-key containers.

use keydiv_primitives::bytes;
use zeroize::Zeroize;

/// The card-side inputs a key is diversified against.
///
/// Only the UID is commonly present for every standard; the application
/// identifier and system identifier are used by AN10922, the key index by
/// AN0148. All optional fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiversificationContext {
    /// Card UID (typically 7 bytes).
    pub uid: Vec<u8>,
    /// Application identifier (3 bytes, stored in document byte order;
    /// AN10922 reverses it when building the diversification input).
    pub aid: Vec<u8>,
    /// System identifier / seed bytes.
    pub system_identifier: Vec<u8>,
    /// Index of the key to diversify (AN0148 only).
    pub key_index: u8,
}

impl DiversificationContext {
    /// Create a context for the given card UID.
    #[must_use]
    pub fn new(uid: &[u8]) -> Self {
        Self { uid: uid.to_vec(), ..Self::default() }
    }

    /// Set the application identifier and return self for method chaining.
    #[must_use]
    pub fn with_aid(mut self, aid: &[u8]) -> Self {
        self.aid = aid.to_vec();
        self
    }

    /// Set the system identifier and return self for method chaining.
    #[must_use]
    pub fn with_system_identifier(mut self, system_identifier: &[u8]) -> Self {
        self.system_identifier = system_identifier.to_vec();
        self
    }

    /// Set the key index and return self for method chaining.
    #[must_use]
    pub fn with_key_index(mut self, key_index: u8) -> Self {
        self.key_index = key_index;
        self
    }
}

/// A diversified key, zeroized on drop.
///
/// Clone is intentionally not implemented so copies of key material cannot
/// outlive the container; borrow the bytes with [`DerivedKey::as_bytes`].
#[derive(Debug)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl DerivedKey {
    pub(crate) fn new(key: Vec<u8>) -> Self {
        Self { key }
    }

    /// Borrow the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Length of the key in bytes (always the original key's length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// The key as continuous uppercase hex, for display at the boundary.
    #[must_use]
    pub fn to_hex(&self) -> String {
        bytes::encode_hex(&self.key)
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_builder_fills_optional_fields() {
        let ctx = DiversificationContext::new(&[1, 2, 3])
            .with_aid(&[4, 5, 6])
            .with_system_identifier(&[7])
            .with_key_index(9);
        assert_eq!(ctx.uid, vec![1, 2, 3]);
        assert_eq!(ctx.aid, vec![4, 5, 6]);
        assert_eq!(ctx.system_identifier, vec![7]);
        assert_eq!(ctx.key_index, 9);
    }

    #[test]
    fn context_defaults_are_empty() {
        let ctx = DiversificationContext::default();
        assert!(ctx.uid.is_empty());
        assert!(ctx.aid.is_empty());
        assert!(ctx.system_identifier.is_empty());
        assert_eq!(ctx.key_index, 0);
    }

    #[test]
    fn derived_key_formats_uppercase_hex() {
        let key = DerivedKey::new(vec![0xa8, 0xdd, 0x63]);
        assert_eq!(key.to_hex(), "A8DD63");
        assert_eq!(key.len(), 3);
        assert!(!key.is_empty());
    }
}
