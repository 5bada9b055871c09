#![warn(missing_docs)]

//! # keydiv
//!
//! Card-specific secret keys from a master key and card-identifying data,
//! following two published smart-card key diversification standards:
//!
//! - **NXP AN10922** — CMAC-based diversification (AES-128, AES-192)
//! - **HID AN0148** — CBC-chaining diversification (DES, two-key 3DES, AES)
//!
//! This facade re-exports the public API of [`keydiv_core`]; the byte and
//! cipher building blocks live in [`primitives`].
//!
//! ```
//! use keydiv::{diversify, Standard};
//!
//! # fn main() -> Result<(), keydiv::DiversificationError> {
//! let master = hex::decode("0123456789ABCDEF").expect("valid hex");
//! let uid = [0x04, 0x5E, 0x75, 0xA9, 0xC1, 0x25, 0x80];
//! let derived = diversify(Standard::An0148Des, &master, 1, &uid, None, None)?;
//! assert_eq!(derived.to_hex(), "1A945225B3FAA445");
//! # Ok(())
//! # }
//! ```

pub use keydiv_core::{
    diversify, DerivationObserver, DerivedKey, DiversificationContext, DiversificationError,
    Diversifier, NoopObserver, ResolvedSettings, Result, Settings, Standard, TracingObserver,
};

/// Byte-level and block-cipher building blocks.
pub use keydiv_primitives as primitives;
