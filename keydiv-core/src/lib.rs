#![warn(missing_docs)]

//! # keydiv core
//!
//! Card-specific key derivation following two published smart-card key
//! diversification standards:
//!
//! - **NXP AN10922** — CMAC-based diversification for AES-128 and AES-192
//! - **HID AN0148** — CBC-chaining diversification for DES, two-key 3DES and
//!   AES-128
//!
//! The engine is a pure, stateless transformation `(master key, card
//! context) -> derived key`: no key storage, no card communication, no
//! cross-call state. Intermediate material can be observed through an
//! injectable [`observe::DerivationObserver`]; ambient `tracing` events never
//! carry raw key bytes.
//!
//! ## Example
//!
//! ```
//! use keydiv_core::{Diversifier, DiversificationContext, Standard};
//!
//! # fn main() -> Result<(), keydiv_core::DiversificationError> {
//! let master = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
//!               0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
//! let context = DiversificationContext::new(&[0x04, 0x78, 0x2E, 0x21, 0x80, 0x1D, 0x80])
//!     .with_aid(&[0xF5, 0x42, 0x30])
//!     .with_system_identifier(b"NXP Abu");
//!
//! let derived = Diversifier::new(Standard::An10922Aes128).diversify(&master, &context)?;
//! assert_eq!(derived.to_hex(), "A8DD63A3B89D54B37CA802473FDA9175");
//! # Ok(())
//! # }
//! ```

mod an0148;
mod an10922;
mod diversifier;
pub mod error;
pub mod observe;
pub mod settings;
pub mod standard;
pub mod types;

pub use diversifier::{diversify, Diversifier};
pub use error::{DiversificationError, Result};
pub use observe::{DerivationObserver, NoopObserver, TracingObserver};
pub use settings::{ResolvedSettings, Settings};
pub use standard::Standard;
pub use types::{DerivedKey, DiversificationContext};
