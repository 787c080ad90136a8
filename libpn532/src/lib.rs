// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller over SPI: command
//! framing and handshake, MIFARE Classic card access, and an NDEF codec.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
/// PN532 handle and its bring-up.
pub mod device;
/// Crate-wide error type.
pub mod error;
pub mod ndef;
/// Common imports.
pub mod prelude;
/// PN532 frames, commands and response decoding.
pub mod protocol;
pub mod test_support;
/// Chip link: bus primitives and the SPI transport.
pub mod transport;
/// Identifier and block newtypes shared across layers.
pub mod types;
/// Hex formatting and timeout helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
