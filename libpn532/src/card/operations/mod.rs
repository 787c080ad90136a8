// libpn532/src/card/operations/mod.rs

//! Single MIFARE Classic operations relayed through InDataExchange.

/// Sector authentication.
pub mod auth;
/// Block read.
pub mod read;

pub use auth::authenticate;
pub use read::read_block;
