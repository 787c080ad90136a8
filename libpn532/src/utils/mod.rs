// libpn532/src/utils/mod.rs

pub mod hex;
/// Poll budgets and default timeouts.
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
