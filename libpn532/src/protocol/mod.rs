// libpn532/src/protocol/mod.rs

/// LCS and DCS.
pub mod checksum;
/// Host-to-chip commands.
pub mod commands;
/// Information frame encoding and response validation.
pub mod frame;
/// Bounds-checked byte readers.
pub mod parser;
/// Typed decoding of response payloads.
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::{Command, Opcode};
pub use frame::{Frame, ResponseHeader};
pub use responses::*;
