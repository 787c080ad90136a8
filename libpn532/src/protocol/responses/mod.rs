// libpn532/src/protocol/responses/mod.rs

/// InDataExchange status handling.
pub mod exchange;
/// GetFirmwareVersion.
pub mod firmware;
/// InListPassiveTarget.
pub mod target;

pub use exchange::decode_data_exchange;
pub use firmware::{FirmwareVersion, decode_firmware_version};
pub use target::{TargetInfo, decode_list_passive_target};

/// Payload of a validated response frame: everything after the echoed
/// command code, with DCS and postamble stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Payload bytes.
    pub data: Vec<u8>,
}

impl Response {
    /// Wrap a payload.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the payload bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
