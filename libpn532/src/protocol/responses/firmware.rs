use crate::protocol::parser::slice_at;
use crate::Result;

/// Decoded GetFirmwareVersion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// IC type, 0x32 for the PN532.
    pub ic: u8,
    /// Firmware version.
    pub version: u8,
    /// Firmware revision.
    pub revision: u8,
    /// ISO/IEC 18092 (NFCIP-1) supported.
    pub iso18092: bool,
    /// ISO/IEC 14443 type B supported.
    pub iso14443_b: bool,
    /// ISO/IEC 14443 type A supported.
    pub iso14443_a: bool,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PN5{:X} v{}.{}", self.ic, self.version, self.revision)
    }
}

/// Payload: IC, Ver, Rev, Support
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let s = slice_at(data, 0, 4)?;
    Ok(FirmwareVersion {
        ic: s[0],
        version: s[1],
        revision: s[2],
        iso18092: s[3] & 0x04 != 0,
        iso14443_b: s[3] & 0x02 != 0,
        iso14443_a: s[3] & 0x01 != 0,
    })
}
