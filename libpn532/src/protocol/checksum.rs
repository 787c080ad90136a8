// libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - LEN (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + payload
/// DCS = 0x100 - (sum(data) & 0xff)
pub fn dcs(data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(data))
}

/// Wrapping byte sum, used when validating a received frame.
pub fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
