// libpn532/src/utils/hex.rs

//! Hex formatting for frame dumps and card identifiers.

use std::fmt::Write;

/// Lowercase hex, no separators: `&[0xd3, 0xf7]` -> `"d3f7"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

/// Lowercase hex, one space between bytes: `&[0xd3, 0xf7]` -> `"d3 f7"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{b:02x}");
    }
    s
}
