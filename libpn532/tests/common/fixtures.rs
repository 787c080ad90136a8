// fixtures.rs: commonly used frames and card images

use libpn532::ndef::{Message, Record};

pub const SAMPLE_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// GetFirmwareVersion request as it appears on the wire.
pub fn firmware_request_frame() -> Vec<u8> {
    hex::decode("0000ff02fed4022a00").unwrap()
}

/// GetFirmwareVersion answer of a PN532 v1.6 (IC 0x32, support 0x07).
pub fn firmware_response_frame() -> Vec<u8> {
    hex::decode("0000ff06fad50332010607e800").unwrap()
}

/// InListPassiveTarget answer for one 1K card with `SAMPLE_UID`.
pub fn list_target_payload() -> Vec<u8> {
    let mut p = vec![0x01, 0x01, 0x00, 0x04, 0x08, 0x04];
    p.extend_from_slice(&SAMPLE_UID);
    p
}

/// Data area holding one URI record for `http://www.a`: NDEF TLV of
/// length 6, record `D1 01 02 'U' 01 'a'`, terminator.
pub fn uri_area() -> Vec<u8> {
    hex::decode("0306d10102550161fe").unwrap()
}

pub fn text_message(text: &str) -> Message {
    Message::new(vec![Record::text("en", text).unwrap()]).unwrap()
}
