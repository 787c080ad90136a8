#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::ndef::{Message, Record, SHORT_RECORD_LIMIT, TypeNameFormat, WellKnownType};

#[test]
fn mixed_message_round_trip() -> anyhow::Result<()> {
    let records = vec![
        Record::uri("https://www.example.com/tag")?,
        Record::text("ja", "こんにちは")?,
        Record::new(TypeNameFormat::MimeMedia, "application/json", br#"{"a":1}"#.to_vec())?
            .with_id("cfg")?,
        Record::new(TypeNameFormat::External, "example.com:t", vec![0u8; 400])?,
    ];
    let msg = Message::new(records)?;
    let bytes = msg.encode();
    let back = Message::decode(&bytes)?;
    assert_eq!(back, msg);

    assert_eq!(back.records()[0].uri_string().as_deref(), Some("https://www.example.com/tag"));
    assert_eq!(back.records()[1].text_string().as_deref(), Some("こんにちは"));
    assert_eq!(back.records()[1].well_known_type(), Some(WellKnownType::Text));
    assert_eq!(back.records()[2].id(), b"cfg");
    assert!(!back.records()[3].is_short());
    Ok(())
}

#[test]
fn boundary_lengths() -> anyhow::Result<()> {
    for len in [SHORT_RECORD_LIMIT - 1, SHORT_RECORD_LIMIT, SHORT_RECORD_LIMIT + 1] {
        let msg = Message::new(vec![Record::new(TypeNameFormat::Unknown, vec![], vec![1u8; len])?])?;
        let bytes = msg.encode();
        // header, type length, then 1 or 4 length bytes
        let header_len = if len < SHORT_RECORD_LIMIT { 3 } else { 6 };
        assert_eq!(bytes.len(), header_len + len);
        assert_eq!(Message::decode(&bytes)?.records()[0].payload().len(), len);
    }
    Ok(())
}

#[test]
fn long_length_is_big_endian() -> anyhow::Result<()> {
    let msg = Message::new(vec![Record::new(TypeNameFormat::Unknown, vec![], vec![0u8; 256])?])?;
    let bytes = msg.encode();
    assert_eq!(bytes[0], 0xC5);
    assert_eq!(&bytes[2..6], &[0x00, 0x00, 0x01, 0x00]);
    Ok(())
}

#[test]
fn truncated_payload_reports_offset() {
    // claims 16 payload bytes, carries 2
    let mut bytes = hex::decode("d1011055").unwrap();
    bytes.extend_from_slice(&[0x01, 0x61]);
    assert!(matches!(
        Message::decode(&bytes),
        Err(Error::TruncatedNdef { offset: 4 })
    ));
}

#[test]
fn display_lists_records() {
    let msg = common::fixtures::text_message("hi");
    assert_eq!(msg.to_string(), "Text: hi");
}
