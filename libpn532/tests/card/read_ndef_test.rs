#[path = "../common/mod.rs"]
mod common;

use libpn532::card::{NdefTag, encode_ndef_tlv};
use libpn532::card::memory::is_sector_trailer;
use libpn532::ndef::{Message, Record, TypeNameFormat};
use libpn532::test_support::{MockClassicCard, initialized_mock_device};
use libpn532::types::ClassicVariant;

#[test]
fn uri_record_end_to_end() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let (device, card) = common::helpers::device_with_area(&common::fixtures::uri_area())?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert_eq!(tag.identifier(), &common::fixtures::SAMPLE_UID);

    let messages = tag.read_ndef_messages()?;
    assert_eq!(messages.len(), 1);
    let records = messages[0].records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type(), b"U");
    assert_eq!(records[0].uri_string().as_deref(), Some("http://www.a"));

    assert_eq!(card.auths(), vec![4]);
    assert_eq!(card.reads(), vec![4]);
    Ok(())
}

#[test]
fn nothing_read_past_terminator_at_sector_end() -> anyhow::Result<()> {
    // NULL TLV padding, terminator near the end of block 6
    let mut area = vec![0x00; 46];
    area.push(0xFE);
    let (device, card) = common::helpers::device_with_area(&area)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert!(tag.read_ndef_messages()?.is_empty());
    assert_eq!(card.auths(), vec![4]);
    assert_eq!(card.reads(), vec![4, 5, 6]);
    Ok(())
}

#[test]
fn sector_trailers_never_read() -> anyhow::Result<()> {
    let text = "x".repeat(200);
    let image = encode_ndef_tlv(&common::fixtures::text_message(&text))?;
    let (device, card) = common::helpers::device_with_area(&image)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");

    let messages = tag.read_ndef_messages()?;
    assert_eq!(messages[0].records()[0].text_string(), Some(text));

    let reads = card.reads();
    for trailer in [3u8, 7, 11, 15, 19] {
        assert!(!reads.contains(&trailer), "read trailer {trailer}");
    }
    assert!(reads.iter().all(|&b| !is_sector_trailer(b as u16)));
    assert_eq!(&card.auths()[..4], &[4, 8, 12, 16]);
    Ok(())
}

#[test]
fn several_tlvs_in_order() -> anyhow::Result<()> {
    let first = Message::new(vec![Record::uri("https://a.example")?])?;
    let second = Message::new(vec![
        Record::text("en", "one")?,
        Record::text("en", "two")?,
    ])?;
    let mut area = Vec::new();
    for m in [&first, &second] {
        let mut tlv = encode_ndef_tlv(m)?;
        tlv.pop();
        area.extend(tlv);
    }
    // proprietary TLV and padding between and after
    area.extend_from_slice(&[0xFD, 0x03, 0x01, 0x02, 0x03, 0x00, 0x00, 0xFE]);

    let (device, _card) = common::helpers::device_with_area(&area)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert_eq!(tag.read_ndef_messages()?, vec![first, second]);
    Ok(())
}

#[test]
fn blank_formatted_card_has_no_messages() -> anyhow::Result<()> {
    let (device, _card) = common::helpers::device_with_area(&[0x03, 0x00, 0xFE])?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert!(tag.read_ndef_messages()?.is_empty());
    Ok(())
}

#[test]
fn classic_4k_crosses_into_large_sectors() -> anyhow::Result<()> {
    let record = Record::new(TypeNameFormat::MimeMedia, "application/octet-stream", vec![0xA5; 1600])?;
    let msg = Message::new(vec![record])?;
    let card = MockClassicCard::new(ClassicVariant::Classic4K).with_ndef_area(&encode_ndef_tlv(&msg)?);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert_eq!(tag.info().variant, ClassicVariant::Classic4K);

    assert_eq!(tag.read_ndef_messages()?, vec![msg]);
    let auths = card.auths();
    assert!(auths.contains(&124));
    assert!(auths.contains(&128));
    assert!(!auths.contains(&132));
    assert!(card.reads().contains(&131));
    Ok(())
}
