#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::card::encode_ndef_tlv;
use libpn532::test_support::{MockClassicCard, STATUS_AUTH_ERROR, initialized_mock_device};
use libpn532::types::ClassicVariant;

#[test]
fn unknown_tlv_tag_is_corrupt() -> anyhow::Result<()> {
    let (device, _card) = common::helpers::device_with_area(&[0x00, 0x00, 0x01, 0x02, 0xFE])?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    match tag.read_ndef_messages() {
        Err(Error::CorruptTlv { tag, offset }) => {
            assert_eq!(tag, 0x01);
            assert_eq!(offset, 2);
        }
        other => panic!("expected CorruptTlv, got {:?}", other),
    }
    Ok(())
}

#[test]
fn record_shorter_than_tlv_leaves_stray_tag() -> anyhow::Result<()> {
    // TLV length 5 ends after the URI code; 'a' is then read as a tag.
    let area = hex::decode("0305d10101550161fe")?;
    let (device, _card) = common::helpers::device_with_area(&area)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert!(matches!(
        tag.read_ndef_messages(),
        Err(Error::CorruptTlv { tag: 0x61, offset: 7 })
    ));
    Ok(())
}

#[test]
fn refused_authentication_stops_reading() -> anyhow::Result<()> {
    let image = encode_ndef_tlv(&common::fixtures::text_message(&"y".repeat(120)))?;
    let card = MockClassicCard::new(ClassicVariant::Classic1K)
        .with_ndef_area(&image)
        .refuse_auth_at(8);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");

    match tag.read_ndef_messages() {
        Err(Error::AuthenticationFailed { block, status }) => {
            assert_eq!(block, 8);
            assert_eq!(status, STATUS_AUTH_ERROR);
        }
        other => panic!("expected AuthenticationFailed, got {:?}", other),
    }
    assert_eq!(card.auths(), vec![4, 8]);
    assert_eq!(card.reads(), vec![4, 5, 6]);
    Ok(())
}

#[test]
fn failed_block_read_names_block() -> anyhow::Result<()> {
    let image = encode_ndef_tlv(&common::fixtures::text_message(&"z".repeat(60)))?;
    let card = MockClassicCard::new(ClassicVariant::Classic1K)
        .with_ndef_area(&image)
        .fail_read_at(5, 0x01);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");

    let err = tag.read_ndef_messages().unwrap_err();
    assert!(matches!(err, Error::ReadFailed { block: 5, status: 0x01 }));
    assert!(err.to_string().contains("block 5"));
    assert_eq!(card.reads(), vec![4, 5]);
    Ok(())
}

#[test]
fn wrong_key_is_refused() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K)
        .with_ndef_area(&common::fixtures::uri_area())
        .with_key_b([0xFF; 6]);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert!(matches!(
        tag.read_ndef_messages(),
        Err(Error::AuthenticationFailed { block: 4, .. })
    ));
    assert!(card.reads().is_empty());
    Ok(())
}

#[test]
fn missing_terminator_runs_off_the_card() -> anyhow::Result<()> {
    // all-zero Mini card: NULL TLVs until the last data block
    let card = MockClassicCard::new(ClassicVariant::Mini);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(1000)?.expect("card in field");
    assert!(matches!(
        tag.read_ndef_messages(),
        Err(Error::TruncatedTlv { offset: 192 })
    ));
    assert_eq!(card.reads().last(), Some(&18));
    Ok(())
}
