#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::test_support::{MockClassicCard, initialized_mock_device};
use libpn532::types::ClassicVariant;

#[test]
fn no_card_is_none() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K).absent();
    let (device, _bus) = initialized_mock_device(&card)?;
    assert!(device.tag_if_present(50)?.is_none());
    Ok(())
}

#[test]
fn empty_target_list_is_none() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K).with_cards_in_field(0);
    let (device, _bus) = initialized_mock_device(&card)?;
    assert!(device.tag_if_present(50)?.is_none());
    Ok(())
}

#[test]
fn two_cards_rejected() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K).with_cards_in_field(2);
    let (device, _bus) = initialized_mock_device(&card)?;
    assert!(matches!(
        device.tag_if_present(50),
        Err(Error::MultipleCardsDetected { count: 2 })
    ));
    Ok(())
}

#[test]
fn seven_byte_uid_unsupported() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K)
        .with_uid(&[0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    let (device, _bus) = initialized_mock_device(&card)?;
    assert!(matches!(
        device.tag_if_present(50),
        Err(Error::UnsupportedCard { uid_len: 7 })
    ));
    Ok(())
}

#[test]
fn detected_card_info() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Mini);
    let (device, _bus) = initialized_mock_device(&card)?;
    let tag = device.tag_if_present(50)?.expect("card in field");
    let info = tag.info();
    assert_eq!(info.target_id, 1);
    assert_eq!(info.sel_res, 0x09);
    assert_eq!(info.variant, ClassicVariant::Mini);
    assert_eq!(info.uid.as_bytes(), &common::fixtures::SAMPLE_UID);
    Ok(())
}
