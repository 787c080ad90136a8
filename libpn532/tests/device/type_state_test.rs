#[path = "../common/mod.rs"]
mod common;

use libpn532::config::{SamConfig, SamMode};
use libpn532::prelude::*;
use libpn532::test_support::{MockClassicCard, initialized_mock_device, mock_transport};
use libpn532::transport::MockBus;

#[test]
fn initialize_wakes_and_configures() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let card = MockClassicCard::new(ClassicVariant::Classic1K);
    let (device, bus) = initialized_mock_device(&card)?;

    assert_eq!(device.firmware().map(|f| f.to_string()), Some("PN532 v1.6".into()));
    assert_eq!(card.commands(), vec![0x02, 0x14]);
    // wake toggles chip select before the first frame
    assert_eq!(&bus.select_log()[..3], &[false, true, false]);
    Ok(())
}

#[test]
fn custom_sam_mode_is_sent() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K);
    let bus = MockBus::new();
    card.install(&bus);
    let _device = DeviceBuilder::new()
        .with_transport(mock_transport(&bus))
        .with_sam_config(SamConfig {
            mode: SamMode::WiredCard,
            ..SamConfig::default()
        })
        .build()?;
    let sam_frame = &bus.written()[1];
    assert_eq!(&sam_frame[5..9], &[0xD4, 0x14, 0x03, 0x14]);
    Ok(())
}

#[test]
fn registers_round_trip() -> anyhow::Result<()> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K).with_register(0x6306, 0x5A);
    let (device, _bus) = initialized_mock_device(&card)?;
    assert_eq!(device.read_register(0x6306)?, 0x5A);
    device.write_register(0x6306, 0x00)?;
    assert_eq!(card.register(0x6306), Some(0x00));
    assert_eq!(device.firmware_version()?.ic, 0x32);
    Ok(())
}

#[test]
fn silent_chip_fails_bring_up() {
    let bus = MockBus::new();
    let result = DeviceBuilder::new().with_transport(mock_transport(&bus)).build();
    assert!(matches!(result, Err(Error::AckTimeout { command: 0x02 })));
}
