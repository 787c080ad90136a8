// helpers.rs: mock device wiring

use libpn532::test_support::{MockClassicCard, initialized_mock_device, mock_transport};
use libpn532::transport::{MockBus, MockDelay, SpiTransport};
use libpn532::types::ClassicVariant;
use libpn532::{Device, Initialized};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn transport() -> (SpiTransport<MockBus, MockDelay>, MockBus) {
    let bus = MockBus::new();
    (mock_transport(&bus), bus)
}

/// Initialized device over a 1K card holding `area` from block 4 on.
pub fn device_with_area(area: &[u8]) -> anyhow::Result<(Device<Initialized>, MockClassicCard)> {
    let card = MockClassicCard::new(ClassicVariant::Classic1K).with_ndef_area(area);
    let (device, _bus) = initialized_mock_device(&card)?;
    Ok((device, card))
}
