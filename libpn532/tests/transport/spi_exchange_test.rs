#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use libpn532::config::TransportConfig;
use libpn532::protocol::{Command, decode_firmware_version};
use libpn532::transport::{MockBus, MockDelay, SpiTransport, Transport};

#[test]
fn firmware_exchange_over_spi() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let (t, bus) = common::helpers::transport();
    bus.push_ack();
    bus.push_raw(common::fixtures::firmware_response_frame());

    let resp = t.execute(&Command::get_firmware_version(), 1000)?;
    assert_eq!(decode_firmware_version(resp.data())?.version, 1);

    // marker stripped, frame recorded as sent
    assert_eq!(bus.written(), vec![common::fixtures::firmware_request_frame()]);
    // every select is paired with a release
    let log = bus.select_log();
    assert!(log.chunks(2).all(|pair| pair == [true, false]));
    Ok(())
}

#[test]
fn custom_poll_interval_changes_budget() -> anyhow::Result<()> {
    let bus = MockBus::new();
    let delay = MockDelay::default();
    let config = TransportConfig::default()
        .with_ack_timeout_ms(20)
        .with_poll_interval_ms(5);
    let t = SpiTransport::with_delay(bus.clone(), delay.clone(), config);

    let err = t.execute(&Command::get_firmware_version(), 1000).unwrap_err();
    assert!(matches!(err, libpn532::Error::AckTimeout { command: 0x02 }));
    assert_eq!(delay.total_ms(), 20);
    assert_eq!(bus.status_polls(), 5);
    Ok(())
}

#[test]
fn shared_transport_serializes_threads() -> anyhow::Result<()> {
    let bus = MockBus::new();
    bus.set_responder(|payload| Some(vec![payload.len() as u8]));
    let t: Arc<dyn Transport> = Arc::new(SpiTransport::with_delay(
        bus.clone(),
        MockDelay::default(),
        TransportConfig::default(),
    ));

    let handles: Vec<_> = (0..4u16)
        .map(|i| {
            let t = Arc::clone(&t);
            thread::spawn(move || -> libpn532::Result<()> {
                for _ in 0..5 {
                    let resp = t.execute(&Command::read_register(0x6300 + i), 1000)?;
                    assert_eq!(resp.data(), &[3]);
                }
                Ok(())
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked")?;
    }
    assert_eq!(bus.written().len(), 20);
    Ok(())
}
