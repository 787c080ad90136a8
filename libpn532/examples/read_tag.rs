#![cfg(feature = "rppal")]

//! Wait for a MIFARE Classic card and print its NDEF records.
//!
//! Usage:
//!   cargo run -p libpn532 --example read_tag --features rppal --release -- [CS_PIN]

use std::thread;
use std::time::Duration;

use libpn532::card::NdefTag;
use libpn532::prelude::*;
use libpn532::transport::RppalBus;
use libpn532::transport::rpi::DEFAULT_CLOCK_HZ;

const DEFAULT_CS_PIN: u8 = 8;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cs_pin = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u8>())
        .transpose()?
        .unwrap_or(DEFAULT_CS_PIN);

    let bus = RppalBus::open(cs_pin, DEFAULT_CLOCK_HZ)?;
    let device = DeviceBuilder::new()
        .with_transport(SpiTransport::new(bus))
        .build()?;
    if let Some(fw) = device.firmware() {
        println!("{} ready, waiting for a card", fw);
    }

    loop {
        let Some(tag) = device.tag_if_present(1000)? else {
            continue;
        };
        println!(
            "{} uid={}",
            tag.info().variant,
            bytes_to_hex_spaced(tag.identifier())
        );
        match tag.read_ndef_messages() {
            Ok(messages) if messages.is_empty() => println!("  (no NDEF message)"),
            Ok(messages) => {
                for (i, msg) in messages.iter().enumerate() {
                    for record in msg.records() {
                        println!("  [{}] {}", i, record);
                    }
                }
            }
            Err(e) => println!("  read failed: {}", e),
        }
        thread::sleep(Duration::from_secs(1));
    }
}
