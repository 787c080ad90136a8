// libpn532/src/transport/rpi.rs

//! Raspberry Pi [`Bus`] built on `rppal`: hardware SPI for data and a GPIO
//! pin for chip select (the PN532 needs select held across several
//! transfers, which the kernel-driven SS line does not allow).

use std::io;

use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus as SpiBus, Mode, SlaveSelect, Spi};

use crate::transport::traits::Bus;

/// PN532 tolerates up to 5 MHz; stay well below for long jumper wires.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;

/// SPI0 plus a GPIO chip select.
pub struct RppalBus {
    spi: Spi,
    cs: OutputPin,
}

impl RppalBus {
    /// Open SPI0 with chip select on BCM pin `cs_pin`.
    pub fn open(cs_pin: u8, clock_hz: u32) -> io::Result<Self> {
        let spi = Spi::new(SpiBus::Spi0, SlaveSelect::Ss0, clock_hz, Mode::Mode0)
            .map_err(io::Error::other)?;
        let mut cs = Gpio::new()
            .and_then(|gpio| gpio.get(cs_pin))
            .map_err(io::Error::other)?
            .into_output();
        cs.set_high();
        Ok(Self { spi, cs })
    }
}

impl Bus for RppalBus {
    fn select(&mut self, active: bool) -> io::Result<()> {
        if active {
            self.cs.set_low();
        } else {
            self.cs.set_high();
        }
        Ok(())
    }

    fn exchange(&mut self, out: &[u8]) -> io::Result<Vec<u8>> {
        // The PN532 is LSB-first; the Pi controller only shifts MSB-first.
        let write: Vec<u8> = out.iter().map(|b| b.reverse_bits()).collect();
        let mut read = vec![0u8; write.len()];
        self.spi
            .transfer(&mut read, &write)
            .map_err(io::Error::other)?;
        Ok(read.into_iter().map(|b| b.reverse_bits()).collect())
    }
}
