// libpn532/src/transport/spi.rs

//! PN532 host interface over SPI.
//!
//! The chip raises no completion interrupt in this mode, so every phase of
//! an exchange is a bounded busy-poll of the status byte:
//!
//! 1. write the command frame (`DATA_WRITE`)
//! 2. poll until ready, bounded by the ACK timeout, and read the ACK frame
//! 3. poll until ready, bounded by the caller's timeout, and read the
//!    response frame header followed by the length-bound remainder

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace, warn};

use crate::config::TransportConfig;
use crate::constants::{
    PN532_ACK_FRAME, PN532_RESPONSE_HEADER_LEN, SPI_DATA_READ, SPI_DATA_WRITE, SPI_STATUS_READ,
    SPI_STATUS_READY,
};
use crate::protocol::parser::{byte_at, slice_at};
use crate::protocol::{Command, Frame, Response};
use crate::transport::traits::{Bus, Delay, StdDelay, Transport};
use crate::utils::{bytes_to_hex_spaced, poll_budget};
use crate::{Error, Result};

/// Bus and delay, only ever touched while the transport lock is held.
struct Link<B, D> {
    bus: B,
    delay: D,
}

/// [`Transport`] implementation for a PN532 wired over SPI.
pub struct SpiTransport<B: Bus, D: Delay = StdDelay> {
    link: Mutex<Link<B, D>>,
    config: TransportConfig,
}

impl<B: Bus> SpiTransport<B, StdDelay> {
    /// Transport with default timings sleeping on the calling thread.
    pub fn new(bus: B) -> Self {
        Self::with_delay(bus, StdDelay, TransportConfig::default())
    }
}

impl<B: Bus, D: Delay> SpiTransport<B, D> {
    /// Transport with explicit timings and delay source.
    pub fn with_delay(bus: B, delay: D, config: TransportConfig) -> Self {
        Self {
            link: Mutex::new(Link { bus, delay }),
            config,
        }
    }

    /// Timings in use.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Give back the bus and delay primitives.
    pub fn into_parts(self) -> (B, D) {
        let link = self
            .link
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (link.bus, link.delay)
    }

    fn lock(&self) -> MutexGuard<'_, Link<B, D>> {
        // A panic inside a previous exchange leaves no state worth guarding.
        self.link.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B: Bus, D: Delay> Link<B, D> {
    /// Run `f` with chip select asserted, releasing it even when `f` fails.
    fn selected<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.bus.select(true)?;
        let result = f(self);
        let released = self.bus.select(false);
        let value = result?;
        released?;
        Ok(value)
    }

    fn is_ready(&mut self) -> Result<bool> {
        let resp = self.selected(|link| Ok(link.bus.exchange(&[SPI_STATUS_READ, 0x00])?))?;
        let status = byte_at(&resp, 1)?;
        trace!("status {:#04x}", status);
        Ok(status & SPI_STATUS_READY != 0)
    }

    /// Poll the status byte every `interval_ms` until ready. Returns
    /// `false` once `timeout_ms` worth of intervals has elapsed; a zero
    /// timeout polls without bound.
    fn wait_ready(&mut self, timeout_ms: u64, interval_ms: u64) -> Result<bool> {
        let budget = poll_budget(timeout_ms, interval_ms);
        let mut waits = 0u64;
        loop {
            if self.is_ready()? {
                return Ok(true);
            }
            if budget.is_some_and(|b| waits >= b) {
                return Ok(false);
            }
            self.delay.delay_ms(interval_ms);
            waits += 1;
        }
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        let mut out = Vec::with_capacity(1 + frame.len());
        out.push(SPI_DATA_WRITE);
        out.extend_from_slice(frame);
        debug!("-> {}", bytes_to_hex_spaced(frame));
        self.selected(|link| {
            link.bus.exchange(&out)?;
            Ok(())
        })
    }

    fn read_ack(&mut self) -> Result<()> {
        let mut out = [0u8; 1 + PN532_ACK_FRAME.len()];
        out[0] = SPI_DATA_READ;
        let resp = self.selected(|link| Ok(link.bus.exchange(&out)?))?;
        let ack = slice_at(&resp, 1, PN532_ACK_FRAME.len())?;
        if !Frame::is_ack(ack) {
            return Err(Error::AckMismatch {
                actual: ack.to_vec(),
            });
        }
        Ok(())
    }

    fn read_response(&mut self, command_code: u8) -> Result<Vec<u8>> {
        self.selected(|link| {
            let mut out = [0u8; 1 + PN532_RESPONSE_HEADER_LEN];
            out[0] = SPI_DATA_READ;
            let resp = link.bus.exchange(&out)?;
            let head = slice_at(&resp, 1, PN532_RESPONSE_HEADER_LEN)?;
            let header = Frame::parse_header(head, command_code)?;

            let rest = link.bus.exchange(&vec![0u8; header.remaining()])?;
            debug!(
                "<- {} {}",
                bytes_to_hex_spaced(head),
                bytes_to_hex_spaced(&rest)
            );
            Frame::parse_body(&header, &rest)
        })
    }
}

impl<B: Bus, D: Delay> Transport for SpiTransport<B, D> {
    fn wake(&self) -> Result<()> {
        let mut link = self.lock();
        link.bus.select(false)?;
        link.bus.select(true)?;
        link.delay.delay_ms(self.config.wake_hold_ms);
        link.bus.select(false)?;
        link.delay.delay_ms(self.config.wake_settle_ms);
        Ok(())
    }

    fn execute(&self, cmd: &Command, timeout_ms: u64) -> Result<Response> {
        let frame = Frame::encode_command(cmd)?;
        let command = cmd.code();
        let interval = self.config.poll_interval_ms;

        let mut link = self.lock();
        link.write_frame(&frame)?;

        if !link.wait_ready(self.config.ack_timeout_ms, interval)? {
            return Err(Error::AckTimeout { command });
        }
        link.read_ack()?;

        if !link.wait_ready(timeout_ms, interval)? {
            return Err(Error::Timeout { command });
        }

        match link.read_response(command) {
            Ok(data) => Ok(Response::new(data)),
            Err(e) => {
                if e.is_frame_error() {
                    warn!("rejected response to {:#04x}: {}", command, e);
                }
                Err(e)
            }
        }
    }
}
