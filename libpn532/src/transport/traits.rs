// libpn532/src/transport/traits.rs

use std::io;

use crate::Result;
use crate::protocol::{Command, Response};
use crate::utils::ms;

/// Raw bus primitive the chip hangs off. Supplied per platform.
pub trait Bus: Send {
    /// Drive the chip-select line (`true` = asserted/low).
    fn select(&mut self, active: bool) -> io::Result<()>;

    /// Full-duplex transfer: shift `out` to the chip and return the same
    /// number of bytes shifted back.
    fn exchange(&mut self, out: &[u8]) -> io::Result<Vec<u8>>;
}

/// Blocking delay primitive used by the polling loops.
pub trait Delay: Send {
    /// Block the calling thread for `millis` milliseconds.
    fn delay_ms(&mut self, millis: u64);
}

/// `Delay` backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay_ms(&mut self, millis: u64) {
        std::thread::sleep(ms(millis));
    }
}

/// Transport trait abstracts the chip link away from device and card logic.
///
/// Implementations serialize callers internally: one full command/response
/// exchange is in flight at a time.
pub trait Transport: Send + Sync {
    /// Bring the chip out of low-power state. Idempotent.
    fn wake(&self) -> Result<()>;

    /// Send a command and wait up to `timeout_ms` for its response
    /// (0 waits without bound).
    fn execute(&self, cmd: &Command, timeout_ms: u64) -> Result<Response>;
}
