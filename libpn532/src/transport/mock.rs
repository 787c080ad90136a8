// libpn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::{
    PN532_ACK_FRAME, SPI_DATA_READ, SPI_DATA_WRITE, SPI_STATUS_READ, SPI_STATUS_READY,
};
use crate::protocol::Frame;
use crate::transport::traits::{Bus, Delay};

type Responder = Box<dyn FnMut(&[u8]) -> Option<Vec<u8>> + Send>;

#[derive(Default)]
struct MockState {
    selected: bool,
    /// true until the first exchange after chip select was asserted
    fresh: bool,
    select_log: Vec<bool>,
    written: Vec<Vec<u8>>,
    pending: VecDeque<Vec<u8>>,
    reading: VecDeque<u8>,
    busy_polls: usize,
    status_polls: usize,
    fail_next: Option<io::ErrorKind>,
    responder: Option<Responder>,
}

/// Simulated PN532 SPI endpoint for unit tests. It records written frames
/// and serves queued read buffers (ACK frames, response frames) one per
/// `DATA_READ` transaction. Reports ready on status polls whenever a
/// buffer is queued.
///
/// Clones share state, so a test can keep a handle after moving the bus
/// into a transport.
#[derive(Clone, Default)]
pub struct MockBus {
    state: Arc<Mutex<MockState>>,
}

impl MockBus {
    /// Bus with nothing queued and no responder.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Queue a raw read buffer.
    pub fn push_raw(&self, bytes: Vec<u8>) {
        self.state().pending.push_back(bytes);
    }

    /// Queue an ACK frame for the next read.
    pub fn push_ack(&self) {
        self.push_raw(PN532_ACK_FRAME.to_vec());
    }

    /// Queue a well-formed response frame to `command_code`.
    pub fn push_response(&self, command_code: u8, data: &[u8]) {
        if let Ok(frame) = Frame::encode_response(command_code, data) {
            self.push_raw(frame);
        }
    }

    /// Answer every written command through `f`, which receives the frame
    /// payload (command code + arguments) and returns the response data,
    /// or `None` to acknowledge without ever answering.
    pub fn set_responder(&self, f: impl FnMut(&[u8]) -> Option<Vec<u8>> + Send + 'static) {
        self.state().responder = Some(Box::new(f));
    }

    /// Report not-ready for the next `n` status polls.
    pub fn set_busy_polls(&self, n: usize) {
        self.state().busy_polls = n;
    }

    /// Make the next transfer fail with `kind`.
    pub fn fail_next_exchange(&self, kind: io::ErrorKind) {
        self.state().fail_next = Some(kind);
    }

    /// Frames written so far, SPI marker stripped.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state().written.clone()
    }

    /// Chip-select transitions, in order.
    pub fn select_log(&self) -> Vec<bool> {
        self.state().select_log.clone()
    }

    /// Number of status reads seen so far.
    pub fn status_polls(&self) -> usize {
        self.state().status_polls
    }
}

impl MockState {
    fn take_reading(&mut self, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| self.reading.pop_front().unwrap_or(0x00))
            .collect()
    }

    fn on_write(&mut self, frame: &[u8]) {
        self.written.push(frame.to_vec());
        let Some(responder) = self.responder.as_mut() else {
            return;
        };
        // preamble(3) LEN LCS TFI payload... DCS postamble
        let len = frame.get(3).copied().unwrap_or(0) as usize;
        let payload = frame.get(6..5 + len).unwrap_or(&[]);
        let code = payload.first().copied().unwrap_or(0);
        let reply = responder(payload);
        self.pending.push_back(PN532_ACK_FRAME.to_vec());
        if let Some(data) = reply {
            if let Ok(resp) = Frame::encode_response(code, &data) {
                self.pending.push_back(resp);
            }
        }
    }
}

impl Bus for MockBus {
    fn select(&mut self, active: bool) -> io::Result<()> {
        let mut s = self.state();
        s.select_log.push(active);
        s.selected = active;
        s.fresh = active;
        if !active {
            s.reading.clear();
        }
        Ok(())
    }

    fn exchange(&mut self, out: &[u8]) -> io::Result<Vec<u8>> {
        let mut s = self.state();
        if let Some(kind) = s.fail_next.take() {
            return Err(io::Error::new(kind, "simulated bus failure"));
        }
        if !s.selected {
            return Err(io::Error::other("exchange without chip select"));
        }

        if !s.fresh {
            return Ok(s.take_reading(out.len()));
        }
        s.fresh = false;

        let mut back = vec![0u8; out.len()];
        match out.first().copied() {
            Some(SPI_STATUS_READ) => {
                s.status_polls += 1;
                let ready = if s.busy_polls > 0 {
                    s.busy_polls -= 1;
                    false
                } else {
                    !s.pending.is_empty()
                };
                if let Some(b) = back.get_mut(1) {
                    *b = if ready { SPI_STATUS_READY } else { 0x00 };
                }
            }
            Some(SPI_DATA_WRITE) => s.on_write(&out[1..]),
            Some(SPI_DATA_READ) => {
                let buf = s.pending.pop_front().unwrap_or_default();
                s.reading = buf.into();
                let tail = s.take_reading(out.len() - 1);
                back[1..].copy_from_slice(&tail);
            }
            _ => {}
        }
        Ok(back)
    }
}

/// `Delay` that only records how long it was asked to sleep.
#[derive(Clone, Default)]
pub struct MockDelay {
    total: Arc<AtomicU64>,
}

impl MockDelay {
    /// Sum of all requested delays.
    pub fn total_ms(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u64) {
        self.total.fetch_add(ms, Ordering::SeqCst);
    }
}
