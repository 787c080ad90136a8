// libpn532/src/config.rs

//! Tunable timings for the SPI handshake and the SAM configuration sent at
//! bring-up.

/// Timing parameters for [`crate::transport::SpiTransport`]. The response
/// timeout is not here: it is passed with each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// How long to wait for the chip to signal the ACK frame is ready.
    pub ack_timeout_ms: u64,
    /// Delay between two status polls.
    pub poll_interval_ms: u64,
    /// How long chip select is held low to wake the chip.
    pub wake_hold_ms: u64,
    /// Settle time after chip select is released on wake.
    pub wake_settle_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            ack_timeout_ms: 10,
            poll_interval_ms: 2,
            wake_hold_ms: 400,
            wake_settle_ms: 10,
        }
    }
}

impl TransportConfig {
    /// Set how long to wait for the ACK frame.
    pub fn with_ack_timeout_ms(mut self, ms: u64) -> Self {
        self.ack_timeout_ms = ms;
        self
    }

    /// Set the status poll interval. Zero is treated as 1 ms.
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms.max(1);
        self
    }

    /// Set the chip-select hold and settle delays of the wake sequence.
    pub fn with_wake_timings_ms(mut self, hold: u64, settle: u64) -> Self {
        self.wake_hold_ms = hold;
        self.wake_settle_ms = settle;
        self
    }
}

/// SAM usage mode (SAMConfiguration command, first argument).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamMode {
    /// SAM not used; the default.
    #[default]
    Normal = 0x01,
    /// PN532 and SAM appear to the reader as one virtual card.
    VirtualCard = 0x02,
    /// Host talks to the SAM through the PN532.
    WiredCard = 0x03,
    /// PN532 and SAM both visible to an external reader.
    DualCard = 0x04,
}

/// SAMConfiguration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamConfig {
    /// Operating mode.
    pub mode: SamMode,
    /// Virtual card timeout in units of 50 ms.
    pub timeout_multiplier: u8,
    /// Drive the P70_IRQ pin.
    pub use_irq: bool,
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            mode: SamMode::Normal,
            // 0x14 * 50ms = 1 second
            timeout_multiplier: 0x14,
            use_irq: true,
        }
    }
}
