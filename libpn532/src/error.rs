// libpn532/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the underlying bus primitive, passed through
    /// unchanged.
    #[error("bus error: {0}")]
    Bus(#[from] std::io::Error),

    /// No ACK frame within the configured ACK timeout.
    #[error("timeout waiting for ack of command {command:#04x}")]
    AckTimeout { command: u8 },

    /// The chip answered the handshake with something other than ACK.
    #[error("invalid ack frame: {actual:02x?}")]
    AckMismatch { actual: Vec<u8> },

    /// The chip accepted the command but never signalled a response within
    /// the caller's timeout. Usually means "no card in the field".
    #[error("timeout waiting for response to command {command:#04x}")]
    Timeout { command: u8 },

    /// A buffer was shorter or longer than its format allows.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// LCS or DCS of a received frame does not add up.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Preamble, direction byte or postamble malformed.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The response echoes a different command code.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// Sector authentication refused by the card.
    #[error("authentication failed for block {block}: status={status:#04x}")]
    AuthenticationFailed { block: u8, status: u8 },

    /// Block read answered with a non-zero card status.
    #[error("read of block {block} failed: status={status:#04x}")]
    ReadFailed { block: u8, status: u8 },

    /// Non-zero InDataExchange status outside auth and read.
    #[error("card error for command {command:#04x}: status={status:#04x}")]
    CardStatus { command: u8, status: u8 },

    /// More than one target answered InListPassiveTarget.
    #[error("{count} cards detected, only one card at a time is supported")]
    MultipleCardsDetected { count: u8 },

    /// Target is not a 4-byte-UID MIFARE Classic card.
    #[error("unsupported card: uid length {uid_len}")]
    UnsupportedCard { uid_len: u8 },

    /// Unknown TLV tag in the card data area.
    #[error("corrupt TLV: unknown tag {tag:#04x} at offset {offset}")]
    CorruptTlv { tag: u8, offset: usize },

    /// Data area ended before the terminator TLV.
    #[error("truncated TLV stream at offset {offset}")]
    TruncatedTlv { offset: usize },

    /// NDEF record runs past the end of its TLV.
    #[error("truncated NDEF message at offset {offset}")]
    TruncatedNdef { offset: usize },

    /// NDEF message or record that cannot be built: no records, or a field
    /// over its length limit.
    #[error("corrupt NDEF message: {0}")]
    CorruptNdef(String),

    /// Device built without a transport.
    #[error("no PN532 transport configured")]
    DeviceNotFound,
}

impl Error {
    /// True for the response timeout, which callers treat as "nothing
    /// answered" rather than as a failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// True for any structural or checksum problem with a received frame.
    pub fn is_frame_error(&self) -> bool {
        matches!(
            self,
            Error::FrameFormat(_)
                | Error::ChecksumMismatch { .. }
                | Error::UnexpectedResponse { .. }
                | Error::InvalidLength { .. }
        )
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
