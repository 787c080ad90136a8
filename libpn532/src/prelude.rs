// libpn532/src/prelude.rs

pub use crate::card::{CardInfo, MifareClassic, NdefTag};
pub use crate::config::{SamConfig, SamMode, TransportConfig};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::ndef::{Message, Record, TypeNameFormat, UriPrefix, WellKnownType};
pub use crate::protocol::{Command, FirmwareVersion, Response};
pub use crate::transport::{Bus, Delay, SpiTransport, StdDelay, Transport};
pub use crate::{BaudRate, BlockData, ClassicVariant, Error, Result, Uid};

pub use crate::utils::{DEFAULT_COMMAND_TIMEOUT_MS, bytes_to_hex, bytes_to_hex_spaced, ms};
