// libpn532/src/transport/mod.rs

/// In-memory bus for tests.
pub mod mock;
#[cfg(feature = "rppal")]
pub mod rpi;
/// PN532 SPI framing and handshake.
pub mod spi;
/// Transport, bus and delay traits.
pub mod traits;

pub use mock::{MockBus, MockDelay};
#[cfg(feature = "rppal")]
pub use rpi::RppalBus;
pub use spi::SpiTransport;
pub use traits::{Bus, Delay, StdDelay, Transport};
