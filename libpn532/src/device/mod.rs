// libpn532/src/device/mod.rs

/// Assembles a `Device` from a transport and settings.
pub mod builder;
/// Type-state device handle.
pub mod handle;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
