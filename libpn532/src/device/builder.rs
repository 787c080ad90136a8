// libpn532/src/device/builder.rs

use std::sync::Arc;

use crate::config::SamConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Arc<dyn Transport>>,
    sam_config: SamConfig,
}

impl DeviceBuilder {
    /// Builder with no transport and default SAM settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `transport` as the chip link.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share a transport that other code already holds.
    pub fn with_shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// SAM settings applied by `initialize`.
    pub fn with_sam_config(mut self, config: SamConfig) -> Self {
        self.sam_config = config;
        self
    }

    /// Build without talking to the chip.
    ///
    /// Fails with `DeviceNotFound` when no transport was given.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        Ok(Device::new(transport).with_sam_config(self.sam_config))
    }

    /// Build and run the chip bring-up sequence.
    pub fn build(self) -> Result<Device<crate::device::Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
