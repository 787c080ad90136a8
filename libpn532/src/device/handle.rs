// libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, info};

use crate::card::{CardInfo, MifareClassic};
use crate::config::SamConfig;
use crate::protocol::parser::byte_at;
use crate::protocol::{
    Command, FirmwareVersion, Response, decode_firmware_version, decode_list_passive_target,
};
use crate::transport::Transport;
use crate::types::BaudRate;
use crate::utils::DEFAULT_COMMAND_TIMEOUT_MS;
use crate::Result;

/// Type-state marker: chip not yet configured.
pub struct Uninitialized;
/// Type-state marker: firmware read and SAM configured.
pub struct Initialized;

/// PN532 handle. Card sessions handed out by [`Device::tag_if_present`]
/// share its transport.
pub struct Device<State = Uninitialized> {
    transport: Arc<dyn Transport>,
    sam_config: SamConfig,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Transport shared with card sessions.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// SAM settings in effect.
    pub fn sam_config(&self) -> &SamConfig {
        &self.sam_config
    }

    fn execute(&self, cmd: &Command) -> Result<Response> {
        self.transport.execute(cmd, DEFAULT_COMMAND_TIMEOUT_MS)
    }
}

impl Device<Uninitialized> {
    /// Handle over `transport`, not yet talking to the chip.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            sam_config: SamConfig::default(),
            firmware: None,
            _state: PhantomData,
        }
    }

    /// Override the SAM settings applied by `initialize`.
    pub fn with_sam_config(mut self, config: SamConfig) -> Self {
        self.sam_config = config;
        self
    }

    /// Wake the chip, check it answers GetFirmwareVersion and put the SAM
    /// into the configured mode.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        self.transport.wake()?;
        let resp = self.execute(&Command::get_firmware_version())?;
        let firmware = decode_firmware_version(resp.data())?;
        info!("found {}", firmware);

        self.execute(&Command::sam_configuration(&self.sam_config))?;
        debug!("SAM configured: {:?}", self.sam_config);

        Ok(Device {
            transport: self.transport,
            sam_config: self.sam_config,
            firmware: Some(firmware),
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Firmware reported during initialization.
    pub fn firmware(&self) -> Option<&FirmwareVersion> {
        self.firmware.as_ref()
    }

    /// Query GetFirmwareVersion again.
    pub fn firmware_version(&self) -> Result<FirmwareVersion> {
        let resp = self.execute(&Command::get_firmware_version())?;
        decode_firmware_version(resp.data())
    }

    /// Apply new SAM settings.
    pub fn sam_configuration(&mut self, config: SamConfig) -> Result<()> {
        self.execute(&Command::sam_configuration(&config))?;
        self.sam_config = config;
        Ok(())
    }

    /// Read one byte of the chip's SFR/XRAM space.
    pub fn read_register(&self, addr: u16) -> Result<u8> {
        let resp = self.execute(&Command::read_register(addr))?;
        byte_at(resp.data(), 0)
    }

    /// Write one byte of the chip's SFR/XRAM space.
    pub fn write_register(&self, addr: u16, value: u8) -> Result<()> {
        self.execute(&Command::write_register(addr, value))?;
        Ok(())
    }

    /// Poll for a single ISO 14443A card for up to `timeout_ms` (0 waits
    /// without bound). Nothing in the field is `Ok(None)`.
    pub fn tag_if_present(&self, timeout_ms: u64) -> Result<Option<MifareClassic>> {
        let cmd = Command::in_list_passive_target(BaudRate::Iso14443A);
        let resp = match self.transport.execute(&cmd, timeout_ms) {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Ok(None),
            Err(e) => return Err(e),
        };
        let Some(target) = decode_list_passive_target(resp.data())? else {
            return Ok(None);
        };
        let card = CardInfo::try_from(&target)?;
        info!(
            "{} detected: uid={} sak={:#04x}",
            card.variant,
            card.uid.to_hex(),
            card.sel_res
        );
        Ok(Some(MifareClassic::new(Arc::clone(&self.transport), card)))
    }
}
