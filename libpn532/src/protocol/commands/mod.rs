// libpn532/src/protocol/commands/mod.rs

/// MIFARE Classic commands carried by InDataExchange.
pub mod mifare;

pub use mifare::{KeyType, MifareCommand};

use crate::config::SamConfig;
use crate::types::BaudRate;

/// PN532 command codes (first byte after the D4 frame identifier).
/// Variants carry the datasheet command names.
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Diagnose = 0x00,
    GetFirmwareVersion = 0x02,
    GetGeneralStatus = 0x04,
    ReadRegister = 0x06,
    WriteRegister = 0x08,
    ReadGpio = 0x0C,
    WriteGpio = 0x0E,
    SetSerialBaudRate = 0x10,
    SetParameters = 0x12,
    SamConfiguration = 0x14,
    PowerDown = 0x16,
    RfConfiguration = 0x32,
    InDataExchange = 0x40,
    InCommunicateThru = 0x42,
    InDeselect = 0x44,
    InJumpForPsl = 0x46,
    InListPassiveTarget = 0x4A,
    InPsl = 0x4E,
    InAtr = 0x50,
    InRelease = 0x52,
    InSelect = 0x54,
    InJumpForDep = 0x56,
    RfRegulationTest = 0x58,
    InAutoPoll = 0x60,
    TgGetData = 0x86,
    TgGetInitiatorCommand = 0x88,
    TgGetTargetStatus = 0x8A,
    TgInitAsTarget = 0x8C,
    TgSetData = 0x8E,
    TgResponseToInitiator = 0x90,
    TgSetGeneralBytes = 0x92,
    TgSetMetaData = 0x94,
}

impl Opcode {
    /// Command code byte.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Code the chip echoes back in its response frame.
    pub fn response_code(self) -> u8 {
        (self as u8).wrapping_add(1)
    }
}

/// Most targets the crate asks the chip to list at once.
pub const MAX_TARGETS: u8 = 1;

/// An outbound PN532 request: header (command code + fixed arguments)
/// followed by a variable body. Built per operation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    header: Vec<u8>,
    body: Vec<u8>,
}

impl Command {
    fn new(opcode: Opcode, args: &[u8], body: Vec<u8>) -> Self {
        let mut header = Vec::with_capacity(1 + args.len());
        header.push(opcode.code());
        header.extend_from_slice(args);
        Self { header, body }
    }

    /// GetFirmwareVersion.
    pub fn get_firmware_version() -> Self {
        Self::new(Opcode::GetFirmwareVersion, &[], Vec::new())
    }

    /// SAMConfiguration with `config`.
    pub fn sam_configuration(config: &SamConfig) -> Self {
        Self::new(
            Opcode::SamConfiguration,
            &[
                config.mode as u8,
                config.timeout_multiplier,
                u8::from(config.use_irq),
            ],
            Vec::new(),
        )
    }

    /// ReadRegister of the 16-bit address `addr`.
    pub fn read_register(addr: u16) -> Self {
        let [hi, lo] = addr.to_be_bytes();
        Self::new(Opcode::ReadRegister, &[hi, lo], Vec::new())
    }

    /// WriteRegister of `value` at `addr`.
    pub fn write_register(addr: u16, value: u8) -> Self {
        let [hi, lo] = addr.to_be_bytes();
        Self::new(Opcode::WriteRegister, &[hi, lo, value], Vec::new())
    }

    /// List at most one passive target at `baud_rate`.
    pub fn in_list_passive_target(baud_rate: BaudRate) -> Self {
        Self::new(
            Opcode::InListPassiveTarget,
            &[MAX_TARGETS, baud_rate as u8],
            Vec::new(),
        )
    }

    /// Wrap raw card-level bytes for relay to the target `target_id`.
    pub fn in_data_exchange(target_id: u8, data: Vec<u8>) -> Self {
        Self::new(Opcode::InDataExchange, &[target_id], data)
    }

    /// Command code and fixed arguments.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Variable part, e.g. the relayed card command.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Command code byte (first header byte).
    pub fn code(&self) -> u8 {
        self.header[0]
    }

    /// Response code the chip must echo for this command.
    pub fn response_code(&self) -> u8 {
        self.code().wrapping_add(1)
    }

    /// Header followed by body, i.e. the frame payload after the TFI.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header.len() + self.body.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&self.body);
        out
    }
}
