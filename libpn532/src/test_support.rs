// libpn532/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! [`MockClassicCard`] answers PN532 commands on a [`MockBus`] the way the
//! chip would with one MIFARE Classic card in the field.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::card::memory::{data_blocks, sector_of};
use crate::config::TransportConfig;
use crate::constants::{MIFARE_BLOCK_SIZE, MIFARE_FIRST_NDEF_BLOCK, MIFARE_NFC_KEY};
use crate::device::{Device, DeviceBuilder, Initialized};
use crate::protocol::Opcode;
use crate::protocol::commands::MifareCommand;
use crate::transport::SpiTransport;
pub use crate::transport::{MockBus, MockDelay};
use crate::types::ClassicVariant;
use crate::Result;

/// Status byte the chip reports for a refused MIFARE authentication.
pub const STATUS_AUTH_ERROR: u8 = 0x14;

/// GetFirmwareVersion answer of a PN532 v1.6.
pub const FIRMWARE_RESPONSE: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

struct CardState {
    present: bool,
    cards_in_field: u8,
    target_id: u8,
    sens_res: u16,
    sel_res: u8,
    uid: Vec<u8>,
    key_b: [u8; 6],
    refuse_auth: Vec<u8>,
    failing_reads: HashMap<u8, u8>,
    memory: Vec<[u8; MIFARE_BLOCK_SIZE]>,
    authenticated_sector: Option<u16>,
    registers: HashMap<u16, u8>,
    auths: Vec<u8>,
    reads: Vec<u8>,
    commands: Vec<u8>,
}

/// Emulated MIFARE Classic card plus the PN532 answering for it.
///
/// Clones share state, so the test keeps a handle for inspecting which
/// blocks were authenticated and read after installing it on a bus.
#[derive(Clone)]
pub struct MockClassicCard {
    state: Arc<Mutex<CardState>>,
}

impl MockClassicCard {
    /// Blank card of `variant` with UID `DE AD BE EF` and the NFC Forum key B.
    pub fn new(variant: ClassicVariant) -> Self {
        let sel_res = match variant {
            ClassicVariant::Mini => 0x09,
            ClassicVariant::Classic1K => 0x08,
            ClassicVariant::Classic4K => 0x18,
        };
        let state = CardState {
            present: true,
            cards_in_field: 1,
            target_id: 1,
            sens_res: 0x0004,
            sel_res,
            uid: vec![0xDE, 0xAD, 0xBE, 0xEF],
            key_b: MIFARE_NFC_KEY,
            refuse_auth: Vec::new(),
            failing_reads: HashMap::new(),
            memory: vec![[0u8; MIFARE_BLOCK_SIZE]; variant.block_count() as usize],
            authenticated_sector: None,
            registers: HashMap::new(),
            auths: Vec::new(),
            reads: Vec::new(),
            commands: Vec::new(),
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn state(&self) -> MutexGuard<'_, CardState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Replace the UID reported to InListPassiveTarget.
    pub fn with_uid(self, uid: &[u8]) -> Self {
        self.state().uid = uid.to_vec();
        self
    }

    /// Key B the card accepts.
    pub fn with_key_b(self, key: [u8; 6]) -> Self {
        self.state().key_b = key;
        self
    }

    /// Lay `bytes` out over the data blocks from block 4 on, skipping
    /// sector trailers.
    pub fn with_ndef_area(self, bytes: &[u8]) -> Self {
        {
            let mut s = self.state();
            let end = s.memory.len() as u16;
            for (block, chunk) in
                data_blocks(MIFARE_FIRST_NDEF_BLOCK as u16, end).zip(bytes.chunks(MIFARE_BLOCK_SIZE))
            {
                let dst = &mut s.memory[block as usize];
                dst[..chunk.len()].copy_from_slice(chunk);
            }
        }
        self
    }

    /// Make authentication of `block` fail with status 0x14.
    pub fn refuse_auth_at(self, block: u8) -> Self {
        self.state().refuse_auth.push(block);
        self
    }

    /// Answer reads of `block` with card status `status`.
    pub fn fail_read_at(self, block: u8, status: u8) -> Self {
        self.state().failing_reads.insert(block, status);
        self
    }

    /// No card in the field: InListPassiveTarget is acknowledged but never
    /// answered.
    pub fn absent(self) -> Self {
        self.state().present = false;
        self
    }

    /// Report `n` targets to InListPassiveTarget.
    pub fn with_cards_in_field(self, n: u8) -> Self {
        self.state().cards_in_field = n;
        self
    }

    /// Preset a chip register.
    pub fn with_register(self, addr: u16, value: u8) -> Self {
        self.state().registers.insert(addr, value);
        self
    }

    /// Current value of a chip register.
    pub fn register(&self, addr: u16) -> Option<u8> {
        self.state().registers.get(&addr).copied()
    }

    /// Blocks passed to successful or refused authentication, in order.
    pub fn auths(&self) -> Vec<u8> {
        self.state().auths.clone()
    }

    /// Blocks read, in order.
    pub fn reads(&self) -> Vec<u8> {
        self.state().reads.clone()
    }

    /// Command codes received, in order.
    pub fn commands(&self) -> Vec<u8> {
        self.state().commands.clone()
    }

    /// Answer commands written to `bus` from now on.
    pub fn install(&self, bus: &MockBus) {
        let card = self.clone();
        bus.set_responder(move |payload| card.respond(payload));
    }

    fn respond(&self, payload: &[u8]) -> Option<Vec<u8>> {
        let mut s = self.state();
        let (&code, args) = payload.split_first()?;
        s.commands.push(code);
        match code {
            c if c == Opcode::GetFirmwareVersion.code() => Some(FIRMWARE_RESPONSE.to_vec()),
            c if c == Opcode::SamConfiguration.code() => Some(Vec::new()),
            c if c == Opcode::ReadRegister.code() => {
                let addr = u16::from_be_bytes([*args.first()?, *args.get(1)?]);
                Some(vec![s.registers.get(&addr).copied().unwrap_or(0)])
            }
            c if c == Opcode::WriteRegister.code() => {
                let addr = u16::from_be_bytes([*args.first()?, *args.get(1)?]);
                let value = *args.get(2)?;
                s.registers.insert(addr, value);
                Some(Vec::new())
            }
            c if c == Opcode::InListPassiveTarget.code() => s.list_targets(),
            c if c == Opcode::InDataExchange.code() => Some(s.data_exchange(args)),
            _ => Some(Vec::new()),
        }
    }
}

impl CardState {
    fn list_targets(&mut self) -> Option<Vec<u8>> {
        if !self.present {
            return None;
        }
        if self.cards_in_field != 1 {
            return Some(vec![self.cards_in_field]);
        }
        self.authenticated_sector = None;
        let [hi, lo] = self.sens_res.to_be_bytes();
        let mut out = vec![1, self.target_id, hi, lo, self.sel_res, self.uid.len() as u8];
        out.extend_from_slice(&self.uid);
        Some(out)
    }

    /// `args` is Tg followed by the MIFARE command.
    fn data_exchange(&mut self, args: &[u8]) -> Vec<u8> {
        let Some(cmd) = args.get(1).copied() else {
            return vec![0x27];
        };
        if cmd == MifareCommand::AuthA as u8 || cmd == MifareCommand::AuthB as u8 {
            return self.authenticate(cmd, args);
        }
        if cmd == MifareCommand::Read as u8 {
            return self.read(args);
        }
        vec![0x27]
    }

    // Tg, AuthX, key(6), block, uid(4)
    fn authenticate(&mut self, cmd: u8, args: &[u8]) -> Vec<u8> {
        let (Some(key), Some(&block), Some(uid)) = (args.get(2..8), args.get(8), args.get(9..13))
        else {
            return vec![0x27];
        };
        self.auths.push(block);
        let ok = cmd == MifareCommand::AuthB as u8
            && *key == self.key_b
            && uid == self.uid.as_slice()
            && !self.refuse_auth.contains(&block)
            && (block as usize) < self.memory.len();
        if !ok {
            self.authenticated_sector = None;
            return vec![STATUS_AUTH_ERROR];
        }
        self.authenticated_sector = Some(sector_of(block as u16));
        vec![0x00]
    }

    // Tg, Read, block
    fn read(&mut self, args: &[u8]) -> Vec<u8> {
        let Some(&block) = args.get(2) else {
            return vec![0x27];
        };
        self.reads.push(block);
        if let Some(&status) = self.failing_reads.get(&block) {
            return vec![status];
        }
        if self.authenticated_sector != Some(sector_of(block as u16)) {
            return vec![STATUS_AUTH_ERROR];
        }
        let Some(data) = self.memory.get(block as usize) else {
            return vec![0x27];
        };
        let mut out = vec![0x00];
        out.extend_from_slice(data);
        out
    }
}

/// SPI transport over `bus` with a recording delay.
#[doc(hidden)]
pub fn mock_transport(bus: &MockBus) -> SpiTransport<MockBus, MockDelay> {
    SpiTransport::with_delay(bus.clone(), MockDelay::default(), TransportConfig::default())
}

/// Install `card` on a fresh bus and bring up a device over it.
#[doc(hidden)]
pub fn initialized_mock_device(card: &MockClassicCard) -> Result<(Device<Initialized>, MockBus)> {
    let bus = MockBus::new();
    card.install(&bus);
    let device = DeviceBuilder::new()
        .with_transport(mock_transport(&bus))
        .build()?;
    Ok((device, bus))
}
