// libpn532/src/protocol/commands/mifare.rs

//! MIFARE Classic card-level commands relayed through InDataExchange.

use super::Command;
use crate::types::Uid;

/// MIFARE Classic command bytes.
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MifareCommand {
    AuthA = 0x60,
    AuthB = 0x61,
    Read = 0x30,
    Write = 0xA0,
    WriteUltralight = 0xA2,
    Transfer = 0xB0,
    Decrement = 0xC0,
    Increment = 0xC1,
    Store = 0xC2,
}

/// Which sector key to authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Key A.
    A,
    /// Key B, the NFC Forum key on NDEF sectors.
    B,
}

impl KeyType {
    /// Authentication command selecting this key.
    pub fn command(self) -> MifareCommand {
        match self {
            KeyType::A => MifareCommand::AuthA,
            KeyType::B => MifareCommand::AuthB,
        }
    }
}

/// Build an authenticate command:
/// Tg + AuthA/B + key(6) + block + uid(4)
pub fn encode_authenticate(
    target_id: u8,
    key_type: KeyType,
    key: &[u8; 6],
    block: u8,
    uid: &Uid,
) -> Command {
    let mut data = Vec::with_capacity(12);
    data.push(key_type.command() as u8);
    data.extend_from_slice(key);
    data.push(block);
    data.extend_from_slice(uid.as_bytes());
    Command::in_data_exchange(target_id, data)
}

/// Build a 16-byte block read command: Tg + Read + block
pub fn encode_read_block(target_id: u8, block: u8) -> Command {
    Command::in_data_exchange(target_id, vec![MifareCommand::Read as u8, block])
}
