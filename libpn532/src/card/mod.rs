// libpn532/src/card/mod.rs

//! Card-level access: MIFARE Classic memory layout, TLV framing and the
//! NDEF read pipeline.

use crate::Result;
use crate::ndef::Message;

mod info;
pub use info::CardInfo;

pub mod memory;
/// Streaming NDEF reader for MIFARE Classic.
pub mod mifare_classic;
pub mod operations;
pub mod tlv;

pub use mifare_classic::MifareClassic;
pub use tlv::encode_ndef_tlv;

/// A tag that stores NDEF messages.
pub trait NdefTag {
    /// UID bytes as reported during anticollision.
    fn identifier(&self) -> &[u8];

    fn read_ndef_messages(&self) -> Result<Vec<Message>>;
}
