// libpn532/src/card/tlv.rs

//! TLV framing of the NDEF data area on MIFARE Classic cards.
//!
//! The data area is a sequence of `tag len value` blocks. Lengths are one
//! byte, or `0xFF` followed by a 16-bit big-endian length.

use log::{debug, trace};

use crate::constants::MIFARE_BLOCK_SIZE;
use crate::ndef::Message;
use crate::types::BlockData;
use crate::{Error, Result};

/// Padding; followed by a length byte that is ignored.
pub const TLV_NULL: u8 = 0x00;
/// NDEF message.
pub const TLV_NDEF: u8 = 0x03;
/// Proprietary data, skipped.
pub const TLV_PROPRIETARY: u8 = 0xFD;
/// End of the data area.
pub const TLV_TERMINATOR: u8 = 0xFE;

const LONG_LENGTH_MARKER: u8 = 0xFF;

/// Byte-at-a-time input for the TLV parser.
pub trait ByteSource {
    /// Next byte, or `Ok(None)` once the input is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>>;
}

/// Reads from an in-memory card image.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Read `data` from the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = self.data.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }
}

/// Flattens a stream of read results into bytes. An `Err` item ends the
/// stream with that error.
pub struct BlockSource<I> {
    blocks: I,
    current: [u8; MIFARE_BLOCK_SIZE],
    pos: usize,
}

impl<I> BlockSource<I>
where
    I: Iterator<Item = Result<BlockData>>,
{
    /// Wrap an iterator of block read results.
    pub fn new(blocks: I) -> Self {
        Self {
            blocks,
            current: [0; MIFARE_BLOCK_SIZE],
            pos: MIFARE_BLOCK_SIZE,
        }
    }
}

impl<I> ByteSource for BlockSource<I>
where
    I: Iterator<Item = Result<BlockData>>,
{
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.pos == MIFARE_BLOCK_SIZE {
            let Some(block) = self.blocks.next() else {
                return Ok(None);
            };
            self.current = *block?.as_bytes();
            self.pos = 0;
        }
        let b = self.current[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }
}

struct TlvReader<S> {
    src: S,
    offset: usize,
}

impl<S: ByteSource> TlvReader<S> {
    fn byte(&mut self) -> Result<u8> {
        let b = self.src.next_byte()?.ok_or(Error::TruncatedTlv {
            offset: self.offset,
        })?;
        self.offset += 1;
        Ok(b)
    }

    fn length(&mut self) -> Result<usize> {
        let first = self.byte()?;
        if first != LONG_LENGTH_MARKER {
            return Ok(first as usize);
        }
        let hi = self.byte()?;
        let lo = self.byte()?;
        Ok(u16::from_be_bytes([hi, lo]) as usize)
    }

    fn value(&mut self, len: usize) -> Result<Vec<u8>> {
        (0..len).map(|_| self.byte()).collect()
    }
}

/// Parse TLVs until the terminator, decoding every NDEF TLV.
///
/// Proprietary and NULL TLVs are skipped, as are empty NDEF TLVs (a freshly
/// formatted card). Running out of input before the terminator is an error;
/// messages decoded up to that point are discarded.
pub fn parse_ndef_tlvs<S: ByteSource>(src: S) -> Result<Vec<Message>> {
    let mut reader = TlvReader { src, offset: 0 };
    let mut messages = Vec::new();
    loop {
        let at = reader.offset;
        let tag = reader.byte()?;
        match tag {
            TLV_TERMINATOR => {
                debug!("TLV terminator at offset {}", at);
                return Ok(messages);
            }
            TLV_NULL => {
                reader.byte()?;
            }
            TLV_NDEF | TLV_PROPRIETARY => {
                let len = reader.length()?;
                let value = reader.value(len)?;
                trace!("TLV {:#04x} len {} at offset {}", tag, len, at);
                if tag == TLV_NDEF && !value.is_empty() {
                    messages.push(Message::decode(&value)?);
                }
            }
            other => return Err(Error::CorruptTlv { tag: other, offset: at }),
        }
    }
}

/// Card data-area image for one message: NDEF TLV then terminator.
pub fn encode_ndef_tlv(message: &Message) -> Result<Vec<u8>> {
    let body = message.encode();
    let len = u16::try_from(body.len()).map_err(|_| Error::InvalidLength {
        expected: u16::MAX as usize,
        actual: body.len(),
    })?;
    let mut out = Vec::with_capacity(body.len() + 5);
    out.push(TLV_NDEF);
    if len < LONG_LENGTH_MARKER as u16 {
        out.push(len as u8);
    } else {
        out.push(LONG_LENGTH_MARKER);
        out.extend_from_slice(&len.to_be_bytes());
    }
    out.extend_from_slice(&body);
    out.push(TLV_TERMINATOR);
    Ok(out)
}
