// libpn532/src/ndef/record.rs

use std::fmt;

use crate::error::{Error, Result};
use crate::ndef::record_type::WellKnownType;
use crate::ndef::tnf::TypeNameFormat;
use crate::ndef::uri::{UriPrefix, prefix_of};
use crate::utils::bytes_to_hex;

pub(crate) const FLAG_MB: u8 = 0x80;
pub(crate) const FLAG_ME: u8 = 0x40;
pub(crate) const FLAG_CF: u8 = 0x20;
pub(crate) const FLAG_SR: u8 = 0x10;
pub(crate) const FLAG_IL: u8 = 0x08;

/// Payloads shorter than this use the 1-byte length field.
pub const SHORT_RECORD_LIMIT: usize = 255;

const TEXT_UTF16: u8 = 0x80;
const TEXT_LANG_MASK: u8 = 0x3F;

/// A single NDEF record.
///
/// The short-record and id-length flags are not stored: they are derived
/// from the payload and id lengths when the record is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    message_begin: bool,
    message_end: bool,
    chunked: bool,
    tnf: TypeNameFormat,
    record_type: Vec<u8>,
    id: Vec<u8>,
    payload: Vec<u8>,
}

impl Record {
    /// Type names and ids are limited to 255 bytes by the 1-byte length
    /// fields; payloads to `u32::MAX`.
    pub fn new(
        tnf: TypeNameFormat,
        record_type: impl Into<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let record_type = record_type.into();
        let payload = payload.into();
        check_u8_len("type", record_type.len())?;
        if u32::try_from(payload.len()).is_err() {
            return Err(Error::CorruptNdef(format!(
                "payload too long: {} bytes",
                payload.len()
            )));
        }
        Ok(Self {
            tnf,
            record_type,
            payload,
            ..Self::default()
        })
    }

    /// Attach a record id. Ids are limited to 255 bytes.
    pub fn with_id(mut self, id: impl Into<Vec<u8>>) -> Result<Self> {
        let id = id.into();
        check_u8_len("id", id.len())?;
        self.id = id;
        Ok(self)
    }

    /// Well-known URI record, abbreviating the longest known prefix.
    pub fn uri(uri: &str) -> Result<Self> {
        let (prefix, rest) = UriPrefix::split(uri);
        let mut payload = Vec::with_capacity(1 + rest.len());
        payload.push(prefix.code());
        payload.extend_from_slice(rest.as_bytes());
        Self::new(TypeNameFormat::WellKnown, WellKnownType::Uri.as_bytes(), payload)
    }

    /// Well-known UTF-8 text record.
    pub fn text(lang: &str, text: &str) -> Result<Self> {
        if lang.len() > TEXT_LANG_MASK as usize {
            return Err(Error::CorruptNdef(format!(
                "language code too long: {} bytes",
                lang.len()
            )));
        }
        let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
        payload.push(lang.len() as u8);
        payload.extend_from_slice(lang.as_bytes());
        payload.extend_from_slice(text.as_bytes());
        Self::new(TypeNameFormat::WellKnown, WellKnownType::Text.as_bytes(), payload)
    }

    /// MB flag.
    pub fn message_begin(&self) -> bool {
        self.message_begin
    }

    /// ME flag.
    pub fn message_end(&self) -> bool {
        self.message_end
    }

    /// CF flag.
    pub fn chunked(&self) -> bool {
        self.chunked
    }

    /// Type Name Format.
    pub fn tnf(&self) -> TypeNameFormat {
        self.tnf
    }

    /// Raw type field.
    pub fn record_type(&self) -> &[u8] {
        &self.record_type
    }

    /// Record id, empty when absent.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take the payload bytes.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Set the MB flag. `Message::new` overwrites it.
    pub fn set_message_begin(&mut self, on: bool) {
        self.message_begin = on;
    }

    /// Set the ME flag. `Message::new` overwrites it.
    pub fn set_message_end(&mut self, on: bool) {
        self.message_end = on;
    }

    /// Set the CF flag.
    pub fn set_chunked(&mut self, on: bool) {
        self.chunked = on;
    }

    /// Whether the record encodes with the short-record (1-byte) length.
    pub fn is_short(&self) -> bool {
        self.payload.len() < SHORT_RECORD_LIMIT
    }

    /// Well-known type of a record with TNF Well-Known.
    pub fn well_known_type(&self) -> Option<WellKnownType> {
        if self.tnf != TypeNameFormat::WellKnown {
            return None;
        }
        WellKnownType::from_bytes(&self.record_type)
    }

    /// Expanded URI of a well-known URI record.
    pub fn uri_string(&self) -> Option<String> {
        if self.well_known_type() != Some(WellKnownType::Uri) {
            return None;
        }
        let (&code, rest) = self.payload.split_first()?;
        let mut uri = String::from(prefix_of(code));
        uri.push_str(&String::from_utf8_lossy(rest));
        Some(uri)
    }

    /// Body of a well-known text record, without the language code.
    pub fn text_string(&self) -> Option<String> {
        if self.well_known_type() != Some(WellKnownType::Text) {
            return None;
        }
        let (&status, rest) = self.payload.split_first()?;
        let body = rest.get((status & TEXT_LANG_MASK) as usize..)?;
        if status & TEXT_UTF16 == 0 {
            return Some(String::from_utf8_lossy(body).into_owned());
        }
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        Some(String::from_utf16_lossy(&units))
    }

    /// Language code of a well-known text record.
    pub fn text_language(&self) -> Option<String> {
        if self.well_known_type() != Some(WellKnownType::Text) {
            return None;
        }
        let (&status, rest) = self.payload.split_first()?;
        let lang = rest.get(..(status & TEXT_LANG_MASK) as usize)?;
        Some(String::from_utf8_lossy(lang).into_owned())
    }

    pub(crate) fn header(&self) -> u8 {
        let mut h = self.tnf.bits();
        if self.message_begin {
            h |= FLAG_MB;
        }
        if self.message_end {
            h |= FLAG_ME;
        }
        if self.chunked {
            h |= FLAG_CF;
        }
        if self.is_short() {
            h |= FLAG_SR;
        }
        if !self.id.is_empty() {
            h |= FLAG_IL;
        }
        h
    }

    pub(crate) fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.header());
        out.push(self.record_type.len() as u8);
        if self.is_short() {
            out.push(self.payload.len() as u8);
        } else {
            out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        }
        if !self.id.is_empty() {
            out.push(self.id.len() as u8);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
    }

    pub(crate) fn decode_from(cur: &mut Cursor<'_>) -> Result<Self> {
        let header = cur.byte()?;
        let type_len = cur.byte()? as usize;
        let payload_len = if header & FLAG_SR != 0 {
            cur.byte()? as usize
        } else {
            let b = cur.take(4)?;
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as usize
        };
        let id_len = if header & FLAG_IL != 0 {
            cur.byte()? as usize
        } else {
            0
        };
        let record_type = cur.take(type_len)?.to_vec();
        let id = cur.take(id_len)?.to_vec();
        let payload = cur.take(payload_len)?.to_vec();

        Ok(Self {
            message_begin: header & FLAG_MB != 0,
            message_end: header & FLAG_ME != 0,
            chunked: header & FLAG_CF != 0,
            tnf: TypeNameFormat::from_header(header),
            record_type,
            id,
            payload,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(uri) = self.uri_string() {
            return write!(f, "URI: {uri}");
        }
        if let Some(text) = self.text_string() {
            return write!(f, "Text: {text}");
        }
        write!(
            f,
            "{} [{}]: {}",
            self.tnf,
            String::from_utf8_lossy(&self.record_type),
            bytes_to_hex(&self.payload)
        )
    }
}

fn check_u8_len(what: &str, len: usize) -> Result<()> {
    if len > u8::MAX as usize {
        return Err(Error::CorruptNdef(format!("{what} too long: {len} bytes")));
    }
    Ok(())
}

/// Forward-only reader over an NDEF byte buffer.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::TruncatedNdef { offset: self.pos })?;
        let out = &self.data[self.pos..end];
        self.pos = end;
        Ok(out)
    }
}
