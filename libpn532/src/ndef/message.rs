// libpn532/src/ndef/message.rs

use std::fmt;

use crate::error::{Error, Result};
use crate::ndef::record::{Cursor, Record};

/// An NDEF message: one or more records, the last carrying ME.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    records: Vec<Record>,
}

impl Message {
    /// Build a message, setting MB on the first record and ME on the last
    /// and clearing both everywhere else.
    pub fn new(mut records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::CorruptNdef("message has no records".into()));
        }
        let last = records.len() - 1;
        for (i, r) in records.iter_mut().enumerate() {
            r.set_message_begin(i == 0);
            r.set_message_end(i == last);
        }
        Ok(Self { records })
    }

    /// Decode records until one carries ME. Bytes past that record are
    /// ignored.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut cur = Cursor::new(data);
        let mut records = Vec::new();
        loop {
            let record = Record::decode_from(&mut cur)?;
            let end = record.message_end();
            records.push(record);
            if end {
                return Ok(Self { records });
            }
        }
    }

    /// Serialize all records back to back.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for r in &self.records {
            r.encode_into(&mut out);
        }
        out
    }

    /// Length of `encode()` without building it.
    pub fn encoded_len(&self) -> usize {
        self.records
            .iter()
            .map(|r| {
                let len_field = if r.is_short() { 1 } else { 4 };
                let id_field = usize::from(!r.id().is_empty());
                2 + len_field + id_field + r.record_type().len() + r.id().len() + r.payload().len()
            })
            .sum()
    }

    /// Records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `new` and `decode` never produce an empty message.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Expanded URIs of every well-known URI record, in order.
    pub fn uris(&self) -> Vec<String> {
        self.records.iter().filter_map(Record::uri_string).collect()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Record>> for Message {
    type Error = Error;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        Self::new(records)
    }
}
