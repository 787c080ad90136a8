// libpn532/src/ndef/mod.rs

//! NDEF (NFC Data Exchange Format) codec.
//!
//! Pure byte-level encoding and decoding of messages and records, plus the
//! URI identifier code table. Nothing here touches the reader.

/// NDEF messages.
pub mod message;
/// NDEF records.
pub mod record;
/// Well-known record type names.
pub mod record_type;
/// Type Name Format.
pub mod tnf;
pub mod uri;

pub use message::Message;
pub use record::{Record, SHORT_RECORD_LIMIT};
pub use record_type::WellKnownType;
pub use tnf::TypeNameFormat;
pub use uri::{UriPrefix, code_of, prefix_of};
