// libpn532/src/ndef/tnf.rs

/// Type Name Format: the low 3 bits of an NDEF record header. Variants
/// display as their NFC Forum names.
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeNameFormat {
    #[default]
    #[display(fmt = "Empty")]
    Empty = 0x00,
    #[display(fmt = "Well-Known")]
    WellKnown = 0x01,
    #[display(fmt = "MIME Media")]
    MimeMedia = 0x02,
    #[display(fmt = "Absolute URI")]
    AbsoluteUri = 0x03,
    #[display(fmt = "External")]
    External = 0x04,
    #[display(fmt = "Unknown")]
    Unknown = 0x05,
    #[display(fmt = "Unchanged")]
    Unchanged = 0x06,
    #[display(fmt = "Reserved")]
    Reserved = 0x07,
}

impl TypeNameFormat {
    /// Header bits holding the TNF.
    pub const MASK: u8 = 0x07;

    /// Extract the TNF from a header byte. Total: all 8 values are mapped.
    pub fn from_header(header: u8) -> Self {
        match header & Self::MASK {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MimeMedia,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    /// TNF as header bits.
    pub fn bits(self) -> u8 {
        self as u8
    }
}
