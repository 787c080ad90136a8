// libpn532/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// MIFARE Classic UID - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    /// UID length in bytes.
    pub const LEN: usize = 4;

    /// Wrap 4 UID bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap a 16-byte block.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Hex with one space between bytes.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable ASCII with other bytes shown as `.`.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Modulation / bit rate argument of InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaudRate {
    /// 106 kbps type A (ISO/IEC 14443 Type A, MIFARE)
    #[default]
    Iso14443A = 0x00,
    /// 212 kbps FeliCa
    FeliCa212 = 0x01,
    /// 424 kbps FeliCa
    FeliCa424 = 0x02,
    /// 106 kbps type B
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel
    Jewel = 0x04,
}

/// MIFARE Classic family member, derived from the SEL_RES (SAK) byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassicVariant {
    /// 5 sectors, 20 blocks.
    #[display(fmt = "MIFARE Mini")]
    Mini,
    /// 16 sectors, 64 blocks.
    #[display(fmt = "MIFARE Classic 1K")]
    Classic1K,
    /// 40 sectors, 256 blocks.
    #[display(fmt = "MIFARE Classic 4K")]
    Classic4K,
}

impl ClassicVariant {
    /// Map SAK to a variant. Unknown values fall back to 1K, the most
    /// common NDEF-formatted Classic card.
    pub fn from_sak(sak: u8) -> Self {
        match sak {
            0x09 => Self::Mini,
            0x18 | 0x38 => Self::Classic4K,
            _ => Self::Classic1K,
        }
    }

    /// Total number of 16-byte blocks on the card.
    pub fn block_count(self) -> u16 {
        match self {
            Self::Mini => 20,
            Self::Classic1K => 64,
            Self::Classic4K => 256,
        }
    }
}
