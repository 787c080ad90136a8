// libpn532/src/ndef/record_type.rs

/// NFC Forum well-known record type names (TNF = Well-Known).
///
/// `Generic` is the empty type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WellKnownType {
    /// `U`
    #[display(fmt = "URI")]
    Uri,
    /// `T`
    #[display(fmt = "Text")]
    Text,
    /// `Sp`
    #[display(fmt = "Smart Poster")]
    SmartPoster,
    /// Empty type name.
    #[display(fmt = "Generic")]
    Generic,
    /// `Gc`
    #[display(fmt = "Generic Control")]
    GenericControl,
}

impl WellKnownType {
    /// Look up a type name. Matching is exact and case-sensitive.
    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        match name {
            b"U" => Some(Self::Uri),
            b"T" => Some(Self::Text),
            b"Sp" => Some(Self::SmartPoster),
            b"" => Some(Self::Generic),
            b"Gc" => Some(Self::GenericControl),
            _ => None,
        }
    }

    /// Type name as written in the record's type field.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Uri => b"U",
            Self::Text => b"T",
            Self::SmartPoster => b"Sp",
            Self::Generic => b"",
            Self::GenericControl => b"Gc",
        }
    }
}
