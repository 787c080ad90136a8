// libpn532/src/ndef/uri.rs

//! URI identifier codes (NFC Forum URI RTD). The first payload byte of a
//! URI record abbreviates a well-known scheme prefix.

/// Abbreviated URI prefix. Discriminants are the wire codes; the strings
/// are in [`UriPrefix::as_str`].
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UriPrefix {
    #[default]
    None = 0x00,
    HttpWww = 0x01,
    HttpsWww = 0x02,
    Http = 0x03,
    Https = 0x04,
    Tel = 0x05,
    Mailto = 0x06,
    FtpAnonymous = 0x07,
    FtpFtp = 0x08,
    Ftps = 0x09,
    Sftp = 0x0A,
    Smb = 0x0B,
    Nfs = 0x0C,
    Ftp = 0x0D,
    Dav = 0x0E,
    News = 0x0F,
    Telnet = 0x10,
    Imap = 0x11,
    Rtsp = 0x12,
    Urn = 0x13,
    Pop = 0x14,
    Sip = 0x15,
    Sips = 0x16,
    Tftp = 0x17,
    Btspp = 0x18,
    Btl2cap = 0x19,
    Btgoep = 0x1A,
    Tcpobex = 0x1B,
    Irdaobex = 0x1C,
    File = 0x1D,
    UrnEpcId = 0x1E,
    UrnEpcTag = 0x1F,
    UrnEpcPat = 0x20,
    UrnEpcRaw = 0x21,
    UrnEpc = 0x22,
    UrnNfc = 0x23,
}

/// Indexed by wire code.
static URI_PREFIXES: [(UriPrefix, &str); 36] = [
    (UriPrefix::None, ""),
    (UriPrefix::HttpWww, "http://www."),
    (UriPrefix::HttpsWww, "https://www."),
    (UriPrefix::Http, "http://"),
    (UriPrefix::Https, "https://"),
    (UriPrefix::Tel, "tel:"),
    (UriPrefix::Mailto, "mailto:"),
    (UriPrefix::FtpAnonymous, "ftp://anonymous:anonymous@"),
    (UriPrefix::FtpFtp, "ftp://ftp."),
    (UriPrefix::Ftps, "ftps://"),
    (UriPrefix::Sftp, "sftp://"),
    (UriPrefix::Smb, "smb://"),
    (UriPrefix::Nfs, "nfs://"),
    (UriPrefix::Ftp, "ftp://"),
    (UriPrefix::Dav, "dav://"),
    (UriPrefix::News, "news:"),
    (UriPrefix::Telnet, "telnet://"),
    (UriPrefix::Imap, "imap:"),
    (UriPrefix::Rtsp, "rtsp://"),
    (UriPrefix::Urn, "urn:"),
    (UriPrefix::Pop, "pop:"),
    (UriPrefix::Sip, "sip:"),
    (UriPrefix::Sips, "sips:"),
    (UriPrefix::Tftp, "tftp:"),
    (UriPrefix::Btspp, "btspp://"),
    (UriPrefix::Btl2cap, "btl2cap://"),
    (UriPrefix::Btgoep, "btgoep://"),
    (UriPrefix::Tcpobex, "tcpobex://"),
    (UriPrefix::Irdaobex, "irdaobex://"),
    (UriPrefix::File, "file://"),
    (UriPrefix::UrnEpcId, "urn:epc:id:"),
    (UriPrefix::UrnEpcTag, "urn:epc:tag:"),
    (UriPrefix::UrnEpcPat, "urn:epc:pat:"),
    (UriPrefix::UrnEpcRaw, "urn:epc:raw:"),
    (UriPrefix::UrnEpc, "urn:epc:"),
    (UriPrefix::UrnNfc, "urn:nfc:"),
];

impl UriPrefix {
    /// Unknown codes map to `None` (no abbreviation).
    pub fn from_code(code: u8) -> Self {
        URI_PREFIXES
            .get(code as usize)
            .map(|(p, _)| *p)
            .unwrap_or(UriPrefix::None)
    }

    /// Exact lookup of a prefix string. Unknown strings map to `None`.
    pub fn from_prefix(prefix: &str) -> Self {
        URI_PREFIXES
            .iter()
            .find(|(_, s)| *s == prefix)
            .map(|(p, _)| *p)
            .unwrap_or(UriPrefix::None)
    }

    /// Longest known prefix of `uri`, with the remainder.
    pub fn split(uri: &str) -> (Self, &str) {
        URI_PREFIXES
            .iter()
            .skip(1)
            .filter(|(_, s)| uri.starts_with(s))
            .max_by_key(|(_, s)| s.len())
            .map(|(p, s)| (*p, &uri[s.len()..]))
            .unwrap_or((UriPrefix::None, uri))
    }

    /// Wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Scheme string this code abbreviates.
    pub fn as_str(self) -> &'static str {
        URI_PREFIXES[self as usize].1
    }
}

/// Scheme string for a wire code; `""` when the code is not mapped.
pub fn prefix_of(code: u8) -> &'static str {
    UriPrefix::from_code(code).as_str()
}

/// Wire code for an exact prefix string; `0x00` when not mapped.
pub fn code_of(prefix: &str) -> u8 {
    UriPrefix::from_prefix(prefix).code()
}
