// libpn532/src/card/info.rs

use crate::protocol::TargetInfo;
use crate::types::{ClassicVariant, Uid};
use crate::{Error, Result};

/// Identity of the MIFARE Classic card currently selected by the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    /// Logical target number assigned by the chip.
    pub target_id: u8,
    /// 4-byte NFCID1.
    pub uid: Uid,
    /// ATQA as reported by InListPassiveTarget.
    pub sens_res: u16,
    /// SAK.
    pub sel_res: u8,
    /// Memory layout derived from `sel_res`.
    pub variant: ClassicVariant,
}

impl CardInfo {
    /// Card info with the variant taken from SAK and no ATQA.
    pub fn new(target_id: u8, uid: Uid, sel_res: u8) -> Self {
        Self {
            target_id,
            uid,
            sens_res: 0,
            sel_res,
            variant: ClassicVariant::from_sak(sel_res),
        }
    }

    /// Card UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Memory layout.
    pub fn variant(&self) -> ClassicVariant {
        self.variant
    }
}

impl TryFrom<&TargetInfo> for CardInfo {
    type Error = Error;

    /// Only single-size (4-byte) UIDs are handled.
    fn try_from(target: &TargetInfo) -> Result<Self> {
        let uid = Uid::try_from(target.uid.as_slice()).map_err(|_| Error::UnsupportedCard {
            uid_len: target.uid.len() as u8,
        })?;
        Ok(Self {
            sens_res: target.sens_res,
            ..Self::new(target.target_id, uid, target.sel_res)
        })
    }
}
