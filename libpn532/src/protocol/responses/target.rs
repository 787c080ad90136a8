use crate::protocol::parser::{be_u16_at, byte_at, slice_at};
use crate::{Error, Result};

/// One ISO 14443A target reported by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    /// Chip-assigned logical number used in later InDataExchange calls.
    pub target_id: u8,
    /// ATQA.
    pub sens_res: u16,
    /// SAK.
    pub sel_res: u8,
    /// NFCID1, 4, 7 or 10 bytes.
    pub uid: Vec<u8>,
}

/// Decode an InListPassiveTarget payload for type A:
/// NbTg, Tg, SENS_RES(2), SEL_RES, NFCIDLength, NFCID1(n), [ATS]
///
/// Returns `Ok(None)` when no target answered. More than one target is
/// rejected since only a single card in the field is supported.
pub fn decode_list_passive_target(data: &[u8]) -> Result<Option<TargetInfo>> {
    let count = byte_at(data, 0)?;
    match count {
        0 => return Ok(None),
        1 => {}
        n => return Err(Error::MultipleCardsDetected { count: n }),
    }

    let target_id = byte_at(data, 1)?;
    let sens_res = be_u16_at(data, 2)?;
    let sel_res = byte_at(data, 4)?;
    let uid_len = byte_at(data, 5)? as usize;
    let uid = slice_at(data, 6, uid_len)?.to_vec();

    Ok(Some(TargetInfo {
        target_id,
        sens_res,
        sel_res,
        uid,
    }))
}
