// libpn532/src/card/operations/read.rs

use log::{trace, warn};

use crate::card::CardInfo;
use crate::constants::MIFARE_BLOCK_SIZE;
use crate::protocol::commands::mifare;
use crate::protocol::decode_data_exchange;
use crate::protocol::parser::slice_at;
use crate::transport::Transport;
use crate::types::BlockData;
use crate::utils::DEFAULT_COMMAND_TIMEOUT_MS;
use crate::{Error, Result};

/// Read one 16-byte block. The sector must already be authenticated.
///
/// A non-zero card status is reported as `ReadFailed` for `block`.
pub fn read_block(transport: &dyn Transport, card: &CardInfo, block: u8) -> Result<BlockData> {
    let cmd = mifare::encode_read_block(card.target_id, block);
    let resp = transport.execute(&cmd, DEFAULT_COMMAND_TIMEOUT_MS)?;
    let data = decode_data_exchange(resp.data()).map_err(|e| match e {
        Error::CardStatus { status, .. } => {
            warn!("read of block {} failed: {:#04x}", block, status);
            Error::ReadFailed { block, status }
        }
        e => e,
    })?;
    let data = BlockData::try_from(slice_at(data, 0, MIFARE_BLOCK_SIZE)?)?;
    trace!("block {}: {}", block, data.to_hex());
    Ok(data)
}
