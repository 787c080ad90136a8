// libpn532/src/card/operations/auth.rs

use log::{debug, warn};

use crate::card::CardInfo;
use crate::protocol::commands::{KeyType, mifare};
use crate::protocol::decode_data_exchange;
use crate::transport::Transport;
use crate::utils::DEFAULT_COMMAND_TIMEOUT_MS;
use crate::{Error, Result};

/// Authenticate the sector holding `block`. Any non-zero card status is
/// reported as `AuthenticationFailed`.
pub fn authenticate(
    transport: &dyn Transport,
    card: &CardInfo,
    key_type: KeyType,
    key: &[u8; 6],
    block: u8,
) -> Result<()> {
    debug!("authenticating block {} with key {:?}", block, key_type);
    let cmd = mifare::encode_authenticate(card.target_id, key_type, key, block, &card.uid);
    let resp = transport.execute(&cmd, DEFAULT_COMMAND_TIMEOUT_MS)?;
    match decode_data_exchange(resp.data()) {
        Ok(_) => Ok(()),
        Err(Error::CardStatus { status, .. }) => {
            warn!("authentication of block {} refused: {:#04x}", block, status);
            Err(Error::AuthenticationFailed { block, status })
        }
        Err(e) => Err(e),
    }
}
