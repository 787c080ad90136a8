// libpn532/src/card/mifare_classic.rs

use std::sync::Arc;
use std::iter;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use log::{debug, info};

use crate::card::memory::{data_blocks, is_first_block_in_sector, sector_of};
use crate::card::tlv::{BlockSource, parse_ndef_tlvs};
use crate::card::{CardInfo, NdefTag, operations};
use crate::constants::{MIFARE_FIRST_NDEF_BLOCK, MIFARE_NFC_KEY};
use crate::ndef::Message;
use crate::protocol::commands::KeyType;
use crate::transport::Transport;
use crate::types::BlockData;
use crate::{Error, Result};

/// A MIFARE Classic card in the field, addressed through a shared transport.
pub struct MifareClassic {
    transport: Arc<dyn Transport>,
    info: CardInfo,
}

impl MifareClassic {
    /// Session for the card described by `info`.
    pub fn new(transport: Arc<dyn Transport>, info: CardInfo) -> Self {
        Self { transport, info }
    }

    /// Identity of the card.
    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    /// Authenticate the sector holding `block`.
    pub fn authenticate(&self, key_type: KeyType, key: &[u8; 6], block: u8) -> Result<()> {
        operations::authenticate(&*self.transport, &self.info, key_type, key, block)
    }

    /// Read one block of an already authenticated sector.
    pub fn read_block(&self, block: u8) -> Result<BlockData> {
        operations::read_block(&*self.transport, &self.info, block)
    }

    /// Read every NDEF message from the data area.
    ///
    /// Blocks are fetched on a worker thread and handed over one at a time
    /// to the TLV parser running on the calling thread. The worker only
    /// touches the card when the parser asks for the next block, so nothing
    /// past the terminator is read. A failed read or authentication ends the
    /// stream and is returned as the result.
    pub fn read_ndef_messages(&self) -> Result<Vec<Message>> {
        let end = self.info.variant.block_count();
        debug!(
            "reading NDEF area of {} uid={} (blocks {}..{})",
            self.info.variant,
            self.info.uid.to_hex(),
            MIFARE_FIRST_NDEF_BLOCK,
            end
        );
        let messages = thread::scope(|s| {
            let (demand_tx, demand_rx) = mpsc::sync_channel::<()>(0);
            let (tx, rx) = mpsc::sync_channel(0);
            s.spawn(move || self.stream_blocks(end, demand_rx, tx));
            let blocks = iter::from_fn(move || {
                demand_tx.send(()).ok()?;
                rx.recv().ok()
            });
            parse_ndef_tlvs(BlockSource::new(blocks))
        })?;
        info!("read {} NDEF message(s)", messages.len());
        Ok(messages)
    }

    fn stream_blocks(
        &self,
        end: u16,
        demand: Receiver<()>,
        tx: SyncSender<Result<BlockData>>,
    ) {
        for block in data_blocks(MIFARE_FIRST_NDEF_BLOCK as u16, end) {
            if demand.recv().is_err() {
                debug!("parser done, stopping before block {}", block);
                return;
            }
            let item = self.fetch(block);
            let failed = item.is_err();
            if tx.send(item).is_err() {
                return;
            }
            if failed {
                return;
            }
        }
    }

    fn fetch(&self, block: u16) -> Result<BlockData> {
        let addr = u8::try_from(block).map_err(|_| Error::InvalidLength {
            expected: u8::MAX as usize,
            actual: block as usize,
        })?;
        if is_first_block_in_sector(block) {
            debug!("sector {}: authenticating with key B", sector_of(block));
            self.authenticate(KeyType::B, &MIFARE_NFC_KEY, addr)?;
        }
        self.read_block(addr)
    }
}

impl NdefTag for MifareClassic {
    fn identifier(&self) -> &[u8] {
        self.info.uid.as_bytes()
    }

    fn read_ndef_messages(&self) -> Result<Vec<Message>> {
        MifareClassic::read_ndef_messages(self)
    }
}
