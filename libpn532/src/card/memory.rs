// libpn532/src/card/memory.rs

//! MIFARE Classic memory geometry.
//!
//! Blocks 0..128 are grouped in sectors of 4, blocks from 128 up (4K only)
//! in sectors of 16. The last block of every sector is the trailer holding
//! the keys and access bits.

use crate::constants::{
    MIFARE_BLOCKS_PER_LARGE_SECTOR, MIFARE_BLOCKS_PER_SMALL_SECTOR, MIFARE_LARGE_SECTOR_START,
};

fn sector_size(block: u16) -> u16 {
    if block < MIFARE_LARGE_SECTOR_START {
        MIFARE_BLOCKS_PER_SMALL_SECTOR
    } else {
        MIFARE_BLOCKS_PER_LARGE_SECTOR
    }
}

/// True for the block at which a sector starts, i.e. where authentication is needed.
pub fn is_first_block_in_sector(block: u16) -> bool {
    block % sector_size(block) == 0
}

/// True for the last block of a sector (keys and access bits).
pub fn is_sector_trailer(block: u16) -> bool {
    (block + 1) % sector_size(block) == 0
}

/// Sector number holding `block` (0..40 on a 4K card).
pub fn sector_of(block: u16) -> u16 {
    if block < MIFARE_LARGE_SECTOR_START {
        block / MIFARE_BLOCKS_PER_SMALL_SECTOR
    } else {
        MIFARE_LARGE_SECTOR_START / MIFARE_BLOCKS_PER_SMALL_SECTOR
            + (block - MIFARE_LARGE_SECTOR_START) / MIFARE_BLOCKS_PER_LARGE_SECTOR
    }
}

/// Data blocks from `start` up to (excluding) `end`, trailers skipped.
pub fn data_blocks(start: u16, end: u16) -> impl Iterator<Item = u16> {
    (start..end).filter(|&b| !is_sector_trailer(b))
}
