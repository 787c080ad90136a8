// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Response header length: preamble(3) + LEN + LCS + TFI + echoed code
pub const PN532_RESPONSE_HEADER_LEN: usize = 7;

/// Maximum LEN value of a normal (non-extended) information frame
pub const PN532_MAX_FRAME_LEN: usize = 255;

/// Frame identifier (TFI) for host->chip frames
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
/// Frame identifier (TFI) for chip->host frames
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Fixed ACK frame sent by the chip after it accepted a command frame
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// SPI marker: frame write
pub const SPI_DATA_WRITE: u8 = 0x01;
/// SPI marker: status byte read
pub const SPI_STATUS_READ: u8 = 0x02;
/// SPI marker: frame read
pub const SPI_DATA_READ: u8 = 0x03;

/// Bit set in the SPI status byte once the chip has data to read
pub const SPI_STATUS_READY: u8 = 0x01;

/// MIFARE Classic block size in bytes
pub const MIFARE_BLOCK_SIZE: usize = 16;

/// First data block after the MAD sector (sector 0)
pub const MIFARE_FIRST_NDEF_BLOCK: u8 = 4;

/// Blocks per sector below block 128
pub const MIFARE_BLOCKS_PER_SMALL_SECTOR: u16 = 4;
/// Blocks per sector from block 128 on (4K only)
pub const MIFARE_BLOCKS_PER_LARGE_SECTOR: u16 = 16;
/// First block of the 16-block sectors on 4K cards.
pub const MIFARE_LARGE_SECTOR_START: u16 = 128;

/// MIFARE Application Directory key (public, sector 0)
pub const MIFARE_MAD_KEY: [u8; 6] = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];

/// NFC Forum default key for NDEF sectors
pub const MIFARE_NFC_KEY: [u8; 6] = [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7];
