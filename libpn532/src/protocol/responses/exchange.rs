use crate::protocol::commands::Opcode;
use crate::protocol::parser::byte_at;
use crate::{Error, Result};

/// Split an InDataExchange payload into status and card data. A non-zero
/// status (lower 6 bits; the upper bits are MI/NAD flags) is reported as
/// `CardStatus`.
pub fn decode_data_exchange(data: &[u8]) -> Result<&[u8]> {
    let status = byte_at(data, 0)?;
    if status & 0x3F != 0 {
        return Err(Error::CardStatus {
            command: Opcode::InDataExchange.code(),
            status,
        });
    }
    Ok(&data[1..])
}
