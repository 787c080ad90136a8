// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK_FRAME, PN532_HOST_TO_PN532, PN532_MAX_FRAME_LEN, PN532_PN532_TO_HOST,
    PN532_POSTAMBLE, PN532_PREAMBLE, PN532_RESPONSE_HEADER_LEN,
};
use crate::protocol::checksum::{lcs, sum};
use crate::protocol::commands::Command;
use crate::{Error, Result};

/// PN532 information frame helper.
/// Format: [Preamble+StartCode(3)] [LEN(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// LEN counts TFI + payload, DCS covers TFI + payload.
pub struct Frame;

/// Validated response header. `remaining` is the number of bytes still to
/// be read after the 7-byte header (payload + DCS + postamble).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    /// LEN: TFI, payload and echoed code.
    pub len: u8,
    /// Echoed command code plus one.
    pub response_code: u8,
}

impl ResponseHeader {
    /// Bytes to read after the header.
    pub fn remaining(&self) -> usize {
        self.len as usize
    }
}

impl Frame {
    /// Encode a TFI byte and payload into a full information frame.
    pub fn encode(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        let len = payload.len() + 1;
        if len > PN532_MAX_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_FRAME_LEN,
                actual: len,
            });
        }

        let len = len as u8;
        let mut out = Vec::with_capacity(3 + 2 + len as usize + 2);
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs_with_tfi(tfi, payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Encode a host->chip command frame.
    pub fn encode_command(cmd: &Command) -> Result<Vec<u8>> {
        Self::encode(PN532_HOST_TO_PN532, &cmd.encode())
    }

    /// Encode a chip->host response frame carrying `data` for
    /// `command_code`. Only the simulated chip in `test_support` and
    /// the tests need this direction.
    pub fn encode_response(command_code: u8, data: &[u8]) -> Result<Vec<u8>> {
        let mut payload = Vec::with_capacity(1 + data.len());
        payload.push(command_code.wrapping_add(1));
        payload.extend_from_slice(data);
        Self::encode(PN532_PN532_TO_HOST, &payload)
    }

    /// Validate the 7-byte response header for a command with the given
    /// code.
    pub fn parse_header(header: &[u8], command_code: u8) -> Result<ResponseHeader> {
        if header.len() != PN532_RESPONSE_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_RESPONSE_HEADER_LEN,
                actual: header.len(),
            });
        }

        if header[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = header[3];
        let lcs_actual = header[4];
        if len.wrapping_add(lcs_actual) != 0 {
            return Err(Error::ChecksumMismatch {
                expected: lcs(len),
                actual: lcs_actual,
            });
        }

        // TFI + echoed code at minimum
        if len < 2 {
            return Err(Error::FrameFormat(format!("frame length {} too short", len)));
        }

        if header[5] != PN532_PN532_TO_HOST {
            return Err(Error::FrameFormat(format!(
                "invalid frame identifier {:#04x}",
                header[5]
            )));
        }

        let expected = command_code.wrapping_add(1);
        if header[6] != expected {
            return Err(Error::UnexpectedResponse {
                expected,
                actual: header[6],
            });
        }

        Ok(ResponseHeader {
            len,
            response_code: header[6],
        })
    }

    /// Validate the bytes following the header (payload, DCS, postamble)
    /// and return the payload.
    pub fn parse_body(header: &ResponseHeader, rest: &[u8]) -> Result<Vec<u8>> {
        if rest.len() != header.remaining() {
            return Err(Error::InvalidLength {
                expected: header.remaining(),
                actual: rest.len(),
            });
        }

        let payload_len = header.len as usize - 2;
        let payload = &rest[..payload_len];
        let dcs_actual = rest[payload_len];
        let covered = PN532_PN532_TO_HOST
            .wrapping_add(header.response_code)
            .wrapping_add(sum(payload));
        if covered.wrapping_add(dcs_actual) != 0 {
            return Err(Error::ChecksumMismatch {
                expected: 0u8.wrapping_sub(covered),
                actual: dcs_actual,
            });
        }

        if rest[payload_len + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(payload.to_vec())
    }

    /// Decode a complete buffered response frame and return its payload.
    pub fn decode_response(frame: &[u8], command_code: u8) -> Result<Vec<u8>> {
        if frame.len() < PN532_RESPONSE_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_RESPONSE_HEADER_LEN,
                actual: frame.len(),
            });
        }
        let (head, rest) = frame.split_at(PN532_RESPONSE_HEADER_LEN);
        let header = Self::parse_header(head, command_code)?;
        Self::parse_body(&header, rest)
    }

    /// True when `bytes` is exactly the ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == PN532_ACK_FRAME
    }
}

fn dcs_with_tfi(tfi: u8, payload: &[u8]) -> u8 {
    0u8.wrapping_sub(tfi.wrapping_add(sum(payload)))
}
