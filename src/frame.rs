//! Validation and decoding of SDS011 data report frames.
//!
//! A data report is 10 bytes:
//!
//! | offset | content                         |
//! |--------|---------------------------------|
//! | 0      | `0xAA` start marker             |
//! | 1      | `0xC0` data report id           |
//! | 2..=3  | PM2.5 ×10, little-endian        |
//! | 4..=5  | PM10 ×10, little-endian         |
//! | 6..=7  | device id                       |
//! | 8      | checksum of bytes 2..=7         |
//! | 9      | `0xAB` end marker               |

use crate::checksum::checksum;
use crate::constants::{
    CHECKSUM_OFFSET, DATA_REPORT_ID, DEVICE_ID_OFFSET, FRAME_LEN, HEAD, PM10_OFFSET, PM2_5_OFFSET,
    TAIL,
};
use crate::error::FrameError;
use crate::types::{Reading, ReadingRaw};

/// Checks length, then start, type and end markers, then checksum of `frame`.
pub fn validate(frame: &[u8]) -> Result<(), FrameError> {
    if frame.len() != FRAME_LEN {
        return Err(FrameError::Length(frame.len()));
    }
    if frame[0] != HEAD {
        return Err(FrameError::Start(frame[0]));
    }
    if frame[1] != DATA_REPORT_ID {
        return Err(FrameError::Type(frame[1]));
    }
    if frame[FRAME_LEN - 1] != TAIL {
        return Err(FrameError::End(frame[FRAME_LEN - 1]));
    }
    let expected = checksum(&frame[PM2_5_OFFSET..CHECKSUM_OFFSET]);
    let actual = frame[CHECKSUM_OFFSET];
    if expected != actual {
        return Err(FrameError::Checksum { expected, actual });
    }
    Ok(())
}

/// Decodes the raw fields of a validated frame.
pub fn decode_raw(frame: &[u8]) -> Result<ReadingRaw, FrameError> {
    validate(frame)?;
    Ok(ReadingRaw {
        pm2_5: read_u16_le(frame, PM2_5_OFFSET),
        pm10: read_u16_le(frame, PM10_OFFSET),
        device_id: read_u16_le(frame, DEVICE_ID_OFFSET),
    })
}

/// Decodes a data report frame into concentrations in µg/m³.
///
/// Values are passed through as reported; a frame either decodes completely
/// or yields the first [`FrameError`] found.
pub fn decode(frame: &[u8]) -> Result<Reading, FrameError> {
    decode_raw(frame).map(Reading::from)
}

fn read_u16_le(frame: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([frame[offset], frame[offset + 1]])
}
