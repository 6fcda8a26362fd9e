// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use arrayvec::ArrayVec;
use log::{debug, info, warn};
use std::io::{Read, Seek};

use crate::cursor::{ByteCursor, be_u16};
use crate::{Error, Result};

/// Word prefix of a 0x200-byte block of track 2 (audio) data.
const TRACK2_BLOCK_TAG: u32 = 0x01FE_0000;
const TRACK2_BLOCK_SIZE: u64 = 0x200;
/// Word prefix of a 0x100-byte block of auxiliary track data.
const SHORT_BLOCK_TAG: u32 = 0x00FE_0000;
const SHORT_BLOCK_SIZE: u64 = 0x100;
const BLOCK_TAG_MASK: u32 = 0xFFFF_0000;

/// Leading word of a metadata (subtitle text) block.
const METADATA_MARKER: u32 = 0x0000_0000;
/// Marker word plus a 4-byte field we don't interpret.
const METADATA_HEADER_SIZE: u64 = 8;
/// Bytes of the first metadata block kept for diagnostics.
const METADATA_CAPTURE_LIMIT: usize = 128;

/// State that lives for exactly one repair run.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Whether metadata blocks in this file have looked like text so far.
    /// Starts true; cleared for good the first time the guess is wrong.
    pub metadata_printable: bool,
    /// Number of metadata blocks skipped.
    pub metadata_seen: u32,
    /// First line of the first metadata block.
    pub first_metadata: Option<std::string::String>,
    /// Fixed-size auxiliary blocks skipped.
    pub auxiliary_blocks: u32,
    /// Implausible length fields that triggered a resynchronization.
    pub anomalies: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            metadata_printable: true,
            metadata_seen: 0,
            first_metadata: None,
            auxiliary_blocks: 0,
            anomalies: 0,
        }
    }
}

/// Result of looking for an auxiliary block at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxOutcome {
    /// The next bytes should be read as a length field.
    NotAuxiliary,
    /// A block of this many bytes was skipped.
    Skipped(u64),
    /// A block was recognized but the input ends inside it.
    Truncated,
}

/// Recognizes non-video blocks interleaved with the video units.
///
/// Newer firmware interleaves audio and metadata samples in `mdat` at the same
/// structural position as the length-prefixed video units. Their first word
/// would be misread as an implausible NAL length, so they are checked for
/// before any anomaly recovery kicks in.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuxiliaryBlockSkipper;

impl AuxiliaryBlockSkipper {
    pub fn check<R: Read + Seek>(&self, src: &mut ByteCursor<R>, state: &mut RunState) -> Result<AuxOutcome> {
        let word = match src.peek_u32() {
            Ok(word) => word,
            // Let the length reader see the short tail.
            Err(Error::UnexpectedEOF) => return Ok(AuxOutcome::NotAuxiliary),
            Err(e) => return Err(e),
        };

        if let Some(size) = fixed_block_size(word) {
            let start = src.offset();
            debug!("skipping 0x{size:x}-byte auxiliary block at 0x{start:x}");
            return match src.skip(size) {
                Ok(()) => {
                    state.auxiliary_blocks += 1;
                    Ok(AuxOutcome::Skipped(size))
                },
                Err(Error::UnexpectedEOF) => Ok(AuxOutcome::Truncated),
                Err(e) => Err(e),
            };
        }

        if word == METADATA_MARKER && state.metadata_printable {
            return self.skip_metadata(src, state);
        }

        Ok(AuxOutcome::NotAuxiliary)
    }

    fn skip_metadata<R: Read + Seek>(&self, src: &mut ByteCursor<R>, state: &mut RunState) -> Result<AuxOutcome> {
        let start = src.offset();
        let len = match read_metadata_len(src) {
            Ok(Some(len)) => len,
            Ok(None) | Err(Error::UnexpectedEOF) => {
                warn!("data at 0x{start:x} doesn't look like a metadata block; treating it as video from now on");
                state.metadata_printable = false;
                src.seek_to(start)?;
                return Ok(AuxOutcome::NotAuxiliary);
            },
            Err(e) => return Err(e),
        };

        if state.metadata_seen == 0 {
            let text = capture_line(src, len)?;
            info!("metadata: {text}");
            state.first_metadata = Some(text);
        }
        state.metadata_seen += 1;

        let text_start = start + METADATA_HEADER_SIZE + 2;
        src.seek_to(text_start)?;
        match src.skip(u64::from(len)) {
            Ok(()) => Ok(AuxOutcome::Skipped(METADATA_HEADER_SIZE + 2 + u64::from(len))),
            Err(Error::UnexpectedEOF) => Ok(AuxOutcome::Truncated),
            Err(e) => Err(e),
        }
    }
}

/// Size of the fixed-size auxiliary block starting with `word`, if it is one.
pub(crate) fn fixed_block_size(word: u32) -> Option<u64> {
    match word & BLOCK_TAG_MASK {
        TRACK2_BLOCK_TAG => Some(TRACK2_BLOCK_SIZE),
        SHORT_BLOCK_TAG => Some(SHORT_BLOCK_SIZE),
        _ => None,
    }
}

/// Read the header and text length of a metadata block.
///
/// Returns `None` when the text does not start with printable characters.
/// The cursor is left just before the text.
fn read_metadata_len<R: Read + Seek>(src: &mut ByteCursor<R>) -> Result<Option<u16>> {
    src.skip(METADATA_HEADER_SIZE)?;
    let len = be_u16(src)?;
    let lead = src.peek::<4>()?;
    if lead.iter().all(|&b| is_printable(b)) {
        Ok(Some(len))
    } else {
        Ok(None)
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// Read up to the first line break or NUL of a metadata text.
fn capture_line<R: Read + Seek>(src: &mut ByteCursor<R>, len: u16) -> Result<std::string::String> {
    let mut line: ArrayVec<u8, METADATA_CAPTURE_LIMIT> = ArrayVec::new();
    let want = usize::from(len).min(METADATA_CAPTURE_LIMIT);
    for _ in 0..want {
        let Some(b) = src.next_byte()? else { break };
        if matches!(b, b'\n' | b'\r' | 0) {
            break;
        }
        line.push(b);
    }
    Ok(std::string::String::from_utf8_lossy(&line).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor(bytes: std::vec::Vec<u8>) -> ByteCursor<Cursor<std::vec::Vec<u8>>> {
        ByteCursor::new(Cursor::new(bytes)).unwrap()
    }

    fn metadata_block(text: &[u8]) -> std::vec::Vec<u8> {
        let mut v = vec![0, 0, 0, 0, 0, 0, 0x10, 0x20];
        v.extend_from_slice(&u16::try_from(text.len()).unwrap().to_be_bytes());
        v.extend_from_slice(text);
        v
    }

    #[test]
    fn skips_track2_block() {
        let mut bytes = vec![0x01, 0xfe, 0x12, 0x34];
        bytes.resize(0x200, 0xaa);
        bytes.extend_from_slice(&[0, 0, 0, 1, 0x65]);
        let mut src = cursor(bytes);
        let mut state = RunState::default();
        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::Skipped(0x200));
        assert_eq!(src.offset(), 0x200);
        assert_eq!(state.auxiliary_blocks, 1);
        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::NotAuxiliary);
        assert_eq!(src.offset(), 0x200);
    }

    #[test]
    fn short_block_past_end_is_truncated() {
        let mut src = cursor(vec![0x00, 0xfe, 0, 0, 1, 2, 3]);
        let mut state = RunState::default();
        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::Truncated);
    }

    #[test]
    fn ordinary_length_is_left_alone() {
        let mut src = cursor(vec![0, 0, 0x12, 0x34, 0x65]);
        let mut state = RunState::default();
        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::NotAuxiliary);
        assert_eq!(src.offset(), 0);
    }

    #[test]
    fn printable_metadata_is_skipped_and_captured() {
        let mut bytes = metadata_block(b"F/2.8, SS 240, ISO 100\nGPS (0,0)");
        bytes.extend(metadata_block(b"F/2.8, SS 250"));
        bytes.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x10]);
        let mut src = cursor(bytes);
        let mut state = RunState::default();

        assert!(matches!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::Skipped(42)));
        assert!(matches!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::Skipped(23)));
        assert_eq!(state.metadata_seen, 2);
        assert_eq!(state.first_metadata.as_deref(), Some("F/2.8, SS 240, ISO 100"));
        assert!(state.metadata_printable);
        assert_eq!(src.peek_u32().unwrap(), 2);
    }

    #[test]
    fn binary_metadata_clears_latch_for_good() {
        let mut bytes = metadata_block(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        bytes.extend(metadata_block(b"late text"));
        let mut src = cursor(bytes);
        let mut state = RunState::default();

        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::NotAuxiliary);
        assert_eq!(src.offset(), 0);
        assert!(!state.metadata_printable);

        src.seek_to(15).unwrap();
        assert_eq!(AuxiliaryBlockSkipper.check(&mut src, &mut state).unwrap(), AuxOutcome::NotAuxiliary);
        assert_eq!(state.metadata_seen, 0);
    }
}
