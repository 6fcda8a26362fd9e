// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::{info, warn};
use std::io::{Read, Seek};

use crate::auxiliary::{AuxOutcome, AuxiliaryBlockSkipper, RunState};
use crate::cursor::{ByteCursor, be_u32};
use crate::{Error, Result, TryVec};
#[allow(unused_imports)]
use crate::Vec;

/// Largest NAL length accepted without suspicion (inclusive).
pub const MAX_NAL_SIZE: u32 = 0x008F_FFFF;

/// Length word that marks the return of sane data in this file family: the
/// cameras start every frame with a 2-byte access unit delimiter.
const RESUME_SENTINEL: u32 = 0x0000_0002;

/// One recovered video unit. Its length field is not part of the output.
#[derive(Debug)]
pub struct NalUnit {
    pub declared_length: u32,
    pub payload: TryVec<u8>,
}

/// How the pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The input ended on a unit boundary.
    Clean,
    /// The input ended inside a length field, unit or auxiliary block.
    Truncated { offset: u64 },
    /// The input ended while scanning for sane data after an anomaly.
    LostSync { offset: u64 },
}

#[derive(Debug)]
pub enum NextUnit {
    Unit(NalUnit),
    End(StreamEnd),
}

/// What to scan for after an implausible length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncPolicy {
    /// Shift bytes into the length until it reads exactly 2.
    LengthTwoSentinel,
    /// Slide a window until it looks like the start of a video unit.
    VideoResume,
}

/// The start of the file is mid-stream: a length already cut down to its
/// final two bytes (`2`), then the 2-byte unit, then the top of a new length.
///
/// `next4` must start with two non-zero bytes followed by a zero byte.
pub fn check_for_two(first4: u32, next4: u32) -> bool {
    first4 == RESUME_SENTINEL
        && (next4 & 0xFF00_0000) != 0
        && (next4 & 0x00FF_0000) != 0
        && (next4 & 0x0000_FF00) == 0
}

/// Wider version of [`check_for_two`] that also accepts what looks like a
/// length-prefixed H.264 SPS.
pub fn check_for_video(first4: u32, next4: u32) -> bool {
    if (first4 & 0xFFFF_FF00) != 0 {
        return false;
    }
    check_for_two(first4, next4)
        || ((next4 & 0xFF00_0000) == 0x2700_0000 && first4 > 25 && first4 < 60)
        || ((next4 & 0xFF00_0000) == 0x6700_0000 && first4 > 10 && first4 < 40)
}

/// Whether `(first4, next4)` plausibly is a length followed by the header of
/// a video unit.
pub fn looks_like_video_resume(first4: u32, next4: u32) -> bool {
    if check_for_video(first4, next4) {
        return true;
    }
    if first4 == 0 || first4 > MAX_NAL_SIZE {
        return false;
    }
    let [b0, b1, _, _] = next4.to_be_bytes();
    let h264 = first4 < 0x0100_0000
        && matches!(
            b0,
            0x06 | 0x01 | 0x21 | 0x41 | 0x61 | 0x25 | 0x45 | 0x65 | 0x27 | 0x47 | 0x67 | 0x28 | 0x48 | 0x68
        );
    // H.265 headers are two bytes; nuh_layer_id 0 and temporal id 1.
    let h265 = b1 == 0x01 && matches!(b0, 0x40 | 0x42 | 0x44 | 0x4e | 0x50 | 0x26 | 0x28 | 0x02 | 0x00);
    h264 || h265
}

/// Pulls length-prefixed units out of a damaged stream.
#[derive(Debug, Clone, Copy)]
pub struct NalResynchronizer {
    policy: ResyncPolicy,
    max_nal_size: u32,
    skip_auxiliary: bool,
}

impl NalResynchronizer {
    pub fn new(policy: ResyncPolicy) -> Self {
        Self { policy, max_nal_size: MAX_NAL_SIZE, skip_auxiliary: false }
    }

    pub fn with_max_nal_size(mut self, max: u32) -> Self {
        self.max_nal_size = max;
        self
    }

    /// Check for interleaved auxiliary blocks before each length field.
    pub fn with_auxiliary_skipping(mut self, skip: bool) -> Self {
        self.skip_auxiliary = skip;
        self
    }

    pub fn policy(&self) -> ResyncPolicy {
        self.policy
    }

    fn is_plausible(&self, len: u32) -> bool {
        len > 0 && len <= self.max_nal_size
    }

    /// Read the next unit, recovering from implausible length fields.
    pub fn next_unit<R: Read + Seek>(&self, src: &mut ByteCursor<R>, state: &mut RunState) -> Result<NextUnit> {
        loop {
            if src.is_eof() {
                return Ok(NextUnit::End(StreamEnd::Clean));
            }

            if self.skip_auxiliary {
                match AuxiliaryBlockSkipper.check(src, state)? {
                    AuxOutcome::Skipped(_) => continue,
                    AuxOutcome::Truncated => return Ok(NextUnit::End(StreamEnd::Truncated { offset: src.offset() })),
                    AuxOutcome::NotAuxiliary => {},
                }
            }

            let len = match be_u32(src) {
                Ok(len) => len,
                Err(Error::UnexpectedEOF) => return Ok(NextUnit::End(StreamEnd::Truncated { offset: src.offset() })),
                Err(e) => return Err(e),
            };

            let len = if self.is_plausible(len) {
                len
            } else {
                state.anomalies += 1;
                let at = src.offset() - 4;
                warn!(
                    "Skipping over anomalous bytes (NAL size 0x{len:X}), starting at offset 0x{at:x} ({} MBytes)",
                    at / 1_000_000
                );
                match self.resync(src, len)? {
                    Some(len) => len,
                    None => return Ok(NextUnit::End(StreamEnd::LostSync { offset: src.offset() })),
                }
            };

            if self.policy == ResyncPolicy::VideoResume && !self.is_plausible(len) {
                // The window was rewound; read the length again.
                continue;
            }

            return self.read_unit(src, len);
        }
    }

    /// Build the first unit of an inline-raw file, whose length is spread
    /// over the low half of the lead word and two more bytes.
    pub fn first_unit_from_lead<R: Read + Seek>(&self, src: &mut ByteCursor<R>, lead: u32) -> Result<NextUnit> {
        let [b0, b1] = match src.read_array::<2>() {
            Ok(b) => b,
            Err(Error::UnexpectedEOF) => return Ok(NextUnit::End(StreamEnd::Truncated { offset: src.offset() })),
            Err(e) => return Err(e),
        };
        let len = ((lead & 0xFFFF) << 16) | (u32::from(b0) << 8) | u32::from(b1);
        self.read_unit(src, len)
    }

    fn read_unit<R: Read + Seek>(&self, src: &mut ByteCursor<R>, len: u32) -> Result<NextUnit> {
        let start = src.offset();
        match src.read_payload(len) {
            Ok(payload) => Ok(NextUnit::Unit(NalUnit { declared_length: len, payload })),
            Err(Error::UnexpectedEOF) => {
                warn!("input ends inside a {len}-byte unit at 0x{start:x}");
                Ok(NextUnit::End(StreamEnd::Truncated { offset: start }))
            },
            Err(e) => Err(e),
        }
    }

    /// Scan past corrupt bytes. `Ok(None)` means the input ended first.
    ///
    /// For [`ResyncPolicy::LengthTwoSentinel`] the returned length is the
    /// sentinel and the cursor sits right after it. For
    /// [`ResyncPolicy::VideoResume`] the cursor is rewound to the plausible
    /// length field and 0 is returned so the caller reads it again.
    fn resync<R: Read + Seek>(&self, src: &mut ByteCursor<R>, bad_len: u32) -> Result<Option<u32>> {
        match self.policy {
            ResyncPolicy::LengthTwoSentinel => {
                let mut acc = bad_len;
                while acc != RESUME_SENTINEL {
                    let Some(b) = src.next_byte()? else { return Ok(None) };
                    acc = (acc << 8) | u32::from(b);
                }
                log_resume(src.offset() - 4);
                Ok(Some(acc))
            },
            ResyncPolicy::VideoResume => {
                let mut first4 = bad_len;
                let mut next4 = match be_u32(src) {
                    Ok(w) => w,
                    Err(Error::UnexpectedEOF) => return Ok(None),
                    Err(e) => return Err(e),
                };
                while !(self.is_plausible(first4) && looks_like_video_resume(first4, next4)) {
                    let Some(b) = src.next_byte()? else { return Ok(None) };
                    first4 = (first4 << 8) | (next4 >> 24);
                    next4 = (next4 << 8) | u32::from(b);
                }
                src.seek_relative(-8)?;
                log_resume(src.offset());
                Ok(Some(0))
            },
        }
    }
}

fn log_resume(at: u64) {
    info!("...resuming at offset 0x{at:x} ({} MBytes)", at / 1_000_000);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor(bytes: std::vec::Vec<u8>) -> ByteCursor<Cursor<std::vec::Vec<u8>>> {
        ByteCursor::new(Cursor::new(bytes)).unwrap()
    }

    fn unit(len: u32, fill: u8) -> std::vec::Vec<u8> {
        let mut v = len.to_be_bytes().to_vec();
        v.resize(4 + len as usize, fill);
        v
    }

    fn expect_unit(next: NextUnit) -> NalUnit {
        match next {
            NextUnit::Unit(u) => u,
            NextUnit::End(end) => panic!("expected a unit, got {end:?}"),
        }
    }

    #[test]
    fn two_signature() {
        assert!(check_for_two(2, 0xFFFE_0000));
        assert!(check_for_two(2, 0x0910_00ff));
        assert!(!check_for_two(2, 0x0010_0000));
        assert!(!check_for_two(2, 0x0910_0100));
        assert!(!check_for_two(3, 0x0910_0000));
    }

    #[test]
    fn sps_signature() {
        assert!(check_for_video(30, 0x2764_0033));
        assert!(!check_for_video(25, 0x2764_0033));
        assert!(check_for_video(11, 0x6764_001f));
        assert!(!check_for_video(0x100 + 11, 0x6764_001f));
        assert!(check_for_video(2, 0x0910_0000));
    }

    #[test]
    fn resume_predicate() {
        assert!(looks_like_video_resume(0x1234, 0x6588_8400));
        assert!(looks_like_video_resume(0x1234, 0x2601_af00));
        assert!(!looks_like_video_resume(0, 0x6588_8400));
        assert!(!looks_like_video_resume(MAX_NAL_SIZE + 1, 0x6588_8400));
        assert!(!looks_like_video_resume(0x1234, 0xff00_0000));
    }

    #[test]
    fn upper_bound_is_accepted() {
        let mut src = cursor(unit(MAX_NAL_SIZE, 0x11));
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel);
        let mut state = RunState::default();
        let u = expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        assert_eq!(u.declared_length, MAX_NAL_SIZE);
        assert_eq!(u.payload.len(), MAX_NAL_SIZE as usize);
        assert_eq!(state.anomalies, 0);
        assert!(matches!(nal.next_unit(&mut src, &mut state).unwrap(), NextUnit::End(StreamEnd::Clean)));
    }

    #[test]
    fn just_above_bound_triggers_recovery() {
        let mut bytes = (MAX_NAL_SIZE + 1).to_be_bytes().to_vec();
        bytes.extend_from_slice(&[0xaa; 16]);
        bytes.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x10]);
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel);
        let mut state = RunState::default();
        let u = expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        assert_eq!(state.anomalies, 1);
        assert_eq!(&u.payload[..], &[0x09, 0x10]);
    }

    #[test]
    fn eof_during_scan_is_silent() {
        let mut bytes = vec![0, 0, 0, 0];
        bytes.extend_from_slice(&[0x55; 9]);
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel);
        let mut state = RunState::default();
        assert!(matches!(
            nal.next_unit(&mut src, &mut state).unwrap(),
            NextUnit::End(StreamEnd::LostSync { offset: 13 })
        ));
    }

    #[test]
    fn short_unit_is_not_returned() {
        let mut bytes = 10u32.to_be_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel);
        let mut state = RunState::default();
        assert!(matches!(
            nal.next_unit(&mut src, &mut state).unwrap(),
            NextUnit::End(StreamEnd::Truncated { offset: 4 })
        ));
    }

    #[test]
    fn video_resume_rereads_length() {
        let mut bytes = vec![0xff; 7];
        bytes.extend(unit(5, 0));
        bytes[7 + 4] = 0x65;
        bytes.extend(unit(3, 0x41));
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::VideoResume);
        let mut state = RunState::default();
        let u = expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        assert_eq!(state.anomalies, 1);
        assert_eq!(u.declared_length, 5);
        assert_eq!(u.payload[0], 0x65);
        let u = expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        assert_eq!(&u.payload[..], &[0x41; 3]);
    }

    #[test]
    fn auxiliary_blocks_take_precedence() {
        let mut bytes = unit(2, 0x09);
        let mut block = vec![0x01, 0xfe, 0, 0];
        block.resize(0x200, 0);
        bytes.extend(block);
        bytes.extend(unit(3, 0x65));
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel).with_auxiliary_skipping(true);
        let mut state = RunState::default();
        expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        let u = expect_unit(nal.next_unit(&mut src, &mut state).unwrap());
        assert_eq!(&u.payload[..], &[0x65; 3]);
        assert_eq!(state.anomalies, 0);
        assert_eq!(state.auxiliary_blocks, 1);
    }

    #[test]
    fn first_unit_uses_three_byte_length() {
        let mut bytes = vec![0x00, 0x05];
        bytes.extend_from_slice(&[7; 5]);
        let mut src = cursor(bytes);
        let nal = NalResynchronizer::new(ResyncPolicy::LengthTwoSentinel);
        let u = expect_unit(nal.first_unit_from_lead(&mut src, 0xFFFE_0000).unwrap());
        assert_eq!(u.declared_length, 5);
        assert_eq!(src.offset(), 7);
    }
}
