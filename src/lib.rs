#![deny(unsafe_code)]
//! Repair engine for camera recordings whose container framing was damaged.
//!
//! Cameras of this family write `ftyp`/`moov`/`mdat` files whose `moov` atom
//! is often missing after a power loss, or whose length-prefixed H.264/H.265
//! bitstream ends up detached from any container. This crate classifies which
//! of five damage patterns a file shows, then rebuilds just enough framing
//! to make the payload playable again: either a corrected `ftyp` header
//! followed by the original bytes, or an Annex-B elementary stream primed with
//! a [`RepairProfile`]'s parameter sets.
//!
//! ```no_run
//! use mp4rescue::{ProfileRegistry, Repairer};
//! # fn main() -> mp4rescue::Result<()> {
//! let input = std::fs::File::open("DJI_0001.MOV")?;
//! let mut output = std::io::BufWriter::new(std::fs::File::create("DJI_0001-repaired.h264")?);
//!
//! let mut repairer = Repairer::new(input)?;
//! let classification = repairer.classify()?;
//! let profile = classification
//!     .kind()
//!     .profile_family()
//!     .and_then(|family| ProfileRegistry::builtin().lookup(family, 'g'));
//! let report = repairer.run(&mut output, profile)?;
//! println!("wrote {} bytes", report.bytes_written);
//! # Ok(())
//! # }
//! ```

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::convert::TryInto as _;

mod atom;
mod auxiliary;
mod boxes;
mod classify;
mod cursor;
mod nal;
mod profile;
mod profile_data;
mod repair;
mod rewrite;

pub use crate::atom::{Atom, AtomWalker};
pub use crate::auxiliary::{AuxOutcome, AuxiliaryBlockSkipper, RunState};
pub use crate::boxes::{BoxType, FourCC};
pub use crate::classify::{Classification, PatternClassifier, RepairKind};
pub use crate::cursor::ByteCursor;
pub use crate::nal::{
    MAX_NAL_SIZE, NalResynchronizer, NalUnit, NextUnit, ResyncPolicy, StreamEnd, check_for_two,
    check_for_video, looks_like_video_resume,
};
pub use crate::profile::{
    Codec, PARAMETER_SET_SENTINEL, ProfileEntry, ProfileFamily, ProfileRegistry, RepairProfile,
};
pub use crate::repair::{RepairOptions, RepairReport, Repairer, repair};
pub use crate::rewrite::{START_CODE, StreamRewriter};

/// A trait to indicate a type can be infallibly converted to `u64`.
/// This should only be implemented for infallible conversions, so only unsigned types are valid.
pub(crate) trait ToU64 {
    fn to_u64(self) -> u64;
}

/// Statically verify that the platform `usize` can fit within a `u64`.
/// If the size won't fit on the given platform, this will fail at compile time, but if a type
/// which can fail `TryInto<usize>` is used, it may panic.
impl ToU64 for usize {
    fn to_u64(self) -> u64 {
        const _: () = assert!(std::mem::size_of::<usize>() <= std::mem::size_of::<u64>());
        self.try_into().ok().unwrap()
    }
}

#[doc(hidden)]
pub type TryVec<T> = fallible_collections::TryVec<T>;

// Unit payloads go through TryVec. Modules that build them import this to
// shadow std's Vec.
#[allow(dead_code)]
struct Vec;

/// Describes repair failures.
///
/// Only failures that prevent a repair from starting, or structural cases the
/// engine deliberately does not handle, are reported this way. Damage found
/// after the repair has started is recovered from and shows up in the
/// [`RepairReport`] instead.
#[derive(Debug)]
pub enum Error {
    /// No recognizable leading pattern was found before the end of the input.
    NoSaneData(&'static str),
    /// Parse error caused by limited support rather than invalid data.
    Unsupported(&'static str),
    /// Parse error caused by corrupt or malformed data.
    InvalidData(&'static str),
    /// Reflect `std::io::ErrorKind::UnexpectedEof` for short data.
    UnexpectedEOF,
    /// Propagate underlying errors from `std::io`.
    Io(std::io::Error),
    /// Out of memory
    OutOfMemory,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::NoSaneData(s) | Self::Unsupported(s) | Self::InvalidData(s) => s,
            Self::UnexpectedEOF => "EOF",
            Self::Io(err) => return err.fmt(f),
            Self::OutOfMemory => "OOM",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::UnexpectedEOF,
            std::io::ErrorKind::OutOfMemory => Self::OutOfMemory,
            _ => Self::Io(err),
        }
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(_: std::num::TryFromIntError) -> Self {
        Self::Unsupported("integer conversion failed")
    }
}

impl From<fallible_collections::TryReserveError> for Error {
    fn from(_: fallible_collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::InvalidData(_) | Error::NoSaneData(_) => std::io::ErrorKind::InvalidData,
            Error::UnexpectedEOF => std::io::ErrorKind::UnexpectedEof,
            Error::Io(io_err) => return io_err,
            _ => std::io::ErrorKind::Other,
        };
        Self::new(kind, err)
    }
}

/// Result shorthand using our Error enum.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[test]
fn io_eof_maps_to_unexpected_eof() {
    let err: Error = std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into();
    assert!(matches!(err, Error::UnexpectedEOF));
    let back: std::io::Error = Error::NoSaneData("nothing here").into();
    assert_eq!(back.kind(), std::io::ErrorKind::InvalidData);
}
