// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, warn};
use std::io::{Read, Seek, Write};

use crate::boxes::BoxType;
use crate::cursor::ByteCursor;
use crate::nal::NalUnit;
use crate::profile::{PARAMETER_SET_SENTINEL, RepairProfile};
use crate::Result;

/// Annex-B start code written in place of every length field.
pub const START_CODE: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// Writes the repaired output incrementally.
///
/// Counts what it writes so the caller can report it; parameter sets count
/// towards `bytes_written` but not towards `units_written`.
#[derive(Debug)]
pub struct StreamRewriter<W> {
    out: W,
    bytes_written: u64,
    units_written: u64,
}

impl<W: Write> StreamRewriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, bytes_written: 0, units_written: 0 }
    }

    /// Emit the profile's parameter sets, each after a start code.
    pub fn begin(&mut self, profile: Option<&RepairProfile>) -> Result<()> {
        let Some(profile) = profile else { return Ok(()) };
        debug!("writing {} parameter sets for {}", profile.codec(), profile.label());
        for blob in profile.parameter_sets() {
            let end = blob.iter().position(|&b| b == PARAMETER_SET_SENTINEL).unwrap_or_else(|| {
                warn!("parameter set for '{}' has no 0x{PARAMETER_SET_SENTINEL:02X} terminator", profile.label());
                blob.len()
            });
            self.emit(&START_CODE)?;
            self.emit(&blob[..end])?;
        }
        Ok(())
    }

    pub fn write_unit(&mut self, unit: &NalUnit) -> Result<()> {
        self.write_raw_unit(&unit.payload)
    }

    /// Start code + `payload`, for units that were not read through a length field.
    pub fn write_raw_unit(&mut self, payload: &[u8]) -> Result<()> {
        self.emit(&START_CODE)?;
        self.emit(payload)?;
        self.units_written += 1;
        Ok(())
    }

    /// `[ftyp_size]['ftyp']`, the header the damaged file lost.
    pub fn write_container_header(&mut self, ftyp_size: u32) -> Result<()> {
        self.out.write_u32::<BigEndian>(ftyp_size)?;
        self.out.write_u32::<BigEndian>(BoxType::FileTypeBox.into())?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Copy the rest of the input verbatim.
    pub fn copy_remainder<R: Read + Seek>(&mut self, src: &mut ByteCursor<R>) -> Result<u64> {
        let copied = src.copy_to_end(&mut self.out)?;
        self.bytes_written += copied;
        Ok(copied)
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn units_written(&self) -> u64 {
        self.units_written
    }

    /// Flush and return `(bytes_written, units_written)`.
    pub fn end(mut self) -> Result<(u64, u64)> {
        self.out.flush()?;
        Ok((self.bytes_written, self.units_written))
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }
}
