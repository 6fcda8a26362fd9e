// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::{debug, info, warn};
use std::io::{Read, Seek};

use crate::boxes::{BoxType, FourCC};
use crate::cursor::{ByteCursor, be_u32};
use crate::{Error, Result};

/// A container atom recognized at the cursor.
///
/// Atoms are only checked for their tag and a sane size; their content is
/// never parsed. See ISO 14496-12:2015 § 4.2 for the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    pub name: BoxType,
    pub declared_size: u32,
    /// Offset of the first byte after the 8-byte header.
    pub payload_offset: u64,
}

impl Atom {
    /// 4-byte size + 4-byte type
    pub const HEADER_SIZE: u32 = 8;

    /// Bytes left to skip to reach the end of the atom.
    ///
    /// Always zero for `mdat`, whose size field is not trusted.
    pub fn remaining(&self) -> u32 {
        if self.name == BoxType::MediaDataBox {
            0
        } else {
            self.declared_size.saturating_sub(Self::HEADER_SIZE)
        }
    }
}

/// Recognizes and skips the atoms found at the front of a damaged file.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomWalker;

impl AtomWalker {
    /// Try to read an atom header tagged `expected` at the cursor.
    ///
    /// On a tag mismatch, an implausible size, or a short read, the cursor is
    /// restored and `None` is returned. An extended (64-bit) size is fatal.
    pub fn try_atom<R: Read + Seek>(&self, src: &mut ByteCursor<R>, expected: BoxType) -> Result<Option<Atom>> {
        let start = src.offset();
        match read_header(src, expected) {
            Ok(Some(atom)) => Ok(Some(atom)),
            Ok(None) | Err(Error::UnexpectedEOF) => {
                src.seek_to(start)?;
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }

    /// Try an atom and, if found, skip its remaining content.
    pub fn skip_atom<R: Read + Seek>(&self, src: &mut ByteCursor<R>, expected: BoxType) -> Result<Option<Atom>> {
        let Some(atom) = self.try_atom(src, expected)? else {
            return Ok(None);
        };
        src.skip(u64::from(atom.remaining()))?;
        Ok(Some(atom))
    }

    /// Walk the optional `moov` and `free`/`wide` atoms, then look for `mdat`.
    ///
    /// Missing atoms are not errors; the walk is best effort. Returns the
    /// `mdat` atom if one was found, leaving the cursor at its payload.
    pub fn walk_to_media_data<R: Read + Seek>(&self, src: &mut ByteCursor<R>) -> Result<Option<Atom>> {
        match self.try_atom(src, BoxType::MovieBox)? {
            Some(moov) => {
                info!("Saw 'moov' (size {} == 0x{:08x})", moov.declared_size, moov.declared_size);
                src.skip(u64::from(moov.remaining()))
                    .inspect_err(|_| warn!("Input was truncated before end of 'moov'"))?;
            },
            // It may be 'mdat' instead.
            None => info!("Didn't see a 'moov' atom"),
        }

        if let Some(free) = self.try_atom(src, BoxType::FreeSpaceBox)? {
            info!("Saw 'free' (size {} == 0x{:08x})", free.declared_size, free.declared_size);
            src.skip(u64::from(free.remaining()))?;
        } else if let Some(wide) = self.try_atom(src, BoxType::WideBox)? {
            info!("Saw 'wide'");
            if wide.remaining() > 0 {
                warn!("'wide' atom size was {} (>8)", wide.declared_size);
                src.skip(u64::from(wide.remaining()))?;
            }
        }

        let mdat = self.try_atom(src, BoxType::MediaDataBox)?;
        match &mdat {
            Some(atom) => info!("Saw 'mdat' at offset 0x{:x}", atom.payload_offset - u64::from(Atom::HEADER_SIZE)),
            None => info!("Didn't see a 'mdat' atom"),
        }
        Ok(mdat)
    }

    /// Skip repeated `ftyp`/`moov`/`mdat` triples nested at the start of `mdat`.
    ///
    /// Called with the cursor just after an `ftyp` header found inside `mdat`.
    /// Each further `[ftyp body] moov [moov body] mdat ftyp` sequence is
    /// skipped; when the pattern breaks, the cursor goes back to just after
    /// the last recognized `ftyp` header. Returns the total size of that
    /// `ftyp`.
    pub fn skip_nested_repeats<R: Read + Seek>(&self, src: &mut ByteCursor<R>, ftyp: Atom) -> Result<Atom> {
        let mut ftyp = ftyp;
        loop {
            let mark = src.offset();
            match self.nested_repeat(src, &ftyp) {
                Ok(Some(next)) => {
                    info!("Saw nested 'ftyp' within 'mdat' at offset 0x{:x}", next.payload_offset - 8);
                    ftyp = next;
                },
                Ok(None) | Err(Error::UnexpectedEOF) => {
                    src.seek_to(mark)?;
                    return Ok(ftyp);
                },
                Err(e) => return Err(e),
            }
        }
    }

    fn nested_repeat<R: Read + Seek>(&self, src: &mut ByteCursor<R>, ftyp: &Atom) -> Result<Option<Atom>> {
        src.skip(u64::from(ftyp.remaining()))?;
        if self.skip_atom(src, BoxType::MovieBox)?.is_none() {
            return Ok(None);
        }
        if self.try_atom(src, BoxType::MediaDataBox)?.is_none() {
            return Ok(None);
        }
        self.try_atom(src, BoxType::FileTypeBox)
    }
}

/// Read an 8-byte atom header and check it against `expected`.
fn read_header<R: Read + Seek>(src: &mut ByteCursor<R>, expected: BoxType) -> Result<Option<Atom>> {
    let size = be_u32(src)?;
    let name = BoxType::from(be_u32(src)?);
    if name != expected {
        return Ok(None);
    }
    let atom = Atom { name, declared_size: size, payload_offset: src.offset() };
    // The 'mdat' size is unreliable in these files and never used.
    if name == BoxType::MediaDataBox {
        return Ok(Some(atom));
    }
    if size == 1 {
        warn!("Saw an extended (64-bit) size for '{}'", FourCC::from(name));
        return Err(Error::Unsupported("extended (64-bit) atom size"));
    }
    if size < Atom::HEADER_SIZE {
        debug!("malformed size {size} for '{}'", FourCC::from(name));
        return Ok(None);
    }
    Ok(Some(atom))
}
