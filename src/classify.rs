// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::{info, warn};
use std::fmt;
use std::io::{Read, Seek};

use crate::atom::AtomWalker;
use crate::auxiliary::fixed_block_size;
use crate::boxes::BoxType;
use crate::cursor::{ByteCursor, be_u32};
use crate::nal::{check_for_two, check_for_video};
use crate::profile::ProfileFamily;
use crate::{Error, Result};

/// JFIF start-of-image + APP0 marker.
const JFIF_MARKER: u32 = 0xFFD8_FFE0;
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Which damage pattern a file shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairKind {
    /// A complete `ftyp` is nested in `mdat`; the file can be re-headed.
    ContainerLed,
    /// The file starts mid-stream with length-prefixed units.
    InlineRaw,
    /// New-style file whose `mdat` starts with JPEG previews or interleaved track data.
    InlineWithPreview,
    /// Length-prefixed stream that already carries its own SPS.
    AlreadyFramed,
    /// New-style file with a framed stream somewhere inside `mdat`.
    NoPreview,
}

impl RepairKind {
    /// Which catalog the parameter sets for this kind come from.
    pub fn profile_family(self) -> Option<ProfileFamily> {
        match self {
            Self::InlineRaw => Some(ProfileFamily::Legacy),
            Self::InlineWithPreview | Self::NoPreview => Some(ProfileFamily::Framed),
            Self::ContainerLed | Self::AlreadyFramed => None,
        }
    }

    /// Whether the output is a container rather than an elementary stream.
    pub fn produces_container(self) -> bool {
        self == Self::ContainerLed
    }
}

impl fmt::Display for RepairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ContainerLed => "container-led",
            Self::InlineRaw => "inline elementary stream (raw)",
            Self::InlineWithPreview => "inline elementary stream (with preview)",
            Self::AlreadyFramed => "elementary stream (already framed)",
            Self::NoPreview => "elementary stream (no preview)",
        })
    }
}

/// A [`RepairKind`] together with what its strategy needs from the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `ftyp_size` is the total size of the innermost recognized `ftyp`.
    ContainerLed { ftyp_size: u32 },
    /// `lead` holds the 2-byte first unit and the top of the next length.
    InlineRaw { lead: u32 },
    InlineWithPreview,
    AlreadyFramed,
    NoPreview,
}

impl Classification {
    pub fn kind(&self) -> RepairKind {
        match self {
            Self::ContainerLed { .. } => RepairKind::ContainerLed,
            Self::InlineRaw { .. } => RepairKind::InlineRaw,
            Self::InlineWithPreview => RepairKind::InlineWithPreview,
            Self::AlreadyFramed => RepairKind::AlreadyFramed,
            Self::NoPreview => RepairKind::NoPreview,
        }
    }
}

/// Decides which repair strategy applies by looking at the start of the input.
///
/// On success the cursor is left where the chosen strategy must begin.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternClassifier {
    walker: AtomWalker,
}

impl PatternClassifier {
    pub fn classify<R: Read + Seek>(&self, src: &mut ByteCursor<R>) -> Result<Classification> {
        let Some((mut first4, mut next4)) = read_window(src)? else {
            return Err(Error::NoSaneData("unable to read the start of the file"));
        };
        let mut at_start = true;

        loop {
            let here = src.offset() - 8;

            if next4 == u32::from(BoxType::FileTypeBox) || next4 == u32::from(BoxType::IsoBrand) {
                if at_start {
                    info!("Saw initial 'ftyp'");
                } else {
                    info!("Found 'ftyp' at offset 0x{here:x}");
                }
                if (8..=0xFF).contains(&first4) {
                    src.skip(u64::from(first4 - 8))?;
                } else {
                    warn!("Ignoring implausible 'ftyp' size 0x{first4:x}");
                }
                return self.classify_container(src);
            }

            if check_for_two(first4, next4) {
                if !at_start {
                    info!("Found 0x00000002 at offset 0x{here:x}");
                }
                return Ok(Classification::InlineRaw { lead: next4 });
            }

            if first4 == 0x0000_0000 || first4 == 0xFFFF_FFFF {
                if at_start {
                    info!("Skipping initial junk 0x{first4:08X} bytes at the start of the file...");
                    at_start = false;
                }
                first4 = next4;
                let Some(word) = optional(be_u32(src))? else {
                    return Err(Error::NoSaneData("file contains nothing but zeros or 0xFF"));
                };
                next4 = word;
                continue;
            }

            if at_start {
                info!("Didn't see an initial 'ftyp' atom, or 0x00000002. Looking for data that we understand...");
                at_start = false;
            }
            let Some(b) = src.next_byte()? else {
                return Err(Error::NoSaneData("unable to find sane initial data"));
            };
            first4 = (first4 << 8) | (next4 >> 24);
            next4 = (next4 << 8) | u32::from(b);
        }
    }

    /// Continue after an initial `ftyp`: walk to `mdat` and look at what it holds.
    fn classify_container<R: Read + Seek>(&self, src: &mut ByteCursor<R>) -> Result<Classification> {
        if self.walker.walk_to_media_data(src)?.is_some() {
            if let Some(ftyp) = self.walker.try_atom(src, BoxType::FileTypeBox)? {
                let ftyp = self.walker.skip_nested_repeats(src, ftyp)?;
                info!("Saw a 'ftyp' within the 'mdat' data. We can repair this file.");
                return Ok(Classification::ContainerLed { ftyp_size: ftyp.declared_size });
            }
            info!("Didn't see a 'ftyp' atom inside the 'mdat' data");

            match src.peek_u32() {
                Ok(word) if word == u32::from(BoxType::PreviewBox) || word == JFIF_MARKER => {
                    if word == JFIF_MARKER {
                        info!("Saw 'JFIF' header");
                    } else {
                        info!("Saw 'mijd'");
                    }
                    src.skip(4)?;
                    self.skip_previews(src)?;
                    // Sometimes the movie data starts with its own 'mdat' header.
                    if self.walker.try_atom(src, BoxType::MediaDataBox)?.is_some() {
                        info!("Saw 'mdat'");
                    }
                    return Ok(Classification::InlineWithPreview);
                },
                Ok(word) if fixed_block_size(word).is_some() => {
                    info!("'mdat' starts with interleaved track data (0x{word:08x})");
                    return Ok(Classification::InlineWithPreview);
                },
                Ok(_) | Err(Error::UnexpectedEOF) => {},
                Err(e) => return Err(e),
            }
            return self.scan_for_video(src, Classification::NoPreview);
        }
        self.scan_for_video(src, Classification::AlreadyFramed)
    }

    /// Skip JPEG previews: everything up to an end-of-image marker that is
    /// not directly followed by another start-of-image.
    fn skip_previews<R: Read + Seek>(&self, src: &mut ByteCursor<R>) -> Result<()> {
        info!("Skipping past JPEG previews...");
        let mut prev = 0u8;
        loop {
            let Some(b) = src.next_byte()? else {
                return Err(Error::NoSaneData("didn't see end of JPEG previews"));
            };
            if [prev, b] != JPEG_EOI {
                prev = b;
                continue;
            }
            match src.read_array::<2>() {
                Ok(JPEG_SOI) => prev = 0,
                Ok(_) => {
                    src.seek_relative(-2)?;
                    info!("Found movie data at offset 0x{:x}", src.offset());
                    return Ok(());
                },
                Err(Error::UnexpectedEOF) => return Err(Error::NoSaneData("didn't see end of JPEG previews")),
                Err(e) => return Err(e),
            }
        }
    }

    /// Slide over the input looking for the inline-raw signature or an
    /// embedded SPS. An SPS yields `framed`, with the cursor back on its
    /// length field.
    fn scan_for_video<R: Read + Seek>(
        &self,
        src: &mut ByteCursor<R>,
        framed: Classification,
    ) -> Result<Classification> {
        const NO_VIDEO: Error = Error::NoSaneData("didn't see any obvious video data");

        info!("Looking for video data...");
        let Some((mut first4, mut next4)) = read_window(src)? else { return Err(NO_VIDEO) };
        loop {
            if check_for_video(first4, next4) {
                let at = src.offset() - 8;
                if check_for_two(first4, next4) {
                    info!("Found 0x00000002 at offset 0x{at:x}");
                    return Ok(Classification::InlineRaw { lead: next4 });
                }
                info!("Found apparent H.264 SPS (length {first4}) at offset 0x{at:x}");
                src.seek_relative(-8)?;
                return Ok(framed);
            }
            let Some(b) = src.next_byte()? else { return Err(NO_VIDEO) };
            first4 = (first4 << 8) | (next4 >> 24);
            next4 = (next4 << 8) | u32::from(b);
        }
    }
}

/// Map a short read to `None`.
fn optional<T>(read: Result<T>) -> Result<Option<T>> {
    match read {
        Ok(value) => Ok(Some(value)),
        Err(Error::UnexpectedEOF) => Ok(None),
        Err(e) => Err(e),
    }
}

fn read_window<R: Read + Seek>(src: &mut ByteCursor<R>) -> Result<Option<(u32, u32)>> {
    let Some(first4) = optional(be_u32(src))? else { return Ok(None) };
    Ok(optional(be_u32(src))?.map(|next4| (first4, next4)))
}
