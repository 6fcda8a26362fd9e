// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;
use std::fmt;

use crate::profile_data::CATALOG;

/// Terminates every parameter-set blob in the catalog. Never written out.
pub const PARAMETER_SET_SENTINEL: u8 = 0xFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    H264,
    H265,
}

impl Codec {
    /// File extension conventionally used for an Annex-B stream of this codec.
    pub fn extension(self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::H265 => "h265",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::H264 => "H.264",
            Self::H265 => "H.265",
        })
    }
}

/// Which generation of files a parameter-set catalog applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFamily {
    /// Older cameras whose files start mid-stream (inline-raw).
    Legacy,
    /// Newer cameras that interleave previews and auxiliary tracks in `mdat`.
    Framed,
}

impl fmt::Display for ProfileFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Legacy => "legacy",
            Self::Framed => "framed",
        })
    }
}

/// Codec parameter sets for one recording format.
///
/// Each blob is opaque; it is written up to, not including, the first
/// [`PARAMETER_SET_SENTINEL`] byte. H.265 profiles carry a VPS, which is
/// written before the SPS and PPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairProfile {
    label: Cow<'static, str>,
    sps: Cow<'static, [u8]>,
    pps: Cow<'static, [u8]>,
    vps: Option<Cow<'static, [u8]>>,
}

impl RepairProfile {
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        sps: impl Into<Cow<'static, [u8]>>,
        pps: impl Into<Cow<'static, [u8]>>,
        vps: Option<Cow<'static, [u8]>>,
    ) -> Self {
        Self { label: label.into(), sps: sps.into(), pps: pps.into(), vps }
    }

    pub(crate) const fn builtin(
        label: &'static str,
        sps: &'static [u8],
        pps: &'static [u8],
        vps: Option<&'static [u8]>,
    ) -> Self {
        let vps = match vps {
            Some(vps) => Some(Cow::Borrowed(vps)),
            None => None,
        };
        Self { label: Cow::Borrowed(label), sps: Cow::Borrowed(sps), pps: Cow::Borrowed(pps), vps }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sps(&self) -> &[u8] {
        &self.sps
    }

    pub fn pps(&self) -> &[u8] {
        &self.pps
    }

    pub fn vps(&self) -> Option<&[u8]> {
        self.vps.as_deref()
    }

    pub fn codec(&self) -> Codec {
        if self.vps.is_some() { Codec::H265 } else { Codec::H264 }
    }

    /// Blobs in the order they are written.
    pub fn parameter_sets(&self) -> impl Iterator<Item = &[u8]> {
        [self.vps(), Some(self.sps()), Some(self.pps())].into_iter().flatten()
    }
}

/// One catalog row: a family, the one-character code users type, and the
/// parameter sets it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub family: ProfileFamily,
    pub code: char,
    pub profile: RepairProfile,
}

/// Maps format codes to [`RepairProfile`]s.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    entries: Cow<'static, [ProfileEntry]>,
}

static BUILTIN: ProfileRegistry = ProfileRegistry { entries: Cow::Borrowed(CATALOG) };

impl ProfileRegistry {
    /// The catalog of formats recorded by the supported cameras.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// A registry with caller-supplied entries, e.g. for a format not in the
    /// built-in catalog.
    pub fn from_entries(entries: std::vec::Vec<ProfileEntry>) -> Self {
        Self { entries: Cow::Owned(entries) }
    }

    /// Case-insensitive lookup of a one-character format code.
    pub fn lookup(&self, family: ProfileFamily, code: char) -> Option<&RepairProfile> {
        let code = code.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|e| e.family == family && e.code.to_ascii_lowercase() == code)
            .map(|e| &e.profile)
    }

    /// Entries of one family in catalog order.
    pub fn entries(&self, family: ProfileFamily) -> impl Iterator<Item = &ProfileEntry> {
        self.entries.iter().filter(move |e| e.family == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let reg = ProfileRegistry::builtin();
        let lower = reg.lookup(ProfileFamily::Legacy, 'g').unwrap();
        let upper = reg.lookup(ProfileFamily::Legacy, 'G').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.codec(), Codec::H264);
        assert_eq!(lower.sps()[0], 0x27);
    }

    #[test]
    fn families_have_separate_codes() {
        let reg = ProfileRegistry::builtin();
        assert_eq!(reg.entries(ProfileFamily::Legacy).count(), 27);
        assert_eq!(reg.entries(ProfileFamily::Framed).count(), 20);
        assert!(reg.lookup(ProfileFamily::Legacy, 'q').is_some());
        assert!(reg.lookup(ProfileFamily::Framed, 'q').is_none());
        assert!(reg.lookup(ProfileFamily::Framed, '?').is_none());
    }

    #[test]
    fn codes_are_unique_within_family() {
        let reg = ProfileRegistry::builtin();
        for family in [ProfileFamily::Legacy, ProfileFamily::Framed] {
            let codes: std::vec::Vec<char> = reg.entries(family).map(|e| e.code).collect();
            let mut sorted = codes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), codes.len(), "{family}");
        }
    }

    #[test]
    fn every_blob_is_terminated() {
        for entry in ProfileRegistry::builtin().entries.iter() {
            for blob in entry.profile.parameter_sets() {
                assert!(blob.contains(&PARAMETER_SET_SENTINEL), "{}", entry.profile.label());
            }
        }
    }

    #[test]
    fn vps_selects_hevc() {
        let p = ProfileRegistry::builtin().lookup(ProfileFamily::Framed, '5').unwrap();
        assert_eq!(p.codec(), Codec::H265);
        assert_eq!(p.parameter_sets().count(), 3);
        assert_eq!(Codec::H265.extension(), "h265");
    }

    #[test]
    fn custom_registry() {
        let profile = RepairProfile::new("test", vec![0x67u8, 0xfe], vec![0x68u8, 0xfe], None);
        let entry = ProfileEntry { family: ProfileFamily::Framed, code: 'z', profile };
        let reg = ProfileRegistry::from_entries(vec![entry]);
        assert_eq!(reg.lookup(ProfileFamily::Framed, 'Z').unwrap().label(), "test");
    }
}
