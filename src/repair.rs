// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::{info, warn};
use std::io::{Read, Seek, Write};

use crate::auxiliary::RunState;
use crate::classify::{Classification, PatternClassifier, RepairKind};
use crate::cursor::ByteCursor;
use crate::nal::{MAX_NAL_SIZE, NalResynchronizer, NextUnit, ResyncPolicy, StreamEnd};
use crate::profile::RepairProfile;
use crate::rewrite::StreamRewriter;
use crate::Result;

/// Tunables for a repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOptions {
    /// Largest length field accepted as a NAL unit (inclusive).
    /// Default: 0x008FFFFF
    pub max_nal_size: u32,

    /// Skip interleaved audio and metadata blocks in layouts that have them.
    /// Default: true
    pub skip_auxiliary: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self { max_nal_size: MAX_NAL_SIZE, skip_auxiliary: true }
    }
}

impl RepairOptions {
    /// Set the largest plausible NAL length
    pub fn with_max_nal_size(mut self, max: u32) -> Self {
        self.max_nal_size = max;
        self
    }

    /// Enable or disable auxiliary block skipping
    pub fn skip_auxiliary(mut self, skip: bool) -> Self {
        self.skip_auxiliary = skip;
        self
    }
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub kind: RepairKind,
    pub bytes_written: u64,
    /// Recovered units; parameter sets are not counted.
    pub units_written: u64,
    pub end: StreamEnd,
    /// Implausible length fields that needed resynchronization.
    pub anomalies: u32,
    pub auxiliary_blocks: u32,
    pub metadata_blocks: u32,
    /// First line of the first metadata block, if any was seen.
    pub first_metadata: Option<std::string::String>,
}

/// Drives one repair: classify once, then a single forward pass.
///
/// Nothing is written until classification has succeeded, so a file that
/// can't be repaired never produces output.
pub struct Repairer<R> {
    src: ByteCursor<R>,
    options: RepairOptions,
    classifier: PatternClassifier,
    classification: Option<Classification>,
    state: RunState,
}

impl<R: Read + Seek> Repairer<R> {
    pub fn new(input: R) -> Result<Self> {
        Ok(Self {
            src: ByteCursor::new(input)?,
            options: RepairOptions::default(),
            classifier: PatternClassifier::default(),
            classification: None,
            state: RunState::default(),
        })
    }

    pub fn with_options(mut self, options: RepairOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RepairOptions {
        &self.options
    }

    /// Classify the input. Later calls return the first result.
    pub fn classify(&mut self) -> Result<Classification> {
        if let Some(classification) = self.classification {
            return Ok(classification);
        }
        info!("Input is {} bytes", self.src.len());
        let classification = self.classifier.classify(&mut self.src)?;
        info!("Repair pattern: {}", classification.kind());
        self.classification = Some(classification);
        Ok(classification)
    }

    /// Write the repaired stream to `out`.
    ///
    /// `profile` supplies the parameter sets for kinds that need them (see
    /// [`RepairKind::profile_family`]); it is ignored for the others.
    pub fn run<W: Write>(mut self, out: W, profile: Option<&RepairProfile>) -> Result<RepairReport> {
        let classification = self.classify()?;
        let kind = classification.kind();
        let mut writer = StreamRewriter::new(out);

        let end = match classification {
            Classification::ContainerLed { ftyp_size } => {
                writer.write_container_header(ftyp_size)?;
                writer.copy_remainder(&mut self.src)?;
                StreamEnd::Clean
            },
            Classification::InlineRaw { lead } => {
                self.begin(&mut writer, kind, profile)?;
                let nal = self.resynchronizer(kind);
                let [b0, b1, _, _] = lead.to_be_bytes();
                writer.write_raw_unit(&[b0, b1])?;
                match nal.first_unit_from_lead(&mut self.src, lead)? {
                    NextUnit::Unit(unit) => {
                        writer.write_unit(&unit)?;
                        self.pump(&nal, &mut writer)?
                    },
                    NextUnit::End(end) => end,
                }
            },
            Classification::InlineWithPreview | Classification::AlreadyFramed | Classification::NoPreview => {
                self.begin(&mut writer, kind, profile)?;
                let nal = self.resynchronizer(kind);
                self.pump(&nal, &mut writer)?
            },
        };

        match end {
            StreamEnd::Clean => {},
            StreamEnd::Truncated { offset } => {
                warn!("Input was truncated at offset 0x{offset:x}; the partial unit was dropped")
            },
            StreamEnd::LostSync { offset } => warn!("Input ended at offset 0x{offset:x} before sane data resumed"),
        }

        let (bytes_written, units_written) = writer.end()?;
        info!("Repaired file has {units_written} units, {bytes_written} bytes");
        let RunState { metadata_seen, first_metadata, auxiliary_blocks, anomalies, .. } = self.state;
        Ok(RepairReport {
            kind,
            bytes_written,
            units_written,
            end,
            anomalies,
            auxiliary_blocks,
            metadata_blocks: metadata_seen,
            first_metadata,
        })
    }

    fn begin<W: Write>(
        &self,
        writer: &mut StreamRewriter<W>,
        kind: RepairKind,
        profile: Option<&RepairProfile>,
    ) -> Result<()> {
        if let Some(family) = kind.profile_family() {
            if profile.is_none() {
                warn!("No {family} profile given; the output will lack parameter sets");
            }
            writer.begin(profile)?;
        }
        Ok(())
    }

    fn resynchronizer(&self, kind: RepairKind) -> NalResynchronizer {
        let (policy, aux) = match kind {
            RepairKind::InlineRaw => (ResyncPolicy::LengthTwoSentinel, false),
            RepairKind::InlineWithPreview => (ResyncPolicy::LengthTwoSentinel, true),
            RepairKind::AlreadyFramed | RepairKind::NoPreview | RepairKind::ContainerLed => {
                (ResyncPolicy::VideoResume, true)
            },
        };
        NalResynchronizer::new(policy)
            .with_max_nal_size(self.options.max_nal_size)
            .with_auxiliary_skipping(aux && self.options.skip_auxiliary)
    }

    fn pump<W: Write>(&mut self, nal: &NalResynchronizer, writer: &mut StreamRewriter<W>) -> Result<StreamEnd> {
        loop {
            match nal.next_unit(&mut self.src, &mut self.state)? {
                NextUnit::Unit(unit) => writer.write_unit(&unit)?,
                NextUnit::End(end) => return Ok(end),
            }
        }
    }
}

/// Classify `input` and write its repaired form to `output`.
pub fn repair<R: Read + Seek, W: Write>(input: R, output: W, profile: Option<&RepairProfile>) -> Result<RepairReport> {
    Repairer::new(input)?.run(output, profile)
}
