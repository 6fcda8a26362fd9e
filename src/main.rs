// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use mp4rescue::{Error, ProfileFamily, ProfileRegistry, RepairKind, RepairOptions, RepairProfile, Repairer, Result};

const REPAIRED_SUFFIX: &str = "-repaired";

/// Repair camera video files whose container metadata was lost
///
/// Files that still hold a complete 'ftyp' inside their media data are
/// rebuilt as .mp4; everything else becomes a raw .h264/.h265 stream that
/// VLC and ffmpeg can play or remux.
#[derive(Parser, Debug)]
#[command(name = "mp4rescue")]
#[command(version, about, long_about)]
struct Cli {
    /// Damaged video file
    #[arg(required_unless_present = "list_formats")]
    input: Option<PathBuf>,

    /// Recording format code (see --list-formats); asked for interactively if needed and absent
    #[arg(short, long, value_name = "CODE")]
    format: Option<char>,

    /// Output file (default: INPUT stem + "-repaired" + extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the format catalogs and exit
    #[arg(long)]
    list_formats: bool,

    /// Largest plausible NAL unit length
    #[arg(long, value_name = "BYTES", value_parser = parse_size)]
    max_nal_size: Option<u32>,

    /// Treat interleaved audio and metadata blocks as corrupt data
    #[arg(long)]
    no_skip_auxiliary: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_formats {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return match list_formats(&mut out, ProfileRegistry::builtin()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let Some(input_path) = cli.input.as_deref() else {
        return Err(Error::InvalidData("no input file given"));
    };
    let input = File::open(input_path).inspect_err(|e| error!("Failed to open {}: {e}", input_path.display()))?;

    let mut options = RepairOptions::default().skip_auxiliary(!cli.no_skip_auxiliary);
    if let Some(max) = cli.max_nal_size {
        options = options.with_max_nal_size(max);
    }

    let mut repairer = Repairer::new(input)?.with_options(options);
    let kind = repairer.classify()?.kind();

    let registry = ProfileRegistry::builtin();
    let profile = match kind.profile_family() {
        Some(family) => Some(select_profile(registry, family, cli.format)?),
        None => None,
    };

    let output_path = match &cli.output {
        Some(path) => path.clone(),
        None => default_output_path(input_path, kind, profile),
    };
    if kind != RepairKind::ContainerLed {
        info!("The result will be an elementary stream (playable by VLC), not a '.mp4' file");
    }
    info!("Writing {}", output_path.display());
    let output = File::create(&output_path).inspect_err(|e| error!("Failed to create {}: {e}", output_path.display()))?;

    let report = repairer.run(BufWriter::new(output), profile)?;
    info!(
        "...done: {} units, {} bytes, {} anomalies, {} auxiliary blocks skipped",
        report.units_written, report.bytes_written, report.anomalies, report.auxiliary_blocks
    );
    Ok(())
}

/// Use `--format` if given, otherwise ask on stdin until a valid code is entered.
fn select_profile(registry: &ProfileRegistry, family: ProfileFamily, code: Option<char>) -> Result<&RepairProfile> {
    if let Some(code) = code {
        return registry.lookup(family, code).ok_or(Error::InvalidData("unknown format code"));
    }

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let stderr = std::io::stderr();
    let mut prompt = stderr.lock();
    loop {
        writeln!(prompt, "We need to know which video format was used. Enter its code, then \"Return\":")?;
        list_family(&mut prompt, registry, family)?;
        writeln!(prompt, "If the result is unplayable, try again with another format.")?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Err(Error::InvalidData("no format code entered"));
        }
        if let Some(profile) = parse_code(&line).and_then(|c| registry.lookup(family, c)) {
            return Ok(profile);
        }
        writeln!(prompt, "Invalid entry!")?;
    }
}

/// First non-blank character of an answer.
fn parse_code(line: &str) -> Option<char> {
    line.trim().chars().next()
}

fn parse_size(s: &str) -> std::result::Result<u32, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn default_output_path(input: &Path, kind: RepairKind, profile: Option<&RepairProfile>) -> PathBuf {
    let extension = if kind.produces_container() {
        "mp4"
    } else {
        profile.map_or("h264", |p| p.codec().extension())
    };
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    input.with_file_name(format!("{stem}{REPAIRED_SUFFIX}.{extension}"))
}

fn list_formats<W: Write>(out: &mut W, registry: &ProfileRegistry) -> Result<()> {
    writeln!(out, "Formats for older files (starting mid-stream):")?;
    list_family(out, registry, ProfileFamily::Legacy)?;
    writeln!(out, "Formats for newer files (previews or interleaved tracks):")?;
    list_family(out, registry, ProfileFamily::Framed)?;
    Ok(())
}

fn list_family<W: Write>(out: &mut W, registry: &ProfileRegistry, family: ProfileFamily) -> Result<()> {
    for entry in registry.entries(family) {
        writeln!(out, "\t{}: {}", entry.code, entry.profile.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        let input = Path::new("/videos/DJI_0042.MOV");
        let named = |kind: RepairKind, profile: Option<&RepairProfile>| default_output_path(input, kind, profile);
        assert_eq!(named(RepairKind::ContainerLed, None), Path::new("/videos/DJI_0042-repaired.mp4"));
        assert_eq!(named(RepairKind::AlreadyFramed, None), Path::new("/videos/DJI_0042-repaired.h264"));
        let hevc = ProfileRegistry::builtin().lookup(ProfileFamily::Framed, 'g');
        assert_eq!(named(RepairKind::NoPreview, hevc), Path::new("/videos/DJI_0042-repaired.h265"));
        let bare = default_output_path(Path::new("clip"), RepairKind::InlineRaw, None);
        assert_eq!(bare, Path::new("clip-repaired.h264"));
    }

    #[test]
    fn answers() {
        assert_eq!(parse_code("  g\n"), Some('g'));
        assert_eq!(parse_code("\r\n"), None);
        assert_eq!(parse_size("0x8fffff").unwrap(), 0x8f_ffff);
        assert_eq!(parse_size("4096").unwrap(), 4096);
    }

    #[test]
    fn format_flag_skips_prompt() {
        let reg = ProfileRegistry::builtin();
        assert!(select_profile(reg, ProfileFamily::Legacy, Some('Q')).is_ok());
        assert!(matches!(select_profile(reg, ProfileFamily::Framed, Some('q')), Err(Error::InvalidData(_))));
    }

    #[test]
    fn catalog_listing() {
        let mut out = Vec::new();
        list_formats(&mut out, ProfileRegistry::builtin()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\tg: 1080p, 30fps"));
        assert!(text.contains("\tj: H.264, 480p, 30fps"));
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from(["mp4rescue", "in.MOV", "-f", "g", "-vv"]).unwrap();
        assert_eq!(cli.format, Some('g'));
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["mp4rescue"]).is_err());
        assert!(Cli::try_parse_from(["mp4rescue", "--list-formats"]).is_ok());
    }
}
