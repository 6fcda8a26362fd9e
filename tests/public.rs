// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
use std::io::Cursor;

use mp4rescue::{
    Classification, Error, ProfileFamily, ProfileRegistry, RepairKind, RepairReport, Repairer, START_CODE, StreamEnd,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::max()).try_init();
}

fn atom(size: u32, tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut v = size.to_be_bytes().to_vec();
    v.extend_from_slice(tag);
    v.extend_from_slice(body);
    v
}

fn unit(payload: &[u8]) -> Vec<u8> {
    let mut v = u32::try_from(payload.len()).unwrap().to_be_bytes().to_vec();
    v.extend_from_slice(payload);
    v
}

fn annex_b(units: &[&[u8]]) -> Vec<u8> {
    units.iter().flat_map(|u| START_CODE.into_iter().chain(u.iter().copied())).collect()
}

/// `ftyp` + `moov` + `mdat` header as the cameras write them.
fn container_head() -> Vec<u8> {
    let mut v = atom(0x18, b"ftyp", b"isom\0\0\0\0isomavc1");
    v.extend(atom(0x10, b"moov", &[0; 8]));
    v.extend(atom(0, b"mdat", &[]));
    v
}

fn aux_block(tag: u8, size: usize) -> Vec<u8> {
    let mut v = vec![tag, 0xfe, 0x12, 0x34];
    v.resize(size, 0x5a);
    v
}

fn run(input: Vec<u8>, family_code: Option<char>) -> (mp4rescue::Result<RepairReport>, Vec<u8>) {
    init_logging();
    let mut out = Vec::new();
    let result = Repairer::new(Cursor::new(input)).and_then(|mut repairer| {
        let kind = repairer.classify()?.kind();
        let profile = match (kind.profile_family(), family_code) {
            (Some(family), Some(code)) => ProfileRegistry::builtin().lookup(family, code),
            _ => None,
        };
        repairer.run(&mut out, profile)
    });
    (result, out)
}

fn trimmed(blob: &[u8]) -> &[u8] {
    let end = blob.iter().position(|&b| b == mp4rescue::PARAMETER_SET_SENTINEL).unwrap();
    &blob[..end]
}

#[test]
fn container_led_is_reheaded() {
    let mut input = container_head();
    let inner = input.len();
    input.extend(atom(0x14, b"ftyp", b"isom\0\0\0\0avc1"));
    input.extend(atom(0x0c, b"moov", &[1, 2, 3, 4]));
    input.extend_from_slice(&[0x77; 64]);

    let (report, out) = run(input.clone(), None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::ContainerLed);
    assert_eq!(report.end, StreamEnd::Clean);
    assert_eq!(out, &input[inner..]);
    assert_eq!(report.bytes_written, out.len() as u64);
}

#[test]
fn container_led_header_size_comes_from_innermost_ftyp() {
    let mut input = container_head();
    input.extend(atom(0x14, b"ftyp", b"isom\0\0\0\0avc1"));
    input.extend(atom(0x08, b"moov", &[]));
    input.extend(atom(0, b"mdat", &[]));
    let innermost = input.len();
    input.extend(atom(0x1c, b"ftyp", b"isom\0\0\0\0isomavc1mp41"));
    input.extend_from_slice(&[0x33; 16]);

    let (report, out) = run(input.clone(), None);
    assert_eq!(report.unwrap().kind, RepairKind::ContainerLed);
    assert_eq!(&out[..8], b"\0\0\0\x1cftyp");
    assert_eq!(out, &input[innermost..]);
}

#[test]
fn inline_raw_end_to_end() {
    let mut input = vec![0x00, 0x00, 0x00, 0x02, 0xFF, 0xFE, 0x00, 0x00, 0x00, 0x64];
    let payload: Vec<u8> = (0..100u8).collect();
    input.extend_from_slice(&payload);

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::InlineRaw);
    assert_eq!(report.units_written, 2);
    assert_eq!(report.end, StreamEnd::Clean);
    assert_eq!(out, annex_b(&[&[0xFF, 0xFE], &payload]));
}

#[test]
fn inline_raw_starts_with_profile_parameter_sets() {
    let mut input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 3, 0x65, 0x88, 0x84];
    input.extend(unit(&[0x41, 0x9a]));

    let (report, out) = run(input, Some('g'));
    report.unwrap();
    let profile = ProfileRegistry::builtin().lookup(ProfileFamily::Legacy, 'g').unwrap();
    let expected = annex_b(&[
        trimmed(profile.sps()),
        trimmed(profile.pps()),
        &[0x09, 0x10],
        &[0x65, 0x88, 0x84],
        &[0x41, 0x9a],
    ]);
    assert_eq!(out, expected);
}

#[test]
fn junk_before_raw_signature_is_skipped() {
    let mut input = vec![0xff; 12];
    input.extend_from_slice(&[0; 8]);
    input.extend_from_slice(&[0x13, 0x37]);
    input.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 1, 0x65]);

    let (report, out) = run(input, None);
    assert_eq!(report.unwrap().kind, RepairKind::InlineRaw);
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0x65]]));
}

#[test]
fn resync_resumes_exactly_at_sentinel() {
    let mut input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 2, 0xaa, 0xbb];
    // Corrupt length, then the stream resumes with a 2-byte unit.
    input.extend_from_slice(&[0, 0, 0, 0]);
    let resume = input.len();
    input.extend_from_slice(&[0, 0, 0, 2, 0xcc, 0xdd]);

    let (report, out) = run(input.clone(), None);
    let report = report.unwrap();
    assert_eq!(report.anomalies, 1);
    let after = &out[out.len() - 6..];
    assert_eq!(&after[..4], &START_CODE);
    assert_eq!(&after[4..], &input[resume + 4..]);
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0xaa, 0xbb], &[0xcc, 0xdd]]));
}

#[test]
fn oversized_length_triggers_recovery() {
    let mut input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 1, 0x65];
    input.extend_from_slice(&0x0090_0000u32.to_be_bytes());
    input.extend_from_slice(&[0x11; 40]);
    input.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x30]);

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.anomalies, 1);
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0x65], &[0x09, 0x30]]));
}

#[test]
fn scan_reaching_end_keeps_written_units() {
    let mut input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 1, 0x65];
    input.extend_from_slice(&[0xff; 30]);

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert!(matches!(report.end, StreamEnd::LostSync { .. }));
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0x65]]));
}

#[test]
fn truncated_final_unit_is_dropped() {
    let mut input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 3, 0xa, 0xb, 0xc];
    input.extend_from_slice(&[0, 0, 0, 10, 1, 2, 3]);

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.end, StreamEnd::Truncated { offset: 17 });
    assert_eq!(report.units_written, 2);
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0xa, 0xb, 0xc]]));
}

#[test]
fn auxiliary_blocks_are_removed() {
    let mut input = container_head();
    input.extend(aux_block(0x01, 0x200));
    input.extend(unit(&[0x65, 1, 2, 3, 4]));
    input.extend(aux_block(0x01, 0x200));
    input.extend(aux_block(0x00, 0x100));
    input.extend(unit(&[0x41, 5, 6]));

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::InlineWithPreview);
    assert_eq!(report.auxiliary_blocks, 3);
    assert_eq!(report.anomalies, 0);
    assert_eq!(out, annex_b(&[&[0x65, 1, 2, 3, 4], &[0x41, 5, 6]]));
}

#[test]
fn interleaved_track_data_resumes_on_length_two() {
    let mut input = container_head();
    input.extend(aux_block(0x01, 0x200));
    input.extend(unit(&[0x65, 0x01, 0x02]));
    input.extend_from_slice(&[0xff; 4]);
    input.extend_from_slice(&[0x11, 0x00, 0x00, 0x00, 0x05, 0x41, 0x22, 0x33]);
    input.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x10]);

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::InlineWithPreview);
    assert_eq!(report.auxiliary_blocks, 1);
    assert_eq!(report.anomalies, 1);
    assert_eq!(out, annex_b(&[&[0x65, 0x01, 0x02], &[0x09, 0x10]]));
}

#[test]
fn metadata_text_is_captured_and_skipped() {
    let mut input = container_head();
    input.extend(aux_block(0x01, 0x200));
    input.extend(unit(&[0x65, 1]));
    let text = b"F/2.8, SS 100, ISO 100, EV 0\r\nGPS (0.0, 0.0, 0)";
    input.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0x10, 0x01]);
    input.extend_from_slice(&u16::try_from(text.len()).unwrap().to_be_bytes());
    input.extend_from_slice(text);
    input.extend(unit(&[0x41, 2]));

    let (report, out) = run(input, Some('f'));
    let report = report.unwrap();
    assert_eq!(report.metadata_blocks, 1);
    assert_eq!(report.first_metadata.as_deref(), Some("F/2.8, SS 100, ISO 100, EV 0"));
    assert!(out.ends_with(&annex_b(&[&[0x65, 1], &[0x41, 2]])));
}

#[test]
fn jpeg_previews_are_skipped() {
    let mut input = container_head();
    input.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0xFF, 0xD9]);
    input.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xDB, 0x01, 0x02, 0xFF, 0xD9]);
    input.extend(unit(&[0x09, 0x10]));
    input.extend(unit(&[0x65, 0xb8, 0x00]));

    let (report, out) = run(input, Some('f'));
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::InlineWithPreview);
    let profile = ProfileRegistry::builtin().lookup(ProfileFamily::Framed, 'f').unwrap();
    let expected = annex_b(&[
        trimmed(profile.sps()),
        trimmed(profile.pps()),
        &[0x09, 0x10],
        &[0x65, 0xb8, 0x00],
    ]);
    assert_eq!(out, expected);
}

#[test]
fn binary_metadata_falls_back_to_recovery() {
    let mut input = container_head();
    input.extend_from_slice(b"mijd");
    input.extend_from_slice(&[0xFF, 0xD8, 0x00, 0x01, 0xFF, 0xD9]);
    input.extend(atom(0, b"mdat", &[]));
    input.extend(unit(&[0x65, 0x01, 0x02]));
    input.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0x10, 0x20, 0x00, 0x05, 1, 2, 3, 4, 5]);
    input.extend_from_slice(&[0, 0, 0, 2, 0x09, 0x10]);
    input.extend(unit(&[0x41, 0x9a, 0x00, 0x01]));

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::InlineWithPreview);
    assert_eq!(report.metadata_blocks, 0);
    assert_eq!(report.anomalies, 1);
    assert_eq!(out, annex_b(&[&[0x65, 0x01, 0x02], &[0x09, 0x10], &[0x41, 0x9a, 0x00, 0x01]]));
}

#[test]
fn already_framed_resumes_at_next_video_unit() {
    let mut input = atom(0x10, b"ftyp", b"isom\0\0\0\0");
    let mut sps = vec![0x27, 0x64, 0x00, 0x28];
    sps.resize(0x1c, 0xac);
    input.extend(unit(&sps));
    input.extend(unit(&[0x65; 0x10]));
    input.extend_from_slice(&[0xff; 7]);
    input.extend(unit(&[0x41; 6]));

    let (report, out) = run(input, None);
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::AlreadyFramed);
    assert_eq!(report.anomalies, 1);
    assert_eq!(out, annex_b(&[&sps, &[0x65; 0x10], &[0x41; 6]]));
}

#[test]
fn sps_inside_mdat_gets_framed_profile() {
    let mut input = container_head();
    let mut sps = vec![0x27, 0x64, 0x00, 0x28];
    sps.resize(0x1c, 0xac);
    input.extend(unit(&sps));
    input.extend(unit(&[0x65; 0x10]));
    input.extend_from_slice(&[0xff; 7]);
    input.extend(unit(&[0x41; 6]));

    let (report, out) = run(input, Some('f'));
    let report = report.unwrap();
    assert_eq!(report.kind, RepairKind::NoPreview);
    assert_eq!(report.anomalies, 1);
    let profile = ProfileRegistry::builtin().lookup(ProfileFamily::Framed, 'f').unwrap();
    let expected = annex_b(&[trimmed(profile.sps()), trimmed(profile.pps()), &sps, &[0x65; 0x10], &[0x41; 6]]);
    assert_eq!(out, expected);
}

#[test]
fn hevc_profile_writes_vps_first() {
    let mut input = container_head();
    input.extend(aux_block(0x00, 0x100));
    input.extend(unit(&[0x26, 0x01, 0xaf]));

    let (report, out) = run(input, Some('g'));
    assert_eq!(report.unwrap().kind, RepairKind::InlineWithPreview);
    let profile = ProfileRegistry::builtin().lookup(ProfileFamily::Framed, 'g').unwrap();
    let expected = annex_b(&[
        trimmed(profile.vps().unwrap()),
        trimmed(profile.sps()),
        trimmed(profile.pps()),
        &[0x26, 0x01, 0xaf],
    ]);
    assert_eq!(out, expected);
    assert_eq!(out[4], 0x40);
}

#[test]
fn unrepairable_input_produces_nothing() {
    for input in [vec![], vec![0; 100], vec![0xff; 100], b"plain text, no video here".to_vec()] {
        let (report, out) = run(input, None);
        assert!(matches!(report, Err(Error::NoSaneData(_))));
        assert!(out.is_empty());
    }
}

#[test]
fn extended_atom_size_is_fatal() {
    let mut input = atom(0x10, b"ftyp", b"isom\0\0\0\0");
    input.extend(atom(1, b"moov", &[0; 16]));

    let (report, out) = run(input, None);
    assert!(matches!(report, Err(Error::Unsupported(_))));
    assert!(out.is_empty());
}

#[test]
fn container_without_video_is_fatal() {
    let mut input = container_head();
    input.extend_from_slice(&[0x55; 64]);

    let (report, _) = run(input, None);
    assert!(matches!(report, Err(Error::NoSaneData(_))));
}

#[test]
fn classification_exposes_lead() {
    let mut repairer = Repairer::new(Cursor::new(vec![0, 0, 0, 2, 0x09, 0x10, 0, 0])).unwrap();
    assert_eq!(repairer.classify().unwrap(), Classification::InlineRaw { lead: 0x0910_0000 });
}

#[test]
fn convenience_function() {
    init_logging();
    let mut out = Vec::new();
    let input = vec![0, 0, 0, 2, 0x09, 0x10, 0, 0, 0, 1, 0x65];
    let report = mp4rescue::repair(Cursor::new(input), &mut out, None).unwrap();
    assert_eq!(report.units_written, 2);
    assert_eq!(out, annex_b(&[&[0x09, 0x10], &[0x65]]));
}
