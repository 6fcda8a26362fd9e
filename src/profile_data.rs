// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter sets captured from the supported cameras, one per recording
//! format. Every blob ends with `0xFE`.

use crate::profile::{ProfileEntry, ProfileFamily, RepairProfile};

macro_rules! catalog {
    ($($family:ident $code:literal => $label:literal, $sps:ident, $pps:ident $(, $vps:ident)?;)*) => {
        pub(crate) static CATALOG: &[ProfileEntry] = &[
            $(ProfileEntry {
                family: ProfileFamily::$family,
                code: $code,
                profile: RepairProfile::builtin($label, $sps, $pps, catalog!(@vps $($vps)?)),
            },)*
        ];
    };
    (@vps) => { None };
    (@vps $vps:ident) => { Some($vps) };
}

catalog! {
    Legacy '0' => "2160p, 30fps", LEGACY_SPS_2160P30, LEGACY_PPS_INSPIRE;
    Legacy '1' => "2160(x4096)p (4K), 25fps", LEGACY_SPS_2160X4096P25, LEGACY_PPS_INSPIRE;
    Legacy '2' => "2160(x3840)p (UHD-1), 25fps", LEGACY_SPS_2160X3840P25, LEGACY_PPS_INSPIRE;
    Legacy '3' => "2160(x4096)p (4K), 24fps; try this for an Inspire", LEGACY_SPS_2160X4096P24, LEGACY_PPS_INSPIRE;
    Legacy '4' => "2160(x3840)p (UHD-1), 24fps", LEGACY_SPS_2160X3840P24, LEGACY_PPS_INSPIRE;
    Legacy '5' => "1530p, 30fps", LEGACY_SPS_1530P30, LEGACY_PPS_INSPIRE;
    Legacy '6' => "1530p, 25fps", LEGACY_SPS_1530P25, LEGACY_PPS_INSPIRE;
    Legacy '7' => "1530p, 24fps; try this for a Mavic Pro", LEGACY_SPS_1530P24, LEGACY_PPS_INSPIRE;
    Legacy '8' => "1520p, 60fps", LEGACY_SPS_1520P60, LEGACY_PPS_INSPIRE;
    Legacy '9' => "1520p, 30fps", LEGACY_SPS_1520P30, LEGACY_PPS_INSPIRE;
    Legacy 'a' => "1520p, 25fps", LEGACY_SPS_1520P25, LEGACY_PPS_INSPIRE;
    Legacy 'b' => "1520p, 24fps", LEGACY_SPS_1520P24, LEGACY_PPS_INSPIRE;
    Legacy 'c' => "1080p, 60fps", LEGACY_SPS_1080P60, LEGACY_PPS_INSPIRE;
    Legacy 'd' => "1080i, 60fps", LEGACY_SPS_1080I60, LEGACY_PPS_P2VP;
    Legacy 'e' => "1080p, 50fps", LEGACY_SPS_1080P50, LEGACY_PPS_INSPIRE;
    Legacy 'f' => "1080p, 48fps", LEGACY_SPS_1080P48, LEGACY_PPS_INSPIRE;
    Legacy 'g' => "1080p, 30fps; try this for a Phantom 2 Vision+", LEGACY_SPS_1080P30_DEFAULT, LEGACY_PPS_P2VP;
    Legacy 'h' => "1080p, 30fps (Zenmuse)", LEGACY_SPS_1080P30_ADVANCED, LEGACY_PPS_INSPIRE;
    Legacy 'i' => "1080p, 25fps", LEGACY_SPS_1080P25, LEGACY_PPS_P2VP;
    Legacy 'j' => "1080p, 24fps", LEGACY_SPS_1080P24, LEGACY_PPS_INSPIRE;
    Legacy 'k' => "720p, 60fps", LEGACY_SPS_720P60, LEGACY_PPS_P2VP;
    Legacy 'l' => "720p, 50fps", LEGACY_SPS_720P50, LEGACY_PPS_INSPIRE;
    Legacy 'm' => "720p, 48fps", LEGACY_SPS_720P48, LEGACY_PPS_INSPIRE;
    Legacy 'n' => "720p, 30fps", LEGACY_SPS_720P30, LEGACY_PPS_P2VP;
    Legacy 'o' => "720p, 25fps", LEGACY_SPS_720P25, LEGACY_PPS_INSPIRE;
    Legacy 'p' => "720p, 24fps", LEGACY_SPS_720P24, LEGACY_PPS_INSPIRE;
    Legacy 'q' => "480p, 30fps", LEGACY_SPS_480P30, LEGACY_PPS_P2VP;

    Framed '0' => "H.264, 2160(x4096)p (4K), 60fps", FRAMED_H264_SPS_2160X4096P60, FRAMED_H264_PPS_DEFAULT;
    Framed '1' => "H.264, 2160(x3840)p (UHD-1), 60fps", FRAMED_H264_SPS_2160X3840P60, FRAMED_H264_PPS_DEFAULT;
    Framed '2' => "H.264, 2160(x3840)p (UHD-1), 50fps", FRAMED_H264_SPS_2160X3840P50, FRAMED_H264_PPS_DEFAULT;
    Framed '3' => "H.264, 2160(x4096)p (4K), 48fps", FRAMED_H264_SPS_2160X4096P48, FRAMED_H264_PPS_DEFAULT;
    Framed '4' => "H.264, 2160(x3840)p (UHD-1), 48fps", FRAMED_H264_SPS_2160X3840P48, FRAMED_H264_PPS_DEFAULT;
    Framed '5' => "H.265, 2160(x4096)p (4K), 30fps", FRAMED_H265_SPS_2160X4096P30, FRAMED_H265_PPS_2160X4096P30, FRAMED_H265_VPS_2160X4096P30;
    Framed '6' => "H.264, 2160(x4096)p (4K), 30fps", FRAMED_H264_SPS_2160X4096P30, FRAMED_H264_PPS_DEFAULT;
    Framed '7' => "H.264, 2160(x3840)p (UHD-1), 30fps", FRAMED_H264_SPS_2160X3840P30, FRAMED_H264_PPS_DEFAULT;
    Framed '8' => "H.264, 2160(x4096)p (4K), 25fps", FRAMED_H264_SPS_2160X4096P25, FRAMED_H264_PPS_DEFAULT;
    Framed '9' => "H.265, 2160(x3840)p (UHD-1), 25fps", FRAMED_H265_SPS_2160X3840P25, FRAMED_H265_PPS_2160X3840P25, FRAMED_H265_VPS_2160X3840P25;
    Framed 'a' => "H.264, 1530p, 30fps", FRAMED_H264_SPS_1530P30, FRAMED_H264_PPS_DEFAULT;
    Framed 'b' => "H.264, 1530p, 24fps", FRAMED_H264_SPS_1530P24, FRAMED_H264_PPS_DEFAULT;
    Framed 'c' => "H.265, 1080p, 120fps", FRAMED_H265_SPS_1080P120, FRAMED_H265_PPS_1080P, FRAMED_H265_VPS_1080P120;
    Framed 'd' => "H.264, 1080p, 120fps", FRAMED_H264_SPS_1080P120, FRAMED_H264_PPS_DEFAULT;
    Framed 'e' => "H.264, 1080p, 60fps", FRAMED_H264_SPS_1080P60, FRAMED_H264_PPS_DEFAULT;
    Framed 'f' => "H.264, 1080p, 30fps", FRAMED_H264_SPS_1080P30, FRAMED_H264_PPS_DEFAULT;
    Framed 'g' => "H.265, 1080p, 25fps", FRAMED_H265_SPS_1080P25, FRAMED_H265_PPS_1080P, FRAMED_H265_VPS_1080P25;
    Framed 'h' => "H.264, 1080p, 25fps", FRAMED_H264_SPS_1080P25, FRAMED_H264_PPS_DEFAULT;
    Framed 'i' => "H.264, 1080p, 24fps", FRAMED_H264_SPS_1080P24, FRAMED_H264_PPS_DEFAULT;
    Framed 'j' => "H.264, 480p, 30fps (e.g. XL FLIR camera)", FRAMED_H264_SPS_480P30, FRAMED_H264_PPS_480P;
}

const LEGACY_SPS_2160P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x20, 0x00, 0x1d, 0x4c, 0x1d, 0x0c, 0x00, 0x07,
    0x27, 0x08, 0x00, 0x01, 0xc9, 0xc3, 0x97, 0x79, 0x71, 0xa1, 0x80, 0x00, 0xe4, 0xe1,
    0x00, 0x00, 0x39, 0x38, 0x72, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x53, 0x80, 0xfe,
];
const LEGACY_SPS_2160X4096P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x40, 0x00, 0x06, 0x1a, 0x87, 0x43, 0x00, 0x01,
    0xc9, 0xc2, 0x00, 0x00, 0x72, 0x70, 0xe5, 0xde, 0x5c, 0x68, 0x60, 0x00, 0x39, 0x38,
    0x40, 0x00, 0x0e, 0x4e, 0x1c, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0xe0, 0xfe,
];
const LEGACY_SPS_2160X3840P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x00, 0x00, 0x18, 0x6a, 0x1d, 0x0c, 0x00, 0x07,
    0x27, 0x08, 0x00, 0x01, 0xc9, 0xc3, 0x97, 0x79, 0x71, 0xa1, 0x80, 0x00, 0xe4, 0xe1,
    0x00, 0x00, 0x39, 0x38, 0x72, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x53, 0x80, 0xfe,
];
const LEGACY_SPS_2160X4096P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x05, 0xdc, 0x07, 0x43, 0x00, 0x01,
    0xc9, 0xc2, 0x00, 0x00, 0x72, 0x70, 0xe5, 0xde, 0x5c, 0x68, 0x60, 0x00, 0x39, 0x38,
    0x40, 0x00, 0x0e, 0x4e, 0x1c, 0xbb, 0xfe,
];
const LEGACY_SPS_2160X3840P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x20, 0x00, 0x17, 0x70, 0x1d, 0x0c, 0x00, 0x07,
    0x27, 0x08, 0x00, 0x01, 0xc9, 0xc3, 0x97, 0x79, 0x71, 0xa1, 0x80, 0x00, 0xe4, 0xe1,
    0x00, 0x00, 0x39, 0x38, 0x72, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x53, 0x80, 0xfe,
];
const LEGACY_SPS_1530P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x02, 0xa8, 0x0c, 0x1b, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0x75, 0x30, 0x74, 0x30, 0x00, 0x15,
    0x75, 0x20, 0x00, 0x05, 0x5d, 0x4a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0xae, 0xa4,
    0x00, 0x00, 0xab, 0xa9, 0x4b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0x00, 0x00, 0x00,
    0xfe,
];
const LEGACY_SPS_1530P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x32, 0xac, 0x34, 0xc8, 0x02, 0xa8, 0x0c, 0x1b, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x00, 0x00, 0x61, 0xa8, 0x74, 0x30, 0x00, 0x15,
    0x75, 0x20, 0x00, 0x05, 0x5d, 0x4a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0xae, 0xa4,
    0x00, 0x00, 0xab, 0xa9, 0x4b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0xfe,
];
const LEGACY_SPS_1530P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x32, 0xac, 0x34, 0xc8, 0x02, 0xa8, 0x0c, 0x1b, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0x5d, 0xc0, 0x74, 0x30, 0x00, 0x15,
    0x75, 0x20, 0x00, 0x05, 0x5d, 0x4a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0xae, 0xa4,
    0x00, 0x00, 0xab, 0xa9, 0x4b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0xfe,
];
const LEGACY_SPS_1520P60: &[u8] = &[
    0x27, 0x64, 0x00, 0x2a, 0xac, 0x34, 0xc8, 0x02, 0xa4, 0x0b, 0xfb, 0x01, 0x6e, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0xea, 0x60, 0x74, 0x30, 0x00, 0x15,
    0x75, 0x20, 0x00, 0x05, 0x5d, 0x4a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0xae, 0xa4,
    0x00, 0x00, 0xab, 0xa9, 0x4b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0x00, 0x00, 0x00,
    0xfe,
];
const LEGACY_SPS_1520P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x02, 0xa4, 0x0b, 0xfb, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0x75, 0x30, 0x74, 0x30, 0x00, 0x13,
    0x12, 0xc0, 0x00, 0x04, 0xc4, 0xb4, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0x62, 0x58,
    0x00, 0x00, 0x98, 0x96, 0x8b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0x00, 0x00, 0x00,
    0xfe,
];
const LEGACY_SPS_1520P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x02, 0xa4, 0x0b, 0xfb, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x00, 0x03, 0x00, 0x80, 0x00, 0x00, 0x19, 0x74, 0x30, 0x00,
    0x13, 0x12, 0xc0, 0x00, 0x04, 0xc4, 0xb4, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0x62,
    0x58, 0x00, 0x00, 0x98, 0x96, 0x8b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0xfe,
];
const LEGACY_SPS_1520P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x02, 0xa4, 0x0b, 0xfb, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0x5d, 0xc0, 0x74, 0x30, 0x00, 0x15,
    0x75, 0x20, 0x00, 0x05, 0x5d, 0x4a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x02, 0xae, 0xa4,
    0x00, 0x00, 0xab, 0xa9, 0x4b, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x4e, 0x00, 0x00, 0x00,
    0xfe,
];
const LEGACY_SPS_1080P60: &[u8] = &[
    0x27, 0x64, 0x00, 0x2a, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x03, 0xa9, 0x81, 0xd0, 0xc0, 0x00,
    0x4c, 0x4b, 0x00, 0x00, 0x13, 0x12, 0xd1, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x09, 0x89,
    0x60, 0x00, 0x02, 0x62, 0x5a, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const LEGACY_SPS_1080I60: &[u8] = &[
    0x27, 0x4d, 0x00, 0x2a, 0x9a, 0x66, 0x03, 0xc0, 0x22, 0x3e, 0xf0, 0x16, 0xc8, 0x00,
    0x00, 0x1f, 0x48, 0x00, 0x07, 0x53, 0x07, 0x43, 0x00, 0x02, 0x36, 0x78, 0x00, 0x02,
    0x36, 0x78, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x04, 0x6c, 0xf0, 0x00, 0x04, 0x6c, 0xf0,
    0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x58, 0xfe,
];
const LEGACY_SPS_1080P50: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd0, 0x00, 0x03, 0x0d, 0x41, 0xd0, 0xc0, 0x00,
    0x4c, 0x4b, 0x00, 0x00, 0x13, 0x12, 0xd1, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x09, 0x89,
    0x60, 0x00, 0x02, 0x62, 0x5a, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const LEGACY_SPS_1080P48: &[u8] = &[
    0x27, 0x64, 0x00, 0x2a, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x02, 0xee, 0x01, 0xd0, 0xc0, 0x00,
    0x4c, 0x4b, 0x00, 0x00, 0x13, 0x12, 0xd1, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x09, 0x89,
    0x60, 0x00, 0x02, 0x62, 0x5a, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const LEGACY_SPS_1080P30_DEFAULT: &[u8] = &[
    0x27, 0x4d, 0x00, 0x28, 0x9a, 0x66, 0x03, 0xc0, 0x11, 0x3f, 0x2e, 0x02, 0xd9, 0x00,
    0x00, 0x03, 0x03, 0xe9, 0x00, 0x00, 0xea, 0x60, 0xe8, 0x60, 0x00, 0xe2, 0x98, 0x00,
    0x03, 0x8a, 0x60, 0xbb, 0xcb, 0x8d, 0x0c, 0x00, 0x1c, 0x53, 0x00, 0x00, 0x71, 0x4c,
    0x17, 0x79, 0x70, 0xf8, 0x44, 0x22, 0x8b, 0xfe,
];
const LEGACY_SPS_1080P30_ADVANCED: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x01, 0xd4, 0xc1, 0xd0, 0xc0, 0x00,
    0x4c, 0x4b, 0x00, 0x00, 0x13, 0x12, 0xd1, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x09, 0x89,
    0x60, 0x00, 0x02, 0x62, 0x5a, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const LEGACY_SPS_1080P25: &[u8] = &[
    0x27, 0x4d, 0x00, 0x28, 0x9a, 0x66, 0x03, 0xc0, 0x11, 0x3f, 0x2e, 0x02, 0xd9, 0x00,
    0x00, 0x03, 0x03, 0xe8, 0x00, 0x00, 0xc3, 0x50, 0xe8, 0x60, 0x00, 0xdc, 0xf0, 0x00,
    0x03, 0x73, 0xb8, 0xbb, 0xcb, 0x8d, 0x0c, 0x00, 0x1b, 0x9e, 0x00, 0x00, 0x6e, 0x77,
    0x17, 0x79, 0x70, 0xf8, 0x44, 0x22, 0x8b, 0xfe,
];
const LEGACY_SPS_1080P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x01, 0x77, 0x01, 0xd0, 0xc0, 0x00,
    0xbe, 0xbc, 0x00, 0x00, 0xbe, 0xbc, 0x17, 0x79, 0x71, 0xa1, 0x80, 0x01, 0x7d, 0x78,
    0x00, 0x01, 0x7d, 0x78, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0x00, 0x00, 0x00,
    0xfe,
];
const LEGACY_SPS_720P60: &[u8] = &[
    0x27, 0x4d, 0x00, 0x20, 0x9a, 0x66, 0x02, 0x80, 0x2d, 0xd8, 0x0b, 0x64, 0x00, 0x00,
    0x0f, 0xa4, 0x00, 0x07, 0x53, 0x03, 0xa1, 0x80, 0x03, 0x8a, 0x60, 0x00, 0x0e, 0x29,
    0x82, 0xef, 0x2e, 0x34, 0x30, 0x00, 0x71, 0x4c, 0x00, 0x01, 0xc5, 0x30, 0x5d, 0xe5,
    0xc3, 0xe1, 0x10, 0x8a, 0x34, 0xfe,
];
const LEGACY_SPS_720P50: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x05, 0x00, 0x5b, 0xb0, 0x16, 0xa0, 0x20,
    0x20, 0x28, 0x00, 0x00, 0x1f, 0x40, 0x00, 0x0c, 0x35, 0x07, 0x43, 0x00, 0x07, 0xa1,
    0x20, 0x00, 0x1e, 0x84, 0x85, 0xde, 0x5c, 0x68, 0x60, 0x00, 0xf4, 0x24, 0x00, 0x03,
    0xd0, 0x90, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x78, 0xfe,
];
const LEGACY_SPS_720P48: &[u8] = &[
    0x27, 0x64, 0x00, 0x28, 0xac, 0x34, 0xc8, 0x05, 0x00, 0x5b, 0xb0, 0x16, 0xa0, 0x20,
    0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x0b, 0xb8, 0x07, 0x43, 0x00, 0x07, 0xa1,
    0x20, 0x00, 0x1e, 0x84, 0x85, 0xde, 0x5c, 0x68, 0x60, 0x00, 0xf4, 0x24, 0x00, 0x03,
    0xd0, 0x90, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x78, 0x00, 0xfe,
];
const LEGACY_SPS_720P30: &[u8] = &[
    0x27, 0x4d, 0x00, 0x1f, 0x9a, 0x66, 0x02, 0x80, 0x2d, 0xd8, 0x0b, 0x64, 0x00, 0x00,
    0x0f, 0xa4, 0x00, 0x03, 0xa9, 0x83, 0xa1, 0x80, 0x02, 0x5c, 0x40, 0x00, 0x09, 0x71,
    0x02, 0xef, 0x2e, 0x34, 0x30, 0x00, 0x4b, 0x88, 0x00, 0x01, 0x2e, 0x20, 0x5d, 0xe5,
    0xc3, 0xe1, 0x10, 0x8a, 0x34, 0xfe,
];
const LEGACY_SPS_720P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x28, 0xac, 0x34, 0xc8, 0x05, 0x00, 0x5b, 0xb0, 0x16, 0xa0, 0x20,
    0x20, 0x28, 0x00, 0x00, 0x1f, 0x40, 0x00, 0x06, 0x1a, 0x87, 0x43, 0x00, 0x0f, 0xd4,
    0x80, 0x00, 0xfd, 0x4b, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x1f, 0xa9, 0x00, 0x01, 0xfa,
    0x96, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x78, 0xfe,
];
const LEGACY_SPS_720P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x29, 0xac, 0x34, 0xc8, 0x05, 0x00, 0x5b, 0xb0, 0x16, 0xa0, 0x20,
    0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x05, 0xdc, 0x07, 0x43, 0x00, 0x0f, 0xd4,
    0x80, 0x00, 0xfd, 0x4b, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x1f, 0xa9, 0x00, 0x01, 0xfa,
    0x96, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x78, 0xfe,
];
const LEGACY_SPS_480P30: &[u8] = &[
    0x27, 0x4d, 0x40, 0x1e, 0x9a, 0x66, 0x05, 0x01, 0xed, 0x80, 0xb6, 0x40, 0x00, 0x00,
    0xfa, 0x40, 0x00, 0x3a, 0x98, 0x3a, 0x10, 0x00, 0x5e, 0x68, 0x00, 0x02, 0xf3, 0x40,
    0xbb, 0xcb, 0x8d, 0x08, 0x00, 0x2f, 0x34, 0x00, 0x01, 0x79, 0xa0, 0x5d, 0xe5, 0xc3,
    0xe1, 0x10, 0x8a, 0x3c, 0xfe,
];
const LEGACY_PPS_P2VP: &[u8] = &[
    0x28, 0xee, 0x3c, 0x80, 0xfe,
];
const LEGACY_PPS_INSPIRE: &[u8] = &[
    0x28, 0xee, 0x38, 0x30, 0xfe,
];
const FRAMED_H264_SPS_2160X4096P60: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x0e, 0xa6, 0x07, 0x43, 0x00, 0x00,
    0xbe, 0xbc, 0x00, 0x00, 0x0d, 0x69, 0x3a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x01, 0x7d,
    0x78, 0x00, 0x00, 0x1a, 0xd2, 0x74, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x58, 0xfe,
];
const FRAMED_H264_SPS_2160X3840P60: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x20, 0x00, 0x3a, 0x98, 0x1d, 0x0c, 0x00, 0x07,
    0x27, 0x08, 0x00, 0x00, 0x80, 0xbe, 0xf5, 0xde, 0x5c, 0x68, 0x60, 0x00, 0x39, 0x38,
    0x40, 0x00, 0x04, 0x05, 0xf7, 0xae, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const FRAMED_H264_SPS_2160X3840P50: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x00, 0x00, 0x30, 0xd4, 0x1d, 0x0c, 0x00, 0x02,
    0xfa, 0xf0, 0x00, 0x00, 0x35, 0xa4, 0xe9, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x05, 0xf5,
    0xe0, 0x00, 0x00, 0x6b, 0x49, 0xd2, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x51, 0x60, 0xfe,
];
const FRAMED_H264_SPS_2160X4096P48: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x0b, 0xb8, 0x07, 0x43, 0x00, 0x00,
    0xbe, 0xbc, 0x00, 0x00, 0x0d, 0x69, 0x3a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x01, 0x7d,
    0x78, 0x00, 0x00, 0x1a, 0xd2, 0x74, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x58, 0xfe,
];
const FRAMED_H264_SPS_2160X3840P48: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x20, 0x00, 0x2e, 0xe0, 0x1d, 0x0c, 0x00, 0x02,
    0xfa, 0xf0, 0x00, 0x00, 0x35, 0xa4, 0xe9, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x05, 0xf5,
    0xe0, 0x00, 0x00, 0x6b, 0x49, 0xd2, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x51, 0x60, 0xfe,
];
const FRAMED_H265_VPS_2160X4096P30: &[u8] = &[
    0x40, 0x01, 0x0c, 0x01, 0xff, 0xff, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x96, 0xac, 0x09, 0xfe,
];
const FRAMED_H264_SPS_2160X4096P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x34, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x48, 0x00, 0x07, 0x53, 0x07, 0x43, 0x00, 0x00,
    0xbe, 0xbc, 0x00, 0x00, 0x0d, 0x69, 0x3a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x01, 0x7d,
    0x78, 0x00, 0x00, 0x1a, 0xd2, 0x74, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x58, 0xfe,
];
const FRAMED_H264_SPS_2160X3840P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x03, 0xc0, 0x04, 0x3e, 0xc0, 0x5a, 0x80,
    0x80, 0x80, 0xa0, 0x00, 0x00, 0x7d, 0x20, 0x00, 0x1d, 0x4c, 0x1d, 0x0c, 0x00, 0x02,
    0xfa, 0xf0, 0x00, 0x00, 0x35, 0xa4, 0xe9, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x05, 0xf5,
    0xe0, 0x00, 0x00, 0x6b, 0x49, 0xd2, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x51, 0x60, 0xfe,
];
const FRAMED_H264_SPS_2160X4096P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x01, 0x00, 0x01, 0x0f, 0xb0, 0x16, 0xa0,
    0x20, 0x20, 0x28, 0x00, 0x00, 0x1f, 0x40, 0x00, 0x06, 0x1a, 0x87, 0x43, 0x00, 0x00,
    0xbe, 0xbc, 0x00, 0x00, 0x0d, 0x69, 0x3a, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x01, 0x7d,
    0x78, 0x00, 0x00, 0x1a, 0xd2, 0x74, 0xbb, 0xcb, 0x87, 0xc2, 0x21, 0x14, 0x58, 0xfe,
];
const FRAMED_H265_VPS_2160X3840P25: &[u8] = &[
    0x40, 0x01, 0x0c, 0x01, 0xff, 0xff, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x96, 0xac, 0x09, 0xfe,
];
const FRAMED_H264_SPS_1530P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x32, 0xac, 0x34, 0xc8, 0x02, 0xa8, 0x0c, 0x1b, 0x01, 0x6a, 0x02,
    0x02, 0x02, 0x80, 0x00, 0x01, 0xf4, 0x80, 0x00, 0x75, 0x30, 0x74, 0x30, 0x00, 0x09,
    0x89, 0x68, 0x00, 0x00, 0xab, 0xa9, 0x55, 0xde, 0x5c, 0x68, 0x60, 0x00, 0x13, 0x12,
    0xd0, 0x00, 0x01, 0x57, 0x52, 0xab, 0xbc, 0xb8, 0x7c, 0x22, 0x11, 0x45, 0x80, 0xfe,
];
const FRAMED_H264_SPS_1530P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x32, 0xac, 0x34, 0xc8, 0x02, 0xa8, 0x0c, 0x1b, 0x01, 0xaa, 0x02,
    0x02, 0x02, 0xa0, 0x00, 0x01, 0xf4, 0xa0, 0x00, 0x5d, 0xc0, 0xa4, 0x30, 0x00, 0x09,
    0xa9, 0x68, 0x00, 0x00, 0xab, 0xa9, 0x55, 0xde, 0xac, 0x68, 0x60, 0x00, 0xa3, 0x12,
    0xd0, 0x00, 0xa1, 0x57, 0x52, 0xab, 0xac, 0xb8, 0x7c, 0x22, 0xa1, 0x45, 0x80, 0xfe,
];
const FRAMED_H265_VPS_1080P120: &[u8] = &[
    0x40, 0x01, 0x0c, 0x01, 0xff, 0xff, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x96, 0xac, 0x09, 0xfe,
];
const FRAMED_H264_SPS_1080P120: &[u8] = &[
    0x27, 0x64, 0x00, 0x33, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x07, 0x53, 0x01, 0xd0, 0xc0, 0x00,
    0x2f, 0xaf, 0x00, 0x00, 0x03, 0x03, 0x5a, 0x4e, 0x97, 0x79, 0x71, 0xa1, 0x80, 0x00,
    0x5f, 0x5e, 0x00, 0x00, 0x06, 0xb4, 0x9d, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16,
    0xfe,
];
const FRAMED_H264_SPS_1080P60: &[u8] = &[
    0x27, 0x64, 0x00, 0x2a, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x03, 0xa9, 0x81, 0xd0, 0xc0, 0x00,
    0x26, 0x25, 0xa0, 0x00, 0x02, 0xae, 0xa5, 0x57, 0x79, 0x71, 0xa1, 0x80, 0x00, 0x4c,
    0x4b, 0x40, 0x00, 0x05, 0x5d, 0x4a, 0xae, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const FRAMED_H264_SPS_1080P30: &[u8] = &[
    0x27, 0x64, 0x00, 0x28, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x01, 0xd4, 0xc1, 0xd0, 0xc0, 0x00,
    0x72, 0x70, 0x80, 0x00, 0x08, 0x0b, 0xef, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x03, 0x93,
    0x84, 0x00, 0x00, 0x40, 0x5f, 0x7a, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x51, 0x60, 0xfe,
];
const FRAMED_H265_VPS_1080P25: &[u8] = &[
    0x40, 0x01, 0x0c, 0x01, 0xff, 0xff, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x7b, 0xac, 0x09, 0xfe,
];
const FRAMED_H264_SPS_1080P25: &[u8] = &[
    0x27, 0x64, 0x00, 0x28, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd0, 0x00, 0x01, 0x86, 0xa1, 0xd0, 0xc0, 0x00,
    0x4c, 0x4b, 0x00, 0x00, 0x15, 0x75, 0x29, 0x77, 0x97, 0x1a, 0x18, 0x00, 0x09, 0x89,
    0x60, 0x00, 0x02, 0xae, 0xa5, 0x2e, 0xf2, 0xe1, 0xf0, 0x88, 0x45, 0x16, 0xfe,
];
const FRAMED_H264_SPS_1080P24: &[u8] = &[
    0x27, 0x64, 0x00, 0x28, 0xac, 0x34, 0xc8, 0x07, 0x80, 0x22, 0x7e, 0x5c, 0x05, 0xa8,
    0x08, 0x08, 0x0a, 0x00, 0x00, 0x07, 0xd2, 0x00, 0x01, 0x77, 0x01, 0xd0, 0xc0, 0x00,
    0x72, 0x70, 0x80, 0x00, 0x08, 0x0b, 0xef, 0x5d, 0xe5, 0xc6, 0x86, 0x00, 0x03, 0x93,
    0x84, 0x00, 0x00, 0x40, 0x5f, 0x7a, 0xef, 0x2e, 0x1f, 0x08, 0x84, 0x51, 0x60, 0xfe,
];
const FRAMED_H264_SPS_480P30: &[u8] = &[
    0x67, 0x64, 0x00, 0x32, 0xac, 0xb4, 0x05, 0xa1, 0xed, 0x2a, 0x40, 0x00, 0x00, 0xfa,
    0x00, 0x00, 0x3a, 0x98, 0x18, 0x10, 0x00, 0x1e, 0x84, 0x80, 0x06, 0xdd, 0xef, 0x7b,
    0xe1, 0x78, 0x44, 0x23, 0x50, 0xfe,
];
const FRAMED_H264_PPS_DEFAULT: &[u8] = &[
    0x28, 0xee, 0x38, 0xb0, 0xfe,
];
const FRAMED_H265_SPS_2160X4096P30: &[u8] = &[
    0x42, 0x01, 0x01, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x96, 0xa0, 0x00, 0x80, 0x08, 0x00, 0x87, 0x1f, 0xe5, 0xae,
    0xed, 0x4d, 0xdd, 0xc9, 0x75, 0x80, 0xb5, 0x01, 0x01, 0x01, 0x04, 0x00, 0x00, 0x0f,
    0xa0, 0x00, 0x01, 0x86, 0xa0, 0xae, 0x11, 0x08, 0x20, 0xfe,
];
const FRAMED_H265_SPS_2160X3840P25: &[u8] = &[
    0x42, 0x01, 0x01, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x96, 0xa0, 0x01, 0xe0, 0x20, 0x02, 0x1c, 0x7f, 0x96, 0xbb,
    0xb5, 0x37, 0x77, 0x25, 0xd6, 0x02, 0xd4, 0x04, 0x04, 0x04, 0x10, 0x00, 0x00, 0x3e,
    0x80, 0x00, 0x06, 0x1a, 0x82, 0xb8, 0x44, 0x20, 0x80, 0xfe,
];
const FRAMED_H265_SPS_1080P120: &[u8] = &[
    0x42, 0x01, 0x01, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x96, 0xa0, 0x03, 0xc0, 0x80, 0x10, 0xe7, 0xf9, 0x6b, 0xbb,
    0x53, 0x77, 0x72, 0x5d, 0x60, 0x2d, 0x40, 0x40, 0x40, 0x41, 0x00, 0x00, 0x03, 0x03,
    0xe9, 0x00, 0x01, 0xd4, 0xc0, 0x2b, 0x84, 0x42, 0x08, 0xfe,
];
const FRAMED_H265_SPS_1080P25: &[u8] = &[
    0x42, 0x01, 0x01, 0x21, 0x60, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x03, 0x00, 0x7b, 0xa0, 0x03, 0xc0, 0x80, 0x10, 0xa7, 0xf9, 0x6b, 0xbb,
    0x53, 0x77, 0x72, 0x5d, 0x60, 0x2d, 0x40, 0x40, 0x40, 0x41, 0x00, 0x00, 0x03, 0x03,
    0xe8, 0x00, 0x00, 0x61, 0xa8, 0x2b, 0x84, 0x42, 0x08, 0xfe,
];
const FRAMED_H264_PPS_480P: &[u8] = &[
    0x68, 0xee, 0x3c, 0xb0, 0xfe,
];
const FRAMED_H265_PPS_2160X4096P30: &[u8] = &[
    0x44, 0x01, 0xc1, 0x72, 0xb0, 0x9c, 0x0a, 0xc1, 0x5e, 0x24, 0xfe,
];
const FRAMED_H265_PPS_2160X3840P25: &[u8] = &[
    0x44, 0x01, 0xc1, 0x72, 0xb0, 0x9c, 0x0a, 0x01, 0x46, 0x24, 0xfe,
];
const FRAMED_H265_PPS_1080P: &[u8] = &[
    0x44, 0x01, 0xc1, 0x72, 0xb0, 0x9c, 0x14, 0x0a, 0x62, 0x40, 0xfe,
];
