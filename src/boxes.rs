// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

macro_rules! box_database {
    ($($(#[$attr:meta])* $boxenum:ident $boxtype:expr),*,) => {
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub enum BoxType {
            $($(#[$attr])* $boxenum),*,
            UnknownBox(u32),
        }

        impl From<u32> for BoxType {
            fn from(t: u32) -> BoxType {
                use self::BoxType::*;
                match t {
                    $($boxtype => $boxenum),*,
                    _ => UnknownBox(t),
                }
            }
        }

        impl From<BoxType> for u32 {
            fn from(b: BoxType) -> u32 {
                use self::BoxType::*;
                match b {
                    $($boxenum => $boxtype),*,
                    UnknownBox(t) => t,
                }
            }
        }

        impl fmt::Debug for BoxType {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let fourcc: FourCC = From::from(*self);
                fourcc.fmt(f)
            }
        }
    }
}

#[derive(Default, PartialEq, Eq, Clone, Copy)]
pub struct FourCC {
    pub value: [u8; 4],
}

impl From<u32> for FourCC {
    fn from(number: u32) -> FourCC {
        FourCC { value: number.to_be_bytes() }
    }
}

impl From<BoxType> for FourCC {
    fn from(t: BoxType) -> FourCC {
        let box_num: u32 = Into::into(t);
        From::from(box_num)
    }
}

impl<'a> From<&'a str> for FourCC {
    fn from(v: &'a str) -> FourCC {
        let mut value = [0u8; 4];
        for (dst, src) in value.iter_mut().zip(v.bytes()) {
            *dst = src;
        }
        FourCC { value }
    }
}

impl PartialEq<&[u8; 4]> for FourCC {
    fn eq(&self, other: &&[u8; 4]) -> bool {
        self.value.eq(*other)
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match std::str::from_utf8(&self.value) {
            Ok(s) => f.write_str(s),
            Err(_) => self.value.fmt(f),
        }
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.value.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            // Checked above, so this is always valid UTF-8.
            f.write_str(std::str::from_utf8(&self.value).map_err(|_| fmt::Error)?)
        } else {
            write!(f, "0x{:08x}", u32::from_be_bytes(self.value))
        }
    }
}

box_database!(
    FileTypeBox                       0x6674_7970, // "ftyp"
    /// Major brand seen where an `ftyp` tag is expected when the size word was lost.
    IsoBrand                          0x6973_6f6d, // "isom"
    MovieBox                          0x6d6f_6f76, // "moov"
    FreeSpaceBox                      0x6672_6565, // "free"
    WideBox                           0x7769_6465, // "wide"
    MediaDataBox                      0x6d64_6174, // "mdat"
    /// Still-image preview marker written at the start of `mdat` by newer firmware.
    PreviewBox                        0x6d69_6a64, // "mijd"
);

#[test]
fn fourcc_round_trips_through_box_type() {
    let t = BoxType::from(0x6d64_6174);
    assert_eq!(t, BoxType::MediaDataBox);
    assert_eq!(FourCC::from(t), b"mdat");
    assert_eq!(format!("{:?}", BoxType::from(0x7769_6465)), "wide");
}

#[test]
fn unknown_fourcc_displays_as_hex() {
    let t = BoxType::from(0x0000_0002);
    assert_eq!(t, BoxType::UnknownBox(2));
    assert_eq!(FourCC::from(t).to_string(), "0x00000002");
}
