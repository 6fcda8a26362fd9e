// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![no_main]
use libfuzzer_sys::fuzz_target;
use mp4rescue::{ProfileRegistry, RepairOptions, Repairer};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let Ok(mut repairer) = Repairer::new(Cursor::new(data)) else { return };
    // Small limit so the resync paths get exercised on short inputs.
    repairer = repairer.with_options(RepairOptions::default().with_max_nal_size(0x1000));
    let Ok(classification) = repairer.classify() else { return };
    let profile = classification
        .kind()
        .profile_family()
        .and_then(|family| ProfileRegistry::builtin().lookup(family, '0'));
    let _ = repairer.run(std::io::sink(), profile);
});
