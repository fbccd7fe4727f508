// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use catbuffer::{Codec, Cursor};
use catbuffer_schema::{registry, EMBEDDED_TRANSACTION_GROUP, TRANSACTION_GROUP};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for group in [TRANSACTION_GROUP, EMBEDDED_TRANSACTION_GROUP] {
        let mut cursor = Cursor::new(data);
        let Ok(codec) = registry().decode(group, &mut cursor) else {
            continue;
        };

        let consumed = cursor.offset();
        assert_eq!(codec.size(), consumed);
        let output = codec.to_bytes().expect("decoded value re-encodes");
        assert_eq!(output.as_slice(), &data[..consumed]);
        let _ = codec.pretty();
    }
});
