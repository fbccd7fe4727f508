// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use catbuffer::Cursor;
use libfuzzer_sys::fuzz_target;

// First byte drives the step pattern, the rest is the buffer.
fuzz_target!(|data: &[u8]| {
    let Some((&seed, buffer)) = data.split_first() else {
        return;
    };
    let mut cursor = Cursor::new(buffer);
    let mut step = usize::from(seed);

    for round in 0..64usize {
        let before = cursor.offset();
        let fits = cursor.can_read(step);
        let result = match round % 4 {
            0 => cursor.advance(step),
            1 => cursor.read_and_advance(step).map(|_| ()),
            2 => cursor.split_to(step).map(|_| ()),
            _ => cursor.skip_padding(step.max(1)),
        };
        if round % 4 != 3 {
            assert_eq!(result.is_ok(), fits);
        }
        if result.is_err() {
            assert_eq!(cursor.offset(), before);
        }
        assert!(cursor.offset() <= cursor.total_len());
        step = step.wrapping_mul(31).wrapping_add(round) % 97;
    }
});
