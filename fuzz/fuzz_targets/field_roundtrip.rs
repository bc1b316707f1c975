#![no_main]

use libfuzzer_sys::fuzz_target;
use platter_core::field::{BitmapField, Field, PrefixedStringField, StringField};
use platter_core::BufferWriter;

fuzz_target!(|data: &[u8]| {
    // Derive field parameters and payloads from fuzz input, then write and
    // read through each field kind. Writes must either round-trip or fail
    // without mutating the view.
    if data.len() < 4 {
        return;
    }
    let offset = data[0] as usize;
    let width = data[1] as usize;
    let prefix = data[2] as usize;
    let payload = String::from_utf8_lossy(&data[3..]).into_owned();

    let mut view = BufferWriter::zeroed(256);

    let fixed = StringField::new(offset, width);
    if fixed.write(&mut view, payload.clone()).is_ok() {
        let decoded = fixed.read(&view).expect("written field must decode");
        assert_eq!(decoded.len(), width);
    }

    let prefixed = PrefixedStringField::new(offset, width, prefix);
    if prefixed.write(&mut view, payload.clone()).is_ok() {
        let _ = prefixed.read(&view);
    }

    let map = BitmapField::new(offset, width);
    for i in 0..width.min(64) {
        if map.set_bit(&mut view, i, i % 2 == 0).is_ok() {
            let bit = map.get_bit(&view, i).expect("set bit must be readable");
            assert_eq!(bit, u8::from(i % 2 == 0));
        }
    }
});
