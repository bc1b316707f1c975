#![no_main]

use libfuzzer_sys::fuzz_target;
use platter_core::{BufferReader, ByteView, DataType};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes and window geometry to the reader.
    // Every accessor must either succeed inside the window or return an
    // error; out-of-range inputs must never panic or read adjacent memory.
    let reader = BufferReader::new(data.to_vec());

    if data.len() >= 2 {
        let start = data[0] as usize;
        let len = data[1] as usize;
        // Invalid windows are rejected at construction.
        let _ = BufferReader::with_window(data.to_vec(), start, len);
    }

    let probe = data.first().copied().unwrap_or(0) as usize;
    let _ = reader.read_bit(probe, (probe % 16) as u8);
    let _ = reader.read_i8(probe);
    let _ = reader.read_u16(probe);
    let _ = reader.read_i32(probe);
    let _ = reader.read_u64(probe);
    let _ = reader.read_uint(probe % 10, probe);
    let _ = reader.slice(probe, probe);
    let _ = reader.slice_from(probe);
    let _ = reader.decode_utf8();

    for ty in [
        DataType::Int8,
        DataType::Uint16,
        DataType::Int32,
        DataType::Uint32,
    ] {
        let _ = reader.to_number_array(ty);
        let _ = reader.read_value(ty, probe);
    }
    let _ = reader.to_i64_array();
    let _ = reader.to_u64_array();
});
