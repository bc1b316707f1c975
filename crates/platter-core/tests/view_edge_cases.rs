//! Edge-case tests for the windowed views, typed accessors, and field
//! descriptors.

use platter_core::field::{BitmapField, Field, PrefixedStringField, ScalarField, StringField};
use platter_core::{BufferReader, BufferWriter, ByteView, DataType, Error, Value};

// ---------------------------------------------------------------
// Typed round-trips at boundary values
// ---------------------------------------------------------------

#[test]
fn i8_boundary_roundtrip() {
    let mut w = BufferWriter::zeroed(2);
    for (offset, value) in [(0usize, i8::MIN), (1, i8::MAX)] {
        w.write_i8(value, offset).unwrap();
        assert_eq!(w.read_i8(offset).unwrap(), value);
    }
}

#[test]
fn u32_boundary_roundtrip() {
    let mut w = BufferWriter::zeroed(8);
    for (offset, value) in [(0usize, 0u32), (4, u32::MAX)] {
        w.write_u32(value, offset).unwrap();
        assert_eq!(w.read_u32(offset).unwrap(), value);
    }
}

#[test]
fn i64_roundtrip_beyond_double_precision() {
    // Values past 2^53 cannot survive a float; native i64/u64 must.
    let values = [(1i64 << 53) + 1, i64::MIN, i64::MAX, -1];
    let mut w = BufferWriter::zeroed(8);
    for value in values {
        w.write_i64(value, 0).unwrap();
        assert_eq!(w.read_i64(0).unwrap(), value);
    }
}

#[test]
fn u64_roundtrip_beyond_double_precision() {
    let values = [(1u64 << 53) + 1, u64::MAX, 0];
    let mut w = BufferWriter::zeroed(8);
    for value in values {
        w.write_u64(value, 0).unwrap();
        assert_eq!(w.read_u64(0).unwrap(), value);
    }
}

#[test]
fn every_tag_roundtrips_through_dispatch() {
    let values = [
        Value::Int8(-128),
        Value::Uint8(255),
        Value::Int16(-32768),
        Value::Uint16(65535),
        Value::Int32(i32::MIN),
        Value::Uint32(u32::MAX),
        Value::Int64(i64::MIN),
        Value::Uint64(u64::MAX),
    ];
    let mut w = BufferWriter::zeroed(8);
    for value in values {
        w.write_value(value, 0).unwrap();
        assert_eq!(w.read_value(value.data_type(), 0).unwrap(), value);
    }
}

// ---------------------------------------------------------------
// Bit access
// ---------------------------------------------------------------

#[test]
fn read_bit_msb_first_pattern() {
    let reader = BufferReader::new(vec![0b1010_1010u8]);
    assert_eq!(reader.read_bit(0, 0).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 1).unwrap(), 0);
    assert_eq!(reader.read_bit(0, 2).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 3).unwrap(), 0);
}

#[test]
fn bit_roundtrip_preserves_other_bits() {
    for bit in 0u8..8 {
        let mut w = BufferWriter::new(&[0b1010_1010]);
        let before = w.read_u8(0).unwrap();
        let old = w.read_bit(0, bit).unwrap();
        w.write_bit(old == 0, bit, 0).unwrap();
        w.write_bit(old != 0, bit, 0).unwrap();
        assert_eq!(w.read_u8(0).unwrap(), before, "bit {bit}");
    }
}

#[test]
fn bit_index_8_is_a_domain_error_on_both_paths() {
    let mut w = BufferWriter::zeroed(1);
    assert_eq!(w.read_bit(0, 8), Err(Error::BitOutOfRange(8)));
    assert_eq!(w.write_bit(true, 8, 0), Err(Error::BitOutOfRange(8)));
}

// ---------------------------------------------------------------
// Slicing
// ---------------------------------------------------------------

#[test]
fn slice_matches_source_range() {
    let reader = BufferReader::new(vec![0x01u8, 0x02, 0x03, 0x04]);
    let sliced = reader.slice(1, 2).unwrap();
    assert_eq!(sliced.window(), &[0x02, 0x03]);
}

#[test]
fn mutating_a_slice_never_changes_the_source() {
    let source = BufferWriter::new(&[1, 2, 3, 4]);
    let sliced = source.slice(0, 4).unwrap();
    let mut child = BufferWriter::new(sliced.window());
    child.write_u8(0xFF, 0).unwrap();
    assert_eq!(source.window(), &[1, 2, 3, 4]);
    assert_eq!(child.window(), &[0xFF, 2, 3, 4]);
}

#[test]
fn slice_of_windowed_reader_stays_inside_the_window() {
    let reader = BufferReader::with_window(vec![1u8, 2, 3, 4], 1, 3).unwrap();
    let sliced = reader.slice(1, 2).unwrap();
    assert_eq!(sliced.window(), &[3, 4]);
    assert!(reader.slice(1, 3).is_err());
}

// ---------------------------------------------------------------
// Out-of-range accesses never touch adjacent memory
// ---------------------------------------------------------------

#[test]
fn every_typed_write_fails_cleanly_past_the_window() {
    let mut w = BufferWriter::with_window(&[0x55; 8], 2, 4).unwrap();
    assert!(w.write_u8(1, 4).is_err());
    assert!(w.write_u16(1, 3).is_err());
    assert!(w.write_u32(1, 1).is_err());
    assert!(w.write_u64(1, 0).is_err());
    assert!(w.put_bytes(&[1, 2], 3).is_err());
    let frozen = w.into_bytes();
    assert_eq!(frozen.as_ref(), &[0x55; 8]);
}

#[test]
fn every_typed_read_fails_past_the_window() {
    let reader = BufferReader::new(vec![0u8; 4]);
    assert!(reader.read_u8(4).is_err());
    assert!(reader.read_i16(3).is_err());
    assert!(reader.read_u32(1).is_err());
    assert!(reader.read_i64(0).is_err());
}

// ---------------------------------------------------------------
// Strings
// ---------------------------------------------------------------

#[test]
fn fixed_string_roundtrip_keeps_field_width() {
    let mut view = BufferWriter::zeroed(8);
    let field = StringField::new(0, 5);
    field.write(&mut view, "abc".to_string()).unwrap();
    let decoded = field.read(&view).unwrap();
    assert_eq!(decoded.len(), 5);
    assert_eq!(&decoded[..3], "abc");
}

#[test]
fn prefixed_string_roundtrip_exact() {
    let mut view = BufferWriter::zeroed(10);
    let field = PrefixedStringField::new(0, 10, 1);
    field.write(&mut view, "hello".to_string()).unwrap();
    assert_eq!(field.read(&view).unwrap(), "hello");
}

#[test]
fn prefixed_string_shorter_rewrite_leaves_no_stale_text() {
    let mut view = BufferWriter::zeroed(10);
    let field = PrefixedStringField::new(0, 10, 1);
    field.write(&mut view, "abcdefgh".to_string()).unwrap();
    field.write(&mut view, "xy".to_string()).unwrap();
    assert_eq!(field.read(&view).unwrap(), "xy");
    assert_eq!(view.window(), b"xy\0\0\0\0\0\0\0\x02");
}

// ---------------------------------------------------------------
// Bitmap
// ---------------------------------------------------------------

#[test]
fn bitmap_single_bit_isolation() {
    let bits = 12;
    let map = BitmapField::new(0, bits);
    for i in 0..bits {
        let mut view = BufferWriter::zeroed(map.byte_len());
        map.set_bit(&mut view, i, true).unwrap();
        for j in 0..bits {
            assert_eq!(map.get_bit(&view, j).unwrap(), u8::from(i == j));
        }
    }
}

// ---------------------------------------------------------------
// Arrays and end-to-end decodes
// ---------------------------------------------------------------

#[test]
fn uint16_array_over_eight_bytes() {
    let data = vec![0x12u8, 0x34, 0x00, 0x01, 0xFF, 0xFF, 0x80, 0x00];
    let reader = BufferReader::new(data.clone());
    let decoded = reader.to_number_array(DataType::Uint16).unwrap();
    let manual: Vec<i64> = data
        .chunks(2)
        .map(|c| (u16::from_be_bytes([c[0], c[1]])) as i64)
        .collect();
    assert_eq!(decoded.len(), 4);
    assert_eq!(decoded, manual);
}

#[test]
fn end_to_end_uint16_reads() {
    let reader = BufferReader::new(vec![0x00u8, 0x01, 0x02, 0x03]);
    assert_eq!(reader.read_u16(0).unwrap(), 1);
    assert_eq!(reader.read_u16(2).unwrap(), 515);
}

#[test]
fn scalar_field_per_type_roundtrip() {
    let mut view = BufferWriter::zeroed(8);
    ScalarField::<i8>::new(0).write(&mut view, -1).unwrap();
    assert_eq!(ScalarField::<i8>::new(0).read(&view).unwrap(), -1);
    ScalarField::<u64>::new(0)
        .write(&mut view, (1u64 << 53) + 1)
        .unwrap();
    assert_eq!(
        ScalarField::<u64>::new(0).read(&view).unwrap(),
        (1u64 << 53) + 1
    );
}
