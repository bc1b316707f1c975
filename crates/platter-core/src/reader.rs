//! Bounded Read Views
//!
//! This module implements [`BufferReader`], a windowed, bounds-checked read
//! accessor over an owned byte extent, and the [`ByteView`] trait that
//! carries every read operation so [`BufferWriter`](crate::BufferWriter)
//! inherits them unchanged.
//!
//! ## Window Model
//!
//! ```text
//! extent:  [ .. .. | a b c d e f | .. .. ]
//!                   ^start       ^start + len
//! ```
//!
//! A view is `(extent, start, len)`. Every accessor offset is relative to
//! `start` and is validated against the window on every call; an empty
//! window (`len == 0`) is allowed. The extent is owned by the view: bytes
//! are copied in at construction and never aliased out.
//!
//! ## Bounds Checking
//!
//! All typed readers funnel through one primitive, [`ByteView::locate`],
//! which maps a relative `(offset, width)` pair to an absolute extent
//! position or fails with [`Error::OffsetOutOfRange`]. Derived helpers
//! (slices, arrays, dynamic dispatch) build on the primitives, so no
//! higher-level call can bypass the check.
//!
//! ## Copy Semantics
//!
//! [`ByteView::slice`] and [`ByteView::materialize`] always return an
//! independently owned copy of the addressed bytes. Mutating the copy never
//! affects the source and vice versa. [`ByteView::window`] is the explicit
//! zero-copy alternative: a plain borrow of the window's bytes.
//!
//! ## Bit Ordering
//!
//! Bit index 0 addresses the most significant bit of a byte (mask `0x80`),
//! bit 7 the least significant (mask `0x01`). An early revision of this
//! codec read LSB-first while writing MSB-first; MSB-first on both paths is
//! canonical and the tests pin it.

use bytes::{Buf, Bytes};

use crate::datatype::{DataType, Value};
use crate::error::{Error, Result};

/// Read operations shared by [`BufferReader`] and
/// [`BufferWriter`](crate::BufferWriter).
///
/// Implementors provide the backing extent and window geometry; every read
/// accessor is a provided method.
pub trait ByteView {
    /// The whole backing extent, including bytes outside the window.
    fn extent(&self) -> &[u8];

    /// Absolute extent position of the window's first byte.
    fn start(&self) -> usize;

    /// Window length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a relative `(offset, width)` access to an absolute extent
    /// position, or fail without touching anything.
    fn locate(&self, offset: usize, width: usize) -> Result<usize> {
        match offset.checked_add(width) {
            Some(end) if end <= self.len() => Ok(self.start() + offset),
            _ => Err(Error::OffsetOutOfRange {
                offset,
                width,
                len: self.len(),
            }),
        }
    }

    /// The window's bytes as a plain borrow (zero-copy).
    fn window(&self) -> &[u8] {
        &self.extent()[self.start()..self.start() + self.len()]
    }

    /// An independently owned copy of the window's bytes.
    fn materialize(&self) -> Bytes {
        Bytes::copy_from_slice(self.window())
    }

    /// A new reader over a copy of `length` bytes starting at `offset`.
    ///
    /// The copy is independent: mutating either side never affects the
    /// other.
    fn slice(&self, offset: usize, length: usize) -> Result<BufferReader> {
        match offset.checked_add(length) {
            Some(end) if end <= self.len() => {
                let start = self.start() + offset;
                Ok(BufferReader::new(Bytes::copy_from_slice(
                    &self.extent()[start..start + length],
                )))
            }
            _ => Err(Error::LengthOutOfRange {
                offset,
                length,
                len: self.len(),
            }),
        }
    }

    /// Like [`slice`](ByteView::slice), taking everything from `offset` to
    /// the end of the window.
    fn slice_from(&self, offset: usize) -> Result<BufferReader> {
        if offset > self.len() {
            return Err(Error::LengthOutOfRange {
                offset,
                length: 0,
                len: self.len(),
            });
        }
        self.slice(offset, self.len() - offset)
    }

    /// Read one bit of the byte at `offset`. Bit 0 is the most significant
    /// bit (mask `0x80`), bit 7 the least significant.
    fn read_bit(&self, offset: usize, bit: u8) -> Result<u8> {
        if bit > 7 {
            return Err(Error::BitOutOfRange(bit));
        }
        let byte = self.read_u8(offset)?;
        let mask = 0x80u8 >> bit;
        Ok(u8::from(byte & mask != 0))
    }

    fn read_i8(&self, offset: usize) -> Result<i8> {
        let pos = self.locate(offset, 1)?;
        Ok(self.extent()[pos] as i8)
    }

    fn read_u8(&self, offset: usize) -> Result<u8> {
        let pos = self.locate(offset, 1)?;
        Ok(self.extent()[pos])
    }

    fn read_i16(&self, offset: usize) -> Result<i16> {
        let pos = self.locate(offset, 2)?;
        let mut cursor = &self.extent()[pos..pos + 2];
        Ok(cursor.get_i16())
    }

    fn read_u16(&self, offset: usize) -> Result<u16> {
        let pos = self.locate(offset, 2)?;
        let mut cursor = &self.extent()[pos..pos + 2];
        Ok(cursor.get_u16())
    }

    fn read_i32(&self, offset: usize) -> Result<i32> {
        let pos = self.locate(offset, 4)?;
        let mut cursor = &self.extent()[pos..pos + 4];
        Ok(cursor.get_i32())
    }

    fn read_u32(&self, offset: usize) -> Result<u32> {
        let pos = self.locate(offset, 4)?;
        let mut cursor = &self.extent()[pos..pos + 4];
        Ok(cursor.get_u32())
    }

    fn read_i64(&self, offset: usize) -> Result<i64> {
        let pos = self.locate(offset, 8)?;
        let mut cursor = &self.extent()[pos..pos + 8];
        Ok(cursor.get_i64())
    }

    fn read_u64(&self, offset: usize) -> Result<u64> {
        let pos = self.locate(offset, 8)?;
        let mut cursor = &self.extent()[pos..pos + 8];
        Ok(cursor.get_u64())
    }

    /// Read the encoding named by `ty` at `offset`, tagged.
    fn read_value(&self, ty: DataType, offset: usize) -> Result<Value> {
        Ok(match ty {
            DataType::Int8 => Value::Int8(self.read_i8(offset)?),
            DataType::Uint8 => Value::Uint8(self.read_u8(offset)?),
            DataType::Int16 => Value::Int16(self.read_i16(offset)?),
            DataType::Uint16 => Value::Uint16(self.read_u16(offset)?),
            DataType::Int32 => Value::Int32(self.read_i32(offset)?),
            DataType::Uint32 => Value::Uint32(self.read_u32(offset)?),
            DataType::Int64 => Value::Int64(self.read_i64(offset)?),
            DataType::Uint64 => Value::Uint64(self.read_u64(offset)?),
        })
    }

    /// Read an unsigned big-endian integer of `width` bytes (`1`, `2`, `4`
    /// or `8`).
    fn read_uint(&self, width: usize, offset: usize) -> Result<u64> {
        Ok(match DataType::from_width(width)? {
            DataType::Uint8 => self.read_u8(offset)? as u64,
            DataType::Uint16 => self.read_u16(offset)? as u64,
            DataType::Uint32 => self.read_u32(offset)? as u64,
            _ => self.read_u64(offset)?,
        })
    }

    /// Decode the whole window as UTF-8 text, replacing invalid sequences.
    /// No trimming is applied.
    fn decode_utf8(&self) -> String {
        String::from_utf8_lossy(self.window()).into_owned()
    }

    /// Decode the whole window as a homogeneous sequence of `ty` elements,
    /// advancing by the element width. A trailing partial element is not
    /// emitted.
    ///
    /// 64-bit tags are [`Error::InvalidType`]; use
    /// [`to_i64_array`](ByteView::to_i64_array) or
    /// [`to_u64_array`](ByteView::to_u64_array) for those.
    fn to_number_array(&self, ty: DataType) -> Result<Vec<i64>> {
        let step = ty.width();
        if step == 8 {
            return Err(Error::InvalidType(ty));
        }
        let mut cursor = self.window();
        let mut out = Vec::with_capacity(cursor.len() / step);
        while cursor.remaining() >= step {
            out.push(match ty {
                DataType::Int8 => cursor.get_i8() as i64,
                DataType::Uint8 => cursor.get_u8() as i64,
                DataType::Int16 => cursor.get_i16() as i64,
                DataType::Uint16 => cursor.get_u16() as i64,
                DataType::Int32 => cursor.get_i32() as i64,
                DataType::Uint32 => cursor.get_u32() as i64,
                DataType::Int64 | DataType::Uint64 => return Err(Error::InvalidType(ty)),
            });
        }
        Ok(out)
    }

    /// Decode the whole window as signed 8-byte big-endian elements.
    fn to_i64_array(&self) -> Vec<i64> {
        let mut cursor = self.window();
        let mut out = Vec::with_capacity(cursor.len() / 8);
        while cursor.remaining() >= 8 {
            out.push(cursor.get_i64());
        }
        out
    }

    /// Decode the whole window as unsigned 8-byte big-endian elements.
    fn to_u64_array(&self) -> Vec<u64> {
        let mut cursor = self.window();
        let mut out = Vec::with_capacity(cursor.len() / 8);
        while cursor.remaining() >= 8 {
            out.push(cursor.get_u64());
        }
        out
    }
}

/// A windowed, bounds-checked read view over an owned byte extent.
#[derive(Debug, Clone)]
pub struct BufferReader {
    /// The owned extent. May be larger than the window.
    data: Bytes,

    /// Absolute position of the window's first byte.
    start: usize,

    /// Window length in bytes.
    len: usize,
}

impl BufferReader {
    /// A reader whose window covers the whole extent.
    pub fn new(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let len = data.len();
        Self {
            data,
            start: 0,
            len,
        }
    }

    /// A reader windowed to `len` bytes starting at `start`. Fails when the
    /// window does not fit inside the extent; an empty window is fine.
    pub fn with_window(data: impl Into<Bytes>, start: usize, len: usize) -> Result<Self> {
        let data = data.into();
        match start.checked_add(len) {
            Some(end) if end <= data.len() => Ok(Self { data, start, len }),
            _ => Err(Error::LengthOutOfRange {
                offset: start,
                length: len,
                len: data.len(),
            }),
        }
    }
}

impl ByteView for BufferReader {
    fn extent(&self) -> &[u8] {
        &self.data
    }

    fn start(&self) -> usize {
        self.start
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_geometry() {
        let reader = BufferReader::with_window(vec![1u8, 2, 3, 4, 5], 1, 3).unwrap();
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.window(), &[2, 3, 4]);
        assert_eq!(reader.materialize().as_ref(), &[2, 3, 4]);
    }

    #[test]
    fn empty_window_is_allowed() {
        let reader = BufferReader::with_window(vec![1u8, 2], 2, 0).unwrap();
        assert!(reader.is_empty());
        assert_eq!(
            reader.read_u8(0),
            Err(Error::OffsetOutOfRange {
                offset: 0,
                width: 1,
                len: 0
            })
        );
    }

    #[test]
    fn window_must_fit_extent() {
        assert!(BufferReader::with_window(vec![0u8; 4], 3, 2).is_err());
        assert!(BufferReader::with_window(vec![0u8; 4], 5, 0).is_err());
    }

    #[test]
    fn reads_are_relative_to_window_start() {
        let reader = BufferReader::with_window(vec![0xAAu8, 0x01, 0x02, 0xBB], 1, 2).unwrap();
        assert_eq!(reader.read_u8(0).unwrap(), 0x01);
        assert_eq!(reader.read_u16(0).unwrap(), 0x0102);
        // Bytes outside the window are unreachable even though they exist
        // in the extent.
        assert!(reader.read_u16(1).is_err());
    }

    #[test]
    fn read_bit_is_msb_first() {
        let reader = BufferReader::new(vec![0b1010_1010u8]);
        for (bit, expected) in [(0u8, 1u8), (1, 0), (2, 1), (3, 0), (4, 1), (5, 0), (6, 1), (7, 0)]
        {
            assert_eq!(reader.read_bit(0, bit).unwrap(), expected, "bit {bit}");
        }
        assert_eq!(reader.read_bit(0, 8), Err(Error::BitOutOfRange(8)));
    }

    #[test]
    fn slice_is_an_independent_copy() {
        let reader = BufferReader::new(vec![1u8, 2, 3, 4]);
        let sliced = reader.slice(1, 2).unwrap();
        assert_eq!(sliced.window(), &[2, 3]);
        let err = reader.slice(2, 3).unwrap_err();
        assert_eq!(
            err,
            Error::LengthOutOfRange {
                offset: 2,
                length: 3,
                len: 4
            }
        );
    }

    #[test]
    fn slice_from_takes_the_remainder() {
        let reader = BufferReader::new(vec![1u8, 2, 3, 4]);
        assert_eq!(reader.slice_from(2).unwrap().window(), &[3, 4]);
        assert_eq!(reader.slice_from(4).unwrap().len(), 0);
        assert!(reader.slice_from(5).is_err());
    }

    #[test]
    fn number_array_skips_partial_trailing_element() {
        let reader = BufferReader::new(vec![0x00u8, 0x01, 0x00, 0x02, 0xFF]);
        assert_eq!(
            reader.to_number_array(DataType::Uint16).unwrap(),
            vec![1, 2]
        );
        assert_eq!(
            reader.to_number_array(DataType::Uint64),
            Err(Error::InvalidType(DataType::Uint64))
        );
    }

    #[test]
    fn u64_array_decodes_full_elements_only() {
        let mut data = vec![0u8; 8];
        data[7] = 9;
        data.extend_from_slice(&[1, 2, 3]); // partial trailing element
        let reader = BufferReader::new(data);
        assert_eq!(reader.to_u64_array(), vec![9]);
        assert_eq!(reader.to_i64_array(), vec![9]);
    }
}
