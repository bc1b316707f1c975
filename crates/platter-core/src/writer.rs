//! Mutable Views
//!
//! [`BufferWriter`] is the mutable counterpart of
//! [`BufferReader`](crate::BufferReader): the same `(extent, start, len)`
//! window with typed writers and bulk copy added. All read operations come
//! from the [`ByteView`] trait.
//!
//! ## No Partial Writes
//!
//! Every write validates its full destination range before touching the
//! extent. That holds for the array helpers too: `put_array` checks the
//! whole destination span up front, so a failed call leaves the window
//! byte-for-byte unchanged.
//!
//! ## Bit Writes
//!
//! `write_bit` is a read-modify-write of the containing byte. Only the
//! targeted bit changes; the other seven keep their values. Bit ordering is
//! MSB-first, matching the read path.
//!
//! ## Example
//!
//! ```
//! use platter_core::{BufferWriter, ByteView, DataType};
//!
//! let mut view = BufferWriter::zeroed(8);
//! view.put_array(&[1, 2, 3, 4], DataType::Uint16, 0).unwrap();
//! assert_eq!(view.to_number_array(DataType::Uint16).unwrap(), vec![1, 2, 3, 4]);
//! ```

use bytes::{Bytes, BytesMut};

use crate::datatype::{DataType, Value};
use crate::error::{Error, Result};
use crate::reader::ByteView;

/// A windowed, bounds-checked read/write view over an owned byte extent.
#[derive(Debug)]
pub struct BufferWriter {
    /// The owned extent. May be larger than the window.
    data: BytesMut,

    /// Absolute position of the window's first byte.
    start: usize,

    /// Window length in bytes.
    len: usize,
}

impl ByteView for BufferWriter {
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

impl BufferWriter {
    /// A writer whose window covers a copy of `data`.
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: BytesMut::from(data),
            start: 0,
            len: data.len(),
        }
    }

    /// A writer over a fresh zero-filled extent of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: BytesMut::zeroed(len),
            start: 0,
            len,
        }
    }

    /// A writer windowed to `len` bytes starting at `start` of a copy of
    /// `data`. Fails when the window does not fit inside the extent.
    pub fn with_window(data: &[u8], start: usize, len: usize) -> Result<Self> {
        match start.checked_add(len) {
            Some(end) if end <= data.len() => Ok(Self {
                data: BytesMut::from(data),
                start,
                len,
            }),
            _ => Err(Error::LengthOutOfRange {
                offset: start,
                length: len,
                len: data.len(),
            }),
        }
    }

    /// Consume the writer, freezing the whole extent.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    /// Validate a `(offset, length)` destination span and return its
    /// absolute start, or fail without mutating anything.
    fn locate_span(&self, offset: usize, length: usize) -> Result<usize> {
        match offset.checked_add(length) {
            Some(end) if end <= self.len => Ok(self.start + offset),
            _ => Err(Error::LengthOutOfRange {
                offset,
                length,
                len: self.len,
            }),
        }
    }

    /// Bulk-copy `src` into the window at `offset`.
    ///
    /// To copy part of a source, subslice it at the call site:
    /// `view.put_bytes(&src[2..5], offset)`.
    pub fn put_bytes(&mut self, src: &[u8], offset: usize) -> Result<()> {
        let pos = self.locate_span(offset, src.len())?;
        self.data[pos..pos + src.len()].copy_from_slice(src);
        Ok(())
    }

    /// Bulk-copy another view's window into this one at `offset`. The
    /// source is materialized first, so self-overlapping copies are safe.
    pub fn put_view(&mut self, source: &impl ByteView, offset: usize) -> Result<()> {
        let bytes = source.materialize();
        self.put_bytes(&bytes, offset)
    }

    /// Set or clear one bit of the byte at `offset`. Bit 0 is the most
    /// significant bit. The other seven bits are untouched.
    pub fn write_bit(&mut self, value: bool, bit: u8, offset: usize) -> Result<()> {
        if bit > 7 {
            return Err(Error::BitOutOfRange(bit));
        }
        let byte = self.read_u8(offset)?;
        let mask = 0x80u8 >> bit;
        let next = if value { byte | mask } else { byte & !mask };
        self.write_u8(next, offset)
    }

    pub fn write_i8(&mut self, value: i8, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 1)?;
        self.data[pos] = value as u8;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 1)?;
        self.data[pos] = value;
        Ok(())
    }

    pub fn write_i16(&mut self, value: i16, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 2)?;
        self.data[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 2)?;
        self.data[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn write_i32(&mut self, value: i32, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 4)?;
        self.data[pos..pos + 4].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 4)?;
        self.data[pos..pos + 4].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 8)?;
        self.data[pos..pos + 8].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn write_u64(&mut self, value: u64, offset: usize) -> Result<()> {
        let pos = self.locate(offset, 8)?;
        self.data[pos..pos + 8].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Write a tagged value at `offset` using its own encoding.
    pub fn write_value(&mut self, value: Value, offset: usize) -> Result<()> {
        match value {
            Value::Int8(v) => self.write_i8(v, offset),
            Value::Uint8(v) => self.write_u8(v, offset),
            Value::Int16(v) => self.write_i16(v, offset),
            Value::Uint16(v) => self.write_u16(v, offset),
            Value::Int32(v) => self.write_i32(v, offset),
            Value::Uint32(v) => self.write_u32(v, offset),
            Value::Int64(v) => self.write_i64(v, offset),
            Value::Uint64(v) => self.write_u64(v, offset),
        }
    }

    /// Write an unsigned big-endian integer of `width` bytes (`1`, `2`,
    /// `4` or `8`). The value is truncated to the width.
    pub fn write_uint(&mut self, value: u64, width: usize, offset: usize) -> Result<()> {
        match DataType::from_width(width)? {
            DataType::Uint8 => self.write_u8(value as u8, offset),
            DataType::Uint16 => self.write_u16(value as u16, offset),
            DataType::Uint32 => self.write_u32(value as u32, offset),
            _ => self.write_u64(value, offset),
        }
    }

    /// Write `values` as a sequence of `ty` elements starting at `offset`,
    /// advancing by the element width. Each value is truncated to the
    /// element width.
    ///
    /// The whole destination span is validated up front; a failed call
    /// writes nothing. 64-bit tags are [`Error::InvalidType`]; use
    /// [`put_i64_array`](BufferWriter::put_i64_array) or
    /// [`put_u64_array`](BufferWriter::put_u64_array) for those.
    pub fn put_array(&mut self, values: &[i64], ty: DataType, offset: usize) -> Result<()> {
        let step = ty.width();
        if step == 8 {
            return Err(Error::InvalidType(ty));
        }
        self.locate_span(offset, values.len() * step)?;
        for (i, &v) in values.iter().enumerate() {
            let at = offset + i * step;
            match ty {
                DataType::Int8 => self.write_i8(v as i8, at)?,
                DataType::Uint8 => self.write_u8(v as u8, at)?,
                DataType::Int16 => self.write_i16(v as i16, at)?,
                DataType::Uint16 => self.write_u16(v as u16, at)?,
                DataType::Int32 => self.write_i32(v as i32, at)?,
                DataType::Uint32 => self.write_u32(v as u32, at)?,
                DataType::Int64 | DataType::Uint64 => return Err(Error::InvalidType(ty)),
            }
        }
        Ok(())
    }

    /// Write signed 8-byte big-endian elements starting at `offset`.
    pub fn put_i64_array(&mut self, values: &[i64], offset: usize) -> Result<()> {
        self.locate_span(offset, values.len() * 8)?;
        for (i, &v) in values.iter().enumerate() {
            self.write_i64(v, offset + i * 8)?;
        }
        Ok(())
    }

    /// Write unsigned 8-byte big-endian elements starting at `offset`.
    pub fn put_u64_array(&mut self, values: &[u64], offset: usize) -> Result<()> {
        self.locate_span(offset, values.len() * 8)?;
        for (i, &v) in values.iter().enumerate() {
            self.write_u64(v, offset + i * 8)?;
        }
        Ok(())
    }
}
