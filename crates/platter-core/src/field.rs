//! Field Descriptors
//!
//! A field descriptor binds an offset and width parameters to one
//! decode/encode rule, turning repeated structured access into a single
//! get/set pair. Descriptors are plain values: they own no bytes and borrow
//! the view only for the duration of a call, so one schema's worth of
//! descriptors can serve any number of views.
//!
//! ## Variants
//!
//! | Descriptor             | Parameters              | Value            |
//! |------------------------|-------------------------|------------------|
//! | [`BitField`]           | offset, bit             | `bool`           |
//! | [`ScalarField<T>`]     | offset                  | `i8`..`u64`      |
//! | [`StringField`]        | offset, width           | `String`         |
//! | [`PrefixedStringField`]| offset, width, prefix   | `String`         |
//! | [`BitmapField`]        | offset, bits            | `Vec<u8>` + bits |
//!
//! ## String Encoding
//!
//! Both string variants zero-fill the full field width on every write, so a
//! shorter value never leaves stale bytes from a previous longer one behind.
//! A fixed [`StringField`] decodes all of its bytes with no trimming; the
//! caller decides what padding means. A [`PrefixedStringField`] stores the
//! text length in its trailing bytes and decodes exactly that many leading
//! bytes back.
//!
//! ## Example
//!
//! ```
//! use platter_core::BufferWriter;
//! use platter_core::field::{Field, PrefixedStringField};
//!
//! let mut view = BufferWriter::zeroed(10);
//! let name = PrefixedStringField::new(0, 10, 1);
//! name.write(&mut view, "hello".to_string()).unwrap();
//! assert_eq!(name.read(&view).unwrap(), "hello");
//! ```

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::reader::ByteView;
use crate::writer::BufferWriter;

/// An offset-bound typed accessor. `read` decodes through any view,
/// `write` encodes through a mutable one.
pub trait Field {
    type Value;

    fn read(&self, view: &impl ByteView) -> Result<Self::Value>;

    fn write(&self, view: &mut BufferWriter, value: Self::Value) -> Result<()>;
}

/// A single bit at a fixed `(offset, bit)` position. Bit 0 is the most
/// significant bit of the addressed byte.
#[derive(Debug, Clone, Copy)]
pub struct BitField {
    pub offset: usize,
    pub bit: u8,
}

impl BitField {
    pub const fn new(offset: usize, bit: u8) -> Self {
        Self { offset, bit }
    }
}

impl Field for BitField {
    type Value = bool;

    fn read(&self, view: &impl ByteView) -> Result<bool> {
        Ok(view.read_bit(self.offset, self.bit)? != 0)
    }

    fn write(&self, view: &mut BufferWriter, value: bool) -> Result<()> {
        view.write_bit(value, self.bit, self.offset)
    }
}

/// A fixed-width big-endian integer at a fixed offset, generic over the
/// eight native integer types of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScalarField<T> {
    pub offset: usize,
    _ty: PhantomData<T>,
}

impl<T> ScalarField<T> {
    pub const fn new(offset: usize) -> Self {
        Self {
            offset,
            _ty: PhantomData,
        }
    }
}

macro_rules! scalar_field {
    ($ty:ty, $read:ident, $write:ident) => {
        impl Field for ScalarField<$ty> {
            type Value = $ty;

            fn read(&self, view: &impl ByteView) -> Result<$ty> {
                view.$read(self.offset)
            }

            fn write(&self, view: &mut BufferWriter, value: $ty) -> Result<()> {
                view.$write(value, self.offset)
            }
        }
    };
}

scalar_field!(i8, read_i8, write_i8);
scalar_field!(u8, read_u8, write_u8);
scalar_field!(i16, read_i16, write_i16);
scalar_field!(u16, read_u16, write_u16);
scalar_field!(i32, read_i32, write_i32);
scalar_field!(u32, read_u32, write_u32);
scalar_field!(i64, read_i64, write_i64);
scalar_field!(u64, read_u64, write_u64);

/// Fixed-width text. Reads decode all `width` bytes with no trimming;
/// writes zero-fill the full width and reject text longer than `width`.
#[derive(Debug, Clone, Copy)]
pub struct StringField {
    pub offset: usize,
    pub width: usize,
}

impl StringField {
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }
}

impl Field for StringField {
    type Value = String;

    fn read(&self, view: &impl ByteView) -> Result<String> {
        Ok(view.slice(self.offset, self.width)?.decode_utf8())
    }

    fn write(&self, view: &mut BufferWriter, value: String) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > self.width {
            return Err(Error::StringTooLong {
                len: bytes.len(),
                width: self.width,
            });
        }
        let mut staged = vec![0u8; self.width];
        staged[..bytes.len()].copy_from_slice(bytes);
        view.put_bytes(&staged, self.offset)
    }
}

/// Text left-aligned in `width` bytes with its byte length stored as an
/// unsigned big-endian integer in the trailing `prefix_width` bytes.
///
/// Wire layout: `[text][zero padding][length: prefix_width bytes]`, fixed
/// total width. `prefix_width` must be one of `{1, 2, 4, 8}`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixedStringField {
    pub offset: usize,
    pub width: usize,
    pub prefix_width: usize,
}

impl PrefixedStringField {
    pub const fn new(offset: usize, width: usize, prefix_width: usize) -> Self {
        Self {
            offset,
            width,
            prefix_width,
        }
    }

    /// Relative offset of the trailing length prefix.
    fn prefix_offset(&self) -> Result<usize> {
        self.width
            .checked_sub(self.prefix_width)
            .ok_or(Error::LengthOutOfRange {
                offset: self.prefix_width,
                length: self.prefix_width,
                len: self.width,
            })
    }
}

impl Field for PrefixedStringField {
    type Value = String;

    fn read(&self, view: &impl ByteView) -> Result<String> {
        let text_len = view.read_uint(self.prefix_width, self.offset + self.prefix_offset()?)?;
        Ok(view.slice(self.offset, text_len as usize)?.decode_utf8())
    }

    fn write(&self, view: &mut BufferWriter, value: String) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > self.width {
            return Err(Error::StringTooLong {
                len: bytes.len(),
                width: self.width,
            });
        }
        // Stage the full field so the view sees one atomic copy.
        let mut staged = BufferWriter::zeroed(self.width);
        staged.put_bytes(bytes, 0)?;
        staged.write_uint(bytes.len() as u64, self.prefix_width, self.prefix_offset()?)?;
        view.put_view(&staged, self.offset)
    }
}

/// Packed bits over `ceil(bits / 8)` bytes.
///
/// `get_bit`/`set_bit` address individual bits (index `< bits`). The
/// whole-field [`Field`] impl reads and writes at byte granularity
/// (`Vec<u8>`); the two APIs are deliberately separate and not
/// interchangeable.
#[derive(Debug, Clone, Copy)]
pub struct BitmapField {
    pub offset: usize,
    pub bits: usize,
}

impl BitmapField {
    pub const fn new(offset: usize, bits: usize) -> Self {
        Self { offset, bits }
    }

    /// Backing width in bytes.
    pub const fn byte_len(&self) -> usize {
        (self.bits + 7) / 8
    }

    pub fn get_bit(&self, view: &impl ByteView, index: usize) -> Result<u8> {
        if index >= self.bits {
            return Err(Error::BitIndexOutOfRange {
                index,
                bits: self.bits,
            });
        }
        view.read_bit(self.offset + index / 8, (index % 8) as u8)
    }

    pub fn set_bit(&self, view: &mut BufferWriter, index: usize, value: bool) -> Result<()> {
        if index >= self.bits {
            return Err(Error::BitIndexOutOfRange {
                index,
                bits: self.bits,
            });
        }
        view.write_bit(value, (index % 8) as u8, self.offset + index / 8)
    }
}

impl Field for BitmapField {
    type Value = Vec<u8>;

    fn read(&self, view: &impl ByteView) -> Result<Vec<u8>> {
        Ok(view.slice(self.offset, self.byte_len())?.window().to_vec())
    }

    fn write(&self, view: &mut BufferWriter, value: Vec<u8>) -> Result<()> {
        if value.len() > self.byte_len() {
            return Err(Error::LengthOutOfRange {
                offset: self.offset,
                length: value.len(),
                len: self.byte_len(),
            });
        }
        view.put_bytes(&value, self.offset)
    }
}
