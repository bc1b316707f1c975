//! Error Types for the Buffer Layer
//!
//! Every error here signals a programming-contract violation at the call
//! site: an access outside a view's window, a bit index outside a byte, a
//! dispatch helper handed a tag it cannot encode, or text that does not fit
//! its field. There is no retry policy. Failed accesses never mutate the
//! view, so a caller observing an error can rely on the bytes being exactly
//! as they were.
//!
//! All functions in this crate return `Result<T>`, aliased to
//! `Result<T, Error>`, so `?` propagation works throughout.

use thiserror::Error;

use crate::datatype::DataType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A typed access addressed bytes outside the view's window.
    #[error("offset out of buffer range: offset {offset} width {width} exceeds {len} byte view")]
    OffsetOutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// A slice or bulk copy addressed a range outside the view's window.
    #[error("length out of buffer range: offset {offset} length {length} exceeds {len} byte view")]
    LengthOutOfRange {
        offset: usize,
        length: usize,
        len: usize,
    },

    /// Bit index outside `[0, 7]`.
    #[error("bit out of range: {0}")]
    BitOutOfRange(u8),

    /// Bitmap bit index at or beyond the bitmap's bit count.
    #[error("bitmap index out of range: {index} >= {bits}")]
    BitIndexOutOfRange { index: usize, bits: usize },

    /// A dispatch helper was handed a tag it does not support.
    #[error("invalid type {0}")]
    InvalidType(DataType),

    /// No unsigned encoding exists for the requested byte width.
    #[error("unknown data type with {0} bytes")]
    InvalidWidth(usize),

    /// Encoded text exceeds the fixed width of a string field.
    #[error("string too long: {len} bytes exceeds field width {width}")]
    StringTooLong { len: usize, width: usize },
}
