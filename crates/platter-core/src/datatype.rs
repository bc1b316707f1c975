//! Data Type Catalog
//!
//! The closed enumeration of the eight primitive integer encodings and the
//! tagged [`Value`] type used by the dynamic read/write dispatchers.
//!
//! ## Encodings
//!
//! | Tag     | Width | Range                      |
//! |---------|-------|----------------------------|
//! | int8    | 1     | -128 .. 127                |
//! | uint8   | 1     | 0 .. 255                   |
//! | int16   | 2     | -32768 .. 32767            |
//! | uint16  | 2     | 0 .. 65535                 |
//! | int32   | 4     | -2^31 .. 2^31-1            |
//! | uint32  | 4     | 0 .. 2^32-1                |
//! | int64   | 8     | -2^63 .. 2^63-1            |
//! | uint64  | 8     | 0 .. 2^64-1                |
//!
//! All encodings are big-endian on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tag for one of the eight primitive integer encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
}

impl DataType {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            DataType::Int8 | DataType::Uint8 => 1,
            DataType::Int16 | DataType::Uint16 => 2,
            DataType::Int32 | DataType::Uint32 => 4,
            DataType::Int64 | DataType::Uint64 => 8,
        }
    }

    /// The unsigned encoding for a given byte width.
    ///
    /// Only `{1, 2, 4, 8}` map to an encoding; anything else is
    /// [`Error::InvalidWidth`].
    pub fn from_width(width: usize) -> Result<Self> {
        match width {
            1 => Ok(DataType::Uint8),
            2 => Ok(DataType::Uint16),
            4 => Ok(DataType::Uint32),
            8 => Ok(DataType::Uint64),
            other => Err(Error::InvalidWidth(other)),
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int8 => "int8",
            DataType::Uint8 => "uint8",
            DataType::Int16 => "int16",
            DataType::Uint16 => "uint16",
            DataType::Int32 => "int32",
            DataType::Uint32 => "uint32",
            DataType::Int64 => "int64",
            DataType::Uint64 => "uint64",
        };
        f.write_str(name)
    }
}

/// A decoded value tagged with its encoding.
///
/// Returned by [`ByteView::read_value`](crate::ByteView::read_value) and
/// accepted by [`BufferWriter::write_value`](crate::BufferWriter::write_value)
/// when the encoding is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
}

impl Value {
    /// The encoding this value carries.
    pub const fn data_type(&self) -> DataType {
        match self {
            Value::Int8(_) => DataType::Int8,
            Value::Uint8(_) => DataType::Uint8,
            Value::Int16(_) => DataType::Int16,
            Value::Uint16(_) => DataType::Uint16,
            Value::Int32(_) => DataType::Int32,
            Value::Uint32(_) => DataType::Uint32,
            Value::Int64(_) => DataType::Int64,
            Value::Uint64(_) => DataType::Uint64,
        }
    }

    /// Widen to `i64`. `None` if a `Uint64` does not fit.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int8(v) => Some(v as i64),
            Value::Uint8(v) => Some(v as i64),
            Value::Int16(v) => Some(v as i64),
            Value::Uint16(v) => Some(v as i64),
            Value::Int32(v) => Some(v as i64),
            Value::Uint32(v) => Some(v as i64),
            Value::Int64(v) => Some(v),
            Value::Uint64(v) => i64::try_from(v).ok(),
        }
    }

    /// Widen to `u64`. `None` for negative values.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Int8(v) => u64::try_from(v).ok(),
            Value::Uint8(v) => Some(v as u64),
            Value::Int16(v) => u64::try_from(v).ok(),
            Value::Uint16(v) => Some(v as u64),
            Value::Int32(v) => u64::try_from(v).ok(),
            Value::Uint32(v) => Some(v as u64),
            Value::Int64(v) => u64::try_from(v).ok(),
            Value::Uint64(v) => Some(v),
        }
    }
}
