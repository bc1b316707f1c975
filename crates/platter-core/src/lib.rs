//! Platter Core - Windowed Binary Buffers with Typed Accessors
//!
//! This crate implements the data access layer that the rest of Platter is
//! built on: bounded-window byte buffers with bit-exact typed read/write
//! accessors, and offset-bound field descriptors for structured records.
//!
//! ## Main Components
//!
//! ### BufferReader / BufferWriter
//! A reader is a window `(start, len)` over an owned byte extent. Every
//! accessor takes an offset relative to the window start and is validated
//! against the window on every call. A writer is the same window with typed
//! writers and bulk copy added; it inherits all read operations through the
//! [`ByteView`] trait.
//!
//! ### DataType / Value
//! The closed catalog of the eight primitive integer encodings
//! (`int8`..`uint64`) and a tagged value type for dynamic dispatch.
//!
//! ### Fields
//! Offset-bound accessor objects ([`field::Field`]) that pair an offset and
//! width parameters with a decode/encode rule: single bits, fixed-width
//! integers, fixed and length-prefixed text, and packed bitmaps.
//!
//! ## Wire Format Rules
//!
//! - Every multi-byte integer is big-endian. There is no endianness
//!   negotiation.
//! - Bit index 0 is the most significant bit of the addressed byte
//!   (mask `0x80`), bit 7 the least significant (mask `0x01`). Reads and
//!   writes both use this ordering.
//! - 64-bit values decode to native `i64`/`u64`, which are exact.
//!
//! ## Ownership
//!
//! A view owns its extent exclusively: bytes are copied in at construction
//! and `slice` always returns an independently owned copy. Mutating a slice
//! never affects its source. The borrowed, zero-copy alternative is
//! [`ByteView::window`], whose lifetime is tied to the view.
//!
//! ## Thread Safety
//!
//! Views are plain values with no internal locking. A view is assumed to
//! have one logical owner at a time; share across threads by moving or by
//! copying, not by concurrent mutation.
//!
//! ## Example
//!
//! ```
//! use platter_core::{BufferWriter, ByteView};
//! use platter_core::field::{Field, ScalarField, StringField};
//!
//! let mut view = BufferWriter::zeroed(16);
//!
//! // Direct typed access
//! view.write_u16(515, 0).unwrap();
//! assert_eq!(view.read_u16(0).unwrap(), 515);
//!
//! // Structured access through field descriptors
//! let count = ScalarField::<u32>::new(2);
//! let name = StringField::new(6, 10);
//! count.write(&mut view, 42).unwrap();
//! name.write(&mut view, "hello".to_string()).unwrap();
//! assert_eq!(count.read(&view).unwrap(), 42);
//! assert_eq!(&name.read(&view).unwrap()[..5], "hello");
//! ```

pub mod datatype;
pub mod error;
pub mod field;
pub mod reader;
pub mod writer;

pub use datatype::{DataType, Value};
pub use error::{Error, Result};
pub use reader::{BufferReader, ByteView};
pub use writer::BufferWriter;
