//! Storage Error Types
//!
//! All disk operations return `Result<T>`, aliased to `Result<T, Error>`.
//! I/O errors convert via `#[from]`; buffer-layer errors surface unchanged
//! through the controller bridge.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file-backed disk needs a positive capacity when its file does not
    /// exist yet.
    #[error("disk file {} does not exist and no capacity was given", path.display())]
    MissingCapacity { path: PathBuf },

    /// A read or write addressed bytes past the disk's capacity. Raised
    /// before any I/O, never after a partial transfer.
    #[error("disk access out of capacity: offset {offset} length {length} exceeds {capacity}")]
    OutOfCapacity {
        offset: u64,
        length: u64,
        capacity: u64,
    },

    /// A disk was used before `init()` completed.
    #[error("disk not initialized")]
    NotInitialized,

    #[error(transparent)]
    Buffer(#[from] platter_core::Error),
}
