//! Platter Disk - Byte-Addressable Storage Backends
//!
//! This crate implements the storage side of Platter: a pluggable,
//! byte-addressable backend behind the [`Disk`] trait, plus the thin
//! controller that bridges persisted extents into the in-memory views of
//! `platter-core`.
//!
//! ## Contract with the Core
//!
//! The buffer layer never performs I/O itself. Its contract with a backend
//! is a plain request/response:
//!
//! 1. `init()` completes before any read or write (readiness barrier).
//! 2. `read(offset, length)` hands back an already-resident, stable buffer
//!    of exactly `length` bytes.
//! 3. `write(data, offset)` persists a buffer as-is.
//!
//! No cancellation or partial-completion semantics are exposed; a request
//! either completes or fails.
//!
//! ## Backends
//!
//! - [`MemoryDisk`]: a zero-filled in-memory extent. Useful for tests and
//!   volatile scratch volumes.
//! - [`FileDisk`]: one regular file as the extent. `init` creates the file
//!   or re-sizes it to the requested capacity when sizes mismatch.
//!
//! ## Scope
//!
//! The cluster/metadata structures in [`layout`] are layout placeholders
//! only. There is no allocation, cluster chaining, free-space tracking, or
//! crash recovery here.

pub mod controller;
pub mod disk;
pub mod error;
pub mod layout;

pub use controller::DiskController;
pub use disk::{Disk, FileDisk, MemoryDisk};
pub use error::{Error, Result};
pub use layout::{FileMetaLayout, VolumeLayout};
