//! Disk Backends
//!
//! A [`Disk`] is a flat, byte-addressable extent: `capacity` bytes
//! reachable through offset-based reads and writes. The trait is async
//! because a backend may perform real I/O, but the contract stays
//! request/response: `read` returns an already-resident buffer of exactly
//! the requested length, `write` persists the given bytes, and neither
//! exposes cancellation or partial completion.
//!
//! ## Backends
//!
//! ### MemoryDisk
//! A zero-filled in-memory extent of the requested capacity. `init` is a
//! no-op barrier.
//!
//! ### FileDisk
//! One regular file as the extent, driven through `tokio::fs`. On first
//! `init`:
//! - a missing file is created at the requested capacity (capacity `0` is
//!   an error in that case);
//! - an existing file whose size differs from a positive requested capacity
//!   is wiped and re-sized, so the extent always starts zero-filled at the
//!   configured size;
//! - a capacity of `0` adopts the existing file's size.
//!
//! ## Bounds
//!
//! Accesses past `capacity` fail with [`Error::OutOfCapacity`] before any
//! I/O happens. The extent never grows implicitly.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A flat byte-addressable storage extent.
#[async_trait]
pub trait Disk: Send {
    /// Total addressable extent size in bytes.
    fn capacity(&self) -> u64;

    /// Readiness barrier. Must complete before any read or write.
    async fn init(&mut self) -> Result<()>;

    /// Read exactly `length` bytes from `[offset, offset + length)`.
    async fn read(&mut self, offset: u64, length: usize) -> Result<Bytes>;

    /// Persist `data` at `[offset, offset + data.len())`.
    async fn write(&mut self, data: &[u8], offset: u64) -> Result<()>;
}

fn check_span(offset: u64, length: u64, capacity: u64) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(Error::OutOfCapacity {
            offset,
            length,
            capacity,
        }),
    }
}

/// A volatile in-memory extent.
#[derive(Debug)]
pub struct MemoryDisk {
    data: BytesMut,
}

impl MemoryDisk {
    /// A zero-filled extent of `capacity` bytes.
    pub fn new(capacity: u64) -> Self {
        Self {
            data: BytesMut::zeroed(capacity as usize),
        }
    }
}

#[async_trait]
impl Disk for MemoryDisk {
    fn capacity(&self) -> u64 {
        self.data.len() as u64
    }

    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn read(&mut self, offset: u64, length: usize) -> Result<Bytes> {
        check_span(offset, length as u64, self.capacity())?;
        let start = offset as usize;
        Ok(Bytes::copy_from_slice(&self.data[start..start + length]))
    }

    async fn write(&mut self, data: &[u8], offset: u64) -> Result<()> {
        check_span(offset, data.len() as u64, self.capacity())?;
        let start = offset as usize;
        self.data[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }
}

/// A file-backed extent.
pub struct FileDisk {
    path: PathBuf,
    capacity: u64,
    file: Option<File>,
}

impl FileDisk {
    /// A disk persisted at `path`. A positive `capacity` fixes the extent
    /// size; `0` adopts the size of an existing file at `init`.
    pub fn new(path: impl Into<PathBuf>, capacity: u64) -> Self {
        Self {
            path: path.into(),
            capacity,
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_mut(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::NotInitialized)
    }
}

#[async_trait]
impl Disk for FileDisk {
    fn capacity(&self) -> u64 {
        self.capacity
    }

    async fn init(&mut self) -> Result<()> {
        let current = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Some(meta.len()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        if current.is_none() && self.capacity == 0 {
            return Err(Error::MissingCapacity {
                path: self.path.clone(),
            });
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)
            .await?;

        match current {
            // Existing file of the right size: leave its contents alone.
            Some(size) if self.capacity == 0 => self.capacity = size,
            Some(size) if size == self.capacity => {}
            // New file, or a size mismatch: wipe and re-size, so the extent
            // starts zero-filled at the configured capacity.
            _ => {
                file.set_len(0).await?;
                file.set_len(self.capacity).await?;
            }
        }

        debug!(path = %self.path.display(), capacity = self.capacity, "disk file initialized");
        self.file = Some(file);
        Ok(())
    }

    async fn read(&mut self, offset: u64, length: usize) -> Result<Bytes> {
        check_span(offset, length as u64, self.capacity)?;
        trace!(offset, length, "disk read");
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(offset)).await?;
        let mut buf = vec![0u8; length];
        file.read_exact(&mut buf).await?;
        Ok(Bytes::from(buf))
    }

    async fn write(&mut self, data: &[u8], offset: u64) -> Result<()> {
        check_span(offset, data.len() as u64, self.capacity)?;
        trace!(offset, length = data.len(), "disk write");
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(offset)).await?;
        file.write_all(data).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_disk_roundtrip() {
        let mut disk = MemoryDisk::new(64);
        disk.init().await.unwrap();
        disk.write(&[1, 2, 3], 10).await.unwrap();
        let bytes = disk.read(9, 5).await.unwrap();
        assert_eq!(bytes.as_ref(), &[0, 1, 2, 3, 0]);
    }

    #[tokio::test]
    async fn memory_disk_rejects_out_of_capacity_access() {
        let mut disk = MemoryDisk::new(8);
        assert!(matches!(
            disk.read(4, 5).await,
            Err(Error::OutOfCapacity { .. })
        ));
        assert!(matches!(
            disk.write(&[0; 2], 7).await,
            Err(Error::OutOfCapacity { .. })
        ));
        // A failed write leaves the extent untouched.
        assert_eq!(disk.read(0, 8).await.unwrap().as_ref(), &[0; 8]);
    }

    #[tokio::test]
    async fn file_disk_creates_and_zero_fills() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volume.bin");
        let mut disk = FileDisk::new(&path, 32);
        disk.init().await.unwrap();
        assert_eq!(disk.capacity(), 32);
        assert_eq!(disk.read(0, 32).await.unwrap().as_ref(), &[0u8; 32]);
    }

    #[tokio::test]
    async fn file_disk_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volume.bin");

        let mut disk = FileDisk::new(&path, 16);
        disk.init().await.unwrap();
        disk.write(&[0xAB, 0xCD], 4).await.unwrap();
        drop(disk);

        // Same capacity: contents survive.
        let mut disk = FileDisk::new(&path, 16);
        disk.init().await.unwrap();
        assert_eq!(disk.read(4, 2).await.unwrap().as_ref(), &[0xAB, 0xCD]);

        // Capacity 0 adopts the existing size.
        let mut disk = FileDisk::new(&path, 0);
        disk.init().await.unwrap();
        assert_eq!(disk.capacity(), 16);
    }

    #[tokio::test]
    async fn file_disk_wipes_on_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volume.bin");

        let mut disk = FileDisk::new(&path, 8);
        disk.init().await.unwrap();
        disk.write(&[0xFF; 8], 0).await.unwrap();
        drop(disk);

        let mut disk = FileDisk::new(&path, 12);
        disk.init().await.unwrap();
        assert_eq!(disk.read(0, 12).await.unwrap().as_ref(), &[0u8; 12]);
    }

    #[tokio::test]
    async fn file_disk_requires_capacity_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut disk = FileDisk::new(dir.path().join("missing.bin"), 0);
        assert!(matches!(
            disk.init().await,
            Err(Error::MissingCapacity { .. })
        ));
    }

    #[tokio::test]
    async fn file_disk_read_before_init_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut disk = FileDisk::new(dir.path().join("volume.bin"), 8);
        assert!(matches!(
            disk.read(0, 1).await,
            Err(Error::NotInitialized)
        ));
    }
}
