//! Disk Controller
//!
//! The controller owns one [`Disk`] and bridges its extents into the
//! in-memory views of `platter-core`: read a span into a
//! [`BufferReader`]/[`BufferWriter`], mutate it through typed accessors or
//! field descriptors, and flush it back. Each load is an independent copy;
//! the disk only changes when a view is explicitly flushed.
//!
//! ## Example
//!
//! ```no_run
//! # async fn demo() -> platter_disk::Result<()> {
//! use platter_core::ByteView;
//! use platter_disk::{DiskController, MemoryDisk};
//!
//! let mut controller = DiskController::new(Box::new(MemoryDisk::new(4096)));
//! controller.init().await?;
//!
//! let mut meta = controller.load_writer(0, 16).await?;
//! meta.write_u32(0xC0FFEE, 0)?;
//! controller.flush(&meta, 0).await?;
//!
//! let reread = controller.load_reader(0, 16).await?;
//! assert_eq!(reread.read_u32(0)?, 0xC0FFEE);
//! # Ok(())
//! # }
//! ```

use platter_core::{BufferReader, BufferWriter, ByteView};
use tracing::debug;

use crate::disk::Disk;
use crate::error::Result;
use crate::layout::VolumeLayout;

/// Owns a [`Disk`] and moves extents between it and in-memory views.
pub struct DiskController {
    disk: Box<dyn Disk>,
    layout: VolumeLayout,
}

impl DiskController {
    pub fn new(disk: Box<dyn Disk>) -> Self {
        Self::with_layout(disk, VolumeLayout::default())
    }

    pub fn with_layout(disk: Box<dyn Disk>, layout: VolumeLayout) -> Self {
        Self { disk, layout }
    }

    /// Drive the backend's readiness barrier. Must complete before any
    /// load or flush.
    pub async fn init(&mut self) -> Result<()> {
        self.disk.init().await?;
        debug!(capacity = self.disk.capacity(), "disk controller ready");
        Ok(())
    }

    pub fn capacity(&self) -> u64 {
        self.disk.capacity()
    }

    pub fn layout(&self) -> &VolumeLayout {
        &self.layout
    }

    /// Load `length` bytes at `offset` into a read-only view.
    pub async fn load_reader(&mut self, offset: u64, length: usize) -> Result<BufferReader> {
        let bytes = self.disk.read(offset, length).await?;
        Ok(BufferReader::new(bytes))
    }

    /// Load `length` bytes at `offset` into a mutable view.
    pub async fn load_writer(&mut self, offset: u64, length: usize) -> Result<BufferWriter> {
        let bytes = self.disk.read(offset, length).await?;
        Ok(BufferWriter::new(&bytes))
    }

    /// Persist a view's window back to the disk at `offset`.
    pub async fn flush(&mut self, view: &impl ByteView, offset: u64) -> Result<()> {
        self.disk.write(&view.materialize(), offset).await
    }
}
