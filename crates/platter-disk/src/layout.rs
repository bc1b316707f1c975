//! Volume and File-Metadata Layout
//!
//! Layout placeholders for the on-disk structure a file system built on
//! Platter would use: how many bytes the volume metadata occupies, the
//! cluster size, and the shape of one file-metadata record. These are
//! configuration only; allocation, cluster chaining, and recovery live in a
//! higher layer.

use serde::{Deserialize, Serialize};

/// Byte layout of a volume's leading metadata region and its data clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLayout {
    /// Bytes reserved for volume metadata at the start of the extent.
    #[serde(default = "default_meta_bytes")]
    pub meta_bytes: u64,

    /// Bytes inside the metadata region left to the embedding application.
    #[serde(default)]
    pub custom_bytes: u64,

    /// Bytes per data cluster.
    #[serde(default = "default_cluster_bytes")]
    pub cluster_bytes: u64,
}

fn default_meta_bytes() -> u64 {
    1024
}

fn default_cluster_bytes() -> u64 {
    4 * 1024
}

impl Default for VolumeLayout {
    fn default() -> Self {
        Self {
            meta_bytes: default_meta_bytes(),
            custom_bytes: 0,
            cluster_bytes: default_cluster_bytes(),
        }
    }
}

/// Byte layout of one file-metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetaLayout {
    /// Bytes inside a record left to the embedding application.
    #[serde(default = "default_file_custom_bytes")]
    pub custom_bytes: u64,

    /// Bytes reserved for the file name.
    #[serde(default = "default_name_bytes")]
    pub name_bytes: u64,

    /// Total bytes one record occupies.
    #[serde(default = "default_file_total_bytes")]
    pub total_bytes: u64,
}

fn default_file_custom_bytes() -> u64 {
    20
}

fn default_name_bytes() -> u64 {
    255
}

fn default_file_total_bytes() -> u64 {
    1024
}

impl Default for FileMetaLayout {
    fn default() -> Self {
        Self {
            custom_bytes: default_file_custom_bytes(),
            name_bytes: default_name_bytes(),
            total_bytes: default_file_total_bytes(),
        }
    }
}
