//! Error types for voxel volumes.

use thiserror::Error;

/// Errors that can occur while building or persisting a voxel volume.
#[derive(Error, Debug)]
pub enum VoxError {
    /// Volume could not be written to disk.
    #[error("failed to write voxel file: {0}")]
    Io(#[from] std::io::Error),

    /// An axis extent exceeds what XYZI byte coordinates can encode.
    #[error("volume extent {0} exceeds the .vox limit of 256 per axis")]
    VolumeTooLarge(usize),
}

/// Result type for voxel operations.
pub type Result<T> = std::result::Result<T, VoxError>;
