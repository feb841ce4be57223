//! Error types for rasterization.

use thiserror::Error;

/// Errors that can occur while composing or persisting a voxel model.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The output volume could not be built or written.
    #[error(transparent)]
    Vox(#[from] keelson_vox::VoxError),
}

/// Result type for rasterization operations.
pub type Result<T> = std::result::Result<T, RasterError>;
