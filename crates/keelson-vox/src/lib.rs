#![warn(missing_docs)]

//! MagicaVoxel `.vox` voxel volumes for keelson.
//!
//! Provides [`VoxelObject`], a dense voxel grid with an attached 256-color
//! palette, and a writer for the RIFF-based `.vox` format (version 150:
//! `SIZE`, `XYZI` and `RGBA` chunks under `MAIN`). Palette index 0 means
//! empty space and is never emitted to the file.

pub mod error;
pub mod palette;
mod writer;

pub use error::{Result, VoxError};
pub use palette::{default_palette, Palette};

use std::path::Path;

/// Largest encodable extent per axis. `XYZI` packs voxel coordinates as
/// single bytes, so anything larger cannot be represented.
pub const MAX_EXTENT: usize = 256;

/// A voxel grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Position along the X axis.
    pub x: usize,
    /// Position along the Y axis.
    pub y: usize,
    /// Position along the Z axis.
    pub z: usize,
}

impl Point {
    /// Create a grid coordinate.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// A dense voxel volume with an attached palette.
#[derive(Debug, Clone)]
pub struct VoxelObject {
    size: Point,
    voxels: Vec<u8>,
    palette: Palette,
}

impl VoxelObject {
    /// Create an empty volume of the given size with the given palette.
    ///
    /// Fails with [`VoxError::VolumeTooLarge`] if any extent exceeds
    /// [`MAX_EXTENT`].
    pub fn new(size: Point, palette: Palette) -> Result<Self> {
        for extent in [size.x, size.y, size.z] {
            if extent > MAX_EXTENT {
                return Err(VoxError::VolumeTooLarge(extent));
            }
        }
        Ok(Self {
            size,
            voxels: vec![0; size.x * size.y * size.z],
            palette,
        })
    }

    /// Volume extent along each axis.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The attached palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn offset(&self, p: Point) -> Option<usize> {
        if p.x < self.size.x && p.y < self.size.y && p.z < self.size.z {
            Some((p.z * self.size.y + p.y) * self.size.x + p.x)
        } else {
            None
        }
    }

    /// Set the voxel at `p` to `index`, overwriting any previous value.
    /// Out-of-range coordinates are ignored.
    pub fn set(&mut self, p: Point, index: u8) {
        if let Some(offset) = self.offset(p) {
            self.voxels[offset] = index;
        }
    }

    /// Palette index at `p`; 0 for empty space or out-of-range coordinates.
    pub fn get(&self, p: Point) -> u8 {
        self.offset(p).map_or(0, |offset| self.voxels[offset])
    }

    /// Number of non-empty voxels.
    pub fn voxel_count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v != 0).count()
    }

    /// Iterate the non-empty voxels as `(point, palette index)`.
    pub fn voxels(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.voxels.iter().enumerate().filter_map(|(i, &v)| {
            if v == 0 {
                return None;
            }
            let x = i % self.size.x;
            let y = (i / self.size.x) % self.size.y;
            let z = i / (self.size.x * self.size.y);
            Some((Point::new(x, y, z), v))
        })
    }

    /// Serialize the volume to `.vox` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        writer::to_bytes(self)
    }

    /// Persist the volume as a `.vox` file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }
}
