#![warn(missing_docs)]

//! Voxel rasterization of hull profiles.
//!
//! Turns the per-slice dimensions produced by `keelson-hull` into filled
//! voxels in a shared `keelson-vox` volume via an ellipse containment
//! test, and composes multiple hulls into one output model.
//!
//! # Example
//!
//! ```
//! use keelson_hull::{Hull, HullFile, Section, TweenAlgorithm};
//! use keelson_raster::compose;
//!
//! let hull_file = HullFile {
//!     file_name: "hull.vox".to_string(),
//!     length: 40,
//!     width: 12,
//!     height: 6,
//!     hulls: vec![Hull {
//!         palette_index: 1,
//!         sections: vec![
//!             Section::new(0.0, 0.0, 0.0, TweenAlgorithm::Linear),
//!             Section::new(0.5, 1.0, 0.0, TweenAlgorithm::Linear),
//!             Section::new(1.0, 0.5, 0.5, TweenAlgorithm::Linear),
//!         ],
//!     }],
//! };
//! let object = compose(&hull_file).unwrap();
//! assert!(object.voxel_count() > 0);
//! ```

pub mod error;
pub mod raster;

pub use error::{RasterError, Result};
pub use raster::{rasterize_hull, SliceFill};

use keelson_hull::HullFile;
use keelson_vox::{default_palette, Point, VoxelObject};

/// Rasterize every hull of `hull_file` into one shared voxel volume.
///
/// Hulls are applied in list order; where their ellipses overlap, the
/// later hull's palette index wins. Section index 0 maps to the highest
/// output coordinate on the longitudinal axis (the stern sits at the
/// far end of the volume).
pub fn compose(hull_file: &HullFile) -> Result<VoxelObject> {
    let size = Point::new(hull_file.length, hull_file.width, hull_file.height);
    let mut object = VoxelObject::new(size, *default_palette())?;

    for hull in &hull_file.hulls {
        let fills = rasterize_hull(hull, hull_file.length, hull_file.width, hull_file.height);
        for fill in fills {
            let x = hull_file.length - 1 - fill.slice;
            for (j, k) in fill.cells {
                object.set(Point::new(x, j, k), hull.palette_index);
            }
        }
    }

    Ok(object)
}

/// Compose `hull_file` and persist the result to its output file name.
pub fn write_hull_file(hull_file: &HullFile) -> Result<()> {
    compose(hull_file)?.save_to_file(&hull_file.file_name)?;
    Ok(())
}
