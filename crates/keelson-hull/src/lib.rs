#![warn(missing_docs)]

//! Hull profile model and cross-section interpolation for keelson.
//!
//! A hull is described as an ordered list of longitudinal sections, each
//! giving a fractional position along the hull, a normalized half-width,
//! a normalized keel offset, and the tween algorithm that blends the
//! profile toward the next section. This crate turns that declarative
//! description into per-slice voxel dimensions.
//!
//! # Example
//!
//! ```
//! use keelson_hull::{Hull, Section, TweenAlgorithm};
//!
//! let hull = Hull {
//!     palette_index: 1,
//!     sections: vec![
//!         Section::new(0.0, 0.0, 0.0, TweenAlgorithm::Linear),
//!         Section::new(0.5, 1.0, 0.5, TweenAlgorithm::Linear),
//!     ],
//! };
//! let dims = hull.dimensions_at(0.25, 88, 26, 8);
//! assert_eq!(dims.width, 13);
//! ```

pub mod error;
pub mod profile;
pub mod spline;
pub mod tween;

pub use error::{HullError, Result};
pub use profile::Dimensions;
pub use tween::TweenAlgorithm;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A hull description file: the output volume, the target file name, and
/// the hulls that share the volume.
///
/// Read-only to the interpolation and rasterization passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullFile {
    /// Output `.vox` file name.
    #[serde(rename = "filename")]
    pub file_name: String,
    /// Volume length in voxels (longitudinal axis).
    pub length: usize,
    /// Volume width in voxels (lateral axis).
    pub width: usize,
    /// Volume height in voxels (vertical axis).
    pub height: usize,
    /// Hulls rendered into the shared volume, in order.
    pub hulls: Vec<Hull>,
}

impl HullFile {
    /// Deserialize a hull description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and deserialize a hull description file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single hull: a palette index and its ordered section list.
///
/// Sections are ordered by ascending `start`; the implicit first section
/// sits at the origin (`start = 0`, zero width, keel at the bottom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// Palette index written for every voxel of this hull.
    pub palette_index: u8,
    /// Profile sections, ordered by ascending `start`.
    pub sections: Vec<Section>,
}

/// One longitudinal section of a hull profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Fraction of the hull length this section sits at, in `[0, 1]`.
    pub start: f64,
    /// Half-width as a fraction of the volume width (1.0 = full beam).
    pub width: f64,
    /// Keel offset as a fraction of the volume height (1.0 = keel at top).
    pub keel: f64,
    /// Blending toward the next section; governs the interval that
    /// begins at this section.
    #[serde(rename = "tween_algorithm", default)]
    pub tween: TweenAlgorithm,
}

impl Section {
    /// Create a section.
    pub fn new(start: f64, width: f64, keel: f64, tween: TweenAlgorithm) -> Self {
        Self {
            start,
            width,
            keel,
            tween,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_hull_file() {
        let hf = HullFile {
            file_name: "tanker.vox".to_string(),
            length: 88,
            width: 26,
            height: 8,
            hulls: vec![Hull {
                palette_index: 73,
                sections: vec![
                    Section::new(0.0, 0.0, 0.0, TweenAlgorithm::Linear),
                    Section::new(0.5, 1.0, 0.4, TweenAlgorithm::Spline),
                ],
            }],
        };

        let json = hf.to_json().expect("serialize");
        let restored = HullFile::from_json(&json).expect("deserialize");
        assert_eq!(hf, restored);
    }

    #[test]
    fn parse_description_with_string_tokens() {
        let json = r#"{
            "filename": "barge.vox",
            "length": 40,
            "width": 12,
            "height": 6,
            "hulls": [
                {
                    "palette_index": 5,
                    "sections": [
                        {"start": 0.0, "width": 0.0, "keel": 0.0, "tween_algorithm": "square_root"},
                        {"start": 0.5, "width": 1.0, "keel": 0.5, "tween_algorithm": "reverse_square_root"},
                        {"start": 1.0, "width": 0.2, "keel": 1.0}
                    ]
                }
            ]
        }"#;

        let hf = HullFile::from_json(json).expect("parse");
        assert_eq!(hf.hulls.len(), 1);
        let sections = &hf.hulls[0].sections;
        assert_eq!(sections[0].tween, TweenAlgorithm::SquareRoot);
        assert_eq!(sections[1].tween, TweenAlgorithm::ReverseSquareRoot);
        // Missing token defaults to linear.
        assert_eq!(sections[2].tween, TweenAlgorithm::Linear);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(HullFile::from_json("{\"filename\": ").is_err());
    }
}
