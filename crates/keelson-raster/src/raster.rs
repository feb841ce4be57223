//! Per-slice ellipse fill.

use keelson_hull::{Dimensions, Hull};
use rayon::prelude::*;

/// Filled cells for one longitudinal slice, in section index space
/// (the longitudinal output reversal is applied by the composer).
#[derive(Debug, Clone)]
pub struct SliceFill {
    /// Longitudinal slice index.
    pub slice: usize,
    /// `(lateral, vertical)` cells inside the cross-section ellipse.
    pub cells: Vec<(usize, usize)>,
}

/// Compute the filled cells for every slice of `hull`.
///
/// Each slice is a pure function of its own index and the hull's
/// immutable section list, so slices are computed in parallel; the
/// caller writes them into the shared volume in order.
pub fn rasterize_hull(hull: &Hull, length: usize, width: usize, height: usize) -> Vec<SliceFill> {
    (0..length)
        .into_par_iter()
        .map(|slice| {
            let fraction = slice as f64 / length as f64;
            let dims = hull.dimensions_at(fraction, length, width, height);
            SliceFill {
                slice,
                cells: fill_slice(dims, width, height),
            }
        })
        .collect()
}

/// Cells inside the cross-section ellipse for one slice.
///
/// The lateral axis is centered on the volume; the vertical axis is
/// halved to match the target format's voxel aspect. A zero (or
/// negative) semi-axis means an empty cross-section, not a fault.
fn fill_slice(dims: Dimensions, width: usize, height: usize) -> Vec<(usize, usize)> {
    let a = f64::from(dims.width) / 2.0;
    let b = f64::from(dims.keel) / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return Vec::new();
    }

    let mut cells = Vec::new();
    for j in 0..width {
        let x = j as f64 - (width as f64 - 1.0) / 2.0;
        for k in 0..height {
            let y = k as f64 / 2.0 - (height as f64 - 1.0) / 2.0;
            if (x * x) / (a * a) + (y * y) / (b * b) <= 1.0 {
                cells.push((j, k));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use keelson_hull::{Section, TweenAlgorithm};

    #[test]
    fn zero_width_slice_fills_nothing() {
        let dims = Dimensions { width: 0, keel: 6 };
        assert!(fill_slice(dims, 26, 8).is_empty());
    }

    #[test]
    fn zero_keel_slice_fills_nothing() {
        let dims = Dimensions { width: 20, keel: 0 };
        assert!(fill_slice(dims, 26, 8).is_empty());
    }

    #[test]
    fn fill_is_symmetric_in_the_lateral_axis() {
        let dims = Dimensions { width: 19, keel: 7 };
        let cells = fill_slice(dims, 26, 8);
        assert!(!cells.is_empty());
        for &(j, k) in &cells {
            let mirrored = (26 - 1 - j, k);
            assert!(cells.contains(&mirrored), "missing mirror of ({j}, {k})");
        }
    }

    #[test]
    fn full_ellipse_touches_the_volume_edges() {
        // a = 13 and b = 4 over a 26-wide, 8-tall slice: the vertical
        // center row reaches both lateral extremes.
        let dims = Dimensions { width: 26, keel: 8 };
        let cells = fill_slice(dims, 26, 8);
        assert!(cells.contains(&(0, 7)));
        assert!(cells.contains(&(25, 7)));
        // Corners stay outside.
        assert!(!cells.contains(&(0, 0)));
        assert!(!cells.contains(&(25, 0)));
    }

    #[test]
    fn slice_count_matches_volume_length() {
        let hull = Hull {
            palette_index: 3,
            sections: vec![
                Section::new(0.0, 0.0, 0.0, TweenAlgorithm::Linear),
                Section::new(1.0, 1.0, 0.0, TweenAlgorithm::Linear),
            ],
        };
        let fills = rasterize_hull(&hull, 40, 12, 6);
        assert_eq!(fills.len(), 40);
        for (i, fill) in fills.iter().enumerate() {
            assert_eq!(fill.slice, i);
        }
        // The bow slice is wider than the stern slice.
        assert!(fills[39].cells.len() > fills[1].cells.len());
    }
}
