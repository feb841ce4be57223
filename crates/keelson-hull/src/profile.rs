//! Cross-section interpolation: resolving a hull's dimensions at a
//! longitudinal fraction.

use nalgebra::Point2;

use crate::spline::{self, SplinePoint};
use crate::tween::TweenAlgorithm;
use crate::{Hull, Section};

/// Resolved cross-section dimensions for one longitudinal slice, in
/// voxel units. Ephemeral: computed per slice, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Beam of the slice ellipse.
    pub width: i32,
    /// Height of the slice ellipse, measured down from the deck.
    pub keel: i32,
}

// Defaults for the interval past the last authored section. A profile
// whose last section sits before 1.0 tapers toward this point; that
// fall-off is part of the format.
const DEFAULT_NEXT_START: f64 = 1.0;
const DEFAULT_NEXT_WIDTH: f64 = 0.0;
const DEFAULT_NEXT_KEEL: f64 = 1.0;

impl Hull {
    /// Dimensions of this hull at longitudinal `fraction`, denormalized
    /// against a volume of `length` slices, `width` voxels across and
    /// `height` voxels tall.
    ///
    /// Pure and deterministic. Fractions before the first section blend
    /// from an implicit zero section; fractions past the last section
    /// blend toward the default end point.
    pub fn dimensions_at(
        &self,
        fraction: f64,
        length: usize,
        width: usize,
        height: usize,
    ) -> Dimensions {
        // Bracket: the last section at or before `fraction` is current,
        // the one after it is next.
        let mut cur_idx = None;
        for (i, section) in self.sections.iter().enumerate() {
            if section.start > fraction {
                break;
            }
            cur_idx = Some(i);
        }

        let (cur_start, cur_width, cur_keel, algorithm) = match cur_idx {
            Some(i) => {
                let s = &self.sections[i];
                (s.start, s.width, s.keel, s.tween)
            }
            // Implicit zero section before the first authored one.
            None => (0.0, 0.0, 0.0, TweenAlgorithm::Linear),
        };

        let next_idx = cur_idx.map_or(0, |i| i + 1);
        let (next_start, next_width, next_keel) = match self.sections.get(next_idx) {
            Some(s) => (s.start, s.width, s.keel),
            None => (DEFAULT_NEXT_START, DEFAULT_NEXT_WIDTH, DEFAULT_NEXT_KEEL),
        };

        let mut interval = next_start - cur_start;
        if interval == 0.0 {
            // Coincident sections: substitute a unit interval.
            interval = 1.0;
        }
        let t = (fraction - cur_start) / interval;

        let (width_frac, keel_frac) = if algorithm == TweenAlgorithm::Spline {
            let prev = cur_idx
                .and_then(|i| i.checked_sub(1))
                .map(|i| &self.sections[i]);
            let after = self.sections.get(next_idx + 1);
            let samples = (interval * length as f64).ceil() as usize;

            let width_polygon = control_polygon(
                prev,
                (cur_start, cur_width),
                (next_start, next_width),
                after,
                |s| s.width,
            );
            let keel_polygon = control_polygon(
                prev,
                (cur_start, cur_keel),
                (next_start, next_keel),
                after,
                |s| s.keel,
            );

            (
                spline::sample_channel(&width_polygon, fraction, samples),
                spline::sample_channel(&keel_polygon, fraction, samples),
            )
        } else {
            let (w1, w2) = algorithm.weights(t);
            (
                cur_width * w1 + next_width * w2,
                cur_keel * w1 + next_keel * w2,
            )
        };

        Dimensions {
            width: (width_frac * width as f64).round() as i32,
            // Keel fraction 1.0 means "at the top", so invert.
            keel: ((1.0 - keel_frac) * height as f64).round() as i32,
        }
    }
}

/// Four-point control polygon for one channel. Missing neighbors at
/// either end default to the origin.
fn control_polygon(
    prev: Option<&Section>,
    cur: (f64, f64),
    next: (f64, f64),
    after: Option<&Section>,
    channel: impl Fn(&Section) -> f64,
) -> [SplinePoint; 4] {
    [
        prev.map_or_else(Point2::origin, |s| Point2::new(s.start, channel(s))),
        Point2::new(cur.0, cur.1),
        Point2::new(next.0, next.1),
        after.map_or_else(Point2::origin, |s| Point2::new(s.start, channel(s))),
    ]
}
