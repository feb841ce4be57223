//! Centripetal Catmull-Rom evaluation for spline-tweened intervals.
//!
//! Each channel (width, keel) is evaluated over its own four control
//! points `(longitudinal fraction, channel value)`: the section before
//! the current interval, the interval's two endpoints, and the section
//! after. Missing neighbors default to the origin.
//!
//! Centripetal knot spacing (`sqrt` of the chord length) is used rather
//! than uniform spacing: authored sections are irregularly spaced along
//! the hull, and uniform parametrization loops and overshoots on widely
//! varying segment lengths.

use nalgebra::Point2;

/// A spline control point: `x` is the longitudinal fraction, `y` the
/// channel value.
pub type SplinePoint = Point2<f64>;

/// Zero-length knot interval threshold.
const KNOT_EPS: f64 = 1e-12;

/// Centripetal knot positions for the four control points.
///
/// `s0 = 0`, then each knot advances by the square root of the chord
/// length, computed as the quarter power of the squared distance.
fn knots(p: &[SplinePoint; 4]) -> [f64; 4] {
    let mut s = [0.0; 4];
    for i in 0..3 {
        s[i + 1] = s[i] + (p[i + 1] - p[i]).norm_squared().powf(0.25);
    }
    s
}

/// Linear blend of `a` and `b` by the position of `s` between `sa` and `sb`.
///
/// A zero-length knot interval returns `a` unchanged instead of dividing
/// by zero.
fn blend(a: SplinePoint, b: SplinePoint, sa: f64, sb: f64, s: f64) -> SplinePoint {
    let span = sb - sa;
    if span.abs() < KNOT_EPS {
        return a;
    }
    let t = (s - sa) / span;
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Point on the curve at parameter `s` via the two-level Catmull-Rom
/// blending pyramid.
fn curve_point(p: &[SplinePoint; 4], k: &[f64; 4], s: f64) -> SplinePoint {
    let a1 = blend(p[0], p[1], k[0], k[1], s);
    let a2 = blend(p[1], p[2], k[1], k[2], s);
    let a3 = blend(p[2], p[3], k[2], k[3], s);
    let b1 = blend(a1, a2, k[0], k[2], s);
    let b2 = blend(a2, a3, k[1], k[3], s);
    blend(b1, b2, k[1], k[2], s)
}

/// Evaluate one channel at longitudinal fraction `target`.
///
/// Sweeps the curve parameter from the current section's knot to the next
/// section's in `samples` increments, stops at the first curve point at
/// or past `target`, and linearly fixes up between the bracketing
/// samples. If the sweep never reaches `target`, the last point before it
/// is returned as-is.
pub fn sample_channel(points: &[SplinePoint; 4], target: f64, samples: usize) -> f64 {
    let k = knots(points);
    let steps = samples.max(2);
    let increment = (k[2] - k[1]) / steps as f64;

    // The curve passes through p1 at k[1].
    let mut cur = points[1];
    let mut next = None;

    for i in 0..=steps {
        let s = k[1] + increment * i as f64;
        let c = curve_point(points, &k, s);
        if c.x >= target {
            next = Some(c);
            break;
        }
        cur = c;
    }

    match next {
        Some(next) => {
            let span = next.x - cur.x;
            if span.abs() < KNOT_EPS {
                cur.y
            } else {
                cur.y + (next.y - cur.y) * ((target - cur.x) / span)
            }
        }
        None => cur.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon(points: [(f64, f64); 4]) -> [SplinePoint; 4] {
        points.map(|(x, y)| Point2::new(x, y))
    }

    #[test]
    fn passes_through_interval_endpoints() {
        let p = polygon([(0.0, 0.0), (0.25, 0.4), (0.5, 1.0), (0.75, 0.8)]);
        assert_relative_eq!(sample_channel(&p, 0.25, 50), 0.4, epsilon = 1e-9);
        assert_relative_eq!(sample_channel(&p, 0.5, 50), 1.0, epsilon = 1e-2);
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        // All four control points on y = 2x: the curve must not bulge.
        let p = polygon([(0.0, 0.0), (0.2, 0.4), (0.6, 1.2), (1.0, 2.0)]);
        for target in [0.25, 0.3, 0.4, 0.5, 0.55] {
            let value = sample_channel(&p, target, 200);
            assert_relative_eq!(value, 2.0 * target, epsilon = 1e-3);
        }
    }

    #[test]
    fn monotone_between_increasing_endpoints() {
        let p = polygon([(0.0, 0.0), (0.3, 0.2), (0.7, 0.9), (1.0, 1.0)]);
        let mut last = sample_channel(&p, 0.3, 200);
        for i in 1..=10 {
            let target = 0.3 + 0.04 * i as f64;
            let value = sample_channel(&p, target, 200);
            assert!(value >= last - 1e-3, "not monotone at {target}");
            last = value;
        }
    }

    #[test]
    fn coincident_interval_returns_current_value() {
        let p = polygon([(0.0, 0.0), (0.5, 0.7), (0.5, 0.7), (1.0, 1.0)]);
        assert_relative_eq!(sample_channel(&p, 0.5, 10), 0.7);
    }

    #[test]
    fn target_beyond_sweep_returns_last_point() {
        let p = polygon([(0.0, 0.0), (0.2, 0.5), (0.4, 0.6), (0.6, 0.7)]);
        // Target past the interval end: the sweep ends at the next
        // section's knot and the last sampled value is returned.
        let value = sample_channel(&p, 0.9, 50);
        assert!(value <= 0.6 + 1e-6);
    }
}
