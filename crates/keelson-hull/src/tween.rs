//! Easing functions for blending between hull sections.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How the profile blends across the interval beginning at a section.
///
/// Serialized as a string token in hull description files; unrecognized
/// tokens deserialize to [`TweenAlgorithm::Linear`] so that future tokens
/// degrade gracefully instead of failing the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenAlgorithm {
    /// Straight-line blend.
    #[default]
    Linear,
    /// Fast start, slow finish.
    SquareRoot,
    /// Slow start, fast finish.
    ReverseSquareRoot,
    /// Very slow start, fast finish.
    Square,
    /// Centripetal spline through the surrounding sections.
    ///
    /// Not a weight formula: the interpolator resolves spline intervals
    /// per channel via [`crate::spline`] instead of calling
    /// [`Self::weights`] (which falls back to linear for this variant).
    Spline,
}

impl TweenAlgorithm {
    /// Parse a description-file token. Unknown tokens map to `Linear`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "square_root" => Self::SquareRoot,
            "reverse_square_root" => Self::ReverseSquareRoot,
            "square" => Self::Square,
            "spline" => Self::Spline,
            _ => Self::Linear,
        }
    }

    /// The description-file token for this algorithm.
    pub fn token(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SquareRoot => "square_root",
            Self::ReverseSquareRoot => "reverse_square_root",
            Self::Square => "square",
            Self::Spline => "spline",
        }
    }

    /// Blend weights `(w_cur, w_next)` at progress `t`.
    ///
    /// The interpolated value is `w_cur * cur + w_next * next`. The
    /// weights sum to 1 for `t` in `[0, 1]`.
    pub fn weights(self, t: f64) -> (f64, f64) {
        match self {
            Self::Linear | Self::Spline => (1.0 - t, t),
            Self::SquareRoot => (1.0 - t.sqrt(), t.sqrt()),
            Self::ReverseSquareRoot => {
                let s = (1.0 - t).sqrt();
                (s, 1.0 - s)
            }
            Self::Square => (1.0 - t * t, t * t),
        }
    }
}

impl Serialize for TweenAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for TweenAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}
