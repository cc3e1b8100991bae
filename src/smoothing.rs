//! Exponential smoothing of raw fingertip samples.

use crate::stroke::Pixel;

/// Weighted moving average between the previous accepted point and a new raw sample.
///
/// The filter itself holds no per-stroke state: the caller stores the returned
/// point and passes it back as `previous` for the next sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFilter {
    factor: f64,
}

impl Default for SmoothingFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACTOR)
    }
}

impl SmoothingFilter {
    pub const DEFAULT_FACTOR: f64 = 0.5;

    /// `factor` is the weight of the previous point, clamped to `[0, 1]`.
    /// A NaN factor falls back to the default.
    pub fn new(factor: f64) -> Self {
        let factor = if factor.is_nan() {
            Self::DEFAULT_FACTOR
        } else {
            factor.clamp(0.0, 1.0)
        };
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn smooth(&self, previous: Option<Pixel>, raw: Pixel) -> Pixel {
        smooth(previous, raw, self.factor)
    }
}

/// `factor * previous + (1 - factor) * raw` per axis, truncated toward zero.
/// The first point of a stroke (`previous == None`) passes through untouched.
pub fn smooth(previous: Option<Pixel>, raw: Pixel, factor: f64) -> Pixel {
    let Some((px, py)) = previous else {
        return raw;
    };
    let (x, y) = raw;
    let blend = |p: i32, r: i32| (factor * f64::from(p) + (1.0 - factor) * f64::from(r)) as i32;
    (blend(px, x), blend(py, y))
}
