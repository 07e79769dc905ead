use ndarray::Array1;
use num::ToPrimitive;

use crate::error::{Error, ResultE};

/// Number of samples a span of `duration` occupies at `sample_rate`,
/// i.e. `round(duration * sample_rate)`.
pub fn sample_count(duration: f64, sample_rate: f64) -> ResultE<usize> {
    if !sample_rate.is_finite() || sample_rate <= 0f64 {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    if !duration.is_finite() || duration < 0f64 {
        return Err(Error::InvalidDuration(duration));
    }
    (duration * sample_rate).round().to_usize().ok_or(Error::InvalidDuration(duration))
}

/// `n` evenly spaced points covering `[0, duration)`.
/// The endpoint is never included, so consecutive spans concatenate without
/// repeating a boundary sample.
pub fn time_axis(duration: f64, n: usize) -> Array1<f64> {
    let step = duration / n as f64;
    Array1::from_shape_fn(n, |i| i as f64 * step)
}
