//! Failure kinds that can cross the forge boundary.

use thiserror::Error;

use crate::element::ChannelId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A property or transformation referenced a symbol the effective context doesn't define.
    #[error("symbol `{0}` is not defined in the context")]
    ContextResolution(String),
    /// The channels of an element don't resolve to exactly one common duration.
    /// `durations` holds the distinct values that did resolve, `failed` the
    /// channels that couldn't be resolved at all.
    #[error("element channels do not share one duration (resolved: {durations:?}, unresolved channels: {failed:?})")]
    ElementDuration {
        durations: Vec<f64>,
        failed: Vec<ChannelId>,
    },
    /// Raised by primitives whose list-valued properties have mismatched lengths.
    #[error("{frequencies} frequencies, {amplitudes} amplitudes and {phases} phases provided")]
    PropertyArity {
        frequencies: usize,
        amplitudes: usize,
        phases: usize,
    },
    /// The channels of an element forged to different numbers of samples,
    /// so no single time axis fits them all.
    #[error("element channels forged to different lengths: {lengths:?}")]
    ChannelLength {
        lengths: Vec<usize>,
    },
    #[error("property `{0}` is not declared")]
    UnknownProperty(String),
    #[error("property `{name}` must be {expected}")]
    PropertyType {
        name: String,
        expected: &'static str,
    },
    /// Durations must be finite and non-negative to yield a sample count.
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f64),
    /// Only raised when strict group checking is enabled.
    #[error("group declares duration {declared} but its children last {children}")]
    GroupDuration {
        declared: f64,
        children: f64,
    },
}

/// Alias for a `Result` with our error type.
pub type ResultE<T> = Result<T, Error>;
