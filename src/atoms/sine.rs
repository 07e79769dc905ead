use std::f64::consts::PI;

use ndarray::Array1;

use crate::error::{Error, ResultE};
use crate::property::Args;
use crate::tree::Atom;

pub const SINE: Atom = Atom::new("sine", sine);
pub const COSINE: Atom = Atom::new("cosine", cosine);
pub const SINE_MULTI: Atom = Atom::new("sine_multi", sine_multi);

/// y = offset + amplitude * sin(2π * frequency * t + phase)
///
/// A one-sample axis yields `offset`, the mean of the wave.
pub fn sine(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    sinusoid(time, args, f64::sin)
}

/// y = offset + amplitude * cos(2π * frequency * t + phase)
///
/// A one-sample axis yields `offset`, as for `sine`.
pub fn cosine(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    sinusoid(time, args, f64::cos)
}

fn sinusoid(time: &Array1<f64>, args: &Args, wave: fn(f64) -> f64) -> ResultE<Array1<f64>> {
    let frequency = args.number("frequency")?;
    let amplitude = args.number_or("amplitude", 1f64)?;
    let phase = args.number_or("phase", 0f64)?;
    let offset = args.number_or("offset", 0f64)?;
    // A single point has no frequency; use the mean.
    if time.len() == 1 {
        return Ok(Array1::from_elem(1, offset));
    }
    Ok(time.mapv(|t| offset + amplitude * wave(2f64 * PI * frequency * t + phase)))
}

/// Average of several sines:
/// y = Σ amplitudes[i] * sin(2π * frequencies[i] * t + phases[i]) / len(frequencies)
///
/// `amplitudes` and `phases` may be single numbers, which then apply to every component.
/// Having no offset, a one-sample axis yields 0.
pub fn sine_multi(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    let frequencies = args.list_or("frequencies", &[0f64]);
    if frequencies.is_empty() {
        return Err(Error::PropertyType {
            name: "frequencies".to_string(),
            expected: "a non-empty list",
        });
    }
    let amplitudes = args.list_or("amplitudes", &vec![1f64; frequencies.len()]);
    let phases = args.list_or("phases", &vec![0f64; frequencies.len()]);
    if amplitudes.len() != frequencies.len() || phases.len() != frequencies.len() {
        return Err(Error::PropertyArity {
            frequencies: frequencies.len(),
            amplitudes: amplitudes.len(),
            phases: phases.len(),
        });
    }
    if time.len() == 1 {
        return Ok(Array1::zeros(1));
    }
    let mut output = Array1::<f64>::zeros(time.len());
    for ((f, a), p) in frequencies.iter().zip(&amplitudes).zip(&phases) {
        output += &time.mapv(|t| a * (2f64 * PI * f * t + p).sin());
    }
    Ok(output / frequencies.len() as f64)
}
