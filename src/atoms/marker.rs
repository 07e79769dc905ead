use ndarray::{s, Array1};
use num::ToPrimitive;

use crate::error::ResultE;
use crate::property::Args;
use crate::tree::Atom;

pub const MARKER_ON: Atom = Atom::new("marker_on", marker_on);
pub const MARKER_OFF: Atom = Atom::new("marker_off", marker_off);
pub const MARKER_PULSE: Atom = Atom::new("marker_pulse", marker_pulse);

pub fn marker_on(time: &Array1<f64>, _args: &Args) -> ResultE<Array1<f64>> {
    Ok(Array1::ones(time.len()))
}

pub fn marker_off(time: &Array1<f64>, _args: &Args) -> ResultE<Array1<f64>> {
    Ok(Array1::zeros(time.len()))
}

/// High for `marker_duration` starting `delay` into the segment, low elsewhere.
/// Edges snap to the nearest sample; a pulse reaching past the segment is cut off.
pub fn marker_pulse(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    let delay = args.number("delay")?;
    let marker_duration = args.number("marker_duration")?;
    if time.len() == 1 {
        return marker_on(time, args);
    }
    let step = time[1] - time[0];
    let index = |t: f64| (t / step).round().max(0f64).to_usize().unwrap_or(0).min(time.len());
    let start = index(delay);
    let stop = index(delay + marker_duration).max(start);
    let mut output = Array1::<f64>::zeros(time.len());
    output.slice_mut(s![start..stop]).mapv_inplace(|_| 1f64);
    Ok(output)
}
