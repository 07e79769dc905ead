use ndarray::Array1;

use crate::error::ResultE;
use crate::property::Args;
use crate::tree::Atom;

pub const RAMP: Atom = Atom::new("ramp", ramp);
pub const FLAT: Atom = Atom::new("flat", flat);
pub const ZERO: Atom = Atom::new("zero", zero);

/// Linear ramp from `start` (default 0) to `stop` (default 1).
/// The first sample is `start`, the last one `stop`.
pub fn ramp(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    let start = args.number_or("start", 0f64)?;
    let stop = args.number_or("stop", 1f64)?;
    if time.len() == 1 {
        return Ok(Array1::from_elem(1, (start + stop) / 2f64));
    }
    let t0 = time[0];
    let span = time[time.len() - 1] - t0;
    Ok(time.mapv(|t| (stop - start) * (t - t0) / span + start))
}

/// Constant `amplitude` (default 1).
pub fn flat(time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
    let amplitude = args.number_or("amplitude", 1f64)?;
    Ok(Array1::from_elem(time.len(), amplitude))
}

pub fn zero(time: &Array1<f64>, _args: &Args) -> ResultE<Array1<f64>> {
    Ok(Array1::zeros(time.len()))
}
