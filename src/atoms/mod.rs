//! Library of commonly-used primitives - sines, ramps, markers, etc.
//!
//! Every primitive is a plain function of the time axis and its resolved
//! arguments: deterministic and without side effects, so that trees built
//! from them may be forged concurrently.

mod marker;
mod ramp;
mod sine;

use crate::tree::Atom;

pub use self::marker::{marker_off, marker_on, marker_pulse, MARKER_OFF, MARKER_ON, MARKER_PULSE};
pub use self::ramp::{flat, ramp, zero, FLAT, RAMP, ZERO};
pub use self::sine::{cosine, sine, sine_multi, COSINE, SINE, SINE_MULTI};

static ALL: [Atom; 9] = [
    SINE, COSINE, SINE_MULTI,
    RAMP, FLAT, ZERO,
    MARKER_ON, MARKER_OFF, MARKER_PULSE,
];

/// Iterate over ALL the primitives in the library.
pub fn iter_all_atoms() -> impl Iterator<Item=Atom> {
    ALL.iter().cloned()
}

/// Find a library primitive by name.
pub fn lookup(name: &str) -> Option<Atom> {
    iter_all_atoms().find(|atom| atom.name() == name)
}
