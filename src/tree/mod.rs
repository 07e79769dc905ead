//! Segment trees: primitives bound to (possibly symbolic) properties,
//! and ordered groups of them.

mod group;
mod meta;
mod node;
mod segment;

use std::fmt;

use ndarray::Array1;

use crate::error::ResultE;
use crate::property::Args;

pub use self::group::SegmentGroup;
pub use self::meta::Meta;
pub use self::node::Node;
pub use self::segment::Segment;

/// Signature of a waveform primitive.
/// Receives the right-open time axis of the segment and its resolved
/// properties (without `duration`), and returns one sample per time point.
/// For a one-point axis it should return a single representative value.
pub type AtomFn = fn(&Array1<f64>, &Args) -> ResultE<Array1<f64>>;

/// A named waveform primitive.
#[derive(Clone, Copy)]
pub struct Atom {
    name: &'static str,
    render: AtomFn,
}

impl Atom {
    pub const fn new(name: &'static str, render: AtomFn) -> Atom {
        Atom { name, render }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn render(&self, time: &Array1<f64>, args: &Args) -> ResultE<Array1<f64>> {
        (self.render)(time, args)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Atom) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Atom({})", self.name)
    }
}
