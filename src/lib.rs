//! Symbolic waveform definition and materialization.
//!
//! Waveforms are described as trees of parametrized primitives ("atoms"),
//! whose parameters may be literals or symbols that are only resolved against
//! a `Context` at forge time. `Element`s bundle one tree per channel and make
//! sure every channel plays for the same duration.

#[macro_use] extern crate log;
extern crate ndarray;
extern crate num;
extern crate serde;
#[macro_use] extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;

pub mod atoms;
pub mod context;
pub mod element;
pub mod error;
pub mod forge;
pub mod property;
pub mod transformation;
pub mod tree;
pub mod util;

#[cfg(test)]
mod tests;


pub use context::Context;
pub use element::{ChannelId, Element};
pub use error::{Error, ResultE};
pub use forge::{Forge, ForgeSpec, ForgeSpecFactory, Scoped};
pub use property::{Args, Property, Symbol, Value};
pub use transformation::Transformation;
pub use tree::{Atom, Meta, Node, Segment, SegmentGroup};
