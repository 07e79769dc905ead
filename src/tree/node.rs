use ndarray::Array1;

use crate::context::Context;
use crate::error::{Error, ResultE};
use crate::forge::{Forge, ForgeSpec};
use crate::property::{Args, Properties, Value};
use super::{Meta, Segment, SegmentGroup};

/// Name of the property every node declares.
pub const DURATION: &str = "duration";

/// A segment tree: either a single segment or a group of nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Segment(Segment),
    Group(SegmentGroup),
}

/// Require a resolved value to be a plain number.
pub(crate) fn number(name: &str, value: Value) -> ResultE<f64> {
    value.as_number().ok_or_else(|| Error::PropertyType {
        name: name.to_string(),
        expected: "a number",
    })
}

impl Node {
    pub fn properties(&self) -> &Properties {
        match *self {
            Node::Segment(ref s) => s.properties(),
            Node::Group(ref g) => g.properties(),
        }
    }
    /// Resolve a declared property. Groups resolve against their transformed context.
    pub fn get(&self, name: &str, context: &Context) -> ResultE<Value> {
        match *self {
            Node::Segment(ref s) => s.get(name, context),
            Node::Group(ref g) => g.get(name, context),
        }
    }
    pub fn get_all_properties(&self, context: &Context) -> ResultE<Args> {
        match *self {
            Node::Segment(ref s) => s.get_all_properties(context),
            Node::Group(ref g) => g.get_all_properties(context),
        }
    }
    pub fn meta(&self, context: &Context) -> ResultE<Meta> {
        match *self {
            Node::Segment(ref s) => s.meta(context),
            Node::Group(ref g) => g.meta(context),
        }
    }
}

impl Forge for Node {
    type Output = Array1<f64>;

    fn duration_in(&self, context: &Context) -> ResultE<f64> {
        match *self {
            Node::Segment(ref s) => s.duration_in(context),
            Node::Group(ref g) => g.duration_in(context),
        }
    }
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Array1<f64>> {
        match *self {
            Node::Segment(ref s) => s.forge_in(spec, context),
            Node::Group(ref g) => g.forge_in(spec, context),
        }
    }
}

impl From<Segment> for Node {
    fn from(segment: Segment) -> Self {
        Node::Segment(segment)
    }
}

impl From<SegmentGroup> for Node {
    fn from(group: SegmentGroup) -> Self {
        Node::Group(group)
    }
}
