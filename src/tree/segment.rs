use ndarray::Array1;

use crate::context::Context;
use crate::error::ResultE;
use crate::forge::{Forge, ForgeSpec};
use crate::property::{Args, Properties, Property, Value};
use crate::util::{sample_count, time_axis};
use super::{Atom, Meta};
use super::node::{number, DURATION};

/// Leaf of a segment tree: one primitive bound to its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    atom: Atom,
    properties: Properties,
}

impl Segment {
    pub fn new<P: Into<Property>>(atom: Atom, duration: P) -> Segment {
        let mut properties = Properties::new();
        properties.set(DURATION, duration.into());
        Segment { atom, properties }
    }
    /// Declare an additional property to pass to the primitive.
    pub fn with<S: Into<String>, P: Into<Property>>(mut self, name: S, property: P) -> Segment {
        self.properties.set(name, property.into());
        self
    }
    pub fn atom(&self) -> Atom {
        self.atom
    }
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
    pub fn get(&self, name: &str, context: &Context) -> ResultE<Value> {
        self.properties.resolve(name, context)
    }
    pub fn get_all_properties(&self, context: &Context) -> ResultE<Args> {
        self.properties.resolve_all(context)
    }
    /// Describe what would be forged, without generating any samples.
    pub fn meta(&self, context: &Context) -> ResultE<Meta> {
        Ok(Meta::Atom {
            atom: self.atom.name().to_string(),
            args: self.get_all_properties(context)?,
        })
    }
}

impl Forge for Segment {
    type Output = Array1<f64>;

    fn duration_in(&self, context: &Context) -> ResultE<f64> {
        number(DURATION, self.get(DURATION, context)?)
    }
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Array1<f64>> {
        let mut args = self.get_all_properties(context)?;
        let duration = number(DURATION, args.remove(DURATION).unwrap_or(Value::None))?;
        let n = sample_count(duration, spec.sample_rate())?;
        trace!("Forging {} over {} ({} samples)", self.atom.name(), duration, n);
        if n == 0 {
            return Ok(Array1::zeros(0));
        }
        let time = time_axis(duration, n);
        self.atom.render(&time, &args)
    }
}
