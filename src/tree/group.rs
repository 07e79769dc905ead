use ndarray::{concatenate, Array1, Axis};

use crate::context::Context;
use crate::error::{Error, ResultE};
use crate::forge::{Forge, ForgeSpec};
use crate::property::{Args, Properties, Property, Value};
use crate::transformation::{transformed, Transformation};
use super::{Meta, Node};
use super::node::{number, DURATION};

/// Relative slack allowed between a group's declared duration and the sum of
/// its children's when strict checking is on.
const DURATION_TOLERANCE: f64 = 1e-9;

/// Ordered sequence of nodes, forged one after another.
/// An optional transformation derives extra symbols for the group's own
/// properties and for every child.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentGroup {
    children: Vec<Node>,
    transformation: Option<Transformation>,
    properties: Properties,
}

impl SegmentGroup {
    pub fn new<I, N, P>(children: I, duration: P) -> SegmentGroup
        where I: IntoIterator<Item=N>,
              N: Into<Node>,
              P: Into<Property>,
    {
        let mut properties = Properties::new();
        properties.set(DURATION, duration.into());
        SegmentGroup {
            children: children.into_iter().map(Into::into).collect(),
            transformation: None,
            properties,
        }
    }
    pub fn with_transformation(mut self, transformation: Transformation) -> SegmentGroup {
        self.transformation = Some(transformation);
        self
    }
    pub fn with<S: Into<String>, P: Into<Property>>(mut self, name: S, property: P) -> SegmentGroup {
        self.properties.set(name, property.into());
        self
    }
    pub fn children(&self) -> &[Node] {
        &self.children
    }
    pub fn transformation(&self) -> Option<&Transformation> {
        self.transformation.as_ref()
    }
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
    /// The context children are forged under.
    pub fn context(&self, context: &Context) -> ResultE<Context> {
        transformed(context, self.transformation.as_ref())
    }
    pub fn get(&self, name: &str, context: &Context) -> ResultE<Value> {
        self.properties.resolve(name, &self.context(context)?)
    }
    pub fn get_all_properties(&self, context: &Context) -> ResultE<Args> {
        self.properties.resolve_all(&self.context(context)?)
    }
    /// Sum of the children's resolved durations.
    pub fn children_duration(&self, context: &Context) -> ResultE<f64> {
        let inner = self.context(context)?;
        self.children_duration_in(&inner)
    }
    fn children_duration_in(&self, inner: &Context) -> ResultE<f64> {
        self.children.iter().try_fold(0f64, |acc, child| Ok(acc + child.duration_in(inner)?))
    }
    /// Check the declared duration against the children's, returning it if they agree.
    pub fn verify_duration(&self, context: &Context) -> ResultE<f64> {
        let inner = self.context(context)?;
        self.verify_duration_in(&inner)
    }
    fn verify_duration_in(&self, inner: &Context) -> ResultE<f64> {
        let declared = number(DURATION, self.properties.resolve(DURATION, inner)?)?;
        let children = self.children_duration_in(inner)?;
        if (declared - children).abs() > DURATION_TOLERANCE * declared.abs().max(1f64) {
            warn!("SegmentGroup declares duration {} but children last {}", declared, children);
            return Err(Error::GroupDuration { declared, children });
        }
        Ok(declared)
    }
    /// Children's descriptions, in order, each under the transformed context.
    pub fn meta(&self, context: &Context) -> ResultE<Meta> {
        let inner = self.context(context)?;
        let children = self.children.iter()
            .map(|child| child.meta(&inner))
            .collect::<ResultE<Vec<_>>>()?;
        Ok(Meta::Group(children))
    }
}

impl Forge for SegmentGroup {
    type Output = Array1<f64>;

    fn duration_in(&self, context: &Context) -> ResultE<f64> {
        number(DURATION, self.get(DURATION, context)?)
    }
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Array1<f64>> {
        let inner = self.context(context)?;
        if spec.strict_groups() {
            self.verify_duration_in(&inner)?;
        }
        let parts = self.children.iter()
            .map(|child| child.forge_in(spec, &inner))
            .collect::<ResultE<Vec<_>>>()?;
        let views: Vec<_> = parts.iter().map(|part| part.view()).collect();
        // Only an empty list of parts fails to concatenate.
        let samples = concatenate(Axis(0), &views).unwrap_or_else(|_| Array1::<f64>::zeros(0));
        trace!("Forged group of {} children into {} samples", self.children.len(), samples.len());
        Ok(samples)
    }
}
