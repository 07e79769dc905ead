use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array1;

use crate::context::Context;
use crate::error::{Error, ResultE};
use crate::forge::{Forge, ForgeSpec};
use crate::tree::Node;
use crate::util::time_axis;

/// Identifies one output channel of an element.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelId {
    Index(u32),
    Name(String),
}

/// A collection of segment trees that are to be played simultaneously,
/// one per channel.
/// All channels must last equally long; see `Element::get_duration`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    channels: BTreeMap<ChannelId, Node>,
    /// Sequencing options (repetitions, jump targets, ...). Opaque to forging.
    sequencing: BTreeMap<String, i64>,
    local_context: Context,
}

/// Output of `Element::forge`: one sample array per channel.
pub type Channels = BTreeMap<ChannelId, Array1<f64>>;

impl Element {
    pub fn new() -> Self {
        Default::default()
    }
    /// Set the tree for `channel`, replacing any existing one.
    pub fn with_channel<C: Into<ChannelId>, N: Into<Node>>(mut self, channel: C, node: N) -> Element {
        self.channels.insert(channel.into(), node.into());
        self
    }
    pub fn with_sequencing<S: Into<String>>(mut self, option: S, value: i64) -> Element {
        self.sequencing.insert(option.into(), value);
        self
    }
    pub fn with_local_context(mut self, local_context: Context) -> Element {
        self.local_context = local_context;
        self
    }
    pub fn channels(&self) -> &BTreeMap<ChannelId, Node> {
        &self.channels
    }
    pub fn channel(&self, channel: &ChannelId) -> Option<&Node> {
        self.channels.get(channel)
    }
    pub fn sequencing(&self) -> &BTreeMap<String, i64> {
        &self.sequencing
    }
    pub fn local(&self) -> &Context {
        &self.local_context
    }
    /// The duration every channel agrees on.
    /// Fails if channels resolve to different durations, if any channel
    /// fails to resolve, or if there are no channels at all.
    pub fn get_duration(&self, context: &Context) -> ResultE<f64> {
        self.duration(context)
    }
    /// Forge all channels, plus the time axis they share.
    /// Unlike `forge`, this always checks that the channels agree on duration.
    /// The axis has as many points as the forged channels; a group forges the
    /// sum of its children's rounded counts, which may differ from a segment
    /// of the same total duration, so channels of unequal length are an error.
    pub fn forge_with_time(&self, spec: &ForgeSpec, context: &Context) -> ResultE<(Array1<f64>, Channels)> {
        let context = self.effective_context(context);
        let duration = self.duration_in(&context)?;
        let channels = self.forge_channels(spec, &context)?;
        let mut lengths: Vec<usize> = Vec::new();
        for samples in channels.values() {
            if !lengths.contains(&samples.len()) {
                lengths.push(samples.len());
            }
        }
        if lengths.len() != 1 {
            warn!("Element: channels forged to different lengths: {:?}", lengths);
            return Err(Error::ChannelLength { lengths });
        }
        Ok((time_axis(duration, lengths[0]), channels))
    }
    fn forge_channels(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Channels> {
        debug!("Forging element with {} channels", self.channels.len());
        self.channels.iter()
            .map(|(id, node)| Ok((id.clone(), node.forge_in(spec, context)?)))
            .collect()
    }
}

impl Forge for Element {
    type Output = Channels;

    fn local_context(&self) -> Option<&Context> {
        Some(&self.local_context)
    }
    fn duration_in(&self, context: &Context) -> ResultE<f64> {
        let mut durations: Vec<f64> = Vec::new();
        let mut failed = Vec::new();
        for (id, node) in &self.channels {
            match node.duration_in(context) {
                Ok(d) => if !durations.contains(&d) {
                    durations.push(d);
                },
                Err(e) => {
                    warn!("Element: channel {} has no duration: {}", id, e);
                    failed.push(id.clone());
                },
            }
        }
        if durations.len() != 1 || !failed.is_empty() {
            warn!("Element: channels disagree on duration: {:?}", durations);
            return Err(Error::ElementDuration { durations, failed });
        }
        Ok(durations[0])
    }
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Channels> {
        if spec.check_elements() {
            self.duration_in(context)?;
        }
        self.forge_channels(spec, context)
    }
}

impl From<u32> for ChannelId {
    fn from(idx: u32) -> Self {
        ChannelId::Index(idx)
    }
}

impl<'a> From<&'a str> for ChannelId {
    fn from(name: &'a str) -> Self {
        ChannelId::Name(name.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(name: String) -> Self {
        ChannelId::Name(name)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChannelId::Index(idx) => write!(f, "{}", idx),
            ChannelId::Name(ref name) => write!(f, "{}", name),
        }
    }
}
