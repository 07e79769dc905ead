use std::convert::TryFrom;

use crate::error::{Error, ResultE};

/// Settings that stay fixed over a whole forge call.
/// Deserializing goes through the factory, so a loaded spec is always valid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "RawForgeSpec")]
pub struct ForgeSpec {
    /// Samples per unit time.
    sample_rate: f64,
    /// Fail when a group's declared duration differs from the sum of its children's.
    #[serde(default)]
    strict_groups: bool,
    /// Run the element duration check before forging an element's channels.
    #[serde(default)]
    check_elements: bool,
}

/// Unchecked on-disk form of a `ForgeSpec`.
#[derive(Deserialize)]
struct RawForgeSpec {
    sample_rate: f64,
    #[serde(default)]
    strict_groups: bool,
    #[serde(default)]
    check_elements: bool,
}

/// Factory class used to create a ForgeSpec
#[derive(Clone, Copy, Debug)]
pub struct ForgeSpecFactory {
    spec: ForgeSpec,
}

impl ForgeSpec {
    /// Default settings at the given sample rate.
    pub fn new(sample_rate: f64) -> ResultE<ForgeSpec> {
        ForgeSpecFactory::new().sample_rate(sample_rate).finalize()
    }
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
    pub fn strict_groups(&self) -> bool {
        self.strict_groups
    }
    pub fn check_elements(&self) -> bool {
        self.check_elements
    }
    pub fn validate(&self) -> ResultE<()> {
        if self.sample_rate.is_finite() && self.sample_rate > 0f64 {
            Ok(())
        } else {
            Err(Error::InvalidSampleRate(self.sample_rate))
        }
    }
}

impl ForgeSpecFactory {
    pub fn new() -> ForgeSpecFactory {
        ForgeSpecFactory {
            spec: ForgeSpec {
                sample_rate: 0f64,
                strict_groups: false,
                check_elements: false,
            }
        }
    }
    pub fn finalize(&mut self) -> ResultE<ForgeSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
    pub fn sample_rate(&mut self, rate: f64) -> &mut ForgeSpecFactory {
        self.spec.sample_rate = rate;
        self
    }
    pub fn strict_groups(&mut self, strict: bool) -> &mut ForgeSpecFactory {
        self.spec.strict_groups = strict;
        self
    }
    pub fn check_elements(&mut self, check: bool) -> &mut ForgeSpecFactory {
        self.spec.check_elements = check;
        self
    }
}

impl TryFrom<RawForgeSpec> for ForgeSpec {
    type Error = Error;
    fn try_from(raw: RawForgeSpec) -> ResultE<ForgeSpec> {
        ForgeSpecFactory::new()
            .sample_rate(raw.sample_rate)
            .strict_groups(raw.strict_groups)
            .check_elements(raw.check_elements)
            .finalize()
    }
}
