use std::fmt;

use crate::property::Args;

/// Structural description of a forge, mirroring the tree: which primitive
/// each segment would call, and with which resolved arguments.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize)]
#[serde(untagged)]
pub enum Meta {
    Atom {
        atom: String,
        args: Args,
    },
    Group(Vec<Meta>),
}

impl Meta {
    /// Number of segments described.
    pub fn count_atoms(&self) -> usize {
        match *self {
            Meta::Atom { .. } => 1,
            Meta::Group(ref children) => children.iter().map(Meta::count_atoms).sum(),
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
