//! Declared (possibly symbolic) parameters and their resolved counterparts.

use serde::ser::{Serialize, Serializer};

use crate::context::Context;
use crate::error::{Error, ResultE};

/// A concrete property value, as handed to a primitive.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value; primitives decide what it means.
    None,
    Number(f64),
    /// Per-component values, for multi-component primitives.
    List(Vec<f64>),
}

/// A property as declared on a node: either a literal, or the name of a
/// symbol to look up in the context at forge time.
///
/// There is no way to declare a literal string: strings always name symbols.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Literal(Value),
    Symbol(String),
}

/// Either a literal number or a symbol name.
/// Used where only numbers make sense, e.g. the coefficients of a transformation.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Value(f64),
    Name(String),
}

/// Properties of a node, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, Property)>,
}

/// Resolved properties, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, Value)>,
}


impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
    pub fn is_none(&self) -> bool {
        *self == Value::None
    }
}

impl Property {
    pub fn none() -> Property {
        Property::Literal(Value::None)
    }
    pub fn symbol<S: Into<String>>(name: S) -> Property {
        Property::Symbol(name.into())
    }
    pub fn is_symbolic(&self) -> bool {
        match *self {
            Property::Symbol(_) => true,
            Property::Literal(_) => false,
        }
    }
    pub fn resolve(&self, context: &Context) -> ResultE<Value> {
        match *self {
            Property::Literal(ref value) => Ok(value.clone()),
            Property::Symbol(ref name) => context.get(name).map(Value::Number),
        }
    }
}

impl From<f64> for Property {
    fn from(value: f64) -> Self {
        Property::Literal(Value::Number(value))
    }
}

impl From<Vec<f64>> for Property {
    fn from(values: Vec<f64>) -> Self {
        Property::Literal(Value::List(values))
    }
}

impl<'a> From<&'a str> for Property {
    fn from(name: &'a str) -> Self {
        Property::Symbol(name.to_string())
    }
}

impl From<String> for Property {
    fn from(name: String) -> Self {
        Property::Symbol(name)
    }
}

impl From<Value> for Property {
    fn from(value: Value) -> Self {
        Property::Literal(value)
    }
}

impl Symbol {
    pub fn get(&self, context: &Context) -> ResultE<f64> {
        match *self {
            Symbol::Value(v) => Ok(v),
            Symbol::Name(ref name) => context.get(name),
        }
    }
}

impl From<f64> for Symbol {
    fn from(value: f64) -> Self {
        Symbol::Value(value)
    }
}

impl<'a> From<&'a str> for Symbol {
    fn from(name: &'a str) -> Self {
        Symbol::Name(name.to_string())
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::Name(name)
    }
}


impl Properties {
    pub fn new() -> Self {
        Default::default()
    }
    /// Declare `name`, replacing any previous declaration but keeping its position.
    pub fn set<S: Into<String>>(&mut self, name: S, property: Property) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.0 == name) {
            entry.1 = property;
            return;
        }
        self.entries.push((name, property));
    }
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.iter().find(|e| e.0 == name).map(|e| &e.1)
    }
    pub fn iter(&self) -> impl Iterator<Item=(&str, &Property)> {
        self.entries.iter().map(|e| (e.0.as_str(), &e.1))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Resolve a single declared property against the context.
    pub fn resolve(&self, name: &str, context: &Context) -> ResultE<Value> {
        self.get(name)
            .ok_or_else(|| Error::UnknownProperty(name.to_string()))?
            .resolve(context)
    }
    /// Resolve every declared property in one pass.
    pub fn resolve_all(&self, context: &Context) -> ResultE<Args> {
        let entries = self.entries.iter()
            .map(|&(ref name, ref prop)| Ok((name.clone(), prop.resolve(context)?)))
            .collect::<ResultE<Vec<_>>>()?;
        Ok(Args { entries })
    }
}

impl Args {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|e| e.0 == name)?;
        Some(self.entries.remove(idx).1)
    }
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.0 == name).map(|e| &e.1)
    }
    pub fn iter(&self) -> impl Iterator<Item=(&str, &Value)> {
        self.entries.iter().map(|e| (e.0.as_str(), &e.1))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// A required numeric argument.
    pub fn number(&self, name: &str) -> ResultE<f64> {
        match self.get(name) {
            None => Err(Error::UnknownProperty(name.to_string())),
            Some(&Value::Number(n)) => Ok(n),
            Some(_) => Err(Error::PropertyType { name: name.to_string(), expected: "a number" }),
        }
    }
    /// An optional numeric argument; undeclared and `None` both yield `default`.
    pub fn number_or(&self, name: &str, default: f64) -> ResultE<f64> {
        match self.get(name) {
            None | Some(&Value::None) => Ok(default),
            Some(&Value::Number(n)) => Ok(n),
            Some(&Value::List(_)) => Err(Error::PropertyType { name: name.to_string(), expected: "a number" }),
        }
    }
    /// A per-component argument. Undeclared and `None` yield `default`; a
    /// single number is repeated once per entry of `default`.
    pub fn list_or(&self, name: &str, default: &[f64]) -> Vec<f64> {
        match self.get(name) {
            None | Some(&Value::None) => default.to_vec(),
            Some(&Value::Number(n)) => vec![n; default.len()],
            Some(&Value::List(ref values)) => values.clone(),
        }
    }
}

impl Serialize for Args {
    /// Serialized as a map, keeping declaration order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.0, &e.1)))
    }
}
