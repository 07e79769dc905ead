//! Context transformations: rules deriving new symbols from existing ones.
//!
//! Rules are evaluated in order against a growing copy of the context, so a
//! rule may use any symbol assigned by an earlier rule of the same
//! transformation. The caller's context is never touched.

use crate::context::Context;
use crate::error::ResultE;
use crate::property::Symbol;

/// `assigned = Σ multiplier * context[source]`
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct LinearRule {
    pub assigned: String,
    pub terms: Vec<(f64, String)>,
}

/// `assigned = Σ a * b`, where both factors may be symbols.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct BilinearRule {
    pub assigned: String,
    pub terms: Vec<(Symbol, Symbol)>,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub enum Transformation {
    Linear(Vec<LinearRule>),
    Bilinear(Vec<BilinearRule>),
}

impl LinearRule {
    fn evaluate(&self, context: &Context) -> ResultE<f64> {
        self.terms.iter().try_fold(0f64, |acc, &(multiplier, ref source)| {
            Ok(acc + multiplier * context.get(source)?)
        })
    }
}

impl BilinearRule {
    fn evaluate(&self, context: &Context) -> ResultE<f64> {
        self.terms.iter().try_fold(0f64, |acc, &(ref a, ref b)| {
            Ok(acc + a.get(context)? * b.get(context)?)
        })
    }
}

impl Transformation {
    /// Build a linear transformation from `(assigned, [(multiplier, source), ...])` entries.
    pub fn linear<I, T, S, A>(rules: I) -> Transformation
        where I: IntoIterator<Item=(A, T)>,
              T: IntoIterator<Item=(f64, S)>,
              S: Into<String>,
              A: Into<String>,
    {
        Transformation::Linear(rules.into_iter().map(|(assigned, terms)| LinearRule {
            assigned: assigned.into(),
            terms: terms.into_iter().map(|(m, s)| (m, s.into())).collect(),
        }).collect())
    }
    /// Build a bilinear transformation from `(assigned, [(a, b), ...])` entries.
    pub fn bilinear<I, T, A>(rules: I) -> Transformation
        where I: IntoIterator<Item=(A, T)>,
              T: IntoIterator<Item=(Symbol, Symbol)>,
              A: Into<String>,
    {
        Transformation::Bilinear(rules.into_iter().map(|(assigned, terms)| BilinearRule {
            assigned: assigned.into(),
            terms: terms.into_iter().collect(),
        }).collect())
    }
    /// Symbols this transformation assigns, in evaluation order.
    pub fn assigned(&self) -> Vec<&str> {
        match *self {
            Transformation::Linear(ref rules) => rules.iter().map(|r| r.assigned.as_str()).collect(),
            Transformation::Bilinear(ref rules) => rules.iter().map(|r| r.assigned.as_str()).collect(),
        }
    }
    /// Derive a new context: the input plus every assigned symbol.
    pub fn apply(&self, context: &Context) -> ResultE<Context> {
        let mut derived = context.clone();
        match *self {
            Transformation::Linear(ref rules) => for rule in rules {
                let value = rule.evaluate(&derived)?;
                trace!("Transformation: {} := {}", rule.assigned, value);
                derived.bind(&rule.assigned, value);
            },
            Transformation::Bilinear(ref rules) => for rule in rules {
                let value = rule.evaluate(&derived)?;
                trace!("Transformation: {} := {}", rule.assigned, value);
                derived.bind(&rule.assigned, value);
            },
        }
        Ok(derived)
    }
}

/// Apply an optional transformation; `None` is the identity.
pub fn transformed(context: &Context, transformation: Option<&Transformation>) -> ResultE<Context> {
    match transformation {
        Some(t) => t.apply(context),
        None => Ok(context.clone()),
    }
}
