//! The forging interface shared by trees and elements, and lexical scoping
//! of local contexts.
//!
//! Forging is a read-only traversal: the same tree may be forged from
//! several threads at once under different contexts, as long as the
//! primitives it uses are free of side effects.

mod spec;

use std::borrow::Cow;

use crate::context::Context;
use crate::error::ResultE;
use crate::property::Value;
use crate::tree::{Meta, Node};

pub use self::spec::{ForgeSpec, ForgeSpecFactory};

/// Anything that can be materialized into samples.
pub trait Forge {
    type Output;

    /// Bindings layered over the caller's context before resolving anything.
    fn local_context(&self) -> Option<&Context> {
        None
    }
    /// Duration under a context that already includes `local_context`.
    fn duration_in(&self, context: &Context) -> ResultE<f64>;
    /// Forge under a context that already includes `local_context`.
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Self::Output>;

    fn effective_context<'c>(&self, context: &'c Context) -> Cow<'c, Context> {
        match self.local_context() {
            Some(local) if !local.is_empty() => Cow::Owned(context.merge(local)),
            _ => Cow::Borrowed(context),
        }
    }
    fn duration(&self, context: &Context) -> ResultE<f64> {
        self.duration_in(&self.effective_context(context))
    }
    fn forge(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Self::Output> {
        self.forge_in(spec, &self.effective_context(context))
    }
    /// View of `self` with `local` as its local context.
    /// Replaces whatever local context `self` carries; `self` is left as is.
    fn in_context(&self, local: Context) -> Scoped<Self> where Self: Sized {
        Scoped::new(self, local)
    }
}

/// A borrowed tree or element paired with a replacement local context.
#[derive(Debug)]
pub struct Scoped<'a, T: 'a> {
    inner: &'a T,
    local: Context,
}

impl<'a, T> Scoped<'a, T> {
    pub fn new(inner: &'a T, local: Context) -> Self {
        Scoped { inner, local }
    }
    pub fn inner(&self) -> &'a T {
        self.inner
    }
    pub fn local(&self) -> &Context {
        &self.local
    }
}

impl<'a, T> Clone for Scoped<'a, T> {
    fn clone(&self) -> Self {
        Scoped { inner: self.inner, local: self.local.clone() }
    }
}

impl<'a, T: Forge> Forge for Scoped<'a, T> {
    type Output = T::Output;

    fn local_context(&self) -> Option<&Context> {
        Some(&self.local)
    }
    fn duration_in(&self, context: &Context) -> ResultE<f64> {
        self.inner.duration_in(context)
    }
    fn forge_in(&self, spec: &ForgeSpec, context: &Context) -> ResultE<Self::Output> {
        self.inner.forge_in(spec, context)
    }
}

impl<'a> Scoped<'a, Node> {
    pub fn get(&self, name: &str, context: &Context) -> ResultE<Value> {
        self.inner.get(name, &self.effective_context(context))
    }
    pub fn meta(&self, context: &Context) -> ResultE<Meta> {
        self.inner.meta(&self.effective_context(context))
    }
}
