//! Environment for the Tern evaluator: a persistent chain of bindings.
//!
//! An [`Env`] is an immutable, singly-linked list of bindings. Binding
//! a name returns a *new* chain whose head points at the old chain as
//! its tail; nothing is ever rewritten in place. Lookup walks from the
//! head outward and stops at the first match, so a newer binding
//! shadows an older one without destroying it. Re-assignment also
//! prepends, which keeps every environment ever produced during an
//! evaluation valid and shareable.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;
use tern_syntax::ast::Type;

#[derive(Debug)]
struct Binding {
    name: String,
    value: Value,
    ty: Type,
    next: Option<Rc<Binding>>,
}

/// A persistent variable environment. Cloning is O(1) and shares the
/// underlying chain; the empty environment terminates every chain and
/// answers every lookup with `None`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    head: Option<Rc<Binding>>,
}

impl Env {
    /// The empty environment.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Looks up `name`, returning the nearest binding's value and
    /// declared type, or `None` if no binding for `name` exists
    /// anywhere in the chain.
    pub fn get(&self, name: &str) -> Option<(Value, Type)> {
        let mut node = self.head.as_deref();
        while let Some(binding) = node {
            if binding.name == name {
                return Some((binding.value.clone(), binding.ty));
            }
            node = binding.next.as_deref();
        }
        None
    }

    /// Returns a new environment with `name` bound in front of the
    /// current chain. The receiver is untouched and remains valid.
    pub fn bind(&self, name: impl Into<String>, value: Value, ty: Type) -> Env {
        Env {
            head: Some(Rc::new(Binding {
                name: name.into(),
                value,
                ty,
                next: self.head.clone(),
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Snapshot of the whole chain, nearest binding first. Shadowed
    /// bindings are included; callers that want only the visible ones
    /// should dedup by name.
    pub fn bindings(&self) -> Vec<(String, Value, Type)> {
        let mut out = Vec::new();
        let mut node = self.head.as_deref();
        while let Some(binding) = node {
            out.push((binding.name.clone(), binding.value.clone(), binding.ty));
            node = binding.next.as_deref();
        }
        out
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut node = self.head.as_deref();
        let mut first = true;
        while let Some(binding) = node {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: ({}, {})", binding.name, binding.value, binding.ty)?;
            first = false;
            node = binding.next.as_deref();
        }
        Ok(())
    }
}
