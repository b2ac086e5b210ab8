//! Capability Sets
//!
//! Named fields and methods resolved for parsed values that lack them.

use crate::{JsonError, Prototyped};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Method stored in a capability set
///
/// Receives the value it was called on and the call arguments.
pub type Method = Arc<dyn Fn(&Prototyped, &[Value]) -> Result<Value, JsonError> + Send + Sync>;

/// Fields and methods attached to a parsed value
///
/// Sets are built by value and then shared behind an `Arc`. A set may
/// extend a parent; lookups that miss here continue up the chain.
#[derive(Clone, Default)]
pub struct CapabilitySet {
    name: Option<String>,
    fields: Map<String, Value>,
    methods: HashMap<String, Method>,
    parent: Option<Arc<CapabilitySet>>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with a name used in logs and debug output
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a default field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a method
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Prototyped, &[Value]) -> Result<Value, JsonError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Continue unresolved lookups in `parent`
    pub fn extend(mut self, parent: Arc<CapabilitySet>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn parent(&self) -> Option<&Arc<CapabilitySet>> {
        self.parent.as_ref()
    }

    /// Resolve a field through the chain, nearest set first
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|set| set.fields.get(name))
    }

    /// Resolve a method through the chain, nearest set first
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.chain().find_map(|set| set.methods.get(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.field(name).is_some() || self.method(name).is_some()
    }

    /// This set followed by its ancestors
    fn chain(&self) -> impl Iterator<Item = &CapabilitySet> {
        std::iter::successors(Some(self), |set| set.parent.as_deref())
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();

        f.debug_struct("CapabilitySet")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("methods", &methods)
            .field("parent", &self.parent)
            .finish()
    }
}
