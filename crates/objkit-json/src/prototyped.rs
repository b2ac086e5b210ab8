//! Parsed values with an attached capability set

use crate::{CapabilitySet, JsonError};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

/// A parsed JSON value paired with the capability set it resolves through
///
/// Field lookups check the value's own fields before the capability set.
/// Methods live only in the capability set.
#[derive(Debug, Clone)]
pub struct Prototyped {
    data: Value,
    capabilities: Arc<CapabilitySet>,
}

impl Prototyped {
    pub fn new(data: Value, capabilities: Arc<CapabilitySet>) -> Self {
        Self { data, capabilities }
    }

    /// The parsed value itself
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Value {
        &mut self.data
    }

    pub fn capabilities(&self) -> &Arc<CapabilitySet> {
        &self.capabilities
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// Check whether `name` is one of the value's own fields
    pub fn has_own(&self, name: &str) -> bool {
        self.data.as_object().is_some_and(|map| map.contains_key(name))
    }

    /// Look up a field, own fields first
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data
            .as_object()
            .and_then(|map| map.get(name))
            .or_else(|| self.capabilities.field(name))
    }

    /// Look up a numeric field
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Look up a numeric field, failing with a capability error when absent
    ///
    /// Meant for use inside capability methods.
    pub fn require_number(&self, name: &str) -> Result<f64, JsonError> {
        self.number(name).ok_or_else(|| JsonError::Capability {
            name: name.to_string(),
            message: format!("expected a numeric field `{}`", name),
        })
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.capabilities.method(name).is_some()
    }

    /// Call a capability method with this value as the receiver
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, JsonError> {
        let method = self
            .capabilities
            .method(name)
            .ok_or_else(|| JsonError::MissingCapability { name: name.to_string() })?;

        tracing::trace!(method = name, args = args.len(), "Calling capability method");
        method(self, args)
    }
}

/// Only the data is serialized; capabilities never round-trip
impl Serialize for Prototyped {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
