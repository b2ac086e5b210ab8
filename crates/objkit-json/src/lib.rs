//! objkit JSON Bridge
//!
//! Serializes values to JSON text and parses JSON text back into values
//! that carry a capability set.
//!
//! # Example
//! ```rust
//! use objkit_json::{from_json, to_json, CapabilitySet};
//! use serde_json::Value;
//!
//! let circle = CapabilitySet::named("Circle").with_method("diameter", |this, _args| {
//!     Ok(Value::from(this.require_number("radius")? * 2.0))
//! });
//!
//! let c = from_json(circle, r#"{"radius":10}"#)?;
//! assert_eq!(c.call("diameter", &[])?, Value::from(20.0));
//! assert_eq!(to_json(&c)?, r#"{"radius":10}"#);
//! # Ok::<(), objkit_json::JsonError>(())
//! ```

mod capability;
mod prototyped;

pub use capability::{CapabilitySet, Method};
pub use prototyped::Prototyped;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Serialize a value to compact JSON text
///
/// Object keys keep the value's own order: struct field order, or insertion
/// order for parsed maps.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Parse JSON text and attach a capability set to the result
///
/// The parsed fields are not checked against the capability set.
pub fn from_json(
    capabilities: impl Into<Arc<CapabilitySet>>,
    json: &str,
) -> Result<Prototyped, JsonError> {
    let data: serde_json::Value = serde_json::from_str(json).map_err(JsonError::Parse)?;
    let capabilities = capabilities.into();

    tracing::debug!(
        capabilities = capabilities.name().unwrap_or("<anonymous>"),
        "Parsed {} bytes of JSON",
        json.len()
    );

    Ok(Prototyped::new(data, capabilities))
}

/// Parse JSON text straight into a concrete type
pub fn from_json_as<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}

/// JSON bridge error
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error(transparent)]
    Parse(serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("No capability named `{name}`")]
    MissingCapability { name: String },

    #[error("Capability `{name}` failed: {message}")]
    Capability { name: String, message: String },
}
