//! objkit
//!
//! Three small, independent object utilities:
//! - [`geometry`]: a rectangle with a derived area
//! - [`json`]: JSON text in and out, with capability sets attached on parse
//! - [`selector`]: an immutable CSS selector builder
//!
//! # Example
//! ```rust
//! use objkit::{Config, rectangle, to_json};
//!
//! let r = rectangle(10.0, 20.0);
//! assert_eq!(r.area(), 200.0);
//! assert_eq!(to_json(&[1, 2, 3])?, "[1,2,3]");
//!
//! let builder = Config::default().selector_builder();
//! let sel = builder.id("main")?.class("container")?.class("editable")?;
//! assert_eq!(sel.stringify(), "#main.container.editable");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;

pub use config::Config;

pub use objkit_geometry::{Rectangle, rectangle};
pub use objkit_json::{CapabilitySet, JsonError, Prototyped, from_json, from_json_as, to_json};
pub use objkit_selector::{
    Combinator, CompoundSelector, CssSelectorBuilder, Selector, SelectorError,
    css_selector_builder,
};

// Re-export sub-crates for advanced usage
pub use objkit_geometry as geometry;
pub use objkit_json as json;
pub use objkit_selector as selector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
