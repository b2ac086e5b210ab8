//! objkit CSS Selector Builder
//!
//! Builds CSS selectors from typed fragments:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//! ```
//!
//! Fragments must be added in that order. Element, id and pseudo-element
//! may appear once; classes and pseudo-classes may repeat. Every append
//! returns a new selector and leaves its receiver untouched.
//!
//! # Example
//! ```rust
//! use objkit_selector::{Combinator, css_selector_builder};
//!
//! let builder = css_selector_builder();
//!
//! let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let rows = builder.combine(
//!     builder.element("div")?.id("main")?,
//!     Combinator::NextSibling,
//!     builder.element("table")?.id("data")?,
//! );
//! assert_eq!(rows.stringify(), "div#main + table#data");
//! # Ok::<(), objkit_selector::SelectorError>(())
//! ```

mod builder;
mod compound;
mod config;
mod fragment;
mod selector;

pub use builder::{CssSelectorBuilder, css_selector_builder};
pub use compound::CompoundSelector;
pub use config::{AttributePolicy, SelectorConfig};
pub use fragment::FragmentKind;
pub use selector::{Combinator, Selector, combine};

/// Selector building error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateFragment { kind: FragmentKind },

    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation { kind: FragmentKind, after: FragmentKind },
}

impl SelectorError {
    /// The fragment kind whose append was rejected
    pub fn kind(&self) -> FragmentKind {
        match self {
            Self::DuplicateFragment { kind } | Self::OrderViolation { kind, .. } => *kind,
        }
    }
}
