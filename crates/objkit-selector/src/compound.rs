//! Compound Selectors
//!
//! The fragment set accumulated by one builder chain.

use crate::{AttributePolicy, FragmentKind, SelectorConfig, SelectorError};
use std::fmt;

/// A compound selector such as `a#main.nav[href]:hover::after`
///
/// Values are immutable from the outside: each append clones the receiver
/// and returns the extended copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Kind of the most recent fragment, `None` before the first
    last: Option<FragmentKind>,
    config: SelectorConfig,
}

impl CompoundSelector {
    /// The empty fragment set every chain starts from
    pub const EMPTY: Self = Self::with_config(SelectorConfig::DEFAULT);

    /// An empty fragment set using `config`
    pub const fn with_config(config: SelectorConfig) -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            last: None,
            config,
        }
    }

    pub fn element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, value.into())
    }

    pub fn id(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, value.into())
    }

    pub fn class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, value.into())
    }

    /// Append an attribute fragment, written without brackets (`href$=".png"`)
    pub fn attr(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, value.into())
    }

    /// Append a pseudo-class, written without the colon (`nth-of-type(even)`)
    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, value.into())
    }

    pub fn pseudo_element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, value.into())
    }

    fn append(&self, kind: FragmentKind, value: String) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.has(kind) {
            tracing::debug!(%kind, "Rejected duplicate selector fragment");
            return Err(SelectorError::DuplicateFragment { kind });
        }

        if let Some(last) = self.last.filter(|last| kind < *last) {
            tracing::debug!(%kind, after = %last, "Rejected out-of-order selector fragment");
            return Err(SelectorError::OrderViolation { kind, after: last });
        }

        tracing::trace!(%kind, value = %value, "Appending selector fragment");

        // Empty tokens are treated as absent but still advance the order
        let token = (!value.is_empty()).then_some(value);

        let mut next = self.clone();
        match kind {
            FragmentKind::Element => next.element = token,
            FragmentKind::Id => next.id = token,
            FragmentKind::Class => next.classes.extend(token),
            FragmentKind::Attribute => {
                if next.config.attribute_policy == AttributePolicy::Replace {
                    next.attributes.clear();
                }
                next.attributes.extend(token);
            }
            FragmentKind::PseudoClass => next.pseudo_classes.extend(token),
            FragmentKind::PseudoElement => next.pseudo_element = token,
        }
        next.last = Some(kind);

        Ok(next)
    }

    /// Check whether a fragment of `kind` has been added
    pub fn has(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Kind of the most recently appended fragment
    pub fn last_kind(&self) -> Option<FragmentKind> {
        self.last
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Render to the canonical selector string
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Render, then reset to an empty selector
    ///
    /// A second call returns an empty string. The configuration is kept.
    pub fn take_string(&mut self) -> String {
        let rendered = self.to_string();
        *self = Self::with_config(self.config);
        rendered
    }
}

impl Default for CompoundSelector {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        for attribute in &self.attributes {
            write!(f, "[{}]", attribute)?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{}", pseudo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let empty = CompoundSelector::default();
        assert!(empty.is_empty());
        assert_eq!(empty.last_kind(), None);
        assert_eq!(empty.stringify(), "");
    }

    #[test]
    fn test_full_selector() {
        let sel = CompoundSelector::EMPTY
            .element("a")
            .and_then(|s| s.id("main"))
            .and_then(|s| s.class("nav"))
            .and_then(|s| s.attr("href"))
            .and_then(|s| s.pseudo_class("hover"))
            .and_then(|s| s.pseudo_element("after"))
            .unwrap();

        assert_eq!(sel.stringify(), "a#main.nav[href]:hover::after");
        assert_eq!(sel.last_kind(), Some(FragmentKind::PseudoElement));
        assert_eq!(sel.element_name(), Some("a"));
        assert_eq!(sel.id_value(), Some("main"));
        assert_eq!(sel.pseudo_element_name(), Some("after"));
    }

    #[test]
    fn test_append_does_not_mutate_receiver() {
        let base = CompoundSelector::EMPTY.element("div").unwrap();
        let with_id = base.id("a").unwrap();
        let with_class = base.class("b").unwrap();

        assert_eq!(base.stringify(), "div");
        assert_eq!(with_id.stringify(), "div#a");
        assert_eq!(with_class.stringify(), "div.b");
        assert!(CompoundSelector::EMPTY.is_empty());
    }

    #[test]
    fn test_repeatable_kinds() {
        let sel = CompoundSelector::EMPTY
            .class("a")
            .and_then(|s| s.class("b"))
            .and_then(|s| s.pseudo_class("hover"))
            .and_then(|s| s.pseudo_class("focus"))
            .unwrap();

        assert_eq!(sel.classes(), ["a", "b"]);
        assert_eq!(sel.pseudo_classes(), ["hover", "focus"]);
        assert_eq!(sel.stringify(), ".a.b:hover:focus");
    }

    #[test]
    fn test_duplicate_checked_before_order() {
        let sel = CompoundSelector::EMPTY.element("a").and_then(|s| s.class("x")).unwrap();
        assert_eq!(
            sel.element("b"),
            Err(SelectorError::DuplicateFragment { kind: FragmentKind::Element })
        );
    }

    #[test]
    fn test_order_violation_reports_kinds() {
        let sel = CompoundSelector::EMPTY.pseudo_class("hover").unwrap();
        assert_eq!(
            sel.attr("title"),
            Err(SelectorError::OrderViolation {
                kind: FragmentKind::Attribute,
                after: FragmentKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_attribute_replace() {
        let sel = CompoundSelector::EMPTY
            .attr("href")
            .and_then(|s| s.attr("title"))
            .unwrap();
        assert_eq!(sel.attributes(), ["title"]);
        assert_eq!(sel.stringify(), "[title]");
    }

    #[test]
    fn test_attribute_accumulate() {
        let config = SelectorConfig::DEFAULT.with_attribute_policy(AttributePolicy::Accumulate);
        let sel = CompoundSelector::with_config(config)
            .element("input")
            .and_then(|s| s.attr("type=\"text\""))
            .and_then(|s| s.attr("required"))
            .unwrap();
        assert_eq!(sel.stringify(), "input[type=\"text\"][required]");
    }

    #[test]
    fn test_empty_tokens_are_absent() {
        let sel = CompoundSelector::EMPTY.id("").unwrap();
        assert_eq!(sel.stringify(), "");
        assert!(!sel.has(FragmentKind::Id));
        assert_eq!(sel.last_kind(), Some(FragmentKind::Id));

        let sel = CompoundSelector::EMPTY.class("").and_then(|s| s.class("b")).unwrap();
        assert_eq!(sel.stringify(), ".b");

        let sel = CompoundSelector::EMPTY.pseudo_class("").unwrap();
        assert_eq!(sel.stringify(), "");

        let sel = CompoundSelector::EMPTY.element("").and_then(|s| s.element("x")).unwrap();
        assert_eq!(sel.stringify(), "x");

        // An empty token still takes its place in the order
        assert!(matches!(
            CompoundSelector::EMPTY.attr("").and_then(|s| s.class("late")),
            Err(SelectorError::OrderViolation { .. })
        ));
    }

    #[test]
    fn test_empty_attribute_replaces() {
        let sel = CompoundSelector::EMPTY.attr("href").and_then(|s| s.attr("")).unwrap();
        assert!(sel.attributes().is_empty());
        assert_eq!(sel.stringify(), "");
    }

    #[test]
    fn test_take_string_resets() {
        let config = SelectorConfig::DEFAULT.with_attribute_policy(AttributePolicy::Accumulate);
        let mut sel = CompoundSelector::with_config(config).id("main").unwrap();

        assert_eq!(sel.take_string(), "#main");
        assert_eq!(sel.take_string(), "");
        assert!(sel.is_empty());
        assert_eq!(sel.config(), config);

        // Reset selectors accept any fragment again
        assert_eq!(sel.element("p").unwrap().stringify(), "p");
    }

    #[test]
    fn test_stringify_is_repeatable() {
        let sel = CompoundSelector::EMPTY.id("main").unwrap();
        assert_eq!(sel.stringify(), "#main");
        assert_eq!(sel.stringify(), "#main");
        assert_eq!(sel.to_string(), "#main");
    }
}
