//! Builder Facade
//!
//! Entry points that start a selector chain from the empty template.

use crate::{CompoundSelector, Selector, SelectorConfig, SelectorError};

/// Builder with the default configuration
pub fn css_selector_builder() -> CssSelectorBuilder {
    CssSelectorBuilder::new()
}

/// Starts selector chains
///
/// Holds only configuration. Each call derives a fresh selector from the
/// empty template, so the builder itself never accumulates fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssSelectorBuilder {
    config: SelectorConfig,
}

impl CssSelectorBuilder {
    pub const fn new() -> Self {
        Self::with_config(SelectorConfig::DEFAULT)
    }

    pub const fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    fn template(&self) -> CompoundSelector {
        CompoundSelector::with_config(self.config)
    }

    pub fn element(&self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        self.template().element(value)
    }

    pub fn id(&self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        self.template().id(value)
    }

    pub fn class(&self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        self.template().class(value)
    }

    pub fn attr(&self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        self.template().attr(value)
    }

    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        self.template().pseudo_class(value)
    }

    pub fn pseudo_element(
        &self,
        value: impl Into<String>,
    ) -> Result<CompoundSelector, SelectorError> {
        self.template().pseudo_element(value)
    }

    pub fn combine(
        &self,
        left: impl Into<Selector>,
        combinator: impl AsRef<str>,
        right: impl Into<Selector>,
    ) -> Selector {
        crate::combine(left, combinator, right)
    }
}
