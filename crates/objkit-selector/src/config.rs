//! Builder Configuration

/// How repeated attribute fragments are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributePolicy {
    /// Keep only the most recent attribute
    #[default]
    Replace,
    /// Keep every attribute in append order
    Accumulate,
}

/// Selector builder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Handling of repeated `attr` calls on one chain
    pub attribute_policy: AttributePolicy,
}

impl SelectorConfig {
    pub const DEFAULT: Self = Self {
        attribute_policy: AttributePolicy::Replace,
    };

    pub const fn with_attribute_policy(mut self, policy: AttributePolicy) -> Self {
        self.attribute_policy = policy;
        self
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
