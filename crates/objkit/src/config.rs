//! objkit Configuration

use objkit_selector::{CssSelectorBuilder, SelectorConfig};

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Selector builder behaviour
    pub selector: SelectorConfig,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Selector builder using this configuration
    pub fn selector_builder(&self) -> CssSelectorBuilder {
        CssSelectorBuilder::with_config(self.selector)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            log_filter: "objkit=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objkit_selector::AttributePolicy;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.selector.attribute_policy, AttributePolicy::Replace);
        assert_eq!(config.log_filter, "objkit=info");
    }

    #[test]
    fn test_selector_builder_uses_config() {
        let config = Config {
            selector: SelectorConfig::default().with_attribute_policy(AttributePolicy::Accumulate),
            ..Config::default()
        };
        let sel = config.selector_builder().attr("a").unwrap().attr("b").unwrap();
        assert_eq!(sel.stringify(), "[a][b]");
    }
}
