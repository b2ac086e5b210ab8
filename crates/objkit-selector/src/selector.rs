//! Complex selectors and combinators

use crate::CompoundSelector;
use std::fmt;

/// CSS combinator joining two selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Parse a combinator token
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A built selector: a compound selector or a combination of two selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Compound(CompoundSelector),
    /// Rendered text of a combination
    Combined(String),
}

impl Selector {
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Render, then reset to an empty selector
    pub fn take_string(&mut self) -> String {
        match self {
            Self::Compound(compound) => compound.take_string(),
            Self::Combined(_) => {
                let rendered = self.to_string();
                *self = Self::default();
                rendered
            }
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, Self::Combined(_))
    }

    /// Combine with `right`, this selector on the left
    pub fn combine(self, combinator: impl AsRef<str>, right: impl Into<Selector>) -> Selector {
        combine(self, combinator, right)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Compound(CompoundSelector::EMPTY)
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(text) => f.write_str(text),
        }
    }
}

/// Join two selectors with a combinator
///
/// The combinator is always written with one space on each side, so the
/// descendant combinator `" "` produces three spaces.
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl AsRef<str>,
    right: impl Into<Selector>,
) -> Selector {
    let (left, right) = (left.into(), right.into());
    let combinator = combinator.as_ref();

    tracing::debug!(combinator, "Combining selectors");

    Selector::Combined(format!("{} {} {}", left, combinator, right))
}
