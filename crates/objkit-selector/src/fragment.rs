//! Fragment kinds and their order

use std::fmt;

/// Kind of a selector fragment
///
/// Variants are declared in the order fragments must appear, so the
/// derived `Ord` is the append order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    /// Type selector (tag name)
    Element,
    /// `#id`
    Id,
    /// `.class`
    Class,
    /// `[attr]`
    Attribute,
    /// `:pseudo-class`
    PseudoClass,
    /// `::pseudo-element`
    PseudoElement,
}

impl FragmentKind {
    /// Whether the kind may appear at most once per selector
    pub fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN_ORDER: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    #[test]
    fn test_order() {
        assert!(IN_ORDER.windows(2).all(|pair| pair[0] < pair[1]));

        // No fragment yet orders before every kind
        assert!(IN_ORDER.iter().all(|kind| None < Some(*kind)));
    }

    #[test]
    fn test_unique_kinds() {
        let unique: Vec<_> = IN_ORDER.into_iter().filter(|kind| kind.is_unique()).collect();
        assert_eq!(
            unique,
            [FragmentKind::Element, FragmentKind::Id, FragmentKind::PseudoElement]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Element.to_string(), "element");
    }
}
