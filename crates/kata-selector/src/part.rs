//! Selector part kinds.
//!
//! A compound selector is built from parts of six kinds. The kinds are
//! totally ordered and a selector must list its parts in that order:
//!
//! ```text
//! element < id < class < attribute < pseudo-class < pseudo-element
//! ```

use strum_macros::{Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a single part of a compound selector. The derived `Ord`
/// follows declaration order, which is the order parts must be appended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered verbatim. Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl PartKind {
    /// All kinds, in append order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Element, id and pseudo-element may appear at most once per selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Wrap raw text in this kind's punctuation.
    #[must_use]
    pub fn format(self, raw: &str) -> String {
        match self {
            Self::Element => raw.to_string(),
            Self::Id => format!("#{raw}"),
            Self::Class => format!(".{raw}"),
            Self::Attribute => format!("[{raw}]"),
            Self::PseudoClass => format!(":{raw}"),
            Self::PseudoElement => format!("::{raw}"),
        }
    }
}

/// A single formatted fragment of a selector, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPart {
    /// Which bucket this part belongs to.
    pub kind: PartKind,
    /// The pre-formatted fragment, e.g. `.container` or `::before`.
    pub text: String,
}

impl SelectorPart {
    /// Format `raw` for `kind`. `SelectorPart::new(PartKind::Id, "main")`
    /// holds the text `#main`.
    #[must_use]
    pub fn new(kind: PartKind, raw: &str) -> Self {
        Self {
            kind,
            text: kind.format(raw),
        }
    }
}
