//! The selector value and its six entry points.
//!
//! Each entry point exists twice: as a free function that starts a new
//! selector, and as a consuming method that appends to an existing one.
//! A consuming method that fails drops the selector along with it; use
//! [`Selector::push`] (or chain on a clone) to keep the last valid state.
//!
//! ```
//! use kata_selector::id;
//!
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::SelectorError;
use crate::part::{PartKind, SelectorPart};
use crate::specificity::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A compound selector held as six buckets, one per [`PartKind`]. The
/// element, id and pseudo-element buckets hold at most one part; the others
/// keep every part in call order.
///
/// Parts are only accepted in non-decreasing kind order, so rendering the
/// buckets in kind order reproduces exactly the order they were appended in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Set when the element part is the rendering of two combined selectors.
    combined: Option<Specificity>,
}

impl Selector {
    /// An empty selector. Renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_part(part: SelectorPart) -> Self {
        let mut selector = Self::new();
        selector.place(part);
        selector
    }

    /// Wrap an already rendered complex selector as the element part of a
    /// fresh selector.
    pub(crate) fn from_combined(text: String, specificity: Specificity) -> Self {
        Self {
            element: Some(text),
            combined: Some(specificity),
            ..Self::default()
        }
    }

    /// Append a part in place.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Uniqueness`] if the part is an element, id or
    /// pseudo-element and this selector already has one, and
    /// [`SelectorError::Order`] if a part of a later kind is already present.
    /// On error the selector is unchanged.
    pub fn push(&mut self, part: SelectorPart) -> Result<(), SelectorError> {
        let kind = part.kind;

        if kind.is_unique() && self.count(kind) > 0 {
            return Err(SelectorError::Uniqueness { kind });
        }

        if let Some(after) = self.last_kind().filter(|&after| after > kind) {
            return Err(SelectorError::Order { kind, after });
        }

        self.place(part);
        Ok(())
    }

    fn place(&mut self, part: SelectorPart) {
        let SelectorPart { kind, text } = part;
        match kind {
            PartKind::Element => self.element = Some(text),
            PartKind::Id => self.id = Some(text),
            PartKind::Class => self.classes.push(text),
            PartKind::Attribute => self.attributes.push(text),
            PartKind::PseudoClass => self.pseudo_classes.push(text),
            PartKind::PseudoElement => self.pseudo_element = Some(text),
        }
    }

    fn with(mut self, kind: PartKind, raw: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::new(kind, raw))?;
        Ok(self)
    }

    /// Append a type selector, rendered verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Uniqueness`] if an element is already present,
    /// [`SelectorError::Order`] if any other part is.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::Element, name)
    }

    /// Append an ID selector (`#name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Uniqueness`] if an id is already present,
    /// [`SelectorError::Order`] if a class or later part is.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::Id, name)
    }

    /// Append a class selector (`.name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute or later part is present.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::Class, name)
    }

    /// Append an attribute selector (`[expr]`). The expression is not
    /// parsed, so `href$=".png"` is kept exactly as written.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(self, expr: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::Attribute, expr)
    }

    /// Append a pseudo-class (`:name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is present.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::PseudoClass, name)
    }

    /// Append a pseudo-element (`::name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Uniqueness`] if a pseudo-element is already present.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.with(PartKind::PseudoElement, name)
    }

    fn bucket(&self, kind: PartKind) -> &[String] {
        match kind {
            PartKind::Element => self.element.as_slice(),
            PartKind::Id => self.id.as_slice(),
            PartKind::Class => &self.classes,
            PartKind::Attribute => &self.attributes,
            PartKind::PseudoClass => &self.pseudo_classes,
            PartKind::PseudoElement => self.pseudo_element.as_slice(),
        }
    }

    /// Number of parts of `kind` in this selector.
    #[must_use]
    pub fn count(&self, kind: PartKind) -> usize {
        self.bucket(kind).len()
    }

    /// The latest kind present, if any. Further appends must be of this
    /// kind or a later one.
    #[must_use]
    pub fn last_kind(&self) -> Option<PartKind> {
        PartKind::ALL
            .into_iter()
            .rev()
            .find(|&kind| self.count(kind) > 0)
    }

    /// `true` if no part has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_kind().is_none()
    }

    /// `true` if this selector was produced by joining two selectors with a
    /// combinator.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// Formatted parts in rendering order: by kind, then by call order.
    pub fn parts(&self) -> impl Iterator<Item = (PartKind, &str)> {
        PartKind::ALL.into_iter().flat_map(move |kind| {
            self.bucket(kind)
                .iter()
                .map(move |text| (kind, text.as_str()))
        })
    }

    /// Render the selector: every formatted part concatenated with no
    /// separator.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.parts().map(|(_, text)| text).collect()
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// For a combined selector the element part contributes the summed
    /// specificity of both operands instead of one type selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let base = self.combined.unwrap_or_else(|| {
            Specificity(0, 0, saturating_count(self.count(PartKind::Element)))
        });

        base + Specificity(
            // "count the number of ID selectors in the selector (= A)"
            saturating_count(self.count(PartKind::Id)),
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            saturating_count(
                self.count(PartKind::Class)
                    + self.count(PartKind::Attribute)
                    + self.count(PartKind::PseudoClass),
            ),
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            saturating_count(self.count(PartKind::PseudoElement)),
        )
    }
}

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, text) in self.parts() {
            f.write_str(text)?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector.
#[must_use]
pub fn element(name: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::Element, name))
}

/// Start a selector with an ID selector.
#[must_use]
pub fn id(name: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::Id, name))
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(name: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::Class, name))
}

/// Start a selector with an attribute selector.
#[must_use]
pub fn attr(expr: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::Attribute, expr))
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::PseudoClass, name))
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    Selector::from_part(SelectorPart::new(PartKind::PseudoElement, name))
}
