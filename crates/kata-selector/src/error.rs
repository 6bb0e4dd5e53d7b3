//! Selector builder errors.
//!
//! Both variants are raised at the offending append, never deferred to
//! rendering. `Selector::push` leaves the selector in its last valid state;
//! the consuming chain methods drop it with the error.

use thiserror::Error;

use crate::part::PartKind;

/// An append rejected by the builder's cardinality or ordering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended to a selector that
    /// already holds one.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (duplicate {kind})"
    )]
    Uniqueness {
        /// The kind that was appended twice.
        kind: PartKind,
    },

    /// A part was appended after a part of a strictly later kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    Order {
        /// The kind that was appended.
        kind: PartKind,
        /// The latest kind already present.
        after: PartKind,
    },
}
