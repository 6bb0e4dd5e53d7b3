//! Fluent CSS selector builder for the kata exercises.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Ordering and uniqueness validation at the point of each append
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors into a new selector
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Example
//!
//! ```
//! use kata_selector::{combine, element, id};
//!
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let list = combine(&id("nav"), ">", &element("li"));
//! assert_eq!(list.stringify(), "#nav > li");
//! # Ok(())
//! # }
//! ```

/// Combinator tokens and selector combination per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised by out-of-order or duplicate appends.
pub mod error;
/// Selector part kinds and their textual forms.
pub mod part;
/// The selector value and its entry points.
pub mod selector;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

pub use combinator::{Combinator, combine, combine_with};
pub use error::SelectorError;
pub use part::{PartKind, SelectorPart};
pub use selector::{Selector, attr, class, element, id, pseudo_class, pseudo_element};
pub use specificity::Specificity;
