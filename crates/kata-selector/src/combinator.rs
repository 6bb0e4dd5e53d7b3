//! Joining built selectors with combinators.
//!
//! The joined text is always `left + " " + token + " " + right`, including
//! for the descendant combinator, which therefore renders with three spaces
//! between its operands.

use kata_common::warning::warn_once;

use crate::selector::Selector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// Recognize one of the four combinator tokens. The token must match
    /// exactly; `" > "` is not `">"`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }

    /// The token this combinator is written as.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

/// Join two selectors with a combinator token.
///
/// The result is a new selector whose single element part is the joined
/// text, so it can be extended, combined again, or rendered. Tokens other
/// than ` `, `+`, `~` and `>` are accepted and written verbatim, with a
/// one-time warning.
#[must_use]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    if Combinator::from_token(combinator).is_none() {
        warn_once(
            "Selector",
            &format!("unrecognized combinator {combinator:?} passed through verbatim"),
        );
    }
    join(left, combinator, right)
}

/// [`combine`] with a typed combinator.
#[must_use]
pub fn combine_with(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    join(left, combinator.as_token(), right)
}

fn join(left: &Selector, token: &str, right: &Selector) -> Selector {
    Selector::from_combined(
        format!("{left} {token} {right}"),
        left.specificity() + right.specificity(),
    )
}
