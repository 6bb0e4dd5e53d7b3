//! Counting puzzles.

use std::fmt;
use std::ops::RangeInclusive;

/// The word (or number) called out for a position in the `FizzBuzz` game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Multiple of 3 only.
    Fizz,
    /// Multiple of 5 only.
    Buzz,
    /// Multiple of both 3 and 5.
    FizzBuzz,
    /// Neither; the number itself is called out.
    Number(u64),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Classify `n` for the `FizzBuzz` game.
///
/// | n | result |
/// |---|---|
/// | 2, 4 | the number |
/// | 3, 6, 9 | `Fizz` |
/// | 5, 10, 20 | `Buzz` |
/// | 15, 30, 60 | `FizzBuzz` |
#[must_use]
pub const fn fizz_buzz(n: u64) -> FizzBuzz {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(n),
    }
}

/// [`fizz_buzz`] over a range, as called out in a game.
pub fn fizz_buzz_sequence(range: RangeInclusive<u64>) -> impl Iterator<Item = FizzBuzz> {
    range.map(fizz_buzz)
}

/// `n!`, or `None` when it does not fit in a `u64` (`n > 20`).
///
/// `0! = 1`, `5! = 120`, `10! = 3628800`.
#[must_use]
pub fn factorial(n: u32) -> Option<u64> {
    (2..=u64::from(n)).try_fold(1u64, u64::checked_mul)
}

/// Sum of every integer between `a` and `b` inclusive. The bounds may be
/// given in either order. Saturates at the `i64` bounds.
///
/// `(1, 2) -> 3`, `(5, 10) -> 45`, `(-1, 1) -> 0`.
#[must_use]
pub fn sum_between(a: i64, b: i64) -> i64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    // Arithmetic series in i128 so the intermediate product cannot overflow.
    let (low, high) = (i128::from(low), i128::from(high));
    let sum = (low + high) * (high - low + 1) / 2;
    i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX })
}
