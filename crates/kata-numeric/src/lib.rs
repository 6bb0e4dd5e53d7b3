//! Numeric puzzles for the kata exercises.
//!
//! Every function here is a pure function of its arguments. Results that
//! can overflow a `u64` are returned as `Option`; inputs outside a
//! function's domain are rejected with a typed error.

/// Digit-wise puzzles: digital root, integer reversal, Luhn checksum.
pub mod digits;
/// `FizzBuzz`, factorial and inclusive range sums.
pub mod puzzles;
/// Positional notation in an arbitrary radix.
pub mod radix;

pub use digits::{digital_root, is_luhn_valid, reverse_integer};
pub use puzzles::{FizzBuzz, factorial, fizz_buzz, fizz_buzz_sequence, sum_between};
pub use radix::{RadixError, to_radix_string};
