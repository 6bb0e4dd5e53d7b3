//! Puzzles over the decimal digits of a number.

/// Decimal digits of `n`, least significant first. Zero has no digits.
fn digits(mut n: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        (n > 0).then(|| {
            let digit = n % 10;
            n /= 10;
            digit
        })
    })
}

/// Repeatedly sum the digits of `n` until a single digit remains.
///
/// | n | root |
/// |---|---|
/// | 12345 | 6 (1+2+3+4+5 = 15, 1+5 = 6) |
/// | 23456 | 2 |
/// | 10000 | 1 |
/// | 165536 | 8 |
#[must_use]
pub fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        n = digits(n).sum();
    }
    n
}

/// The decimal digits of `n` in reverse order, or `None` when the result
/// does not fit in a `u64`. Trailing zeros of `n` become leading zeros and
/// are dropped: `1200 -> 21`.
///
/// `12345 -> 54321`, `87354 -> 45378`, `34143 -> 34143`.
#[must_use]
pub fn reverse_integer(n: u64) -> Option<u64> {
    digits(n).try_fold(0u64, |acc, digit| acc.checked_mul(10)?.checked_add(digit))
}

/// [Luhn algorithm](https://en.wikipedia.org/wiki/Luhn_algorithm)
///
/// Starting from the rightmost (check) digit, every second digit is
/// doubled, subtracting 9 when the result exceeds 9; the number is valid
/// when the total is a multiple of 10.
///
/// Valid: `79927398713`, `4012888888881881`, `5123456789012346`,
/// `378282246310005`, `371449635398431`.
/// Invalid: `4571234567890111`, `5436468789016589`, `4916123456789012`.
#[must_use]
pub fn is_luhn_valid(number: u64) -> bool {
    let sum: u64 = digits(number)
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}
