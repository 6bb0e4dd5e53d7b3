//! Positional notation in radix 2 through 36.

use thiserror::Error;

/// Digits used for radixes up to 36.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A radix outside `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("radix must be between 2 and 36, got {0}")]
pub struct RadixError(pub u32);

/// Write `n` in base `radix` with lowercase digits.
///
/// | n | radix | result |
/// |---|---|---|
/// | 1024 | 2 | `10000000000` |
/// | 6561 | 3 | `100000000` |
/// | 365 | 2 | `101101101` |
/// | 365 | 3 | `111112` |
/// | 365 | 4 | `11231` |
/// | 365 | 10 | `365` |
///
/// # Errors
///
/// Returns [`RadixError`] if `radix` is not in `2..=36`.
pub fn to_radix_string(mut n: u64, radix: u32) -> Result<String, RadixError> {
    if !(2..=36).contains(&radix) {
        return Err(RadixError(radix));
    }
    let base = u64::from(radix);

    let mut out = Vec::new();
    loop {
        // n % base < 36, so the index is always in range.
        out.push(DIGITS[usize::try_from(n % base).unwrap_or_default()]);
        n /= base;
        if n == 0 {
            break;
        }
    }
    out.reverse();

    Ok(out.into_iter().map(char::from).collect())
}
