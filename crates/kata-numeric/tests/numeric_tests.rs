//! Tests for the numeric puzzles, one per documented example.

use kata_numeric::{
    FizzBuzz, RadixError, digital_root, factorial, fizz_buzz, fizz_buzz_sequence, is_luhn_valid,
    reverse_integer, sum_between, to_radix_string,
};

// ========== fizz_buzz ==========

#[test]
fn test_fizz_buzz_numbers() {
    assert_eq!(fizz_buzz(2), FizzBuzz::Number(2));
    assert_eq!(fizz_buzz(4), FizzBuzz::Number(4));
    assert_eq!(fizz_buzz(2).to_string(), "2");
}

#[test]
fn test_fizz_buzz_multiples() {
    for n in [3, 6, 9] {
        assert_eq!(fizz_buzz(n), FizzBuzz::Fizz);
    }
    for n in [5, 10, 20] {
        assert_eq!(fizz_buzz(n), FizzBuzz::Buzz);
    }
    for n in [15, 30, 60] {
        assert_eq!(fizz_buzz(n).to_string(), "FizzBuzz");
    }
}

#[test]
fn test_fizz_buzz_sequence() {
    let called: Vec<String> = fizz_buzz_sequence(1..=15).map(|c| c.to_string()).collect();
    assert_eq!(
        called,
        [
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz"
        ]
    );
}

// ========== factorial ==========

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), Some(1));
    assert_eq!(factorial(1), Some(1));
    assert_eq!(factorial(5), Some(120));
    assert_eq!(factorial(10), Some(3_628_800));
}

#[test]
fn test_factorial_overflow() {
    assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
    assert_eq!(factorial(21), None);
}

// ========== sum_between ==========

#[test]
fn test_sum_between() {
    assert_eq!(sum_between(1, 2), 3);
    assert_eq!(sum_between(5, 10), 45);
    assert_eq!(sum_between(-1, 1), 0);
}

#[test]
fn test_sum_between_reversed_bounds() {
    assert_eq!(sum_between(10, 5), 45);
    assert_eq!(sum_between(7, 7), 7);
}

// ========== digital_root ==========

#[test]
fn test_digital_root() {
    assert_eq!(digital_root(12345), 6);
    assert_eq!(digital_root(23456), 2);
    assert_eq!(digital_root(10000), 1);
    assert_eq!(digital_root(165_536), 8);
    assert_eq!(digital_root(0), 0);
}

// ========== reverse_integer ==========

#[test]
fn test_reverse_integer() {
    assert_eq!(reverse_integer(12345), Some(54321));
    assert_eq!(reverse_integer(1111), Some(1111));
    assert_eq!(reverse_integer(87354), Some(45378));
    assert_eq!(reverse_integer(34143), Some(34143));
}

#[test]
fn test_reverse_integer_edges() {
    assert_eq!(reverse_integer(0), Some(0));
    assert_eq!(reverse_integer(1200), Some(21));
    // 18446744073709551615 reversed does not fit.
    assert_eq!(reverse_integer(u64::MAX), None);
}

// ========== is_luhn_valid ==========

#[test]
fn test_luhn_valid_numbers() {
    for number in [
        79_927_398_713,
        4_012_888_888_881_881,
        5_123_456_789_012_346,
        378_282_246_310_005,
        371_449_635_398_431,
    ] {
        assert!(is_luhn_valid(number), "{number} should be valid");
    }
}

#[test]
fn test_luhn_invalid_numbers() {
    for number in [
        4_571_234_567_890_111,
        5_436_468_789_016_589,
        4_916_123_456_789_012,
    ] {
        assert!(!is_luhn_valid(number), "{number} should be invalid");
    }
}

// ========== to_radix_string ==========

#[test]
fn test_radix_examples() {
    assert_eq!(to_radix_string(1024, 2).unwrap(), "10000000000");
    assert_eq!(to_radix_string(6561, 3).unwrap(), "100000000");
    assert_eq!(to_radix_string(365, 2).unwrap(), "101101101");
    assert_eq!(to_radix_string(365, 3).unwrap(), "111112");
    assert_eq!(to_radix_string(365, 4).unwrap(), "11231");
    assert_eq!(to_radix_string(365, 10).unwrap(), "365");
}

#[test]
fn test_radix_large_bases_and_zero() {
    assert_eq!(to_radix_string(255, 16).unwrap(), "ff");
    assert_eq!(to_radix_string(35, 36).unwrap(), "z");
    assert_eq!(to_radix_string(0, 7).unwrap(), "0");
}

#[test]
fn test_radix_out_of_range() {
    assert_eq!(to_radix_string(10, 1), Err(RadixError(1)));
    assert_eq!(to_radix_string(10, 37), Err(RadixError(37)));
    assert_eq!(
        RadixError(0).to_string(),
        "radix must be between 2 and 36, got 0"
    );
}
