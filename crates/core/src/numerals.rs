//! Numerals module - digit-wise and natural Klingon numbers
//!
//! Two renderings are provided:
//!
//! - **Digit-wise** ([`number_to_tokens`]): one token per decimal digit,
//!   the form used on the digital clock (`42` -> `loS cha'`).
//! - **Natural** ([`natural_number_to_tokens`]): tens/ones composition for
//!   0-99 (`42` -> `loSmaH cha'`). From 100 upwards it falls back to the
//!   digit-wise form.

use arrayvec::ArrayVec;

use crate::lexicon::{DIGIT_TOKENS, TENS_SUFFIX, TOKEN_SEPARATOR};

/// Enough room for every decimal digit of a `u64`.
const MAX_DIGITS: usize = 20;

type Digits = ArrayVec<u8, MAX_DIGITS>;

/// Klingon token for a single decimal digit.
///
/// Only 0-9 are meaningful. Larger values are reduced modulo 10 so the
/// function stays total.
#[inline]
pub fn digit_to_token(digit: u8) -> &'static str {
    debug_assert!(digit < 10, "digit_to_token called with {}", digit);
    DIGIT_TOKENS[usize::from(digit % 10)]
}

/// Decimal digits of `n`, most significant first.
fn decimal_digits(mut n: u64) -> Digits {
    let mut rev = Digits::new();
    loop {
        rev.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    rev.reverse();
    rev
}

fn push_token(out: &mut String, token: &str) {
    if !out.is_empty() {
        out.push_str(TOKEN_SEPARATOR);
    }
    out.push_str(token);
}

fn digits_to_tokens(leading_zeros: usize, digits: &[u8]) -> String {
    let mut out = String::with_capacity((leading_zeros + digits.len()) * 6);
    for _ in 0..leading_zeros {
        push_token(&mut out, digit_to_token(0));
    }
    for &d in digits {
        push_token(&mut out, digit_to_token(d));
    }
    out
}

/// Transliterate `n` digit by digit.
///
/// ```
/// use klingon_clock_core::number_to_tokens;
///
/// assert_eq!(number_to_tokens(0), "pagh");
/// assert_eq!(number_to_tokens(2024), "cha' pagh cha' loS");
/// ```
pub fn number_to_tokens(n: u64) -> String {
    digits_to_tokens(0, &decimal_digits(n))
}

/// Transliterate `n` digit by digit after zero-padding it to `width` digits.
///
/// Numbers wider than `width` are not truncated.
///
/// ```
/// use klingon_clock_core::padded_number_to_tokens;
///
/// assert_eq!(padded_number_to_tokens(5, 2), "pagh vagh");
/// assert_eq!(padded_number_to_tokens(123, 2), "wa' cha' wej");
/// ```
pub fn padded_number_to_tokens(n: u64, width: usize) -> String {
    let digits = decimal_digits(n);
    digits_to_tokens(width.saturating_sub(digits.len()), &digits)
}

/// Transliterate a pre-formatted digit string.
///
/// ASCII digits become their tokens; any other character is kept as a
/// token of its own, so `"07"` and `"7"` render differently.
pub fn digit_string_to_tokens(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 6);
    let mut buf = [0u8; 4];
    for ch in s.chars() {
        match ch.to_digit(10) {
            Some(d) => push_token(&mut out, digit_to_token(d as u8)),
            None => push_token(&mut out, ch.encode_utf8(&mut buf)),
        }
    }
    out
}

/// Transliterate `n` the way it would be spoken.
///
/// - 0-9: the digit token
/// - 10: `wa'maH`
/// - 11-19: `wa'maH` followed by the ones digit
/// - multiples of ten: `<digit>maH`
/// - other 21-99: `<digit>maH` followed by the ones digit
/// - 100 and above: digit-wise, as [`number_to_tokens`]
///
/// ```
/// use klingon_clock_core::natural_number_to_tokens;
///
/// assert_eq!(natural_number_to_tokens(7), "Soch");
/// assert_eq!(natural_number_to_tokens(13), "wa'maH wej");
/// assert_eq!(natural_number_to_tokens(40), "loSmaH");
/// assert_eq!(natural_number_to_tokens(23), "cha'maH wej");
/// assert_eq!(natural_number_to_tokens(365), "wej jav vagh");
/// ```
pub fn natural_number_to_tokens(n: u64) -> String {
    if n >= 100 {
        return number_to_tokens(n);
    }
    if n < 10 {
        return digit_to_token(n as u8).to_string();
    }

    let tens = (n / 10) as u8;
    let ones = (n % 10) as u8;

    let mut out = String::with_capacity(16);
    out.push_str(digit_to_token(tens));
    out.push_str(TENS_SUFFIX);
    if ones != 0 {
        push_token(&mut out, digit_to_token(ones));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_tokens_match_table() {
        assert_eq!(digit_to_token(0), "pagh");
        assert_eq!(digit_to_token(1), "wa'");
        assert_eq!(digit_to_token(9), "Hut");
    }

    #[test]
    fn decimal_digits_are_most_significant_first() {
        assert_eq!(decimal_digits(0).as_slice(), &[0]);
        assert_eq!(decimal_digits(907).as_slice(), &[9, 0, 7]);
        assert_eq!(decimal_digits(u64::MAX).len(), 20);
    }

    #[test]
    fn padding_wider_than_a_u64_keeps_every_zero() {
        let s = padded_number_to_tokens(1, 25);
        assert_eq!(s.split(' ').count(), 25);
        assert!(s.starts_with("pagh pagh"));
        assert!(s.ends_with("pagh wa'"));
        assert_eq!(padded_number_to_tokens(7, 3), "pagh pagh Soch");
    }

    #[test]
    fn number_to_tokens_joins_with_single_spaces() {
        assert_eq!(number_to_tokens(10), "wa' pagh");
        assert_eq!(number_to_tokens(305), "wej pagh vagh");
        assert!(!number_to_tokens(u64::MAX).contains("  "));
    }

    #[test]
    fn digit_string_keeps_leading_zeros() {
        assert_eq!(digit_string_to_tokens("05"), "pagh vagh");
        assert_eq!(digit_string_to_tokens("5"), "vagh");
        assert_eq!(digit_string_to_tokens(""), "");
    }

    #[test]
    fn digit_string_keeps_non_digits_as_tokens() {
        assert_eq!(digit_string_to_tokens("1-2"), "wa' - cha'");
    }

    #[test]
    fn natural_teens() {
        assert_eq!(natural_number_to_tokens(10), "wa'maH");
        assert_eq!(natural_number_to_tokens(11), "wa'maH wa'");
        assert_eq!(natural_number_to_tokens(19), "wa'maH Hut");
    }

    #[test]
    fn natural_tens_and_composites() {
        assert_eq!(natural_number_to_tokens(20), "cha'maH");
        assert_eq!(natural_number_to_tokens(90), "HutmaH");
        assert_eq!(natural_number_to_tokens(99), "HutmaH Hut");
    }

    #[test]
    fn natural_falls_back_to_digit_wise_from_one_hundred() {
        assert_eq!(natural_number_to_tokens(100), "wa' pagh pagh");
        assert_eq!(natural_number_to_tokens(2024), number_to_tokens(2024));
        assert_eq!(natural_number_to_tokens(u64::MAX), number_to_tokens(u64::MAX));
    }
}
