extern crate alloc;
use alloc::{string::String, vec::Vec};

use thiserror::Error;

// Bootstring parameters for Punycode, RFC 3492 section 5.
const BASE: i32 = 36;
const T_MIN: i32 = 1;
const T_MAX: i32 = 26;
const SKEW: i32 = 38;
const DAMP: i32 = 700;
const INITIAL_BIAS: i32 = 72;
const INITIAL_N: i32 = 128;
const DELIMITER: u8 = b'-';

type Utf32 = Vec<char>;

/// Decodes Punycode to Unicode.
///
/// `input` is the label body without the `xn--` prefix. Everything before the last `-` is copied
/// through as-is and must be ASCII. Digits are accepted in either case and the output is never
/// case folded.
///
/// All arithmetic is done in `i32`, so inputs that would need wider integers are rejected with
/// [`PunyDecodeError::Overflow`] rather than silently wrapping.
///
/// # Errors
///
/// - [`PunyDecodeError::Overflow`] if the variable-length integers do not fit in an `i32`, or a
///   byte in the extended section is not a base-36 digit.
/// - [`PunyDecodeError::NotBasic`] if the basic section (before the last `-`) is not ASCII.
/// - [`PunyDecodeError::InvalidInput`] if `input` ends in the middle of a variable-length integer.
///
/// # Examples
///
/// ```
/// # use puny::punycode;
/// assert_eq!(punycode::decode("bcher-kva"), Ok("bücher".to_string()));
/// assert_eq!(punycode::decode("UB4"), Err(punycode::PunyDecodeError::InvalidInput));
/// ```
pub fn decode(input: &str) -> Result<String, PunyDecodeError> {
    let bytes = input.as_bytes();

    let (basic, encoded) = bytes
        .iter()
        .rposition(|&b| b == DELIMITER)
        .map_or((&bytes[..0], bytes), |d| (&bytes[..d], &bytes[d + 1..]));

    if !basic.is_ascii() {
        return Err(PunyDecodeError::NotBasic);
    }

    let mut output = Utf32::with_capacity(input.len());
    output.extend(basic.iter().copied().map(char::from));

    let mut cp = INITIAL_N;
    let mut i: i32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut encoded = encoded.iter().copied();

    while let Some(mut byte) = encoded.next() {
        let old_i = i;
        let mut weight: i32 = 1;

        for k in (BASE..).step_by(BASE as usize) {
            let digit = decode_digit(byte).ok_or(PunyDecodeError::Overflow)?;

            i = digit
                .checked_mul(weight)
                .and_then(|product| i.checked_add(product))
                .ok_or(PunyDecodeError::Overflow)?;

            let t = clamped_sub(k, bias);
            debug_assert!((T_MIN..=T_MAX).contains(&t));

            if digit < t {
                break;
            }

            byte = encoded.next().ok_or(PunyDecodeError::InvalidInput)?;

            weight = weight
                .checked_mul(BASE - t)
                .ok_or(PunyDecodeError::Overflow)?;
        }

        let out = i32::try_from(output.len() + 1).map_err(|_| PunyDecodeError::Overflow)?;
        bias = adapt(i - old_i, out, old_i == 0);
        cp = cp.checked_add(i / out).ok_or(PunyDecodeError::Overflow)?;
        i %= out;

        // Surrogates and values past U+10FFFF are not chars; they decode to U+FFFD.
        let c = u32::try_from(cp)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        // `i` is in 0..out, so it is never negative.
        #[expect(clippy::cast_sign_loss)]
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output.into_iter().collect::<String>())
}

/// Errors from decoding a single Punycode label.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PunyDecodeError {
    #[error("overflow: input needs wider integers to process")]
    Overflow,
    #[error("illegal input >= 0x80 (not a basic code point)")]
    NotBasic,
    #[error("invalid input")]
    InvalidInput,
}

#[must_use]
const fn adapt(mut delta: i32, num_points: i32, first_time: bool) -> i32 {
    debug_assert!(num_points > 0);

    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > (BASE - T_MIN) * T_MAX / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

/// `k - bias` clamped to `T_MIN..=T_MAX`.
#[must_use]
const fn clamped_sub(k: i32, bias: i32) -> i32 {
    let t = k - bias;
    if t < T_MIN {
        T_MIN
    } else if t > T_MAX {
        T_MAX
    } else {
        t
    }
}

#[must_use]
const fn decode_digit(b: u8) -> Option<i32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as i32 + 26),
        b'A'..=b'Z' => Some((b - b'A') as i32),
        b'a'..=b'z' => Some((b - b'a') as i32),
        _ => None,
    }
}
