//! Decimal numeral conversion.
//!
//! Accepted grammar, for both directions:
//!
//! ```text
//! numeral := '-'? digits? ('.' digits?)?     (at least one digit overall)
//! ```
//!
//! One leading `-` is a sign. A second sign, a sign anywhere else, a second
//! `.` or any other byte is rejected with the offset of the offending byte.
//! No exponents, no `+`, no digit separators.
//!
//! Conversion accumulates the digits into an integer mantissa and applies the
//! positional weight of the fractional part once. When the mantissa fits in
//! 53 bits and there are at most 22 fractional digits both operands are exact
//! in an `f64`, so the single division is correctly rounded. Longer numerals
//! go through the standard library's correctly rounded parser instead.

use thiserror::Error;

/// Why a numeral was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    /// Nothing to convert.
    #[error("empty numeral")]
    Empty,
    /// A sign and/or point but not a single digit.
    #[error("numeral has no digits")]
    NoDigits,
    /// A `-` that is not the very first byte.
    #[error("unexpected sign at offset {offset}")]
    MisplacedSign { offset: usize },
    /// A second `.`.
    #[error("second decimal point at offset {offset}")]
    ExtraDecimalPoint { offset: usize },
    /// A byte that is neither a digit, the sign nor (for floats) a point.
    #[error("invalid byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
    /// The integer does not fit in an `i64`.
    #[error("integer does not fit in 64 bits")]
    Overflow,
}

/// Largest mantissa every value up to which an `f64` represents exactly.
const MAX_EXACT_MANTISSA: u64 = 1 << 53;

/// Powers of ten that are exact in an `f64`.
const EXACT_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// A syntactically valid numeral, split into its parts.
struct Numeral<'a> {
    negative: bool,
    /// The numeral without its sign.
    body: &'a [u8],
    /// Number of digits after the point.
    fraction_digits: usize,
}

impl<'a> Numeral<'a> {
    fn scan(text: &'a [u8], allow_point: bool) -> Result<Self, NumberError> {
        if text.is_empty() {
            return Err(NumberError::Empty);
        }
        let negative = text[0] == b'-';
        let sign_len = usize::from(negative);
        let body = &text[sign_len..];

        let mut point = None;
        let mut digits = 0;
        for (i, &byte) in body.iter().enumerate() {
            let offset = i + sign_len;
            match byte {
                b'0'..=b'9' => digits += 1,
                b'.' if allow_point => {
                    if point.is_some() {
                        return Err(NumberError::ExtraDecimalPoint { offset });
                    }
                    point = Some(i);
                }
                b'-' => return Err(NumberError::MisplacedSign { offset }),
                _ => return Err(NumberError::InvalidByte { byte, offset }),
            }
        }
        if digits == 0 {
            return Err(NumberError::NoDigits);
        }
        let fraction_digits = point.map_or(0, |p| body.len() - p - 1);
        Ok(Self {
            negative,
            body,
            fraction_digits,
        })
    }

    /// The digits as an integer, or `None` if they overflow `u64`.
    fn mantissa(&self) -> Option<u64> {
        self.body
            .iter()
            .filter(|b| b.is_ascii_digit())
            .try_fold(0u64, |acc, &b| {
                acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
            })
    }

    fn apply_sign(&self, magnitude: f64) -> f64 {
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Convert a decimal numeral to `f64`.
///
/// ```
/// use quill_lexer::number::parse_float;
///
/// assert_eq!(parse_float(b"3.5"), Ok(3.5));
/// assert_eq!(parse_float(b"-0.25"), Ok(-0.25));
/// assert_eq!(parse_float(b"7."), Ok(7.0));
/// assert!(parse_float(b"1.2.3").is_err());
/// ```
pub fn parse_float(text: &[u8]) -> Result<f64, NumberError> {
    let numeral = Numeral::scan(text, true)?;
    if let Some(mantissa) = numeral.mantissa() {
        if mantissa <= MAX_EXACT_MANTISSA {
            if let Some(&weight) = EXACT_POWERS_OF_TEN.get(numeral.fraction_digits) {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "mantissa is at most 2^53 and therefore exact"
                )]
                let magnitude = mantissa as f64 / weight;
                return Ok(numeral.apply_sign(magnitude));
            }
        }
    }
    // The body is ASCII digits and at most one point, which `f64::from_str`
    // accepts (including a leading or trailing point).
    let magnitude = std::str::from_utf8(numeral.body)
        .ok()
        .and_then(|body| body.parse::<f64>().ok())
        .ok_or(NumberError::NoDigits)?;
    Ok(numeral.apply_sign(magnitude))
}

/// Convert a decimal integer numeral to `i64`.
///
/// ```
/// use quill_lexer::number::{parse_int, NumberError};
///
/// assert_eq!(parse_int(b"-42"), Ok(-42));
/// assert_eq!(parse_int(b"--42"), Err(NumberError::MisplacedSign { offset: 1 }));
/// ```
pub fn parse_int(text: &[u8]) -> Result<i64, NumberError> {
    let numeral = Numeral::scan(text, false)?;
    let magnitude = numeral.mantissa().ok_or(NumberError::Overflow)?;
    let value = if numeral.negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or(NumberError::Overflow)
}

/// Render `value` as the shortest decimal text that converts back to the
/// same `f64`.
///
/// Integral values carry no fractional part (`3`, not `3.0`), negative values
/// a leading `-`, and nothing uses exponent notation. Both zeroes render as
/// `0`. Non-finite values render as `NaN`, `inf` and `-inf`, which
/// [`parse_float`] does not accept.
pub fn format_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests;
