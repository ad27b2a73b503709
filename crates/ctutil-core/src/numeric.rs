//! Strict string-to-integer conversion.
//!
//! Every parser accepts the same grammar: optional whitespace, an optional
//! sign (signed targets only), one or more ASCII digits, optional
//! whitespace, end of input. Anything else is
//! [`CtutilError::MalformedInput`]. A well-formed numeral that does not fit
//! the target is [`CtutilError::OutOfRange`]. The range check happens while
//! digits are accumulated, so no value ever wraps.

use libc::{c_long, c_longlong};

use ctutil_common::error::{CtutilError, Result};

/// Integer types the strict grammar can be instantiated for.
pub trait StrictInteger: Copy {
    /// Whether a leading `+` or `-` is accepted.
    const SIGNED: bool;
    /// Type name reported in [`CtutilError::OutOfRange`].
    const NAME: &'static str;
    /// Additive identity, the starting accumulator.
    const ZERO: Self;

    /// Returns `self * 10 + digit`, or `None` on overflow.
    fn push_digit(self, digit: u8) -> Option<Self>;

    /// Returns `self * 10 - digit`, or `None` on overflow.
    fn push_negative_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_strict_integer {
    ($($ty:ty => $signed:expr),* $(,)?) => {$(
        impl StrictInteger for $ty {
            const SIGNED: bool = $signed;
            const NAME: &'static str = stringify!($ty);
            const ZERO: Self = 0;

            fn push_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_add(Self::from(digit))
            }

            fn push_negative_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_sub(Self::from(digit))
            }
        }
    )*};
}

impl_strict_integer! {
    u32 => false,
    u64 => false,
    i32 => true,
    i64 => true,
}

/// `isspace` in the C locale.
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).copied().is_some_and(is_space) {
        at += 1;
    }
    at
}

/// Parses `text` into `T` under the strict numeral grammar.
///
/// # Errors
///
/// Returns [`CtutilError::MalformedInput`] if `text` is not a numeral, or
/// [`CtutilError::OutOfRange`] if it does not fit in `T`.
pub fn parse_strict<T: StrictInteger>(text: &str) -> Result<T> {
    let malformed = || CtutilError::MalformedInput {
        input: text.to_owned(),
    };
    let bytes = text.as_bytes();

    let mut at = skip_space(bytes, 0);
    let negative = match bytes.get(at) {
        Some(b'+' | b'-') if !T::SIGNED => return Err(malformed()),
        Some(b'-') => {
            at += 1;
            true
        }
        Some(b'+') => {
            at += 1;
            false
        }
        _ => false,
    };

    let start = at;
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    let digits = &bytes[start..at];
    if digits.is_empty() || skip_space(bytes, at) != bytes.len() {
        return Err(malformed());
    }

    digits.iter().try_fold(T::ZERO, |acc, &b| {
        let digit = b - b'0';
        let next = if negative {
            acc.push_negative_digit(digit)
        } else {
            acc.push_digit(digit)
        };
        next.ok_or_else(|| CtutilError::OutOfRange {
            input: text.to_owned(),
            target: T::NAME,
        })
    })
}

/// Parses an unsigned 32-bit value. A sign of either kind is malformed.
///
/// # Errors
///
/// See [`parse_strict`].
pub fn parse_u32(text: &str) -> Result<u32> {
    parse_strict(text)
}

/// Parses a signed 32-bit value.
///
/// # Errors
///
/// See [`parse_strict`].
pub fn parse_i32(text: &str) -> Result<i32> {
    parse_strict(text)
}

/// Parses a platform `long`, the signed wide variant.
///
/// # Errors
///
/// See [`parse_strict`].
pub fn parse_long(text: &str) -> Result<c_long> {
    parse_strict(text)
}

/// Parses a platform `long long`.
///
/// # Errors
///
/// See [`parse_strict`].
pub fn parse_long_long(text: &str) -> Result<c_longlong> {
    parse_strict(text)
}

/// Parses an unsigned 64-bit value. A sign of either kind is malformed.
///
/// # Errors
///
/// See [`parse_strict`].
pub fn parse_u64(text: &str) -> Result<u64> {
    parse_strict(text)
}
