//! Input boundary: turns typed text into a validated [`Guess`].
//!
//! Parsing is lenient the way a browser number field is: surrounding
//! whitespace is ignored and trailing non-digits after a leading integer are
//! dropped (`"12abc"` reads as 12, `"3.7"` as 3). Anything without a leading
//! integer is rejected.

use super::types::{Guess, MaxRange};
use tracing::{debug, instrument};

/// Why typed text could not be submitted as a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a number to guess")]
    Empty,

    /// The text does not start with an integer.
    #[display("Please enter a valid number between 1 and {}", max)]
    NotANumber {
        /// Upper bound of the current range.
        max: u32,
    },

    /// The number is outside `[1, max]`.
    #[display("Please enter a valid number between 1 and {}", max)]
    OutOfRange {
        /// The parsed number.
        value: i64,
        /// Upper bound of the current range.
        max: u32,
    },
}

impl std::error::Error for InputError {}

/// Parses and range-checks typed text.
#[instrument]
pub fn parse_guess(text: &str, range: MaxRange) -> Result<Guess, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let max = range.get();
    let value = leading_integer(trimmed).ok_or(InputError::NotANumber { max })?;

    let guess = u32::try_from(value)
        .ok()
        .and_then(|v| Guess::new(v, range).ok())
        .ok_or(InputError::OutOfRange { value, max })?;

    debug!(guess = guess.value(), "Input accepted");
    Ok(guess)
}

/// Reads an optionally signed run of leading decimal digits.
///
/// Saturates instead of overflowing; a saturated value is out of any range.
fn leading_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let run: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if run.is_empty() {
        return None;
    }

    let magnitude = run
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}
