//! Time of day to display register encoder
//!
//! Digits are looked up in [`DIGIT_PATTERNS`] and OR-ed into their lanes.
//! The hours-tens lane stays dark for hours 1-9.

use super::segments::DIGIT_PATTERNS;
use super::DisplayBits;
use crate::config::{DisplayLayout, Lane};
use crate::error::EncodeError;
use crate::time::TimeOfDay;

/// Encode a time of day with the standard panel layout
///
/// Seconds are checked but not shown.
///
/// # Errors
/// [`EncodeError::InvalidField`] naming the first out-of-range field.
pub fn encode_display(tod: &TimeOfDay) -> Result<DisplayBits, EncodeError> {
    encode_display_with(tod, &DisplayLayout::STANDARD)
}

/// Encode a time of day with a custom panel layout
///
/// # Errors
/// [`EncodeError::InvalidField`] naming the first out-of-range field.
pub fn encode_display_with(
    tod: &TimeOfDay,
    layout: &DisplayLayout,
) -> Result<DisplayBits, EncodeError> {
    tod.validate()?;

    let hours_tens = tod.hours / 10;
    let hours_ones = tod.hours % 10;
    let minutes_tens = tod.minutes / 10;
    let minutes_ones = tod.minutes % 10;

    // Validated fields keep every digit below 10
    let mut bits = layout.place(Lane::MinutesOnes, DIGIT_PATTERNS[minutes_ones as usize])
        | layout.place(Lane::MinutesTens, DIGIT_PATTERNS[minutes_tens as usize])
        | layout.place(Lane::HoursOnes, DIGIT_PATTERNS[hours_ones as usize]);

    if hours_tens > 0 {
        bits |= layout.place(Lane::HoursTens, DIGIT_PATTERNS[hours_tens as usize]);
    }

    bits |= layout.flag_mask(tod.meridiem);

    Ok(DisplayBits::from_bits(bits))
}
