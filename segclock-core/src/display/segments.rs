//! 7-segment digit patterns
//!
//! Segment bit order, as wired on the clock panel:
//!
//! ```text
//!    0
//!   ---
//! 1|   |2
//!   -3-
//! 4|   |5
//!   ---
//!    6
//! ```

/// Top segment
pub const SEG_TOP: u8 = 1 << 0;
/// Upper-left segment
pub const SEG_UPPER_LEFT: u8 = 1 << 1;
/// Upper-right segment
pub const SEG_UPPER_RIGHT: u8 = 1 << 2;
/// Middle segment
pub const SEG_MIDDLE: u8 = 1 << 3;
/// Lower-left segment
pub const SEG_LOWER_LEFT: u8 = 1 << 4;
/// Lower-right segment
pub const SEG_LOWER_RIGHT: u8 = 1 << 5;
/// Bottom segment
pub const SEG_BOTTOM: u8 = 1 << 6;

/// Segment patterns for digits 0-9
pub const DIGIT_PATTERNS: [u8; 10] = [
    0b1110111, // 0
    0b0100100, // 1
    0b1011101, // 2
    0b1101101, // 3
    0b0101110, // 4
    0b1101011, // 5
    0b1111011, // 6
    0b0100101, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// Segment pattern for a single digit, or `None` above 9
pub fn digit_pattern(digit: u8) -> Option<u8> {
    DIGIT_PATTERNS.get(usize::from(digit)).copied()
}

/// Digit shown by a segment pattern, or `None` if it is not a digit
pub fn pattern_digit(pattern: u8) -> Option<u8> {
    DIGIT_PATTERNS
        .iter()
        .position(|&p| p == pattern)
        .map(|digit| digit as u8)
}
