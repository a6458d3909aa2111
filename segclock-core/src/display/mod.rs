//! Display encoding
//!
//! Packs a time of day into the 7-segment display register.

pub mod bits;
pub mod encoder;
pub mod segments;

pub use bits::DisplayBits;
pub use encoder::{encode_display, encode_display_with};
pub use segments::{digit_pattern, pattern_digit, DIGIT_PATTERNS};
