//! Packed display register value

use crate::config::{DisplayLayout, Lane};
use crate::display::segments::pattern_digit;
use crate::time::Meridiem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display register contents
///
/// Four 7-bit digit lanes plus the AM and PM flag bits, laid out by
/// [`DisplayLayout::STANDARD`] unless built with a custom layout. The
/// accessors on this type assume the standard layout; use the
/// [`DisplayLayout`] methods for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DisplayBits(u32);

impl DisplayBits {
    /// Wrap a raw register value
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw register value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Segment pattern in a lane
    pub fn pattern(self, lane: Lane) -> u8 {
        DisplayLayout::STANDARD.extract(self.0, lane)
    }

    /// Digit shown in a lane
    ///
    /// `None` for a blank lane or a pattern that is not a digit.
    pub fn digit(self, lane: Lane) -> Option<u8> {
        pattern_digit(self.pattern(lane))
    }

    /// Meridiem shown by the flag bits
    pub fn meridiem(self) -> Option<Meridiem> {
        DisplayLayout::STANDARD.read_meridiem(self.0)
    }
}

impl From<DisplayBits> for u32 {
    fn from(bits: DisplayBits) -> Self {
        bits.0
    }
}
