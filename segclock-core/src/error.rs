//! Error types for each pipeline stage
//!
//! Every error is recoverable by the caller. A failed stage never writes
//! partial output.

use core::fmt;

/// Raw clock reading could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Reading is negative or at/after one day's worth of ticks
    OutOfRange,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OutOfRange => f.write_str("clock reading out of range"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// A field of [`TimeOfDay`](crate::time::TimeOfDay)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
    Meridiem,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
            TimeField::Meridiem => "meridiem",
        };
        f.write_str(name)
    }
}

/// Time of day could not be encoded for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Field outside its documented range
    InvalidField(TimeField),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidField(field) => write!(f, "invalid {} field", field),
        }
    }
}

impl core::error::Error for EncodeError {}

/// Display update failed; the display register was not written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError {
    /// Clock register held an invalid reading
    Decode(DecodeError),
    /// Decoded time was rejected by the encoder
    Encode(EncodeError),
}

impl From<DecodeError> for UpdateError {
    fn from(err: DecodeError) -> Self {
        UpdateError::Decode(err)
    }
}

impl From<EncodeError> for UpdateError {
    fn from(err: EncodeError) -> Self {
        UpdateError::Encode(err)
    }
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Decode(err) => write!(f, "decode failed: {}", err),
            UpdateError::Encode(err) => write!(f, "encode failed: {}", err),
        }
    }
}

impl core::error::Error for UpdateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            UpdateError::Decode(err) => Some(err),
            UpdateError::Encode(err) => Some(err),
        }
    }
}

/// Custom display layout rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A lane or flag extends past bit 31
    OutOfRegister,
    /// Two lanes or flags share a bit
    Overlap,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::OutOfRegister => f.write_str("layout does not fit in a 32-bit register"),
            LayoutError::Overlap => f.write_str("layout lanes overlap"),
        }
    }
}

impl core::error::Error for LayoutError {}
