//! Time of day record

use core::fmt::{self, Write};

use heapless::String;

use super::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{EncodeError, TimeField};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of [`TimeOfDay::label`]
pub const LABEL_LEN: usize = 16;

/// AM/PM designation
///
/// Discriminants are the register-level codes (1 = AM, 2 = PM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Meridiem {
    Am = 1,
    Pm = 2,
}

impl Meridiem {
    /// Get the register-level code
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Meridiem {
    type Error = EncodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Meridiem::Am),
            2 => Ok(Meridiem::Pm),
            _ => Err(EncodeError::InvalidField(TimeField::Meridiem)),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// Time of day in 12-hour format
///
/// Records produced by [`decode_time`](super::decode_time) and
/// [`TimeOfDay::from_day_secs`] always pass [`TimeOfDay::validate`]. Fields are
/// public so callers can build records by hand, which is why the encoder
/// validates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    /// Whole seconds since midnight (0-86399)
    pub day_secs: u32,
    /// Hour (1-12)
    pub hours: u8,
    /// Minute (0-59)
    pub minutes: u8,
    /// Second (0-59)
    pub seconds: u8,
    /// AM or PM
    pub meridiem: Meridiem,
}

impl TimeOfDay {
    /// Break a second-of-day count into a 12-hour time
    ///
    /// The count is taken modulo one day, so 86400 is midnight again.
    pub fn from_day_secs(day_secs: u32) -> Self {
        let day_secs = day_secs % SECONDS_PER_DAY;

        let hours = day_secs / SECONDS_PER_HOUR;
        let remaining = day_secs % SECONDS_PER_HOUR;

        // Midnight and noon both read 12
        let mut display_hours = hours % 12;
        if display_hours == 0 {
            display_hours = 12;
        }

        let meridiem = if hours < 12 { Meridiem::Am } else { Meridiem::Pm };

        Self {
            day_secs,
            hours: display_hours as u8,
            minutes: (remaining / SECONDS_PER_MINUTE) as u8,
            seconds: (remaining % SECONDS_PER_MINUTE) as u8,
            meridiem,
        }
    }

    /// Check every displayed field against its range
    ///
    /// Returns the first field that is out of range. `day_secs` is an
    /// intermediate value and is not checked.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if !(1..=12).contains(&self.hours) {
            return Err(EncodeError::InvalidField(TimeField::Hours));
        }
        if self.minutes >= 60 {
            return Err(EncodeError::InvalidField(TimeField::Minutes));
        }
        if self.seconds >= 60 {
            return Err(EncodeError::InvalidField(TimeField::Seconds));
        }
        Ok(())
    }

    /// Format as `h:mm:ss AM` without allocating
    pub fn label(&self) -> String<LABEL_LEN> {
        let mut label = String::new();
        // Longest possible output is "255:255:255 PM", which fits
        let written = write!(label, "{}", self);
        debug_assert!(written.is_ok());
        label
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02} {}",
            self.hours, self.minutes, self.seconds, self.meridiem
        )
    }
}
