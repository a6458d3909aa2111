//! Time decoding
//!
//! The clock register counts 1/16-second ticks since midnight. This module
//! turns that count into a 12-hour [`TimeOfDay`].

pub mod decoder;
pub mod tod;

pub use decoder::decode_time;
pub use tod::{Meridiem, TimeOfDay, LABEL_LEN};

/// Clock register ticks per second
pub const TICKS_PER_SECOND: u32 = 16;

/// Right shift that divides ticks down to seconds
pub const TICK_SHIFT: u32 = 4;

/// Half a second in ticks, added before the shift to round half up
pub const HALF_SECOND_TICKS: u32 = TICKS_PER_SECOND / 2;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Exclusive upper bound of a valid clock reading
pub const MAX_RAW_TICKS: u32 = TICKS_PER_SECOND * SECONDS_PER_DAY;
