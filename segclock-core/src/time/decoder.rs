//! Clock register decoder
//!
//! Integer-only conversion of the tick count. Rounds to the nearest second
//! with an add-and-shift instead of a division.

use super::{TimeOfDay, HALF_SECOND_TICKS, MAX_RAW_TICKS, TICK_SHIFT};
use crate::error::DecodeError;

/// Decode a raw clock reading into a time of day
///
/// # Arguments
/// - `raw`: 1/16-second ticks since midnight, as read from the register
///
/// Readings in the last half second of the day round up to 86400 seconds and
/// wrap to 12:00:00 AM.
///
/// # Errors
/// [`DecodeError::OutOfRange`] if `raw` is negative or at least
/// [`MAX_RAW_TICKS`].
pub fn decode_time(raw: i32) -> Result<TimeOfDay, DecodeError> {
    let ticks = u32::try_from(raw).map_err(|_| DecodeError::OutOfRange)?;
    if ticks >= MAX_RAW_TICKS {
        return Err(DecodeError::OutOfRange);
    }

    let total_seconds = (ticks + HALF_SECOND_TICKS) >> TICK_SHIFT;

    Ok(TimeOfDay::from_day_secs(total_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Meridiem;
    use proptest::prelude::*;

    const fn ticks(hours: i32, minutes: i32, seconds: i32) -> i32 {
        16 * (hours * 3600 + minutes * 60 + seconds)
    }

    #[test]
    fn test_midnight() {
        let tod = decode_time(0).unwrap();
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (12, 0, 0));
        assert_eq!(tod.meridiem, Meridiem::Am);
    }

    #[test]
    fn test_noon() {
        let tod = decode_time(ticks(12, 0, 0)).unwrap();
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (12, 0, 0));
        assert_eq!(tod.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_rounding() {
        // 7/16 s rounds down, 8/16 s rounds up
        assert_eq!(decode_time(7).unwrap().day_secs, 0);
        assert_eq!(decode_time(8).unwrap().day_secs, 1);
        assert_eq!(decode_time(8).unwrap().seconds, 1);
        assert_eq!(decode_time(ticks(0, 0, 5) + 15).unwrap().seconds, 6);
    }

    #[test]
    fn test_morning() {
        let tod = decode_time(ticks(10, 30, 15)).unwrap();
        assert_eq!(tod.day_secs, 37_815);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (10, 30, 15));
        assert_eq!(tod.meridiem, Meridiem::Am);
    }

    #[test]
    fn test_afternoon() {
        let tod = decode_time(ticks(13, 42, 7)).unwrap();
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (1, 42, 7));
        assert_eq!(tod.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_last_half_second_wraps_to_midnight() {
        let last = MAX_RAW_TICKS as i32 - 1;
        let tod = decode_time(last).unwrap();
        assert_eq!(tod.day_secs, 0);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (12, 0, 0));
        assert_eq!(tod.meridiem, Meridiem::Am);

        // Just below the rounding boundary stays on the last second
        let tod = decode_time(MAX_RAW_TICKS as i32 - 9).unwrap();
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (11, 59, 59));
        assert_eq!(tod.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(decode_time(-1), Err(DecodeError::OutOfRange));
        assert_eq!(decode_time(i32::MIN), Err(DecodeError::OutOfRange));
        assert_eq!(decode_time(MAX_RAW_TICKS as i32), Err(DecodeError::OutOfRange));
        assert_eq!(decode_time(i32::MAX), Err(DecodeError::OutOfRange));
    }

    proptest! {
        #[test]
        fn prop_valid_readings_decode_in_range(raw in 0..MAX_RAW_TICKS as i32) {
            let tod = decode_time(raw).unwrap();
            prop_assert!((1..=12).contains(&tod.hours));
            prop_assert!(tod.minutes < 60);
            prop_assert!(tod.seconds < 60);
            prop_assert!(tod.day_secs < 86_400);
            prop_assert_eq!(tod.validate(), Ok(()));
        }

        #[test]
        fn prop_negative_readings_rejected(raw in i32::MIN..0) {
            prop_assert_eq!(decode_time(raw), Err(DecodeError::OutOfRange));
        }

        #[test]
        fn prop_past_end_of_day_rejected(raw in (MAX_RAW_TICKS as i32)..=i32::MAX) {
            prop_assert_eq!(decode_time(raw), Err(DecodeError::OutOfRange));
        }

        #[test]
        fn prop_meridiem_follows_half_day(raw in 0..MAX_RAW_TICKS as i32 - 8) {
            let tod = decode_time(raw).unwrap();
            let expected = if tod.day_secs < 12 * 3600 { Meridiem::Am } else { Meridiem::Pm };
            prop_assert_eq!(tod.meridiem, expected);
        }
    }
}
