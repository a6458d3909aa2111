//! Display register layout
//!
//! Where each digit lane and AM/PM flag sits in the 32-bit display register.
//! A `DisplayLayout` can only be built through [`DisplayLayout::new`] (or
//! deserialized through the same checks), so every value in circulation is
//! known to fit the register without overlap.

use crate::error::LayoutError;
use crate::time::Meridiem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of one digit lane in bits
pub const LANE_WIDTH: u8 = 7;

/// Mask covering one lane at offset 0
pub const LANE_MASK: u32 = (1 << LANE_WIDTH) - 1;

/// Register width in bits
pub const REGISTER_BITS: u8 = 32;

/// Digit lane in the display register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Lane {
    MinutesOnes = 0,
    MinutesTens = 1,
    HoursOnes = 2,
    HoursTens = 3,
}

impl Lane {
    /// All lanes, rightmost digit first
    pub const ALL: [Lane; 4] = [
        Lane::MinutesOnes,
        Lane::MinutesTens,
        Lane::HoursOnes,
        Lane::HoursTens,
    ];

    /// All lanes in reading order (leftmost digit first)
    pub const LEFT_TO_RIGHT: [Lane; 4] = [
        Lane::HoursTens,
        Lane::HoursOnes,
        Lane::MinutesTens,
        Lane::MinutesOnes,
    ];
}

/// Bit positions of the digit lanes and meridiem flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLayout"))]
pub struct DisplayLayout {
    /// Lowest bit of each lane, indexed by [`Lane`]
    lanes: [u8; 4],
    am_bit: u8,
    pm_bit: u8,
}

impl DisplayLayout {
    /// The clock panel layout: lanes at 0/7/14/21, AM at 28, PM at 29
    pub const STANDARD: DisplayLayout = DisplayLayout {
        lanes: [0, 7, 14, 21],
        am_bit: 28,
        pm_bit: 29,
    };

    /// Build a layout for a differently wired panel
    ///
    /// # Arguments
    /// - `lanes`: lowest bit of each lane, in [`Lane`] order
    /// - `am_bit`: bit lit for AM
    /// - `pm_bit`: bit lit for PM
    ///
    /// # Errors
    /// [`LayoutError::OutOfRegister`] if a lane or flag does not fit in 32
    /// bits, [`LayoutError::Overlap`] if any two of them share a bit.
    pub fn new(lanes: [u8; 4], am_bit: u8, pm_bit: u8) -> Result<Self, LayoutError> {
        let mut used = 0u32;

        for offset in lanes {
            if offset > REGISTER_BITS - LANE_WIDTH {
                return Err(LayoutError::OutOfRegister);
            }
            claim(&mut used, LANE_MASK << offset)?;
        }

        for bit in [am_bit, pm_bit] {
            let mask = 1u32
                .checked_shl(u32::from(bit))
                .ok_or(LayoutError::OutOfRegister)?;
            claim(&mut used, mask)?;
        }

        Ok(Self {
            lanes,
            am_bit,
            pm_bit,
        })
    }

    /// Lowest bit of a lane
    pub fn lane_offset(&self, lane: Lane) -> u8 {
        self.lanes[lane as usize]
    }

    /// Bit lit for AM
    pub fn am_bit(&self) -> u8 {
        self.am_bit
    }

    /// Bit lit for PM
    pub fn pm_bit(&self) -> u8 {
        self.pm_bit
    }

    /// Register bits covered by a lane
    pub fn lane_mask(&self, lane: Lane) -> u32 {
        LANE_MASK << self.lane_offset(lane)
    }

    /// Register bit for a meridiem flag
    pub fn flag_mask(&self, meridiem: Meridiem) -> u32 {
        match meridiem {
            Meridiem::Am => 1 << self.am_bit,
            Meridiem::Pm => 1 << self.pm_bit,
        }
    }

    /// Both meridiem flag bits
    pub fn flags_mask(&self) -> u32 {
        self.flag_mask(Meridiem::Am) | self.flag_mask(Meridiem::Pm)
    }

    /// Every bit this layout can set
    pub fn used_mask(&self) -> u32 {
        Lane::ALL
            .iter()
            .fold(self.flags_mask(), |mask, &lane| mask | self.lane_mask(lane))
    }

    /// Read the meridiem flags back out of a register value
    ///
    /// `None` if neither flag or both flags are set.
    pub fn read_meridiem(&self, bits: u32) -> Option<Meridiem> {
        let am = bits & self.flag_mask(Meridiem::Am) != 0;
        let pm = bits & self.flag_mask(Meridiem::Pm) != 0;
        match (am, pm) {
            (true, false) => Some(Meridiem::Am),
            (false, true) => Some(Meridiem::Pm),
            _ => None,
        }
    }

    /// Shift a 7-bit segment pattern into its lane
    pub fn place(&self, lane: Lane, pattern: u8) -> u32 {
        (u32::from(pattern) & LANE_MASK) << self.lane_offset(lane)
    }

    /// Pull the 7-bit segment pattern back out of a lane
    pub fn extract(&self, bits: u32, lane: Lane) -> u8 {
        ((bits >> self.lane_offset(lane)) & LANE_MASK) as u8
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn claim(used: &mut u32, mask: u32) -> Result<(), LayoutError> {
    if *used & mask != 0 {
        return Err(LayoutError::Overlap);
    }
    *used |= mask;
    Ok(())
}

/// Unchecked wire form, validated on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLayout {
    lanes: [u8; 4],
    am_bit: u8,
    pm_bit: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for DisplayLayout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        DisplayLayout::new(raw.lanes, raw.am_bit, raw.pm_bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_is_valid() {
        let standard = DisplayLayout::STANDARD;
        assert_eq!(DisplayLayout::new([0, 7, 14, 21], 28, 29), Ok(standard));
        assert_eq!(DisplayLayout::default(), standard);
    }

    #[test]
    fn test_standard_masks() {
        let layout = DisplayLayout::STANDARD;
        assert_eq!(layout.lane_mask(Lane::MinutesOnes), 0x0000_007F);
        assert_eq!(layout.lane_mask(Lane::MinutesTens), 0x0000_3F80);
        assert_eq!(layout.lane_mask(Lane::HoursOnes), 0x001F_C000);
        assert_eq!(layout.lane_mask(Lane::HoursTens), 0x0FE0_0000);
        assert_eq!(layout.flags_mask(), 0x3000_0000);
        assert_eq!(layout.used_mask(), 0x3FFF_FFFF);
    }

    #[test]
    fn test_place_and_extract() {
        let layout = DisplayLayout::STANDARD;
        let bits = layout.place(Lane::HoursOnes, 0b1011101);
        assert_eq!(bits, 0b1011101 << 14);
        assert_eq!(layout.extract(bits, Lane::HoursOnes), 0b1011101);
        assert_eq!(layout.extract(bits, Lane::MinutesOnes), 0);

        // Pattern bits beyond the lane are dropped
        assert_eq!(layout.place(Lane::MinutesOnes, 0xFF), 0x7F);
    }

    #[test]
    fn test_read_meridiem() {
        let layout = DisplayLayout::STANDARD;
        assert_eq!(layout.read_meridiem(1 << 28), Some(Meridiem::Am));
        assert_eq!(layout.read_meridiem(1 << 29), Some(Meridiem::Pm));
        assert_eq!(layout.read_meridiem(0), None);
        assert_eq!(layout.read_meridiem(0x3000_0000), None);
    }

    #[test]
    fn test_custom_layout() {
        // Hours on the low side, flags at the top
        let layout = DisplayLayout::new([14, 21, 0, 7], 30, 31).unwrap();
        assert_eq!(layout.lane_offset(Lane::HoursOnes), 0);
        assert_eq!(layout.flag_mask(Meridiem::Pm), 0x8000_0000);
    }

    #[test]
    fn test_lane_past_register_rejected() {
        assert_eq!(
            DisplayLayout::new([0, 7, 14, 26], 28, 29),
            Err(LayoutError::OutOfRegister)
        );
        assert_eq!(
            DisplayLayout::new([0, 7, 14, 21], 32, 29),
            Err(LayoutError::OutOfRegister)
        );
    }

    #[test]
    fn test_overlap_rejected() {
        // Lanes 6 bits apart
        assert_eq!(
            DisplayLayout::new([0, 6, 14, 21], 28, 29),
            Err(LayoutError::Overlap)
        );
        // Flag inside a lane
        assert_eq!(
            DisplayLayout::new([0, 7, 14, 21], 27, 29),
            Err(LayoutError::Overlap)
        );
        // Same bit for both flags
        assert_eq!(
            DisplayLayout::new([0, 7, 14, 21], 28, 28),
            Err(LayoutError::Overlap)
        );
    }
}
