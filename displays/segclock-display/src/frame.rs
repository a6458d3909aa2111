//! ASCII-art frame for a display register value
//!
//! Each digit cell is three columns wide:
//!
//! ```text
//!  _     top
//! |_|    upper-left, middle, upper-right
//! |_|    lower-left, bottom, lower-right
//! ```
//!
//! followed by a one-column colon between hours and minutes and a
//! three-column meridiem marker on the bottom row.

use core::fmt;

use heapless::String;
use segclock_core::config::{DisplayLayout, Lane};
use segclock_core::display::segments::{
    SEG_BOTTOM, SEG_LOWER_LEFT, SEG_LOWER_RIGHT, SEG_MIDDLE, SEG_TOP, SEG_UPPER_LEFT,
    SEG_UPPER_RIGHT,
};
use segclock_core::display::DisplayBits;
use segclock_core::time::Meridiem;

/// Rows in a rendered frame
pub const FRAME_ROWS: usize = 3;

/// Columns per digit cell
const CELL_WIDTH: usize = 3;

/// Characters per rendered row: four digits, colon, meridiem marker
pub const ROW_WIDTH: usize = 4 * CELL_WIDTH + 1 + 3;

/// Rendered display register
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    lines: [String<ROW_WIDTH>; FRAME_ROWS],
}

/// Render a register value laid out by [`DisplayLayout::STANDARD`]
pub fn render(bits: DisplayBits) -> Frame {
    Frame::render(bits, &DisplayLayout::STANDARD)
}

impl Frame {
    /// Render a register value with a specific panel layout
    ///
    /// Lanes are drawn segment by segment, so a corrupted pattern shows up
    /// as the odd shape it would have on the panel. The colon is lit
    /// whenever any register bit is set.
    pub fn render(bits: DisplayBits, layout: &DisplayLayout) -> Self {
        let raw = bits.bits();
        let mut lines: [String<ROW_WIDTH>; FRAME_ROWS] = core::array::from_fn(|_| String::new());

        for (position, &lane) in Lane::LEFT_TO_RIGHT.iter().enumerate() {
            let pattern = layout.extract(raw, lane);
            for (row, line) in lines.iter_mut().enumerate() {
                let pushed = line.push_str(cell_row(pattern, row));
                debug_assert!(pushed.is_ok());
            }

            // Colon sits between the hours and minutes digits
            if position == 1 {
                let lit = raw != 0;
                for (row, line) in lines.iter_mut().enumerate() {
                    let colon = if lit && row > 0 { '.' } else { ' ' };
                    let pushed = line.push(colon);
                    debug_assert!(pushed.is_ok());
                }
            }
        }

        let marker = match layout.read_meridiem(raw) {
            Some(Meridiem::Am) => " AM",
            Some(Meridiem::Pm) => " PM",
            None => "   ",
        };
        for (row, line) in lines.iter_mut().enumerate() {
            let text = if row == FRAME_ROWS - 1 { marker } else { "   " };
            let pushed = line.push_str(text);
            debug_assert!(pushed.is_ok());
        }

        Self { lines }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Iterate over all rows, top first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

fn cell_row(pattern: u8, row: usize) -> &'static str {
    let lit = |segment: u8| pattern & segment != 0;
    match row {
        0 => {
            if lit(SEG_TOP) {
                " _ "
            } else {
                "   "
            }
        }
        1 => edges(lit(SEG_UPPER_LEFT), lit(SEG_MIDDLE), lit(SEG_UPPER_RIGHT)),
        _ => edges(lit(SEG_LOWER_LEFT), lit(SEG_BOTTOM), lit(SEG_LOWER_RIGHT)),
    }
}

fn edges(left: bool, middle: bool, right: bool) -> &'static str {
    match (left, middle, right) {
        (false, false, false) => "   ",
        (false, false, true) => "  |",
        (false, true, false) => " _ ",
        (false, true, true) => " _|",
        (true, false, false) => "|  ",
        (true, false, true) => "| |",
        (true, true, false) => "|_ ",
        (true, true, true) => "|_|",
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line.as_str())?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, " / ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
