//! Display update orchestration
//!
//! Reads the clock port, decodes, encodes, and commits the result to the
//! display port with a single write. Any failure leaves the display
//! register exactly as it was.

use segclock_hal::{ClockTimePort, DisplayPort};

use crate::config::DisplayLayout;
use crate::display::{encode_display_with, DisplayBits};
use crate::error::UpdateError;
use crate::time::decode_time;

/// Refresh the display from the clock register
///
/// Uses the standard panel layout. Intended to be called from a timer
/// interrupt or polling loop owned by the caller.
///
/// # Errors
/// [`UpdateError::Decode`] if the clock reading is out of range,
/// [`UpdateError::Encode`] if the decoded time is rejected. The display port
/// is not written in either case.
pub fn update_display<C, D>(clock: &mut C, display: &mut D) -> Result<(), UpdateError>
where
    C: ClockTimePort + ?Sized,
    D: DisplayPort + ?Sized,
{
    refresh(clock, display, &DisplayLayout::STANDARD).map(|_| ())
}

fn refresh<C, D>(
    clock: &mut C,
    display: &mut D,
    layout: &DisplayLayout,
) -> Result<DisplayBits, UpdateError>
where
    C: ClockTimePort + ?Sized,
    D: DisplayPort + ?Sized,
{
    let raw = clock.read_ticks();

    let tod = decode_time(raw).inspect_err(|_err| {
        #[cfg(feature = "defmt")]
        defmt::warn!("Clock reading {} rejected: {}", raw, _err);
    })?;

    let bits = encode_display_with(&tod, layout).inspect_err(|_err| {
        #[cfg(feature = "defmt")]
        defmt::warn!("Time {} rejected by encoder: {}", tod, _err);
    })?;

    display.write_bits(bits.bits());

    #[cfg(feature = "defmt")]
    defmt::trace!("Display set to {:#x} ({})", bits.bits(), tod);

    Ok(bits)
}

/// Clock-to-display updater that owns its ports
///
/// Convenience for callers that keep the ports in one place, such as an
/// interrupt handler's local state.
pub struct ClockUpdater<C, D> {
    clock: C,
    display: D,
    layout: DisplayLayout,
}

impl<C: ClockTimePort, D: DisplayPort> ClockUpdater<C, D> {
    /// Create an updater for the standard panel layout
    pub fn new(clock: C, display: D) -> Self {
        Self::with_layout(clock, display, DisplayLayout::STANDARD)
    }

    /// Create an updater for a custom panel layout
    pub fn with_layout(clock: C, display: D, layout: DisplayLayout) -> Self {
        Self {
            clock,
            display,
            layout,
        }
    }

    /// Refresh the display once
    ///
    /// Returns the value written to the display port.
    ///
    /// # Errors
    /// Same as [`update_display`]. The display port is not written on error.
    pub fn update(&mut self) -> Result<DisplayBits, UpdateError> {
        refresh(&mut self.clock, &mut self.display, &self.layout)
    }

    /// Panel layout in use
    pub fn layout(&self) -> &DisplayLayout {
        &self.layout
    }

    /// Give the ports back
    pub fn release(self) -> (C, D) {
        (self.clock, self.display)
    }
}
