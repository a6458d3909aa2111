//! Register port abstractions
//!
//! The clock core never touches hardware directly. It is handed one read
//! capability and one write capability.

/// Clock time register (read side)
///
/// The register holds the number of 1/16-second ticks elapsed since
/// midnight. Hardware faults can leave it negative or past the end of the
/// day; implementations report the value as-is and leave validation to the
/// caller.
pub trait ClockTimePort {
    /// Read the current raw tick count
    ///
    /// Takes `&mut self` because some peripherals latch on read.
    fn read_ticks(&mut self) -> i32;
}

/// Display output register (write side)
///
/// Each call must land as a single register store. The core calls this at
/// most once per update and never reads the register back.
pub trait DisplayPort {
    /// Store a packed segment pattern
    fn write_bits(&mut self, bits: u32);
}

impl<T: ClockTimePort + ?Sized> ClockTimePort for &mut T {
    fn read_ticks(&mut self) -> i32 {
        (**self).read_ticks()
    }
}

impl<T: DisplayPort + ?Sized> DisplayPort for &mut T {
    fn write_bits(&mut self, bits: u32) {
        (**self).write_bits(bits);
    }
}
