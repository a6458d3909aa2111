//! Text rendering for segclock display registers
//!
//! This crate draws a packed display register value the way the physical
//! panel would light it, as three rows of ASCII-art segments. It is meant
//! for simulators, host tests and debug consoles; the firmware itself only
//! ever writes the register.
//!
//! ```text
//!     _   _  _
//!   || |. _|| |
//!   ||_|. _||_| AM
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod frame;

pub use frame::{render, Frame, FRAME_ROWS, ROW_WIDTH};
