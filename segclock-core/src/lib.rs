//! Board-agnostic core logic for the segmented clock display
//!
//! This crate turns a raw clock register value into display register bits:
//!
//! - Time decoding (1/16-second ticks to a 12-hour time of day)
//! - Display encoding (time of day to packed 7-segment lanes and AM/PM flags)
//! - Update orchestration (read port, decode, encode, single write)
//! - Display layout configuration
//!
//! Everything runs on integer arithmetic with no heap.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod error;
pub mod time;
pub mod update;

pub use config::{DisplayLayout, Lane};
pub use display::{encode_display, encode_display_with, DisplayBits};
pub use error::{DecodeError, EncodeError, LayoutError, TimeField, UpdateError};
pub use time::{decode_time, Meridiem, TimeOfDay};
pub use update::{update_display, ClockUpdater};
