//! Configuration types
//!
//! Board-agnostic description of how the display register is wired.

pub mod layout;

pub use layout::*;
