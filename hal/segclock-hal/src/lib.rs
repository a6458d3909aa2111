//! segclock Hardware Abstraction Layer
//!
//! This crate defines the two register capabilities the clock core needs.
//! Chip-specific crates implement them over memory-mapped registers; host
//! tests and simulators implement them over plain fields.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Caller (timer interrupt, main loop)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-core (decode, encode, update) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!         │                       │
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  clock time   │       │   display     │
//! │   register    │       │   register    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::ClockTimePort`] - Read the raw tick count
//! - [`port::DisplayPort`] - Write the packed display pattern

#![no_std]
#![deny(unsafe_code)]

pub mod port;

pub use port::{ClockTimePort, DisplayPort};
