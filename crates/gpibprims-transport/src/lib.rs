//! Serial channel ownership for GPIB bridge adapters.
//!
//! This is the lowest layer of gpibprims. It owns the physical serial port
//! behind an AR488/Prologix-style GPIB adapter and exposes exactly two raw
//! operations: write bytes, read one line. Everything else builds on top of
//! the [`Link`] trait provided here.

pub mod config;
pub mod error;
pub mod link;
pub mod serial;

pub use config::SerialConfig;
pub use error::{Result, TransportError};
pub use link::Link;
pub use serial::SerialLink;
