//! Shared-bus address management for multiplexed GPIB links.
//!
//! This is the "just works" layer. One [`Bus`] owns the serial link and
//! tracks which instrument address is currently selected; [`Endpoint`]s are
//! cheap per-address handles that re-select lazily — a selection command
//! goes out only when the requested address differs from the last one used.
//!
//! Selection state and link form one critical section: every write holds
//! the bus lock across {ensure selected, escape, transmit}, every query
//! across its write/read pair, so traffic from different endpoints never
//! interleaves mid-operation.

pub mod bus;
pub mod endpoint;
pub mod error;
pub mod listener;

pub use bus::Bus;
pub use endpoint::Endpoint;
pub use error::{BusError, Result};
pub use listener::BusListener;

#[cfg(test)]
pub(crate) mod test_link;
