//! Drive GPIB instruments behind an AR488/Prologix-style serial bridge.
//!
//! gpibprims multiplexes one serial link among multiple instrument
//! addresses: endpoints re-select the active address lazily, payloads are
//! escaped per the bridge's reserved-byte rules, and queries pair their
//! write and read atomically.
//!
//! # Crate Structure
//!
//! - [`transport`] — Serial channel ownership and the `Link` seam
//! - [`frame`] — Reserved-byte escaping and `++` controller commands
//! - [`bus`] — Shared-bus address management and per-instrument endpoints
//! - [`hp2225`] — HP 2225 ThinkJet escape sequences and status decoding

/// Re-export transport types.
pub mod transport {
    pub use gpibprims_transport::*;
}

/// Re-export wire codec types.
pub mod frame {
    pub use gpibprims_frame::*;
}

/// Re-export bus types.
pub mod bus {
    pub use gpibprims_bus::*;
}

/// Re-export HP 2225 printer helpers.
pub mod hp2225 {
    pub use gpibprims_hp2225::*;
}
