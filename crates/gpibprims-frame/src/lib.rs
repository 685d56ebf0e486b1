//! Reserved-byte escaping and controller command encoding for serial GPIB
//! bridges.
//!
//! This is the core value-add layer of gpibprims. The AR488/Prologix wire
//! protocol reserves three bytes inside payload data:
//! - ESC (0x1B) introduces an escape pair
//! - CR (0x0D) and LF (0x0A) terminate commands
//!
//! Payloads are escaped byte-for-byte before transmission and every data
//! frame ends with exactly one unescaped LF terminator. `++`-prefixed
//! controller commands are never escaped.
//!
//! No I/O lives here; everything operates on buffers.

pub mod codec;
pub mod command;
pub mod error;

pub use codec::{decode_ascii, encode_data, ensure_ascii, escape_into, unescape, CR, ESC, LF};
pub use command::{Address, ControllerCommand, ADDRESS_MAX};
pub use error::{FrameError, Result};
