//! HP 2225 ThinkJet printer support.
//!
//! Pure string/byte templating for the printer's PCL-style escape
//! sequences, plus decoding of its serial-poll status byte. No I/O lives
//! here — the output of every function is fed to a bus endpoint by the
//! caller.
//!
//! Page geometry, for reference: 80 columns, 66 lines per page, 60 lines
//! of text by default, 1024-byte input buffer.

pub mod error;
pub mod escape;
pub mod raster;
pub mod status;

pub use error::{Hp2225Error, Result};
pub use escape::{bold, pitch, setup_defaults, underline, FORM_FEED, PITCH_MAX};
pub use raster::{raster_begin, raster_end, raster_row, DOTS_PER_ROW, MAX_ROW_BYTES};
pub use status::Status;
