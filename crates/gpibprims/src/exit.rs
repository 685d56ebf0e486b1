use std::fmt;
use std::io;

use gpibprims_bus::BusError;
use gpibprims_frame::FrameError;
use gpibprims_hp2225::Hp2225Error;
use gpibprims_transport::TransportError;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const CONNECTION_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        // A port that cannot be opened is fatal at startup by contract.
        TransportError::Open { .. } => CliError::new(CONNECTION_ERROR, format!("{context}: {err}")),
        TransportError::Io(source) => io_error(context, source),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::AddressOutOfRange { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::NotAscii { .. } | FrameError::TruncatedEscape { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn bus_error(context: &str, err: BusError) -> CliError {
    match err {
        BusError::Transport(err) => transport_error(context, err),
        BusError::Frame(err) => frame_error(context, err),
    }
}

pub fn printer_error(context: &str, err: Hp2225Error) -> CliError {
    match err {
        Hp2225Error::PitchOutOfRange { .. } | Hp2225Error::RasterTooWide { .. } => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        Hp2225Error::InvalidStatus { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}
