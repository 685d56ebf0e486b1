/// Errors that can occur in bus operations.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] gpibprims_transport::TransportError),

    /// Wire encoding/decoding error.
    #[error("frame error: {0}")]
    Frame(#[from] gpibprims_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, BusError>;
