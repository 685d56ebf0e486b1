/// Errors for out-of-range formatting parameters and malformed status
/// responses.
///
/// Range violations are rejected here, before the sequence ever reaches a
/// transport.
#[derive(Debug, thiserror::Error)]
pub enum Hp2225Error {
    /// Character pitch levels occupy 0..=3.
    #[error("pitch level {level} out of range (0..={max})")]
    PitchOutOfRange { level: u8, max: u8 },

    /// A raster row carries at most 80 bytes (640 dots).
    #[error("raster row too wide ({len} bytes, max {max})")]
    RasterTooWide { len: usize, max: usize },

    /// A serial-poll response that does not parse as a status byte.
    #[error("unparseable status response: {text:?}")]
    InvalidStatus { text: String },
}

pub type Result<T> = std::result::Result<T, Hp2225Error>;
