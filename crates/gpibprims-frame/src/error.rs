/// Errors that can occur while encoding or decoding wire data.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Text payloads and responses must be ASCII; nothing is sent or
    /// substituted when validation fails.
    #[error("non-ASCII byte 0x{byte:02X} at position {position}")]
    NotAscii { byte: u8, position: usize },

    /// GPIB primary addresses occupy 0..=30.
    #[error("address {value} out of range (0..={max})")]
    AddressOutOfRange { value: u8, max: u8 },

    /// An escaped stream ended with a dangling escape byte.
    #[error("truncated escape sequence at position {position}")]
    TruncatedEscape { position: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
