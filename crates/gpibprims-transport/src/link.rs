use crate::error::Result;

/// Raw byte access to a shared instrument channel.
///
/// This is the seam the bus layer is generic over: [`SerialLink`] is the
/// real implementation, tests substitute recording mocks. Implementations
/// perform no escaping, framing, or address bookkeeping — callers hand over
/// fully formed wire bytes.
///
/// [`SerialLink`]: crate::SerialLink
pub trait Link: Send {
    /// Write the whole buffer to the channel and flush.
    fn write_raw(&mut self, data: &[u8]) -> Result<()>;

    /// Read until a line feed or until the response timeout elapses.
    ///
    /// Returns whatever was accumulated, possibly empty. A timeout is NOT an
    /// error: polling loops depend on the lenient contract, and an empty
    /// line is a valid outcome distinct from an I/O failure.
    fn read_line(&mut self) -> Result<Vec<u8>>;
}
