use std::time::Duration;

/// Default baud rate of AR488-style adapters.
pub const DEFAULT_BAUD_RATE: u32 = 2400;

/// Default serial-level read timeout (poll granularity).
pub const DEFAULT_SERIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// Default protocol-level timeout for one whole response line.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for opening a serial link. Immutable after open.
///
/// The two timeouts are distinct knobs and must not be conflated:
/// `serial_timeout` is how long a single port read may block before the
/// accumulation loop gets control back, `response_timeout` bounds one whole
/// [`Link::read_line`](crate::Link::read_line) call.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Platform-specific port name (e.g. `/dev/ttyUSB0`, `COM10`).
    pub port: String,
    /// Baud rate. Default: 2400.
    pub baud_rate: u32,
    /// Serial-level read timeout. Default: 1 s.
    pub serial_timeout: Duration,
    /// Protocol-level response timeout. Default: 10 s.
    pub response_timeout: Duration,
}

impl SerialConfig {
    /// Configuration for `port` with default baud rate and timeouts.
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            serial_timeout: DEFAULT_SERIAL_TIMEOUT,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
        }
    }

    /// Override the baud rate.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Override the serial-level read timeout.
    pub fn with_serial_timeout(mut self, timeout: Duration) -> Self {
        self.serial_timeout = timeout;
        self
    }

    /// Override the protocol-level response timeout.
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }
}
