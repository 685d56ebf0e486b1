use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use serialport::SerialPort;
use tracing::{debug, info, trace};

use crate::config::SerialConfig;
use crate::error::{Result, TransportError};
use crate::link::Link;

const LF: u8 = 0x0a;

/// Idle delay after a zero-byte read. Some USB-serial drivers report
/// `Ok(0)` without blocking once the device is gone; sleeping here keeps
/// the loop from spinning the whole response deadline away.
const ZERO_READ_IDLE: Duration = Duration::from_millis(10);

/// Serial port link to a GPIB bridge adapter.
///
/// Owns the port handle for the life of the value; the handle is released
/// on drop on all exit paths.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    config: SerialConfig,
}

impl SerialLink {
    /// Open the serial port described by `config`.
    ///
    /// Failure here (port missing, busy, permission denied) is treated as
    /// unrecoverable at startup: no retry is attempted.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .timeout(config.serial_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                port: config.port.clone(),
                source,
            })?;

        info!(
            port = %config.port,
            baud = config.baud_rate,
            "serial link open"
        );

        Ok(Self {
            port,
            config: config.clone(),
        })
    }

    /// The configuration this link was opened with.
    pub fn config(&self) -> &SerialConfig {
        &self.config
    }
}

impl Link for SerialLink {
    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        trace!(len = data.len(), "wrote raw bytes");
        Ok(())
    }

    fn read_line(&mut self) -> Result<Vec<u8>> {
        let deadline = Instant::now() + self.config.response_timeout;
        let line = read_line_until(&mut self.port, deadline)?;
        trace!(len = line.len(), "read line");
        Ok(line)
    }
}

/// Accumulate bytes until a line feed or until `deadline`.
fn read_line_until<R: Read>(reader: &mut R, deadline: Instant) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];

    while Instant::now() < deadline {
        match reader.read(&mut byte) {
            Ok(0) => std::thread::sleep(ZERO_READ_IDLE),
            Ok(_) => {
                line.push(byte[0]);
                if byte[0] == LF {
                    break;
                }
            }
            // Serial-level timeout: one poll tick elapsed without data.
            // Keep accumulating until the response deadline.
            Err(err) if err.kind() == ErrorKind::TimedOut => continue,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(TransportError::Io(err)),
        }
    }

    Ok(line)
}

impl Drop for SerialLink {
    fn drop(&mut self) {
        debug!(port = %self.config.port, "serial link closed");
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("port", &self.config.port)
            .field("baud", &self.config.baud_rate)
            .finish()
    }
}
