use std::fmt;
use std::time::Duration;

use bytes::{BufMut, BytesMut};

use crate::codec::LF;
use crate::error::{FrameError, Result};

/// Highest valid GPIB primary address.
pub const ADDRESS_MAX: u8 = 30;

/// A GPIB primary address (0..=30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(u8);

impl Address {
    /// Validate and wrap a raw address value.
    pub fn new(value: u8) -> Result<Self> {
        if value > ADDRESS_MAX {
            return Err(FrameError::AddressOutOfRange {
                value,
                max: ADDRESS_MAX,
            });
        }
        Ok(Self(value))
    }

    /// The raw address value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Address {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `++`-prefixed command interpreted by the bridge adapter itself.
///
/// Controller commands are plain ASCII lines and are never escaped; the
/// adapter consumes them instead of forwarding them to the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCommand {
    /// Select the active instrument address (`++addr N`).
    Addr(Address),
    /// Address the instrument to talk and read until EOI (`++read eoi`).
    ReadEoi,
    /// Serial-poll the selected instrument (`++spoll`).
    Spoll,
    /// Set the adapter's own read timeout (`++read_tmo_ms N`).
    ReadTimeout(Duration),
}

impl ControllerCommand {
    /// The command line without its terminator.
    pub fn text(&self) -> String {
        match self {
            ControllerCommand::Addr(address) => format!("++addr {address}"),
            ControllerCommand::ReadEoi => "++read eoi".to_string(),
            ControllerCommand::Spoll => "++spoll".to_string(),
            ControllerCommand::ReadTimeout(timeout) => {
                format!("++read_tmo_ms {}", timeout.as_millis())
            }
        }
    }

    /// Encode the command line plus LF terminator into `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) {
        dst.put_slice(self.text().as_bytes());
        dst.put_u8(LF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(command: ControllerCommand) -> Vec<u8> {
        let mut buf = BytesMut::new();
        command.encode_into(&mut buf);
        buf.to_vec()
    }

    #[test]
    fn test_address_range() {
        assert!(Address::new(0).is_ok());
        assert!(Address::new(30).is_ok());
        assert!(matches!(
            Address::new(31),
            Err(FrameError::AddressOutOfRange { value: 31, max: 30 })
        ));
    }

    #[test]
    fn test_addr_command_wire_bytes() {
        let address = Address::new(1).unwrap();
        assert_eq!(encoded(ControllerCommand::Addr(address)), b"++addr 1\n");
    }

    #[test]
    fn test_fixed_command_wire_bytes() {
        assert_eq!(encoded(ControllerCommand::Spoll), b"++spoll\n");
        assert_eq!(encoded(ControllerCommand::ReadEoi), b"++read eoi\n");
    }

    #[test]
    fn test_read_timeout_in_millis() {
        let command = ControllerCommand::ReadTimeout(Duration::from_secs(10));
        assert_eq!(encoded(command), b"++read_tmo_ms 10000\n");
    }
}
