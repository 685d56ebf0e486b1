use bitflags::bitflags;

use crate::error::{Hp2225Error, Result};

bitflags! {
    /// The printer's serial-poll status byte.
    ///
    /// Bits 6, 4 and 1 always read 0. With SRQ enabled on the GPIB DIP
    /// switches, the printer asserts SRQ for self-test failure, paper out,
    /// and disabled carriage motion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const SELF_TEST_FAILED = 128;
        const OUT_OF_PAPER = 32;
        const BUFFER_FULL = 8;
        const BUFFER_EMPTY = 4;
        const CARRIAGE_DISABLED = 1;
    }
}

impl Status {
    /// Parse a serial-poll response line into a status byte.
    ///
    /// The adapter reports the byte as decimal text; unknown bits are
    /// retained so a firmware surprise still round-trips.
    pub fn parse(text: &str) -> Result<Self> {
        let value: u8 = text
            .trim()
            .parse()
            .map_err(|_| Hp2225Error::InvalidStatus {
                text: text.to_string(),
            })?;
        Ok(Status::from_bits_retain(value))
    }

    /// True for the conditions that assert SRQ.
    pub fn needs_attention(self) -> bool {
        self.intersects(Status::SELF_TEST_FAILED | Status::OUT_OF_PAPER | Status::CARRIAGE_DISABLED)
    }

    /// Human-readable names of the set flags.
    pub fn describe(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Status::SELF_TEST_FAILED) {
            names.push("self test failed");
        }
        if self.contains(Status::OUT_OF_PAPER) {
            names.push("out of paper");
        }
        if self.contains(Status::BUFFER_FULL) {
            names.push("buffer full");
        }
        if self.contains(Status::BUFFER_EMPTY) {
            names.push("buffer empty");
        }
        if self.contains(Status::CARRIAGE_DISABLED) {
            names.push("carriage motion disabled");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_decodes() {
        assert_eq!(Status::parse("4").unwrap(), Status::BUFFER_EMPTY);
        assert_eq!(
            Status::parse(" 40\r\n").unwrap(),
            Status::OUT_OF_PAPER | Status::BUFFER_FULL
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Status::parse("ready"),
            Err(Hp2225Error::InvalidStatus { .. })
        ));
        assert!(Status::parse("").is_err());
        assert!(Status::parse("300").is_err());
    }

    #[test]
    fn test_needs_attention_bits() {
        assert!(Status::parse("128").unwrap().needs_attention());
        assert!(Status::parse("33").unwrap().needs_attention());
        assert!(!Status::parse("12").unwrap().needs_attention());
    }

    #[test]
    fn test_describe_lists_set_flags() {
        let status = Status::OUT_OF_PAPER | Status::BUFFER_EMPTY;
        assert_eq!(status.describe(), vec!["out of paper", "buffer empty"]);
        assert!(Status::empty().describe().is_empty());
    }

    #[test]
    fn test_unknown_bits_retained() {
        let status = Status::parse("2").unwrap();
        assert_eq!(status.bits(), 2);
        assert!(status.describe().is_empty());
    }
}
