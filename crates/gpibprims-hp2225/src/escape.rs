use crate::error::{Hp2225Error, Result};

/// Highest character pitch level.
pub const PITCH_MAX: u8 = 3;

/// Form feed control character.
pub const FORM_FEED: &str = "\x0c";

/// The printer defaults sent once at the start of a job:
/// - `ESC &k0G` — execute CR, LF and FF as sent (separately)
/// - `ESC &k1W` — bidirectional printing
/// - `ESC Z`   — display functions off
/// - `ESC &s0C` — auto wrap-around at end of line
pub fn setup_defaults() -> &'static str {
    "\x1b&k0G\x1b&k1W\x1bZ\x1b&s0C"
}

/// Wrap `text` in a character pitch selection (`ESC &k<level>S`), resetting
/// to pitch 0 afterwards.
///
/// Valid levels are 0..=3 (0 normal, 1 expanded, 2 compressed, 3 expanded
/// compressed).
pub fn pitch(text: &str, level: u8) -> Result<String> {
    if level > PITCH_MAX {
        return Err(Hp2225Error::PitchOutOfRange {
            level,
            max: PITCH_MAX,
        });
    }
    Ok(format!("\x1b&k{level}S{text}\x1b&k0S"))
}

/// Wrap `text` in bold mode (shift-out / shift-in).
pub fn bold(text: &str) -> String {
    format!("\x0e{text}\x0f")
}

/// Wrap `text` in underline mode (`ESC &dD` … `ESC &d@`).
pub fn underline(text: &str) -> String {
    format!("\x1b&dD{text}\x1b&d@")
}
