use crate::error::{Hp2225Error, Result};

/// Dots per row in low-density graphics mode.
pub const DOTS_PER_ROW: u16 = 640;

/// Maximum bytes per raster row (8 dots per byte at 640 dots).
pub const MAX_ROW_BYTES: usize = 80;

/// Enter raster graphics mode at `dots_per_row` resolution
/// (`ESC *r<n>S` then `ESC *rA`).
pub fn raster_begin(dots_per_row: u16) -> Vec<u8> {
    format!("\x1b*r{dots_per_row}S\x1b*rA").into_bytes()
}

/// One row of raster data: `ESC *b<n>W` followed by the dot bytes.
///
/// Each byte covers 8 dots, most significant bit leftmost.
pub fn raster_row(dots: &[u8]) -> Result<Vec<u8>> {
    if dots.len() > MAX_ROW_BYTES {
        return Err(Hp2225Error::RasterTooWide {
            len: dots.len(),
            max: MAX_ROW_BYTES,
        });
    }
    let mut row = format!("\x1b*b{}W", dots.len()).into_bytes();
    row.extend_from_slice(dots);
    Ok(row)
}

/// Leave raster graphics mode (`ESC *rB`).
pub fn raster_end() -> Vec<u8> {
    b"\x1b*rB".to_vec()
}
