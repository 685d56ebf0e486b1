//! Exercise an HP 2225 ThinkJet behind an AR488 adapter: styled text, a
//! serial poll, and a block of low-density raster lines.
//!
//! Usage: `cargo run --example thinkjet-demo -- /dev/ttyUSB0`

use std::time::Duration;

use gpibprims::bus::Bus;
use gpibprims::frame::Address;
use gpibprims::hp2225::{
    bold, pitch, raster_begin, raster_end, raster_row, setup_defaults, underline, Status,
    DOTS_PER_ROW,
};
use gpibprims::transport::SerialConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let bus = Bus::open(&SerialConfig::new(port))?;
    let printer = bus.endpoint(Address::new(1)?);

    // Give the adapter a moment after power-up before the first frame.
    std::thread::sleep(Duration::from_secs(2));

    printer.write(setup_defaults())?;
    printer.write(&format!(
        "{} and {} and {}",
        bold("bold text"),
        underline("underlined text"),
        pitch("expanded text", 1)?,
    ))?;

    let status = Status::parse(&printer.serial_poll()?)?;
    println!("printer status: {:?}", status.describe());

    // A block of horizontal lines in low-density graphics.
    let mut block = raster_begin(DOTS_PER_ROW);
    for _ in 0..55 {
        block.extend_from_slice(&raster_row(&[0x88; 5])?);
    }
    block.extend_from_slice(&raster_end());
    printer.write("\r")?;
    printer.write_bytes(&block)?;

    Ok(())
}
