use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};

use gpibprims_bus::{Bus, Endpoint};
use gpibprims_frame::Address;
use gpibprims_transport::SerialConfig;

use crate::exit::{bus_error, frame_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod ports;
pub mod print;
pub mod query;
pub mod send;
pub mod spoll;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List serial ports on this machine.
    Ports(PortsArgs),
    /// Send one payload to an instrument.
    Send(SendArgs),
    /// Send a payload and print the response line.
    Query(QueryArgs),
    /// Serial-poll an instrument's status byte.
    Spoll(SpollArgs),
    /// Print a text file on an HP 2225 ThinkJet.
    Print(PrintArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Ports(args) => ports::run(args, format),
        Command::Send(args) => send::run(args, format),
        Command::Query(args) => query::run(args, format),
        Command::Spoll(args) => spoll::run(args, format),
        Command::Print(args) => print::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Link and addressing flags shared by every on-the-wire subcommand.
#[derive(Args, Debug)]
pub struct BusArgs {
    /// Serial port of the GPIB bridge adapter (e.g. /dev/ttyUSB0, COM10).
    pub port: String,

    /// GPIB primary address of the instrument (0-30).
    #[arg(long, short = 'a')]
    pub address: u8,

    /// Baud rate of the adapter's serial side.
    #[arg(long, default_value_t = 2400)]
    pub baud: u32,

    /// Serial-level read timeout, the poll granularity (e.g. 1s, 500ms).
    #[arg(long, default_value = "1s")]
    pub serial_timeout: String,

    /// Protocol-level timeout for one whole response line (e.g. 10s).
    #[arg(long, default_value = "10s")]
    pub response_timeout: String,
}

impl BusArgs {
    pub fn address(&self) -> CliResult<Address> {
        Address::new(self.address).map_err(|err| frame_error("invalid address", err))
    }

    pub fn config(&self) -> CliResult<SerialConfig> {
        Ok(SerialConfig::new(&self.port)
            .with_baud_rate(self.baud)
            .with_serial_timeout(parse_duration(&self.serial_timeout)?)
            .with_response_timeout(parse_duration(&self.response_timeout)?))
    }

    /// Validate flags, open the bus, and bind an endpoint.
    ///
    /// Address and duration validation come first so usage mistakes never
    /// touch the port.
    pub fn open_endpoint(&self) -> CliResult<(Bus, Endpoint)> {
        let address = self.address()?;
        let config = self.config()?;
        let bus = Bus::open(&config).map_err(|err| bus_error("open failed", err))?;
        let endpoint = bus.endpoint(address);
        Ok((bus, endpoint))
    }
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub bus: BusArgs,

    /// ASCII string payload.
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,

    /// Read payload bytes from a file.
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub bus: BusArgs,

    /// ASCII string payload.
    #[arg(long)]
    pub data: String,
}

#[derive(Args, Debug)]
pub struct SpollArgs {
    #[command(flatten)]
    pub bus: BusArgs,

    /// Decode the status byte as HP 2225 flags.
    #[arg(long)]
    pub decode: bool,

    /// Keep polling until interrupted.
    #[arg(long)]
    pub watch: bool,

    /// Delay between polls when --watch is set (e.g. 2s, 500ms).
    #[arg(long, default_value = "2s")]
    pub interval: String,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub bus: BusArgs,

    /// Text file to print.
    pub file: PathBuf,

    /// Character pitch level (0-3).
    #[arg(long)]
    pub pitch: Option<u8>,

    /// Skip the printer defaults preamble.
    #[arg(long)]
    pub no_setup: bool,

    /// Feed the page after printing.
    #[arg(long)]
    pub form_feed: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}
