use std::fs;

use gpibprims_hp2225::{pitch, setup_defaults, FORM_FEED};

use crate::cmd::PrintArgs;
use crate::exit::{bus_error, io_error, printer_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: PrintArgs, _format: OutputFormat) -> CliResult<i32> {
    let text = fs::read_to_string(&args.file).map_err(|err| {
        io_error(&format!("failed reading {}", args.file.display()), err)
    })?;

    // Formatting parameters are validated before the port is touched.
    let body = match args.pitch {
        Some(level) => pitch(&text, level).map_err(|err| printer_error("print failed", err))?,
        None => text,
    };

    let (_bus, endpoint) = args.bus.open_endpoint()?;

    if !args.no_setup {
        endpoint
            .write(setup_defaults())
            .map_err(|err| bus_error("printer setup failed", err))?;
    }

    endpoint
        .write(&body)
        .map_err(|err| bus_error("print failed", err))?;

    if args.form_feed {
        endpoint
            .write(FORM_FEED)
            .map_err(|err| bus_error("form feed failed", err))?;
    }

    Ok(SUCCESS)
}
