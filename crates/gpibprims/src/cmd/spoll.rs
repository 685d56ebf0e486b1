use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gpibprims_bus::Endpoint;
use gpibprims_hp2225::Status;

use crate::cmd::{parse_duration, SpollArgs};
use crate::exit::{bus_error, printer_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_response, print_status, OutputFormat};

pub fn run(args: SpollArgs, format: OutputFormat) -> CliResult<i32> {
    let interval = parse_duration(&args.interval)?;
    let (_bus, endpoint) = args.bus.open_endpoint()?;

    if !args.watch {
        poll_once(&endpoint, &args, format)?;
        return Ok(SUCCESS);
    }

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    while running.load(Ordering::SeqCst) {
        poll_once(&endpoint, &args, format)?;
        std::thread::sleep(interval);
    }

    Ok(SUCCESS)
}

fn poll_once(endpoint: &Endpoint, args: &SpollArgs, format: OutputFormat) -> CliResult<()> {
    let raw = endpoint
        .serial_poll()
        .map_err(|err| bus_error("serial poll failed", err))?;

    if args.decode {
        let status =
            Status::parse(&raw).map_err(|err| printer_error("serial poll failed", err))?;
        print_status(&args.bus.port, args.bus.address, &raw, status, format);
    } else {
        print_response(&args.bus.port, args.bus.address, &raw, format);
    }
    Ok(())
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(INTERNAL, format!("signal handler setup failed: {err}"))
    })
}
