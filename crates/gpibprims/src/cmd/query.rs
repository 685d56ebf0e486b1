use crate::cmd::QueryArgs;
use crate::exit::{bus_error, CliResult, SUCCESS};
use crate::output::{print_response, OutputFormat};

pub fn run(args: QueryArgs, format: OutputFormat) -> CliResult<i32> {
    let (_bus, endpoint) = args.bus.open_endpoint()?;

    let response = endpoint
        .query(&args.data)
        .map_err(|err| bus_error("query failed", err))?;

    print_response(&args.bus.port, args.bus.address, &response, format);
    Ok(SUCCESS)
}
