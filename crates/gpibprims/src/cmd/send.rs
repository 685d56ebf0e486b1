use std::fs;

use crate::cmd::SendArgs;
use crate::exit::{bus_error, io_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: SendArgs, _format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let (_bus, endpoint) = args.bus.open_endpoint()?;

    endpoint
        .write_bytes(&payload)
        .map_err(|err| bus_error("send failed", err))?;

    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    // No payload flag sends an empty frame (a bare terminator), which some
    // instruments use as a nudge.
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::BusArgs;

    fn bus_args() -> BusArgs {
        BusArgs {
            port: "/dev/ttyUSB0".to_string(),
            address: 1,
            baud: 2400,
            serial_timeout: "1s".to_string(),
            response_timeout: "10s".to_string(),
        }
    }

    #[test]
    fn resolve_payload_prefers_data_flag() {
        let args = SendArgs {
            bus: bus_args(),
            data: Some("*IDN?".to_string()),
            file: None,
        };
        assert_eq!(resolve_payload(&args).unwrap(), b"*IDN?");
    }

    #[test]
    fn resolve_payload_defaults_to_empty() {
        let args = SendArgs {
            bus: bus_args(),
            data: None,
            file: None,
        };
        assert!(resolve_payload(&args).unwrap().is_empty());
    }

    #[test]
    fn resolve_payload_missing_file_fails() {
        let args = SendArgs {
            bus: bus_args(),
            data: None,
            file: Some("/nonexistent/gpibprims-payload".into()),
        };
        assert!(resolve_payload(&args).is_err());
    }
}
