use serialport::SerialPortType;

use crate::cmd::PortsArgs;
use crate::exit::{CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_ports, OutputFormat};

pub fn run(_args: PortsArgs, format: OutputFormat) -> CliResult<i32> {
    let ports = serialport::available_ports()
        .map_err(|err| CliError::new(INTERNAL, format!("failed to list serial ports: {err}")))?;

    let rows: Vec<(String, &'static str)> = ports
        .into_iter()
        .map(|port| (port.port_name, kind_name(&port.port_type)))
        .collect();

    print_ports(&rows, format);
    Ok(SUCCESS)
}

fn kind_name(port_type: &SerialPortType) -> &'static str {
    match port_type {
        SerialPortType::UsbPort(_) => "usb",
        SerialPortType::PciPort => "pci",
        SerialPortType::BluetoothPort => "bluetooth",
        SerialPortType::Unknown => "unknown",
    }
}
