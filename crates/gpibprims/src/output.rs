use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use gpibprims_hp2225::Status;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ResponseOutput<'a> {
    schema_id: &'a str,
    port: &'a str,
    address: u8,
    response: &'a str,
    timestamp: String,
}

pub fn print_response(port: &str, address: u8, response: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ResponseOutput {
                schema_id: "https://schemas.3leaps.dev/gpibprims/cli/v1/response.schema.json",
                port,
                address,
                response,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "ADDR", "RESPONSE"])
                .add_row(vec![port.to_string(), address.to_string(), response.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("port={port} addr={address} response={response}");
        }
        OutputFormat::Raw => {
            println!("{response}");
        }
    }
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    schema_id: &'a str,
    port: &'a str,
    address: u8,
    raw: &'a str,
    flags: Vec<&'static str>,
    needs_attention: bool,
    timestamp: String,
}

pub fn print_status(port: &str, address: u8, raw: &str, status: Status, format: OutputFormat) {
    let flags = status.describe();
    match format {
        OutputFormat::Json => {
            let out = StatusOutput {
                schema_id: "https://schemas.3leaps.dev/gpibprims/cli/v1/status.schema.json",
                port,
                address,
                raw,
                flags,
                needs_attention: status.needs_attention(),
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "ADDR", "STATUS", "FLAGS"])
                .add_row(vec![
                    port.to_string(),
                    address.to_string(),
                    raw.to_string(),
                    flags.join(", "),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("port={port} addr={address} status={raw} flags=[{}]", flags.join(", "));
        }
        OutputFormat::Raw => {
            println!("{raw}");
        }
    }
}

#[derive(Serialize)]
struct PortOutput<'a> {
    schema_id: &'a str,
    name: &'a str,
    kind: &'a str,
}

pub fn print_ports(ports: &[(String, &'static str)], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for (name, kind) in ports {
                let out = PortOutput {
                    schema_id: "https://schemas.3leaps.dev/gpibprims/cli/v1/port.schema.json",
                    name,
                    kind,
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "KIND"]);
            for (name, kind) in ports {
                table.add_row(vec![name.to_string(), kind.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for (name, kind) in ports {
                println!("{name}\t{kind}");
            }
        }
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
