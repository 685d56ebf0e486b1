use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full tracing filter spec; overrides
/// `--log-level` when set.
pub const LOG_ENV_VAR: &str = "GPIBPRIMS_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// `--log-level` applies to the gpibprims crates; dependencies stay at
/// warn so a `--log-level trace` run shows wire traffic, not serialport
/// internals.
fn default_directives(level: LogLevel) -> String {
    let directive = level.as_directive();
    format!(
        "warn,gpibprims={directive},gpibprims_transport={directive},\
         gpibprims_frame={directive},gpibprims_bus={directive},\
         gpibprims_hp2225={directive}"
    )
}

fn default_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(default_directives(level))
}

pub fn init_logging(format: LogFormat, level: LogLevel) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| default_filter(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
