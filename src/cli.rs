use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Scan C sources into logical lines and dump them with the location of every character.
#[derive(Debug, Parser)]
#[command(name = "cscan", version)]
pub struct Args {
    /// C source files to scan
    #[arg(value_name = "FILE", default_value = "demo.c")]
    pub files: Vec<PathBuf>,

    /// Log level for scanner internals, written to stderr. RUST_LOG takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}
