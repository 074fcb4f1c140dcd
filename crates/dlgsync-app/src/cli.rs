use std::path::PathBuf;

use clap::Parser;
use dlgsync_config::LogLevel;

/// dlgsync: drive a host-rendered dialog over stdin/stdout.
///
/// Directives are written to stdout as JSON lines; click notifications
/// are read from stdin the same way. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "dlgsync", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error). Takes precedence
    /// over RUST_LOG and the config file.
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Title of the dialog to open.
    #[arg(short = 't', long, default_value = "Connect")]
    pub title: String,
}

pub fn parse() -> Args {
    Args::parse()
}
