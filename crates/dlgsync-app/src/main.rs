mod cli;
mod session;

use std::process::ExitCode;

use dlgsync_config::LogLevel;
use tracing_subscriber::EnvFilter;

/// `--log-level` wins, then RUST_LOG, then the config file level.
fn log_filter(cli: Option<LogLevel>, configured: LogLevel) -> EnvFilter {
    match cli {
        Some(level) => EnvFilter::new(level.directive()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.directive())),
    }
}

fn init_logging(filter: EnvFilter) {
    // stdout carries the protocol, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = dlgsync_config::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => dlgsync_config::DlgsyncConfig::default(),
    };

    init_logging(log_filter(args.log_level, config.logging.level));

    tracing::info!("dlgsync v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match session::run(&config, &args.title).await {
        Ok(Some(outcome)) => {
            tracing::info!(?outcome, "Session complete");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            tracing::info!("Session ended without a choice");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Session error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_maps_to_scoped_directive() {
        let filter = log_filter(Some(LogLevel::Warning), LogLevel::Debug);
        assert_eq!(filter.to_string(), "dlgsync=warn");
    }

    #[test]
    fn every_level_builds_a_filter() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            assert_eq!(log_filter(Some(level), LogLevel::Info).to_string(), level.directive());
        }
    }
}
