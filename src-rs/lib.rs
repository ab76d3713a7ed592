#![deny(clippy::all)]

pub mod config;
pub mod entry;
pub mod error;
pub mod llm;
pub mod output;
pub mod runner;

pub mod cons {
    pub mod provider_cons;
}


use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

pub use config::{ProviderSection, RunSettings, SweepConfig};
pub use error::{ConfigError, ProviderError};
pub use llm::models::provider_handle::{Dispatcher, EnvDispatcher};
pub use output::OutputFile;
pub use runner::{run_sweep, CallFailure, RunSummary};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {t} - {l} - {m}{n}";

/// Transport crates whose INFO/DEBUG chatter is dropped.
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "h2", "rustls"];

/// Installs the process-wide logger. `LOG4RS_CONFIG` takes precedence when it
/// points at a loadable file; otherwise logs go to
/// `<log_dir>/api_request_<stamp>.log`. Returns where logs are written.
pub fn init_logger(log_dir: &Path, stamp: &str) -> Result<PathBuf> {
    if let Ok(config_path) = std::env::var("LOG4RS_CONFIG") {
        match log4rs::init_file(&config_path, Default::default()) {
            Ok(()) => return Ok(PathBuf::from(config_path)),
            Err(e) => eprintln!(
                "[INIT] Failed to load {}, falling back to default config: {}",
                config_path, e
            ),
        }
    }

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join(format!("api_request_{}.log", stamp));

    let config = logger_config(&log_path)?;
    log4rs::init_config(config).context("failed to install logger")?;
    Ok(log_path)
}

pub(crate) fn logger_config(log_path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(false)
        .build(log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    let mut builder =
        Config::builder().appender(Appender::builder().build("logfile", Box::new(logfile)));
    for target in QUIET_TARGETS {
        builder = builder.logger(Logger::builder().build(*target, LevelFilter::Warn));
    }

    builder
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))
        .context("failed to build logger config")
}
