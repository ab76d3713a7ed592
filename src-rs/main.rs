use anyhow::{Context, Result};
use chrono::Local;

use prompt_sweep::output::run_stamp;
use prompt_sweep::{init_logger, run_sweep, EnvDispatcher, OutputFile, RunSettings, SweepConfig};

fn main() -> Result<()> {
    let settings = RunSettings::from_env();
    let stamp = run_stamp(Local::now());

    init_logger(&settings.log_dir, &stamp)?;

    log::info!("Loading config file...");
    let config = match SweepConfig::load(&settings.config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return Err(e).context("cannot start run without a valid config");
        }
    };

    let mut output = OutputFile::create(&settings.data_dir, &stamp)?;
    log::info!("Output file created: {}", output.path().display());

    let dispatcher = EnvDispatcher::default();
    let summary = run_sweep(&config, &dispatcher, &mut output);

    log::info!(
        "Run finished: {} succeeded, {} failed, {} providers skipped",
        summary.succeeded,
        summary.failed.len(),
        summary.skipped_providers
    );
    Ok(())
}
