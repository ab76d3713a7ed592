use crate::config::SweepConfig;
use crate::entry::Entry;
use crate::llm::models::provider_handle::Dispatcher;
use crate::output::OutputFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFailure {
    pub provider: String,
    pub model: String,
    pub kind: &'static str,
    pub detail: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: Vec<CallFailure>,
    pub skipped_providers: usize,
}

/// Queries every included provider/model once, in config order, appending
/// an entry per success. Individual failures are logged and recorded in the
/// summary; they never stop the run.
pub fn run_sweep<D: Dispatcher + ?Sized>(
    config: &SweepConfig,
    dispatcher: &D,
    output: &mut OutputFile,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let prompt = config.prompt.as_str();

    for provider in &config.providers {
        if !provider.include {
            summary.skipped_providers += 1;
            continue;
        }

        let provider_name = provider.name.as_str();
        log::info!("Using provider: {}", provider_name);
        for model in &provider.models {
            log::info!(
                "Requesting response from {} using model {}",
                provider_name,
                model
            );

            let outcome = dispatcher
                .dispatch(provider_name, model, prompt)
                .map_err(|e| (e.kind(), e.to_string()))
                .and_then(|response| {
                    let entry = Entry::now(provider_name, model, prompt, &response);
                    output
                        .append(&entry.to_string())
                        .map_err(|e| ("io", format!("{:#}", e)))
                });

            match outcome {
                Ok(()) => {
                    log::info!(
                        "Response from {} using model {} written to file.",
                        provider_name,
                        model
                    );
                    summary.succeeded += 1;
                }
                Err((kind, detail)) => {
                    log::error!(
                        "Error while querying {} with model {}: {}",
                        provider_name,
                        model,
                        detail
                    );
                    summary.failed.push(CallFailure {
                        provider: provider_name.to_string(),
                        model: model.clone(),
                        kind,
                        detail,
                    });
                }
            }
        }
    }

    summary
}
