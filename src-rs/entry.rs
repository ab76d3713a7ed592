use chrono::{DateTime, Local};
use std::fmt;

pub const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful provider/model call, ready to be written out.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub prompt: &'a str,
    pub response: &'a str,
    pub timestamp: DateTime<Local>,
}

impl<'a> Entry<'a> {
    pub fn now(provider: &'a str, model: &'a str, prompt: &'a str, response: &'a str) -> Self {
        Self {
            provider,
            model,
            prompt,
            response,
            timestamp: Local::now(),
        }
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "API call to {} using model {} with prompt: {}",
            self.provider, self.model, self.prompt
        )?;
        writeln!(f, "Timestamp: {}", self.timestamp.format(ENTRY_TIMESTAMP_FORMAT))?;
        writeln!(f)?;
        writeln!(f, "Response:")?;
        writeln!(f, "{}", self.response)?;
        writeln!(f)
    }
}

pub fn format_entry(
    provider: &str,
    model: &str,
    prompt: &str,
    response: &str,
    timestamp: DateTime<Local>,
) -> String {
    Entry {
        provider,
        model,
        prompt,
        response,
        timestamp,
    }
    .to_string()
}
