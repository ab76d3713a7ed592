use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const RUN_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const FILE_PREFIX: &str = "api_request";

pub fn run_stamp(at: DateTime<Local>) -> String {
    at.format(RUN_STAMP_FORMAT).to_string()
}

/// Append-only text file holding the entries of one run.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Creates `<dir>/api_request_<stamp>.txt`, empty. An existing file is
    /// never reused; a numeric suffix is added instead.
    pub fn create(dir: &Path, stamp: &str) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;

        let mut attempt = 0u32;
        loop {
            let name = if attempt == 0 {
                format!("{}_{}.txt", FILE_PREFIX, stamp)
            } else {
                format!("{}_{}_{}.txt", FILE_PREFIX, stamp, attempt)
            };
            let path = dir.join(name);

            match OpenOptions::new().append(true).create_new(true).open(&path) {
                Ok(file) => return Ok(Self { path, file }),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to create output file {}", path.display()))
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one whole entry and flushes it. A failed write leaves the file
    /// as it was before the call.
    pub fn append(&mut self, data: &str) -> Result<()> {
        self.append_with(data, |file, bytes| {
            file.write_all(bytes)?;
            file.flush()
        })
    }

    pub(crate) fn append_with<W>(&mut self, data: &str, write: W) -> Result<()>
    where
        W: FnOnce(&mut File, &[u8]) -> io::Result<()>,
    {
        let prev_len = self
            .file
            .metadata()
            .with_context(|| format!("failed to stat {}", self.path.display()))?
            .len();

        if let Err(e) = write(&mut self.file, data.as_bytes()) {
            if let Err(trunc) = self.file.set_len(prev_len) {
                log::warn!(
                    "failed to roll back partial entry in {}: {}",
                    self.path.display(),
                    trunc
                );
            }
            return Err(e).with_context(|| format!("failed to append to {}", self.path.display()));
        }
        Ok(())
    }
}
