//! Caller-owned run logger.
//!
//! A [`RunLog`] is created by whoever drives an edit and passed to the code
//! that wants to report progress. Messages go to `tracing` and, when a log
//! file is configured, are appended to that file as well.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{FfError, FfResult};

/// Timestamp layout: ISO-8601 date and time with milliseconds after a colon.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S:%3f";

#[derive(Debug)]
pub struct RunLog {
    log_file: Option<PathBuf>,
    prepend_timestamp: bool,
    warnings: Vec<String>,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLog {
    pub fn new() -> Self {
        Self {
            log_file: None,
            prepend_timestamp: true,
            warnings: Vec::new(),
        }
    }

    /// Also append every message to `path`.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.prepend_timestamp = enabled;
        self
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Warnings raised so far, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn format_line(&self, at: DateTime<Utc>, msg: &str) -> String {
        if self.prepend_timestamp {
            format!("{} {}", at.format(TIMESTAMP_FORMAT), msg)
        } else {
            msg.to_string()
        }
    }

    pub fn log_msg(&self, msg: &str) -> FfResult<()> {
        let line = self.format_line(Utc::now(), msg);
        tracing::info!("{}", line);
        self.append(&line)
    }

    pub fn show_warning(&mut self, msg: &str) -> FfResult<()> {
        tracing::warn!("{}", msg);
        self.warnings.push(msg.to_string());
        let line = self.format_line(Utc::now(), &format!("WARNING: {}", msg));
        self.append(&line)
    }

    fn append(&self, line: &str) -> FfResult<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| FfError::LogWrite {
                path: path.clone(),
                source,
            })?;
        write!(file, "\n{}", line).map_err(|source| FfError::LogWrite {
            path: path.clone(),
            source,
        })
    }
}
