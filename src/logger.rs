//! Logging for Memorabilia
//!
//! Log lines are kept in a shared in-memory buffer (shown by the logs dialog)
//! and, when logging is enabled in the config, appended to a log file. The
//! `log` facade is routed into the same sinks through a `fern` dispatch, so
//! `log::info!` and friends end up in both places.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this many lines
const MAX_LOG_ENTRIES: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

type SharedWriter = Arc<Mutex<FileSink>>;

/// Log file output that switches itself off after the first failed write
pub struct FileSink {
    writer: Option<Box<dyn Write + Send>>,
}

impl FileSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Write and flush one line. The error is returned once, then the sink stays off.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        let result = writeln!(writer, "{}", line).and_then(|()| writer.flush());
        if result.is_err() {
            self.writer = None;
        }
        result
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<SharedWriter>,
}

impl Logger {
    /// In-memory logger without a file sink
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
        }
    }

    /// Build a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// Enabled logger writing to `writer` instead of the log file
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
            file_writer: Some(Arc::new(Mutex::new(FileSink::new(writer)))),
        }
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("memorabilia").join("memorabilia.log"))
    }

    /// Route the `log` facade into this logger's sinks
    ///
    /// With `echo_stderr`, lines are also printed to stderr (for non-TUI
    /// commands). Can only succeed once per process.
    pub fn install(&self, level: log::LevelFilter, echo_stderr: bool) -> std::result::Result<(), log::SetLoggerError> {
        let logs = Arc::clone(&self.logs);
        let file_writer = self.file_writer.clone();

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {} {}: {}",
                    Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .level_for("hyper_util", log::LevelFilter::Info)
            .level_for("reqwest", log::LevelFilter::Info)
            .chain(fern::Output::call(move |record| {
                let line = record.args().to_string();
                write_to_file(file_writer.as_ref(), &logs, &line);
                push_bounded(&logs, line);
            }));

        if echo_stderr {
            dispatch = dispatch.chain(fern::Dispatch::new().level(log::LevelFilter::Info).chain(std::io::stderr()));
        }

        dispatch.apply()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<SharedWriter> {
        self.file_writer.clone()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        write_to_file(self.file_writer.as_ref(), &self.logs, &formatted_message);
        push_bounded(&self.logs, formatted_message);
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// The failure notice goes to the buffer only; the `log` facade would re-enter this sink
fn write_to_file(file_writer: Option<&SharedWriter>, logs: &Mutex<Vec<String>>, line: &str) {
    let Some(writer) = file_writer else {
        return;
    };
    let result = match writer.lock() {
        Ok(mut sink) => sink.write_line(line),
        Err(_) => return,
    };
    if let Err(error) = result {
        let notice = format!(
            "[{}] Log file disabled after write error: {}",
            Local::now().format(TIMESTAMP_FORMAT),
            error
        );
        push_bounded(logs, notice);
    }
}

fn push_bounded(logs: &Mutex<Vec<String>>, line: String) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            let overflow = logs.len() + 1 - MAX_LOG_ENTRIES;
            logs.drain(..overflow);
        }
        logs.push(line);
    }
}
