/// Debug console log capture
///
/// Log records from the host and the palette crate are kept in a bounded
/// ring buffer the debug console renders. Terminal output stays at Error
/// level so the alternate screen is not disturbed.
use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// Modules captured when RUST_LOG is not set
const CAPTURED_MODULES: [&str; 2] = ["tab_butler", "tab_butler_palette"];

/// A single captured record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between logger and UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

pub struct DebugConsoleLogger {
    logs: LogBuffer,
    terminal: env_logger::Logger,
    console_filter: env_logger::Logger,
}

impl DebugConsoleLogger {
    pub fn new(logs: LogBuffer) -> Self {
        let terminal = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Error)
            .build();

        // RUST_LOG wins; otherwise only our own crates at Debug
        let console_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            let mut builder = env_logger::Builder::new();
            for module in CAPTURED_MODULES {
                builder.filter_module(module, LevelFilter::Debug);
            }
            builder.build()
        };

        Self {
            logs,
            terminal,
            console_filter,
        }
    }

    pub fn create_buffer() -> LogBuffer {
        Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
    }
}

/// Append an entry, evicting the oldest once the buffer is full
fn push_entry(logs: &LogBuffer, entry: LogEntry) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }
}

impl Log for DebugConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console_filter.enabled(metadata) || self.terminal.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console_filter.enabled(record.metadata()) {
            push_entry(
                &self.logs,
                LogEntry {
                    timestamp: Utc::now(),
                    level: record.level(),
                    target: record.target().to_string(),
                    message: record.args().to_string(),
                },
            );
        }

        if self.terminal.enabled(record.metadata()) {
            self.terminal.log(record);
        }
    }

    fn flush(&self) {
        self.terminal.flush();
    }
}

/// Install the debug console logger
///
/// Must run once before any logging happens. Returns the buffer the
/// debug console reads from.
///
/// Without RUST_LOG the console shows Debug+ records from `tab_butler` and
/// `tab_butler_palette` only. With RUST_LOG set its directives are used
/// as-is, e.g. `RUST_LOG=tab_butler_palette::overlay=trace`.
pub fn init_logger() -> LogBuffer {
    let logs = DebugConsoleLogger::create_buffer();
    let logger = DebugConsoleLogger::new(logs.clone());

    log::set_boxed_logger(Box::new(logger)).expect("Failed to initialize logger");
    log::set_max_level(LevelFilter::Trace);

    log::info!("Debug console initialized - press ` to toggle");

    logs
}
