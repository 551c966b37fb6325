//! Logging helpers.
//!
//! Engine functions do not log through the global [log] facade directly, they
//! take a `&dyn log::Log` instead. Applications will usually pass
//! [log::logger()], tests may pass [MemoryLogger] and inspect what was
//! reported.

use log::{Level, Log, Metadata, Record};
use std::sync::Mutex;

/// Logs a formatted message to given `&dyn log::Log`, with current module as
/// target.
///
/// ```
/// # use web_static_bundle_common::{log_to, logging::MemoryLogger};
/// # use log::Level;
/// let logger = MemoryLogger::new();
/// log_to!(&logger, Level::Warn, "unable to read {}", "logo.png");
/// assert!(logger.contains(Level::Warn, "logo.png"));
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log::Log::log(
            $logger,
            &$crate::log::Record::builder()
                .args(format_args!($($arg)+))
                .level($level)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .build(),
        )
    };
}

/// [Log] implementation keeping all records in memory.
#[derive(Debug)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}
impl MemoryLogger {
    /// Creates empty [self].
    pub fn new() -> Self {
        let records = Mutex::new(Vec::new());

        Self { records }
    }

    /// Returns all collected records as (level, message) pairs.
    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Whether any record on `level` contains `needle` in its message.
    pub fn contains(
        &self,
        level: Level,
        needle: &str,
    ) -> bool {
        self.records()
            .iter()
            .any(|(record_level, message)| *record_level == level && message.contains(needle))
    }
}
impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}
impl Log for MemoryLogger {
    fn enabled(
        &self,
        _metadata: &Metadata,
    ) -> bool {
        true
    }

    fn log(
        &self,
        record: &Record,
    ) {
        let entry = (record.level(), record.args().to_string());
        match self.records.lock() {
            Ok(mut records) => records.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }

    fn flush(&self) {}
}
