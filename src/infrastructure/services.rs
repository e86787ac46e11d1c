use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Console logger implementation for the WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(&self, entry: &LogEntry) -> String {
        let timestamp = BrowserTimeProvider::format(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => {
                format!(
                    "[{}] {} {} | {} | {}",
                    timestamp, entry.level, entry.component, entry.message, metadata
                )
            }
            None => {
                format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message)
            }
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            let formatted = self.format_log_entry(&entry);

            match entry.level {
                LogLevel::Trace | LogLevel::Debug => {
                    web_sys::console::debug_1(&formatted.into());
                }
                LogLevel::Info => {
                    web_sys::console::info_1(&formatted.into());
                }
                LogLevel::Warn => {
                    web_sys::console::warn_1(&formatted.into());
                }
                LogLevel::Error => {
                    web_sys::console::error_1(&formatted.into());
                }
            }
        }
    }
}

/// Browser-backed time provider for log timestamps
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }

    fn format(timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        Self::format(timestamp)
    }
}
