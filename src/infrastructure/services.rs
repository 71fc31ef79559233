use chrono::DateTime;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Logger writing to the browser console on wasm and to stderr elsewhere.
///
/// The threshold can be moved after installation, so a parser
/// configuration applied later still decides what is printed.
pub struct ConsoleLogger {
    min_level: AtomicU8,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level: AtomicU8::new(min_level.rank()) }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// `[12:00:01.250] WARN csv/Candlestick | line 4 | minimum (12) > maximum (9)`
    pub fn format_log_entry(&self, entry: &LogEntry) -> String {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        match entry.line {
            Some(line) => format!(
                "[{}] {} {} | line {} | {}",
                timestamp, entry.level, entry.component, line, entry.message
            ),
            None => format!(
                "[{}] {} {} | {}",
                timestamp, entry.level, entry.component, entry.message
            ),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level() {
            return;
        }
        let formatted = self.format_log_entry(&entry);

        #[cfg(target_arch = "wasm32")]
        {
            let message = wasm_bindgen::JsValue::from_str(&formatted);
            match entry.level {
                LogLevel::Debug => web_sys::console::debug_1(&message),
                LogLevel::Info => web_sys::console::info_1(&message),
                LogLevel::Warn => web_sys::console::warn_1(&message),
                LogLevel::Error => web_sys::console::error_1(&message),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", formatted);
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::from_rank(self.min_level.load(Ordering::Relaxed))
    }

    fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level.rank(), Ordering::Relaxed);
    }
}

/// Wall clock in Unix milliseconds: `Date.now()` in the browser, the
/// system clock natively.
pub struct ClockTimeProvider;

impl ClockTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClockTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for ClockTimeProvider {
    fn current_timestamp(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or_default()
        }
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        i64::try_from(timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_else(|| timestamp.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn formats_utc_clock_time() {
        assert_eq!(ClockTimeProvider::new().format_timestamp(3_723_004), "01:02:03.004");
    }

    #[test]
    fn threshold_follows_set_min_level() {
        let logger = ConsoleLogger::new_development();
        assert_eq!(logger.min_level(), LogLevel::Debug);
        logger.set_min_level(LogLevel::Info);
        assert_eq!(logger.min_level(), LogLevel::Info);
        // Below the threshold: returns without printing.
        logger.log(LogEntry::new(LogLevel::Debug, LogComponent::Domain("Test"), "hidden"));
        assert_eq!(ConsoleLogger::new_production().min_level(), LogLevel::Info);
    }

    #[test]
    fn skipped_rows_show_their_line() {
        let logger = ConsoleLogger::new_development();
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Csv("Candlestick"), "row skipped").at_line(4);
        assert!(logger.format_log_entry(&entry).ends_with(" WARN csv/Candlestick | line 4 | row skipped"));

        let entry = LogEntry::new(LogLevel::Info, LogComponent::Loader("Candles"), "Loaded 3 record(s)");
        assert!(logger.format_log_entry(&entry).ends_with(" INFO loader/Candles | Loaded 3 record(s)"));
    }
}
