use derive_more::Display;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = "INFO")]
    Info,
    #[display(fmt = "WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Position in [`LogLevel::ALL`], for storing a level in an atomic.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Self {
        Self::ALL.get(usize::from(rank)).copied().unwrap_or(LogLevel::Error)
    }
}

/// Where an entry comes from, named after the stage of a file load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    /// Validation and aggregation rules.
    #[display(fmt = "domain/{}", _0)]
    Domain(&'static str),
    /// One of the CSV readers.
    #[display(fmt = "csv/{}", _0)]
    Csv(&'static str),
    /// Dataset loading and diagnostics.
    #[display(fmt = "loader/{}", _0)]
    Loader(&'static str),
    /// JavaScript bridge and start-up.
    #[display(fmt = "api/{}", _0)]
    Api(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// 1-based file line the entry is about, for row diagnostics.
    pub line: Option<usize>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

pub trait TimeProvider: Send + Sync {
    /// Unix milliseconds.
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Entries below this level are dropped.
    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
    }

    /// Loggers without an adjustable threshold ignore this.
    fn set_min_level(&self, _level: LogLevel) {}

    fn skipped_row(&self, component: LogComponent, line: usize, reason: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, reason).at_line(line));
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// First call wins; the logger stays for the lifetime of the module.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| &**logger).unwrap_or(&SilentLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    TIME_PROVIDER.get().map(|clock| &**clock).unwrap_or(&UnsetClock)
}

/// Backs the logging macros.
#[doc(hidden)]
pub fn emit(level: LogLevel, component: LogComponent, message: String) {
    let logger = get_logger();
    if level >= logger.min_level() {
        logger.log(LogEntry::new(level, component, message));
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _entry: LogEntry) {}
}

struct UnsetClock;

impl TimeProvider for UnsetClock {
    fn current_timestamp(&self) -> u64 {
        0
    }

    fn format_timestamp(&self, _timestamp: u64) -> String {
        "--:--:--.---".to_string()
    }
}

// debug and info only reach the logger in debug builds; the arguments are
// still type-checked in release so nothing goes unused.
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                format!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Info,
                $component,
                format!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Warn,
            $component,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Error,
            $component,
            format!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rank_round_trips() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_rank(level.rank()), level);
        }
        assert_eq!(LogLevel::from_rank(200), LogLevel::Error);
    }

    #[test]
    fn components_name_the_load_stage() {
        assert_eq!(LogComponent::Csv("Candlestick").to_string(), "csv/Candlestick");
        assert_eq!(LogComponent::Loader("OrderBook").to_string(), "loader/OrderBook");
    }

    #[test]
    fn entry_carries_row_line() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Csv("Test"), "bad row").at_line(7);
        assert_eq!(entry.line, Some(7));
        assert_eq!(entry.message, "bad row");
    }
}
