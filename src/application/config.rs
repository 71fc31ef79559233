use serde::{Deserialize, Serialize};

use crate::domain::logging::LogLevel;
use crate::infrastructure::csv::SkippedRow;

/// Below this many skipped rows the row numbers are shown to the user.
pub const DEFAULT_MAX_LISTED_ROWS: usize = 10;

/// Logger preset selected at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    #[default]
    Development,
    Production,
}

impl LogProfile {
    pub fn min_level(&self) -> LogLevel {
        match self {
            LogProfile::Development => LogLevel::Debug,
            LogProfile::Production => LogLevel::Info,
        }
    }
}

/// How skipped rows are reported back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsPolicy {
    pub max_listed_rows: usize,
}

impl Default for DiagnosticsPolicy {
    fn default() -> Self {
        Self { max_listed_rows: DEFAULT_MAX_LISTED_ROWS }
    }
}

/// Warning text for a set of skipped rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsSummary {
    /// Full message with every row number, for the log.
    pub detail: String,
    /// Message for the user: lists rows only when there are few of them.
    pub user_message: String,
    pub listed: bool,
}

impl DiagnosticsPolicy {
    pub fn summarize(&self, skipped: &[SkippedRow]) -> Option<DiagnosticsSummary> {
        if skipped.is_empty() {
            return None;
        }

        let rows = skipped
            .iter()
            .map(|row| row.line.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let detail = format!(
            "Warning: {} row(s) had invalid data and were skipped (rows: {}).",
            skipped.len(),
            rows
        );

        let listed = skipped.len() < self.max_listed_rows;
        let user_message = if listed {
            detail.clone()
        } else {
            format!(
                "Warning: {} row(s) had invalid data and were skipped.",
                skipped.len()
            )
        };

        Some(DiagnosticsSummary { detail, user_message, listed })
    }
}

/// Parser-side settings, loadable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub diagnostics: DiagnosticsPolicy,
    pub log_profile: LogProfile,
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
