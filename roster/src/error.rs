//! Error types for the roster aggregation pipeline.
//!
//! - [`ParseError`] - Roster file reading and row parsing errors
//! - [`StatsError`] - Statistics finalization errors
//! - [`ExportError`] - Report rendering and CSV export errors
//! - [`MenuError`] - Interactive menu errors
//! - [`ConfigError`] - Configuration errors
//! - [`PipelineError`] - Top-level errors returned to the CLI
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Parsing Errors
// =============================================================================

/// Errors while reading the roster file or turning a row into a record.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A data row is missing required fields or has an unusable salary.
    #[error("{}", describe_row(.line, .column, .value, .department, .message))]
    MalformedRow {
        /// 1-based line number in the source file.
        line: usize,
        /// Name of the column that could not be read.
        column: &'static str,
        /// Raw value of that column, when the row had one.
        value: Option<String>,
        /// Department of the row, when it was already extracted.
        department: Option<String>,
        message: String,
    },

    /// Failed to read the roster file.
    #[error("Cannot read roster file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_row(
    line: &usize,
    column: &str,
    value: &Option<String>,
    department: &Option<String>,
    message: &str,
) -> String {
    let mut out = format!("Line {}, column '{}'", line, column);
    if let Some(value) = value {
        out.push_str(&format!(" (value '{}')", value));
    }
    if let Some(department) = department {
        out.push_str(&format!(" in department '{}'", department));
    }
    out.push_str(": ");
    out.push_str(message);
    out
}

impl ParseError {
    /// Build a malformed-row error for `column` at `line`.
    pub fn malformed(line: usize, column: &'static str, message: impl Into<String>) -> Self {
        ParseError::MalformedRow {
            line,
            column,
            value: None,
            department: None,
            message: message.into(),
        }
    }

    pub fn with_value(mut self, raw: impl Into<String>) -> Self {
        if let ParseError::MalformedRow { value, .. } = &mut self {
            *value = Some(raw.into());
        }
        self
    }

    pub fn with_department(mut self, name: impl Into<String>) -> Self {
        if let ParseError::MalformedRow { department, .. } = &mut self {
            *department = Some(name.into());
        }
        self
    }
}

// =============================================================================
// Statistics Errors
// =============================================================================

/// Errors while finalizing department accumulators.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// An accumulator reached finalization without any salary.
    #[error("Department '{department}' has no salaries to aggregate")]
    EmptyGroup { department: String },

    /// The employee count and the number of salaries disagree.
    #[error("Department '{department}' counts {count} employees but holds {salaries} salaries")]
    CountMismatch {
        department: String,
        count: usize,
        salaries: usize,
    },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while rendering or writing statistics reports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization or deserialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to write the output file.
    #[error("Cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered CSV was not valid UTF-8.
    #[error("Rendered report is not valid UTF-8")]
    Encoding,
}

// =============================================================================
// Menu Errors
// =============================================================================

/// Errors from the interactive menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Input is not a number in `1..=max`. Recovered by re-prompting.
    #[error("Invalid selection '{input}', expected a number from 1 to {max}")]
    InvalidSelection { input: String, max: usize },

    /// The user never made a valid selection.
    #[error("No valid selection after {0} attempts")]
    Exhausted(usize),

    /// Input closed before a selection was made.
    #[error("Input closed before an option was chosen")]
    EndOfInput,

    /// Terminal read/write failure.
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while resolving configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("Invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: String,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors surfaced to the CLI.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type ParseResult<T> = Result<T, ParseError>;

pub type StatsResult<T> = Result<T, StatsError>;

pub type ExportResult<T> = Result<T, ExportError>;

pub type MenuResult<T> = Result<T, MenuError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type PipelineResult<T> = Result<T, PipelineError>;
