//! Structured error output.
//!
//! Provides machine-parseable error information with:
//! - Error codes for categorization
//! - Hints for self-correction
//! - Exit codes grouped by category

use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// Machine-readable error codes.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: `SCREAMING_SNAKE_CASE` for easy parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // === Usage Errors (exit code 1) ===
    /// Wrong argument count or unknown flag
    UsageError,

    // === I/O Errors (exit code 2) ===
    /// Input file does not exist
    FileNotFound,
    /// Input file could not be read, or stdout could not be written
    IoError,

    // === Input Errors (exit code 3) ===
    /// Input is not well-formed JSON
    ParseError,
    /// Required field missing from the document or a record
    MissingField,

    // === Comparison Errors (exit code 4) ===
    /// Baseline mean is zero
    DivisionByZero,

    // === Config Errors (exit code 5) ===
    /// Configuration value rejected
    ConfigError,
    /// Config file parse error
    ConfigParseError,
}

impl ErrorCode {
    /// Get the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UsageError => "USAGE_ERROR",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::IoError => "IO_ERROR",
            Self::ParseError => "PARSE_ERROR",
            Self::MissingField => "MISSING_FIELD",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ConfigParseError => "CONFIG_PARSE_ERROR",
        }
    }

    /// Get the exit code for this error category.
    ///
    /// - 1: Usage errors
    /// - 2: I/O errors
    /// - 3: Malformed input
    /// - 4: Undefined comparison
    /// - 5: Config errors
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError => 1,
            Self::FileNotFound | Self::IoError => 2,
            Self::ParseError | Self::MissingField => 3,
            Self::DivisionByZero => 4,
            Self::ConfigError | Self::ConfigParseError => 5,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error ready to be shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StructuredError {
    /// Create from a `CompareError`.
    #[must_use]
    pub fn from_error(err: &CompareError) -> Self {
        Self {
            code: Self::code_for(err),
            message: err.to_string(),
            hint: err.suggestion().map(str::to_string),
        }
    }

    fn code_for(err: &CompareError) -> ErrorCode {
        match err {
            CompareError::Usage { .. } => ErrorCode::UsageError,
            CompareError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::FileNotFound
            }
            CompareError::Io { .. } | CompareError::Output(_) => ErrorCode::IoError,
            CompareError::Parse { .. } => ErrorCode::ParseError,
            CompareError::MissingBenchmarks { .. } | CompareError::InvalidRecord { .. } => {
                ErrorCode::MissingField
            }
            CompareError::ZeroBaseline { .. } => ErrorCode::DivisionByZero,
            CompareError::Config(_) => ErrorCode::ConfigError,
            CompareError::ConfigParse { .. } => ErrorCode::ConfigParseError,
        }
    }

    /// Render for a terminal, with ANSI color when `color` is set.
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut output = String::new();

        if color {
            // Red for error
            output.push_str("\x1b[31mError:\x1b[0m ");
        } else {
            output.push_str("Error: ");
        }

        output.push_str(&self.message);

        if let Some(hint) = &self.hint {
            output.push('\n');
            if color {
                // Yellow for hint
                output.push_str("\x1b[33mHint:\x1b[0m ");
            } else {
                output.push_str("Hint: ");
            }
            output.push_str(hint);
        }

        output
    }
}
