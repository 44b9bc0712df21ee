//! Error types for wmt.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors fall into three kinds:
//! - **ArgumentValidation**: bad command token, unknown or malformed option,
//!   missing required input, invalid format value, configuration problems.
//!   Option-binding syntax failures are normalized into this kind before a
//!   command runs.
//! - **Io**: failures wrapping the remote API call or the filesystem, with
//!   the original cause preserved. Never retried.
//! - **Internal**: states unreachable by construction. Reaching one is a
//!   defect, not a user error.

use thiserror::Error;

// =============================================================================
// Error Kinds
// =============================================================================

/// High-level error classification.
///
/// Drives exit-code mapping and the dispatcher's error logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// User-supplied input was invalid (command token, options, config).
    ArgumentValidation,
    /// The remote call or a filesystem operation failed.
    Io,
    /// A state that should be unreachable by construction.
    Internal,
}

impl ErrorKind {
    /// Human-readable label used in rendered errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ArgumentValidation => "invalid argument",
            Self::Io => "I/O error",
            Self::Internal => "internal error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Remote call or filesystem failure
    GeneralError = 1,
    /// Invalid command token, options, or configuration
    UsageError = 2,
    /// Defect: a state that should have been unreachable
    InternalError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for wmt operations.
#[derive(Error, Debug)]
pub enum WmtError {
    // ==========================================================================
    // Argument-validation errors
    // ==========================================================================
    /// Command token missing the namespace prefix, or no matching entry in
    /// the registry.
    #[error("unknown command: '{0}'")]
    InvalidCommand(String),

    /// Bad or missing option value, invalid format name, missing mandatory
    /// file path.
    #[error("{0}")]
    InvalidArgument(String),

    /// A required option was not supplied.
    #[error("missing required option: -{0}")]
    MissingOption(String),

    /// Configuration file or credential problem.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // I/O-class errors
    // ==========================================================================
    /// The API returned a non-success status.
    #[error("API error{}: {message}", .code.map_or_else(String::new, |c| format!(" (HTTP {c})")))]
    Api { code: Option<u16>, message: String },

    /// Transport-level failure reaching the API.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// The requested endpoint was permanently retired by the API.
    #[error("endpoint permanently retired: {0}")]
    EndpointRetired(String),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==========================================================================
    // Programming-error-class failures
    // ==========================================================================
    /// A state that validation should have made unreachable.
    #[error("internal error: {0}")]
    Internal(String),

    // ==========================================================================
    // Generic wrapper
    // ==========================================================================
    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WmtError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCommand(_)
            | Self::InvalidArgument(_)
            | Self::MissingOption(_)
            | Self::Config(_) => ErrorKind::ArgumentValidation,

            Self::Api { .. }
            | Self::Network(_)
            | Self::Timeout(_)
            | Self::EndpointRetired(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ErrorKind::Io,

            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Map this error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::ArgumentValidation => ExitCode::UsageError,
            ErrorKind::Io => ExitCode::GeneralError,
            ErrorKind::Internal => ExitCode::InternalError,
        }
    }

    /// Render the full cause chain, outermost first.
    ///
    /// Used by the dispatcher when logging argument-validation and I/O-class
    /// failures at error severity.
    #[must_use]
    pub fn cause_chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

/// Result type alias for wmt operations.
pub type Result<T> = std::result::Result<T, WmtError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_have_correct_kind() {
        assert_eq!(
            WmtError::InvalidCommand("foo.bar".to_string()).kind(),
            ErrorKind::ArgumentValidation
        );
        assert_eq!(
            WmtError::InvalidArgument("bad".to_string()).kind(),
            ErrorKind::ArgumentValidation
        );
        assert_eq!(
            WmtError::MissingOption("siteUrl".to_string()).kind(),
            ErrorKind::ArgumentValidation
        );
        assert_eq!(
            WmtError::Config("no file".to_string()).kind(),
            ErrorKind::ArgumentValidation
        );
    }

    #[test]
    fn io_errors_have_correct_kind() {
        assert_eq!(
            WmtError::Api {
                code: Some(500),
                message: "boom".to_string()
            }
            .kind(),
            ErrorKind::Io
        );
        assert_eq!(WmtError::Network("reset".to_string()).kind(), ErrorKind::Io);
        assert_eq!(WmtError::Timeout(30).kind(), ErrorKind::Io);
        assert_eq!(
            WmtError::EndpointRetired("webmasters.urlcrawlerrorscounts.query".to_string()).kind(),
            ErrorKind::Io
        );
        let io = WmtError::Io(std::io::Error::other("disk"));
        assert_eq!(io.kind(), ErrorKind::Io);
    }

    #[test]
    fn internal_errors_have_correct_kind() {
        assert_eq!(
            WmtError::Internal("unreachable".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(
            WmtError::InvalidCommand("x".to_string()).exit_code(),
            ExitCode::UsageError
        );
        assert_eq!(
            WmtError::Network("x".to_string()).exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(
            WmtError::Internal("x".to_string()).exit_code(),
            ExitCode::InternalError
        );
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::UsageError), 2);
    }

    #[test]
    fn api_error_display_includes_http_code() {
        let err = WmtError::Api {
            code: Some(404),
            message: "site not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("site not found"));

        let err = WmtError::Api {
            code: None,
            message: "no body".to_string(),
        };
        assert!(!err.to_string().contains("HTTP"));
    }

    #[test]
    fn missing_option_names_the_option() {
        let err = WmtError::MissingOption("siteUrl".to_string());
        assert!(err.to_string().contains("-siteUrl"));
    }

    #[test]
    fn cause_chain_walks_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WmtError::Io(inner);
        let chain = err.cause_chain();
        assert!(chain.contains("denied"));
    }
}
