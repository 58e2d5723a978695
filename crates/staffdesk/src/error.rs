//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and store failures into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use staffdesk_config::ConfigError;
use staffdesk_core::{CoreError, ErrorKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Store actions ────────────────────────────────────────────────
    /// A store action failed. `message` is the store's user-facing text.
    #[error("{message}")]
    #[diagnostic(
        code(staffdesk::action_failed),
        help("Re-run with -v to see the underlying request error.")
    )]
    ActionFailed {
        message: String,
        kind: Option<ErrorKind>,
    },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the API at {url}")]
    #[diagnostic(
        code(staffdesk::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(staffdesk::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout,

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    #[diagnostic(code(staffdesk::api_error))]
    Api { message: String, status: Option<u16> },

    #[error("{message}")]
    #[diagnostic(
        code(staffdesk::not_found),
        help("Run: staffdesk {list_command} to see what exists")
    )]
    NotFound {
        message: String,
        list_command: String,
    },

    // ── Routes ───────────────────────────────────────────────────────
    #[error("No route matches '{path}'")]
    #[diagnostic(code(staffdesk::unknown_route), help("Run: staffdesk routes list"))]
    UnknownRoute { path: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(staffdesk::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(staffdesk::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: staffdesk config init --name {name} --url <API_URL>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No API URL configured")]
    #[diagnostic(
        code(staffdesk::no_config),
        help(
            "Pass --api-url, set STAFFDESK_API_URL, or create a profile with:\n\
             staffdesk config init --url http://localhost:8080/api\n\
             Config file: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(staffdesk::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(staffdesk::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(staffdesk::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(staffdesk::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ActionFailed { kind, .. } => kind.map_or(exit_code::GENERAL, kind_exit_code),
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::UnknownRoute { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. }
            | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// A store action failure, keeping the store's message as the headline.
    pub fn action_failed(message: impl Into<String>, kind: Option<ErrorKind>) -> Self {
        Self::ActionFailed {
            message: message.into(),
            kind,
        }
    }
}

fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Connection => exit_code::CONNECTION,
        ErrorKind::Timeout => exit_code::TIMEOUT,
        ErrorKind::NotFound => exit_code::NOT_FOUND,
        ErrorKind::Config => exit_code::USAGE,
        ErrorKind::Rejected | ErrorKind::Api { .. } | ErrorKind::Internal => exit_code::GENERAL,
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout => CliError::Timeout,
            CoreError::NotFound { message } => CliError::NotFound {
                message,
                list_command: "dashboard".into(),
            },
            CoreError::Rejected { message } => CliError::Api {
                message,
                status: None,
            },
            CoreError::Api { message, status } => CliError::Api { message, status },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Api {
                message,
                status: None,
            },
        }
    }
}
