//! Unified error types for `LedgerDesk`.
//!
//! Expected failures are values, never panics: the gateway, the cache store,
//! and the channel all return [`Result`] and callers branch on the variant.
//! Display strings are user-facing - dispatchers surface them verbatim.

use thiserror::Error;

/// One field-level validation message from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field the message refers to (e.g. `"amount"`)
    pub field: String,
    /// Human-readable message for that field
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Crate-wide error type covering the full failure taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// No bearer token is available. Short-circuited before any network call.
    #[error("Authorization required: please log in again")]
    Authorization,

    /// Network unreachable or rate-limited. The view switches to read-only
    /// mode and the cache fallback is never consulted for this case.
    #[error("Error connecting to the server")]
    Connection {
        /// Transport detail kept for logs, not shown to users
        detail: String,
    },

    /// Structured field-level validation failure (HTTP 422).
    #[error("{}", join_field_errors(.errors))]
    Validation {
        /// Per-field messages as flattened from the response body
        errors: Vec<FieldError>,
    },

    /// Role check failed on the backend (HTTP 403).
    #[error("Only administrators can {action}")]
    Forbidden {
        /// The attempted action, e.g. `"approve budget requests"`
        action: String,
    },

    /// A record that should exist could not be found.
    #[error("Could not find {entity} {id}")]
    NotFound {
        /// Entity label, e.g. `"requisition"`
        entity: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// Approving a budget request would exceed an available balance.
    /// Dispatchers format the user-facing message from these fields.
    #[error("Insufficient budget available")]
    InsufficientBudget {
        /// Amount the request asked for
        requested: f64,
        /// Amount actually available
        available: f64,
        /// `"total"` or `"department"`
        budget_type: String,
        /// Department name when `budget_type == "department"`
        department: Option<String>,
    },

    /// Catch-all for unexpected backend responses.
    #[error("Error {verb} {entity}")]
    Gateway {
        /// Gerund describing the operation, e.g. `"creating"`
        verb: &'static str,
        /// Entity label, e.g. `"budget request"`
        entity: &'static str,
    },

    /// Real-time channel could not be set up or decoded an event.
    #[error("Channel error: {message}")]
    Channel {
        /// What went wrong
        message: String,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Local cache database error
    #[error("Cache store error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON (de)serialization error at the gateway/store boundary
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error outside the cache database
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Joins field-level messages into the single string shown when no
/// field-adjacent rendering is available.
fn join_field_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return "Validation failed".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Whether this error must disable all mutating controls for the page.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
