//! Error taxonomy shared by every bridge adapter.
//!
//! All variants are terminal for the call that raised them. Adapters hold no
//! persistent state, so there is nothing to recover and nothing is retried.

/// Result alias used throughout the bridge contract.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced to the host by bridge adapters and framework helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// Raised on purpose when a request carries an `error` parameter.
    /// Displays as the bare message so callers see exactly what they asked for.
    #[error("{message}")]
    Simulated { message: String },

    /// The query template could not be scanned.
    #[error("malformed query template at byte {position}: {reason}")]
    Template { position: usize, reason: String },

    /// A value that must be an integer could not be parsed.
    #[error("the '{name}' value must be an integer, got {value:?}")]
    InvalidParameter { name: String, value: String },

    /// A records-template entry is not a `NAME:VALUE` pair.
    #[error(
        "Attributes must be specified using comma separated NAME:VALUE pairs, \
         the attribute '{attribute}' is not valid."
    )]
    InvalidAttribute { attribute: String },

    /// `offset` or `pageSize` metadata is negative or not an integer.
    #[error("invalid pagination metadata '{key}' = {value:?}: {reason}")]
    Pagination {
        key: String,
        value: String,
        reason: String,
    },

    /// Adapter properties failed validation during initialization.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No adapter factory is registered under the requested name.
    #[error("unknown adapter: {name}")]
    UnknownAdapter { name: String },
}

impl BridgeError {
    /// Builds a [`BridgeError::Simulated`] carrying `message` verbatim.
    #[must_use]
    pub fn simulated(message: impl Into<String>) -> Self {
        Self::Simulated {
            message: message.into(),
        }
    }

    /// Whether this error was requested by the caller rather than caused by bad input.
    #[must_use]
    pub fn is_simulated(&self) -> bool {
        matches!(self, Self::Simulated { .. })
    }
}
