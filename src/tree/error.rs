//! Route tree error types.

use thiserror::Error;

/// Errors raised while building, compiling or querying a route tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("route node '{parent}' already has a child named '{name}'")]
    DuplicateChildName { parent: String, name: String },

    #[error("route node '{0}' not found")]
    NodeNotFound(String),

    #[error("route node '{node}' does not have an action named '{action}'")]
    ActionNotFound { node: String, action: String },

    #[error("route node '{node}' does not have any action to generate a URL to")]
    NoActionAvailable { node: String },

    #[error("route node '{node}' is not available in locale '{locale}'")]
    LocaleNotAvailable { node: String, locale: String },

    #[error("missing URL parameters for route '{route}': {}", .missing.join(", "))]
    MissingUrlParameter { route: String, missing: Vec<String> },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl TreeError {
    /// True for the "no such action" family, including nodes without actions.
    pub fn is_action_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::ActionNotFound { .. } | TreeError::NoActionAvailable { .. }
        )
    }
}

/// Result type for route tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
