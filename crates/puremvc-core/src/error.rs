//! Error types for the PureMVC core

use thiserror::Error;

/// Boxed error returned by application callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of delivering a notification to an observer, mediator or command.
pub type HandlerResult = Result<(), CoreError>;

/// Errors that can occur in the PureMVC core
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("View instance for multiton key '{key}' already constructed")]
    DuplicateView { key: String },

    #[error("Controller instance for multiton key '{key}' already constructed")]
    DuplicateController { key: String },

    #[error("Model instance for multiton key '{key}' already constructed")]
    DuplicateModel { key: String },

    #[error("Facade instance for multiton key '{key}' already constructed")]
    DuplicateFacade { key: String },

    #[error("Multiton key must not be empty")]
    InvalidKey,

    #[error("Multiton key for this notifier not yet initialized")]
    NotifierUninitialized,

    #[error("Multiton registry for key '{key}' has been dropped")]
    RegistryDropped { key: String },

    #[error("Notification handler failed: {0}")]
    Handler(#[source] BoxError),
}

impl CoreError {
    /// Wrap an application error raised inside a notification callback.
    pub fn handler(error: impl Into<BoxError>) -> Self {
        Self::Handler(error.into())
    }

    /// Whether this error reports a second construction for a used key.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateView { .. }
                | Self::DuplicateController { .. }
                | Self::DuplicateModel { .. }
                | Self::DuplicateFacade { .. }
        )
    }
}
