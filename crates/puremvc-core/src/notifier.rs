//! # Notifier
//!
//! The capability shared by mediators, proxies and commands: knowing which
//! scope they belong to and sending notifications into it.
//!
//! Concrete types hold a [`Notifier`] value and expose it through
//! [`Notify::notifier`]; the trait supplies the forwarding methods.

use crate::error::{CoreError, HandlerResult};
use crate::facade::Facade;
use crate::multiton::Scope;
use crate::notification::Body;
use parking_lot::RwLock;
use std::sync::Arc;

/// Holds the scope an object was registered into.
#[derive(Default)]
pub struct Notifier {
    scope: RwLock<Option<Scope>>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the owning scope. A later call replaces the earlier one.
    pub fn initialize(&self, scope: &Scope) {
        *self.scope.write() = Some(scope.clone());
    }

    /// The recorded scope.
    ///
    /// # Errors
    ///
    /// `CoreError::NotifierUninitialized` before [`Notifier::initialize`].
    pub fn scope(&self) -> Result<Scope, CoreError> {
        self.scope
            .read()
            .clone()
            .ok_or(CoreError::NotifierUninitialized)
    }

    /// The multiton key, if initialized.
    #[must_use]
    pub fn multiton_key(&self) -> Option<String> {
        self.scope.read().as_ref().map(|s| s.key().to_string())
    }

    /// The facade of the recorded scope.
    pub fn facade(&self) -> Result<Arc<Facade>, CoreError> {
        self.scope()?.facade()
    }

    /// Build a notification and broadcast it through the scope's facade.
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Body>,
        kind: Option<&str>,
    ) -> HandlerResult {
        self.facade()?.send_notification(name, body, kind)
    }
}

/// Capability interface for anything that sends notifications.
pub trait Notify {
    /// The composed notifier.
    fn notifier(&self) -> &Notifier;

    /// Called by the registry that takes ownership of this object.
    fn initialize_notifier(&self, scope: &Scope) {
        self.notifier().initialize(scope);
    }

    fn facade(&self) -> Result<Arc<Facade>, CoreError> {
        self.notifier().facade()
    }

    fn send_notification(&self, name: &str, body: Option<Body>, kind: Option<&str>) -> HandlerResult {
        self.notifier().send_notification(name, body, kind)
    }
}
