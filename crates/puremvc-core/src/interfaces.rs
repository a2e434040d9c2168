//! # Component Interfaces
//!
//! The three tiers an application plugs into a scope. Each composes the
//! [`Notify`] capability.

use crate::error::HandlerResult;
use crate::notification::{Body, Notification};
use crate::notifier::Notify;

/// View-tier component registered with a [`View`](crate::View) by name.
pub trait Mediator: Notify + Send + Sync {
    /// Stable name, unique within the scope.
    fn mediator_name(&self) -> &str;

    /// Notification names this mediator wants to receive.
    ///
    /// Queried once at registration and once at removal.
    fn list_notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    fn handle_notification(&self, _note: &Notification) -> HandlerResult {
        Ok(())
    }

    fn on_register(&self) {}

    fn on_remove(&self) {}
}

/// Model-tier component registered with a [`Model`](crate::Model) by name.
pub trait Proxy: Notify + Send + Sync {
    fn proxy_name(&self) -> &str;

    /// The data object this proxy manages.
    fn data(&self) -> Option<Body> {
        None
    }

    fn on_register(&self) {}

    fn on_remove(&self) {}
}

/// Unit of work mapped to a notification name.
///
/// A fresh instance is produced for every matching broadcast.
pub trait Command: Notify + Send {
    fn execute(&self, note: &Notification) -> HandlerResult;
}
