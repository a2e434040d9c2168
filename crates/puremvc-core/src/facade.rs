//! # Facade
//!
//! Single entry point of a scope. Owns the scope's [`Model`], [`View`] and
//! [`Controller`] and forwards to them.

use crate::controller::Controller;
use crate::error::HandlerResult;
use crate::interfaces::{Command, Mediator, Proxy};
use crate::model::Model;
use crate::multiton::Scope;
use crate::notification::{Body, Notification};
use crate::view::View;
use std::sync::Arc;

pub struct Facade {
    scope: Scope,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
}

impl Facade {
    pub(crate) fn new(
        scope: Scope,
        model: Arc<Model>,
        view: Arc<View>,
        controller: Arc<Controller>,
    ) -> Self {
        Self {
            scope,
            model,
            view,
            controller,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.scope.key()
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    #[must_use]
    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    #[must_use]
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    // Commands

    pub fn register_command<F>(&self, notification_name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        self.controller.add_command(notification_name, factory);
    }

    pub fn remove_command(&self, notification_name: &str) {
        self.controller.remove_command(notification_name);
    }

    #[must_use]
    pub fn has_command(&self, notification_name: &str) -> bool {
        self.controller.has_command(notification_name)
    }

    // Proxies

    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    #[must_use]
    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.retrieve_proxy(proxy_name)
    }

    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(proxy_name)
    }

    #[must_use]
    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.model.has_proxy(proxy_name)
    }

    // Mediators

    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    #[must_use]
    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.retrieve_mediator(mediator_name)
    }

    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(mediator_name)
    }

    #[must_use]
    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.view.has_mediator(mediator_name)
    }

    // Notifications

    /// Build a notification and broadcast it in this scope.
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Body>,
        kind: Option<&str>,
    ) -> HandlerResult {
        let note = Notification::from_parts(name, body, kind.map(str::to_string));
        self.notify_observers(&note)
    }

    pub fn notify_observers(&self, note: &Notification) -> HandlerResult {
        self.view.notify_observers(note)
    }
}
