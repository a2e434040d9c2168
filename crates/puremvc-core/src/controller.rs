//! # Controller
//!
//! The command dispatcher of one scope. Maps notification names to command
//! factories and subscribes itself to the scope's [`View`] once per mapped
//! name. Every matching broadcast builds a fresh command and runs it on the
//! broadcasting thread.

use crate::error::HandlerResult;
use crate::interfaces::Command;
use crate::multiton::Scope;
use crate::notification::Notification;
use crate::observer::{NotifyContext, Observer};
use crate::view::View;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Produces a fresh command instance.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// Per-scope command dispatcher.
pub struct Controller {
    scope: Scope,
    view: Arc<View>,
    command_map: RwLock<HashMap<String, CommandFactory>>,
    /// Back-reference used as the notify context of this controller's observers.
    this: Weak<Controller>,
}

impl Controller {
    pub(crate) fn new(scope: Scope, view: Arc<View>) -> Arc<Self> {
        debug!(key = %scope.key(), "Controller initialized");
        Arc::new_cyclic(|this| Self {
            scope,
            view,
            command_map: RwLock::new(HashMap::new()),
            this: this.clone(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.scope.key()
    }

    /// The view this controller subscribes through.
    #[must_use]
    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    /// Run the command mapped to `note`'s name, if any.
    pub fn execute_command(&self, note: &Notification) -> HandlerResult {
        if note.name().is_empty() {
            return Ok(());
        }

        let Some(factory) = self.command_map.read().get(note.name()).cloned() else {
            return Ok(());
        };

        trace!(key = %self.key(), notification = note.name(), "Executing command");
        let command = factory();
        command.initialize_notifier(&self.scope);
        command.execute(note)
    }

    /// Map `notification_name` to `factory`, replacing any earlier mapping.
    ///
    /// The controller observes each name at most once however often the
    /// mapping is replaced. An empty name is never dispatched and is ignored.
    pub fn add_command<F>(&self, notification_name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        if notification_name.is_empty() {
            debug!(key = %self.key(), "Ignoring command mapping for empty notification name");
            return;
        }

        // Held across the subscription: the mapping and its observer change together.
        let mut map = self.command_map.write();
        let previous = map.insert(notification_name.to_string(), Arc::new(factory));

        if previous.is_none() {
            let observer =
                Observer::bound_weak(self.this.clone(), |c: &Controller, note| c.execute_command(note));
            self.view.register_observer(notification_name, observer);
            debug!(key = %self.key(), notification = notification_name, "Command mapped");
        } else {
            debug!(key = %self.key(), notification = notification_name, "Command mapping replaced");
        }
    }

    /// Map `notification_name` to `C::default`.
    pub fn register_command<C>(&self, notification_name: &str)
    where
        C: Command + Default + 'static,
    {
        self.add_command(notification_name, || Box::new(C::default()) as Box<dyn Command>);
    }

    #[must_use]
    pub fn has_command(&self, notification_name: &str) -> bool {
        self.command_map.read().contains_key(notification_name)
    }

    /// Drop the mapping for `notification_name` and stop observing it.
    pub fn remove_command(&self, notification_name: &str) {
        let mut map = self.command_map.write();
        if map.remove(notification_name).is_none() {
            return;
        }
        self.view
            .remove_observer(notification_name, NotifyContext::of_weak(&self.this));
        drop(map);
        debug!(key = %self.key(), notification = notification_name, "Command removed");
    }
}
