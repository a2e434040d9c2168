//! # View
//!
//! The subscription registry of one scope: notification name to an ordered
//! list of observers, plus the mediator registry whose subscriptions it
//! manages.
//!
//! ## Broadcast
//!
//! `notify_observers` copies the observer list for the notification's name
//! and releases the lock before calling anything. Observers may register or
//! remove observers (themselves included) while being notified; that only
//! affects later broadcasts.

use crate::error::HandlerResult;
use crate::interfaces::Mediator;
use crate::multiton::Scope;
use crate::notification::Notification;
use crate::observer::{NotifyContext, Observer};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

struct MediatorEntry {
    mediator: Arc<dyn Mediator>,
    /// Interests as reported at registration; removal mirrors these.
    interests: Vec<String>,
}

/// Per-scope subscription registry.
pub struct View {
    scope: Scope,
    observer_map: RwLock<HashMap<String, Vec<Observer>>>,
    /// Taken before `observer_map` when both are held.
    mediator_map: RwLock<HashMap<String, MediatorEntry>>,
}

impl View {
    pub(crate) fn new(scope: Scope) -> Self {
        debug!(key = %scope.key(), "View initialized");
        Self {
            scope,
            observer_map: RwLock::new(HashMap::new()),
            mediator_map: RwLock::new(HashMap::new()),
        }
    }

    /// The multiton key of this view.
    #[must_use]
    pub fn key(&self) -> &str {
        self.scope.key()
    }

    /// Append `observer` to the list for `notification_name`.
    ///
    /// Duplicates are allowed and are invoked once per registration.
    pub fn register_observer(&self, notification_name: &str, observer: Observer) {
        let mut map = self.observer_map.write();
        let observers = map.entry(notification_name.to_string()).or_default();
        observers.push(observer);
        trace!(
            key = %self.key(),
            notification = notification_name,
            observers = observers.len(),
            "Observer registered"
        );
    }

    /// Broadcast `note` to every observer registered for its name.
    ///
    /// Observers run in registration order. The first error aborts the
    /// remaining observers and is returned unchanged.
    pub fn notify_observers(&self, note: &Notification) -> HandlerResult {
        let snapshot = match self.observer_map.read().get(note.name()) {
            Some(observers) => observers.clone(),
            None => {
                trace!(key = %self.key(), notification = note.name(), "No observers");
                return Ok(());
            }
        };

        trace!(
            key = %self.key(),
            notification = note.name(),
            observers = snapshot.len(),
            "Notifying observers"
        );

        for observer in &snapshot {
            observer.notify_observer(note)?;
        }
        Ok(())
    }

    /// Remove the first observer for `notification_name` registered under
    /// `context`.
    ///
    /// A name with no observers is ignored.
    pub fn remove_observer(&self, notification_name: &str, context: NotifyContext) {
        let mut map = self.observer_map.write();
        let Some(observers) = map.get_mut(notification_name) else {
            debug!(
                key = %self.key(),
                notification = notification_name,
                "remove_observer on name with no observers"
            );
            return;
        };

        if let Some(index) = observers
            .iter()
            .position(|o| o.compare_notify_context(context))
        {
            observers.remove(index);
        }

        if observers.is_empty() {
            map.remove(notification_name);
        }
    }

    /// Whether any observer is registered for `notification_name`.
    #[must_use]
    pub fn has_observer(&self, notification_name: &str) -> bool {
        self.observer_map.read().contains_key(notification_name)
    }

    #[must_use]
    pub fn observer_count(&self, notification_name: &str) -> usize {
        self.observer_map
            .read()
            .get(notification_name)
            .map_or(0, Vec::len)
    }

    /// Register a mediator and subscribe it to its interests.
    ///
    /// A mediator whose name is already registered is ignored. The entry and
    /// its subscriptions are installed under one `mediator_map` guard, so a
    /// concurrent `remove_mediator` sees either both or neither.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.mediator_name().to_string();
        if self.has_mediator(&name) {
            debug!(key = %self.key(), mediator = %name, "Mediator already registered");
            return;
        }

        let interests = mediator.list_notification_interests();

        {
            let mut map = self.mediator_map.write();
            if map.contains_key(&name) {
                debug!(key = %self.key(), mediator = %name, "Mediator already registered");
                return;
            }

            mediator.initialize_notifier(&self.scope);
            if !interests.is_empty() {
                let observer = Observer::bound(&mediator, |m, note| m.handle_notification(note));
                for interest in &interests {
                    self.register_observer(interest, observer.clone());
                }
            }
            map.insert(
                name.clone(),
                MediatorEntry {
                    mediator: mediator.clone(),
                    interests: interests.clone(),
                },
            );
        }

        debug!(
            key = %self.key(),
            mediator = %name,
            interests = ?interests,
            "Mediator registered"
        );
        mediator.on_register();
    }

    #[must_use]
    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.mediator_map
            .read()
            .get(mediator_name)
            .map(|e| e.mediator.clone())
    }

    /// Unsubscribe and remove a mediator, returning it.
    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        let MediatorEntry {
            mediator,
            interests,
        } = {
            let mut map = self.mediator_map.write();
            let entry = map.remove(mediator_name)?;
            let context = NotifyContext::of(&entry.mediator);
            for interest in &entry.interests {
                self.remove_observer(interest, context);
            }
            entry
        };

        if mediator.list_notification_interests() != interests {
            warn!(
                key = %self.key(),
                mediator = mediator_name,
                "Mediator interests changed since registration; removed original subscriptions"
            );
        }

        debug!(key = %self.key(), mediator = mediator_name, "Mediator removed");
        mediator.on_remove();
        Some(mediator)
    }

    #[must_use]
    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.mediator_map.read().contains_key(mediator_name)
    }
}
