//! # Multiton
//!
//! The scope table: at most one [`Model`], [`View`], [`Controller`] and
//! [`Facade`] per multiton key. It is an ordinary value, not process-global
//! state; whoever builds the application owns it and hands out [`Scope`]
//! handles.
//!
//! ## Construction Rules
//!
//! - Accessors (`view`, `controller`, ...) build on first use and return
//!   `None` for an empty key.
//! - `create_*` builds explicitly and fails with a duplicate-construction
//!   error when the key already has an instance.
//! - A controller always resolves the view of its own key, so the two are
//!   created together.

use crate::controller::Controller;
use crate::error::CoreError;
use crate::facade::Facade;
use crate::model::Model;
use crate::view::View;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Handle naming one application scope inside a [`Multiton`].
///
/// Holds the key and a weak reference to the table, so handles stored in
/// notifiers never keep the table alive.
#[derive(Clone)]
pub struct Scope {
    key: Arc<str>,
    registry: Weak<Multiton>,
}

impl Scope {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn registry(&self) -> Result<Arc<Multiton>, CoreError> {
        self.registry.upgrade().ok_or_else(|| CoreError::RegistryDropped {
            key: self.key.to_string(),
        })
    }

    /// The facade for this scope, built on first use.
    pub fn facade(&self) -> Result<Arc<Facade>, CoreError> {
        self.registry()?.facade(&self.key).ok_or(CoreError::InvalidKey)
    }

    pub fn view(&self) -> Result<Arc<View>, CoreError> {
        self.registry()?.view(&self.key).ok_or(CoreError::InvalidKey)
    }

    pub fn controller(&self) -> Result<Arc<Controller>, CoreError> {
        self.registry()?
            .controller(&self.key)
            .ok_or(CoreError::InvalidKey)
    }

    pub fn model(&self) -> Result<Arc<Model>, CoreError> {
        self.registry()?.model(&self.key).ok_or(CoreError::InvalidKey)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("key", &self.key).finish()
    }
}

/// Keyed table of per-scope registries.
pub struct Multiton {
    models: RwLock<HashMap<String, Arc<Model>>>,
    views: RwLock<HashMap<String, Arc<View>>>,
    controllers: RwLock<HashMap<String, Arc<Controller>>>,
    facades: RwLock<HashMap<String, Arc<Facade>>>,
    this: Weak<Multiton>,
}

impl Multiton {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            models: RwLock::new(HashMap::new()),
            views: RwLock::new(HashMap::new()),
            controllers: RwLock::new(HashMap::new()),
            facades: RwLock::new(HashMap::new()),
            this: this.clone(),
        })
    }

    /// Handle for `key`, or `None` for an empty key.
    #[must_use]
    pub fn scope(&self, key: &str) -> Option<Scope> {
        if key.is_empty() {
            return None;
        }
        Some(Scope {
            key: Arc::from(key),
            registry: self.this.clone(),
        })
    }

    fn valid_scope(&self, key: &str) -> Result<Scope, CoreError> {
        self.scope(key).ok_or(CoreError::InvalidKey)
    }

    // =========================================================================
    // VIEW
    // =========================================================================

    /// The view for `key`, built on first use.
    #[must_use]
    pub fn view(&self, key: &str) -> Option<Arc<View>> {
        let scope = self.scope(key)?;
        if let Some(view) = self.views.read().get(key) {
            return Some(view.clone());
        }
        let view = self
            .views
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(View::new(scope)))
            .clone();
        Some(view)
    }

    /// Build the view for `key`.
    ///
    /// # Errors
    ///
    /// `CoreError::DuplicateView` if `key` already has a view.
    pub fn create_view(&self, key: &str) -> Result<Arc<View>, CoreError> {
        let scope = self.valid_scope(key)?;
        let mut views = self.views.write();
        if views.contains_key(key) {
            return Err(CoreError::DuplicateView {
                key: key.to_string(),
            });
        }
        let view = Arc::new(View::new(scope));
        views.insert(key.to_string(), view.clone());
        Ok(view)
    }

    pub fn remove_view(&self, key: &str) -> Option<Arc<View>> {
        self.views.write().remove(key)
    }

    // =========================================================================
    // CONTROLLER
    // =========================================================================

    /// The controller for `key`, built on first use together with its view.
    #[must_use]
    pub fn controller(&self, key: &str) -> Option<Arc<Controller>> {
        let scope = self.scope(key)?;
        if let Some(controller) = self.controllers.read().get(key) {
            return Some(controller.clone());
        }
        let view = self.view(key)?;
        let controller = self
            .controllers
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Controller::new(scope, view))
            .clone();
        Some(controller)
    }

    /// Build the controller for `key`.
    ///
    /// # Errors
    ///
    /// `CoreError::DuplicateController` if `key` already has a controller.
    pub fn create_controller(&self, key: &str) -> Result<Arc<Controller>, CoreError> {
        let scope = self.valid_scope(key)?;
        let view = self.view(key).ok_or(CoreError::InvalidKey)?;
        let mut controllers = self.controllers.write();
        if controllers.contains_key(key) {
            return Err(CoreError::DuplicateController {
                key: key.to_string(),
            });
        }
        let controller = Controller::new(scope, view);
        controllers.insert(key.to_string(), controller.clone());
        Ok(controller)
    }

    pub fn remove_controller(&self, key: &str) -> Option<Arc<Controller>> {
        self.controllers.write().remove(key)
    }

    // =========================================================================
    // MODEL
    // =========================================================================

    /// The model for `key`, built on first use.
    #[must_use]
    pub fn model(&self, key: &str) -> Option<Arc<Model>> {
        let scope = self.scope(key)?;
        if let Some(model) = self.models.read().get(key) {
            return Some(model.clone());
        }
        let model = self
            .models
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Model::new(scope)))
            .clone();
        Some(model)
    }

    /// Build the model for `key`.
    ///
    /// # Errors
    ///
    /// `CoreError::DuplicateModel` if `key` already has a model.
    pub fn create_model(&self, key: &str) -> Result<Arc<Model>, CoreError> {
        let scope = self.valid_scope(key)?;
        let mut models = self.models.write();
        if models.contains_key(key) {
            return Err(CoreError::DuplicateModel {
                key: key.to_string(),
            });
        }
        let model = Arc::new(Model::new(scope));
        models.insert(key.to_string(), model.clone());
        Ok(model)
    }

    pub fn remove_model(&self, key: &str) -> Option<Arc<Model>> {
        self.models.write().remove(key)
    }

    // =========================================================================
    // FACADE
    // =========================================================================

    /// The facade for `key`, built on first use with its model, view and
    /// controller.
    #[must_use]
    pub fn facade(&self, key: &str) -> Option<Arc<Facade>> {
        let scope = self.scope(key)?;
        if let Some(facade) = self.facades.read().get(key) {
            return Some(facade.clone());
        }
        let model = self.model(key)?;
        let controller = self.controller(key)?;
        let view = self.view(key)?;
        let facade = self
            .facades
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Facade::new(scope, model, view, controller)))
            .clone();
        Some(facade)
    }

    /// Build the facade for `key`.
    ///
    /// # Errors
    ///
    /// `CoreError::DuplicateFacade` if `key` already has a facade.
    pub fn create_facade(&self, key: &str) -> Result<Arc<Facade>, CoreError> {
        let scope = self.valid_scope(key)?;
        let model = self.model(key).ok_or(CoreError::InvalidKey)?;
        let controller = self.controller(key).ok_or(CoreError::InvalidKey)?;
        let view = self.view(key).ok_or(CoreError::InvalidKey)?;
        let mut facades = self.facades.write();
        if facades.contains_key(key) {
            return Err(CoreError::DuplicateFacade {
                key: key.to_string(),
            });
        }
        let facade = Arc::new(Facade::new(scope, model, view, controller));
        facades.insert(key.to_string(), facade.clone());
        Ok(facade)
    }

    /// Whether a facade exists for `key`.
    #[must_use]
    pub fn has_core(&self, key: &str) -> bool {
        self.facades.read().contains_key(key)
    }

    /// Drop the model, view, controller and facade for `key`.
    ///
    /// Observers already running finish against the dropped instances.
    pub fn remove_core(&self, key: &str) {
        if !self.has_core(key) {
            return;
        }
        self.remove_model(key);
        self.remove_view(key);
        self.remove_controller(key);
        self.facades.write().remove(key);
        debug!(key, "Core removed");
    }

    /// Keys that currently own a facade.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.facades.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
