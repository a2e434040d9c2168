//! # Model
//!
//! The proxy registry of one scope.

use crate::interfaces::Proxy;
use crate::multiton::Scope;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-scope proxy registry.
pub struct Model {
    scope: Scope,
    proxy_map: RwLock<HashMap<String, Arc<dyn Proxy>>>,
}

impl Model {
    pub(crate) fn new(scope: Scope) -> Self {
        debug!(key = %scope.key(), "Model initialized");
        Self {
            scope,
            proxy_map: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.scope.key()
    }

    /// Register `proxy` under its name, replacing any proxy of the same name.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        proxy.initialize_notifier(&self.scope);
        let name = proxy.proxy_name().to_string();
        let replaced = self.proxy_map.write().insert(name.clone(), proxy.clone());
        debug!(
            key = %self.key(),
            proxy = %name,
            replaced = replaced.is_some(),
            "Proxy registered"
        );
        proxy.on_register();
    }

    #[must_use]
    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.proxy_map.read().get(proxy_name).cloned()
    }

    #[must_use]
    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.proxy_map.read().contains_key(proxy_name)
    }

    /// Remove and return the proxy registered under `proxy_name`.
    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        let proxy = self.proxy_map.write().remove(proxy_name)?;
        debug!(key = %self.key(), proxy = proxy_name, "Proxy removed");
        proxy.on_remove();
        Some(proxy)
    }
}
