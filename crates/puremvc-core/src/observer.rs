//! # Observer
//!
//! An observer pairs a notification callback with the identity of the object
//! it was registered for (its *notify context*). Registries remove observers
//! by comparing that identity, never the callback.

use crate::error::HandlerResult;
use crate::notification::Notification;
use std::fmt;
use std::sync::{Arc, Weak};

type Callback = Arc<dyn Fn(&Notification) -> HandlerResult + Send + Sync>;

/// Identity of the object an [`Observer`] was registered for.
///
/// Holds only the address of the target, so it never keeps the target alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifyContext(usize);

impl NotifyContext {
    /// Identity of the value behind `target`.
    #[must_use]
    pub fn of<T: ?Sized>(target: &Arc<T>) -> Self {
        Self(Arc::as_ptr(target).cast::<()>() as usize)
    }

    /// Identity of the value behind a weak reference.
    ///
    /// Equal to [`NotifyContext::of`] for any `Arc` the weak was taken from.
    #[must_use]
    pub fn of_weak<T: ?Sized>(target: &Weak<T>) -> Self {
        Self(Weak::as_ptr(target).cast::<()>() as usize)
    }

    #[cfg(test)]
    pub(crate) const fn from_raw(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Debug for NotifyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotifyContext({:#x})", self.0)
    }
}

/// A callback plus the notify context it belongs to.
///
/// Cloning is cheap and shares the callback, which is how one mediator
/// observer serves every notification it is interested in.
#[derive(Clone)]
pub struct Observer {
    callback: Callback,
    context: NotifyContext,
}

impl Observer {
    /// Wrap a free-standing callback under an explicit context.
    pub fn new<F>(context: NotifyContext, callback: F) -> Self
    where
        F: Fn(&Notification) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            context,
        }
    }

    /// Bind `method` to `target`.
    ///
    /// The observer holds a weak reference only. Once the target is dropped
    /// the callback does nothing.
    pub fn bound<T, F>(target: &Arc<T>, method: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&T, &Notification) -> HandlerResult + Send + Sync + 'static,
    {
        Self::bound_weak(Arc::downgrade(target), method)
    }

    /// Bind `method` to an already-weak target.
    pub fn bound_weak<T, F>(target: Weak<T>, method: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&T, &Notification) -> HandlerResult + Send + Sync + 'static,
    {
        let context = NotifyContext::of_weak(&target);
        Self::new(context, move |note| match target.upgrade() {
            Some(target) => method(&target, note),
            None => Ok(()),
        })
    }

    /// Invoke the callback.
    pub fn notify_observer(&self, note: &Notification) -> HandlerResult {
        (self.callback)(note)
    }

    /// Whether this observer was registered for `context`.
    #[must_use]
    pub fn compare_notify_context(&self, context: NotifyContext) -> bool {
        self.context == context
    }

    #[must_use]
    pub fn notify_context(&self) -> NotifyContext {
        self.context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
