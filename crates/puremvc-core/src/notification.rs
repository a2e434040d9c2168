//! # Notification
//!
//! The immutable message that carries every cross-tier interaction.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque notification payload.
pub type Body = Arc<dyn Any + Send + Sync>;

/// A named message with an optional opaque body and an optional type tag.
///
/// Built once with the `with_*` methods and read-only afterwards. Routing
/// only ever looks at [`Notification::name`].
#[derive(Clone)]
pub struct Notification {
    name: String,
    body: Option<Body>,
    kind: Option<String>,
}

impl Notification {
    /// Create a notification with no body and no type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Create a notification from already-shared parts.
    pub fn from_parts(name: impl Into<String>, body: Option<Body>, kind: Option<String>) -> Self {
        Self {
            name: name.into(),
            body,
            kind,
        }
    }

    /// Attach a body value.
    #[must_use]
    pub fn with_body<T: Any + Send + Sync>(mut self, body: T) -> Self {
        self.body = Some(Arc::new(body));
        self
    }

    /// Attach a body that is already shared.
    #[must_use]
    pub fn with_shared_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a type tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Borrow the body as `T`, or `None` if absent or of another type.
    #[must_use]
    pub fn body_as<T: Any>(&self) -> Option<&T> {
        self.body.as_deref().and_then(|b| b.downcast_ref::<T>())
    }

    /// The type tag (`type` in PureMVC terms).
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("has_body", &self.body.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification Name: {}", self.name)?;
        write!(
            f,
            "\nBody:{}",
            if self.body.is_some() { "<opaque>" } else { "null" }
        )?;
        write!(f, "\nType:{}", self.kind.as_deref().unwrap_or("null"))
    }
}
