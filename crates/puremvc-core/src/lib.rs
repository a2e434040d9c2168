//! # PureMVC Core - Multicore Notification Broker
//!
//! Application code is split into three tiers that never reference each
//! other directly. They talk only through named notifications.
//!
//! ## Architecture
//!
//! ```text
//!                     ┌──────────────────────────────┐
//!   send_notification │            Facade            │
//!  ─────────────────▶ │  (one per multiton key)      │
//!                     └──────┬──────────┬─────────┬──┘
//!                            │          │         │
//!                     ┌──────▼───┐ ┌────▼─────┐ ┌─▼──────────┐
//!                     │  Model   │ │   View   │ │ Controller │
//!                     │ proxies  │ │ observers│◀┤ commands   │
//!                     └──────────┘ │ mediators│ └────────────┘
//!                                  └──────────┘
//! ```
//!
//! - **View**: notification name → ordered observers; owns mediators and
//!   keeps their subscriptions in step with their declared interests.
//! - **Controller**: notification name → command factory; observes each
//!   mapped name once and runs a fresh command per broadcast.
//! - **Model**: proxy name → proxy.
//! - **Multiton**: one of each per key. Keys never see each other.
//!
//! ## Delivery Rules
//!
//! - Broadcasts are synchronous and depth-first on the caller's thread.
//! - Observers run in registration order over a snapshot of the list.
//! - The first callback error aborts the broadcast and reaches the sender.
//! - No lock is held while application code runs, so callbacks may
//!   register, remove and broadcast freely.
//!
//! ## Usage Example
//!
//! ```ignore
//! use puremvc_core::{Multiton, Notification};
//!
//! let multiton = Multiton::new();
//! let facade = multiton.facade("app1").expect("non-empty key");
//! facade.register_mediator(ping_mediator);
//! facade.send_notification("TICK", None, None)?;
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod controller;
pub mod error;
pub mod facade;
pub mod interfaces;
pub mod macro_command;
pub mod model;
pub mod multiton;
pub mod notification;
pub mod notifier;
pub mod observer;
pub mod view;

// Re-export main types
pub use controller::{CommandFactory, Controller};
pub use error::{BoxError, CoreError, HandlerResult};
pub use facade::Facade;
pub use interfaces::{Command, Mediator, Proxy};
pub use macro_command::MacroCommand;
pub use model::Model;
pub use multiton::{Multiton, Scope};
pub use notification::{Body, Notification};
pub use notifier::{Notifier, Notify};
pub use observer::{NotifyContext, Observer};
pub use view::View;
