//! # PureMVC Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Mediators, proxies and commands shared by tests
//! └── integration/      # Cross-registry scenarios
//!     ├── broker.rs     # Ordering, mediator mirror, empty-list cleanup
//!     ├── commands.rs   # Dispatch, remapping, failures, macro commands
//!     └── isolation.rs  # Multiton keys, construction, teardown
//!
//! tests/benches/
//! └── broker_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p puremvc-tests
//!
//! # By category
//! cargo test -p puremvc-tests integration::broker::
//! cargo test -p puremvc-tests integration::commands::
//!
//! # Benchmarks
//! cargo bench -p puremvc-tests
//! ```
