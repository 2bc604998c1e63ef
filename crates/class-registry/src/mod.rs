//! # Class Registry
//!
//! A minimal in-process service locator. Each type is bound to one
//! provider, either a fixed instance or a factory, and resolved by type
//! later on. The registry is safe to share across threads.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use class_registry::Registry;
//!
//! #[derive(Debug, PartialEq)]
//! struct Greeting(&'static str);
//! struct RequestId(usize);
//!
//! let registry = Registry::new();
//! registry.register(Greeting("hello"));
//!
//! let next = AtomicUsize::new(0);
//! registry.register_factory(move || RequestId(next.fetch_add(1, Ordering::SeqCst)));
//!
//! assert_eq!(*registry.resolve::<Greeting>().unwrap(), Greeting("hello"));
//! assert_eq!(registry.resolve::<RequestId>().unwrap().0, 0);
//! assert_eq!(registry.resolve::<RequestId>().unwrap().0, 1);
//! assert!(registry.resolve::<String>().is_none());
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - the registry and its register/resolve operations
//! - [`global`] - the process-wide default registry
//! - [`config`] - Figment-based configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod constants;
pub mod error;
pub mod global;
pub mod key;
pub mod logging;
pub mod provider;
pub mod registry;

pub use config::{ConfigLoader, LoggingConfig, RegistryConfig};
pub use error::{Error, Result};
pub use global::global;
pub use key::TypeKey;
pub use provider::ProviderKind;
pub use registry::Registry;
