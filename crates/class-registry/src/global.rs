//! Process-wide default registry
//!
//! Convenient when wiring spans unrelated call sites, but every user of
//! [`global`] shares the same bindings. Prefer passing an explicit
//! [`Registry`] where feasible.

use once_cell::sync::Lazy;

use crate::registry::Registry;

// Created on first access, once.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The shared default registry
///
/// Independent of every registry built with [`Registry::new`].
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}
