//! Type-keyed service registry
//!
//! Binds each type to one provider (an instance or a factory) and resolves
//! values by type later on, following the Service Locator pattern.
//!
//! ## Locking
//!
//! A single mutex guards the whole provider map. It is held only for the
//! map access itself: `resolve` copies the provider out, releases the
//! guard, and only then invokes a factory. Factories are therefore free to
//! call `resolve` or `register` on the same registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::key::TypeKey;
use crate::provider::{Provider, ProviderKind};

type ProviderMap = HashMap<TypeKey, Provider>;

/// Thread-safe registry resolving values by type
///
/// Cloning a `Registry` yields another handle to the same bindings.
/// Registries created with [`Registry::new`] never share state with each
/// other.
///
/// ```
/// use std::sync::Arc;
/// use class_registry::Registry;
///
/// trait Pet: Send + Sync {}
/// struct Dog;
/// impl Pet for Dog {}
///
/// struct Owner {
///     pet: Arc<dyn Pet>,
/// }
///
/// let registry = Registry::new();
/// registry.register_shared::<dyn Pet>(Arc::new(Dog));
/// registry.register_factory_with(|registry| Owner {
///     pet: registry.resolve::<dyn Pet>().expect("pet registered first"),
/// });
///
/// let owner = registry.resolve::<Owner>().unwrap();
/// let pet = registry.resolve::<dyn Pet>().unwrap();
/// assert!(Arc::ptr_eq(&owner.pet, &pet));
/// assert!(registry.resolve::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Registry {
    providers: Arc<Mutex<ProviderMap>>,
    config: Arc<RegistryConfig>,
}

impl Registry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            providers: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Configuration this registry was created with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Bind `T` to a fixed instance, replacing any previous binding
    pub fn register<T>(&self, instance: T)
    where
        T: Send + Sync + 'static,
    {
        self.register_shared(Arc::new(instance));
    }

    /// Bind `T` to an already shared instance
    ///
    /// `T` may be unsized, which allows binding under a capability type:
    /// `registry.register_shared::<dyn Pet>(Arc::new(Dog))`.
    pub fn register_shared<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.insert(TypeKey::of::<T>(), Provider::instance(instance));
    }

    /// Bind `T` to a factory invoked on every resolve
    ///
    /// Results are not cached. Capture the memoization inside the closure,
    /// or use [`Registry::register`], when a single instance is wanted.
    pub fn register_factory<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_factory_with(move |_: &Registry| factory());
    }

    /// Bind `T` to a factory that receives this registry
    ///
    /// The factory may resolve other bindings while building its value.
    pub fn register_factory_with<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Registry) -> T + Send + Sync + 'static,
    {
        self.register_shared_factory_with(move |registry: &Registry| Arc::new(factory(registry)));
    }

    /// Bind `T` to a registry-aware factory returning a shared value
    ///
    /// Counterpart of [`Registry::register_shared`] for factories, so `T`
    /// may be a trait object.
    pub fn register_shared_factory_with<T, F>(&self, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Registry) -> Arc<T> + Send + Sync + 'static,
    {
        self.insert(TypeKey::of::<T>(), Provider::factory(factory));
    }

    /// Resolve the value bound to `T`
    ///
    /// Returns `None` when nothing is bound to `T` or when the bound value
    /// is not a `T`. A factory binding is invoked afresh on each call.
    pub fn resolve<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let provider = self.lock().get(&key).cloned();

        let Some(provider) = provider else {
            trace!(type_name = key.type_name(), "No provider registered");
            return None;
        };

        let resolved = provider.provide::<T>(self);
        if resolved.is_some() {
            trace!(type_name = key.type_name(), kind = %provider.kind(), "Resolved");
        } else {
            trace!(type_name = key.type_name(), kind = %provider.kind(), "Provider type mismatch");
        }
        resolved
    }

    /// Resolve `T`, treating absence as an error
    pub fn require<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<T>().ok_or_else(Error::not_registered::<T>)
    }

    /// Check if a provider is bound to `T`
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.lock().contains_key(&TypeKey::of::<T>())
    }

    /// Kind of provider bound to `T`, if any
    pub fn provider_kind<T: ?Sized + 'static>(&self) -> Option<ProviderKind> {
        self.lock().get(&TypeKey::of::<T>()).map(Provider::kind)
    }

    /// Number of bound types
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no type is bound
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Names of all bound types, sorted
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.lock().keys().map(TypeKey::type_name).collect();
        names.sort_unstable();
        names
    }

    fn insert(&self, key: TypeKey, provider: Provider) {
        let kind = provider.kind();
        // The guard is released at the end of this statement; the previous
        // provider is dropped after it, since its destructor may re-enter.
        let previous = self.lock().insert(key, provider);
        let replaced = previous.is_some();

        if replaced && self.config.warn_on_overwrite {
            warn!(type_name = key.type_name(), %kind, "Replaced existing provider");
        } else {
            debug!(type_name = key.type_name(), %kind, replaced, "Provider registered");
        }
    }

    // User code never runs under the guard, so a poisoned map is still
    // consistent and is used as-is.
    fn lock(&self) -> MutexGuard<'_, ProviderMap> {
        self.providers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .map(|(key, provider)| (key.type_name(), provider.kind()))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        f.debug_struct("Registry")
            .field("providers", &DebugEntries(&entries))
            .finish()
    }
}

struct DebugEntries<'a>(&'a [(&'static str, ProviderKind)]);

impl fmt::Debug for DebugEntries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, kind)| (name, kind)))
            .finish()
    }
}
