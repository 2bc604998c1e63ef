//! Providers - what a type key is bound to
//!
//! A provider is either a pre-built instance handed out on every resolve,
//! or a factory invoked again on every resolve. Both hold the value as a
//! type-erased `Arc<T>` so that unsized targets such as `dyn Trait` can be
//! bound and recovered with a checked downcast.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::registry::Registry;

/// Erased `Arc<T>`
type ErasedInstance = Arc<dyn Any + Send + Sync>;

/// Factory producing a boxed, erased `Arc<T>`
type ErasedFactory = Arc<dyn Fn(&Registry) -> Box<dyn Any> + Send + Sync>;

/// Kind of provider bound to a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// A fixed instance shared by every resolve
    Instance,
    /// A factory invoked on every resolve
    Factory,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance => f.write_str("instance"),
            Self::Factory => f.write_str("factory"),
        }
    }
}

/// A binding stored in the registry map
///
/// Cloning only bumps reference counts, so a provider can be copied out of
/// the registry lock and used after the guard is released.
#[derive(Clone)]
pub(crate) enum Provider {
    Instance(ErasedInstance),
    Factory(ErasedFactory),
}

impl Provider {
    pub(crate) fn instance<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self::Instance(Arc::new(value))
    }

    pub(crate) fn factory<T, F>(factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Registry) -> Arc<T> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move |registry: &Registry| {
            Box::new(factory(registry)) as Box<dyn Any>
        }))
    }

    pub(crate) fn kind(&self) -> ProviderKind {
        match self {
            Self::Instance(_) => ProviderKind::Instance,
            Self::Factory(_) => ProviderKind::Factory,
        }
    }

    /// Produce the bound value as `Arc<T>`.
    ///
    /// Must be called without the registry lock held: factories may call
    /// back into `registry`. A value of any other type yields `None`.
    pub(crate) fn provide<T>(&self, registry: &Registry) -> Option<Arc<T>>
    where
        T: ?Sized + 'static,
    {
        match self {
            Self::Instance(erased) => erased.downcast_ref::<Arc<T>>().cloned(),
            Self::Factory(factory) => factory(registry)
                .downcast::<Arc<T>>()
                .ok()
                .map(|boxed| *boxed),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Provider").field(&self.kind()).finish()
    }
}
