//! Error handling types
//!
//! Registration and resolution never fail. These errors come from the
//! strict accessor [`Registry::require`](crate::Registry::require) and
//! from the configuration and logging setup around the registry.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the class registry
#[derive(Error, Debug)]
pub enum Error {
    /// No provider bound for the requested type
    #[error("No provider registered for {type_name}")]
    NotRegistered {
        /// Name of the requested type
        type_name: &'static str,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a not-registered error for `T`
    pub fn not_registered<T: ?Sized>() -> Self {
        Self::NotRegistered {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error wrapping its cause
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::configuration_with_source("Failed to extract configuration", err)
    }
}
