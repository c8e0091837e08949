//! Error handling types

use thiserror::Error;

use crate::constants::RESOLUTION_CHAIN_SEPARATOR;
use crate::reflection::TypeIdentity;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Capsule container
///
/// Every variant carries the offending name or type so callers can report it
/// without extra context. None of these are retried or wrapped internally: a
/// failure deep inside a recursive build reaches the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A binding referenced a type the catalog does not know
    #[error("Can not bind to non-existent class '{type_name}'")]
    UnknownType {
        /// Short name of the unknown type
        type_name: String,
    },

    /// A recipe handed to `bind` is neither an override map nor a production function
    #[error(
        "Could not bind '{name}' to the container, the given value is not an array of primitives or a callable"
    )]
    InvalidRecipe {
        /// Name of the rejected binding
        name: String,
    },

    /// Attempt to rebind a singleton whose value was already produced
    #[error("The singleton '{name}' has already been resolved")]
    AlreadyResolved {
        /// Name of the resolved singleton
        name: String,
    },

    /// No binding exists under the requested name
    #[error("{message}")]
    NotFound {
        /// The name (after alias translation) that was looked up
        name: String,
        /// Operation-specific description
        message: String,
    },

    /// Building a type failed
    #[error("{message}")]
    ClassBuilding {
        /// Full identity of the type being built
        type_name: String,
        /// Description of the failure
        message: String,
    },

    /// A binding or type re-entered its own resolution
    #[error(
        "Cyclic dependency detected while resolving '{type_name}': {}",
        .chain.join(RESOLUTION_CHAIN_SEPARATOR)
    )]
    CyclicDependency {
        /// The binding or type that closed the cycle
        type_name: String,
        /// Every frame from the first occurrence to the repeat
        chain: Vec<String>,
    },

    /// A resolved value is not of the type the caller asked for
    #[error("Value resolved for '{name}' is not a `{expected}`")]
    TypeMismatch {
        /// Name or type that was resolved
        name: String,
        /// Rust type the caller expected
        expected: &'static str,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error raised by a user-supplied production function or constructor
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),
}

// Binding error creation methods
impl Error {
    /// Create an unknown type error
    pub fn unknown_type(identity: &TypeIdentity) -> Self {
        Self::UnknownType {
            type_name: identity.short_name().to_string(),
        }
    }

    /// Create an invalid recipe error
    pub fn invalid_recipe<S: Into<String>>(name: S) -> Self {
        Self::InvalidRecipe { name: name.into() }
    }

    /// Create an already resolved error
    pub fn already_resolved<S: Into<String>>(name: S) -> Self {
        Self::AlreadyResolved { name: name.into() }
    }
}

// Lookup error creation methods
impl Error {
    /// Create a not found error for a retrieval
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Self::NotFound {
            message: format!("Can not retrieve non-existent instance '{name}' from the container"),
            name,
        }
    }

    /// Create a not found error for a destruction
    pub fn not_found_for_destroy<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Self::NotFound {
            message: format!("Can not destroy '{name}' because it does not exist"),
            name,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(name: S, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }
}

// Build error creation methods
impl Error {
    /// The type to make is not in the catalog
    pub fn non_existent_class(identity: &TypeIdentity) -> Self {
        Self::ClassBuilding {
            type_name: identity.to_string(),
            message: format!(
                "Cannot make non-existent class '{}'",
                identity.short_name()
            ),
        }
    }

    /// The type is abstract, an interface, or has an inaccessible constructor
    pub fn not_instantiable(identity: &TypeIdentity) -> Self {
        Self::ClassBuilding {
            type_name: identity.to_string(),
            message: format!(
                "Can not build the class '{}' as it is not instantiable",
                identity.short_name()
            ),
        }
    }

    /// No override, container type or default satisfied a constructor parameter
    pub fn unresolvable_parameter(identity: &TypeIdentity, parameter: &str) -> Self {
        Self::ClassBuilding {
            type_name: identity.to_string(),
            message: format!(
                "Can not build class '{}' because parameter '{parameter}' can not be resolved",
                identity.short_name()
            ),
        }
    }

    /// A constructor read an argument as the wrong Rust type
    pub fn argument_mismatch(identity: &TypeIdentity, parameter: &str, expected: &str) -> Self {
        Self::ClassBuilding {
            type_name: identity.to_string(),
            message: format!(
                "Can not build class '{}' because parameter '{parameter}' is not a `{expected}`",
                identity.short_name()
            ),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic_dependency<S: Into<String>>(type_name: S, chain: Vec<String>) -> Self {
        Self::CyclicDependency {
            type_name: type_name.into(),
            chain,
        }
    }
}

// Configuration and generic error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }
}

impl Error {
    /// Whether this is a [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this is a [`Error::ClassBuilding`]
    pub fn is_class_building(&self) -> bool {
        matches!(self, Self::ClassBuilding { .. })
    }
}
