//! Capsule - a runtime dependency injection container
//!
//! Register named bindings, each pairing a recipe with a lifecycle, then
//! resolve them by name or by the type they were bound to. Types without a
//! binding are built on demand: the container reads the type's constructor
//! descriptor and supplies every parameter from caller overrides, from a
//! recursive build of the parameter's declared type, or from its default.
//!
//! ## Example
//!
//! ```
//! use capsule::{Container, Overrides, TypeCatalog, TypeDescriptor};
//!
//! #[derive(Default)]
//! struct Mailer;
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register(TypeDescriptor::of::<Mailer>().implicit(Mailer::default));
//!
//! let mut container = Container::with_catalog(catalog);
//! container.singleton("mailer", std::any::type_name::<Mailer>(), Overrides::new())?;
//!
//! let first = container.get("mailer")?;
//! let second = container.get(std::any::type_name::<Mailer>())?;
//! assert!(first.ptr_eq(&second));
//! # Ok::<(), capsule::Error>(())
//! ```
//!
//! The container is an explicit value owned by the composition root; there
//! is no process-wide instance. It is `Send + Sync`, so a multi-threaded host
//! can guard it with a single mutex held across each operation.

pub mod container;

pub use container::{Container, Production, Recipe};

// Re-export the domain vocabulary
pub use capsule_domain::{
    Arguments, Constructor, ConstructorParameter, Error, Overrides, REFLECTED_TYPES, Reflect,
    Result, TypeCatalog, TypeDescriptor, TypeIdentity, TypeKind, Value,
};

// Re-export configuration
pub use capsule_infrastructure::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
