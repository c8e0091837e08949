//! The container
//!
//! ```text
//! bind / singleton / instance ──► BindingRegistry + AliasIndex
//!                                        │
//! get(name | type) ──► AliasIndex ──► Binding ──► cached value
//!                                        │            or
//!                                        └──► Production(&mut Container)
//!                                                     │
//! make(type, overrides) ──► TypeCatalog ──► build ◄───┘
//!                                             │
//!                          per parameter: override │ make(declared type) │ default
//! ```
//!
//! Operations are grouped by role: [`binder`] registers recipes,
//! [`resolver`] answers lookups, [`builder`] constructs types and
//! [`destroyer`] removes bindings.

pub mod binder;
pub mod binding;
pub mod builder;
pub mod destroyer;
pub(crate) mod registry;
pub mod resolver;
pub(crate) mod stack;

use std::fmt;

use capsule_domain::{Error, Result, TypeCatalog};
use capsule_infrastructure::ContainerConfig;
use tracing::warn;

pub use binding::{Production, Recipe};

use registry::{AliasIndex, BindingRegistry};
use stack::{Frame, ResolutionStack};

/// Registry of named bindings plus the engine that resolves them
#[derive(Clone)]
pub struct Container {
    registry: BindingRegistry,
    aliases: AliasIndex,
    catalog: TypeCatalog,
    stack: ResolutionStack,
    config: ContainerConfig,
}

impl Container {
    /// Container over every type descriptor linked into the binary
    pub fn new() -> Self {
        Self::with_catalog(TypeCatalog::discover())
    }

    /// Container over an explicit catalog with default configuration
    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        Self::from_config(&ContainerConfig::default(), catalog)
    }

    /// Container over an explicit catalog and configuration
    pub fn from_config(config: &ContainerConfig, catalog: TypeCatalog) -> Self {
        Self {
            registry: BindingRegistry::default(),
            aliases: AliasIndex::default(),
            catalog,
            stack: ResolutionStack::default(),
            config: config.clone(),
        }
    }

    /// Known types
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Known types, for late registration
    pub fn catalog_mut(&mut self) -> &mut TypeCatalog {
        &mut self.catalog
    }

    /// Active configuration
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Names of all bindings, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Push a frame, failing if it closes a cycle and cycles are detected
    pub(crate) fn enter(&mut self, frame: Frame) -> Result<()> {
        if self.config.detect_cycles {
            if let Some(chain) = self.stack.cycle(&frame) {
                warn!(frame = %frame, depth = self.stack.depth(), "Cyclic dependency detected");
                return Err(Error::cyclic_dependency(frame.to_string(), chain));
            }
        }
        self.stack.push(frame);
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.registry.len())
            .field("types", &self.catalog.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
