//! Type catalog - the set of known, loadable types
//!
//! Types become known in two ways:
//!
//! 1. Explicitly, via [`TypeCatalog::register`] / [`TypeCatalog::register_type`]
//! 2. At link time, by submitting a descriptor function to [`REFLECTED_TYPES`]:
//!
//! ```ignore
//! #[linkme::distributed_slice(capsule_domain::REFLECTED_TYPES)]
//! static MAILER: fn() -> TypeDescriptor = <Mailer as Reflect>::descriptor;
//! ```
//!
//! [`TypeCatalog::discover`] collects every submitted descriptor. The slice is
//! immutable metadata; each container still owns its own catalog.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use super::descriptor::{Reflect, TypeDescriptor};
use super::identity::TypeIdentity;

// Auto-collection via linkme distributed slices - types submit descriptors at compile time
#[linkme::distributed_slice]
pub static REFLECTED_TYPES: [fn() -> TypeDescriptor] = [..];

/// Known types, by identity and by Rust `TypeId`
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    descriptors: HashMap<TypeIdentity, Arc<TypeDescriptor>>,
    rust_types: HashMap<TypeId, TypeIdentity>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every descriptor linked into the binary
    pub fn discover() -> Self {
        let mut catalog = Self::new();
        for describe in REFLECTED_TYPES {
            catalog.register(describe());
        }
        catalog
    }

    /// Add or replace a descriptor
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        let identity = descriptor.identity().clone();
        if let Some(rust_type) = descriptor.rust_type() {
            self.rust_types.insert(rust_type, identity.clone());
        }
        self.descriptors.insert(identity, Arc::new(descriptor));
        self
    }

    /// Add a self-describing Rust type
    pub fn register_type<T: Reflect>(&mut self) -> &mut Self {
        self.register(T::descriptor())
    }

    /// Descriptor for an identity
    pub fn get(&self, identity: &str) -> Option<Arc<TypeDescriptor>> {
        self.descriptors
            .get(TypeIdentity::new(identity).as_str())
            .cloned()
    }

    /// Whether an identity names a known type
    pub fn contains(&self, identity: &str) -> bool {
        self.descriptors
            .contains_key(TypeIdentity::new(identity).as_str())
    }

    /// Identity registered for a Rust type
    pub fn identity_of(&self, rust_type: TypeId) -> Option<&TypeIdentity> {
        self.rust_types.get(&rust_type)
    }

    /// All known identities
    pub fn identities(&self) -> impl Iterator<Item = &TypeIdentity> {
        self.descriptors.keys()
    }

    /// Number of known types
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no type is known
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
