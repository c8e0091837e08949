//! Static type metadata
//!
//! Stands in for runtime reflection: the builder reads constructor
//! parameters, declared types and defaults from descriptors supplied by each
//! type's author rather than from the type itself.

pub mod arguments;
pub mod catalog;
pub mod descriptor;
pub mod identity;

pub use arguments::Arguments;
pub use catalog::{REFLECTED_TYPES, TypeCatalog};
pub use descriptor::{
    ConstructFn, Constructor, ConstructorParameter, ImplicitFn, Instantiation, Reflect,
    TypeDescriptor, TypeKind,
};
pub use identity::TypeIdentity;
