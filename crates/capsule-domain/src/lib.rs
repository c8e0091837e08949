//! Domain Layer - Capsule
//!
//! Core vocabulary shared by every part of the container:
//!
//! - [`error`]: the single error type surfaced by all container operations
//! - [`value`]: type-erased values and primitive override maps
//! - [`reflection`]: static type metadata standing in for runtime reflection
//!
//! ## Dependencies
//!
//! This crate depends only on pure libraries (`thiserror`, `linkme`) and knows
//! nothing about configuration, logging or the container itself.

pub mod constants;
pub mod error;
pub mod reflection;
pub mod value;

pub use error::{Error, Result};
pub use reflection::{
    Arguments, Constructor, ConstructorParameter, REFLECTED_TYPES, Reflect, TypeCatalog,
    TypeDescriptor, TypeIdentity, TypeKind,
};
pub use value::{Overrides, Value};
