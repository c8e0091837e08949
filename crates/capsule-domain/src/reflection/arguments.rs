//! Resolved constructor arguments

use std::any::Any;
use std::sync::Arc;

use super::identity::TypeIdentity;
use crate::error::{Error, Result};
use crate::value::Value;

/// Argument list handed to a declared constructor, in declaration order
#[derive(Clone, Debug)]
pub struct Arguments {
    owner: TypeIdentity,
    values: Vec<(String, Value)>,
}

impl Arguments {
    /// Empty argument list for a constructor of `owner`
    pub fn new(owner: TypeIdentity) -> Self {
        Self {
            owner,
            values: Vec::new(),
        }
    }

    /// Append the next argument
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.values.push((name.into(), value));
    }

    /// Type the arguments belong to
    pub fn owner(&self) -> &TypeIdentity {
        &self.owner
    }

    /// Raw value of a parameter
    pub fn value(&self, name: &str) -> Result<&Value> {
        self.values
            .iter()
            .find(|(parameter, _)| parameter == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::unresolvable_parameter(&self.owner, name))
    }

    /// Shared handle to a parameter's value as a `T`
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        self.value(name)?.downcast::<T>().ok_or_else(|| {
            Error::argument_mismatch(&self.owner, name, std::any::type_name::<T>())
        })
    }

    /// Owned copy of a parameter's value as a `T`
    pub fn cloned<T: Any + Send + Sync + Clone>(&self, name: &str) -> Result<T> {
        self.value(name)?
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::argument_mismatch(&self.owner, name, std::any::type_name::<T>()))
    }

    /// Values in declaration order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().map(|(_, value)| value)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
