//! Type-erased values handled by the container
//!
//! Everything the container stores or produces is a [`Value`]: a shared,
//! clonable handle over any `Send + Sync` payload. Cloning a `Value` never
//! clones the payload, so identity comparisons via [`Value::ptr_eq`] tell a
//! cached singleton apart from a freshly produced factory value.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a type-erased value
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wrap a value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap an already shared value without re-allocating
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Whether the payload is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the payload as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Get a shared handle to the payload as a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Whether both handles point at the same payload
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Rust type name of the payload
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the payload (not of the handle)
    pub fn payload_type_id(&self) -> TypeId {
        Any::type_id(&*self.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Primitive overrides for constructor parameters, keyed by parameter name
///
/// An override wins over every other resolution source, including a
/// parameter whose declared type the container could build itself.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    values: HashMap<String, Value>,
}

impl Overrides {
    /// Create an empty override map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override (builder style)
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.values.insert(name.into(), Value::new(value));
        self
    }

    /// Add an already wrapped override (builder style)
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Insert or replace an override
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    /// Look up the override for a parameter
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a parameter is overridden
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no overrides
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(parameter, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
