//! Bindings and recipes

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use capsule_domain::{Error, Overrides, Result, TypeIdentity, Value};

use super::Container;

/// Production function: receives the container, returns the bound value
pub type Production = Arc<dyn Fn(&mut Container) -> Result<Value> + Send + Sync>;

/// How a binding obtains its value
///
/// `bind` normalizes every accepted recipe into a [`Production`], so the
/// resolver only ever invokes one shape. An override map becomes a build of
/// the bound type with those overrides.
#[derive(Clone)]
pub enum Recipe {
    /// Call a function with the container
    Production(Production),
    /// An already constructed value (only valid for `instance`)
    Instance(Value),
    /// Build the bound type with these primitive overrides
    Overrides(Overrides),
}

impl Recipe {
    /// Recipe from a function returning a [`Value`]
    pub fn production<F>(produce: F) -> Self
    where
        F: Fn(&mut Container) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Production(Arc::new(produce))
    }

    /// Recipe from a function returning a concrete `T`
    pub fn constructor<T, F>(construct: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Container) -> Result<T> + Send + Sync + 'static,
    {
        Self::Production(Arc::new(move |container: &mut Container| {
            construct(container).map(Value::new)
        }))
    }

    /// Recipe building the bound type with `overrides`
    pub fn overrides(overrides: Overrides) -> Self {
        Self::Overrides(overrides)
    }

    /// Literal value recipe
    pub fn value(value: Value) -> Self {
        Self::Instance(value)
    }

    /// Canonical production for a binding of `name` to `identity`
    pub(crate) fn normalize(self, name: &str, identity: &TypeIdentity) -> Result<Production> {
        match self {
            Self::Production(production) => Ok(production),
            Self::Overrides(overrides) => {
                let identity = identity.clone();
                Ok(Arc::new(move |container: &mut Container| {
                    container.build_type(&identity, &overrides)
                }))
            }
            Self::Instance(_) => Err(Error::invalid_recipe(name)),
        }
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::Overrides(Overrides::new())
    }
}

impl From<Overrides> for Recipe {
    fn from(overrides: Overrides) -> Self {
        Self::Overrides(overrides)
    }
}

impl From<Value> for Recipe {
    fn from(value: Value) -> Self {
        Self::Instance(value)
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production(_) => f.write_str("Production"),
            Self::Instance(value) => f.debug_tuple("Instance").field(value).finish(),
            Self::Overrides(overrides) => f.debug_tuple("Overrides").field(overrides).finish(),
        }
    }
}

/// Singleton resolution state
#[derive(Clone)]
pub(crate) enum SingletonState {
    /// Recipe not yet invoked
    Unresolved(Production),
    /// Recipe invoked once; the value is cached until destruction
    Resolved(Value),
}

/// Lifecycle of a binding
#[derive(Clone)]
pub(crate) enum Lifecycle {
    /// Recipe invoked on every resolution, never cached
    Factory(Production),
    /// Recipe invoked at most once
    Singleton(SingletonState),
}

/// Stored recipe plus lifecycle state for one name
#[derive(Clone)]
pub(crate) struct Binding {
    lifecycle: Lifecycle,
}

impl Binding {
    pub(crate) fn factory(production: Production) -> Self {
        Self {
            lifecycle: Lifecycle::Factory(production),
        }
    }

    pub(crate) fn singleton(production: Production) -> Self {
        Self {
            lifecycle: Lifecycle::Singleton(SingletonState::Unresolved(production)),
        }
    }

    pub(crate) fn resolved(value: Value) -> Self {
        Self {
            lifecycle: Lifecycle::Singleton(SingletonState::Resolved(value)),
        }
    }

    pub(crate) fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub(crate) fn is_factory(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Factory(_))
    }

    pub(crate) fn is_singleton(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Singleton(_))
    }

    pub(crate) fn is_resolved(&self) -> bool {
        matches!(
            self.lifecycle,
            Lifecycle::Singleton(SingletonState::Resolved(_))
        )
    }

    /// Cache the first value of an unresolved singleton; a no-op otherwise
    pub(crate) fn resolve(&mut self, value: Value) -> bool {
        if let Lifecycle::Singleton(state @ SingletonState::Unresolved(_)) = &mut self.lifecycle {
            *state = SingletonState::Resolved(value);
            return true;
        }
        false
    }
}
