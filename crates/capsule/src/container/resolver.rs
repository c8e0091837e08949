//! Resolution by name or type identity

use std::any::Any;
use std::sync::Arc;

use capsule_domain::{Error, Result, TypeIdentity, Value};
use tracing::{debug, trace};

use super::Container;
use super::binding::{Binding, Lifecycle, SingletonState};
use super::stack::Frame;

impl Container {
    /// Resolve a binding by name or by the type identity it was bound to
    ///
    /// Factories run their recipe on every call. A singleton runs its recipe
    /// on the first call only and returns the cached value afterwards.
    pub fn get(&mut self, name_or_type: impl AsRef<str>) -> Result<Value> {
        let name = self.aliases.translate(name_or_type.as_ref()).to_string();

        let (production, singleton) = match self.registry.get(&name).map(Binding::lifecycle) {
            None => return Err(Error::not_found(name)),
            Some(Lifecycle::Singleton(SingletonState::Resolved(value))) => {
                trace!(name = %name, "Returning cached singleton");
                return Ok(value.clone());
            }
            Some(Lifecycle::Singleton(SingletonState::Unresolved(production))) => {
                (Arc::clone(production), true)
            }
            Some(Lifecycle::Factory(production)) => (Arc::clone(production), false),
        };

        trace!(name = %name, singleton, "Invoking recipe");
        self.enter(Frame::Binding(name.clone()))?;
        let produced = production(self);
        self.leave();
        let value = produced?;

        if singleton
            && self
                .registry
                .get_mut(&name)
                .is_some_and(|binding| binding.resolve(value.clone()))
        {
            debug!(name = %name, value_type = value.type_name(), "Resolved singleton");
        }
        Ok(value)
    }

    /// Resolve a binding and downcast it to `T`
    pub fn get_as<T: Any + Send + Sync>(&mut self, name_or_type: impl AsRef<str>) -> Result<Arc<T>> {
        let name_or_type = name_or_type.as_ref();
        self.get(name_or_type)?
            .downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(name_or_type, std::any::type_name::<T>()))
    }

    /// Resolve the binding registered for the Rust type `T`
    pub fn resolve<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
        self.get_as::<T>(TypeIdentity::of::<T>())
    }

    /// Whether a binding exists for a name or type identity
    pub fn has(&self, name_or_type: impl AsRef<str>) -> bool {
        self.binding(name_or_type.as_ref()).is_some()
    }

    /// Whether a type identity has been bound under some name
    pub fn has_namespace(&self, type_identity: impl AsRef<str>) -> bool {
        self.aliases.contains(type_identity.as_ref())
    }

    /// Whether the binding is a factory
    pub fn is_factory(&self, name_or_type: impl AsRef<str>) -> bool {
        self.binding(name_or_type.as_ref())
            .is_some_and(Binding::is_factory)
    }

    /// Whether the binding is a singleton
    pub fn is_singleton(&self, name_or_type: impl AsRef<str>) -> bool {
        self.binding(name_or_type.as_ref())
            .is_some_and(Binding::is_singleton)
    }

    /// Whether the binding is a singleton whose value has been produced
    ///
    /// Factories are never resolved.
    pub fn is_resolved(&self, name_or_type: impl AsRef<str>) -> bool {
        self.binding(name_or_type.as_ref())
            .is_some_and(Binding::is_resolved)
    }

    pub(crate) fn binding(&self, name_or_type: &str) -> Option<&Binding> {
        self.registry.get(self.aliases.translate(name_or_type))
    }
}
