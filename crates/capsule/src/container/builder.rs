//! Recursive construction of types from their descriptors

use std::any::Any;
use std::sync::Arc;

use capsule_domain::reflection::Instantiation;
use capsule_domain::{
    Arguments, ConstructorParameter, Error, Overrides, Result, TypeDescriptor, TypeIdentity,
    Value,
};
use tracing::trace;

use super::Container;
use super::binding::Binding;
use super::stack::Frame;

impl Container {
    /// Build a type with no overrides
    pub fn make(&mut self, type_identity: impl AsRef<str>) -> Result<Value> {
        self.make_with(type_identity, &Overrides::new())
    }

    /// Build a type, taking named parameters from `overrides` first
    ///
    /// A type bound as a singleton resolves through [`Container::get`]
    /// instead, unless that singleton is the one currently being resolved.
    /// Otherwise each constructor parameter, in order, is taken from
    /// `overrides`, else built recursively from its declared type, else
    /// filled from its default. A nested failure reaches the caller
    /// unchanged.
    pub fn make_with(
        &mut self,
        type_identity: impl AsRef<str>,
        overrides: &Overrides,
    ) -> Result<Value> {
        let requested = type_identity.as_ref();

        let name = self.aliases.translate(requested).to_string();
        let bound_singleton = self.registry.get(&name).is_some_and(Binding::is_singleton);
        if bound_singleton && !self.stack.contains(&Frame::Binding(name.clone())) {
            trace!(type_identity = requested, name = %name, "Delegating make to singleton");
            return self.get(&name);
        }

        self.build_type(&TypeIdentity::new(requested), overrides)
    }

    /// Build a type from its descriptor, never consulting its bindings
    ///
    /// Override-map recipes go through here so that each binding builds with
    /// its own overrides, whichever name the type identity is aliased to.
    pub(crate) fn build_type(
        &mut self,
        identity: &TypeIdentity,
        overrides: &Overrides,
    ) -> Result<Value> {
        let descriptor = self
            .catalog
            .get(identity.as_str())
            .ok_or_else(|| Error::non_existent_class(identity))?;
        self.build(&descriptor, overrides)
    }

    /// Build the Rust type `T` and downcast the result
    pub fn make_as<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
        let identity = TypeIdentity::of::<T>();
        self.make(&identity)?
            .downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(identity.as_str(), std::any::type_name::<T>()))
    }

    fn build(&mut self, descriptor: &TypeDescriptor, overrides: &Overrides) -> Result<Value> {
        let identity = descriptor.identity();
        if !descriptor.is_instantiable() {
            return Err(Error::not_instantiable(identity));
        }

        match descriptor.instantiation() {
            Instantiation::Implicit(produce) => {
                trace!(type_identity = %identity, "Instantiating without constructor");
                Ok(produce())
            }
            Instantiation::Declared(constructor) => {
                self.enter(Frame::Type(identity.clone()))?;
                let arguments = self.resolve_arguments(identity, constructor.parameters(), overrides);
                self.leave();
                constructor.invoke(&arguments?)
            }
            Instantiation::Unavailable => Err(Error::not_instantiable(identity)),
        }
    }

    fn resolve_arguments(
        &mut self,
        identity: &TypeIdentity,
        parameters: &[ConstructorParameter],
        overrides: &Overrides,
    ) -> Result<Arguments> {
        let mut arguments = Arguments::new(identity.clone());
        for parameter in parameters {
            let name = parameter.name();
            let value = if let Some(value) = overrides.get(name) {
                trace!(type_identity = %identity, parameter = name, "Using override");
                value.clone()
            } else if let Some(declared) = parameter.declared_type() {
                trace!(type_identity = %identity, parameter = name, dependency = %declared, "Building dependency");
                self.make(declared)?
            } else if let Some(default) = parameter.default_value() {
                trace!(type_identity = %identity, parameter = name, "Using default");
                default.clone()
            } else {
                return Err(Error::unresolvable_parameter(identity, name));
            };
            arguments.push(name, value);
        }
        Ok(arguments)
    }
}
