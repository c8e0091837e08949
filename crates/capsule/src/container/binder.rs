//! Registration of recipes and instances

use capsule_domain::{Error, Result, TypeIdentity, Value};
use tracing::debug;

use super::Container;
use super::binding::{Binding, Recipe};

impl Container {
    /// Bind a factory: the recipe runs on every resolution
    pub fn bind(
        &mut self,
        name: impl Into<String>,
        type_identity: impl AsRef<str>,
        recipe: impl Into<Recipe>,
    ) -> Result<&mut Self> {
        self.bind_as(name, type_identity, recipe, false)
    }

    /// Bind a singleton: the recipe runs once, on first resolution
    pub fn singleton(
        &mut self,
        name: impl Into<String>,
        type_identity: impl AsRef<str>,
        recipe: impl Into<Recipe>,
    ) -> Result<&mut Self> {
        self.bind_as(name, type_identity, recipe, true)
    }

    /// Register or replace a recipe under `name`
    ///
    /// Fails without touching the container if `name` holds a resolved
    /// singleton, if `type_identity` is not in the catalog, or if the recipe
    /// is a literal value. On success `type_identity` becomes the only alias
    /// for `name`.
    pub fn bind_as(
        &mut self,
        name: impl Into<String>,
        type_identity: impl AsRef<str>,
        recipe: impl Into<Recipe>,
        singleton: bool,
    ) -> Result<&mut Self> {
        let name = name.into();
        self.ensure_rebindable(&name)?;

        let identity = self.known_type(type_identity.as_ref())?;
        let production = recipe.into().normalize(&name, &identity)?;

        let binding = if singleton {
            Binding::singleton(production)
        } else {
            Binding::factory(production)
        };
        debug!(name = %name, type_identity = %identity, singleton, "Bound recipe");
        self.aliases.remove_name(&name);
        self.aliases.insert(identity, name.clone());
        self.registry.insert(name, binding);
        Ok(self)
    }

    /// Register an already constructed value as a resolved singleton
    ///
    /// When the value's Rust type is in the catalog, its identity becomes an
    /// alias for `name`.
    pub fn instance(&mut self, name: impl Into<String>, value: Value) -> Result<&mut Self> {
        let name = name.into();
        self.ensure_rebindable(&name)?;

        self.aliases.remove_name(&name);
        if let Some(identity) = self.catalog.identity_of(value.payload_type_id()).cloned() {
            self.aliases.insert(identity, name.clone());
        }
        debug!(name = %name, value_type = value.type_name(), "Registered instance");
        self.registry.insert(name, Binding::resolved(value));
        Ok(self)
    }

    /// Register an already constructed value under an explicit type identity
    pub fn instance_as(
        &mut self,
        name: impl Into<String>,
        type_identity: impl AsRef<str>,
        value: Value,
    ) -> Result<&mut Self> {
        let name = name.into();
        self.ensure_rebindable(&name)?;

        let identity = self.known_type(type_identity.as_ref())?;
        debug!(name = %name, type_identity = %identity, "Registered instance");
        self.aliases.remove_name(&name);
        self.aliases.insert(identity, name.clone());
        self.registry.insert(name, Binding::resolved(value));
        Ok(self)
    }

    fn ensure_rebindable(&self, name: &str) -> Result<()> {
        if self.registry.get(name).is_some_and(Binding::is_resolved) {
            return Err(Error::already_resolved(name));
        }
        Ok(())
    }

    fn known_type(&self, type_identity: &str) -> Result<TypeIdentity> {
        let identity = TypeIdentity::new(type_identity);
        if !self.catalog.contains(identity.as_str()) {
            return Err(Error::unknown_type(&identity));
        }
        Ok(identity)
    }
}
