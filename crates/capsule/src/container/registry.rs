//! Binding registry and alias index

use std::collections::HashMap;

use capsule_domain::TypeIdentity;

use super::binding::Binding;

/// Bindings by logical name
#[derive(Clone, Default)]
pub(crate) struct BindingRegistry {
    bindings: HashMap<String, Binding>,
}

impl BindingRegistry {
    pub(crate) fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(name)
    }

    pub(crate) fn insert(&mut self, name: String, binding: Binding) {
        self.bindings.insert(name, binding);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }
}

/// Type identity → the name it was bound under (last write wins)
#[derive(Clone, Default)]
pub(crate) struct AliasIndex {
    aliases: HashMap<TypeIdentity, String>,
}

impl AliasIndex {
    /// The bound name for a type identity, or the input itself
    pub(crate) fn translate<'a>(&'a self, name_or_type: &'a str) -> &'a str {
        self.aliases
            .get(TypeIdentity::new(name_or_type).as_str())
            .map_or(name_or_type, String::as_str)
    }

    pub(crate) fn insert(&mut self, identity: TypeIdentity, name: String) {
        self.aliases.insert(identity, name);
    }

    pub(crate) fn contains(&self, identity: &str) -> bool {
        self.aliases
            .contains_key(TypeIdentity::new(identity).as_str())
    }

    /// Drop every alias pointing at `name`
    pub(crate) fn remove_name(&mut self, name: &str) {
        self.aliases.retain(|_, bound| bound != name);
    }
}
