//! Removal of bindings

use capsule_domain::{Error, Result};
use tracing::debug;

use super::Container;

impl Container {
    /// Remove a binding, its lifecycle state and every alias pointing at it
    ///
    /// Destroying a name that is not bound fails, including a second
    /// destroy of the same name.
    pub fn destroy(&mut self, name_or_type: impl AsRef<str>) -> Result<()> {
        let name = self.aliases.translate(name_or_type.as_ref()).to_string();
        if self.registry.remove(&name).is_none() {
            return Err(Error::not_found_for_destroy(name));
        }
        self.aliases.remove_name(&name);
        debug!(name = %name, "Destroyed binding");
        Ok(())
    }
}
