//! Type identities

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::constants::{ALT_TYPE_PATH_SEPARATOR, TYPE_PATH_SEPARATOR};

/// Normalized, cheaply clonable identity of a type
///
/// Identities are path-like strings (`app::services::Mailer`). Leading
/// separators are stripped and `\` separators are read as `::`, so
/// `"::app::Mailer"`, `"\\app\\Mailer"` and `"app::Mailer"` are one identity.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentity(Arc<str>);

impl TypeIdentity {
    /// Create a normalized identity
    pub fn new(identity: impl AsRef<str>) -> Self {
        let raw = identity.as_ref().trim();
        let normalized = if raw.contains(ALT_TYPE_PATH_SEPARATOR) {
            raw.replace(ALT_TYPE_PATH_SEPARATOR, TYPE_PATH_SEPARATOR)
        } else {
            raw.to_string()
        };
        let trimmed = normalized.trim_start_matches(TYPE_PATH_SEPARATOR);
        Self(Arc::from(trimmed))
    }

    /// Identity of a Rust type
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// The full identity
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment without generic arguments
    ///
    /// `app::repo::Store<app::User>` becomes `Store` and `&app::User` becomes
    /// `User`. Tuples, arrays and slices have no single segment and are
    /// returned whole, minus any reference or pointer prefix.
    pub fn short_name(&self) -> &str {
        let referent = strip_indirection(&self.0);
        if referent.starts_with(['(', '[']) {
            return referent;
        }
        let path = referent.split('<').next().unwrap_or(referent);
        path.rsplit(TYPE_PATH_SEPARATOR).next().unwrap_or(path)
    }
}

/// Drop leading `&`, `&mut`, `*const` and `*mut` markers
fn strip_indirection(mut identity: &str) -> &str {
    loop {
        let stripped = identity
            .strip_prefix('&')
            .or_else(|| identity.strip_prefix("mut "))
            .or_else(|| identity.strip_prefix("*const "))
            .or_else(|| identity.strip_prefix("*mut "));
        match stripped {
            Some(rest) => identity = rest.trim_start(),
            None => return identity,
        }
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdentity({})", self.0)
    }
}

impl Borrow<str> for TypeIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeIdentity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

impl From<String> for TypeIdentity {
    fn from(identity: String) -> Self {
        Self::new(identity)
    }
}

impl From<&TypeIdentity> for TypeIdentity {
    fn from(identity: &TypeIdentity) -> Self {
        identity.clone()
    }
}
