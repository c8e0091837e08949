//! Domain constants

/// Path separator used in Rust type identities
pub const TYPE_PATH_SEPARATOR: &str = "::";

/// Alternative separator accepted when normalizing foreign-style identities
pub const ALT_TYPE_PATH_SEPARATOR: char = '\\';

/// Separator used when rendering a resolution chain in error messages
pub const RESOLUTION_CHAIN_SEPARATOR: &str = " -> ";
