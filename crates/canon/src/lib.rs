//! Facade crate for the canon workspace.
//! Re-exports the registry core, the configuration models and the catalog slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `canon` (with `logger` for binaries that install a subscriber).
//! - Call `canon::init` once and clone the returned [`catalog::Catalog`] where needed.
//! - Without a direct `canon-registry` dependency, declare sets with
//!   `#[closed_set(crate = "canon::registry")]`.

pub use canon_catalog as catalog;
use canon_catalog::{Catalog, CatalogError};
pub use canon_domain as domain;
use canon_domain::config::CatalogConfig;
#[cfg(feature = "logger")]
pub use canon_logger as logger;
pub use canon_registry as registry;

pub mod prelude {
    pub use canon_catalog::view::{Entry, SetView};
    pub use canon_catalog::{Catalog, CatalogError};
    pub use canon_domain::config::CatalogConfig;
    pub use canon_registry::prelude::*;
}

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "logger")]
    "logger",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}

/// Declares the catalog under `config`.
///
/// # Errors
/// Returns an error if any set or codec fails to build.
pub fn init(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    canon_catalog::init(config)
}
