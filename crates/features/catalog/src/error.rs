use canon_registry::{DecodeError, RegistryError};
use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[canon_derive::canon_error]
pub enum CatalogError {
    /// Set declaration, lookup and encoding failures.
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: DecodeError, context: Option<Cow<'static, str>> },

    /// JSON (de)serialization of wire structs.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("No variant set named `{name}`{}", format_context(.context))]
    UnknownSet { name: String, context: Option<Cow<'static, str>> },

    /// Configuration values the catalog cannot honor.
    #[error("Catalog config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    /// `true` when the caller named a set or value the catalog does not know.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        match self {
            Self::Registry { source, .. } => source.is_lookup_failure(),
            Self::Decode { .. } | Self::UnknownSet { .. } => true,
            Self::Json { .. } | Self::Config { .. } | Self::Internal { .. } => false,
        }
    }
}
