use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level catalog configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfigInner {
    pub codec: CodecConfig,
    pub lookup: LookupConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(flatten, default)]
    inner: Arc<CatalogConfigInner>,
}

impl Deref for CatalogConfig {
    type Target = CatalogConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CatalogConfig {
    fn deref_mut(&mut self) -> &mut CatalogConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Form used when a variant is written out.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodeForm {
    Identity,
    #[default]
    Display,
}

/// One accepted input form; decoding tries them in the configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeForm {
    Identity,
    IdentityIgnoreCase,
    Display,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCase {
    Sensitive,
    #[default]
    Insensitive,
}

/// Codec settings for sets that have a display name.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub encode_as: EncodeForm,
    pub decode_forms: Vec<DecodeForm>,
}

/// Display-name lookup settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub display_case: DisplayCase,
}

/// Logging sink configuration for binaries embedding the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for CodecConfig {
    fn default() -> Self {
        Self { encode_as: EncodeForm::Display, decode_forms: vec![DecodeForm::Identity, DecodeForm::Display] }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
