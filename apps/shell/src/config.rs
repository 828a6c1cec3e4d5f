use canon::domain::config::CatalogConfig;
use canon::domain::constants::{CONFIG_FILE, ENV_PREFIX};
use config::{Config, Environment, File};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

#[canon_derive::canon_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads the catalog configuration in layers.
///
/// 1. **File**: `path` when given (must exist), otherwise `canon.toml` if present.
/// 2. **Environment**: variables prefixed with `CANON__`, nested with `__`
///    (e.g. `CANON__CODEC__ENCODE_AS=identity`, `CANON__CODEC__DECODE_FORMS=identity,display`).
///
/// # Errors
/// Fails when an explicit file is missing or any layer does not match [`CatalogConfig`].
pub(crate) fn load_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let file = path.map_or_else(
        || File::with_name(CONFIG_FILE).required(false),
        |path| File::from(path).required(true),
    );

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .list_separator(",")
            .with_list_parse_key("codec.decode_forms")
            .try_parsing(true),
    );

    debug!(path = ?path, "Loading catalog config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<CatalogConfig>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon::domain::config::{DecodeForm, DisplayCase, EncodeForm};
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn file_settings_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("canon.toml");
        fs::write(
            &path,
            "[codec]\nencode_as = \"identity\"\ndecode_forms = [\"identity_ignore_case\"]\n\n[lookup]\ndisplay_case = \"sensitive\"\n",
        )?;

        let config = load_config(Some(&path))?;
        assert_eq!(config.codec.encode_as, EncodeForm::Identity);
        assert_eq!(config.codec.decode_forms, [DecodeForm::IdentityIgnoreCase]);
        assert_eq!(config.lookup.display_case, DisplayCase::Sensitive);
        assert_eq!(config.logging.level, "info");
        Ok(())
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    #[serial]
    fn unknown_forms_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("canon.toml");
        fs::write(&path, "[codec]\nencode_as = \"ordinal\"\n")?;
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Config { .. })));
        Ok(())
    }
}
