use canon_domain::config::{
    CatalogConfig, CodecConfig, DecodeForm, DisplayCase, EncodeForm, LoggingConfig,
};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let codec = CodecConfig::default();
    assert_eq!(codec.encode_as, EncodeForm::Display);
    assert_eq!(codec.decode_forms, [DecodeForm::Identity, DecodeForm::Display]);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    let config = CatalogConfig::default();
    assert_eq!(config.lookup.display_case, DisplayCase::Insensitive);
}

#[test]
fn catalog_config_deserializes() {
    let raw = json!({
        "codec": { "encode_as": "identity", "decode_forms": ["identity_ignore_case", "display"] },
        "lookup": { "display_case": "sensitive" },
        "logging": { "level": "debug", "directory": "/tmp/logs", "json": true }
    });

    let cfg: CatalogConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.codec.encode_as, EncodeForm::Identity);
    assert_eq!(cfg.codec.decode_forms, [DecodeForm::IdentityIgnoreCase, DecodeForm::Display]);
    assert_eq!(cfg.lookup.display_case, DisplayCase::Sensitive);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert!(cfg.logging.json);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: CatalogConfig =
        serde_json::from_value(json!({ "logging": { "level": "warn" } })).expect("partial config");
    assert_eq!(cfg.logging.level, "warn");
    assert_eq!(cfg.codec.encode_as, EncodeForm::Display);
}

#[test]
fn unknown_forms_are_rejected() {
    let raw = json!({ "codec": { "decode_forms": ["kebab"] } });
    assert!(serde_json::from_value::<CatalogConfig>(raw).is_err());
}

#[test]
fn config_clones_share_until_mutated() {
    let shared = CatalogConfig::default();
    let mut tuned = shared.clone();
    tuned.codec.encode_as = EncodeForm::Identity;

    assert_eq!(shared.codec.encode_as, EncodeForm::Display);
    assert_eq!(tuned.codec.encode_as, EncodeForm::Identity);
}
