//! Translation of catalog configuration into registry policies.

use crate::error::CatalogError;
use canon_domain::config::{CodecConfig, DecodeForm, DisplayCase, EncodeForm};
use canon_domain::constants::DISPLAY_INDEX;
use canon_registry::{Codec, KeyPolicy, Representation, Resolution, VariantSet};
use std::borrow::Cow;
use std::sync::Arc;

pub(crate) const fn display_policy(case: DisplayCase) -> KeyPolicy {
    match case {
        DisplayCase::Sensitive => KeyPolicy::exact(),
        DisplayCase::Insensitive => KeyPolicy::ignore_case(),
    }
}

fn representation(form: EncodeForm) -> Representation {
    match form {
        EncodeForm::Identity => Representation::Identity,
        EncodeForm::Display => Representation::Alternate(Cow::Borrowed(DISPLAY_INDEX)),
    }
}

fn resolution(form: DecodeForm) -> Resolution {
    match form {
        DecodeForm::Identity => Resolution::Identity,
        DecodeForm::IdentityIgnoreCase => Resolution::IdentityIgnoreCase,
        DecodeForm::Display => Resolution::Alternate(Cow::Borrowed(DISPLAY_INDEX)),
    }
}

/// Builds the codec of a set carrying a `display` index, as configured.
pub(crate) fn display_codec<D, B>(
    set: impl Into<Arc<VariantSet<D, B>>>,
    config: &CodecConfig,
) -> Result<Codec<D, B>, CatalogError> {
    if config.decode_forms.is_empty() {
        return Err(CatalogError::Config {
            message: "codec.decode_forms must list at least one form".into(),
            context: None,
        });
    }
    let codec = Codec::builder(set)
        .represent(representation(config.encode_as))
        .resolutions(config.decode_forms.iter().copied().map(resolution))
        .build()?;
    Ok(codec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_forms_keep_their_order() {
        let forms = [DecodeForm::Display, DecodeForm::IdentityIgnoreCase];
        let resolutions: Vec<Resolution> = forms.into_iter().map(resolution).collect();
        assert_eq!(resolutions, [Resolution::Alternate(DISPLAY_INDEX.into()), Resolution::IdentityIgnoreCase]);
    }

    #[test]
    fn empty_decode_forms_are_a_config_error() {
        let set = VariantSet::<&'static str>::builder("Demo")
            .variant("ONE", "One")
            .alternate_key(DISPLAY_INDEX, KeyPolicy::exact(), |d| Some(*d))
            .build()
            .unwrap();
        let config = CodecConfig { decode_forms: Vec::new(), ..CodecConfig::default() };
        assert!(matches!(display_codec(set, &config), Err(CatalogError::Config { .. })));
    }
}
