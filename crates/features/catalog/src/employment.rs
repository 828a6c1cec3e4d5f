use crate::error::CatalogError;
use crate::forms::{display_codec, display_policy};
use crate::view::Detail;
use canon_domain::config::CatalogConfig;
use canon_domain::constants::DISPLAY_INDEX;
use canon_registry::{Codec, VariantSet, closed_set};

#[closed_set(name = "EmploymentType")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentInfo {
    pub kind: EmploymentType,
    pub display_name: &'static str,
}

impl EmploymentInfo {
    const fn of(kind: EmploymentType) -> Self {
        let display_name = match kind {
            EmploymentType::FullTime => "Full time",
            EmploymentType::PartTime => "Part time",
            EmploymentType::Contractor => "Contractor",
        };
        Self { kind, display_name }
    }
}

impl Detail for EmploymentInfo {
    fn detail(&self) -> String {
        self.display_name.to_owned()
    }
}

/// Employment types and their configured wire codec.
#[derive(Debug)]
pub struct EmploymentTypes {
    codec: Codec<EmploymentInfo>,
}

impl EmploymentTypes {
    pub(crate) fn declare(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let set = VariantSet::from_closed(EmploymentInfo::of)
            .alternate_key(DISPLAY_INDEX, display_policy(config.lookup.display_case), |info| {
                Some(info.display_name)
            })
            .build()?;
        Ok(Self { codec: display_codec(set, &config.codec)? })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<EmploymentInfo> {
        self.codec.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<EmploymentInfo> {
        &self.codec
    }

    /// Encodes `kind` in the configured wire form.
    ///
    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn encode(&self, kind: EmploymentType) -> Result<&str, CatalogError> {
        Ok(self.codec.encode_tag(kind)?)
    }

    /// Decodes a wire value using the configured forms, in order.
    ///
    /// # Errors
    ///
    /// `Decode` carrying the input when no configured form matches.
    pub fn decode(&self, input: &str) -> Result<EmploymentType, CatalogError> {
        Ok(self.codec.decode(input)?.data().kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_domain::config::{DecodeForm, EncodeForm};

    #[test]
    fn default_codec_writes_display_and_reads_both_forms() {
        let types = EmploymentTypes::declare(&CatalogConfig::default()).unwrap();
        assert_eq!(types.encode(EmploymentType::PartTime).unwrap(), "Part time");
        assert_eq!(types.decode("PART_TIME").unwrap(), EmploymentType::PartTime);
        assert_eq!(types.decode("part TIME").unwrap(), EmploymentType::PartTime);
        assert!(matches!(types.decode("part-time"), Err(CatalogError::Decode { .. })));
    }

    #[test]
    fn identity_only_configuration_rejects_display_names() {
        let mut config = CatalogConfig::default();
        config.codec.encode_as = EncodeForm::Identity;
        config.codec.decode_forms = vec![DecodeForm::IdentityIgnoreCase];

        let types = EmploymentTypes::declare(&config).unwrap();
        assert_eq!(types.encode(EmploymentType::FullTime).unwrap(), "FULL_TIME");
        assert_eq!(types.decode("full_time").unwrap(), EmploymentType::FullTime);
        assert!(types.decode("Full time").is_err());
    }

    #[test]
    fn display_encoding_without_display_decoding_breaks_round_trip() {
        let mut config = CatalogConfig::default();
        config.codec.decode_forms = vec![DecodeForm::Identity];
        assert!(matches!(
            EmploymentTypes::declare(&config),
            Err(CatalogError::Registry { source: canon_registry::RegistryError::RoundTripViolation { .. }, .. })
        ));
    }
}
