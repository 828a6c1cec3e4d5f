use crate::codec::DecodeError;
use canon_derive::canon_error;
use std::borrow::Cow;

/// Failures raised while declaring sets, building codecs and resolving variants.
///
/// Every variant names the set it came from so that a failure at a system boundary can
/// be reported without further lookups.
#[canon_error]
pub enum RegistryError {
    #[error("Variant set `{set}` declares no variants{}", format_context(.context))]
    EmptySet { set: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate identity `{identity}` in variant set `{set}`{}", format_context(.context))]
    DuplicateIdentity {
        set: Cow<'static, str>,
        identity: String,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Variant `{identity}` of `{set}` has no behavior bound, but the set requires one{}",
        format_context(.context)
    )]
    MissingBehavior {
        set: Cow<'static, str>,
        identity: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Lookup index `{index}` is declared twice on `{set}`{}", format_context(.context))]
    DuplicateIndex { set: Cow<'static, str>, index: String, context: Option<Cow<'static, str>> },

    #[error(
        "Key `{key}` of index `{index}` on `{set}` is claimed by both `{first}` and `{second}`{}",
        format_context(.context)
    )]
    KeyCollision {
        set: Cow<'static, str>,
        index: String,
        key: String,
        first: String,
        second: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown identity `{identity}` for variant set `{set}`{}", format_context(.context))]
    UnknownIdentity {
        set: Cow<'static, str>,
        identity: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("No `{set}` variant has {index} `{input}`{}", format_context(.context))]
    UnknownAlternateKey {
        set: Cow<'static, str>,
        index: String,
        input: String,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "{index} `{input}` matches several `{set}` variants: {}{}",
        .candidates.join(", "),
        format_context(.context)
    )]
    AmbiguousAlternateKey {
        set: Cow<'static, str>,
        index: String,
        input: String,
        candidates: Vec<String>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Variant set `{set}` has no lookup index `{index}`{}", format_context(.context))]
    UnknownIndex { set: Cow<'static, str>, index: String, context: Option<Cow<'static, str>> },

    #[error("Variant `{identity}` does not belong to variant set `{set}`{}", format_context(.context))]
    ForeignVariant {
        set: Cow<'static, str>,
        identity: String,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Encoding of `{set}` through `{index}` is not total: `{identity}` has no key{}",
        format_context(.context)
    )]
    NonTotalEncoding {
        set: Cow<'static, str>,
        index: String,
        identity: String,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Codec for `{set}` does not round-trip: `{identity}` encodes to `{encoded}` but decodes {}{}",
        .resolved.as_deref().map_or_else(|| "to nothing".to_owned(), |r| format!("to `{r}`")),
        format_context(.context)
    )]
    RoundTripViolation {
        set: Cow<'static, str>,
        identity: String,
        encoded: String,
        resolved: Option<String>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Codec for `{set}` has no decoding strategy{}", format_context(.context))]
    EmptyStrategies { set: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: DecodeError, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// Name of the variant set the failure belongs to.
    #[must_use]
    pub fn set_name(&self) -> &str {
        match self {
            Self::EmptySet { set, .. }
            | Self::DuplicateIdentity { set, .. }
            | Self::MissingBehavior { set, .. }
            | Self::DuplicateIndex { set, .. }
            | Self::KeyCollision { set, .. }
            | Self::UnknownIdentity { set, .. }
            | Self::UnknownAlternateKey { set, .. }
            | Self::AmbiguousAlternateKey { set, .. }
            | Self::UnknownIndex { set, .. }
            | Self::ForeignVariant { set, .. }
            | Self::NonTotalEncoding { set, .. }
            | Self::RoundTripViolation { set, .. }
            | Self::EmptyStrategies { set, .. } => set,
            Self::Decode { source, .. } => source.set_name(),
        }
    }

    /// The caller-supplied string that failed to resolve, when there was one.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::UnknownIdentity { identity: input, .. }
            | Self::UnknownAlternateKey { input, .. }
            | Self::AmbiguousAlternateKey { input, .. } => Some(input),
            Self::Decode { source, .. } => Some(source.input()),
            _ => None,
        }
    }

    /// `true` for failures caused by caller input rather than by a faulty declaration.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::UnknownIdentity { .. }
                | Self::UnknownAlternateKey { .. }
                | Self::AmbiguousAlternateKey { .. }
                | Self::ForeignVariant { .. }
                | Self::Decode { .. }
        )
    }
}
