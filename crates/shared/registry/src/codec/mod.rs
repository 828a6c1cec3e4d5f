//! Bidirectional mapping between variants and external string representations.
//!
//! A codec fixes one representation used for encoding and an ordered list of resolution
//! strategies used for decoding. Both are validated eagerly: a codec that builds is total
//! on encode and round-trips every variant of its set.

mod error;
mod serde;

pub use error::{DecodeError, DecodeErrorExt};
pub use self::serde::{Encoded, VariantSeed};

use crate::error::RegistryError;
use crate::index::{IDENTITY_INDEX, KeyPolicy, LookupIndex};
use crate::set::VariantSet;
use crate::variant::{Closed, NoBehavior, VariantRecord};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Form a variant takes when encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// The canonical identity key.
    Identity,
    /// The declared key of the named alternate index.
    Alternate(Cow<'static, str>),
}

/// One decoding strategy. Strategies are tried in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact identity key.
    Identity,
    /// Identity key compared after lowercasing both sides.
    IdentityIgnoreCase,
    /// Key of the named alternate index, under that index's own policy.
    Alternate(Cow<'static, str>),
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str(IDENTITY_INDEX),
            Self::Alternate(index) => f.write_str(index),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str(IDENTITY_INDEX),
            Self::IdentityIgnoreCase => write!(f, "{IDENTITY_INDEX} (ignore case)"),
            Self::Alternate(index) => f.write_str(index),
        }
    }
}

#[derive(Debug)]
pub struct CodecBuilder<D, B = NoBehavior> {
    set: Arc<VariantSet<D, B>>,
    representation: Representation,
    resolutions: Vec<Resolution>,
}

impl<D, B> CodecBuilder<D, B> {
    #[must_use]
    pub fn represent(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    #[must_use]
    pub fn resolve(mut self, resolution: Resolution) -> Self {
        self.resolutions.push(resolution);
        self
    }

    #[must_use]
    pub fn resolutions(mut self, resolutions: impl IntoIterator<Item = Resolution>) -> Self {
        self.resolutions.extend(resolutions);
        self
    }

    /// Validates the configuration against the set.
    ///
    /// # Errors
    ///
    /// * `EmptyStrategies` when no resolution strategy was added.
    /// * `UnknownIndex` when a strategy or the representation names an undeclared index.
    /// * `KeyCollision` when identities collide under `IdentityIgnoreCase`.
    /// * `NonTotalEncoding` when some variant has no key in the representation index.
    /// * `RoundTripViolation` when decoding an encoded variant yields another variant.
    pub fn build(self) -> Result<Codec<D, B>, RegistryError> {
        let Self { set, representation, resolutions } = self;
        if resolutions.is_empty() {
            return Err(RegistryError::EmptyStrategies { set: set.name().to_owned().into(), context: None });
        }

        let mut folded = None;
        for resolution in &resolutions {
            match resolution {
                Resolution::Identity => {},
                Resolution::IdentityIgnoreCase => {
                    if folded.is_none() {
                        folded = Some(LookupIndex::alternate(
                            set.name(),
                            resolution.to_string().into(),
                            KeyPolicy::ignore_case(),
                            set.iter().map(|record| Some(record.identity())),
                        )?);
                    }
                },
                Resolution::Alternate(index) => {
                    set.index(index)?;
                },
            }
        }

        let encoded = encodings(&set, &representation)?;
        let codec = Codec { set, representation, resolutions: resolutions.into_boxed_slice(), folded, encoded };
        codec.verify_round_trip()?;

        debug!(
            set = codec.set.name(),
            representation = %codec.representation,
            strategies = codec.resolutions.len(),
            "Codec ready"
        );
        Ok(codec)
    }
}

fn encodings<D, B>(
    set: &VariantSet<D, B>,
    representation: &Representation,
) -> Result<Box<[Box<str>]>, RegistryError> {
    match representation {
        Representation::Identity => Ok(set.iter().map(|record| Box::from(record.identity())).collect()),
        Representation::Alternate(name) => {
            let index = set.index(name)?;
            set.iter()
                .map(|record| {
                    index.key_at(record.ordinal().get()).map(Box::from).ok_or_else(|| {
                        RegistryError::NonTotalEncoding {
                            set: set.name().to_owned().into(),
                            index: name.to_string(),
                            identity: record.identity().to_owned(),
                            context: None,
                        }
                    })
                })
                .collect()
        },
    }
}

/// Validated encoder/decoder for the variants of one shared set.
pub struct Codec<D, B = NoBehavior> {
    set: Arc<VariantSet<D, B>>,
    representation: Representation,
    resolutions: Box<[Resolution]>,
    folded: Option<LookupIndex>,
    encoded: Box<[Box<str>]>,
}

impl<D, B> Codec<D, B> {
    pub fn builder(set: impl Into<Arc<VariantSet<D, B>>>) -> CodecBuilder<D, B> {
        CodecBuilder { set: set.into(), representation: Representation::Identity, resolutions: Vec::new() }
    }

    /// Codec that encodes and decodes exact identity keys only.
    ///
    /// # Errors
    ///
    /// Never fails for a built set; the `Result` mirrors [`CodecBuilder::build`].
    pub fn canonical(set: impl Into<Arc<VariantSet<D, B>>>) -> Result<Self, RegistryError> {
        Self::builder(set).resolve(Resolution::Identity).build()
    }

    #[must_use]
    pub fn set(&self) -> &Arc<VariantSet<D, B>> {
        &self.set
    }

    #[must_use]
    pub const fn representation(&self) -> &Representation {
        &self.representation
    }

    #[must_use]
    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    /// Returns the external representation of `variant`.
    ///
    /// # Errors
    ///
    /// `ForeignVariant` when `variant` belongs to another set.
    pub fn encode(&self, variant: &VariantRecord<D, B>) -> Result<&str, RegistryError> {
        self.set.ensure_member(variant)?;
        Ok(self.encoded_at(variant.ordinal().get()))
    }

    /// Encodes the variant with the given identity.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when no variant has this identity.
    pub fn encode_identity(&self, identity: &str) -> Result<&str, RegistryError> {
        let variant = self.set.by_identity(identity)?;
        Ok(self.encoded_at(variant.ordinal().get()))
    }

    /// Encodes the variant declared for a closed enum value.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when the set was not seeded from `T`.
    pub fn encode_tag<T: Closed>(&self, tag: T) -> Result<&str, RegistryError> {
        self.encode_identity(tag.identity())
    }

    /// Resolves `input` by trying each strategy in order; the first match wins.
    ///
    /// A shared key of a non-unique alternate index matches no variant, so the next
    /// strategy is tried.
    ///
    /// # Errors
    ///
    /// `UnrecognizedRepresentation` carrying the exact input when no strategy matches.
    pub fn decode(&self, input: &str) -> Result<&VariantRecord<D, B>, DecodeError> {
        self.resolutions
            .iter()
            .find_map(|resolution| self.try_resolve(resolution, input))
            .and_then(|position| self.set.record_at(position))
            .ok_or_else(|| {
                trace!(set = self.set.name(), input, "Representation not recognized");
                DecodeError::UnrecognizedRepresentation {
                    set: self.set.name().to_owned().into(),
                    input: input.to_owned(),
                    context: None,
                }
            })
    }

    fn try_resolve(&self, resolution: &Resolution, input: &str) -> Option<usize> {
        match resolution {
            Resolution::Identity => self.set.identity_index().find(input),
            Resolution::IdentityIgnoreCase => self.folded.as_ref()?.find(input),
            Resolution::Alternate(name) => self.set.index(name).ok()?.find(input),
        }
    }

    fn encoded_at(&self, position: usize) -> &str {
        self.encoded.get(position).map_or("", AsRef::as_ref)
    }

    fn verify_round_trip(&self) -> Result<(), RegistryError> {
        for record in self.set.iter() {
            let encoded = self.encoded_at(record.ordinal().get());
            let resolved = self.decode(encoded).ok();
            if resolved != Some(record) {
                return Err(RegistryError::RoundTripViolation {
                    set: self.set.name().to_owned().into(),
                    identity: record.identity().to_owned(),
                    encoded: encoded.to_owned(),
                    resolved: resolved.map(|r| r.identity().to_owned()),
                    context: None,
                });
            }
        }
        Ok(())
    }
}

impl<D: Closed, B> Codec<D, B> {
    /// Decodes `input` straight to the closed enum value.
    ///
    /// # Errors
    ///
    /// `UnrecognizedRepresentation` when no strategy matches.
    pub fn decode_tag(&self, input: &str) -> Result<D, DecodeError> {
        self.decode(input).map(|record| *record.data())
    }
}

impl<D, B> fmt::Debug for Codec<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("set", &self.set.name())
            .field("representation", &self.representation)
            .field("resolutions", &self.resolutions)
            .finish_non_exhaustive()
    }
}
