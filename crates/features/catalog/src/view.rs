//! Type-erased, read-only view over any catalog set, for callers that only know a set
//! by name.

use crate::error::CatalogError;
use canon_registry::{Codec, LookupIndex};
use std::fmt;

/// Human-readable summary of a variant's attached data.
pub trait Detail {
    fn detail(&self) -> String;
}

/// One variant as listed by a [`SetView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub ordinal: usize,
    pub identity: String,
    pub encoded: String,
    pub detail: String,
}

pub trait SetView: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Names of the alternate-key indexes declared on the set.
    fn indexes(&self) -> Vec<&str>;

    /// Every variant in declaration order.
    fn entries(&self) -> Vec<Entry>;

    /// Decodes `input` through the set's codec and returns the identity it resolved to.
    ///
    /// # Errors
    ///
    /// `Decode` naming the set and the input when no strategy matches.
    fn decode(&self, input: &str) -> Result<&str, CatalogError>;

    /// Encodes the variant with the given identity through the set's codec.
    ///
    /// # Errors
    ///
    /// `Registry` wrapping `UnknownIdentity` when no variant has this identity.
    fn encode(&self, identity: &str) -> Result<&str, CatalogError>;
}

impl<D, B> SetView for Codec<D, B>
where
    D: Detail + Send + Sync,
    B: Send + Sync,
{
    fn name(&self) -> &str {
        self.set().name()
    }

    fn indexes(&self) -> Vec<&str> {
        self.set().alternate_indexes().map(LookupIndex::name).collect()
    }

    fn entries(&self) -> Vec<Entry> {
        self.set()
            .iter()
            .map(|record| Entry {
                ordinal: record.ordinal().get(),
                identity: record.identity().to_owned(),
                encoded: Codec::encode(self, record).map(str::to_owned).unwrap_or_default(),
                detail: record.data().detail(),
            })
            .collect()
    }

    fn decode(&self, input: &str) -> Result<&str, CatalogError> {
        Ok(Codec::decode(self, input)?.identity())
    }

    fn encode(&self, identity: &str) -> Result<&str, CatalogError> {
        Ok(self.encode_identity(identity)?)
    }
}
