use super::Codec;
use crate::variant::VariantRecord;
use ::serde::de::{self, DeserializeSeed, Deserializer, Visitor};
use ::serde::ser::{self, Serialize, Serializer};
use std::fmt;

impl<D, B> Codec<D, B> {
    /// Serializes `variant` as its encoded string.
    ///
    /// # Errors
    ///
    /// Fails when `variant` belongs to another set or the serializer fails.
    pub fn serialize<S: Serializer>(
        &self,
        variant: &VariantRecord<D, B>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode(variant).map_err(<S::Error as ser::Error>::custom)?)
    }

    /// Pairs `variant` with this codec so it can sit inside a `#[derive(Serialize)]` struct.
    #[must_use]
    pub const fn encoded<'c>(&'c self, variant: &'c VariantRecord<D, B>) -> Encoded<'c, D, B> {
        Encoded { codec: self, variant }
    }

    /// Seed that deserializes a string and decodes it through this codec.
    #[must_use]
    pub const fn seed(&self) -> VariantSeed<'_, D, B> {
        VariantSeed { codec: self }
    }
}

/// Serializable view of one variant under one codec.
pub struct Encoded<'c, D, B> {
    codec: &'c Codec<D, B>,
    variant: &'c VariantRecord<D, B>,
}

impl<D, B> Serialize for Encoded<'_, D, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.codec.serialize(self.variant, serializer)
    }
}

impl<D, B> fmt::Debug for Encoded<'_, D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoded").field(&self.variant.identity()).finish()
    }
}

/// [`DeserializeSeed`] resolving a string to a record of the codec's set.
pub struct VariantSeed<'c, D, B> {
    codec: &'c Codec<D, B>,
}

impl<D, B> Clone for VariantSeed<'_, D, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, B> Copy for VariantSeed<'_, D, B> {}

impl<D, B> fmt::Debug for VariantSeed<'_, D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantSeed").field("set", &self.codec.set().name()).finish()
    }
}

impl<'de, 'c, D, B> DeserializeSeed<'de> for VariantSeed<'c, D, B> {
    type Value = &'c VariantRecord<D, B>;

    fn deserialize<De: Deserializer<'de>>(self, deserializer: De) -> Result<Self::Value, De::Error> {
        deserializer.deserialize_str(self)
    }
}

impl<'de, 'c, D, B> DeserializeSeed<'de> for &'c Codec<D, B> {
    type Value = &'c VariantRecord<D, B>;

    fn deserialize<De: Deserializer<'de>>(self, deserializer: De) -> Result<Self::Value, De::Error> {
        self.seed().deserialize(deserializer)
    }
}

impl<'c, D, B> Visitor<'_> for VariantSeed<'c, D, B> {
    type Value = &'c VariantRecord<D, B>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a `{}` representation", self.codec.set().name())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.codec.decode(v).map_err(E::custom)
    }
}
