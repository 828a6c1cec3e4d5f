//! Declared, closed collections of variant records.

use crate::error::RegistryError;
use crate::index::{KeyPolicy, LookupIndex};
use crate::variant::{Closed, Declaration, NoBehavior, Ordinal, SetId, VariantRecord};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Extracts a variant's alternate key from its attached data.
pub type KeyExtractor<D> = fn(&D) -> Option<&str>;

/// Whether every variant of a set must carry a behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BehaviorPolicy {
    #[default]
    Optional,
    Required,
}

struct AlternateSpec<D> {
    name: Cow<'static, str>,
    policy: KeyPolicy,
    extract: KeyExtractor<D>,
}

/// Collects declarations and index definitions, then validates them in [`build`].
///
/// [`build`]: VariantSetBuilder::build
pub struct VariantSetBuilder<D, B = NoBehavior> {
    name: Cow<'static, str>,
    declarations: Vec<Declaration<D, B>>,
    alternates: Vec<AlternateSpec<D>>,
    behavior: BehaviorPolicy,
}

impl<D, B> VariantSetBuilder<D, B> {
    fn new(name: Cow<'static, str>) -> Self {
        Self { name, declarations: Vec::new(), alternates: Vec::new(), behavior: BehaviorPolicy::default() }
    }

    /// Declares one variant without behavior.
    #[must_use]
    pub fn variant(self, identity: impl Into<Cow<'static, str>>, data: D) -> Self {
        self.declare(Declaration::new(identity, data))
    }

    #[must_use]
    pub fn declare(mut self, declaration: Declaration<D, B>) -> Self {
        self.declarations.push(declaration);
        self
    }

    #[must_use]
    pub fn declarations(mut self, declarations: impl IntoIterator<Item = Declaration<D, B>>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// Adds a secondary lookup index over the key `extract` returns for each variant.
    #[must_use]
    pub fn alternate_key(
        mut self,
        name: impl Into<Cow<'static, str>>,
        policy: KeyPolicy,
        extract: KeyExtractor<D>,
    ) -> Self {
        self.alternates.push(AlternateSpec { name: name.into(), policy, extract });
        self
    }

    /// Makes a missing behavior a construction error.
    #[must_use]
    pub const fn require_behavior(mut self) -> Self {
        self.behavior = BehaviorPolicy::Required;
        self
    }

    /// Binds a behavior to every declared variant that has none yet.
    ///
    /// `bind` is called once per variant, so each variant receives its own value.
    #[must_use]
    pub fn bind_with(mut self, mut bind: impl FnMut(&D) -> Option<B>) -> Self {
        for declaration in &mut self.declarations {
            if declaration.behavior.is_none() {
                declaration.behavior = bind(&declaration.data);
            }
        }
        self
    }

    /// Validates the declarations and freezes them into a set.
    ///
    /// # Errors
    ///
    /// * `EmptySet` when nothing was declared.
    /// * `DuplicateIdentity` when two variants share an identity key.
    /// * `MissingBehavior` when behavior is required but a variant has none.
    /// * `DuplicateIndex`/`KeyCollision` for inconsistent alternate indexes.
    pub fn build(self) -> Result<VariantSet<D, B>, RegistryError> {
        let Self { name, declarations, alternates, behavior } = self;
        if declarations.is_empty() {
            return Err(RegistryError::EmptySet { set: name, context: None });
        }

        let identities = LookupIndex::identities(&name, declarations.iter().map(|d| d.identity()))?;
        if behavior == BehaviorPolicy::Required
            && let Some(unbound) = declarations.iter().find(|d| d.behavior.is_none())
        {
            return Err(RegistryError::MissingBehavior {
                identity: unbound.identity().to_owned(),
                set: name,
                context: None,
            });
        }

        let mut indexes: Vec<LookupIndex> = Vec::with_capacity(alternates.len());
        for spec in alternates {
            if spec.name == crate::index::IDENTITY_INDEX
                || indexes.iter().any(|index| index.name() == spec.name)
            {
                return Err(RegistryError::DuplicateIndex {
                    set: name,
                    index: spec.name.into_owned(),
                    context: None,
                });
            }
            let keys = declarations.iter().map(|d| (spec.extract)(&d.data));
            indexes.push(LookupIndex::alternate(&name, spec.name, spec.policy, keys)?);
        }

        let id = SetId::next();
        let records: Box<[VariantRecord<D, B>]> = declarations
            .into_iter()
            .enumerate()
            .map(|(position, declaration)| VariantRecord::declared(id, position, declaration))
            .collect();

        debug!(set = %name, variants = records.len(), indexes = indexes.len(), "Variant set declared");

        Ok(VariantSet { name, id, records, identities, alternates: indexes.into_boxed_slice(), behavior })
    }
}

impl<D: fmt::Debug, B> fmt::Debug for VariantSetBuilder<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantSetBuilder")
            .field("name", &self.name)
            .field("declarations", &self.declarations)
            .field("alternates", &self.alternates.iter().map(|a| &a.name).collect::<Vec<_>>())
            .field("behavior", &self.behavior)
            .finish()
    }
}

/// An immutable, ordered, closed collection of variant records.
///
/// Membership is fixed when [`VariantSetBuilder::build`] returns; there is no way to add,
/// remove or mutate records afterwards. A built set is `Send + Sync` whenever its data and
/// behavior are, so it can be shared behind an `Arc` without locking.
pub struct VariantSet<D, B = NoBehavior> {
    name: Cow<'static, str>,
    id: SetId,
    records: Box<[VariantRecord<D, B>]>,
    identities: LookupIndex,
    alternates: Box<[LookupIndex]>,
    behavior: BehaviorPolicy,
}

impl<D, B> VariantSet<D, B> {
    pub fn builder(name: impl Into<Cow<'static, str>>) -> VariantSetBuilder<D, B> {
        VariantSetBuilder::new(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn id(&self) -> SetId {
        self.id
    }

    /// Number of variants; never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn behavior_policy(&self) -> BehaviorPolicy {
        self.behavior
    }

    /// All records in declaration order. Each call starts a fresh iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, VariantRecord<D, B>> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[VariantRecord<D, B>] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, ordinal: Ordinal) -> Option<&VariantRecord<D, B>> {
        self.records.get(ordinal.get())
    }

    #[must_use]
    pub fn first(&self) -> Option<&VariantRecord<D, B>> {
        self.records.first()
    }

    /// `true` when `record` was declared by this set.
    #[must_use]
    pub fn contains(&self, record: &VariantRecord<D, B>) -> bool {
        record.id().set() == self.id
    }

    /// Exact, case-sensitive lookup by identity key.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when no variant has this identity.
    pub fn by_identity(&self, key: &str) -> Result<&VariantRecord<D, B>, RegistryError> {
        let position = self.identities.resolve(&self.name, key, |p| self.identity_at(p))?;
        Ok(&self.records[position])
    }

    /// Returns the data attached to the variant with identity `key`.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when no variant has this identity.
    pub fn data(&self, key: &str) -> Result<&D, RegistryError> {
        self.by_identity(key).map(VariantRecord::data)
    }

    /// # Errors
    ///
    /// `UnknownIdentity` when no variant has this identity.
    pub fn ordinal(&self, key: &str) -> Result<Ordinal, RegistryError> {
        self.by_identity(key).map(VariantRecord::ordinal)
    }

    /// Resolves `key` through the alternate index `index`, applying its key policy.
    ///
    /// # Errors
    ///
    /// * `UnknownIndex` when the set declares no such index.
    /// * `UnknownAlternateKey` when no variant carries the key.
    /// * `AmbiguousAlternateKey` when a shared key matches several variants.
    pub fn by_alternate(&self, index: &str, key: &str) -> Result<&VariantRecord<D, B>, RegistryError> {
        let position = self.index(index)?.resolve(&self.name, key, |p| self.identity_at(p))?;
        Ok(&self.records[position])
    }

    /// The alternate key `record` carries in `index`, in its declared spelling.
    ///
    /// # Errors
    ///
    /// `UnknownIndex` or `ForeignVariant`.
    pub fn alternate_key_of(
        &self,
        index: &str,
        record: &VariantRecord<D, B>,
    ) -> Result<Option<&str>, RegistryError> {
        let index = self.index(index)?;
        self.ensure_member(record)?;
        Ok(index.key_at(record.ordinal().get()))
    }

    /// Looks up an index by name; `"identity"` names the identity index.
    ///
    /// # Errors
    ///
    /// `UnknownIndex` when the set declares no such index.
    pub fn index(&self, name: &str) -> Result<&LookupIndex, RegistryError> {
        if name == self.identities.name() {
            return Ok(&self.identities);
        }
        self.alternates.iter().find(|index| index.name() == name).ok_or_else(|| {
            RegistryError::UnknownIndex { set: self.name.clone(), index: name.to_owned(), context: None }
        })
    }

    #[must_use]
    pub const fn identity_index(&self) -> &LookupIndex {
        &self.identities
    }

    pub fn alternate_indexes(&self) -> impl ExactSizeIterator<Item = &LookupIndex> {
        self.alternates.iter()
    }

    /// Orders two members of this set by declaration position.
    ///
    /// # Errors
    ///
    /// `ForeignVariant` when either record belongs to another set.
    pub fn compare(
        &self,
        a: &VariantRecord<D, B>,
        b: &VariantRecord<D, B>,
    ) -> Result<Ordering, RegistryError> {
        self.ensure_member(a)?;
        self.ensure_member(b)?;
        Ok(a.ordinal().cmp(&b.ordinal()))
    }

    /// Returns the first record, in declaration order, whose data satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&D) -> bool) -> Option<&VariantRecord<D, B>> {
        self.records.iter().find(|record| predicate(record.data()))
    }

    /// Starts a set with one variant per value of the closed enum `T`, attaching the data
    /// `data` derives from each value.
    pub fn from_closed<T: Closed>(mut data: impl FnMut(T) -> D) -> VariantSetBuilder<D, B> {
        Self::builder(T::SET_NAME)
            .declarations(T::VARIANTS.iter().map(|tag| Declaration::new(tag.identity(), data(*tag))))
    }

    /// Returns the record declared for `tag`.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when the set was not seeded from `T`.
    pub fn record_of<T: Closed>(&self, tag: T) -> Result<&VariantRecord<D, B>, RegistryError> {
        self.by_identity(tag.identity())
    }

    pub(crate) fn ensure_member(&self, record: &VariantRecord<D, B>) -> Result<(), RegistryError> {
        if self.contains(record) {
            return Ok(());
        }
        trace!(set = %self.name, identity = record.identity(), "Foreign variant rejected");
        Err(RegistryError::ForeignVariant {
            set: self.name.clone(),
            identity: record.identity().to_owned(),
            context: None,
        })
    }

    pub(crate) fn identity_at(&self, position: usize) -> &str {
        self.records.get(position).map_or("", VariantRecord::identity)
    }

    pub(crate) fn record_at(&self, position: usize) -> Option<&VariantRecord<D, B>> {
        self.records.get(position)
    }
}

impl<D: Closed, B> VariantSet<D, B> {
    /// Starts a set seeded with every value of the closed enum `D`, in declaration order.
    ///
    /// Each value becomes both the identity source and the attached data of its variant.
    pub fn closed() -> VariantSetBuilder<D, B> {
        Self::from_closed(|tag: D| tag)
    }
}

impl<'a, D, B> IntoIterator for &'a VariantSet<D, B> {
    type Item = &'a VariantRecord<D, B>;
    type IntoIter = std::slice::Iter<'a, VariantRecord<D, B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<D, B> fmt::Debug for VariantSet<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantSet")
            .field("name", &self.name)
            .field("variants", &self.records.iter().map(VariantRecord::identity).collect::<Vec<_>>())
            .field("indexes", &self.alternates.iter().map(LookupIndex::name).collect::<Vec<_>>())
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::KeyPolicy;

    #[derive(Debug)]
    struct Zone {
        region: &'static str,
        offset: &'static str,
    }

    fn zones() -> Result<VariantSet<Zone>, RegistryError> {
        VariantSet::builder("TimeZone")
            .variant("UTC", Zone { region: "Global", offset: "+00:00" })
            .variant("EUROPE_KYIV", Zone { region: "Europe", offset: "+02:00" })
            .variant("AMERICA_NEW_YORK", Zone { region: "America", offset: "-05:00" })
            .alternate_key("offset", KeyPolicy::exact(), |zone| Some(zone.offset))
            .build()
    }

    #[test]
    fn iteration_follows_declaration_order() -> Result<(), RegistryError> {
        let set = zones()?;
        let first: Vec<&str> = set.iter().map(VariantRecord::identity).collect();
        let second: Vec<&str> = (&set).into_iter().map(VariantRecord::identity).collect();
        assert_eq!(first, ["UTC", "EUROPE_KYIV", "AMERICA_NEW_YORK"]);
        assert_eq!(first, second);
        assert_eq!(set.ordinal("AMERICA_NEW_YORK")?.get(), 2);
        Ok(())
    }

    #[test]
    fn identity_lookup_is_case_sensitive() -> Result<(), RegistryError> {
        let set = zones()?;
        assert_eq!(set.data("EUROPE_KYIV")?.region, "Europe");
        let err = set.by_identity("europe_kyiv").unwrap_err();
        assert_eq!(err.input(), Some("europe_kyiv"));
        assert_eq!(err.set_name(), "TimeZone");
        assert!(err.is_lookup_failure());
        Ok(())
    }

    #[test]
    fn empty_declarations_are_rejected() {
        let result = VariantSet::<Zone>::builder("Nothing").build();
        assert!(matches!(result, Err(RegistryError::EmptySet { .. })));
    }

    #[test]
    fn duplicate_identities_are_rejected() {
        let err = VariantSet::<u8>::builder("Codes").variant("A", 1).variant("A", 2).build().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateIdentity { ref identity, .. } if identity == "A"));
        assert!(!err.is_lookup_failure());
    }

    #[test]
    fn reserved_and_repeated_index_names_are_rejected() {
        let reserved = VariantSet::<u8>::builder("Codes")
            .variant("A", 1)
            .alternate_key("identity", KeyPolicy::exact(), |_| None)
            .build();
        assert!(matches!(reserved, Err(RegistryError::DuplicateIndex { .. })));

        let repeated = VariantSet::<u8>::builder("Codes")
            .variant("A", 1)
            .alternate_key("code", KeyPolicy::exact(), |_| None)
            .alternate_key("code", KeyPolicy::exact(), |_| None)
            .build();
        assert!(matches!(repeated, Err(RegistryError::DuplicateIndex { .. })));
    }

    #[test]
    fn required_behavior_must_be_bound_everywhere() {
        let result = VariantSet::<u8, fn() -> u8>::builder("Codes")
            .declare(Declaration::new("A", 1).with_behavior(|| 1))
            .variant("B", 2)
            .require_behavior()
            .build();
        assert!(matches!(result, Err(RegistryError::MissingBehavior { ref identity, .. }) if identity == "B"));
    }

    #[test]
    fn bind_with_fills_only_unbound_variants() -> Result<(), RegistryError> {
        let set = VariantSet::<u8, u8>::builder("Codes")
            .declare(Declaration::new("A", 1).with_behavior(10))
            .variant("B", 2)
            .bind_with(|data| Some(data * 100))
            .require_behavior()
            .build()?;
        assert_eq!(set.by_identity("A")?.behavior(), Some(&10));
        assert_eq!(set.by_identity("B")?.behavior(), Some(&200));
        Ok(())
    }

    #[test]
    fn members_of_other_sets_are_foreign() -> Result<(), RegistryError> {
        let left = zones()?;
        let right = zones()?;
        let utc = right.by_identity("UTC")?;
        assert!(!left.contains(utc));
        assert!(matches!(left.compare(left.by_identity("UTC")?, utc), Err(RegistryError::ForeignVariant { .. })));
        assert_eq!(left.by_identity("UTC")?.partial_cmp(utc), None);
        assert_ne!(left.by_identity("UTC")?, utc);
        Ok(())
    }

    #[test]
    fn alternate_keys_resolve_and_report_their_spelling() -> Result<(), RegistryError> {
        let set = zones()?;
        let indexes: Vec<&str> = set.alternate_indexes().map(LookupIndex::name).collect();
        assert_eq!(indexes, ["offset"]);
        let kyiv = set.by_alternate("offset", "+02:00")?;
        assert_eq!(kyiv.identity(), "EUROPE_KYIV");
        assert_eq!(set.alternate_key_of("offset", kyiv)?, Some("+02:00"));
        assert!(matches!(set.by_alternate("region", "Europe"), Err(RegistryError::UnknownIndex { .. })));
        assert!(matches!(
            set.by_alternate("offset", "+09:00"),
            Err(RegistryError::UnknownAlternateKey { ref input, .. }) if input == "+09:00"
        ));
        Ok(())
    }
}
