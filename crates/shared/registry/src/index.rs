//! Hash-backed key lookup over the variants of one set.

use crate::error::RegistryError;
use fxhash::FxHashMap;
use std::borrow::Cow;
use tracing::trace;

/// Name of the index every set builds over its identity keys.
pub const IDENTITY_INDEX: &str = "identity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    Sensitive,
    /// Keys are compared after Unicode lowercasing.
    #[default]
    Insensitive,
}

impl CaseSensitivity {
    /// Folds `key` into the form stored in the index.
    #[must_use]
    pub fn normalize(self, key: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(key),
            Self::Insensitive => {
                // Titlecase letters such as `ǅ` are not uppercase yet still fold.
                let lowered = key.to_lowercase();
                if lowered == key { Cow::Borrowed(key) } else { Cow::Owned(lowered) }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Uniqueness {
    /// Two variants producing the same normalized key fail set construction.
    #[default]
    Unique,
    /// Shared keys are accepted; resolving one reports the ambiguity.
    Shared,
}

/// Matching rules of one lookup index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyPolicy {
    pub case: CaseSensitivity,
    pub uniqueness: Uniqueness,
}

impl KeyPolicy {
    /// Case-sensitive, unique keys.
    #[must_use]
    pub const fn exact() -> Self {
        Self { case: CaseSensitivity::Sensitive, uniqueness: Uniqueness::Unique }
    }

    /// Case-insensitive, unique keys.
    #[must_use]
    pub const fn ignore_case() -> Self {
        Self { case: CaseSensitivity::Insensitive, uniqueness: Uniqueness::Unique }
    }

    #[must_use]
    pub const fn allow_shared(mut self) -> Self {
        self.uniqueness = Uniqueness::Shared;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Identity,
    Alternate,
}

#[derive(Debug, Clone)]
enum Slot {
    One(usize),
    Shared(Vec<usize>),
}

/// Precomputed mapping from normalized key to declaration position.
///
/// Built once together with its set and read-only afterwards. Variants without a key
/// are simply absent from the table.
#[derive(Debug, Clone)]
pub struct LookupIndex {
    name: Cow<'static, str>,
    kind: IndexKind,
    policy: KeyPolicy,
    slots: FxHashMap<Box<str>, Slot>,
    keys: Box<[Option<Box<str>>]>,
}

impl LookupIndex {
    pub(crate) fn identities<'k>(
        set: &str,
        keys: impl ExactSizeIterator<Item = &'k str>,
    ) -> Result<Self, RegistryError> {
        Self::build(set, IDENTITY_INDEX.into(), IndexKind::Identity, KeyPolicy::exact(), keys.map(Some))
    }

    pub(crate) fn alternate<'k>(
        set: &str,
        name: Cow<'static, str>,
        policy: KeyPolicy,
        keys: impl ExactSizeIterator<Item = Option<&'k str>>,
    ) -> Result<Self, RegistryError> {
        Self::build(set, name, IndexKind::Alternate, policy, keys)
    }

    fn build<'k>(
        set: &str,
        name: Cow<'static, str>,
        kind: IndexKind,
        policy: KeyPolicy,
        keys: impl ExactSizeIterator<Item = Option<&'k str>>,
    ) -> Result<Self, RegistryError> {
        let mut slots: FxHashMap<Box<str>, Slot> = FxHashMap::default();
        let mut declared = Vec::with_capacity(keys.len());

        for (position, key) in keys.enumerate() {
            declared.push(key.map(Box::from));
            let Some(key) = key else { continue };
            let normalized: Box<str> = policy.case.normalize(key).into();

            match (slots.get_mut(&normalized), policy.uniqueness) {
                (None, _) => {
                    slots.insert(normalized, Slot::One(position));
                },
                (Some(slot @ Slot::One(_)), Uniqueness::Shared) => {
                    if let Slot::One(first) = *slot {
                        *slot = Slot::Shared(vec![first, position]);
                    }
                },
                (Some(Slot::Shared(positions)), _) => positions.push(position),
                (Some(Slot::One(first)), Uniqueness::Unique) => {
                    let first = *first;
                    return Err(Self::collision(set, &name, kind, key, &declared, first, position));
                },
            }
        }

        Ok(Self { name, kind, policy, slots, keys: declared.into_boxed_slice() })
    }

    fn collision(
        set: &str,
        name: &str,
        kind: IndexKind,
        key: &str,
        declared: &[Option<Box<str>>],
        first: usize,
        second: usize,
    ) -> RegistryError {
        let set = Cow::Owned(set.to_owned());
        if kind == IndexKind::Identity {
            return RegistryError::DuplicateIdentity { set, identity: key.to_owned(), context: None };
        }
        let describe = |position: usize| {
            declared.get(position).and_then(Option::as_deref).unwrap_or_default().to_owned()
        };
        RegistryError::KeyCollision {
            set,
            index: name.to_owned(),
            key: key.to_owned(),
            first: describe(first),
            second: describe(second),
            context: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Number of distinct normalized keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` when every declared variant has a key in this index.
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.keys.iter().all(Option::is_some)
    }

    /// The key declared for the variant at `position`, in its original spelling.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.keys.get(position).and_then(Option::as_deref)
    }

    /// Resolves `input` to a declaration position without reporting failures.
    #[must_use]
    pub fn find(&self, input: &str) -> Option<usize> {
        match self.slots.get(self.policy.case.normalize(input).as_ref())? {
            Slot::One(position) => Some(*position),
            Slot::Shared(_) => None,
        }
    }

    /// Resolves `input` to a declaration position. `identity_of` names the candidates of
    /// an ambiguous key.
    pub(crate) fn resolve<'s>(
        &self,
        set: &str,
        input: &str,
        identity_of: impl Fn(usize) -> &'s str,
    ) -> Result<usize, RegistryError> {
        match self.slots.get(self.policy.case.normalize(input).as_ref()) {
            Some(Slot::One(position)) => Ok(*position),
            Some(Slot::Shared(positions)) => {
                trace!(set, index = %self.name, input, "Ambiguous key lookup");
                Err(RegistryError::AmbiguousAlternateKey {
                    set: Cow::Owned(set.to_owned()),
                    index: self.name.to_string(),
                    input: input.to_owned(),
                    candidates: positions.iter().map(|&p| identity_of(p).to_owned()).collect(),
                    context: None,
                })
            },
            None => {
                trace!(set, index = %self.name, input, "Key lookup missed");
                Err(self.missing(set, input))
            },
        }
    }

    fn missing(&self, set: &str, input: &str) -> RegistryError {
        let set = Cow::Owned(set.to_owned());
        match self.kind {
            IndexKind::Identity => {
                RegistryError::UnknownIdentity { set, identity: input.to_owned(), context: None }
            },
            IndexKind::Alternate => RegistryError::UnknownAlternateKey {
                set,
                index: self.name.to_string(),
                input: input.to_owned(),
                context: None,
            },
        }
    }
}
