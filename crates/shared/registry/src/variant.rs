//! Variant identities, ordinals and the immutable records bound to them.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

static NEXT_SET_ID: AtomicU32 = AtomicU32::new(1);

/// Zero-based declaration position of a variant within its set.
///
/// Ordinals are stable for a given build and are meant for in-process ordering only.
/// Re-declaring a set in a different order silently changes them, so an ordinal must
/// never be persisted or sent over the wire; store the identity key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(usize);

impl Ordinal {
    #[doc(hidden)]
    #[must_use]
    pub const fn from_declaration(position: usize) -> Self {
        Self(position)
    }

    /// Returns the raw declaration position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-unique token of one constructed `VariantSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetId(u32);

impl SetId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SET_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Opaque identity of a variant: the set it was declared in plus its position there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantId {
    set: SetId,
    ordinal: Ordinal,
}

impl VariantId {
    #[must_use]
    pub const fn set(self) -> SetId {
        self.set
    }

    #[must_use]
    pub const fn ordinal(self) -> Ordinal {
        self.ordinal
    }
}

/// Behavior slot of sets that carry no per-variant behavior. It has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBehavior {}

/// One `(identity, attached data, optional behavior)` entry handed to a set builder.
pub struct Declaration<D, B = NoBehavior> {
    pub(crate) identity: Cow<'static, str>,
    pub(crate) data: D,
    pub(crate) behavior: Option<B>,
}

impl<D, B> Declaration<D, B> {
    pub fn new(identity: impl Into<Cow<'static, str>>, data: D) -> Self {
        Self { identity: identity.into(), data, behavior: None }
    }

    /// Binds the behavior of this variant. Every variant is bound independently.
    #[must_use]
    pub fn with_behavior(mut self, behavior: B) -> Self {
        self.behavior = Some(behavior);
        self
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl<D: fmt::Debug, B> fmt::Debug for Declaration<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("identity", &self.identity)
            .field("data", &self.data)
            .field("behavior", &self.behavior.as_ref().map(|_| "bound"))
            .finish()
    }
}

/// An immutable value bound to one variant identity.
///
/// Records only exist inside a `VariantSet`; callers hold `&VariantRecord` references
/// into the set. Two records are equal when they are the same variant of the same set,
/// regardless of the attached data.
pub struct VariantRecord<D, B = NoBehavior> {
    id: VariantId,
    identity: Cow<'static, str>,
    data: D,
    behavior: Option<B>,
}

impl<D, B> VariantRecord<D, B> {
    pub(crate) fn declared(set: SetId, position: usize, declaration: Declaration<D, B>) -> Self {
        Self {
            id: VariantId { set, ordinal: Ordinal(position) },
            identity: declaration.identity,
            data: declaration.data,
            behavior: declaration.behavior,
        }
    }

    #[must_use]
    pub const fn id(&self) -> VariantId {
        self.id
    }

    /// The canonical, persistence-stable identity key.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Declaration position; see [`Ordinal`] for why it must not be persisted.
    #[must_use]
    pub const fn ordinal(&self) -> Ordinal {
        self.id.ordinal
    }

    #[must_use]
    pub const fn data(&self) -> &D {
        &self.data
    }

    #[must_use]
    pub const fn behavior(&self) -> Option<&B> {
        self.behavior.as_ref()
    }

    #[must_use]
    pub const fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }
}

impl<D, B> PartialEq for VariantRecord<D, B> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D, B> Eq for VariantRecord<D, B> {}

impl<D, B> Hash for VariantRecord<D, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordinal comparison, defined only between variants of the same set.
impl<D, B> PartialOrd for VariantRecord<D, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.id.set == other.id.set).then(|| self.id.ordinal.cmp(&other.id.ordinal))
    }
}

impl<D, B> fmt::Display for VariantRecord<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)
    }
}

impl<D: fmt::Debug, B> fmt::Debug for VariantRecord<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRecord")
            .field("identity", &self.identity)
            .field("ordinal", &self.id.ordinal)
            .field("data", &self.data)
            .field("behavior", &if self.behavior.is_some() { "bound" } else { "absent" })
            .finish()
    }
}

/// A Rust enum that is itself a closed set of named alternatives.
///
/// Usually implemented with `#[closed_set]`. `VARIANTS` lists every value in declaration
/// order and `identity` returns a unique, never-changing key per value.
pub trait Closed: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Set name used in diagnostics.
    const SET_NAME: &'static str;
    /// Every value, in declaration order.
    const VARIANTS: &'static [Self];

    fn identity(self) -> &'static str;

    fn ordinal(self) -> Ordinal {
        Ordinal(Self::VARIANTS.iter().position(|v| *v == self).unwrap_or(Self::VARIANTS.len()))
    }
}
