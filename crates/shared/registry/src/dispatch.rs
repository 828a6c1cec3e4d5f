//! Per-variant behavior selected through the variant set instead of branching.

use crate::error::RegistryError;
use crate::set::VariantSet;
use crate::variant::VariantRecord;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Behavior bound to one variant: receives the variant's data and the call arguments.
pub type Handler<D, A, R> = Arc<dyn Fn(&D, &A) -> R + Send + Sync>;

/// Wraps a closure into a [`Handler`].
pub fn handler<D, A: ?Sized, R>(f: impl Fn(&D, &A) -> R + Send + Sync + 'static) -> Handler<D, A, R> {
    Arc::new(f)
}

/// A variant set whose every variant carries a [`Handler`].
///
/// Totality is checked when the dispatcher is created, so `dispatch` only fails for
/// records that do not belong to the set.
pub struct Dispatcher<D, A: ?Sized, R> {
    set: Arc<VariantSet<D, Handler<D, A, R>>>,
}

impl<D, A: ?Sized, R> Dispatcher<D, A, R> {
    /// # Errors
    ///
    /// `MissingBehavior` for the first variant declared without a handler.
    pub fn new(set: VariantSet<D, Handler<D, A, R>>) -> Result<Self, RegistryError> {
        Self::shared(Arc::new(set))
    }

    /// Creates a dispatcher over a set that is already shared.
    ///
    /// # Errors
    ///
    /// `MissingBehavior` for the first variant declared without a handler.
    pub fn shared(set: Arc<VariantSet<D, Handler<D, A, R>>>) -> Result<Self, RegistryError> {
        if let Some(unbound) = set.iter().find(|record| !record.has_behavior()) {
            return Err(RegistryError::MissingBehavior {
                set: set.name().to_owned().into(),
                identity: unbound.identity().to_owned(),
                context: None,
            });
        }
        Ok(Self { set })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<D, Handler<D, A, R>> {
        &self.set
    }

    /// Another handle to the underlying set, e.g. to build a codec over it.
    #[must_use]
    pub fn shared_set(&self) -> Arc<VariantSet<D, Handler<D, A, R>>> {
        Arc::clone(&self.set)
    }

    /// Invokes the handler bound to `variant`.
    ///
    /// # Errors
    ///
    /// `ForeignVariant` when `variant` was not declared by this dispatcher's set.
    pub fn dispatch(&self, variant: &VariantRecord<D, Handler<D, A, R>>, args: &A) -> Result<R, RegistryError> {
        self.set.ensure_member(variant)?;
        trace!(set = self.set.name(), identity = variant.identity(), "Dispatching");
        self.invoke(variant, args)
    }

    /// Resolves `identity` and invokes its handler.
    ///
    /// # Errors
    ///
    /// `UnknownIdentity` when no variant has this identity.
    pub fn dispatch_identity(&self, identity: &str, args: &A) -> Result<R, RegistryError> {
        let variant = self.set.by_identity(identity)?;
        trace!(set = self.set.name(), identity, "Dispatching");
        self.invoke(variant, args)
    }

    /// Invokes every handler once with the same arguments, in declaration order.
    pub fn dispatch_all<'s>(
        &'s self,
        args: &'s A,
    ) -> impl Iterator<Item = (&'s VariantRecord<D, Handler<D, A, R>>, R)> + 's {
        self.set.iter().filter_map(move |record| {
            let handler = record.behavior()?;
            Some((record, handler(record.data(), args)))
        })
    }

    fn invoke(&self, variant: &VariantRecord<D, Handler<D, A, R>>, args: &A) -> Result<R, RegistryError> {
        let handler = variant.behavior().ok_or_else(|| RegistryError::MissingBehavior {
            set: self.set.name().to_owned().into(),
            identity: variant.identity().to_owned(),
            context: None,
        })?;
        Ok(handler(variant.data(), args))
    }
}

impl<D, A: ?Sized, R> Clone for Dispatcher<D, A, R> {
    fn clone(&self) -> Self {
        Self { set: Arc::clone(&self.set) }
    }
}

impl<D, A: ?Sized, R> fmt::Debug for Dispatcher<D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").field("set", &self.set).finish()
    }
}
