//! # Canon Registry
//!
//! Closed variant sets: fixed collections of named alternatives declared once, each
//! variant bound to immutable data and, optionally, its own behavior.
//!
//! * [`VariantSet`] owns the records, iterates them in declaration order and resolves
//!   identity keys.
//! * [`LookupIndex`] answers alternate-key queries (display names, codes, offsets) from a
//!   table precomputed at construction.
//! * [`Dispatcher`] invokes the behavior bound to a variant, replacing branching on it.
//! * [`Codec`] maps variants to and from external strings with validated strategies.
//!
//! Sets are immutable after `build()` and can be shared across threads without locking.
//!
//! ```rust
//! use canon_registry::prelude::*;
//!
//! #[closed_set]
//! pub enum Shift {
//!     Day,
//!     Night,
//! }
//!
//! let shifts = VariantSet::<Shift>::closed().build()?;
//! assert_eq!(shifts.by_identity("NIGHT")?.ordinal().get(), 1);
//! # Ok::<(), canon_registry::RegistryError>(())
//! ```

extern crate self as canon_registry;

pub mod codec;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod set;
pub mod variant;

pub use canon_derive::closed_set;
pub use codec::{Codec, CodecBuilder, DecodeError, Encoded, Representation, Resolution, VariantSeed};
pub use dispatch::{Dispatcher, Handler, handler};
pub use error::{RegistryError, RegistryErrorExt};
pub use index::{CaseSensitivity, KeyPolicy, LookupIndex, Uniqueness};
pub use set::{BehaviorPolicy, VariantSet, VariantSetBuilder};
pub use variant::{Closed, Declaration, NoBehavior, Ordinal, VariantId, VariantRecord};

pub mod prelude {
    pub use crate::codec::{Codec, DecodeError, Representation, Resolution};
    pub use crate::dispatch::{Dispatcher, Handler, handler};
    pub use crate::error::{RegistryError, RegistryErrorExt};
    pub use crate::index::KeyPolicy;
    pub use crate::set::VariantSet;
    pub use crate::variant::{Closed, Declaration, VariantRecord};
    pub use canon_derive::closed_set;
}
