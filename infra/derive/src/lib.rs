#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the canon workspace.
//! This crate removes the boilerplate around closed variant sets, error enums and
//! `Arc`-shared initialization slices.
//!
//! ## Usage
//! Consumers normally reach these macros through their re-exports
//! (`canon_registry::closed_set`), but the crate can be added directly:
//! ```toml
//! [dependencies]
//! canon-derive = { path = "../infra/derive" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro declaring a closed, fixed set of named alternatives.
///
/// Applied to a unit-only enum, it implements `canon_registry::Closed`, which lets the
/// enum seed a `VariantSet` whose identity keys are stable strings and whose ordinals
/// follow declaration order.
///
/// # Arguments
///
/// * `name = "..."` - Set name used in diagnostics. Defaults to the enum name.
/// * `rename_all = "..."` - Identity casing: `SCREAMING_SNAKE_CASE` (default), `snake_case`,
///   `kebab-case`, `lowercase`, `UPPERCASE` or `PascalCase`.
/// * `crate = "..."` - Path to the registry crate. Defaults to `::canon_registry`; crates that
///   only depend on the facade pass `crate = "canon::registry"`.
///
/// Individual variants may pin their identity with `#[identity("...")]`.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash` when missing.
/// * **Validation**: Tuple/struct variants, empty enums, generic enums and duplicate
///   identities are rejected at compile time.
///
/// # Example
///
/// ```rust,ignore
/// use canon_registry::closed_set;
///
/// #[closed_set(name = "EmploymentType")]
/// pub enum EmploymentType {
///     FullTime,
///     PartTime,
///     #[identity("CONTRACTOR")]
///     Contract,
/// }
///
/// assert_eq!(EmploymentType::PartTime.identity(), "PART_TIME");
/// ```
#[proc_macro_attribute]
pub fn closed_set(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::closed::expand_closed(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a fully-featured
/// error type with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use canon_derive::canon_error;
/// use std::borrow::Cow;
///
/// #[canon_error]
/// pub enum CatalogError {
///     #[error("Registry error{}: {source}", format_context(.context))]
///     Registry { source: canon_registry::RegistryError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn roles() -> Result<(), CatalogError> {
///     build_roles().context("Declaring roles")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn canon_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a shared, read-only slice handle.
///
/// This macro transforms a struct into the slice pattern:
/// 1. Moves the fields into a `...Inner` struct.
/// 2. Generates a cheap-to-clone `Arc` wrapper with `Deref` to the inner state.
/// 3. Asserts at compile time that the wrapper is `Send + Sync`, so the slice can be
///    handed to any number of reader threads after initialization.
///
/// # Example
/// ```rust,ignore
/// #[canon_derive::canon_slice]
/// pub struct Catalog {
///     pub roles: VariantSet<Role>,
/// }
///
/// fn init() -> Catalog {
///     Catalog::new(CatalogInner { roles: VariantSet::closed().build().unwrap() })
/// }
/// ```
#[proc_macro_attribute]
pub fn canon_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
