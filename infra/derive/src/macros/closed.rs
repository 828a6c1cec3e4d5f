use crate::macros::args::{derived_trait_names, parse_name_values, parse_string_literal, set_once};
use fxhash::FxHashMap;
use heck::{ToKebabCase, ToShoutySnakeCase, ToSnakeCase};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Path, parse_quote};

const IDENTITY_ATTR: &str = "identity";

/// Identity casing applied to variant names without an explicit `#[identity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    ScreamingSnake,
    Snake,
    Kebab,
    Lower,
    Upper,
    Pascal,
}

impl Casing {
    fn parse(lit: &LitStr) -> Result<Self, TokenStream> {
        Ok(match lit.value().as_str() {
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "snake_case" => Self::Snake,
            "kebab-case" => Self::Kebab,
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            _ => {
                return Err(syn::Error::new_spanned(
                    lit,
                    "Unsupported rename_all; expected SCREAMING_SNAKE_CASE, snake_case, \
                     kebab-case, lowercase, UPPERCASE or PascalCase",
                )
                .to_compile_error());
            },
        })
    }

    fn apply(self, variant: &str) -> String {
        match self {
            Self::ScreamingSnake => variant.to_shouty_snake_case(),
            Self::Snake => variant.to_snake_case(),
            Self::Kebab => variant.to_kebab_case(),
            Self::Lower => variant.to_lowercase(),
            Self::Upper => variant.to_uppercase(),
            Self::Pascal => variant.to_owned(),
        }
    }
}

struct ClosedArgs {
    name: Option<LitStr>,
    casing: Casing,
    /// Path the expansion uses to reach the registry crate.
    krate: Path,
}

struct DeclaredVariant {
    ident: Ident,
    identity: LitStr,
}

pub fn expand_closed(args: TokenStream, mut input: DeriveInput) -> TokenStream {
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "closed_set enums cannot be generic")
            .to_compile_error();
    }

    let declared = match declared_variants(&mut input, args.casing) {
        Ok(declared) => declared,
        Err(err) => return err,
    };

    let name = &input.ident;
    let set_name =
        args.name.unwrap_or_else(|| LitStr::new(&name.to_string(), Span::call_site()));
    let derives = missing_derives(&input);

    let idents: Vec<&Ident> = declared.iter().map(|v| &v.ident).collect();
    let identities = declared.iter().map(|v| &v.identity);
    let positions = 0..declared.len();
    let krate = &args.krate;

    quote! {
        #derives
        #input

        #[automatically_derived]
        impl #krate::Closed for #name {
            const SET_NAME: &'static str = #set_name;
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            #[inline]
            fn identity(self) -> &'static str {
                match self {
                    #(Self::#idents => #identities,)*
                }
            }

            #[inline]
            fn ordinal(self) -> #krate::Ordinal {
                match self {
                    #(Self::#idents => #krate::Ordinal::from_declaration(#positions),)*
                }
            }
        }
    }
}

fn parse_args(args: TokenStream) -> Result<ClosedArgs, TokenStream> {
    let mut name = None;
    let mut casing = None;
    let mut krate = None;

    for name_value in parse_name_values(args)? {
        if name_value.path.is_ident("name") {
            let value = parse_string_literal(&name_value, "name")?;
            name = Some(set_once(name, &name_value, value)?);
        } else if name_value.path.is_ident("rename_all") {
            let value = Casing::parse(&parse_string_literal(&name_value, "rename_all")?)?;
            casing = Some(set_once(casing, &name_value, value)?);
        } else if name_value.path.is_ident("crate") {
            let value = parse_string_literal(&name_value, "crate")?
                .parse::<Path>()
                .map_err(|err| err.to_compile_error())?;
            krate = Some(set_once(krate, &name_value, value)?);
        } else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected name, rename_all or crate",
            )
            .to_compile_error());
        }
    }

    Ok(ClosedArgs {
        name,
        casing: casing.unwrap_or(Casing::ScreamingSnake),
        krate: krate.unwrap_or_else(|| parse_quote!(::canon_registry)),
    })
}

/// Resolves every variant's identity and strips the `#[identity]` helper attributes.
fn declared_variants(
    input: &mut DeriveInput,
    casing: Casing,
) -> Result<Vec<DeclaredVariant>, TokenStream> {
    let span_source = input.ident.clone();
    let Data::Enum(data) = &mut input.data else {
        return Err(syn::Error::new_spanned(span_source, "closed_set can only be applied to enums")
            .to_compile_error());
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            span_source,
            "closed_set requires at least one variant; a closed set cannot be empty",
        )
        .to_compile_error());
    }

    let mut declared = Vec::with_capacity(data.variants.len());
    let mut seen: FxHashMap<String, Ident> = FxHashMap::default();

    for variant in &mut data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "closed_set variants must be unit variants; attach data through the VariantSet",
            )
            .to_compile_error());
        }

        let mut pinned = None;
        let mut kept = Vec::with_capacity(variant.attrs.len());
        for attr in variant.attrs.drain(..) {
            if !attr.path().is_ident(IDENTITY_ATTR) {
                kept.push(attr);
                continue;
            }
            if pinned.is_some() {
                return Err(syn::Error::new_spanned(attr, "Duplicate #[identity] attribute")
                    .to_compile_error());
            }
            pinned = Some(attr.parse_args::<LitStr>().map_err(|err| err.to_compile_error())?);
        }
        variant.attrs = kept;

        let identity = pinned.unwrap_or_else(|| {
            LitStr::new(&casing.apply(&variant.ident.to_string()), variant.ident.span())
        });
        if identity.value().is_empty() {
            return Err(syn::Error::new_spanned(&identity, "identity cannot be empty")
                .to_compile_error());
        }
        if let Some(previous) = seen.insert(identity.value(), variant.ident.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("identity `{}` is already used by `{previous}`", identity.value()),
            )
            .to_compile_error());
        }

        declared.push(DeclaredVariant { ident: variant.ident.clone(), identity });
    }

    Ok(declared)
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let derived = derived_trait_names(&input.attrs);
    let tokens: Vec<TokenStream> = ["Debug", "Clone", "Copy", "PartialEq", "Eq", "Hash"]
        .into_iter()
        .filter(|name| !derived.contains(*name))
        .map(|name| {
            let ident = Ident::new(name, Span::call_site());
            quote! { #ident }
        })
        .collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}
