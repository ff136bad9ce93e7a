//! Derive macro for playwright-page-factory page objects
//!
//! `#[derive(PageObject)]` implements `playwright_page_factory::PageObject`
//! for a struct with named fields. Every field marked `#[locate_by(...)]`
//! becomes a locator field; all other fields are left alone.
//!
//! Descriptors are checked while the macro expands, so a misspelled
//! strategy or an invalid regular expression is a build error instead of a
//! failure the first time the page object is initialized.
//!
//! # Example
//!
//! ```ignore
//! use playwright_page_factory::{PageObject, Selector};
//!
//! #[derive(Default, PageObject)]
//! struct SearchPage {
//!     #[locate_by(strategy = Placeholder, value = "Search")]
//!     query: Option<Selector>,
//!     #[locate_by(strategy = Text, pattern = "^\\d+ results?$")]
//!     result_count: Option<Selector>,
//!     #[locate_by(strategy = Role, role = Link, value = "Next")]
//!     next_page: Option<Selector>,
//!     #[locate_by(value = "ul.results > li")]
//!     results: Option<Selector>,
//!     searches: usize,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote, quote_spanned};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, parse_macro_input, parse_quote};

const STRATEGIES: &[&str] = &[
    "AltText",
    "Label",
    "Placeholder",
    "Role",
    "TestId",
    "Text",
    "Title",
    "Unset",
];

/// Derive macro implementing `PageObject` from `#[locate_by]` field attributes.
///
/// # Attributes
///
/// - `strategy = <Strategy>` - one of `AltText`, `Label`, `Placeholder`,
///   `Role`, `TestId`, `Text`, `Title`, `Unset` (default `Unset`)
/// - `value = "..."` - literal argument, accessible name, or raw selector
/// - `pattern = "..."` - regular expression; wins over `value`
/// - `role = <AriaRole>` - ARIA role, requires `strategy = Role`
///
/// Locator fields must be of a type implementing `LocatorSlot<L>` for the
/// session's locator type `L`, such as `Option<L>` or `OnceLock<L>`.
#[proc_macro_derive(PageObject, attributes(locate_by))]
pub fn derive_page_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_page_object(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_page_object(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = named_fields(&input)?;

    let mut locator_fields = Vec::new();
    let mut errors: Option<syn::Error> = None;
    for (index, field) in fields.into_iter().enumerate() {
        match parse_locator_field(index, field) {
            Ok(Some(parsed)) => locator_fields.push(parsed),
            Ok(None) => {}
            Err(e) => match &mut errors {
                Some(existing) => existing.combine(e),
                None => errors = Some(e),
            },
        }
    }
    if let Some(e) = errors {
        return Err(e);
    }

    let locator_ty: Ident = format_ident!("__PageFactoryLocator");
    let mut generics = input.generics.clone();
    generics.params.push(parse_quote!(#locator_ty));
    {
        let where_clause = generics.make_where_clause();
        for field in &locator_fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::playwright_page_factory::LocatorSlot<#locator_ty>));
        }
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let statics = locator_fields.iter().map(LocatorFieldDef::descriptor_static);
    let entries = locator_fields.iter().map(|field| {
        let ident = &field.ident;
        let label = ident.unraw().to_string();
        let descriptor = &field.descriptor_ident;
        quote! {
            ::playwright_page_factory::LocatorField::new(#label, &#descriptor, &mut self.#ident)
        }
    });

    Ok(quote! {
        impl #impl_generics ::playwright_page_factory::PageObject<#locator_ty> for #name #ty_generics #where_clause {
            fn locator_fields<'__page>(
                &'__page mut self,
            ) -> ::std::vec::Vec<::playwright_page_factory::LocatorField<'__page, #locator_ty>>
            where
                #locator_ty: '__page,
            {
                #(#statics)*
                ::std::vec![#(#entries),*]
            }
        }
    })
}

struct LocatorFieldDef {
    ident: Ident,
    ty: syn::Type,
    descriptor_ident: Ident,
    strategy: Ident,
    value: LitStr,
    pattern: LitStr,
    role: Option<Ident>,
}

impl LocatorFieldDef {
    fn descriptor_static(&self) -> TokenStream2 {
        let descriptor = &self.descriptor_ident;
        let strategy = &self.strategy;
        let value = &self.value;
        let pattern = &self.pattern;
        let role = match &self.role {
            Some(role) => quote_spanned!(role.span()=> ::playwright_page_factory::AriaRole::#role),
            None => quote!(::playwright_page_factory::AriaRole::None),
        };
        quote! {
            static #descriptor: ::playwright_page_factory::LocateBy =
                ::playwright_page_factory::LocateBy::from_parts(
                    ::playwright_page_factory::Strategy::#strategy,
                    #value,
                    #pattern,
                    #role,
                );
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "PageObject can only be derived for structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "PageObject can only be derived for structs",
        )),
    }
}

/// Parse `#[locate_by(...)]` on the field at `index`; `None` if the field has no such attribute
fn parse_locator_field(index: usize, field: &Field) -> syn::Result<Option<LocatorFieldDef>> {
    let mut attrs = field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("locate_by"));
    let Some(attr) = attrs.next() else {
        return Ok(None);
    };
    if let Some(duplicate) = attrs.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            "duplicate #[locate_by] attribute",
        ));
    }
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };

    let mut strategy: Option<Ident> = None;
    let mut value: Option<LitStr> = None;
    let mut pattern: Option<LitStr> = None;
    let mut role: Option<Ident> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("strategy") {
            let parsed: Ident = meta.value()?.parse()?;
            if !STRATEGIES.contains(&parsed.to_string().as_str()) {
                return Err(syn::Error::new_spanned(
                    &parsed,
                    format!(
                        "unknown locator strategy `{parsed}`, expected one of: {}",
                        STRATEGIES.join(", ")
                    ),
                ));
            }
            strategy = Some(parsed);
        } else if meta.path.is_ident("value") {
            value = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("pattern") {
            let parsed: LitStr = meta.value()?.parse()?;
            validate_pattern(&parsed.value()).map_err(|e| syn::Error::new(parsed.span(), e))?;
            pattern = Some(parsed);
        } else if meta.path.is_ident("role") {
            role = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unknown #[locate_by] key, expected `strategy`, `value`, `pattern` or `role`"));
        }
        Ok(())
    })?;

    let strategy = strategy.unwrap_or_else(|| Ident::new("Unset", Span::call_site()));
    if let Some(role) = &role {
        if strategy != "Role" {
            return Err(syn::Error::new_spanned(
                role,
                "`role` is only used with `strategy = Role`",
            ));
        }
    }

    // The index keeps names distinct when field names differ only in case
    let descriptor_ident = format_ident!(
        "__LOCATE_BY_{}_{}",
        index,
        ident.unraw().to_string().to_uppercase()
    );
    Ok(Some(LocatorFieldDef {
        ident,
        ty: field.ty.clone(),
        descriptor_ident,
        strategy,
        value: value.unwrap_or_else(|| LitStr::new("", Span::call_site())),
        pattern: pattern.unwrap_or_else(|| LitStr::new("", Span::call_site())),
        role,
    }))
}

/// Compile the pattern the same way resolution will
fn validate_pattern(pattern: &str) -> Result<(), String> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| format!("invalid locator pattern: {e}"))
}
