use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Ident, Type, parse_macro_input, spanned::Spanned};

/// Derives `multiprop::PropertyEnum` for an enum of fieldless variants.
///
/// With `#[searchable(element = T)]` on the enum (and optionally
/// `value = V`, defaulting to `multiprop::Value`), every variant must carry
/// `#[searchable(extract = <fn or closure>)]` and `SearchableProperty<T>` is
/// derived as well. Extractor output is converted with `Into<V>`.
#[proc_macro_derive(PropertyEnum, attributes(searchable))]
pub fn derive_property_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_property_enum(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct SearchableEnumOptions {
    element: Option<Type>,
    value: Option<Type>,
}

fn expand_property_enum(input: DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            input.generics,
            "PropertyEnum does not support generic enums",
        ));
    }

    let data_enum = match input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                enum_name.span(),
                "PropertyEnum can only be derived for enums",
            ));
        }
    };

    let options = parse_searchable_enum_options(&input.attrs)?;

    let mut variant_idents = Vec::<Ident>::new();
    let mut extractors = Vec::<Option<Expr>>::new();

    for variant in data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.fields.span(),
                "PropertyEnum variants must not carry fields",
            ));
        }
        extractors.push(parse_searchable_variant_extract(&variant.attrs)?);
        variant_idents.push(variant.ident);
    }

    let property_enum_impl = quote! {
        impl ::multiprop::PropertyEnum for #enum_name {
            fn variants() -> &'static [Self] {
                const VARIANTS: &[#enum_name] = &[#(#enum_name::#variant_idents),*];
                VARIANTS
            }
        }
    };

    let Some(element) = options.element else {
        if let Some(stray) = extractors.iter().flatten().next() {
            return Err(syn::Error::new(
                stray.span(),
                "#[searchable(extract = ...)] requires #[searchable(element = ...)] on the enum",
            ));
        }
        if let Some(value) = options.value {
            return Err(syn::Error::new(
                value.span(),
                "#[searchable(value = ...)] requires #[searchable(element = ...)] on the enum",
            ));
        }
        return Ok(property_enum_impl);
    };

    let value = options
        .value
        .unwrap_or_else(|| syn::parse_quote!(::multiprop::Value));

    let mut arms = Vec::<TokenStream2>::new();
    for (ident, extract) in variant_idents.iter().zip(extractors) {
        let extract = extract.ok_or_else(|| {
            syn::Error::new(
                ident.span(),
                format!("variant `{ident}` is missing #[searchable(extract = ...)]"),
            )
        })?;
        arms.push(quote! {
            #enum_name::#ident => ::core::convert::Into::into((#extract)(element)),
        });
    }

    Ok(quote! {
        #property_enum_impl

        impl ::multiprop::SearchableProperty<#element> for #enum_name {
            type Value = #value;

            fn extract(&self, element: &#element) -> Self::Value {
                match *self {
                    #(#arms)*
                }
            }
        }
    })
}

fn parse_searchable_enum_options(attrs: &[syn::Attribute]) -> syn::Result<SearchableEnumOptions> {
    let mut options = SearchableEnumOptions {
        element: None,
        value: None,
    };

    for attr in attrs {
        if !attr.path().is_ident("searchable") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("element") {
                let value = meta.value()?;
                options.element = Some(value.parse()?);
                return Ok(());
            }

            if meta.path.is_ident("value") {
                let value = meta.value()?;
                options.value = Some(value.parse()?);
                return Ok(());
            }

            Err(meta.error(
                "Unsupported searchable attribute on enum. Supported: element = <type>, value = <type>",
            ))
        })?;
    }

    Ok(options)
}

fn parse_searchable_variant_extract(attrs: &[syn::Attribute]) -> syn::Result<Option<Expr>> {
    let mut extract: Option<Expr> = None;

    for attr in attrs {
        if !attr.path().is_ident("searchable") {
            continue;
        }

        if extract.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "Duplicate #[searchable(...)] attribute on variant",
            ));
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("extract") {
                let value = meta.value()?;
                extract = Some(value.parse()?);
                return Ok(());
            }

            Err(meta.error(
                "Unsupported searchable attribute on variant. Supported: extract = <fn or closure>",
            ))
        })?;
    }

    Ok(extract)
}
