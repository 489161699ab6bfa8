//! Implementation of the `#[derive(Representable)]` macro.
//!
//! The generated code builds values through
//! `::combinars::capability::__private`, so deriving crates do not need a
//! direct `serde_json` dependency.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, FieldsNamed, FieldsUnnamed, Generics, Ident, LitStr,
    parse_macro_input, parse_quote,
};

/// Main implementation of the Representable derive macro.
pub fn derive_representable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let body = match &input.data {
        Data::Struct(data_struct) => struct_body(&data_struct.fields)?,
        Data::Enum(data_enum) => {
            let arms = data_enum
                .variants
                .iter()
                .map(|variant| {
                    let options = FieldOptions::parse(&variant.attrs)?;
                    let label = options.label(&variant.ident);
                    variant_arm(&variant.ident, &label, &variant.fields)
                })
                .collect::<syn::Result<Vec<_>>>()?;
            if arms.is_empty() {
                quote! { match *self {} }
            } else {
                quote! {
                    match self {
                        #(#arms)*
                    }
                }
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Representable cannot be derived for unions.",
            ));
        }
    };

    let generics = bounded_generics(&input.generics);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::combinars::capability::Representable for #name #type_generics #where_clause {
            fn to_representation(&self) -> ::combinars::capability::__private::Value {
                #body
            }
        }
    })
}

/// Adds a `Representable` bound to every type parameter.
fn bounded_generics(generics: &Generics) -> Generics {
    let mut bounded = generics.clone();
    let type_parameters: Vec<Ident> = bounded
        .type_params()
        .map(|parameter| parameter.ident.clone())
        .collect();
    let where_clause = bounded.make_where_clause();
    for parameter in type_parameters {
        where_clause
            .predicates
            .push(parse_quote!(#parameter: ::combinars::capability::Representable));
    }
    bounded
}

/// Field-level and variant-level `#[representable(...)]` options.
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    rename: Option<String>,
}

impl FieldOptions {
    fn parse(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attribute in attributes {
            if !attribute.path().is_ident("representable") {
                continue;
            }
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    options.rename = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `rename = \"...\"`"))
                }
            })?;
        }
        Ok(options)
    }

    fn label(&self, ident: &Ident) -> String {
        self.rename.clone().unwrap_or_else(|| ident.to_string())
    }
}

fn struct_body(fields: &Fields) -> syn::Result<TokenStream2> {
    match fields {
        Fields::Named(named) => {
            let accessors = named_accessors(named, |ident| quote! { &self.#ident })?;
            Ok(object_of(&accessors))
        }
        Fields::Unnamed(unnamed) => {
            let accessors: Vec<TokenStream2> = (0..unnamed.unnamed.len())
                .map(|index| {
                    let index = syn::Index::from(index);
                    quote! { &self.#index }
                })
                .collect();
            Ok(sequence_of(&accessors))
        }
        Fields::Unit => Ok(quote! { ::combinars::capability::__private::Value::Null }),
    }
}

fn variant_arm(variant: &Ident, label: &str, fields: &Fields) -> syn::Result<TokenStream2> {
    match fields {
        Fields::Unit => Ok(quote! {
            Self::#variant => ::combinars::capability::__private::Value::String(
                ::std::string::String::from(#label)
            ),
        }),
        Fields::Unnamed(unnamed) => {
            let bindings = unnamed_bindings(unnamed);
            let accessors: Vec<TokenStream2> =
                bindings.iter().map(|binding| quote! { #binding }).collect();
            let inner = sequence_of(&accessors);
            let tagged = tagged(label, &inner);
            Ok(quote! {
                Self::#variant(#(#bindings),*) => #tagged,
            })
        }
        Fields::Named(named) => {
            let bindings: Vec<&Ident> = named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let accessors = named_accessors(named, |ident| quote! { #ident })?;
            let inner = object_of(&accessors);
            let tagged = tagged(label, &inner);
            Ok(quote! {
                #[allow(unused_variables)]
                Self::#variant { #(#bindings),* } => #tagged,
            })
        }
    }
}

/// Collects `(key, accessor)` pairs for the non-skipped named fields.
fn named_accessors(
    named: &FieldsNamed,
    accessor: impl Fn(&Ident) -> TokenStream2,
) -> syn::Result<Vec<(String, TokenStream2)>> {
    let mut accessors = Vec::new();
    for field in &named.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let options = FieldOptions::parse(&field.attrs)?;
        if options.skip {
            continue;
        }
        accessors.push((options.label(ident), accessor(ident)));
    }
    Ok(accessors)
}

fn unnamed_bindings(unnamed: &FieldsUnnamed) -> Vec<Ident> {
    (0..unnamed.unnamed.len())
        .map(|index| format_ident!("__combinars_field_{}", index))
        .collect()
}

fn object_of(accessors: &[(String, TokenStream2)]) -> TokenStream2 {
    let inserts = accessors.iter().map(|(key, accessor)| {
        quote! {
            object.insert(
                ::std::string::String::from(#key),
                ::combinars::capability::Representable::to_representation(#accessor),
            );
        }
    });
    quote! {{
        let mut object = ::combinars::capability::__private::Map::new();
        #(#inserts)*
        ::combinars::capability::__private::Value::Object(object)
    }}
}

/// One accessor renders as itself; any other count renders as an array.
fn sequence_of(accessors: &[TokenStream2]) -> TokenStream2 {
    if let [single] = accessors {
        return quote! {
            ::combinars::capability::Representable::to_representation(#single)
        };
    }
    quote! {
        ::combinars::capability::__private::Value::Array(::std::vec![
            #(::combinars::capability::Representable::to_representation(#accessors)),*
        ])
    }
}

fn tagged(label: &str, inner: &TokenStream2) -> TokenStream2 {
    quote! {{
        let mut tagged = ::combinars::capability::__private::Map::new();
        tagged.insert(::std::string::String::from(#label), #inner);
        ::combinars::capability::__private::Value::Object(tagged)
    }}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_overrides_label() {
        let attributes: Vec<Attribute> = vec![parse_quote!(#[representable(rename = "renamed")])];
        let options = FieldOptions::parse(&attributes).expect("valid attribute");
        assert_eq!(options.label(&format_ident!("original")), "renamed");
        assert!(!options.skip);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let attributes: Vec<Attribute> = vec![parse_quote!(#[representable(flatten)])];
        assert!(FieldOptions::parse(&attributes).is_err());
    }

    #[test]
    fn test_union_is_rejected() {
        let input: DeriveInput = parse_quote! {
            union Bits { integer: u32, float: f32 }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_generic_parameters_get_bound() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { value: T }
        };
        let generics = bounded_generics(&input.generics);
        let where_clause = generics.where_clause.expect("where clause is added");
        assert_eq!(where_clause.predicates.len(), 1);
    }
}
