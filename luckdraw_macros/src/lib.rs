use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, parse_macro_input,
    spanned::Spanned,
    visit_mut::{self, VisitMut},
};

/// Variant attribute: #[weight(<expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        ));
    };

    let mut entries = Vec::new();
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            ));
        }

        let weight = weight_attr(&variant.attrs)?.ok_or_else(|| {
            syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
        })?;
        let weight = promote_ints(weight)?;
        let ident = &variant.ident;
        entries.push(quote! { (Self::#ident, (#weight) as f64) });
    }

    Ok(quote! {
        impl ::luckdraw::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }
    })
}

/// Last `#[weight(...)]` on the variant, parsed as an expression.
fn weight_attr(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        found = Some(expr);
    }
    Ok(found)
}

/// Rewrite integer literals as floats so `1/100` divides in floating point.
///
/// Only arithmetic is walked (binary, unary, parens); anything else, such
/// as a call or a const path, is left as written. Non-numeric literals are
/// rejected.
fn promote_ints(mut e: Expr) -> syn::Result<Expr> {
    let mut promote = PromoteInts { error: None };
    promote.visit_expr_mut(&mut e);
    match promote.error {
        Some(err) => Err(err),
        None => Ok(e),
    }
}

struct PromoteInts {
    error: Option<syn::Error>,
}

impl VisitMut for PromoteInts {
    fn visit_expr_mut(&mut self, e: &mut Expr) {
        match e {
            Expr::Lit(_) | Expr::Binary(_) | Expr::Unary(_) | Expr::Paren(_) | Expr::Group(_) => {
                visit_mut::visit_expr_mut(self, e)
            }
            _ => {}
        }
    }

    fn visit_lit_mut(&mut self, lit: &mut Lit) {
        match lit {
            Lit::Int(int) => {
                let (digits, span) = (format!("{}.0", int.base10_digits()), int.span());
                *lit = Lit::Float(LitFloat::new(&digits, span));
            }
            Lit::Float(_) => {}
            other => {
                if self.error.is_none() {
                    self.error = Some(syn::Error::new(other.span(), "weight must be numeric"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::parse_quote;

    fn promoted(e: Expr) -> String {
        promote_ints(e).unwrap().to_token_stream().to_string()
    }

    #[test]
    fn ints_become_floats_inside_arithmetic() {
        assert_eq!(promoted(parse_quote!(1 / 100)), "1.0 / 100.0");
        assert_eq!(promoted(parse_quote!(-(3 * 10))), "- (3.0 * 10.0)");
        assert_eq!(promoted(parse_quote!(0.5 + 2)), "0.5 + 2.0");
    }

    #[test]
    fn calls_and_paths_are_left_alone() {
        assert_eq!(promoted(parse_quote!(BASE / 4)), "BASE / 4.0");
        assert_eq!(promoted(parse_quote!(f(2))), "f (2)");
    }

    #[test]
    fn rejects_non_numeric_literals() {
        assert!(promote_ints(parse_quote!("heavy")).is_err());
        assert!(promote_ints(parse_quote!(1 + true)).is_err());
    }

    #[test]
    fn rejects_bad_shapes() {
        let not_enum: DeriveInput = parse_quote! { struct Loot; };
        assert!(expand(&not_enum).is_err());

        let fielded: DeriveInput = parse_quote! {
            enum Loot { #[weight(1)] Gold(u32) }
        };
        assert!(expand(&fielded).is_err());

        let missing: DeriveInput = parse_quote! {
            enum Loot { #[weight(1)] Gold, Silver }
        };
        assert!(expand(&missing).is_err());
    }
}
