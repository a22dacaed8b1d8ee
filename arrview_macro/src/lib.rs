//! `#[derive(ViewSource)]` for containers that hold their elements in one field.
//!
//! See [`arrview` crate](https://docs.rs/arrview).

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_quote, Data, DeriveInput, Expr, Fields, Generics, Index, Member, Type};

/// Implements the `arrview` source traits by delegating to one field.
///
/// Mark the field holding the elements with `#[view]` (read-only) or `#[view_mut]` (read and
/// write). The field's type must itself be a view source.
///
/// # Examples
///
/// ```
/// use arrview::prelude::*;
///
/// #[derive(ViewSource)]
/// struct Samples {
///     rate: u32,
///     #[view_mut]
///     data: Vec<f32>,
/// }
///
/// let mut s = Samples { rate: 48000, data: vec![0.5, 0.25] };
/// let mut view: ArrayViewMut<f32> = ArrayViewMut::new(&mut s);
/// view[1] = 1.0;
/// assert_eq!(s.data, [0.5, 1.0]);
/// assert_eq!(s.rate, 48000);
/// ```
///
/// An array-typed field additionally gives the container a fixed length:
///
/// ```
/// use arrview::prelude::*;
///
/// #[derive(ViewSource)]
/// struct Rgb(#[view] [u8; 3]);
///
/// let px = Rgb([255, 128, 0]);
/// let view: ArrayView<u8, Fixed<3>> = ArrayView::from_fixed(&px);
/// assert_eq!(view.as_array(), &[255, 128, 0]);
/// ```
///
/// The length may be a const generic parameter:
///
/// ```
/// use arrview::prelude::*;
///
/// #[derive(ViewSource)]
/// struct Ring<T, const N: usize> {
///     head: usize,
///     #[view_mut]
///     slots: [T; N],
/// }
///
/// let mut ring = Ring { head: 0, slots: [0u16; 5] };
/// assert_eq!(ArrayView::<u16, Fixed<5>>::from_fixed(&ring).len(), 5);
/// let view: ArrayViewMut<u16, Fixed<5>> = ArrayViewMut::from_fixed(&mut ring);
/// view.into_array()[4] = 1;
/// assert_eq!(ring.slots, [0, 0, 0, 0, 1]);
/// assert_eq!(ring.head, 0);
/// ```
///
/// Anything other than a literal or a path is wrapped in a const block, so computed lengths
/// work for concrete types:
///
/// ```
/// use arrview::prelude::*;
///
/// const WORDS: usize = 2;
///
/// #[derive(ViewSource)]
/// struct Block(#[view] [u32; WORDS * 4]);
///
/// let b = Block([7; 8]);
/// assert_eq!(ArrayView::<u32, Fixed<8>>::from_fixed(&b).len(), 8);
/// ```
///
/// # Attributes
///
/// Exactly one field must carry exactly one of:
///
/// * `#[view]` - implements `ViewSource`, and `FixedViewSource<LEN>` if the field is `[T; LEN]`.
/// * `#[view_mut]` - as `#[view]`, and additionally implements `ViewSourceMut`.
///
/// The annotated field must be a source of the requested kind:
///
/// ```compile_fail
/// use arrview::prelude::*;
///
/// #[derive(ViewSource)]
/// struct Counter {
///     #[view]
///     count: usize,
/// }
///
/// let c = Counter { count: 3 };
/// let _ = ArrayView::new(&c);
/// ```
///
/// ```compile_fail
/// use arrview::prelude::*;
///
/// #[derive(ViewSource)]
/// struct Note {
///     #[view_mut]
///     text: String,
/// }
///
/// let mut n = Note { text: String::from("hi") };
/// let _ = ArrayViewMut::new(&mut n);
/// ```
///
/// # Generated API
///
/// For `struct MyType<..> { #[view] f: F, .. }` the following is generated:
///
/// * `unsafe impl ViewSource for MyType<..> where F: ViewSource`, with `Elem = F::Elem`.
/// * With `#[view_mut]`: `unsafe impl ViewSourceMut for MyType<..> where F: ViewSourceMut`.
/// * If `F` is `[T; LEN]`: `unsafe impl FixedViewSource<{LEN}> for MyType<..>`.
#[proc_macro_derive(ViewSource, attributes(view, view_mut))]
pub fn derive_view_source(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let item: TokenStream = item.into();
    match derive_view_source_impl(item) {
        Ok(x) => x,
        Err(Error(msg, span)) => quote_spanned!(span =>
            ::core::compile_error!(#msg);
        ),
    }
    .into()
}

struct Error(&'static str, Span);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Access {
    ReadOnly,
    ReadWrite,
}

/// The field that owns the elements.
struct ViewField {
    member: Member,
    ty: Type,
    access: Access,
}

fn derive_view_source_impl(item: TokenStream) -> Result<TokenStream, Error> {
    let d: DeriveInput = match syn::parse2(item) {
        Ok(d) => d,
        Err(e) => {
            return Err(Error(
                "derive(ViewSource) could not parse this as a struct",
                e.span(),
            ))
        }
    };
    let fields = if let Data::Struct(s) = &d.data {
        &s.fields
    } else {
        return Err(Error("derive(ViewSource) requires a struct", d.ident.span()));
    };
    let field = find_view_field(fields, d.ident.span())?;

    let tyname = &d.ident;
    let member = &field.member;
    let field_ty = &field.ty;

    let source_generics = with_bound(&d.generics, parse_quote!(#field_ty: ::arrview::ViewSource));
    let (impl_generics, ty_generics, where_clause) = source_generics.split_for_impl();
    let mut out = quote! {
        #[automatically_derived]
        unsafe impl #impl_generics ::arrview::ViewSource for #tyname #ty_generics #where_clause {
            type Elem = <#field_ty as ::arrview::ViewSource>::Elem;

            #[inline(always)]
            fn location(&self) -> *const Self::Elem {
                ::arrview::ViewSource::location(&self.#member)
            }

            #[inline(always)]
            fn length(&self) -> usize {
                ::arrview::ViewSource::length(&self.#member)
            }
        }
    };

    if field.access == Access::ReadWrite {
        let mut_generics =
            with_bound(&d.generics, parse_quote!(#field_ty: ::arrview::ViewSourceMut));
        let (impl_generics, ty_generics, where_clause) = mut_generics.split_for_impl();
        out.extend(quote! {
            #[automatically_derived]
            unsafe impl #impl_generics ::arrview::ViewSourceMut for #tyname #ty_generics #where_clause {
                #[inline(always)]
                fn location_mut(&mut self) -> *mut Self::Elem {
                    ::arrview::ViewSourceMut::location_mut(&mut self.#member)
                }
            }
        });
    }

    if let Type::Array(array) = field_ty {
        let len = const_arg(&array.len);
        let fixed_generics = with_bound(
            &d.generics,
            parse_quote!(#field_ty: ::arrview::FixedViewSource<#len>),
        );
        let (impl_generics, ty_generics, where_clause) = fixed_generics.split_for_impl();
        out.extend(quote! {
            #[automatically_derived]
            unsafe impl #impl_generics ::arrview::FixedViewSource<#len> for #tyname #ty_generics #where_clause {}
        });
    }

    Ok(out)
}

/// Finds the single field marked `#[view]` or `#[view_mut]`.
fn find_view_field(fields: &Fields, struct_span: Span) -> Result<ViewField, Error> {
    let mut found: Option<ViewField> = None;
    for (i, f) in fields.iter().enumerate() {
        let mut access = None;
        for attr in &f.attrs {
            let this = if attr.path.is_ident("view") {
                Access::ReadOnly
            } else if attr.path.is_ident("view_mut") {
                Access::ReadWrite
            } else {
                continue;
            };
            if !attr.tokens.is_empty() {
                return Err(Error(
                    "#[view] and #[view_mut] take no arguments",
                    attr.tokens.span(),
                ));
            }
            if access.is_some() {
                return Err(Error(
                    "Field must have at most one of #[view], #[view_mut] attributes",
                    attr.path.span(),
                ));
            }
            access = Some((this, attr.path.span()));
        }
        let (access, attr_span) = match access {
            Some(access) => access,
            None => continue,
        };
        if found.is_some() {
            return Err(Error(
                "derive(ViewSource) requires exactly one #[view] or #[view_mut] field, found another",
                attr_span,
            ));
        }
        let member = match &f.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: i as u32,
                span: f.ty.span(),
            }),
        };
        found = Some(ViewField {
            member,
            ty: f.ty.clone(),
            access,
        });
    }
    found.ok_or(Error(
        "derive(ViewSource) requires a field annotated with #[view] or #[view_mut]",
        struct_span,
    ))
}

/// An array length as a const generic argument. A bare const parameter `N` must stay bare:
/// `{ N }` is a const operation on a generic parameter, which stable Rust rejects.
fn const_arg(len: &Expr) -> TokenStream {
    match len {
        Expr::Lit(_) | Expr::Path(_) => quote!(#len),
        _ => quote!({ #len }),
    }
}

fn with_bound(generics: &Generics, predicate: syn::WherePredicate) -> Generics {
    let mut generics = generics.clone();
    generics.make_where_clause().predicates.push(predicate);
    generics
}
