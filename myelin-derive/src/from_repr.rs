use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_quote, Data, DeriveInput, Type};

/// Generates `fn from_repr(discriminant) -> Option<Self>` for a fieldless
/// enum with explicit discriminants, honoring its `#[repr(..)]`.
pub fn derive(tokens: proc_macro::TokenStream) -> TokenStream {
	let DeriveInput {
		attrs,
		ident,
		generics,
		data,
		..
	} = syn::parse(tokens).unwrap();

	let Data::Enum(data) = data else {
		panic!("FromRepr only applies to enums");
	};
	if !generics.params.is_empty() {
		panic!("FromRepr does not support generic enums");
	}

	let mut repr: Type = parse_quote!(usize);
	for attr in attrs.iter() {
		if attr.path().is_ident("repr") {
			repr = attr.parse_args::<Type>().unwrap();
		}
	}

	let mut arms = Vec::with_capacity(data.variants.len());
	let mut discriminants = Vec::with_capacity(data.variants.len());

	for (index, variant) in data.variants.iter().enumerate() {
		let Some((_, discriminant)) = &variant.discriminant else {
			panic!("`{}` needs an explicit discriminant", variant.ident);
		};
		let variant_ident = &variant.ident;
		let constant = format_ident!("DISCRIMINANT_{index}");
		discriminants.push(quote! {
			const #constant: #repr = #discriminant;
		});
		arms.push(quote! {
			#constant => Some(Self::#variant_ident),
		});
	}

	quote! {
		impl #ident {
			pub(crate) fn from_repr(discriminant: #repr) -> Option<Self> {
				#(#discriminants)*
				match discriminant {
					#(#arms)*
					_ => None,
				}
			}
		}
	}
}
