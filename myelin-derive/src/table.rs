use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput};

pub fn derive(tokens: proc_macro::TokenStream) -> TokenStream {
	let DeriveInput { vis, ident, data, .. } = syn::parse(tokens).unwrap();

	let data = match data {
		Data::Struct(data) => data,
		Data::Enum(_) => panic!("Enums are not supported"),
		Data::Union(_) => panic!("Unions are not supported"),
	};

	let table = format_ident!("{}Table", ident);
	let reads = data.fields.iter().map(|field| {
		let ident = &field.ident;
		let ty = &field.ty;
		quote! {
			#ident: <#ty as crate::utilities::FromByteStream>::read(
				stream,
				<crate::raw::indices::sizes::IndexSizes as AsRef<
					<#ty as crate::utilities::FromByteStream>::Deps,
				>>::as_ref(sizes),
			)?
		}
	});

	quote! {
		#[derive(Debug)]
		#vis struct #table {
			rows: Vec<#ident>,
		}

		impl #table {
			pub(crate) fn read(
				stream: &mut std::io::Cursor<&[u8]>,
				sizes: &crate::raw::indices::sizes::IndexSizes,
				len: usize,
			) -> std::io::Result<Self> {
				let mut rows = Vec::with_capacity(len);
				for _ in 0..len {
					rows.push(#ident { #(#reads),* });
				}
				Ok(Self { rows })
			}

			/// Fetches a row by its 1-based rid.
			pub fn get(&self, rid: usize) -> Option<&#ident> {
				match rid {
					0 => None,
					_ => self.rows.get(rid - 1),
				}
			}

			pub fn rows(&self) -> impl Iterator<Item = &#ident> {
				self.rows.iter()
			}
		}

		impl Table for #table {
			fn len(&self) -> usize {
				self.rows.len()
			}

			fn kind(&self) -> TableKind {
				TableKind::#ident
			}
		}
	}
}
