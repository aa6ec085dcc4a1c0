//! Attribute macros shared by the tilemath crates.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps the error of a function returning `anyhow::Result` with a context message.
///
/// ```ignore
/// #[context("Failed to parse tile '{input}'")]
/// fn parse(input: &str) -> Result<Tile> { ... }
/// ```
///
/// The message accepts the same arguments as `format!` and may reference the
/// function's parameters. Prefix it with `move,` when the body consumes them.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs { move_token, message } = parse_macro_input!(args);
	let mut function = parse_macro_input!(input as syn::ItemFn);

	if let Some(asyncness) = function.sig.asyncness {
		return syn::Error::new_spanned(asyncness, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}

	let return_type = match &function.sig.output {
		syn::ReturnType::Default => {
			return syn::Error::new_spanned(&function.sig, "function should return Result")
				.to_compile_error()
				.into();
		}
		output @ syn::ReturnType::Type(..) => output.clone(),
	};

	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());

	// The moved empty iterator makes the closure `FnOnce`, so the body may consume its captures.
	let wrapped = quote! {
		let #once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#once);
			#body
		})().map_err(|#err| #err.context(format!(#message)).into())
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream().into()
}
