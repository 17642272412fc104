//! The `#[test]` attribute re-exported by `tagtree-testhelpers`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct FunctionDecl {
        until_fn: UntilFn, _fn: KFn, name: Ident,
        until_body: UntilBody, body: Body
    }
}

impl quote::ToTokens for UntilFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Marks a test and runs `tagtree_testhelpers::setup()` before its body.
///
/// Takes no arguments. The body keeps its own return type, so tests may
/// return `Result` and use `?`.
///
/// ```ignore
/// use tagtree_testhelpers::test;
///
/// #[test]
/// fn round_trips() {
///     // TAGTREE_LOG=tagtree=trace shows every encoded layer
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return quote::quote! {
            ::core::compile_error!("`#[tagtree_testhelpers::test]` takes no arguments");
        }
        .into();
    }

    let item = TokenStream::from(item);
    let Ok(FunctionDecl {
        until_fn,
        _fn,
        name,
        until_body,
        body,
    }) = item.to_token_iter().parse::<FunctionDecl>()
    else {
        return quote::quote! {
            ::core::compile_error!("`#[tagtree_testhelpers::test]` only applies to functions");
        }
        .into();
    };

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #until_fn fn #name #until_body {
            ::tagtree_testhelpers::setup();

            #body
        }
    }
    .into()
}
