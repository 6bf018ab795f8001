use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

/// Macro input representation:
/// include_vocabulary!("path/to/file.txt", lowercase = true)
struct IncludeVocabularyArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeVocabularyArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        // Optional comma separated `name = value` pairs
        while input.parse::<Token![,]>().is_ok() {
            if input.is_empty() {
                break;
            }
            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;
            assignments.push((ident, value));
        }

        Ok(IncludeVocabularyArgs { path, assignments })
    }
}

fn bool_literal(ident: &Ident, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{ident} must be a boolean literal"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{ident} must be a boolean literal expression"),
        )),
    }
}

/// include_vocabulary!("path/to/file.txt", lowercase = true)
///
/// Reads a newline-delimited word list at compile time, relative to the
/// calling crate's `CARGO_MANIFEST_DIR`. Lines are trimmed; blank lines and
/// lines starting with `#` are skipped. With `lowercase = true` every word is
/// lowercased before embedding.
///
/// The words are emitted as a `::phf::Set<&'static str>` static and the
/// expansion evaluates to a `::triespell::VocabularyIndex` built from it.
#[proc_macro]
pub fn include_vocabulary(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeVocabularyArgs);
    match expand(args) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(args: IncludeVocabularyArgs) -> syn::Result<proc_macro2::TokenStream> {
    let mut lowercase = false;

    for (ident, expr) in args.assignments.iter() {
        match ident.to_string().as_str() {
            "lowercase" => lowercase = bool_literal(ident, expr)?,
            name => {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("unknown argument to include_vocabulary: {name}"),
                ))
            }
        }
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        syn::Error::new(
            Span::call_site(),
            "CARGO_MANIFEST_DIR environment variable not set",
        )
    })?;
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let words = read_words(&file_path, lowercase).map_err(|e| {
        syn::Error::new_spanned(
            &args.path,
            format!(
                "include_vocabulary!: failed to read vocabulary file '{}': {e}",
                file_path.display()
            ),
        )
    })?;

    // BTreeSet keeps the expansion deterministic and phf rejects duplicate keys.
    let word_lits = words
        .iter()
        .map(|w| LitStr::new(w, Span::call_site()));

    Ok(quote! {
        {
            static VOCABULARY_PHF: ::phf::Set<&'static str> = ::phf::phf_set! {
                #( #word_lits, )*
            };

            VOCABULARY_PHF
                .iter()
                .copied()
                .collect::<::triespell::VocabularyIndex>()
        }
    })
}

fn read_words(path: &Path, lowercase: bool) -> io::Result<BTreeSet<String>> {
    let reader = io::BufReader::new(File::open(path)?);
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let word = if lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };
        words.insert(word);
    }
    Ok(words)
}
