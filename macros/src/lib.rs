use ignore::WalkBuilder;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use syn::{parse_macro_input, ItemFn, LitStr};

const CASE_EXTENSION: &str = "toml";
const IGNORE_FILENAME: &str = ".bless.ignore";

/// Generates one `#[test]` per case file (`*.toml`) found under the given
/// directory, which is relative to the manifest directory of the crate using
/// the attribute. Each test calls the annotated function with the absolute
/// path of its case file. Files listed in `.bless.ignore` are skipped.
///
/// ```ignore
/// #[gen_bless_tests("tests/bless")]
/// fn check(case: &str) { ... }
/// ```
#[proc_macro_attribute]
pub fn gen_bless_tests(input_path: TokenStream, input_fn: TokenStream) -> TokenStream {
    let dir = parse_macro_input!(input_path as LitStr);
    let test_fn = parse_macro_input!(input_fn as ItemFn);
    let test_name_fn = &test_fn.sig.ident;

    let root = manifest_dir().join(dir.value());
    if !root.is_dir() {
        return syn::Error::new(
            dir.span(),
            format!("bless case directory not found: {}", root.display()),
        )
        .to_compile_error()
        .into();
    }

    let mut tests = proc_macro2::TokenStream::new();
    for path in find_cases(&root) {
        let path = path.as_path();
        let test_name = format_ident!("{}", get_test_name(path.strip_prefix(&root).unwrap_or(path)));
        let test_path = path.display().to_string();
        tests.extend(quote! {
            #[test]
            fn #test_name() {
                // Makes the test crate rebuild when the case changes.
                const _: &[u8] = include_bytes!(#test_path);
                #test_name_fn(#test_path)
            }
        });
    }

    TokenStream::from(quote! {
        mod #test_name_fn {
            use super::*;
            #test_fn
            #tests
        }
    })
}

/// Case files directly under `root`, the same ones `utos bless` picks up.
fn find_cases(root: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .max_depth(Some(1))
        .add_custom_ignore_filename(IGNORE_FILENAME)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == CASE_EXTENSION))
        .collect()
}

fn manifest_dir() -> PathBuf {
    std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_default()
}

fn get_test_name(path: &Path) -> String {
    let name = path
        .with_extension("")
        .to_string_lossy()
        .replace(['-', '.', ' '], "_")
        .replace(MAIN_SEPARATOR, "__");
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("case_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn only_top_level_cases_are_found() {
        let root = std::env::temp_dir().join(format!("utos_macros_cases_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("nested")).unwrap();
        for file in ["b.toml", "a.toml", "a.out", "skipped.toml", "nested/deep.toml"] {
            fs::write(root.join(file), "").unwrap();
        }
        fs::write(root.join(IGNORE_FILENAME), "skipped.toml\n").unwrap();

        let found = find_cases(&root)
            .into_iter()
            .map(|p| p.strip_prefix(&root).unwrap().to_path_buf())
            .collect::<Vec<_>>();
        assert_eq!(found, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_names_are_identifiers() {
        assert_eq!(get_test_name(Path::new("width-8.toml")), "width_8");
        assert_eq!(get_test_name(Path::new("16_to_32.toml")), "case_16_to_32");
    }
}
