use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how generated code must name
/// another `propname` crate.
///
/// # Example
///
/// ```rust
/// # use pn_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pn_proxy"));
/// ```
///
/// # Resolution rules
///
/// 1. A dependency named `name` (or renamed from `package = "name"`) yields
///    `::name` (or `::renamed`).
/// 2. For a `pn_` crate, a dependency on the facade crate `propname` yields
///    `::propname::short_name` (e.g. `pn_proxy` -> `::propname::proxy`).
/// 3. Steps 1-2 are repeated against `dev-dependencies`.
/// 4. Otherwise `::name` is used.
///
/// A crate that expands the macros on itself needs `extern crate self as name;`
/// at its root so rule 4 resolves.
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "propname";
const CRATE_PREFIX: &str = "pn_";

fn absolute_path(segments: &[&str]) -> syn::Path {
    let mut path = syn::Path {
        leading_colon: Some(Default::default()),
        segments: Punctuated::new(),
    };
    for segment in segments {
        path.segments
            .push(syn::PathSegment::from(syn::Ident::new(segment, Span::call_site())));
    }
    path
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    #[inline(never)]
    fn load(path: Option<&PathBuf>, modified_time: Option<SystemTime>) -> Self {
        let document = path
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Self {
            document,
            modified_time,
        }
    }

    // Key under which `name` is declared in `deps`, following `package` renames.
    fn dependency_key<'a>(deps: &'a Table, name: &'a str) -> Option<&'a str> {
        if deps.contains_key(name) {
            return Some(name);
        }
        deps.iter().find_map(|(key, item)| {
            let package = match item {
                Item::Table(table) => table.get("package")?.as_str(),
                Item::Value(value) => value.as_inline_table()?.get("package")?.as_str(),
                _ => None,
            }?;
            (package == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(absolute_path(&[key]));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        let facade = Self::dependency_key(deps, FACADE_NAME)?;
        Some(absolute_path(&[facade, short]))
    }

    /// Returns the path under which the caller reaches the crate `name`.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(document) = &self.document {
            for section in ["dependencies", "dev-dependencies"] {
                if let Some(Item::Table(deps)) = document.get(section)
                    && let Some(path) = Self::find_in_deps(deps, name)
                {
                    return path;
                }
            }
        }
        absolute_path(&[name])
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read only when the file's
    /// modification time changes, so expanding many items in one crate reads
    /// the file once.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::manifest_path() else {
            return func(&Self::load(None, None));
        };
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .ok();

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time.is_some()
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Self::load(Some(&manifest_path), modified_time);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use toml_edit::Document;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            document: Some(Document::parse(Box::<str>::from(text)).unwrap()),
            modified_time: None,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\npn_proxy = { path = \"../pn_proxy\" }\n");
        assert_eq!(path_string(&m.get_crate_path("pn_proxy")), "::pn_proxy");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\npropname = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("pn_proxy")), "::propname::proxy");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dev-dependencies]\npaths = { package = \"propname\", version = \"0.0.1\" }\n");
        assert_eq!(path_string(&m.get_crate_path("pn_proxy")), "::paths::proxy");
    }

    #[test]
    fn fallback() {
        let m = manifest("[dependencies]\nlog = \"0.4\"\n");
        assert_eq!(path_string(&m.get_crate_path("pn_proxy")), "::pn_proxy");
    }
}
