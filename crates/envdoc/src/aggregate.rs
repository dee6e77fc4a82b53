//! Package-level aggregation of extracted configuration types.
//!
//! A [`Package`] is one directory's worth of parsed source files plus its
//! comment index. [`aggregate`] runs the collector and extractor over each
//! package independently and merges the per-package results into one map, in
//! input order, with later packages overwriting earlier entries on name
//! collision. Merges are all-or-nothing per type: a collision replaces the
//! whole entry, never merging field lists.

use std::collections::BTreeMap;

use crate::collect;
use crate::comment::CommentIndex;
use crate::extract;
use crate::model::ConfigType;

/// One unit of aggregation: a named set of parsed files and their comments.
#[derive(Debug, Default)]
pub struct Package {
    /// Package name, used for logging only.
    pub name: String,

    /// Parsed files, in load order.
    pub asts: Vec<syn::File>,

    /// Comment index over the same files, in the same order.
    pub comments: CommentIndex,
}

impl Package {
    /// Creates an empty package.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asts: Vec::new(),
            comments: CommentIndex::new(),
        }
    }

    /// Parses one file's source text into the package, feeding both the
    /// syntax tree list and the comment index so their file order stays
    /// aligned.
    pub fn push_source(&mut self, source: &str) -> syn::Result<()> {
        let ast = syn::parse_file(source)?;
        self.comments.add_file(source);
        self.asts.push(ast);
        Ok(())
    }
}

/// Aggregates configuration types across `packages`.
///
/// Pure, synchronous, deterministic: collection and extraction run per
/// package over already-parsed input, and the merged map is keyed by type
/// name with last-package-wins overwrite semantics.
#[must_use]
pub fn aggregate(packages: &[Package]) -> BTreeMap<String, ConfigType> {
    let mut merged = BTreeMap::new();

    for package in packages {
        let decls = collect::collect_decls(&package.asts);
        let configs = extract::extract_config_types(&decls, &package.comments);

        tracing::debug!(
            package = %package.name,
            declarations = decls.len(),
            types = configs.len(),
            "extracted configuration types"
        );

        merged.extend(configs);
    }

    merged
}
