//! Declaration collection over parsed source files.
//!
//! The collector walks each file's top-level items and records every `struct`
//! declaration, keyed by type name. It does no attribute inspection of its
//! own: the result is the raw material the extractor works through, and a
//! collected struct only surfaces in documentation if extraction later finds
//! a recognized `#[env(...)]` field on it.

use std::collections::HashMap;

use syn::spanned::Spanned;
use syn::{Attribute, Field, File, Item};

/// One collected struct declaration.
///
/// Transient: borrows from the parsed files, is consumed entirely during
/// extraction, and is not retained afterward.
#[derive(Debug)]
pub struct Decl<'ast> {
    /// The struct's outer attributes, used for type-level doc lookup and the
    /// struct-level `#[env_config(...)]` attribute.
    pub attrs: &'ast [Attribute],

    /// Index of the file this declaration came from, aligned with the
    /// package's comment index.
    pub file: usize,

    /// First source line of the item (its leading doc comments and attributes
    /// included), for comment-index lookup.
    pub line: usize,

    /// The struct's fields, in declaration order. Empty for unit structs;
    /// unnamed for tuple structs.
    pub fields: Vec<&'ast Field>,
}

/// Collects all top-level struct declarations from `files`, in file order.
///
/// If the same type name is declared more than once across the input files,
/// the later occurrence silently replaces the earlier one. Non-struct items
/// are ignored. Malformed input is outside this contract; parsing has already
/// produced valid syntax trees.
#[must_use]
pub fn collect_decls(files: &[File]) -> HashMap<String, Decl<'_>> {
    let mut decls = HashMap::new();

    for (file_idx, file) in files.iter().enumerate() {
        for item in &file.items {
            let Item::Struct(item) = item else { continue };

            decls.insert(
                item.ident.to_string(),
                Decl {
                    attrs: &item.attrs,
                    file: file_idx,
                    line: item.span().start().line,
                    fields: item.fields.iter().collect(),
                },
            );
        }
    }

    decls
}
