//! Tag extraction: turns collected declarations into the documentable model.
//!
//! This is where all parsing policy lives. Field by field, in declaration
//! order, the extractor reads the `#[env(...)]` attribute, resolves the key
//! name, required flag and default, derives the field's type name, and
//! attaches doc comments from the attribute list or the comment index.
//!
//! A type's entry is created lazily on its first recognized field, so structs
//! with no recognized configuration attribute never appear in the result.

use std::collections::HashMap;

use quote::ToTokens;
use syn::Type;
use syn::spanned::Spanned;

use crate::collect::Decl;
use crate::comment::CommentIndex;
use crate::model::{CommentBlock, ConfigKey, ConfigType};
use crate::parse;

/// Extracts configuration types from the collected declarations.
///
/// `comments` must be the index built from the same files the declarations
/// were collected from, in the same order.
#[must_use]
pub fn extract_config_types(
    decls: &HashMap<String, Decl<'_>>,
    comments: &CommentIndex,
) -> HashMap<String, ConfigType> {
    let mut configs: HashMap<String, ConfigType> = HashMap::new();

    for (name, decl) in decls {
        let prefix = parse::parse_struct_prefix(decl.attrs);

        for field in &decl.fields {
            let attr = match parse::parse_field_attr(field) {
                Ok(Some(attr)) => attr,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(
                        type_name = %name,
                        error = %err,
                        "skipping field with unparseable #[env] attribute"
                    );
                    continue;
                }
            };

            // No `var` option means the field is not a configuration key,
            // even when other recognized options are present.
            let Some(var_name) = attr.var_name else { continue };

            let config = configs.entry(name.clone()).or_insert_with(|| ConfigType {
                keys: Vec::new(),
                comments: type_comments(decl, comments),
            });

            config.keys.push(ConfigKey {
                name: match &prefix {
                    Some(prefix) => format!("{prefix}{var_name}"),
                    None => var_name,
                },
                type_name: type_name(&field.ty),
                required: attr.required,
                default: attr.default.unwrap_or_default(),
                comment: field_comment(field, decl.file, comments),
            });
        }
    }

    configs
}

/// Comment blocks attached to the type declaration: a plain `//` block
/// immediately above the item, then the item's own doc comments, in source
/// order.
fn type_comments(decl: &Decl<'_>, comments: &CommentIndex) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();

    if let Some(block) = comments.block_ending_at(decl.file, decl.line) {
        blocks.push(block.clone());
    }

    let doc = parse::doc_lines(decl.attrs);
    if !doc.is_empty() {
        blocks.push(CommentBlock { lines: doc });
    }

    blocks
}

/// The field's own doc comment, flattened to one line. Doc attributes win;
/// a plain `//` block immediately above the field is the fallback.
fn field_comment(field: &syn::Field, file: usize, comments: &CommentIndex) -> String {
    let doc = parse::doc_lines(&field.attrs);
    if !doc.is_empty() {
        return doc.join(" ");
    }

    comments
        .block_ending_at(file, field.span().start().line)
        .map(|block| block.lines.join(" "))
        .unwrap_or_default()
}

/// Renders a field type as a string.
///
/// A simple named identifier is used verbatim; references prepend `&`; every
/// other shape falls back to its token stream with inter-token spacing
/// removed. The operation is total so an unusual field type can never abort
/// extraction.
fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(path) if path.qself.is_none() => match path.path.get_ident() {
            Some(ident) => ident.to_string(),
            None => compact_tokens(ty),
        },
        Type::Reference(reference) => format!("&{}", type_name(&reference.elem)),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => compact_tokens(ty),
    }
}

fn compact_tokens(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
