//! Attribute parsing for `#[env(var = "VAR", required, default = "value")]`.
//!
//! This module owns the attribute grammar. It uses syn's `ParseNestedMeta`
//! for structured key-value parsing with automatic comma handling, and a
//! builder that accumulates options one at a time before producing the final
//! [`EnvAttr`].
//!
//! # Supported Syntax
//!
//! ```ignore
//! #[env(var = "DATABASE_URL")]                            // key name only
//! #[env(var = "DATABASE_URL", required = "true")]         // required, literal form
//! #[env(var = "CACHE_DIR", required)]                     // required, flag form
//! #[env(var = "PORT", default = "8080")]                  // with default
//! ```
//!
//! Struct-level:
//!
//! ```ignore
//! #[env_config(prefix = "APP_")]                          // prefix for all keys
//! ```
//!
//! # Tolerance Policy
//!
//! Documentation extraction must cope with attribute dialects it only partly
//! understands, so parsing is deliberately lenient:
//!
//! - Unknown options (`optional`, `secret`, `format = "json"`, ...) are
//!   consumed and ignored.
//! - Duplicate options keep the first occurrence.
//! - `required = "<literal>"` is true only for the exact literal `"true"`;
//!   any other literal is false. The bare `required` flag means true.
//! - An attribute whose token stream does not parse at all is reported as a
//!   `syn::Error` to the caller, which skips the field.

use proc_macro2::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Expr, ExprLit, Field, Lit, LitStr, Meta, Result as SynResult, Token, parenthesized,
};

/// The parsed result of a field's `#[env(...)]` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvAttr {
    /// The configuration key name, from `var = "..."`. `None` when the
    /// attribute carries no `var` option; such fields are not configuration
    /// keys and are skipped entirely.
    pub var_name: Option<String>,

    /// The required flag. Defaults to false.
    pub required: bool,

    /// The default value literal, exact and unmodified. `None` when absent.
    pub default: Option<String>,
}

/// Accumulates `#[env(...)]` options one at a time.
///
/// First occurrence wins for every option; later duplicates are consumed so
/// the meta stream stays aligned, then dropped.
#[derive(Default)]
struct Parser {
    var_name: Option<String>,
    required: Option<bool>,
    default: Option<String>,
}

impl Parser {
    /// Parses a single option from within the attribute. Called once per
    /// comma-separated item by `parse_nested_meta`.
    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> SynResult<()> {
        let Some(ident) = meta.path.get_ident() else {
            // Path-shaped options belong to some other dialect.
            return skip_value(meta);
        };

        match ident.to_string().as_str() {
            "var" => {
                let lit: LitStr = meta.value()?.parse()?;
                if self.var_name.is_none() {
                    self.var_name = Some(lit.value());
                }
            }

            // `required = "true"` compares the literal exactly; every other
            // literal is false. The bare flag form means true.
            "required" => {
                let value = if meta.input.peek(Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    lit.value() == "true"
                } else {
                    true
                };
                if self.required.is_none() {
                    self.required = Some(value);
                }
            }

            "default" => {
                let lit: LitStr = meta.value()?.parse()?;
                if self.default.is_none() {
                    self.default = Some(lit.value());
                }
            }

            _ => skip_value(meta)?,
        }

        Ok(())
    }

    fn build(self) -> EnvAttr {
        EnvAttr {
            var_name: self.var_name,
            required: self.required.unwrap_or(false),
            default: self.default,
        }
    }
}

/// Consumes and discards the value of an unrecognized option so the
/// surrounding meta stream stays aligned for the next item.
fn skip_value(meta: &ParseNestedMeta) -> SynResult<()> {
    if meta.input.peek(Token![=]) {
        let _value: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        let _tokens: TokenStream = content.parse()?;
    }
    Ok(())
}

/// Parses the first `#[env(...)]` attribute on `field`, if any.
///
/// Returns `Ok(None)` when the field has no `env` attribute. Returns
/// `Err` only when the attribute's tokens cannot be parsed as key-value
/// options at all; the extractor logs and skips such fields.
pub fn parse_field_attr(field: &Field) -> SynResult<Option<EnvAttr>> {
    for attr in &field.attrs {
        if !attr.path().is_ident("env") {
            continue;
        }

        let mut parser = Parser::default();
        attr.parse_nested_meta(|meta| parser.parse_meta(&meta))?;
        return Ok(Some(parser.build()));
    }

    Ok(None)
}

/// Parses a struct-level `#[env_config(prefix = "...")]` attribute.
///
/// Unknown `env_config` options are ignored; an unparseable attribute yields
/// no prefix rather than an error.
#[must_use]
pub fn parse_struct_prefix(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("env_config") {
            continue;
        }

        let mut prefix = None;
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                let lit: LitStr = meta.value()?.parse()?;
                if prefix.is_none() {
                    prefix = Some(lit.value());
                }
                Ok(())
            } else {
                skip_value(&meta)
            }
        });

        if let Err(err) = parsed {
            tracing::warn!(error = %err, "ignoring unparseable #[env_config] attribute");
        }
        if prefix.is_some() {
            return prefix;
        }
    }

    None
}

/// Extracts doc-comment lines from an attribute list.
///
/// Doc comments like `/// text` become `#[doc = "text"]` attributes during
/// parsing; this collects each line's text, trimmed, in source order.
#[must_use]
pub fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }

        if let Meta::NameValue(meta) = &attr.meta
            && let Expr::Lit(ExprLit { lit: Lit::Str(lit_str), .. }) = &meta.value
        {
            lines.push(lit_str.value().trim().to_string());
        }
    }

    lines
}
