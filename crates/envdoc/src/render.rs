//! Markdown rendering of the aggregated model.
//!
//! For each type name in lexicographic (byte-wise) order — the natural
//! iteration order of the aggregated `BTreeMap` — the renderer emits a
//! level-2 heading, the type's comment blocks, and a left-aligned padded
//! table with columns Name / Type / Required / Default / Comment.
//!
//! Rendering is deterministic: the same model always produces byte-identical
//! output. The only failure mode is the sink itself.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::error::Error;
use crate::model::{ConfigKey, ConfigType};

const HEADERS: [&str; 5] = ["Name", "Type", "Required", "Default", "Comment"];

/// Renders the aggregated model as markdown into `out`.
///
/// # Errors
///
/// Returns [`Error::Render`] when the sink fails to accept a write.
pub fn render_markdown<W: Write>(
    out: &mut W,
    configs: &BTreeMap<String, ConfigType>,
) -> Result<(), Error> {
    for (name, config) in configs {
        render_type(out, name, config).map_err(|source| Error::Render { source })?;
    }
    Ok(())
}

fn render_type<W: Write>(out: &mut W, name: &str, config: &ConfigType) -> io::Result<()> {
    writeln!(out, "## {name}")?;
    writeln!(out)?;

    for block in &config.comments {
        for line in &block.lines {
            writeln!(out, "{line}")?;
        }
    }
    if !config.comments.is_empty() {
        writeln!(out)?;
    }

    let rows: Vec<[String; 5]> = config.keys.iter().map(row).collect();
    let widths = column_widths(&rows);

    for (i, header) in HEADERS.iter().enumerate() {
        write!(out, "| {header:<width$} ", width = widths[i])?;
    }
    writeln!(out, "|")?;

    for width in widths {
        write!(out, "|:{}", "-".repeat(width + 1))?;
    }
    writeln!(out, "|")?;

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            write!(out, "| {cell:<width$} ", width = widths[i])?;
        }
        writeln!(out, "|")?;
    }

    // One blank line after each table.
    writeln!(out)
}

fn row(key: &ConfigKey) -> [String; 5] {
    let default = if key.default.is_empty() {
        String::new()
    } else {
        format!("{:?}", key.default)
    };

    [
        key.name.clone(),
        key.type_name.clone(),
        key.required.to_string(),
        default,
        key.comment.clone(),
    ]
}

fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths
}
