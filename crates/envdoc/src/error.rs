//! Error types for loading and rendering.
//!
//! Every operation in the pipeline is a one-shot transformation: an error
//! aborts the whole invocation, with no retries and no partial recovery.
//! Malformed attributes are not errors at all; they follow the tolerance
//! policy in [`crate::parse`] and are skipped with a WARN log line.
//!
//! | Variant | Code | Meaning |
//! |---------|------|---------|
//! | [`Error::Load`] | `envdoc::load` | A path could not be read or resolved |
//! | [`Error::Parse`] | `envdoc::parse` | A source file is not valid Rust |
//! | [`Error::Render`] | `envdoc::render` | The output sink failed |

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error as ThisError;

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the loader and renderer.
#[derive(Debug, ThisError, Diagnostic)]
#[non_exhaustive]
pub enum Error {
    /// The documented path could not be read or resolved.
    #[error("failed to read `{}`", path.display())]
    #[diagnostic(
        code(envdoc::load),
        help("check that the path exists and points to a Rust source file or directory")
    )]
    Load {
        /// The path that failed.
        path: PathBuf,

        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A source file could not be parsed as Rust.
    #[error("failed to parse `{}` as Rust source", path.display())]
    #[diagnostic(
        code(envdoc::parse),
        help("the file must contain syntactically valid Rust")
    )]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,

        /// The underlying parse error.
        #[source]
        source: syn::Error,
    },

    /// The rendered markdown could not be written to the output sink.
    #[error("failed to write rendered markdown")]
    #[diagnostic(code(envdoc::render))]
    Render {
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}
