//! # envdoc
//!
//! Extracts configuration-schema metadata from Rust struct declarations
//! annotated with environment-variable binding attributes and renders it as
//! markdown documentation.
//!
//! A struct like this:
//!
//! ```ignore
//! /// Connection settings for the primary database.
//! struct DatabaseSettings {
//!     /// Database URL for connection
//!     #[env(var = "DATABASE_URL", required = "true", default = "localhost:5432")]
//!     database_url: String,
//!
//!     /// API Key for authentication
//!     #[env(var = "API_KEY")]
//!     api_key: String,
//! }
//! ```
//!
//! becomes a level-2 heading, its doc comment, and a table with one row per
//! annotated field (Name / Type / Required / Default / Comment).
//!
//! ## Pipeline
//!
//! ```text
//! package path
//!     │  load::load_packages      read + syn::parse_file, one package per directory
//!     ▼
//! Vec<Package>                    parsed files + comment index
//!     │  aggregate::aggregate     pure; later packages win on name collision
//!     │      ├─ collect::collect_decls
//!     │      └─ extract::extract_config_types
//!     ▼
//! BTreeMap<String, ConfigType>
//!     │  render::render_markdown
//!     ▼
//! markdown text
//! ```
//!
//! ## Modules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`collect`] | Find top-level struct declarations in parsed files |
//! | [`parse`] | The `#[env(...)]` / `#[env_config(...)]` attribute grammar |
//! | [`extract`] | Turn declarations into [`model::ConfigType`] entries |
//! | [`comment`] | Plain `//` comment lookup over raw source text |
//! | [`aggregate`] | Per-package extraction and last-wins merging |
//! | [`load`] | Filesystem walking and parsing (the only input IO) |
//! | [`render`] | Markdown serialization (the only output IO) |
//! | [`error`] | [`Error`] with miette diagnostics |
//!
//! ## Example
//!
//! ```rust,ignore
//! let packages = envdoc::load_packages(Path::new("./src"))?;
//! let configs = envdoc::aggregate(&packages);
//! envdoc::render_markdown(&mut std::io::stdout().lock(), &configs)?;
//! ```
//!
//! The whole pipeline is single-threaded and deterministic; no state
//! persists between invocations.

pub mod aggregate;
pub mod collect;
pub mod comment;
pub mod error;
pub mod extract;
pub mod load;
pub mod model;
pub mod parse;
pub mod render;

pub use aggregate::{Package, aggregate};
pub use comment::CommentIndex;
pub use error::{Error, Result};
pub use load::load_packages;
pub use model::{CommentBlock, ConfigKey, ConfigType};
pub use render::render_markdown;
