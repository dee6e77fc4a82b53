//! Source loading: the IO boundary in front of the pure pipeline.
//!
//! The loader turns a filesystem path into the ordered [`Package`] list the
//! aggregator consumes. Every directory containing `.rs` files becomes one
//! package, named by its path relative to the root; a path to a single `.rs`
//! file becomes a one-file package. Directories are visited depth-first with
//! sorted children and files are sorted within each directory, so aggregation
//! order — and therefore overwrite order on type-name collisions — is
//! deterministic.
//!
//! Hidden directories and `target/` are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::aggregate::Package;
use crate::error::{Error, Result};

/// Loads all packages under `root`.
///
/// # Errors
///
/// Returns [`Error::Load`] when a path cannot be read and [`Error::Parse`]
/// when a source file is not valid Rust. Both are fatal for the invocation.
pub fn load_packages(root: &Path) -> Result<Vec<Package>> {
    let metadata = fs::metadata(root).map_err(|source| load_error(root, source))?;

    if metadata.is_file() {
        let mut package = Package::new(root.display().to_string());
        push_file(&mut package, root)?;
        return Ok(vec![package]);
    }

    let mut scanned = Vec::new();
    scan_dir(root, &mut scanned)?;

    let mut packages = Vec::new();
    for (dir, files) in scanned {
        if files.is_empty() {
            continue;
        }

        let mut package = Package::new(package_name(root, &dir));
        for path in &files {
            push_file(&mut package, path)?;
        }

        tracing::debug!(package = %package.name, files = files.len(), "loaded package");
        packages.push(package);
    }

    Ok(packages)
}

/// Reads and parses one file into `package`.
fn push_file(package: &mut Package, path: &Path) -> Result<()> {
    let source = fs::read_to_string(path).map_err(|source| load_error(path, source))?;
    package
        .push_source(&source)
        .map_err(|source| Error::Parse { path: path.to_path_buf(), source })
}

/// Depth-first scan with sorted children: each visited directory contributes
/// one `(dir, sorted .rs files)` entry, parents before children.
fn scan_dir(dir: &Path, out: &mut Vec<(PathBuf, Vec<PathBuf>)>) -> Result<()> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    let entries = fs::read_dir(dir).map_err(|source| load_error(dir, source))?;
    for entry in entries {
        let entry = entry.map_err(|source| load_error(dir, source))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| load_error(&path, source))?;

        if file_type.is_dir() {
            if !skip_dir(&path) {
                subdirs.push(path);
            }
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    files.sort();
    subdirs.sort();
    out.push((dir.to_path_buf(), files));

    for sub in subdirs {
        scan_dir(&sub, out)?;
    }

    Ok(())
}

/// Hidden directories and build output are not source packages.
fn skip_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_none_or(|name| name.starts_with('.') || name == "target")
}

/// Package name relative to the scanned root; the root itself is `.`.
fn package_name(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => ".".to_string(),
    }
}

fn load_error(path: &Path, source: io::Error) -> Error {
    Error::Load { path: path.to_path_buf(), source }
}
