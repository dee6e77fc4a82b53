//! Loader tests: directory walking, package ordering, and error surfacing.

use std::fs;
use std::path::Path;

use envdoc::{Error, aggregate, load_packages};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create test directories");
    }
    fs::write(path, contents).expect("write test file");
}

#[test]
fn test_missing_path_is_load_error() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let missing = dir.path().join("does-not-exist");

    let result = load_packages(&missing);
    assert!(matches!(result, Err(Error::Load { .. })));
}

#[test]
fn test_unparseable_file_is_parse_error() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(dir.path(), "broken.rs", "struct {");

    let result = load_packages(dir.path());
    match result {
        Err(Error::Parse { path, .. }) => assert!(path.ends_with("broken.rs")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_single_file_path_loads_one_package() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(
        dir.path(),
        "config.rs",
        "struct Single {\n    #[env(var = \"ONLY\")]\n    only: String,\n}\n",
    );

    let packages = load_packages(&dir.path().join("config.rs")).expect("load single file");
    assert_eq!(packages.len(), 1);

    let configs = aggregate(&packages);
    assert_eq!(configs["Single"].keys[0].name, "ONLY");
}

#[test]
fn test_each_directory_becomes_one_package() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(
        dir.path(),
        "lib.rs",
        "struct Root {\n    #[env(var = \"ROOT\")]\n    root: String,\n}\n",
    );
    write(
        dir.path(),
        "sub/mod.rs",
        "struct Nested {\n    #[env(var = \"NESTED\")]\n    nested: String,\n}\n",
    );

    let packages = load_packages(dir.path()).expect("load tree");
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, [".", "sub"]);

    let configs = aggregate(&packages);
    assert_eq!(configs.len(), 2);
    assert!(configs.contains_key("Root"));
    assert!(configs.contains_key("Nested"));
}

#[test]
fn test_colliding_type_takes_later_directory() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(
        dir.path(),
        "a/config.rs",
        "struct Shared {\n    #[env(var = \"FROM_A\")]\n    k: String,\n}\n",
    );
    write(
        dir.path(),
        "b/config.rs",
        "struct Shared {\n    #[env(var = \"FROM_B\")]\n    k: String,\n}\n",
    );

    let packages = load_packages(dir.path()).expect("load tree");
    let configs = aggregate(&packages);

    let config = &configs["Shared"];
    assert_eq!(config.keys.len(), 1);
    assert_eq!(config.keys[0].name, "FROM_B");
}

#[test]
fn test_hidden_and_target_directories_are_skipped() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(
        dir.path(),
        "src/lib.rs",
        "struct Kept {\n    #[env(var = \"KEPT\")]\n    k: String,\n}\n",
    );
    write(
        dir.path(),
        "target/debug/gen.rs",
        "struct Generated {\n    #[env(var = \"GEN\")]\n    k: String,\n}\n",
    );
    write(
        dir.path(),
        ".git/hook.rs",
        "struct Hook {\n    #[env(var = \"HOOK\")]\n    k: String,\n}\n",
    );

    let configs = aggregate(&load_packages(dir.path()).expect("load tree"));
    assert_eq!(configs.len(), 1);
    assert!(configs.contains_key("Kept"));
}

#[test]
fn test_non_rust_files_are_ignored() {
    let dir = tempfile::tempdir().expect("create tempdir");
    write(dir.path(), "README.md", "# not rust\n");
    write(dir.path(), "notes.txt", "struct Fake { }\n");
    write(
        dir.path(),
        "real.rs",
        "struct Real {\n    #[env(var = \"REAL\")]\n    k: String,\n}\n",
    );

    let packages = load_packages(dir.path()).expect("load tree");
    assert_eq!(packages.len(), 1);

    let configs = aggregate(&packages);
    assert_eq!(configs.len(), 1);
    assert!(configs.contains_key("Real"));
}

#[test]
fn test_directories_without_sources_yield_no_package() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::create_dir_all(dir.path().join("empty/deeper")).expect("create dirs");
    write(
        dir.path(),
        "src/lib.rs",
        "struct Only {\n    #[env(var = \"ONLY\")]\n    k: String,\n}\n",
    );

    let packages = load_packages(dir.path()).expect("load tree");
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["src"]);
}
