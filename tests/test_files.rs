use std::fs;
use std::path::PathBuf;

use minihttpd::files;

/// Fresh directory under the system temp dir, unique per test.
fn temp_root(name: &str) -> String {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "minihttpd-files-{}-{}",
        std::process::id(),
        name
    ));
    fs::create_dir_all(&dir).unwrap();
    format!("{}/", dir.display())
}

#[test]
fn test_load_returns_exact_bytes() {
    let root = temp_root("exact");
    fs::write(format!("{root}page.html"), b"hello world").unwrap();

    let contents = files::load(&root, "/page.html").unwrap();
    assert_eq!(contents, b"hello world");
}

#[test]
fn test_load_binary_contents() {
    let root = temp_root("binary");
    let data = vec![0u8, 1, 2, 3, 254, 255];
    fs::write(format!("{root}blob.bin"), &data).unwrap();

    let contents = files::load(&root, "/blob.bin").unwrap();
    assert_eq!(contents, data);
}

#[test]
fn test_load_empty_file() {
    let root = temp_root("empty");
    fs::write(format!("{root}empty.html"), b"").unwrap();

    let contents = files::load(&root, "/empty.html").unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_load_missing_file_errors() {
    let root = temp_root("missing");
    assert!(files::load(&root, "/nope.html").is_err());
}

#[test]
fn test_load_concatenates_root_and_path() {
    // The leading slash of the request path lands right after the root's
    // trailing separator; the doubled slash is harmless
    let root = temp_root("concat");
    fs::create_dir_all(format!("{root}sub")).unwrap();
    fs::write(format!("{root}sub/a.html"), b"nested").unwrap();

    let contents = files::load(&root, "/sub/a.html").unwrap();
    assert_eq!(contents, b"nested");
}
