use std::fs;
use tempfile::TempDir;

/// Source directory with `a.jpg`, `b.JPG`, `c` and a nested `sub/` folder.
pub fn create_test_source() -> TempDir {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("a.jpg"), b"jpeg bytes a").unwrap();
    fs::write(dir.path().join("b.JPG"), b"jpeg bytes b").unwrap();
    fs::write(dir.path().join("c"), b"plain").unwrap();

    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/nested.txt"), b"nested").unwrap();

    dir
}
