use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Create `relpath` under `root` with placeholder content
pub fn create_file(root: &Path, relpath: &str) -> PathBuf {
    let path = root.join(relpath);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create test folder");
    }
    fs::write(&path, b"fake content").expect("Failed to write test file");
    path
}
