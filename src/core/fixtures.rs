//! Saves fetched pages under the fixture directory when `TT_RECORD=1`.
//! Compiled only with the `test-mode` feature.

use std::path::{Path, PathBuf};

use crate::core::file_safe_key;

/// `TT_FIXDIR` if set, else `tests/fixtures` in this crate.
pub(crate) fn fixture_dir() -> PathBuf {
    std::env::var_os("TT_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn recording_enabled() -> bool {
    std::env::var("TT_RECORD").ok().as_deref() == Some("1")
}

/// Writes `body` to `<fixture_dir>/<endpoint>_<key>.<ext>`, the name the
/// offline tests load pages by.
pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> std::io::Result<PathBuf> {
    let dir = fixture_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}_{}.{ext}", file_safe_key(key)));
    std::fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "recorded fixture");
    Ok(path)
}
