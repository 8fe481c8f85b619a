//! Debug dump helpers for troubleshooting page layout changes.
//! Compiled only with the `debug-dumps` feature.

use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

use crate::core::file_safe_key;

/// `<temp>/tiktok_profile-<username>-<suffix>`.
pub fn dump_path(username: &str, suffix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tiktok_profile-{}-{suffix}", file_safe_key(username)))
}

pub fn debug_dump_html(username: &str, html: &str) -> std::io::Result<()> {
    let path = dump_path(username, "page.html");
    std::fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), "wrote profile page dump");
    Ok(())
}

pub fn debug_dump_extracted_json(username: &str, json: &str) -> std::io::Result<()> {
    let path = dump_path(username, "extracted.json");
    let mut f = std::fs::File::create(&path)?;

    if let Ok(val) = serde_json::from_str::<Value>(json)
        && let Ok(pretty) = serde_json::to_string_pretty(&val)
    {
        f.write_all(pretty.as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote pretty-printed extracted JSON");
        return Ok(());
    }

    f.write_all(json.as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote raw extracted JSON");
    Ok(())
}
