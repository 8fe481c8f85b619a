//! Locates the rehydration JSON blob inside the profile page HTML.

use crate::core::TtError;

/// Opening tag of the script block that carries the page's bootstrap data.
pub const OPEN_MARKER: &str =
    r#"<script id="__UNIVERSAL_DATA_FOR_REHYDRATION__" type="application/json">"#;

/// Closing tag searched for after [`OPEN_MARKER`].
pub const CLOSE_TAG: &str = "</script>";

/// Returns the text between the first [`OPEN_MARKER`] and the next [`CLOSE_TAG`].
///
/// This is a plain substring search with no fallback marker. If the page layout
/// changes the result is an error here or a parse error downstream.
///
/// # Errors
///
/// - [`TtError::MarkerNotFound`] if the opening marker is absent.
/// - [`TtError::Unterminated`] if no closing tag follows the marker.
pub fn extract_rehydration_json(body: &str) -> Result<&str, TtError> {
    let start = body
        .find(OPEN_MARKER)
        .map(|i| i + OPEN_MARKER.len())
        .ok_or(TtError::MarkerNotFound)?;
    let len = body[start..].find(CLOSE_TAG).ok_or(TtError::Unterminated)?;

    tracing::debug!(start, len, "extracted rehydration block");
    Ok(&body[start..start + len])
}
