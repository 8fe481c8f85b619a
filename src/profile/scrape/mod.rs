//! Scrape the profile HTML and parse its embedded rehydration data.

use crate::core::net::{ensure_success, get_text};
use crate::{TtClient, TtError};

use super::ProfileSnapshot;

#[cfg(feature = "debug-dumps")]
use crate::profile::debug::{debug_dump_extracted_json, debug_dump_html};

pub(crate) mod extract;
use extract::extract_rehydration_json;

pub(crate) async fn load_from_scrape(
    client: &TtClient,
    username: &str,
) -> Result<ProfileSnapshot, TtError> {
    let url = client.profile_url(username)?;
    tracing::debug!(%url, "requesting profile page");

    let resp = client.http().get(url.clone()).send().await?;
    ensure_success(&resp, &url)?;
    let body = get_text(resp, "profile_html", username, "html").await?;
    tracing::debug!(len = body.len(), "profile page received");

    #[cfg(feature = "debug-dumps")]
    {
        let _ = debug_dump_html(username, &body);
    }

    let json_str = extract_rehydration_json(&body)?;

    #[cfg(feature = "debug-dumps")]
    {
        let _ = debug_dump_extracted_json(username, json_str);
    }

    let snapshot = ProfileSnapshot::from_value(serde_json::from_str(json_str)?);
    if snapshot.is_empty() {
        return Err(TtError::EmptyData);
    }
    Ok(snapshot)
}
