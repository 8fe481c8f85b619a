use crate::core::TtError;
use url::Url;

/// Fail with `TtError::Status` unless the response is 2xx.
pub(crate) fn ensure_success(resp: &reqwest::Response, url: &Url) -> Result<(), TtError> {
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(TtError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        })
    }
}

/// Read the response body as text.
/// In `test-mode`, if `TT_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        use crate::core::fixtures::{record_fixture, recording_enabled};
        if recording_enabled()
            && let Err(e) = record_fixture(_endpoint, _key, _ext, &text)
        {
            tracing::warn!(key = _key, error = %e, "failed to record fixture");
        }
    }

    Ok(text)
}

/// GET `url` and return the raw body bytes, failing on non-2xx.
pub(crate) async fn get_bytes(http: &reqwest::Client, url: &Url) -> Result<Vec<u8>, TtError> {
    let resp = http.get(url.clone()).send().await?;
    ensure_success(&resp, url)?;
    Ok(resp.bytes().await?.to_vec())
}
