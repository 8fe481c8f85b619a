//! Profile retrieval: fetch the public page and parse its embedded data.
//!
//! Internals are split into:
//! - `scrape`: page request + rehydration block extraction
//! - `model`:  typed view over the `userInfo` node
//! - `debug`:  optional dump helpers (only with the `debug-dumps` feature)

mod scrape;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

use crate::{TtClient, TtError};
use serde::Deserialize;
use serde_json::Value;

mod model;
pub use model::{OpaqueId, Stats, User, UserInfo};
pub use scrape::extract::{CLOSE_TAG, OPEN_MARKER, extract_rehydration_json};

/// JSON pointer to the user detail node inside the rehydration data.
pub const USER_INFO_POINTER: &str = "/__DEFAULT_SCOPE__/webapp.user-detail/userInfo";

/// The parsed rehydration data for one profile page.
///
/// Nothing is validated at parse time. Field lookups happen in
/// [`ProfileSnapshot::user_info`], so a snapshot with missing fields is still a
/// snapshot and the failure surfaces when it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    data: Value,
}

impl ProfileSnapshot {
    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// Parses a raw rehydration JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`TtError::Parse`] if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, TtError> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    /// True for `null`, `false`, `0`, `""`, `[]` and `{}`: a page that carried
    /// the block but no data in it.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(m) => m.is_empty(),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.data
    }

    /// Reads the typed user detail node.
    ///
    /// # Errors
    ///
    /// Returns [`TtError::MissingField`] if the node is absent or any required
    /// field is missing or has the wrong type.
    pub fn user_info(&self) -> Result<UserInfo, TtError> {
        let node = self
            .data
            .pointer(USER_INFO_POINTER)
            .ok_or_else(|| TtError::MissingField("__DEFAULT_SCOPE__.webapp.user-detail.userInfo".into()))?;
        UserInfo::deserialize(node).map_err(|e| TtError::MissingField(e.to_string()))
    }
}

/// Fetches the profile page for `username` and parses its rehydration data.
///
/// The URL is built by [`TtClient::profile_url`]; the username is not validated.
///
/// # Errors
///
/// Returns `TtError` if the request fails, the server answers non-2xx, the data
/// block cannot be located, its contents are not valid JSON, or it parses to an
/// empty value ([`TtError::EmptyData`]). Each failure is logged at `warn` before
/// being returned.
#[tracing::instrument(skip(client))]
pub async fn fetch_profile(client: &TtClient, username: &str) -> Result<ProfileSnapshot, TtError> {
    scrape::load_from_scrape(client, username)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "error fetching/parsing profile"))
}
