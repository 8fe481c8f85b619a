use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Typed view of the `userInfo` node of a profile snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub user: User,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The `@handle`.
    pub unique_id: String,
    pub nickname: String,
    pub id: OpaqueId,
    /// Biography text.
    pub signature: String,
    /// Two-letter region code. Non-string values are treated as absent.
    #[serde(default, deserialize_with = "region_code")]
    pub region: Option<String>,
    #[serde(default)]
    pub avatar_larger: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub follower_count: u64,
    pub following_count: u64,
    /// Total likes received.
    pub heart_count: u64,
    pub video_count: u64,
}

/// Numeric account identifier; the page has shipped it both as a string and a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OpaqueId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpaqueId::Text(s) => f.write_str(s),
            OpaqueId::Number(n) => write!(f, "{n}"),
        }
    }
}

fn region_code<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(|v| v.as_str().map(str::to_owned)))
}
