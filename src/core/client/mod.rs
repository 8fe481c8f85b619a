//! Public client surface + builder.
//! Defaults (UA, language, base URL) live in `constants`.

mod constants;

use crate::core::TtError;
use constants::{ACCEPT_LANGUAGE, DEFAULT_BASE_PROFILE, USER_AGENT};
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// HTTP client configured to look like a desktop browser.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TtClient {
    http: Client,
    base_profile: Url,
}

impl Default for TtClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl TtClient {
    /// Create a new builder.
    pub fn builder() -> TtClientBuilder {
        TtClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_profile(&self) -> &Url {
        &self.base_profile
    }

    /// Builds the profile page URL for `username`.
    ///
    /// Nothing is validated or escaped. The result is `<base>` joined with
    /// `@<username>`, and the join applies URL normalization: dot segments are
    /// resolved (`a/../../admin` requests `/admin`) and backslashes become
    /// slashes (`a\b` requests `/@a/b`). `?` and `#` start a query or fragment.
    pub fn profile_url(&self, username: &str) -> Result<Url, TtError> {
        Ok(self.base_profile.join(&format!("@{username}"))?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TtClientBuilder {
    user_agent: Option<String>,
    accept_language: Option<String>,
    base_profile: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TtClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Accept-Language header (default `en-US,en;q=0.9`).
    pub fn accept_language(mut self, lang: impl Into<String>) -> Self {
        self.accept_language = Some(lang.into());
        self
    }

    /// Override the profile HTML base (e.g., `https://www.tiktok.com/`).
    pub fn base_profile(mut self, url: Url) -> Self {
        self.base_profile = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<TtClient, TtError> {
        let base_profile = match self.base_profile {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PROFILE)?,
        };

        let lang = self.accept_language.as_deref().unwrap_or(ACCEPT_LANGUAGE);
        let lang = HeaderValue::from_str(lang)?;
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_LANGUAGE, lang);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(TtClient { http, base_profile })
    }
}
