//! Centralized constants for the default endpoint and browser headers.

/// Desktop Chrome UA; the profile page serves a stripped shell to unknown agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/114.0.0.0 Safari/537.36"
);

/// Language preference sent with every page request.
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// TikTok web base (`@<username>` is appended).
pub(crate) const DEFAULT_BASE_PROFILE: &str = "https://www.tiktok.com/";
