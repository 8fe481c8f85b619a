//! Core components of the `tiktok-profile-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The HTTP [`TtClient`] and its builder.
//! - The primary [`TtError`] type.
//! - Internal networking helpers.

/// The HTTP client (`TtClient`), builder, and default headers.
pub mod client;
/// The primary error type (`TtError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

/// Maps a username onto something safe to use inside a file name.
#[cfg(any(feature = "test-mode", feature = "debug-dumps"))]
pub(crate) fn file_safe_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '.' { c } else { '-' })
        .collect()
}

// convenient re-exports so most code can just `use crate::core::TtClient`
pub use client::{TtClient, TtClientBuilder};
pub use error::TtError;
