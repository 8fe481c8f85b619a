//! tiktok-profile-rs: fetch a TikTok public profile and render a profile card.
//!
//! The pipeline has two roles:
//! - [`fetch_profile`] requests `https://www.tiktok.com/@<username>` with
//!   browser-like headers and parses the page's embedded rehydration JSON into a
//!   [`ProfileSnapshot`].
//! - [`Presenter::render`] reads the handle, counts, bio and region out of the
//!   snapshot into a [`ProfileCard`], optionally saving the avatar to disk.
//!
//! [`Session`] wraps both as a single-in-flight background task for UI front-ends.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use tiktok_profile::{Presenter, RegionTable, TtClient, fetch_profile};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TtClient::default();
//! let presenter = Presenter::new(client.clone(), Arc::new(RegionTable::builtin()));
//!
//! let snapshot = fetch_profile(&client, "tiktok").await?;
//! let card = presenter.render(&snapshot, false).await?;
//! println!("{card}");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod profile;
pub mod region;
pub mod report;
pub mod session;

pub use crate::core::{TtClient, TtClientBuilder, TtError};
pub use profile::{ProfileSnapshot, UserInfo, fetch_profile};
pub use region::{RegionInfo, RegionTable};
pub use report::{AvatarSave, Presenter, ProfileCard};
pub use session::{LookupOutcome, PendingLookup, Session};
