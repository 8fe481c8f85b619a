//! Turns a [`ProfileSnapshot`] into a [`ProfileCard`], optionally saving the avatar.

mod card;

pub use card::{AvatarSave, ProfileCard};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use url::Url;

use crate::core::net::get_bytes;
use crate::profile::{ProfileSnapshot, UserInfo};
use crate::region::RegionTable;
use crate::{TtClient, TtError};

/// File name the avatar is written under: `<uniqueId>_profile_pic.jpg`.
pub fn avatar_file_name(unique_id: &str) -> String {
    format!("{unique_id}_profile_pic.jpg")
}

/// Renders snapshots against an injected region table.
#[derive(Debug, Clone)]
pub struct Presenter {
    client: TtClient,
    regions: Arc<RegionTable>,
    output_dir: PathBuf,
}

impl Presenter {
    /// Creates a presenter that writes avatars into the current working directory.
    pub fn new(client: TtClient, regions: Arc<RegionTable>) -> Self {
        Self {
            client,
            regions,
            output_dir: PathBuf::new(),
        }
    }

    /// Directory avatars are written to.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Reads the required fields from `snapshot` and builds the card.
    ///
    /// A missing region is not an error and shows as `Unknown`. Any other
    /// missing field fails the whole render; no partial card is produced.
    ///
    /// With `save_avatar`, the `avatarLarger` image is downloaded and written to
    /// `<output_dir>/<uniqueId>_profile_pic.jpg`, replacing any existing file.
    /// The handle is not sanitized, so a handle containing path separators
    /// writes outside `output_dir`. A failed download or write is recorded in
    /// [`ProfileCard::avatar`] and does not fail the render.
    ///
    /// # Errors
    ///
    /// Returns [`TtError::MissingField`] if a required field is absent or
    /// malformed. `avatarLarger` counts as required only when `save_avatar` is set.
    #[tracing::instrument(skip(self, snapshot))]
    pub async fn render(
        &self,
        snapshot: &ProfileSnapshot,
        save_avatar: bool,
    ) -> Result<ProfileCard, TtError> {
        let UserInfo { user, stats } = snapshot
            .user_info()
            .inspect_err(|e| tracing::warn!(error = %e, "profile data incomplete"))?;

        let region = self.regions.resolve(user.region.as_deref()).clone();

        let avatar = if save_avatar {
            let url = user
                .avatar_larger
                .as_deref()
                .ok_or_else(|| TtError::MissingField("avatarLarger".into()))?;
            Some(self.save_avatar(url, &user.unique_id).await)
        } else {
            None
        };

        Ok(ProfileCard {
            username: user.unique_id,
            nickname: user.nickname,
            id: user.id,
            followers: stats.follower_count,
            following: stats.following_count,
            likes: stats.heart_count,
            videos: stats.video_count,
            bio: user.signature,
            region,
            avatar,
        })
    }

    async fn save_avatar(&self, url: &str, unique_id: &str) -> AvatarSave {
        let path = self.output_dir.join(avatar_file_name(unique_id));
        match self.download_to(url, &path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "avatar saved");
                AvatarSave::Saved(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "avatar save failed");
                AvatarSave::Failed(e)
            }
        }
    }

    async fn download_to(&self, url: &str, path: &Path) -> Result<(), TtError> {
        let url = Url::parse(url)?;
        let bytes = get_bytes(self.client.http(), &url).await?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}
