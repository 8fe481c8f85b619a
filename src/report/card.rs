use std::fmt;
use std::path::PathBuf;

use crate::profile::OpaqueId;
use crate::region::RegionInfo;
use crate::TtError;

/// Result of the optional avatar download.
#[derive(Debug)]
pub enum AvatarSave {
    /// Bytes were written to this path.
    Saved(PathBuf),
    /// The download or the write failed; the rest of the card is still valid.
    Failed(TtError),
}

/// The rendered field set for one profile.
///
/// `Display` produces the report text shown to the user.
#[derive(Debug)]
pub struct ProfileCard {
    pub username: String,
    pub nickname: String,
    pub id: OpaqueId,
    pub followers: u64,
    pub following: u64,
    pub likes: u64,
    pub videos: u64,
    pub bio: String,
    pub region: RegionInfo,
    /// `None` when saving was not requested.
    pub avatar: Option<AvatarSave>,
}

impl ProfileCard {
    pub fn avatar_saved(&self) -> bool {
        matches!(self.avatar, Some(AvatarSave::Saved(_)))
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}\n\n", self.username)?;
        write!(f, "Nickname: {}\n\n", self.nickname)?;
        write!(f, "ID: {}\n\n", self.id)?;
        write!(f, "Followers: {}\n\n", self.followers)?;
        write!(f, "Following: {}\n\n", self.following)?;
        write!(f, "Likes: {}\n\n", self.likes)?;
        write!(f, "Videos: {}\n\n", self.videos)?;
        write!(f, "Bio: {}\n\n", self.bio)?;
        writeln!(f, "Country: {}", self.region)?;

        match &self.avatar {
            Some(AvatarSave::Saved(path)) => {
                writeln!(f, "Profile picture saved as {}", path.display())
            }
            Some(AvatarSave::Failed(e)) => writeln!(f, "Error saving profile picture: {e}"),
            None => Ok(()),
        }
    }
}
