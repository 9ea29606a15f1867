use std::sync::Arc;

use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub const PROFILE_IMAGE_KEY: &str = "profileImage";

pub const DEFAULT_AVATAR_URL: &str =
    "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Image types the file picker offers.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("uploaded image produced no data")]
    Empty,
    #[error("could not read selected file: {0}")]
    ReadFailed(String),
}

/// Something an `<img src>` can display: a URL or an embedded data URL.
/// Never empty. Clones share the underlying buffer, data URLs can run to
/// megabytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage(Arc<str>);

impl AvatarImage {
    /// Accepts the payload of a completed file read.
    pub fn from_upload(data: impl Into<String>) -> Result<Self, AvatarError> {
        let data = data.into();
        if data.trim().is_empty() {
            return Err(AvatarError::Empty);
        }
        Ok(Self(data.into()))
    }

    /// Maps a finished read of `file_name` to an avatar. `None` means the
    /// reader ended without a string result (error or abort).
    pub fn from_read(result: Option<String>, file_name: &str) -> Result<Self, AvatarError> {
        match result {
            Some(data) => Self::from_upload(data),
            None => Err(AvatarError::ReadFailed(file_name.to_owned())),
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.0.starts_with("data:")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AvatarImage {
    fn default() -> Self {
        Self(DEFAULT_AVATAR_URL.into())
    }
}

/// The stored avatar, or the default when nothing usable is stored.
pub fn load_avatar(store: &impl KeyValueStore) -> AvatarImage {
    store
        .get(PROFILE_IMAGE_KEY)
        .and_then(|stored| AvatarImage::from_upload(stored).ok())
        .unwrap_or_default()
}

pub fn save_avatar(store: &impl KeyValueStore, avatar: &AvatarImage) -> Result<(), StorageError> {
    store.set(PROFILE_IMAGE_KEY, avatar.as_str())
}
