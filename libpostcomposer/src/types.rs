//! Core types for PostComposer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Users
// ============================================================================

/// A user record mirrored from the identity provider for in-app display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub clerk_id: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub created_at: i64,
}

impl User {
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name: None,
            username: None,
            clerk_id: None,
            profile_image: None,
            bio: None,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// The subset of user fields returned when listing the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub username: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            profile_image: user.profile_image,
            bio: user.bio,
        }
    }
}

/// Input for creating a user
///
/// `email` is optional at the type level so that a missing field reaches the
/// service and is rejected with a client error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub clerk_id: Option<String>,
}

/// Authorization level of a signed-in principal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl Role {
    /// Owners and admins may approve posts
    pub fn can_approve(&self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Infer the media type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" => Some(Self::Image),
            "mp4" | "mov" | "webm" | "mkv" | "avi" => Some(Self::Video),
            _ => None,
        }
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(format!("Invalid media type: '{}'. Valid options: image, video", s)),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type filter applied by the media library tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFilter {
    #[default]
    All,
    Image,
    Video,
}

impl MediaFilter {
    pub const ALL: [MediaFilter; 3] = [MediaFilter::All, MediaFilter::Image, MediaFilter::Video];

    pub fn matches(&self, media_type: MediaType) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Image => media_type == MediaType::Image,
            MediaFilter::Video => media_type == MediaType::Video,
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            MediaFilter::All => "All",
            MediaFilter::Image => "Images",
            MediaFilter::Video => "Videos",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            MediaFilter::All => MediaFilter::Image,
            MediaFilter::Image => MediaFilter::Video,
            MediaFilter::Video => MediaFilter::All,
        }
    }
}

impl FromStr for MediaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(format!(
                "Invalid media filter: '{}'. Valid options: all, image, video",
                s
            )),
        }
    }
}

/// A media library entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub size: u64,
    pub url: String,
    pub thumbnail_url: String,
    pub created_at: i64,
}

impl MediaItem {
    pub fn new(name: String, media_type: MediaType, size: u64, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            media_type,
            size,
            thumbnail_url: url.clone(),
            url,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

// ============================================================================
// Platforms
// ============================================================================

/// Social platforms a post can be previewed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    LinkedIn,
    Threads,
    Mastodon,
}

impl Platform {
    /// Tab order
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Threads,
        Platform::Mastodon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::Threads => "threads",
            Self::Mastodon => "mastodon",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::Threads => "Threads",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Advertised character limit. Advisory only; nothing truncates or
    /// rejects content that exceeds it.
    pub fn char_limit(&self) -> usize {
        match self {
            Self::Twitter => 280,
            Self::LinkedIn => 3000,
            Self::Threads => 500,
            Self::Mastodon => 500,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::LinkedIn),
            "threads" => Ok(Self::Threads),
            "mastodon" => Ok(Self::Mastodon),
            _ => Err(format!(
                "Invalid platform: '{}'. Valid options: twitter, linkedin, threads, mastodon",
                s
            )),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An image attached to a platform post
///
/// Either a local file that has not been uploaded yet, or a URL that has
/// already been persisted. Consumers treat both the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAttachment {
    LocalFile(PathBuf),
    Url(String),
}

impl ImageAttachment {
    /// Short human-readable description (file name or URL)
    pub fn describe(&self) -> String {
        match self {
            Self::LocalFile(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Url(url) => url.clone(),
        }
    }
}
