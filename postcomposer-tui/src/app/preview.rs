//! Platform preview tabs
//!
//! The preview owns only the active tab, the read-only flag, and which
//! handlers its host wired. Post content lives in [`PlatformDrafts`], owned by
//! the composer page; the preview reports edits upward as [`PreviewEvent`]s.

use std::collections::{BTreeMap, BTreeSet};

use libpostcomposer::types::{ImageAttachment, Platform};

/// Content composed for one platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformPostContent {
    pub content: String,
    pub image: Option<ImageAttachment>,
}

/// Per-platform content owned by the composer page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDrafts {
    posts: BTreeMap<Platform, PlatformPostContent>,
}

impl Default for PlatformDrafts {
    fn default() -> Self {
        Self {
            posts: Platform::ALL
                .into_iter()
                .map(|platform| (platform, PlatformPostContent::default()))
                .collect(),
        }
    }
}

impl PlatformDrafts {
    pub fn get(&self, platform: Platform) -> &PlatformPostContent {
        // Every platform is populated at construction
        &self.posts[&platform]
    }

    pub fn set_content(&mut self, platform: Platform, content: String) {
        self.entry(platform).content = content;
    }

    pub fn set_image(&mut self, platform: Platform, image: Option<ImageAttachment>) {
        self.entry(platform).image = image;
    }

    /// Apply an event reported by the preview
    pub fn apply(&mut self, event: PreviewEvent) {
        match event {
            PreviewEvent::ContentChanged { platform, content } => {
                self.set_content(platform, content)
            }
            PreviewEvent::ImageChanged { platform, image } => self.set_image(platform, image),
        }
    }

    fn entry(&mut self, platform: Platform) -> &mut PlatformPostContent {
        self.posts.entry(platform).or_default()
    }
}

/// Change reported upward by the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// Full new text for the platform
    ContentChanged { platform: Platform, content: String },
    ImageChanged {
        platform: Platform,
        image: Option<ImageAttachment>,
    },
}

/// Author block shown above the post body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorPlaceholder {
    pub name: &'static str,
    pub handle: Option<&'static str>,
    pub subtitle: Option<&'static str>,
}

pub fn author_placeholder(platform: Platform) -> AuthorPlaceholder {
    match platform {
        Platform::Twitter | Platform::Threads => AuthorPlaceholder {
            name: "Your Name",
            handle: Some("@yourhandle"),
            subtitle: None,
        },
        Platform::LinkedIn => AuthorPlaceholder {
            name: "Your Name",
            handle: None,
            subtitle: Some("Your Title"),
        },
        Platform::Mastodon => AuthorPlaceholder {
            name: "Your Name",
            handle: Some("@yourhandle@mastodon.social"),
            subtitle: None,
        },
    }
}

pub fn body_placeholder(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => "What's happening?",
        Platform::LinkedIn => "What do you want to talk about?",
        Platform::Threads => "Start a thread...",
        Platform::Mastodon => "What's on your mind?",
    }
}

/// Informational limit label; the limit is never enforced
pub fn limit_label(platform: Platform) -> String {
    format!("{} characters", platform.char_limit())
}

/// Tabbed preview, one card per platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTabs {
    active_tab: Platform,
    read_only: bool,
    content_handlers: BTreeSet<Platform>,
    image_handlers: BTreeSet<Platform>,
}

impl Default for PreviewTabs {
    fn default() -> Self {
        Self {
            active_tab: Platform::Twitter,
            read_only: false,
            content_handlers: BTreeSet::new(),
            image_handlers: BTreeSet::new(),
        }
    }
}

impl PreviewTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preview wired with content and image handlers for every platform
    pub fn editable() -> Self {
        Platform::ALL.into_iter().fold(Self::new(), |tabs, platform| {
            tabs.with_content_handler(platform)
                .with_image_handler(platform)
        })
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_content_handler(mut self, platform: Platform) -> Self {
        self.content_handlers.insert(platform);
        self
    }

    pub fn with_image_handler(mut self, platform: Platform) -> Self {
        self.image_handlers.insert(platform);
        self
    }

    pub fn active_tab(&self) -> Platform {
        self.active_tab
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Change the active tab. Never touches any content.
    pub fn select_tab(&mut self, platform: Platform) {
        self.active_tab = platform;
    }

    pub fn has_content_handler(&self, platform: Platform) -> bool {
        self.content_handlers.contains(&platform)
    }

    pub fn has_image_handler(&self, platform: Platform) -> bool {
        self.image_handlers.contains(&platform)
    }

    /// Body renders as an editor rather than a static block
    pub fn is_editable(&self, platform: Platform) -> bool {
        !self.read_only && self.has_content_handler(platform)
    }

    /// Report a body edit on the active tab
    ///
    /// Returns `None` when the preview is read-only or no content handler is
    /// wired for the platform.
    pub fn edit_content(&self, content: String) -> Option<PreviewEvent> {
        let platform = self.active_tab;
        self.is_editable(platform)
            .then_some(PreviewEvent::ContentChanged { platform, content })
    }

    /// Report an image change on the active tab
    ///
    /// Read-only mode freezes the body text only; a wired image handler
    /// still receives changes.
    pub fn change_image(&self, image: Option<ImageAttachment>) -> Option<PreviewEvent> {
        let platform = self.active_tab;
        self.has_image_handler(platform)
            .then_some(PreviewEvent::ImageChanged { platform, image })
    }

    /// Image region is shown iff an image is present or a handler is wired
    pub fn shows_image_region(&self, platform: Platform, drafts: &PlatformDrafts) -> bool {
        drafts.get(platform).image.is_some() || self.has_image_handler(platform)
    }
}
