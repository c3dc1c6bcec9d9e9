//! Application shell model
//!
//! Layout mode, mobile menu, navigation, identity badge, theme, and
//! notifications. The mobile menu holds a scroll lock on the shared
//! [`Document`] for exactly as long as it is open.

use std::cell::Cell;
use std::rc::Rc;

use libpostcomposer::config::DEFAULT_MOBILE_BREAKPOINT;
use libpostcomposer::identity::{Capability, Session};

/// Pixels per terminal column when mapping the terminal to a viewport width
pub const CELL_WIDTH_PX: u32 = 8;

/// Convert terminal columns to a viewport width in pixels
pub fn columns_to_px(columns: u16) -> u32 {
    u32::from(columns) * CELL_WIDTH_PX
}

/// Scroll behaviour of the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Visible,
    Scroll,
    Hidden,
}

/// Handle to the page body shared by every component that affects scrolling
///
/// Clones point at the same overflow value.
#[derive(Debug, Clone, Default)]
pub struct Document {
    overflow: Rc<Cell<Overflow>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    pub fn set_overflow(&self, overflow: Overflow) {
        self.overflow.set(overflow);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.overflow() == Overflow::Hidden
    }

    /// Hide overflow until the returned guard is dropped
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        let previous = self.overflow.replace(Overflow::Hidden);
        ScrollLockGuard {
            document: self.clone(),
            previous,
        }
    }
}

/// Restores the overflow that was in effect before the lock when dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    document: Document,
    previous: Overflow,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.document.set_overflow(self.previous);
    }
}

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    ComposerLibrary,
    Workspace,
    Templates,
    ImageLibrary,
    Approvals,
    Schedule,
    Analytics,
    Settings,
    Documentation,
}

impl Page {
    /// Every navigation link, in sidebar order
    pub const ALL: [Page; 9] = [
        Page::ComposerLibrary,
        Page::Workspace,
        Page::Templates,
        Page::ImageLibrary,
        Page::Approvals,
        Page::Schedule,
        Page::Analytics,
        Page::Settings,
        Page::Documentation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::ComposerLibrary => "Composer Library",
            Page::Workspace => "Workspace",
            Page::Templates => "Templates",
            Page::ImageLibrary => "Image Library",
            Page::Approvals => "Approvals",
            Page::Schedule => "Schedule",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
            Page::Documentation => "Documentation",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::ComposerLibrary => "/composer-library",
            Page::Workspace => "/workspace",
            Page::Templates => "/templates",
            Page::ImageLibrary => "/media",
            Page::Approvals => "/dashboard/approvals",
            Page::Schedule => "/schedule",
            Page::Analytics => "/analytics",
            Page::Settings => "/settings",
            Page::Documentation => "/documentation",
        }
    }

    pub fn requires(&self) -> Option<Capability> {
        match self {
            Page::Approvals => Some(Capability::ApprovePosts),
            _ => None,
        }
    }

    /// Whether the link is shown for this session
    pub fn is_visible(&self, session: &Session) -> bool {
        self.requires()
            .map_or(true, |capability| session.can(capability))
    }
}

/// Links shown for the session, in order
pub fn nav_links(session: &Session) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| page.is_visible(session))
        .collect()
}

/// Links in the mobile bottom navigation bar
pub const BOTTOM_NAV: [Page; 4] = [
    Page::ComposerLibrary,
    Page::ImageLibrary,
    Page::Schedule,
    Page::Settings,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub read: bool,
}

/// Notification affordance: an unread count and a panel
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    pub panel_open: bool,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(Notification {
            message: message.into(),
            read: false,
        });
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Opening the panel marks everything read
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            for item in &mut self.items {
                item.read = true;
            }
        }
    }
}

/// What the identity badge shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityBadge {
    /// Session not resolved yet; render placeholder blocks
    Loading,
    SignedOut,
    SignedIn {
        display_name: String,
        initial: Option<char>,
        plan_label: String,
    },
}

impl IdentityBadge {
    pub fn from_session(session: &Session) -> Self {
        if !session.is_loaded {
            return IdentityBadge::Loading;
        }

        match session.current_user() {
            Some(user) => IdentityBadge::SignedIn {
                display_name: user.display_name().unwrap_or_default().to_string(),
                initial: user.initial(),
                plan_label: format!("{} plan", user.plan),
            },
            None => IdentityBadge::SignedOut,
        }
    }
}

/// Shell state wrapping every page
#[derive(Debug)]
pub struct ShellState {
    document: Document,
    scroll_lock: Option<ScrollLockGuard>,
    viewport_width_px: u32,
    mobile_breakpoint: u32,
    pub current_page: Page,
    pub theme: Theme,
    pub notifications: Notifications,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Document::new(), u32::from(DEFAULT_MOBILE_BREAKPOINT))
    }
}

impl ShellState {
    pub fn new(document: Document, mobile_breakpoint: u32) -> Self {
        Self {
            document,
            scroll_lock: None,
            viewport_width_px: 0,
            mobile_breakpoint,
            current_page: Page::ComposerLibrary,
            theme: Theme::default(),
            notifications: Notifications::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport_width_px(&self) -> u32 {
        self.viewport_width_px
    }

    pub fn mobile_breakpoint(&self) -> u32 {
        self.mobile_breakpoint
    }

    /// Recompute layout mode for a new viewport width
    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.viewport_width_px = width_px;
    }

    pub fn resize_columns(&mut self, columns: u16) {
        self.set_viewport_width(columns_to_px(columns));
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width_px < self.mobile_breakpoint
    }

    pub fn is_menu_open(&self) -> bool {
        self.scroll_lock.is_some()
    }

    pub fn open_mobile_menu(&mut self) {
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(self.document.lock_scroll());
        }
    }

    pub fn close_mobile_menu(&mut self) {
        self.scroll_lock = None;
    }

    pub fn toggle_mobile_menu(&mut self) {
        if self.is_menu_open() {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu();
        }
    }

    /// Switch page; any open mobile menu is dismissed
    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
        self.close_mobile_menu();
    }

    /// Follow a link from the mobile menu
    pub fn select_mobile_link(&mut self, page: Page) {
        self.navigate(page);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
