//! Media library view state
//!
//! Query, filter tab, cursor, and uploader prompt for one view over the
//! shared [`MediaCatalog`]. The image library page and the composer's media
//! picker each hold their own view.

use libpostcomposer::service::media::MediaCatalog;
use libpostcomposer::{MediaFilter, MediaItem};

/// Cards per grid row
pub fn grid_columns(is_mobile: bool) -> usize {
    if is_mobile {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaLibraryView {
    pub query: String,
    pub filter: MediaFilter,
    pub cursor: usize,
    /// File path being typed into the uploader, when it is open
    pub upload_prompt: Option<String>,
}

impl MediaLibraryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed<'a>(&self, catalog: &'a MediaCatalog) -> Vec<&'a MediaItem> {
        catalog.displayed(&self.query, self.filter)
    }

    /// Item under the cursor
    pub fn highlighted<'a>(&self, catalog: &'a MediaCatalog) -> Option<&'a MediaItem> {
        self.displayed(catalog).get(self.cursor).copied()
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.cursor = 0;
    }

    /// Move the cursor, staying inside the displayed set
    pub fn move_cursor(&mut self, delta: isize, catalog: &MediaCatalog) {
        let len = self.displayed(catalog).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_prompt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libpostcomposer::MediaType;

    fn catalog() -> MediaCatalog {
        let item = |id: &str, name: &str, media_type| MediaItem {
            id: id.to_string(),
            name: name.to_string(),
            media_type,
            size: 10,
            url: format!("https://cdn.example.com/{}", name),
            thumbnail_url: String::new(),
            created_at: 0,
        };
        MediaCatalog::new(vec![
            item("1", "cat.png", MediaType::Image),
            item("2", "dog.mp4", MediaType::Video),
            item("3", "catwalk.mov", MediaType::Video),
        ])
    }

    #[test]
    fn test_typing_resets_cursor() {
        let catalog = catalog();
        let mut view = MediaLibraryView::new();
        view.move_cursor(2, &catalog);
        assert_eq!(view.cursor, 2);

        view.push_query('c');
        assert_eq!(view.cursor, 0);
        assert_eq!(view.displayed(&catalog).len(), 2);
    }

    #[test]
    fn test_cursor_clamps_to_displayed() {
        let catalog = catalog();
        let mut view = MediaLibraryView::new();
        view.move_cursor(10, &catalog);
        assert_eq!(view.cursor, 2);
        view.move_cursor(-10, &catalog);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_highlighted_follows_filter() {
        let catalog = catalog();
        let mut view = MediaLibraryView::new();
        view.cycle_filter();
        view.cycle_filter();
        assert_eq!(view.filter, MediaFilter::Video);
        assert_eq!(view.highlighted(&catalog).unwrap().id, "2");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(true), 2);
        assert_eq!(grid_columns(false), 3);
    }
}
