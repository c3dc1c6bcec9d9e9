//! Media library service and catalog
//!
//! `MediaService` persists media items. `MediaCatalog` is the in-memory
//! collection shared by every page that shows media: it answers search and
//! type-filter queries and holds the single active selection.

use std::path::Path;
use std::sync::Arc;

use crate::error::{ComposerError, DbError};
use crate::types::{MediaFilter, MediaItem, MediaType};
use crate::{Database, Result};

/// Placeholder shown when a query/filter combination matches nothing
pub const EMPTY_PLACEHOLDER: &str = "No media items found";

/// Persistence for media items
#[derive(Clone)]
pub struct MediaService {
    db: Arc<Database>,
}

impl MediaService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Load every stored media item, oldest first
    pub async fn list_media(&self) -> Result<Vec<MediaItem>> {
        self.db.list_media().await
    }

    /// Load the catalog from the store
    pub async fn load_catalog(&self) -> Result<MediaCatalog> {
        Ok(MediaCatalog::new(self.list_media().await?))
    }

    /// Store an already-described media item
    pub async fn add(&self, item: MediaItem) -> Result<MediaItem> {
        self.db.create_media(&item).await?;
        tracing::info!(media_id = %item.id, name = %item.name, "Added media item");
        Ok(item)
    }

    /// Register a local file in the media library
    ///
    /// The type is inferred from the extension and the URL points at the
    /// file itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for directories and unsupported extensions, and
    /// an IO error when the file cannot be read.
    pub async fn import_file(&self, path: &Path) -> Result<MediaItem> {
        let metadata = tokio::fs::metadata(path).await.map_err(DbError::IoError)?;
        if !metadata.is_file() {
            return Err(ComposerError::InvalidInput(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaType::from_extension)
            .ok_or_else(|| {
                ComposerError::InvalidInput(format!(
                    "Unsupported media file: {}",
                    path.display()
                ))
            })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let absolute = tokio::fs::canonicalize(path)
            .await
            .map_err(DbError::IoError)?;
        let url = format!("file://{}", absolute.display());

        self.add(MediaItem::new(name, media_type, metadata.len(), url))
            .await
    }
}

/// In-memory media collection with search, filter, and single selection
#[derive(Debug, Clone, Default)]
pub struct MediaCatalog {
    items: Vec<MediaItem>,
    selected: Option<String>,
}

impl MediaCatalog {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a newly created item
    pub fn insert(&mut self, item: MediaItem) {
        self.items.push(item);
    }

    /// Items whose name contains `query`, case-insensitively, in catalog order
    pub fn search_media(&self, query: &str) -> Vec<&MediaItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Items matching the type filter; everything for `MediaFilter::All`
    pub fn filter_by_type(&self, filter: MediaFilter) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.media_type))
            .collect()
    }

    /// The set the library displays for a query and filter
    ///
    /// Two separate paths: a non-empty query yields the search results
    /// post-filtered by type, an empty query yields the type filter alone.
    /// Both must stay as they are.
    pub fn displayed(&self, query: &str, filter: MediaFilter) -> Vec<&MediaItem> {
        if query.is_empty() {
            self.filter_by_type(filter)
        } else {
            self.search_media(query)
                .into_iter()
                .filter(|item| filter.matches(item.media_type))
                .collect()
        }
    }

    /// Record `id` as the current selection
    pub fn select_media(&mut self, id: &str) {
        if self.get(id).is_none() {
            tracing::debug!(media_id = %id, "Selecting media id that is not in the catalog");
        }
        self.selected = Some(id.to_string());
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&MediaItem> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Handle a click on a media card
    ///
    /// A page-level `on_select` callback receives the item instead of the
    /// shared selection being updated. Without one, the item becomes the
    /// shared selection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not in the catalog.
    pub fn activate(
        &mut self,
        id: &str,
        on_select: Option<&mut dyn FnMut(&MediaItem)>,
    ) -> Result<()> {
        let item = self
            .get(id)
            .ok_or_else(|| ComposerError::NotFound(format!("media item {}", id)))?;

        match on_select {
            Some(callback) => callback(item),
            None => self.select_media(id),
        }

        Ok(())
    }
}

/// Human-readable file size using 1024-based units
///
/// Two decimals at most, trailing zeros trimmed: `0 Bytes`, `512 Bytes`,
/// `1.5 KB`, `2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn item(id: &str, name: &str, media_type: MediaType) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            name: name.to_string(),
            media_type,
            size: 1024,
            url: format!("https://cdn.example.com/{}", name),
            thumbnail_url: format!("https://cdn.example.com/thumbs/{}", name),
            created_at: 0,
        }
    }

    fn fixture() -> MediaCatalog {
        MediaCatalog::new(vec![
            item("1", "Beach Sunset.jpg", MediaType::Image),
            item("2", "beach-drone.mp4", MediaType::Video),
            item("3", "Office.png", MediaType::Image),
            item("4", "Launch Teaser.mov", MediaType::Video),
        ])
    }

    fn ids(items: Vec<&MediaItem>) -> Vec<&str> {
        items.into_iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = fixture();
        assert_eq!(ids(catalog.search_media("BEACH")), vec!["1", "2"]);
        assert_eq!(ids(catalog.search_media("teas")), vec!["4"]);
        assert!(catalog.search_media("nothing").is_empty());
    }

    #[test]
    fn test_filter_by_type() {
        let catalog = fixture();
        assert_eq!(ids(catalog.filter_by_type(MediaFilter::All)), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(catalog.filter_by_type(MediaFilter::Image)), vec!["1", "3"]);
        assert_eq!(ids(catalog.filter_by_type(MediaFilter::Video)), vec!["2", "4"]);
    }

    #[test]
    fn test_displayed_with_query_post_filters_search() {
        let catalog = fixture();
        assert_eq!(ids(catalog.displayed("beach", MediaFilter::All)), vec!["1", "2"]);
        assert_eq!(ids(catalog.displayed("beach", MediaFilter::Video)), vec!["2"]);
        assert_eq!(ids(catalog.displayed("office", MediaFilter::Video)), Vec::<&str>::new());
    }

    #[test]
    fn test_displayed_without_query_is_type_filter_only() {
        let catalog = fixture();
        for filter in MediaFilter::ALL {
            assert_eq!(
                ids(catalog.displayed("", filter)),
                ids(catalog.filter_by_type(filter))
            );
        }
    }

    #[test]
    fn test_whitespace_query_is_a_real_search() {
        let catalog = fixture();
        // " " is non-empty, so it takes the search path and matches names with spaces
        assert_eq!(ids(catalog.displayed(" ", MediaFilter::All)), vec!["1", "4"]);
    }

    #[test]
    fn test_select_media_replaces_selection() {
        let mut catalog = fixture();
        catalog.select_media("1");
        catalog.select_media("3");
        assert_eq!(catalog.selected_id(), Some("3"));
        assert_eq!(catalog.selected().unwrap().name, "Office.png");
    }

    #[test]
    fn test_activate_with_callback_leaves_selection() {
        let mut catalog = fixture();
        catalog.select_media("1");

        let mut picked = Vec::new();
        let mut on_select = |item: &MediaItem| picked.push(item.id.clone());
        catalog.activate("2", Some(&mut on_select)).unwrap();

        assert_eq!(picked, vec!["2"]);
        assert_eq!(catalog.selected_id(), Some("1"));
    }

    #[test]
    fn test_activate_without_callback_selects() {
        let mut catalog = fixture();
        catalog.activate("4", None).unwrap();
        assert_eq!(catalog.selected_id(), Some("4"));
    }

    #[test]
    fn test_activate_unknown_id() {
        let mut catalog = fixture();
        let result = catalog.activate("missing", None);
        assert!(matches!(result, Err(ComposerError::NotFound(_))));
        assert!(catalog.selected_id().is_none());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[tokio::test]
    async fn test_import_file_infers_type_and_size() {
        let service = MediaService::new(Arc::new(Database::in_memory().await.unwrap()));
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clip.MP4");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let item = service.import_file(&path).await.unwrap();
        assert_eq!(item.name, "clip.MP4");
        assert_eq!(item.media_type, MediaType::Video);
        assert_eq!(item.size, 2048);
        assert!(item.url.starts_with("file://"));

        let catalog = service.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_import_file_rejects_unknown_extension() {
        let service = MediaService::new(Arc::new(Database::in_memory().await.unwrap()));
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        assert!(matches!(
            service.import_file(&path).await,
            Err(ComposerError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_import_directory_is_rejected() {
        let service = MediaService::new(Arc::new(Database::in_memory().await.unwrap()));
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            service.import_file(temp_dir.path()).await,
            Err(ComposerError::InvalidInput(_))
        ));
    }
}
