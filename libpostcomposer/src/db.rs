//! Database operations for PostComposer

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;

use crate::error::{DbError, Result};
use crate::types::{MediaItem, MediaType, User};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    pub async fn new(db_path: &str) -> Result<Self> {
        // Expand path and create parent directories
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DbError::IoError)?;
        }

        // Forward slashes work for SQLite URLs on both Windows and Unix;
        // mode=rwc creates the file if it doesn't exist
        let db_url = format!("sqlite://{}?mode=rwc", expanded_path.replace('\\', "/"));

        let pool = SqlitePool::connect(&db_url)
            .await
            .map_err(DbError::SqlxError)?;

        Self::from_pool(pool).await
    }

    /// Create a private in-memory database
    ///
    /// The pool is limited to a single connection because every SQLite
    /// in-memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(DbError::SqlxError)?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(DbError::MigrationError)?;

        Ok(Self { pool })
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Insert a user record
    pub async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, username, clerk_id, profile_image, bio, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.clerk_id)
        .bind(&user.profile_image)
        .bind(&user.bio)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(())
    }

    /// List every user in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, name, username, clerk_id, profile_image, bio, created_at
            FROM users
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Find a user by email (exact match)
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, username, clerk_id, profile_image, bio, created_at
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(row.as_ref().map(user_from_row))
    }

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------

    /// Insert a media item
    pub async fn create_media(&self, item: &MediaItem) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO media (id, name, media_type, size, url, thumbnail_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.media_type.as_str())
        .bind(item.size as i64)
        .bind(&item.url)
        .bind(&item.thumbnail_url)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(())
    }

    /// List every media item, oldest first
    pub async fn list_media(&self) -> Result<Vec<MediaItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, media_type, size, url, thumbnail_url, created_at
            FROM media
            ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(rows.iter().map(media_from_row).collect())
    }
}

fn user_from_row(r: &SqliteRow) -> User {
    User {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        username: r.get("username"),
        clerk_id: r.get("clerk_id"),
        profile_image: r.get("profile_image"),
        bio: r.get("bio"),
        created_at: r.get("created_at"),
    }
}

fn media_from_row(r: &SqliteRow) -> MediaItem {
    MediaItem {
        id: r.get("id"),
        name: r.get("name"),
        // The CHECK constraint only admits 'image' and 'video'
        media_type: match r.get::<String, _>("media_type").as_str() {
            "video" => MediaType::Video,
            _ => MediaType::Image,
        },
        size: r.get::<i64, _>("size").max(0) as u64,
        url: r.get("url"),
        thumbnail_url: r.get("thumbnail_url"),
        created_at: r.get("created_at"),
    }
}
