//! Post Storage
//!
//! Durable persistence for the published-post collection. Only the posts
//! slice of store state is persisted - the draft and the current step are
//! session-only and always start fresh.
//!
//! # Design Philosophy
//!
//! Storage is a port: the store talks to a [`PostStorage`] trait object,
//! so the application injects a JSON-file implementation while tests and
//! headless embedders inject [`MemoryStorage`]. The store treats every
//! storage failure as non-fatal; the in-memory collection stays
//! authoritative for the session.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::post::PostCollection;

/// File name of the durable record - the fixed storage identifier
pub const STORAGE_FILE: &str = "blog-store.json";

/// Errors from loading or saving the durable record
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The record could not be encoded or decoded
    #[error("invalid storage record: {0}")]
    Serde(#[from] serde_json::Error),

    /// Fault injected by a test double
    #[error("storage fault: {0}")]
    Fault(String),
}

/// Port for durable post persistence
#[async_trait]
pub trait PostStorage: Send + Sync {
    /// Load the persisted collection; `None` when no record exists yet
    async fn load(&self) -> Result<Option<PostCollection>, StorageError>;

    /// Replace the persisted collection
    async fn save(&self, posts: &PostCollection) -> Result<(), StorageError>;
}

/// JSON-file storage for the post collection
///
/// The record is pretty-printed JSON of the shape `{ "posts": [...] }`.
/// Parent directories are created on first save.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the durable record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStorage for JsonFileStorage {
    async fn load(&self) -> Result<Option<PostCollection>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, posts: &PostCollection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(posts)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

/// In-memory storage for tests and headless embedding
///
/// Supports fault injection so callers can exercise the non-fatal failure
/// paths without touching the filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    record: Mutex<Option<PostCollection>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    /// Empty storage with no record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with an existing collection
    #[must_use]
    pub fn with_record(posts: PostCollection) -> Self {
        Self {
            record: Mutex::new(Some(posts)),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<PostCollection>, StorageError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Fault("load failure injected".to_string()));
        }
        Ok(self.record.lock().await.clone())
    }

    async fn save(&self, posts: &PostCollection) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Fault("save failure injected".to_string()));
        }
        *self.record.lock().await = Some(posts.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{Field, FormDraft};
    use crate::post::BlogPost;
    use pretty_assertions::assert_eq;

    fn sample_posts() -> PostCollection {
        let mut draft = FormDraft::default();
        draft.set(Field::Title, "Grüße aus Köln");
        draft.set(Field::Author, "Dana");
        draft.set(Field::Category, "Travel");
        draft.set(Field::Summary, "Ein kurzer Beitrag — with unicode");
        draft.set(
            Field::Content,
            "First paragraph.\n\nSecond paragraph with emoji 🦀 and accents: café, naïve.",
        );
        let mut posts = PostCollection::new();
        posts.prepend(BlogPost::finalize(&draft));
        posts
    }

    #[tokio::test]
    async fn test_file_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join(STORAGE_FILE));

        let posts = sample_posts();
        storage.save(&posts).await.unwrap();
        let restored = storage.load().await.unwrap().unwrap();
        assert_eq!(restored, posts);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE));
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        tokio::fs::write(&path, "not json").await.unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(
            storage.load().await,
            Err(StorageError::Serde(_))
        ));
    }

    #[tokio::test]
    async fn test_record_shape_has_posts_key() {
        let raw = serde_json::to_string(&sample_posts()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("posts").is_some());
        assert!(value["posts"].is_array());
    }

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.unwrap().is_none());

        let posts = sample_posts();
        storage.save(&posts).await.unwrap();
        assert_eq!(storage.load().await.unwrap().unwrap(), posts);
    }

    #[tokio::test]
    async fn test_memory_storage_fault_injection() {
        let storage = MemoryStorage::new();
        storage.fail_saves(true);
        assert!(storage.save(&PostCollection::new()).await.is_err());

        storage.fail_saves(false);
        storage.fail_loads(true);
        assert!(storage.load().await.is_err());
    }
}
