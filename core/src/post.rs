//! Blog Posts
//!
//! The finalized post model and the newest-first collection the store
//! persists across sessions. A draft becomes a [`BlogPost`] exactly once,
//! at finalization: the store synthesizes a fresh id and a human-readable
//! creation date, and the post's fields are never mutated afterwards.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::FormDraft;

/// Unique identifier for a published post
///
/// Opaque to callers; backed by a v4 UUID so collisions are negligible
/// across the lifetime of the collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate a fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finalized, immutable blog post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique id, generated at finalization
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Author name
    pub author: String,
    /// Category label, rendered as a chip by the views
    pub category: String,
    /// Short summary shown in the list view
    pub summary: String,
    /// Full post body
    pub content: String,
    /// Header image URL (usually the step-1 placeholder)
    pub image_url: String,
    /// Publication flag; present in the model, never exercised
    pub is_published: bool,
    /// Formatted creation date, assigned once and never recomputed
    pub created_at: String,
}

impl BlogPost {
    /// Finalize a draft into a post with a fresh id and today's date
    #[must_use]
    pub fn finalize(draft: &FormDraft) -> Self {
        Self {
            id: PostId::new(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            category: draft.category.clone(),
            summary: draft.summary.clone(),
            content: draft.content.clone(),
            image_url: draft.image_url.clone(),
            is_published: draft.is_published,
            created_at: format_long_date(Local::now().date_naive()),
        }
    }
}

/// Format a date as an en-US style long date, e.g. "August 5, 2026"
fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Newest-first collection of published posts
///
/// This is also the shape of the durable record: serializing the
/// collection yields `{ "posts": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostCollection {
    /// Posts, newest first
    posts: Vec<BlogPost>,
}

impl PostCollection {
    /// Empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post at the front (newest first)
    pub fn prepend(&mut self, post: BlogPost) {
        self.posts.insert(0, post);
    }

    /// Look up a post by id. A miss is a normal, expected outcome.
    #[must_use]
    pub fn find(&self, id: &PostId) -> Option<&BlogPost> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// All posts, newest first
    #[must_use]
    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Number of posts
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the collection has no posts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Field;

    #[test]
    fn test_post_ids_are_unique() {
        let a = PostId::new();
        let b = PostId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_finalize_copies_draft_fields() {
        let mut draft = FormDraft::default();
        draft.set(Field::Title, "Hello");
        draft.set(Field::Author, "Dana");
        draft.set(Field::Category, "Tech");
        draft.set(Field::Summary, "A short post");
        draft.set(Field::Content, "Body");
        draft.set(Field::ImageUrl, "https://example.com/cover.png");

        let post = BlogPost::finalize(&draft);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author, "Dana");
        assert_eq!(post.category, "Tech");
        assert_eq!(post.summary, "A short post");
        assert_eq!(post.content, "Body");
        assert_eq!(post.image_url, "https://example.com/cover.png");
        assert!(!post.is_published);
        assert!(!post.created_at.is_empty());
    }

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_long_date(date), "August 5, 2026");
        // Single-digit days are not zero-padded.
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_long_date(date), "January 9, 2024");
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut posts = PostCollection::new();
        let mut draft = FormDraft::default();

        draft.set(Field::Title, "first");
        posts.prepend(BlogPost::finalize(&draft));
        draft.set(Field::Title, "second");
        posts.prepend(BlogPost::finalize(&draft));

        assert_eq!(posts.len(), 2);
        assert_eq!(posts.all()[0].title, "second");
        assert_eq!(posts.all()[1].title, "first");
    }

    #[test]
    fn test_find_by_id() {
        let mut posts = PostCollection::new();
        let post = BlogPost::finalize(&FormDraft::default());
        let id = post.id.clone();
        posts.prepend(post);

        assert!(posts.find(&id).is_some());
        assert!(posts.find(&PostId::new()).is_none());
    }
}
