//! Form Draft
//!
//! The single in-progress post being authored. Exactly one draft exists at
//! a time; it is owned by the store, initialized to all-default values on
//! store creation and after every successful finalize, and mutated
//! field-by-field by the step surfaces.
//!
//! The draft is never persisted - it always starts fresh on process start.

use serde::{Deserialize, Serialize};

/// Addressable text fields of the draft
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Post title (step 1)
    Title,
    /// Author name (step 1)
    Author,
    /// Category label (step 2)
    Category,
    /// Short summary (step 2)
    Summary,
    /// Full post body (step 3)
    Content,
    /// Header image URL (auto-assigned on step 1 completion)
    ImageUrl,
}

impl Field {
    /// Stable lowercase name, matching the persisted post field names
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Category => "category",
            Self::Summary => "summary",
            Self::Content => "content",
            Self::ImageUrl => "image_url",
        }
    }

    /// Human-readable label for form rendering
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Blog Title",
            Self::Author => "Author Name",
            Self::Category => "Blog Category",
            Self::Summary => "Blog Summary",
            Self::Content => "Blog Content",
            Self::ImageUrl => "Image URL",
        }
    }
}

/// The in-progress post being authored
///
/// Same field set as a finalized post minus the id and creation date,
/// which are synthesized at finalization time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Post title
    pub title: String,
    /// Author name
    pub author: String,
    /// Category label
    pub category: String,
    /// Short summary
    pub summary: String,
    /// Full post body
    pub content: String,
    /// Header image URL
    pub image_url: String,
    /// Publication flag; carried in the model but never set by the wizard
    pub is_published: bool,
}

impl FormDraft {
    /// Write one text field. Always succeeds; validation is step-gated,
    /// not field-gated.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Category => self.category = value,
            Field::Summary => self.summary = value,
            Field::Content => self.content = value,
            Field::ImageUrl => self.image_url = value,
        }
    }

    /// Read one field as text ("" when unset)
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Category => &self.category,
            Field::Summary => &self.summary,
            Field::Content => &self.content,
            Field::ImageUrl => &self.image_url,
        }
    }

    /// Reset every field to its default value
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
