//! Views
//!
//! The three views of the app: the post list, the post detail page, and
//! the creation wizard. Views are pure
//! renderers over store state plus a small per-view UI state (selection,
//! scroll, form focus) owned by the app.

pub mod detail;
pub mod list;
pub mod wizard;
