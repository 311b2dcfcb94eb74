//! Widgets
//!
//! Reusable rendering pieces: editable text fields for the wizard forms
//! and a scrollable content region for long post bodies.

pub mod content;
pub mod text_field;

pub use content::{ContentView, ContentViewState};
pub use text_field::{cursor_lines, TextCursor, TextField};
