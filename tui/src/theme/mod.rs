//! Theme and Colors
//!
//! quill's ink-and-paper palette. Muted body text, a cool ink accent for
//! focus and headers, and the usual status colors.

use ratatui::style::Color;

// ============================================================================
// Ink Palette
// ============================================================================

/// Accent for titles, focused fields and the active step
pub const INK_ACCENT: Color = Color::Rgb(130, 170, 255);

/// Primary body text
pub const TEXT: Color = Color::Rgb(220, 220, 210);

/// Dim/system text (hints, placeholders, metadata)
pub const DIM_GRAY: Color = Color::Rgb(110, 110, 110);

/// Completed step marker in the progress header
pub const STEP_DONE: Color = Color::Rgb(160, 190, 240);

/// Pending step marker in the progress header
pub const STEP_PENDING: Color = Color::Rgb(80, 80, 80);

// ============================================================================
// Status Colors
// ============================================================================

/// Error red for validation messages
pub const ERROR_RED: Color = Color::Rgb(255, 95, 95);

/// Success green for the finalize toast
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 220, 120);

/// Warning amber for storage warnings
pub const WARNING_AMBER: Color = Color::Rgb(240, 190, 90);

// ============================================================================
// Category Chip
// ============================================================================

/// Category chip background
pub const CHIP_BG: Color = Color::Rgb(40, 70, 120);

/// Category chip foreground
pub const CHIP_FG: Color = Color::Rgb(190, 215, 255);
