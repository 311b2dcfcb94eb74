//! Architectural Enforcement Tests
//!
//! This package contains integration tests that enforce architectural
//! principles of the workspace:
//! - The core crate stays headless (no UI framework dependencies)
//! - No blocking sleeps in production code
//!
//! These tests are designed to catch violations early in the development
//! cycle.

use std::path::PathBuf;

/// Workspace root, resolved relative to this package
pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}
