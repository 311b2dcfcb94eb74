//! Headless-core enforcement
//!
//! The core crate must stay usable from any surface: no ratatui, no
//! crossterm, no terminal assumptions. These tests read the workspace
//! sources directly so a violation fails CI even if it would compile.

use std::fs;

use walkdir::WalkDir;

use architecture_tests::workspace_root;

/// UI crates that must never appear in the core manifest
const UI_CRATES: [&str; 2] = ["ratatui", "crossterm"];

#[test]
fn core_has_no_ui_dependencies() {
    let manifest_path = workspace_root().join("core").join("Cargo.toml");
    let manifest = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|e| panic!("read {}: {e}", manifest_path.display()));

    for ui_crate in UI_CRATES {
        assert!(
            !manifest.contains(ui_crate),
            "core/Cargo.toml must not depend on {ui_crate}"
        );
    }
}

#[test]
fn core_sources_do_not_import_ui_crates() {
    for entry in rust_sources("core/src") {
        let source = fs::read_to_string(&entry).unwrap();
        for ui_crate in UI_CRATES {
            assert!(
                !source.contains(&format!("use {ui_crate}")),
                "{} imports {ui_crate}",
                entry.display()
            );
        }
    }
}

#[test]
fn production_code_does_not_block_on_sleep() {
    for dir in ["core/src", "tui/src"] {
        for entry in rust_sources(dir) {
            let source = fs::read_to_string(&entry).unwrap();
            assert!(
                !source.contains("thread::sleep"),
                "{} calls thread::sleep; use tokio::time in async code",
                entry.display()
            );
        }
    }
}

fn rust_sources(dir: &str) -> Vec<std::path::PathBuf> {
    WalkDir::new(workspace_root().join(dir))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}
