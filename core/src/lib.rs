//! Quill Core - Headless Blog Authoring for quill
//!
//! This crate provides the wizard store for quill, completely independent
//! of any UI framework. It can drive a TUI, web UI, native GUI, or run
//! headless for testing and scripting.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       UI Surfaces                           │
//! │   ┌─────────┐   ┌─────────┐   ┌────────────────────────┐   │
//! │   │   TUI   │   │  WebUI  │   │   Headless / Tests     │   │
//! │   │(ratatui)│   │         │   │                        │   │
//! │   └────┬────┘   └────┬────┘   └───────────┬────────────┘   │
//! │        └─────────────┴────────────────────┘                │
//! │                       │                                     │
//! │            store operations (down)                          │
//! │               StoreUpdate (up)                              │
//! └───────────────────────┼─────────────────────────────────────┘
//!                         │
//! ┌───────────────────────┼─────────────────────────────────────┐
//! │                  WIZARD STORE                                │
//! │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐   │
//! │   │  Form    │  │   Step   │  │   Post   │  │  Storage  │   │
//! │   │  Draft   │  │ Control  │  │Collection│  │  (port)   │   │
//! │   └──────────┘  └──────────┘  └──────────┘  └───────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`WizardStore`]: the process-wide state object; the single writer
//! - [`FormDraft`] / [`Field`]: the in-progress post and its addressable fields
//! - [`WizardStep`]: the four ordered wizard stages
//! - [`ValidationSchema`]: per-step validation producing failures as data
//! - [`BlogPost`] / [`PostCollection`]: finalized posts, newest first
//! - [`PostStorage`]: the durable persistence port
//! - [`StoreUpdate`]: notifications to subscribed surfaces
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill_core::{Field, JsonFileStorage, StepAdvance, StoreConfig, WizardStore};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StoreConfig::load();
//!     let storage = Arc::new(JsonFileStorage::new(config.storage_path()));
//!     let (tx, mut rx) = mpsc::unbounded_channel();
//!
//!     let mut store = WizardStore::new(storage, tx);
//!     store.hydrate().await;
//!
//!     store.set_field(Field::Title, "Hello");
//!     store.set_field(Field::Author, "Dana");
//!     match store.next_step() {
//!         StepAdvance::Advanced(step) => { /* render the next step */ }
//!         StepAdvance::Rejected(errors) => { /* render inline errors */ }
//!     }
//! }
//! ```
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure state and persistence logic that can be used
//! anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod draft;
pub mod post;
pub mod steps;
pub mod storage;
pub mod store;
pub mod updates;
pub mod validation;

pub use config::{default_config_path, default_data_dir, ConfigError, QuillToml, StoreConfig};
pub use draft::{Field, FormDraft};
pub use post::{BlogPost, PostCollection, PostId};
pub use steps::WizardStep;
pub use storage::{JsonFileStorage, MemoryStorage, PostStorage, StorageError, STORAGE_FILE};
pub use store::{StepAdvance, WizardStore};
pub use updates::StoreUpdate;
pub use validation::{FieldRule, ValidationErrors, ValidationSchema, MIN_CONTENT_LEN};
