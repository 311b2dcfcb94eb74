//! Store Client
//!
//! Thin wrapper around the wizard store for TUI integration. The store is
//! embedded directly (no IPC) and the client holds both halves of the
//! subscribe/mutate contract: the store itself for operations, and the
//! receiver for the updates the store emits.
//!
//! The TUI holds no business logic. Validation, step gating, finalization
//! and persistence all happen inside the store; the client's job is to
//! wire it to the configured storage and expose the update stream.

use std::sync::Arc;

use tokio::sync::mpsc;

use quill_core::{JsonFileStorage, PostStorage, StoreConfig, StoreUpdate, WizardStore};

/// Client owning the embedded wizard store
pub struct StoreClient {
    /// The embedded store instance
    store: WizardStore,
    /// Receiver for updates emitted by the store
    rx: mpsc::UnboundedReceiver<StoreUpdate>,
}

impl StoreClient {
    /// Client over the configured JSON-file storage
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::load())
    }

    /// Client over JSON-file storage resolved from an explicit config
    pub fn with_config(config: &StoreConfig) -> Self {
        let path = config.storage_path();
        tracing::debug!(path = %path.display(), "Opening post storage");
        Self::with_storage(Arc::new(JsonFileStorage::new(path)))
    }

    /// Client over an arbitrary storage port (tests, headless use)
    pub fn with_storage(storage: Arc<dyn PostStorage>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store: WizardStore::new(storage, tx),
            rx,
        }
    }

    /// Load persisted posts into the store
    pub async fn hydrate(&mut self) {
        self.store.hydrate().await;
    }

    /// Read access to the store
    pub fn store(&self) -> &WizardStore {
        &self.store
    }

    /// Mutating access to the store's operations
    pub fn store_mut(&mut self) -> &mut WizardStore {
        &mut self.store
    }

    /// Next pending update, if any
    pub fn try_update(&mut self) -> Option<StoreUpdate> {
        self.rx.try_recv().ok()
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Field, MemoryStorage};

    #[tokio::test]
    async fn test_updates_flow_through_client() {
        let mut client = StoreClient::with_storage(Arc::new(MemoryStorage::new()));
        client.hydrate().await;
        assert!(matches!(
            client.try_update(),
            Some(StoreUpdate::HydrationComplete { post_count: 0 })
        ));

        client.store_mut().set_field(Field::Title, "Hello");
        assert!(matches!(
            client.try_update(),
            Some(StoreUpdate::DraftChanged {
                field: Field::Title
            })
        ));
        assert!(client.try_update().is_none());
    }
}
