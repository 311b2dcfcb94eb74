//! Wizard Store
//!
//! The process-wide state object composing the form draft, the step
//! controller, and the published-post collection. The store exclusively
//! owns all three: surfaces read through accessors and mutate through the
//! operations below, and every mutation emits a [`StoreUpdate`] on the
//! subscription channel handed in at construction.
//!
//! # Design Philosophy
//!
//! Mutations are synchronous and single-writer: each one runs to completion
//! inside the surface event that invoked it, so no two mutations ever
//! interleave. The only suspension points are [`WizardStore::hydrate`] at
//! startup and the best-effort save inside [`WizardStore::add_post`].
//! Persistence failures never fail an operation - the in-memory state
//! stays authoritative for the session and a warning is surfaced instead.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::draft::{Field, FormDraft};
use crate::post::{BlogPost, PostCollection, PostId};
use crate::steps::WizardStep;
use crate::storage::PostStorage;
use crate::updates::StoreUpdate;
use crate::validation::{ValidationErrors, ValidationSchema};

/// Outcome of a gated advance
#[derive(Clone, Debug, PartialEq)]
pub enum StepAdvance {
    /// The active step's schema was clean; the wizard moved to this step
    Advanced(WizardStep),
    /// The schema failed; the step is unchanged and the failures are data
    Rejected(ValidationErrors),
}

/// The process-wide wizard store
pub struct WizardStore {
    /// Published posts, newest first - the only durably persisted slice
    posts: PostCollection,
    /// The single in-flight draft
    draft: FormDraft,
    /// Current wizard step
    step: WizardStep,
    /// Whether hydration has completed; false only at cold start
    hydrated: bool,
    /// Durable storage port
    storage: Arc<dyn PostStorage>,
    /// Subscription channel to the surface
    tx: mpsc::UnboundedSender<StoreUpdate>,
}

impl WizardStore {
    /// Create a store over the given storage port.
    ///
    /// The draft starts all-empty and the wizard at step 1. Call
    /// [`hydrate`](Self::hydrate) once before treating the collection as
    /// authoritative.
    pub fn new(storage: Arc<dyn PostStorage>, tx: mpsc::UnboundedSender<StoreUpdate>) -> Self {
        Self {
            posts: PostCollection::new(),
            draft: FormDraft::default(),
            step: WizardStep::default(),
            hydrated: false,
            storage,
            tx,
        }
    }

    /// Load the persisted collection.
    ///
    /// A read failure is non-fatal: the store logs a warning, surfaces a
    /// [`StoreUpdate::StorageWarning`], and proceeds with an empty
    /// collection. Either way the store is marked hydrated afterwards -
    /// there is no retry.
    pub async fn hydrate(&mut self) {
        match self.storage.load().await {
            Ok(Some(posts)) => self.posts = posts,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to load persisted posts: {e}");
                self.send(StoreUpdate::StorageWarning {
                    detail: e.to_string(),
                });
            }
        }
        self.hydrated = true;
        tracing::debug!(posts = self.posts.len(), "Hydration complete");
        self.send(StoreUpdate::HydrationComplete {
            post_count: self.posts.len(),
        });
    }

    /// Whether hydration has completed. Consumers must not read the
    /// collection as authoritative until this is true.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// The published posts, newest first
    #[must_use]
    pub fn posts(&self) -> &PostCollection {
        &self.posts
    }

    /// Look up a post by id. A miss is a normal, expected outcome.
    #[must_use]
    pub fn post(&self, id: &PostId) -> Option<&BlogPost> {
        self.posts.find(id)
    }

    /// The in-flight draft
    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// The current wizard step
    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Write one draft field. Always succeeds; validation is step-gated,
    /// not field-gated.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.send(StoreUpdate::DraftChanged { field });
    }

    /// Validate the active step's schema and advance when it is clean.
    ///
    /// On failure the step is unchanged and the failures are returned as
    /// data. On success from step 1, a freshly seeded placeholder image is
    /// written to the draft before advancing; each pass reassigns a new
    /// one. Advancing from review is a no-op.
    pub fn next_step(&mut self) -> StepAdvance {
        let errors = ValidationSchema::for_step(self.step).validate(&self.draft);
        if !errors.is_empty() {
            tracing::debug!(step = self.step.number(), failures = errors.len(), "Advance rejected");
            self.send(StoreUpdate::ValidationFailed {
                step: self.step,
                errors: errors.clone(),
            });
            return StepAdvance::Rejected(errors);
        }

        if self.step == WizardStep::Metadata {
            self.set_field(Field::ImageUrl, placeholder_image_url());
        }

        self.set_step(self.step.next());
        StepAdvance::Advanced(self.step)
    }

    /// Move back one step. Never validated; saturates at step 1.
    pub fn prev_step(&mut self) -> WizardStep {
        self.set_step(self.step.prev());
        self.step
    }

    /// Jump directly to a 1-based step number, clamped to [1, 4]
    pub fn go_to_step(&mut self, number: u8) -> WizardStep {
        self.set_step(WizardStep::from_number(number));
        self.step
    }

    /// Finalize the draft into a new post and prepend it.
    ///
    /// Synthesizes a fresh id and today's formatted date, then persists
    /// the collection best-effort. Does not re-validate the draft: the
    /// review surface is trusted to have passed steps 1-3's gates.
    pub async fn add_post(&mut self) -> PostId {
        let post = BlogPost::finalize(&self.draft);
        let id = post.id.clone();
        tracing::debug!(%id, "Post finalized");
        self.posts.prepend(post);
        self.send(StoreUpdate::PostAdded { id: id.clone() });
        self.persist().await;
        id
    }

    /// Reset the draft to defaults and the wizard to step 1. The post
    /// collection is untouched.
    pub fn reset_form(&mut self) {
        self.draft.clear();
        self.step = WizardStep::default();
        self.send(StoreUpdate::FormReset);
    }

    fn set_step(&mut self, step: WizardStep) {
        if step != self.step {
            tracing::debug!(from = self.step.number(), to = step.number(), "Step change");
            self.step = step;
            self.send(StoreUpdate::StepChanged { step });
        }
    }

    async fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.posts).await {
            tracing::warn!("Failed to persist posts: {e}");
            self.send(StoreUpdate::StorageWarning {
                detail: e.to_string(),
            });
        }
    }

    fn send(&self, update: StoreUpdate) {
        // No surface attached (headless use) is fine; drops are silent.
        let _ = self.tx.send(update);
    }
}

/// Fresh placeholder header image for a completed metadata step
fn placeholder_image_url() -> String {
    let seed: u32 = rand::random();
    format!("https://picsum.photos/seed/{seed}/800/400")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn test_store() -> (WizardStore, mpsc::UnboundedReceiver<StoreUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (WizardStore::new(Arc::new(MemoryStorage::new()), tx), rx)
    }

    fn fill_metadata(store: &mut WizardStore) {
        store.set_field(Field::Title, "Hello");
        store.set_field(Field::Author, "Dana");
    }

    #[tokio::test]
    async fn test_advance_rejected_leaves_step_unchanged() {
        let (mut store, _rx) = test_store();

        let outcome = store.next_step();
        let StepAdvance::Rejected(errors) = outcome else {
            panic!("blank metadata must not advance");
        };
        assert_eq!(store.current_step(), WizardStep::Metadata);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(&Field::Title).map(String::as_str),
            Some("Blog title is required.")
        );
    }

    #[tokio::test]
    async fn test_advance_with_clean_schema_moves_forward() {
        let (mut store, _rx) = test_store();
        fill_metadata(&mut store);

        assert_eq!(
            store.next_step(),
            StepAdvance::Advanced(WizardStep::SummaryCategory)
        );
        assert_eq!(store.current_step(), WizardStep::SummaryCategory);
    }

    #[tokio::test]
    async fn test_step_one_success_assigns_placeholder_image() {
        let (mut store, _rx) = test_store();
        fill_metadata(&mut store);
        assert!(store.draft().image_url.is_empty());

        store.next_step();
        let first = store.draft().image_url.clone();
        assert!(first.starts_with("https://picsum.photos/seed/"));

        // Re-deriving step 1 reassigns a fresh placeholder.
        store.prev_step();
        store.next_step();
        assert_ne!(store.draft().image_url, first);
    }

    #[tokio::test]
    async fn test_retreat_saturates_at_step_one() {
        let (mut store, _rx) = test_store();
        assert_eq!(store.prev_step(), WizardStep::Metadata);

        fill_metadata(&mut store);
        store.next_step();
        assert_eq!(store.prev_step(), WizardStep::Metadata);
    }

    #[tokio::test]
    async fn test_go_to_step_clamps() {
        let (mut store, _rx) = test_store();
        assert_eq!(store.go_to_step(3), WizardStep::Content);
        assert_eq!(store.go_to_step(0), WizardStep::Metadata);
        assert_eq!(store.go_to_step(9), WizardStep::Review);
    }

    #[tokio::test]
    async fn test_advance_at_review_is_a_no_op() {
        let (mut store, _rx) = test_store();
        store.go_to_step(4);
        assert_eq!(store.next_step(), StepAdvance::Advanced(WizardStep::Review));
        assert_eq!(store.current_step(), WizardStep::Review);
    }

    #[tokio::test]
    async fn test_add_post_prepends_with_unique_ids() {
        let (mut store, _rx) = test_store();

        store.set_field(Field::Title, "first");
        let first = store.add_post().await;
        store.set_field(Field::Title, "second");
        let second = store.add_post().await;

        assert_eq!(store.posts().len(), 2);
        assert_ne!(first, second);
        assert_eq!(store.posts().all()[0].id, second);
        assert_eq!(store.posts().all()[0].title, "second");
    }

    #[tokio::test]
    async fn test_reset_form_clears_draft_and_step_only() {
        let (mut store, _rx) = test_store();
        fill_metadata(&mut store);
        store.next_step();
        store.add_post().await;

        store.reset_form();
        assert_eq!(store.draft(), &FormDraft::default());
        assert_eq!(store.current_step(), WizardStep::Metadata);
        assert_eq!(store.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_finalize_empty_draft_inserts_empty_post() {
        // addPost does not re-validate; the review surface is the gate.
        let (mut store, _rx) = test_store();
        let id = store.add_post().await;

        let post = store.post(&id).expect("post was inserted");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert!(!post.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_restores_persisted_posts() {
        let storage = Arc::new(MemoryStorage::new());
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = WizardStore::new(storage.clone(), tx);
        store.hydrate().await;
        store.set_field(Field::Title, "persisted");
        store.add_post().await;

        let (tx, _rx) = mpsc::unbounded_channel();
        let mut reopened = WizardStore::new(storage, tx);
        assert!(!reopened.is_hydrated());
        reopened.hydrate().await;
        assert!(reopened.is_hydrated());
        assert_eq!(reopened.posts().len(), 1);
        assert_eq!(reopened.posts().all()[0].title, "persisted");
    }

    #[tokio::test]
    async fn test_hydrate_failure_is_non_fatal() {
        let storage = Arc::new(MemoryStorage::new());
        storage.fail_loads(true);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut store = WizardStore::new(storage, tx);

        store.hydrate().await;
        assert!(store.is_hydrated());
        assert!(store.posts().is_empty());

        assert!(matches!(
            rx.try_recv(),
            Ok(StoreUpdate::StorageWarning { .. })
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(StoreUpdate::HydrationComplete { post_count: 0 })
        ));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_state_usable() {
        let storage = Arc::new(MemoryStorage::new());
        storage.fail_saves(true);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut store = WizardStore::new(storage, tx);

        store.set_field(Field::Title, "kept in memory");
        let id = store.add_post().await;
        assert!(store.post(&id).is_some());

        let mut saw_warning = false;
        while let Ok(update) = rx.try_recv() {
            if matches!(update, StoreUpdate::StorageWarning { .. }) {
                saw_warning = true;
            }
        }
        assert!(saw_warning);
    }

    #[tokio::test]
    async fn test_mutations_emit_updates() {
        let (mut store, mut rx) = test_store();

        store.set_field(Field::Title, "Hello");
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreUpdate::DraftChanged { field: Field::Title }
        );

        store.go_to_step(2);
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreUpdate::StepChanged {
                step: WizardStep::SummaryCategory
            }
        );

        store.reset_form();
        assert_eq!(rx.try_recv().unwrap(), StoreUpdate::FormReset);
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_harmless() {
        let (mut store, rx) = test_store();
        drop(rx);
        store.set_field(Field::Title, "no one listening");
        store.reset_form();
    }
}
