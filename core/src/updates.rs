//! Store Updates
//!
//! Notifications sent from the wizard store to subscribed surfaces. These
//! are the downstream half of the subscribe/mutate contract: surfaces call
//! the store's operations and render from the updates that come back.
//!
//! # Design Philosophy
//!
//! Surfaces never mutate store state directly; the store is the single
//! writer and every mutation announces itself here. Updates are
//! fire-and-forget - a store without an attached surface (headless tests,
//! scripting) simply drops them.

use serde::{Deserialize, Serialize};

use crate::draft::Field;
use crate::post::PostId;
use crate::steps::WizardStep;
use crate::validation::ValidationErrors;

/// Updates from the wizard store to a subscribed surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoreUpdate {
    /// Durable posts finished loading (or the load failed and the store
    /// proceeded with defaults). Sent exactly once per process.
    HydrationComplete {
        /// Number of posts restored
        post_count: usize,
    },

    /// One draft field was written
    DraftChanged {
        /// The field that changed
        field: Field,
    },

    /// The current step changed
    StepChanged {
        /// The step now active
        step: WizardStep,
    },

    /// A gated advance was rejected; the step is unchanged
    ValidationFailed {
        /// The step whose schema failed
        step: WizardStep,
        /// Field-to-message failures, for display
        errors: ValidationErrors,
    },

    /// A post was finalized and prepended to the collection
    PostAdded {
        /// Id of the new post
        id: PostId,
    },

    /// The draft and step were reset; the collection is untouched
    FormReset,

    /// A persistence operation failed. State remains usable in memory for
    /// the rest of the session.
    StorageWarning {
        /// Human-readable failure detail
        detail: String,
    },
}
