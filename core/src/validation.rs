//! Validation Engine
//!
//! Pure field rules composed into per-step schemas. A schema maps the
//! current draft to a set of failures: one entry per failing field, absence
//! of a key means the field is valid.
//!
//! # Design Philosophy
//!
//! Validation failures are data, never errors. Rules run synchronously on
//! demand - on an explicit advance, and again on keystrokes when a surface
//! wants to clear a previously shown failure. Because rules are pure,
//! re-running a schema is always safe and cheap.

use std::collections::BTreeMap;

use crate::draft::{Field, FormDraft};
use crate::steps::WizardStep;

/// Minimum trimmed length of the post body
pub const MIN_CONTENT_LEN: usize = 50;

/// Map from failing field to its error message; absence means valid
pub type ValidationErrors = BTreeMap<Field, String>;

/// A single pure validation rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be non-blank after trimming
    Required {
        /// Message shown when the value is blank
        message: &'static str,
    },
    /// Value must reach a minimum length after trimming
    MinTrimmedLen {
        /// Minimum number of characters after trimming
        min: usize,
        /// Message shown when the value is too short
        message: &'static str,
    },
}

impl FieldRule {
    /// Check one value; `None` means valid
    #[must_use]
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required { message } => {
                if value.trim().is_empty() {
                    Some((*message).to_string())
                } else {
                    None
                }
            }
            Self::MinTrimmedLen { min, message } => {
                if value.trim().chars().count() < *min {
                    Some((*message).to_string())
                } else {
                    None
                }
            }
        }
    }
}

/// Ordered set of field rules gating one wizard step
#[derive(Clone, Debug, Default)]
pub struct ValidationSchema {
    rules: Vec<(Field, FieldRule)>,
}

impl ValidationSchema {
    /// Schema with no rules (the review step)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The schema gating the given step
    #[must_use]
    pub fn for_step(step: WizardStep) -> Self {
        match step {
            WizardStep::Metadata => Self {
                rules: vec![
                    (
                        Field::Title,
                        FieldRule::Required {
                            message: "Blog title is required.",
                        },
                    ),
                    (
                        Field::Author,
                        FieldRule::Required {
                            message: "Author name is required.",
                        },
                    ),
                ],
            },
            WizardStep::SummaryCategory => Self {
                rules: vec![
                    (
                        Field::Summary,
                        FieldRule::Required {
                            message: "Blog summary is required.",
                        },
                    ),
                    (
                        Field::Category,
                        FieldRule::Required {
                            message: "Blog category is required.",
                        },
                    ),
                ],
            },
            WizardStep::Content => Self {
                rules: vec![(
                    Field::Content,
                    FieldRule::MinTrimmedLen {
                        min: MIN_CONTENT_LEN,
                        message: "Content is required and must be at least 50 characters long.",
                    },
                )],
            },
            WizardStep::Review => Self::empty(),
        }
    }

    /// Validate a draft: one entry per failing field
    #[must_use]
    pub fn validate(&self, draft: &FormDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, rule) in &self.rules {
            if let Some(message) = rule.check(draft.get(*field)) {
                errors.insert(*field, message);
            }
        }
        errors
    }

    /// Fields this schema covers
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().map(|(field, _)| *field)
    }

    /// Whether the schema has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
