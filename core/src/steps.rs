//! Wizard Steps
//!
//! The four ordered stages of the creation wizard. The flow is linear:
//! metadata, summary & category, content, review. Review is the terminal
//! display state for forward movement, not a fifth step.
//!
//! # Design Philosophy
//!
//! Steps carry no data of their own. All form data lives in the draft; the
//! step only decides which validation schema gates the next advance and
//! which fields a surface should render.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four ordered wizard stages
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WizardStep {
    /// Step 1: title and author
    #[default]
    Metadata,
    /// Step 2: summary and category
    SummaryCategory,
    /// Step 3: the post body
    Content,
    /// Step 4: review and submit
    Review,
}

impl WizardStep {
    /// All steps in wizard order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Metadata,
        WizardStep::SummaryCategory,
        WizardStep::Content,
        WizardStep::Review,
    ];

    /// Total number of steps
    pub const COUNT: u8 = 4;

    /// 1-based step number
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Metadata => 1,
            Self::SummaryCategory => 2,
            Self::Content => 3,
            Self::Review => 4,
        }
    }

    /// Step for a 1-based number, clamped to [1, 4]
    #[must_use]
    pub fn from_number(number: u8) -> Self {
        match number {
            0 | 1 => Self::Metadata,
            2 => Self::SummaryCategory,
            3 => Self::Content,
            _ => Self::Review,
        }
    }

    /// Display title, as shown in the step progress header
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Metadata => "Blog Metadata",
            Self::SummaryCategory => "Summary & Category",
            Self::Content => "Content",
            Self::Review => "Review & Submit",
        }
    }

    /// Next step, saturating at review
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Metadata => Self::SummaryCategory,
            Self::SummaryCategory => Self::Content,
            Self::Content | Self::Review => Self::Review,
        }
    }

    /// Previous step, saturating at the first step
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Metadata | Self::SummaryCategory => Self::Metadata,
            Self::Content => Self::SummaryCategory,
            Self::Review => Self::Content,
        }
    }

    /// Whether this is the review step
    #[must_use]
    pub fn is_review(self) -> bool {
        self == Self::Review
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), step);
        }
    }

    #[test]
    fn test_from_number_clamps() {
        assert_eq!(WizardStep::from_number(0), WizardStep::Metadata);
        assert_eq!(WizardStep::from_number(5), WizardStep::Review);
        assert_eq!(WizardStep::from_number(u8::MAX), WizardStep::Review);
    }

    #[test]
    fn test_next_saturates_at_review() {
        assert_eq!(WizardStep::Metadata.next(), WizardStep::SummaryCategory);
        assert_eq!(WizardStep::Content.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
    }

    #[test]
    fn test_prev_saturates_at_first() {
        assert_eq!(WizardStep::Review.prev(), WizardStep::Content);
        assert_eq!(WizardStep::SummaryCategory.prev(), WizardStep::Metadata);
        assert_eq!(WizardStep::Metadata.prev(), WizardStep::Metadata);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            WizardStep::SummaryCategory.to_string(),
            "Step 2 of 4: Summary & Category"
        );
    }
}
