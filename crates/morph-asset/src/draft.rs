//! Clothing description drafts
//!
//! Drafts are produced in batches by reference-image analysis and edited in
//! place until the user turns one into a clothing asset. Using a draft does
//! not consume it; it stays in the queue until explicitly deleted.

use crate::id::DraftId;
use crate::library::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An editable natural-language clothing description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingDraft {
    /// Unique id within the draft queue
    pub id: DraftId,
    /// The description text, editable in place
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ClothingDraft {
    /// Create a draft from an analysis result
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: DraftId::new(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether the text is empty or whitespace-only
    ///
    /// Blank drafts cannot be submitted for synthesis.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Identified for ClothingDraft {
    type Id = DraftId;

    fn id(&self) -> DraftId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blankness() {
        assert!(ClothingDraft::new("").is_blank());
        assert!(ClothingDraft::new("  \n\t ").is_blank());
        assert!(!ClothingDraft::new("red wool coat").is_blank());
    }
}
