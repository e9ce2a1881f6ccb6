//! Session errors

use morph_asset::DraftId;
use morph_service::ServiceError;

/// Failure of a session operation
///
/// Validation variants are rejected synchronously and never reach the
/// external service. Service failures are recoverable: the triggering
/// operation's in-flight flag is cleared, nothing is committed, and the user
/// may re-trigger.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Draft text is empty or whitespace-only
    #[error("draft text is blank")]
    BlankDraft,

    /// Batch synthesis requires both a model and a clothing selection
    #[error("model and clothing must both be selected")]
    MissingSelection,

    /// Another clothing synthesis is already in flight
    #[error("another clothing synthesis is already in flight")]
    SynthesisBusy,

    /// No draft with this id exists
    #[error("draft not found: {0}")]
    DraftNotFound(DraftId),

    /// The external synthesis call failed
    #[error("service call failed: {0}")]
    Service(#[from] ServiceError),
}

impl SessionError {
    /// Whether this failure was rejected before any external call was made
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Service(_))
    }
}
