//! Service boundary errors

/// Failure of an external synthesis call
///
/// All variants are recoverable from the session's point of view: the
/// triggering operation commits nothing and the user may re-trigger it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The backend refused the request (malformed input, content policy, quota)
    #[error("request rejected by synthesis backend: {reason}")]
    Rejected {
        /// Backend-provided reason, verbatim
        reason: String,
    },

    /// Network-level failure before a response was produced
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered but returned no usable content
    #[error("backend returned no usable content")]
    EmptyResponse,
}

impl ServiceError {
    /// Rejection with a reason
    #[inline]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Transport-level failure
    #[inline]
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ServiceError::rejected("bad image").to_string(),
            "request rejected by synthesis backend: bad image"
        );
        assert_eq!(
            ServiceError::transport("connection reset").to_string(),
            "transport failure: connection reset"
        );
    }
}
