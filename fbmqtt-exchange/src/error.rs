//! Error types for queue consumption.

use thiserror::Error;

/// Errors a consumer may report while applying a message.
///
/// A consumer failure is confined to the message that caused it: the router
/// logs it and continues draining. Nothing a consumer returns can corrupt
/// the queue or stop the loop.
#[derive(Error, Debug)]
pub enum ConsumerError {
    /// The message could not be applied to the backing state.
    #[error("message could not be applied: {0}")]
    Apply(String),

    /// Failure in an external collaborator (typically persistence).
    #[error("collaborator failure: {0}")]
    Collaborator(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for consumer operations.
pub type ConsumerResult = Result<(), ConsumerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_error_display() {
        let error = ConsumerError::Apply("storage unavailable".to_string());
        assert_eq!(error.to_string(), "message could not be applied: storage unavailable");
    }

    #[test]
    fn test_collaborator_error_wraps_source() {
        let source: Box<dyn std::error::Error + Send + Sync> =
            "connection refused".to_string().into();

        let error = ConsumerError::from(source);
        assert!(error.to_string().contains("connection refused"));
    }
}
