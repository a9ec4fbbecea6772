use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors surfaced by an external lookup collaborator.
///
/// Callers treat every variant as "no record" (see [`crate::collaborators`]);
/// the variants exist so the failure can be logged with some precision.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: &'static str,
        reason: String,
    },

    #[error("{collaborator} returned a malformed record: {reason}")]
    Malformed {
        collaborator: &'static str,
        reason: String,
    },

    #[error("{collaborator} timed out after {after_secs}s")]
    TimedOut {
        collaborator: &'static str,
        after_secs: u64,
    },
}
