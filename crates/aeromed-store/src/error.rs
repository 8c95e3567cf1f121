use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("{kind} {id} is not accessible to user {user_id}")]
    NotOwner {
        kind: &'static str,
        id: Uuid,
        user_id: Uuid,
    },

    #[error("duplicate {kind}: {id}")]
    Duplicate { kind: &'static str, id: Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: String,
        source: std::io::Error,
    },
}
