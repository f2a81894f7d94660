use thiserror::Error;

#[derive(Debug, Error)]
pub enum VercError {
    #[error("not initialized: run 'vercflow init'")]
    NotInitialized,

    #[error("record not found: {0}")]
    RecordNotFound(String),

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("project already exists: {0}")]
    ProjectExists(String),

    #[error("professional not found: {0}")]
    ProfessionalNotFound(String),

    #[error("professional already exists: {0}")]
    ProfessionalExists(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid phase: {0}")]
    InvalidPhase(String),

    #[error("invalid kind: {0}")]
    InvalidKind(String),

    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("a target project is required for conversion")]
    MissingProject,

    #[error("record already converted: {0}")]
    AlreadyConverted(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, VercError>;
