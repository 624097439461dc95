use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed override '{token}': expected KEY=VALUE")]
    MalformedOverride { token: String },

    #[error("orchestrator must be either 'swarm' or 'kubernetes', got '{value}'")]
    InvalidOrchestrator { value: String },

    #[error("failed to read package metadata at {path}")]
    MetadataLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse package metadata at {path}")]
    MetadataParse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
