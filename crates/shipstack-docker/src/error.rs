use std::path::PathBuf;

use shipstack_core::Orchestrator;

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker CLI not found — install: https://docs.docker.com/engine/install/")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("docker output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },

    #[error("failed to write to docker stdin")]
    StdinWrite { source: std::io::Error },

    #[error("kubeconfig file not found: {path}")]
    KubeconfigNotFound { path: PathBuf },

    #[error("client context resolved to '{resolved}' but a '{requested}' client was requested")]
    OrchestratorMismatch {
        requested: Orchestrator,
        resolved: Orchestrator,
    },
}
