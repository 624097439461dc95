use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("no *.stack package found in {dir}")]
    NoPackageFound { dir: PathBuf },

    #[error("multiple packages found, pass one explicitly: {}", candidates.join(", "))]
    AmbiguousPackage { candidates: Vec<String> },

    #[error("no application package named '{name}'")]
    PackageNotFound { name: String },

    #[error("{path} is not an application package: no compose.yml")]
    NotAPackage { path: PathBuf },

    #[error(
        "single-file package {path} must hold 3 documents (metadata, compose, settings), found {docs}"
    )]
    MalformedSingleFile { path: PathBuf, docs: usize },

    #[error("failed to read package {path}")]
    PackageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write extracted package file {path}")]
    ExtractWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create temporary extraction directory")]
    TempDir { source: std::io::Error },

    #[error("failed to create images directory {path}")]
    ImagesDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot bundle images into a single-file package; unpack it into a directory first")]
    SingleFileImages,

    #[error("service '{name}' does not exist in the rendered manifest")]
    UnknownService { name: String },

    #[error(transparent)]
    Metadata(#[from] shipstack_core::Error),

    #[error(transparent)]
    Render(#[from] shipstack_render::RenderError),

    #[error(transparent)]
    Docker(#[from] shipstack_docker::DockerError),
}
