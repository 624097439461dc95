use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read settings file {path}")]
    SettingsLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}")]
    SettingsParse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("settings file {path} must contain a YAML mapping")]
    SettingsNotAMapping { path: PathBuf },

    #[error("no compose template at {path}")]
    ComposeMissing { path: PathBuf },

    #[error("failed to read compose file {path}")]
    ComposeLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse compose file {path}")]
    ComposeParse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("undefined variable '${{{name}}}' in compose template")]
    UnknownVariable { name: String },

    #[error("unterminated '${{' placeholder in compose template")]
    UnterminatedPlaceholder,

    #[error("rendered output is not a compose manifest: {reason}")]
    NotAComposeManifest { reason: String },

    #[error("failed to serialize rendered manifest")]
    Serialize { source: serde_yaml_ng::Error },
}
