//! Compose template rendering for shipstack.
//!
//! Settings come from three layers merged in increasing precedence: the
//! package's `settings.yml`, any `--settings-files` overlays, and the
//! `KEY=VALUE` override map. The merged tree is flattened to dotted paths
//! and substituted into `${...}` placeholders in the compose template.

pub mod error;
pub mod render;
pub mod settings;

pub use error::RenderError;
pub use render::{render, service_images};
pub use settings::{flatten, load_settings};
