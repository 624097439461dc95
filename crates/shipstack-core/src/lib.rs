//! Core types for shipstack.
//!
//! This crate defines the package layout vocabulary ([`package`]), the
//! orchestrator choice ([`Orchestrator`]), `KEY=VALUE` override parsing
//! ([`parse_overrides`]), and shared error types.

pub mod error;
pub mod orchestrator;
pub mod overrides;
pub mod package;

pub use error::{Error, Result};
pub use orchestrator::{ORCHESTRATOR_ENV, Orchestrator};
pub use overrides::parse_overrides;
pub use package::{Metadata, app_name_from_dir, stack_name};
