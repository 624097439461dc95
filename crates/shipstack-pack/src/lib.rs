//! Application package handling for shipstack.
//!
//! A package is a `<name>.stack` directory holding `metadata.yml`,
//! `compose.yml`, and `settings.yml`, or a single file with the same three
//! documents separated by `---`. Single-file packages extract into a
//! temporary directory owned by a [`Cleanup`] guard.

pub mod error;
pub mod extract;
pub mod image;

pub use error::PackError;
pub use extract::{Cleanup, extract, extract_in};
pub use image::add;
