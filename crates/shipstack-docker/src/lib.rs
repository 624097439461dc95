//! Orchestrator clients for shipstack.
//!
//! Deployment protocols live in the `docker` CLI; this crate only shapes
//! arguments, pipes rendered manifests over stdin, and surfaces failures.
//! The [`DockerExecutor`] trait isolates subprocess execution so clients can
//! be exercised with mockall in tests.

pub mod context;
pub mod error;
pub mod executor;
pub mod image;
pub mod kube;
pub mod swarm;

pub use context::DockerContext;
pub use error::DockerError;
pub use executor::{DockerExecutor, RealExecutor};
pub use image::ImageClient;
pub use kube::KubeClient;
pub use swarm::SwarmClient;
