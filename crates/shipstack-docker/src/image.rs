use std::path::Path;

use tracing::debug;

use crate::error::DockerError;
use crate::executor::{DockerExecutor, RealExecutor, args};

/// Image save client used by the package bundler.
pub struct ImageClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl ImageClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor::new(),
        }
    }
}

impl Default for ImageClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> ImageClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Save an image from the local daemon into a tar archive.
    pub async fn save(&self, image: &str, dest: &Path) -> Result<(), DockerError> {
        debug!(image, dest = %dest.display(), "saving image");
        let mut cmd_args = args(["image", "save", "--output"]);
        cmd_args.push(dest.display().to_string());
        cmd_args.push(image.to_owned());

        self.executor.exec(&cmd_args).await?;
        Ok(())
    }
}
