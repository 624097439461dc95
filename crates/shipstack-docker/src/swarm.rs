use tracing::debug;

use crate::error::DockerError;
use crate::executor::{DockerExecutor, RealExecutor, args};
use shipstack_core::Orchestrator;

/// Swarm stack-deploy client, parameterized over the executor for
/// testability.
pub struct SwarmClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl<E: DockerExecutor> std::fmt::Debug for SwarmClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmClient").finish_non_exhaustive()
    }
}

impl SwarmClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor::with_orchestrator(Orchestrator::Swarm),
        }
    }
}

impl Default for SwarmClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> SwarmClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Deploy a rendered manifest as a Swarm stack. The manifest goes over
    /// stdin; the stack name is the Swarm namespace.
    pub async fn deploy(
        &self,
        manifest: &str,
        stack: &str,
        with_registry_auth: bool,
    ) -> Result<(), DockerError> {
        debug!(stack, with_registry_auth, "deploying stack to swarm");
        let mut cmd_args = args(["stack", "deploy", "--compose-file", "-"]);
        if with_registry_auth {
            cmd_args.push("--with-registry-auth".to_owned());
        }
        cmd_args.push(stack.to_owned());

        self.executor
            .exec_with_stdin(&cmd_args, manifest.as_bytes())
            .await?;
        Ok(())
    }
}
