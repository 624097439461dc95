use std::path::Path;

use crate::error::DockerError;
use crate::executor::RealExecutor;
use crate::kube::KubeClient;
use crate::swarm::SwarmClient;
use shipstack_core::Orchestrator;

/// Client context carrying the resolved orchestrator.
///
/// Must exist before any orchestrator-specific client is built; every client
/// it hands out spawns subprocesses with `DOCKER_ORCHESTRATOR` set to its
/// choice.
pub struct DockerContext {
    orchestrator: Orchestrator,
}

impl DockerContext {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> Orchestrator {
        self.orchestrator
    }

    pub fn swarm(&self) -> Result<SwarmClient<RealExecutor>, DockerError> {
        self.ensure(Orchestrator::Swarm)?;
        Ok(SwarmClient::new())
    }

    pub fn kubernetes(
        &self,
        kubeconfig: Option<&Path>,
        namespace: &str,
    ) -> Result<KubeClient<RealExecutor>, DockerError> {
        self.ensure(Orchestrator::Kubernetes)?;
        KubeClient::new(kubeconfig, namespace)
    }

    fn ensure(&self, requested: Orchestrator) -> Result<(), DockerError> {
        if self.orchestrator == requested {
            Ok(())
        } else {
            Err(DockerError::OrchestratorMismatch {
                requested,
                resolved: self.orchestrator,
            })
        }
    }
}
