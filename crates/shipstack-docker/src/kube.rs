use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DockerError;
use crate::executor::{DockerExecutor, RealExecutor, args};
use shipstack_core::Orchestrator;

/// Kubernetes stack-deploy client. Construction validates the kubeconfig
/// path so a bad path fails before anything touches the cluster.
pub struct KubeClient<E: DockerExecutor = RealExecutor> {
    executor: E,
    kubeconfig: Option<PathBuf>,
    namespace: String,
}

impl<E: DockerExecutor> std::fmt::Debug for KubeClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeClient")
            .field("kubeconfig", &self.kubeconfig)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl KubeClient<RealExecutor> {
    pub fn new(kubeconfig: Option<&Path>, namespace: &str) -> Result<Self, DockerError> {
        Self::with_executor(
            RealExecutor::with_orchestrator(Orchestrator::Kubernetes),
            kubeconfig,
            namespace,
        )
    }
}

impl<E: DockerExecutor> KubeClient<E> {
    pub fn with_executor(
        executor: E,
        kubeconfig: Option<&Path>,
        namespace: &str,
    ) -> Result<Self, DockerError> {
        if let Some(path) = kubeconfig {
            if !path.exists() {
                return Err(DockerError::KubeconfigNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(Self {
            executor,
            kubeconfig: kubeconfig.map(Path::to_path_buf),
            namespace: namespace.to_owned(),
        })
    }

    /// Deploy a rendered manifest as a Kubernetes stack in the client's
    /// namespace. The stack name groups the resulting objects.
    pub async fn deploy_stack(&self, manifest: &str, stack: &str) -> Result<(), DockerError> {
        debug!(stack, namespace = %self.namespace, "deploying stack to kubernetes");
        let mut cmd_args = args(["stack", "deploy", "--compose-file", "-"]);
        cmd_args.push("--namespace".to_owned());
        cmd_args.push(self.namespace.clone());
        if let Some(path) = &self.kubeconfig {
            cmd_args.push("--kubeconfig".to_owned());
            cmd_args.push(path.display().to_string());
        }
        cmd_args.push(stack.to_owned());

        self.executor
            .exec_with_stdin(&cmd_args, manifest.as_bytes())
            .await?;
        Ok(())
    }
}
