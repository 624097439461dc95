use mockall::mock;
use shipstack_core::Orchestrator;
use shipstack_docker::error::DockerError;
use shipstack_docker::executor::DockerExecutor;
use shipstack_docker::{DockerContext, ImageClient, KubeClient, SwarmClient};
use std::path::Path;
use tempfile::TempDir;

mock! {
    Executor {}

    impl DockerExecutor for Executor {
        async fn exec(&self, args: &[String]) -> Result<String, DockerError>;
        async fn exec_with_stdin(
            &self,
            args: &[String],
            stdin_data: &[u8],
        ) -> Result<String, DockerError>;
    }
}

// ── Swarm ──

#[tokio::test]
async fn swarm_deploy_pipes_manifest_and_names_stack() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_with_stdin()
        .withf(|args, stdin| {
            args[..]
                == [
                    "stack",
                    "deploy",
                    "--compose-file",
                    "-",
                    "mystack",
                ]
                && stdin == b"services: {}\n".as_slice()
        })
        .returning(|_, _| Ok(String::new()));

    let client = SwarmClient::with_executor(mock);
    client.deploy("services: {}\n", "mystack", false).await.unwrap();
}

#[tokio::test]
async fn swarm_deploy_sends_registry_auth_only_when_asked() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_with_stdin()
        .withf(|args, _| {
            args.contains(&"--with-registry-auth".to_owned())
                && args.last().map(String::as_str) == Some("mystack")
        })
        .returning(|_, _| Ok(String::new()));

    let client = SwarmClient::with_executor(mock);
    client.deploy("services: {}\n", "mystack", true).await.unwrap();
}

#[tokio::test]
async fn swarm_deploy_propagates_command_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_with_stdin().returning(|args, _| {
        Err(DockerError::CommandFailed {
            args: args.to_vec(),
            stderr: "this node is not a swarm manager".to_owned(),
        })
    });

    let client = SwarmClient::with_executor(mock);
    let err = client.deploy("services: {}\n", "app", false).await.unwrap_err();

    assert!(err.to_string().contains("not a swarm manager"));
}

// ── Kubernetes ──

#[tokio::test]
async fn kube_deploy_passes_namespace_and_kubeconfig() {
    let tmp = TempDir::new().unwrap();
    let kubeconfig = tmp.path().join("config");
    std::fs::write(&kubeconfig, "apiVersion: v1\n").unwrap();
    let expected_config = kubeconfig.display().to_string();

    let mut mock = MockExecutor::new();
    mock.expect_exec_with_stdin()
        .withf(move |args, _| {
            let ns = args
                .iter()
                .position(|a| a == "--namespace")
                .and_then(|i| args.get(i + 1));
            let cfg = args
                .iter()
                .position(|a| a == "--kubeconfig")
                .and_then(|i| args.get(i + 1));
            ns.map(String::as_str) == Some("staging")
                && cfg == Some(&expected_config)
                && args.last().map(String::as_str) == Some("mystack")
        })
        .returning(|_, _| Ok(String::new()));

    let client = KubeClient::with_executor(mock, Some(kubeconfig.as_path()), "staging").unwrap();
    client.deploy_stack("services: {}\n", "mystack").await.unwrap();
}

#[tokio::test]
async fn kube_deploy_without_kubeconfig_omits_the_flag() {
    let mut mock = MockExecutor::new();
    mock.expect_exec_with_stdin()
        .withf(|args, _| !args.contains(&"--kubeconfig".to_owned()))
        .returning(|_, _| Ok(String::new()));

    let client = KubeClient::with_executor(mock, None, "default").unwrap();
    client.deploy_stack("services: {}\n", "app").await.unwrap();
}

#[test]
fn kube_client_rejects_missing_kubeconfig() {
    let mock = MockExecutor::new();
    let err =
        KubeClient::with_executor(mock, Some(Path::new("/no/such/kubeconfig")), "default")
            .unwrap_err();

    assert!(matches!(err, DockerError::KubeconfigNotFound { .. }));
}

// ── Context ──

#[test]
fn swarm_context_refuses_a_kubernetes_client() {
    let ctx = DockerContext::new(Orchestrator::Swarm);

    assert!(ctx.swarm().is_ok());
    let err = ctx.kubernetes(None, "default").unwrap_err();
    assert!(matches!(err, DockerError::OrchestratorMismatch { .. }));
}

#[test]
fn kubernetes_context_refuses_a_swarm_client() {
    let ctx = DockerContext::new(Orchestrator::Kubernetes);

    assert!(ctx.kubernetes(None, "default").is_ok());
    let err = ctx.swarm().unwrap_err();
    assert!(err.to_string().contains("resolved to 'kubernetes'"));
}

// ── Image save ──

#[tokio::test]
async fn image_save_targets_output_path() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| {
            args[..3] == ["image", "save", "--output"]
                && args[3].ends_with("nginx.tar")
                && args[4] == "nginx:1.25"
        })
        .returning(|_| Ok(String::new()));

    let client = ImageClient::with_executor(mock);
    client
        .save("nginx:1.25", Path::new("/tmp/images/nginx.tar"))
        .await
        .unwrap();
}
