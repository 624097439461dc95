use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use shipstack_core::{Orchestrator, parse_overrides, stack_name};
use shipstack_docker::DockerContext;
use shipstack_pack::extract;
use shipstack_render::render;

#[derive(Debug, Args)]
pub struct DeployOpts {
    /// Override settings files
    #[arg(long, short = 'f')]
    pub settings_files: Vec<PathBuf>,

    /// Override settings values (KEY=VALUE)
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Orchestrator to deploy on (swarm, kubernetes)
    #[arg(long, short = 'o', default_value = "swarm")]
    pub orchestrator: String,

    /// kubeconfig file to use
    #[arg(long, short = 'k')]
    pub kubeconfig: Option<PathBuf>,

    /// namespace to deploy into
    #[arg(long, short = 'n', default_value = "default")]
    pub namespace: String,

    /// stack name (default: app name)
    #[arg(long, short = 'd')]
    pub name: Option<String>,

    /// send registry auth
    #[arg(long)]
    pub with_registry_auth: bool,

    /// Override Compose files
    #[cfg(feature = "experimental")]
    #[arg(long, short = 'c')]
    pub compose_files: Vec<PathBuf>,
}

/// Extract, render, and hand the manifest to the chosen orchestrator.
pub async fn deploy(app_name: &str, opts: DeployOpts) -> anyhow::Result<()> {
    // the guard lives to the end of the function so temporary extraction
    // artifacts survive exactly as long as the deployment needs them
    let (package_dir, _cleanup) = extract(app_name)?;

    let orchestrator = Orchestrator::resolve(&opts.orchestrator)?;
    let overrides = parse_overrides(&opts.set)?;

    #[cfg(feature = "experimental")]
    let compose_files = opts.compose_files.as_slice();
    #[cfg(not(feature = "experimental"))]
    let compose_files: &[PathBuf] = &[];

    let rendered = render(&package_dir, compose_files, &opts.settings_files, &overrides)?;

    // context before any orchestrator-specific client
    let context = DockerContext::new(orchestrator);

    let stack_name = stack_name(opts.name.as_deref(), &package_dir);
    debug!(stack = %stack_name, orchestrator = %orchestrator, "deploying application");

    match context.orchestrator() {
        Orchestrator::Swarm => {
            context
                .swarm()?
                .deploy(&rendered, &stack_name, opts.with_registry_auth)
                .await?;
        }
        Orchestrator::Kubernetes => {
            let kube = context.kubernetes(opts.kubeconfig.as_deref(), &opts.namespace)?;
            kube.deploy_stack(&rendered, &stack_name).await?;
        }
    }

    Ok(())
}
