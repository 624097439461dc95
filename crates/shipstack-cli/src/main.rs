mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shipstack",
    about = "Deploy compose application packages to Swarm or Kubernetes"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy or update an application on either Swarm or Kubernetes
    Deploy {
        /// Application package name or path (default: sole package in cwd)
        app_name: Option<String>,
        #[command(flatten)]
        opts: commands::DeployOpts,
    },
    /// Add images for given services (default: all) to the app package
    #[cfg(feature = "experimental")]
    ImageAdd {
        /// Application package name or path
        app_name: String,
        /// Services whose images to save (default: all)
        services: Vec<String>,
        #[command(flatten)]
        opts: commands::ImageAddOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { app_name, opts } => {
            commands::deploy(app_name.as_deref().unwrap_or(""), opts).await?
        }
        #[cfg(feature = "experimental")]
        Commands::ImageAdd {
            app_name,
            services,
            opts,
        } => commands::image_add(&app_name, &services, opts).await?,
    }

    Ok(())
}
