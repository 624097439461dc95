use std::path::PathBuf;

use clap::Args;

use shipstack_core::parse_overrides;

#[derive(Debug, Args)]
pub struct ImageAddOpts {
    /// Override Compose files
    #[arg(long, short = 'c')]
    pub compose_files: Vec<PathBuf>,

    /// Override settings files
    #[arg(long, short = 's')]
    pub settings_files: Vec<PathBuf>,

    /// Override environment values (KEY=VALUE)
    #[arg(long, short = 'e', value_name = "KEY=VALUE")]
    pub env: Vec<String>,
}

pub async fn image_add(
    app_name: &str,
    services: &[String],
    opts: ImageAddOpts,
) -> anyhow::Result<()> {
    let env = parse_overrides(&opts.env)?;
    shipstack_pack::add(
        app_name,
        services,
        &opts.compose_files,
        &opts.settings_files,
        &env,
    )
    .await?;
    Ok(())
}
