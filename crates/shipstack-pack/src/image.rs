use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::PackError;
use crate::extract::extract;
use shipstack_core::package::IMAGES_DIR;
use shipstack_docker::executor::DockerExecutor;
use shipstack_docker::ImageClient;
use shipstack_render::{render, service_images};

/// Bundle the images referenced by a package's services into its `images/`
/// subdirectory, saved from the local docker daemon.
pub async fn add(
    app_name: &str,
    services: &[String],
    compose_files: &[PathBuf],
    settings_files: &[PathBuf],
    env: &BTreeMap<String, String>,
) -> Result<(), PackError> {
    add_with_client(
        app_name,
        services,
        compose_files,
        settings_files,
        env,
        &ImageClient::new(),
    )
    .await
}

/// [`add`] with an injected client, for tests.
pub async fn add_with_client<E: DockerExecutor>(
    app_name: &str,
    services: &[String],
    compose_files: &[PathBuf],
    settings_files: &[PathBuf],
    env: &BTreeMap<String, String>,
    client: &ImageClient<E>,
) -> Result<(), PackError> {
    let (package_dir, cleanup) = extract(app_name)?;
    if cleanup.is_temporary() {
        // a temporary extraction has no package directory to keep images in
        return Err(PackError::SingleFileImages);
    }

    let rendered = render(&package_dir, compose_files, settings_files, env)?;
    let available = service_images(&rendered)?;

    let selected: Vec<(&String, &String)> = if services.is_empty() {
        available.iter().collect()
    } else {
        services
            .iter()
            .map(|name| {
                available
                    .get_key_value(name)
                    .ok_or_else(|| PackError::UnknownService { name: name.clone() })
            })
            .collect::<Result<_, _>>()?
    };

    let images_dir = package_dir.join(IMAGES_DIR);
    std::fs::create_dir_all(&images_dir).map_err(|e| PackError::ImagesDir {
        path: images_dir.clone(),
        source: e,
    })?;

    for (service, image) in selected {
        let dest = images_dir.join(image_file_name(service));
        debug!(service, image, "bundling image");
        client.save(image, &dest).await?;
    }

    Ok(())
}

/// Tar file name for a service's image. Service keys come from user-supplied
/// YAML; anything that could act as a path separator is replaced so the
/// archive always lands inside `images/`.
fn image_file_name(service: &str) -> String {
    let sanitized: String = service
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{sanitized}.tar")
}
