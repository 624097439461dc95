use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn shipstack() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shipstack");
    // keep the ambient environment out of orchestrator resolution
    cmd.env_remove("DOCKER_ORCHESTRATOR");
    cmd
}

fn write_package(base: &Path, name: &str) {
    let dir = base.join(name);
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(
        dir.join("compose.yml"),
        "services:\n  web:\n    image: app:${tag}\n",
    )
    .unwrap();
    std::fs::write(dir.join("settings.yml"), "tag: v1\n").unwrap();
}

// ── Help / Version ──

#[test]
fn shows_help() {
    shipstack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deploy compose application packages",
        ));
}

#[test]
fn shows_version() {
    shipstack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shipstack"));
}

// ── Deploy: validation before any side effect ──

#[test]
fn deploy_unknown_package_fails() {
    let tmp = TempDir::new().unwrap();

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no application package named"));
}

#[test]
fn deploy_without_argument_and_no_package_fails() {
    let tmp = TempDir::new().unwrap();

    shipstack()
        .current_dir(tmp.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no *.stack package found"));
}

#[test]
fn deploy_rejects_malformed_set_token() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web", "--set", "not-a-pair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed override 'not-a-pair'"));
}

#[test]
fn deploy_rejects_unknown_orchestrator_flag() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web", "--orchestrator", "mesos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "orchestrator must be either 'swarm' or 'kubernetes'",
        ));
}

#[test]
fn orchestrator_env_var_overrides_the_flag() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    // env wins over a valid flag; the bogus env value is what gets rejected
    shipstack()
        .current_dir(tmp.path())
        .env("DOCKER_ORCHESTRATOR", "nomad")
        .args(["deploy", "web", "--orchestrator", "swarm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 'nomad'"));
}

#[test]
fn deploy_surfaces_render_errors() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("web.stack");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(
        dir.join("compose.yml"),
        "services:\n  web:\n    image: app:${undefined.var}\n",
    )
    .unwrap();

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined variable"));
}

#[test]
fn deploy_kubernetes_rejects_missing_kubeconfig() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args([
            "deploy",
            "web",
            "--orchestrator",
            "kubernetes",
            "--kubeconfig",
            "/no/such/kubeconfig",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kubeconfig file not found"));
}

// ── Experimental compose-file overrides ──

#[cfg(feature = "experimental")]
#[test]
fn deploy_loads_compose_file_overrides() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");
    // the package alone renders fine; this placeholder can only surface if
    // the override file is actually loaded and substituted
    let overlay = tmp.path().join("overlay.yml");
    std::fs::write(
        &overlay,
        "services:\n  web:\n    image: app:${overlay.only}\n",
    )
    .unwrap();

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web", "--compose-files", "overlay.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overlay.only"));
}

#[cfg(feature = "experimental")]
#[test]
fn deploy_compose_files_must_exist() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web", "--compose-files", "missing.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.yml"));
}

// ── image-add ──

#[cfg(feature = "experimental")]
#[test]
fn image_add_requires_an_app_name() {
    shipstack()
        .arg("image-add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[cfg(feature = "experimental")]
#[test]
fn image_add_rejects_malformed_env_token() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args(["image-add", "web", "--env", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed override 'oops'"));
}

#[cfg(not(feature = "experimental"))]
#[test]
fn image_add_is_absent_without_the_experimental_feature() {
    shipstack()
        .arg("image-add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[cfg(not(feature = "experimental"))]
#[test]
fn compose_files_flag_is_absent_without_the_experimental_feature() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "web.stack");

    shipstack()
        .current_dir(tmp.path())
        .args(["deploy", "web", "--compose-files", "x.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
