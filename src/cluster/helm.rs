// src/cluster/helm.rs
use crate::config::ManagerConfig;
use crate::exec::CommandLine;
use serde::Deserialize;
use std::path::Path;

const HELM: &str = "helm";

/// One element of `helm list -n <namespace> -o json`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HelmRelease {
    pub name: String,
    pub chart: String,
}

fn helm() -> CommandLine {
    CommandLine::new(HELM)
}

/// Runs command `helm version`, used as a presence probe.
pub fn version() -> CommandLine {
    helm().arg("version")
}

/// Runs command `helm repo add <name> <url>`.
pub fn repo_add(config: &ManagerConfig) -> CommandLine {
    helm().args([
        "repo",
        "add",
        config.chart_repo_name.as_str(),
        config.chart_repo_url.as_str(),
    ])
}

pub fn repo_update() -> CommandLine {
    helm().args(["repo", "update"])
}

/// Runs command `helm upgrade --install <release> <chart> --version <v>
/// --values <file> --namespace <namespace>`.
pub fn upgrade_install(
    config: &ManagerConfig,
    release: &str,
    values_file: &str,
    namespace: &str,
) -> CommandLine {
    helm().args([
        "upgrade",
        "--install",
        release,
        config.chart.as_str(),
        "--version",
        config.chart_version.as_str(),
        "--values",
        values_file,
        "--namespace",
        namespace,
    ])
}

pub fn uninstall(release: &str, namespace: &str) -> CommandLine {
    helm().args(["uninstall", release, "--namespace", namespace])
}

/// Human-readable `helm list -n <namespace>`.
pub fn list(namespace: &str) -> CommandLine {
    helm().args(["list", "-n", namespace])
}

/// Runs command `helm list -n <namespace> -o json`.
pub fn list_json(namespace: &str) -> CommandLine {
    helm().args(["list", "-n", namespace, "-o", "json"])
}

pub fn status(release: &str, namespace: &str) -> CommandLine {
    helm().args(["status", release, "-n", namespace])
}

/// Downloads the helm installer script to `script`.
pub fn download_installer(url: &str, script: &Path) -> CommandLine {
    CommandLine::new("curl")
        .args(["-fsSL", "-o"])
        .arg(script.display())
        .arg(url)
}

pub fn run_installer(script: &Path) -> CommandLine {
    CommandLine::new("bash").arg(script.display())
}

/// Parses `helm list -o json` output.
pub fn parse_release_list(output: &str) -> serde_json::Result<Vec<HelmRelease>> {
    serde_json::from_str(output)
}
