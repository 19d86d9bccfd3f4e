// src/config/types.rs
use crate::error::{ManagerError, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// Defaults the handlers fall back to when a prompt is left empty, plus the
/// pinned chart coordinates. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    pub default_region: String,
    pub default_cluster: String,
    pub chart_repo_name: String,
    pub chart_repo_url: String,
    pub chart: String,
    pub chart_version: String,
    pub values_file: String,
    pub ingress_domain: String,
    pub helm_install_script_url: String,
    pub post_deploy_pause_secs: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            default_region: "us-east-1".to_string(),
            default_cluster: "shared-eks-cluster".to_string(),
            chart_repo_name: "prometheus-community".to_string(),
            chart_repo_url: "https://prometheus-community.github.io/helm-charts".to_string(),
            chart: "prometheus-community/prometheus".to_string(),
            chart_version: "27.5.1".to_string(),
            values_file: "prometheus-values.yaml".to_string(),
            ingress_domain: "sctp-sandbox.com".to_string(),
            helm_install_script_url:
                "https://raw.githubusercontent.com/helm/helm/main/scripts/get-helm-3".to_string(),
            post_deploy_pause_secs: 5,
        }
    }
}

impl ManagerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|e| {
            ManagerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&config_str).map_err(|e| {
            ManagerError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("chart", &self.chart),
            ("chart_version", &self.chart_version),
            ("chart_repo_name", &self.chart_repo_name),
            ("chart_repo_url", &self.chart_repo_url),
            ("values_file", &self.values_file),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ManagerError::Config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    /// Values file path with `~` expanded.
    pub fn values_path(&self) -> String {
        shellexpand::tilde(&self.values_file).to_string()
    }

    pub fn post_deploy_pause(&self) -> Duration {
        Duration::from_secs(self.post_deploy_pause_secs)
    }

    /// `<namespace>.<ingress_domain>`
    pub fn default_hostname(&self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.ingress_domain)
    }
}
