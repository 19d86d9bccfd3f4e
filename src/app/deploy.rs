// src/app/deploy.rs
use super::manager::default_release_name;
use super::ResourceManager;
use crate::cluster::{helm, kubectl, ResourceKind};
use crate::error::Result;
use crate::values::{self, ValuesFileAction};
use std::{fs, path::Path, path::PathBuf, thread};

const INSTALLER_NAME: &str = "get-helm-3";

impl ResourceManager {
    /// Installs or upgrades the Prometheus chart into a chosen namespace.
    pub fn deploy_prometheus(&mut self) -> Result<bool> {
        self.console.header("Deploying Prometheus");

        if !self.ensure_helm() {
            return Ok(false);
        }

        let repo_add = helm::repo_add(&self.config);
        if !self.run(&repo_add).success {
            self.console
                .error("Failed to add Prometheus Helm repository");
            return Ok(false);
        }
        if !self.run(&helm::repo_update()).success {
            self.console.error("Failed to update Helm repositories");
            return Ok(false);
        }

        let Some(namespace) = self.choose_namespace(
            "Enter namespace number or name for Prometheus deployment",
            "Enter namespace for Prometheus deployment",
        )?
        else {
            return Ok(false);
        };
        self.console.info(&format!("Using namespace: {}", namespace));

        let release = self.ask_with_default(
            "Enter Prometheus release name",
            &default_release_name(&namespace),
        )?;
        if self.reject_option_like("release", &release) {
            return Ok(false);
        }

        let values_path = PathBuf::from(self.config.values_path());
        if !values_path.exists() {
            self.console.warning(&format!(
                "Values file {} not found. Creating a default values file...",
                values_path.display()
            ));
        }

        let default_host = self.config.default_hostname(&namespace);
        let hostname = self.ask_with_default("Enter hostname for Prometheus ingress", &default_host)?;

        if !self.prepare_values_file(&values_path, &hostname) {
            return Ok(false);
        }

        self.console.info("Deploying Prometheus...");
        let values_arg = values_path.display().to_string();
        let upgrade = helm::upgrade_install(&self.config, &release, &values_arg, &namespace);
        if !self.run(&upgrade).success {
            self.console.error(&format!(
                "Failed to deploy Prometheus to namespace: {}",
                namespace
            ));
            return Ok(false);
        }

        self.console.success(&format!(
            "Successfully deployed Prometheus to namespace: {}",
            namespace
        ));
        self.console
            .info(&format!("Prometheus will be accessible at: http://{}", hostname));
        self.log(&format!(
            "Deployed release {} to namespace {} (host {})",
            release, namespace, hostname
        ));

        // Fixed pause, not a readiness check; the listings are for the operator
        self.console.info("Checking deployment status...");
        thread::sleep(self.config.post_deploy_pause());
        for kind in [
            ResourceKind::Pods,
            ResourceKind::Services,
            ResourceKind::Ingresses,
        ] {
            self.run(&kubectl::get(kind, &namespace));
        }

        Ok(true)
    }

    /// Probes for helm and runs the upstream installer when it is missing.
    fn ensure_helm(&mut self) -> bool {
        if self.run_quiet(&helm::version()).success {
            return true;
        }

        self.console
            .warning("Helm is not installed. Installing Helm...");
        // Private per-run directory, removed when `dir` drops
        let dir = match tempfile::Builder::new().prefix("helm-installer-").tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                self.console
                    .error(&format!("Failed to create a directory for the Helm installer: {}", e));
                self.log(&format!("Installer temp dir error: {}", e));
                return false;
            }
        };
        let script = dir.path().join(INSTALLER_NAME);
        let url = self.config.helm_install_script_url.clone();

        let installed = self.run(&helm::download_installer(&url, &script)).success
            && self.run(&helm::run_installer(&script)).success;

        if installed {
            self.console.success("Helm installed successfully");
            self.log("Installed helm");
        } else {
            self.console.error("Failed to install Helm");
        }
        installed
    }

    /// Creates or patches the values file and warns when the result no
    /// longer parses as YAML.
    fn prepare_values_file(&mut self, path: &Path, hostname: &str) -> bool {
        match values::write_values_file(path, hostname) {
            Ok(ValuesFileAction::Created) => {
                self.console.success(&format!(
                    "Created default values file: {}",
                    path.display()
                ));
            }
            Ok(ValuesFileAction::Updated) => {
                self.console
                    .success(&format!("Updated values file with hostname: {}", hostname));
            }
            Ok(ValuesFileAction::Unchanged) => {
                self.console.warning(&format!(
                    "No hostname entries found in values file {}; hostname {} was not applied",
                    path.display(),
                    hostname
                ));
                self.log(&format!("Values file {} has no hostname entries", path.display()));
            }
            Err(e) => {
                self.console.error(&format!(
                    "Failed to write values file {}: {}",
                    path.display(),
                    e
                ));
                self.log(&format!("Values file error: {}", e));
                return false;
            }
        }

        if let Ok(content) = fs::read_to_string(path) {
            if let Err(e) = values::check_yaml(&content) {
                self.console.warning(&format!(
                    "Values file {} is not valid YAML: {}",
                    path.display(),
                    e
                ));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::INSTALLER_NAME;
    use crate::app::manager::tests::Harness;
    use crate::config::ManagerConfig;
    use crate::exec::FakeExecutor;
    use crate::values::render_template;
    use std::{env, fs, path::PathBuf};
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ManagerConfig {
        let mut config = ManagerConfig::default();
        config.post_deploy_pause_secs = 0;
        config.values_file = dir
            .path()
            .join("prometheus-values.yaml")
            .display()
            .to_string();
        config
    }

    fn with_namespaces() -> FakeExecutor {
        FakeExecutor::new().succeed(&["kubectl", "get", "namespaces"], "default\nteam-prom\n")
    }

    #[test]
    fn fresh_deploy_writes_template_and_installs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let values = config.values_file.clone();
        let mut h = Harness::with_config(config, with_namespaces(), ["2", "", ""]);

        assert!(h.manager.deploy_prometheus().unwrap());

        assert_eq!(
            fs::read_to_string(&values).unwrap(),
            render_template("team-prom.sctp-sandbox.com")
        );
        assert_eq!(
            h.calls(),
            vec![
                "helm version".to_string(),
                "helm repo add prometheus-community https://prometheus-community.github.io/helm-charts".to_string(),
                "helm repo update".to_string(),
                "kubectl get namespaces -o custom-columns=NAME:.metadata.name --no-headers".to_string(),
                format!(
                    "helm upgrade --install team-prom-prom prometheus-community/prometheus \
                     --version 27.5.1 --values {} --namespace team-prom",
                    values
                ),
                "kubectl get pods -n team-prom".to_string(),
                "kubectl get svc -n team-prom".to_string(),
                "kubectl get ingress -n team-prom".to_string(),
            ]
        );
        let out = h.output();
        assert!(out.contains("not found. Creating a default values file"));
        assert!(out.contains("Prometheus will be accessible at: http://team-prom.sctp-sandbox.com"));
    }

    #[test]
    fn existing_values_file_only_gets_new_hostname() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let values = config.values_file.clone();
        let custom = format!("# keep me\n{}", render_template("old.example.com"));
        fs::write(&values, &custom).unwrap();

        let mut h = Harness::with_config(config, with_namespaces(), ["team-prom", "custom-rel", "new.example.com"]);

        assert!(h.manager.deploy_prometheus().unwrap());
        assert_eq!(
            fs::read_to_string(&values).unwrap(),
            format!("# keep me\n{}", render_template("new.example.com"))
        );
        assert!(h
            .calls()
            .iter()
            .any(|c| c.starts_with("helm upgrade --install custom-rel ")));
        assert!(h.output().contains("Updated values file with hostname: new.example.com"));
    }

    #[test]
    fn values_file_without_hosts_warns_and_still_deploys() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let values = config.values_file.clone();
        fs::write(&values, "server:\n  retention: 30d\n").unwrap();

        let mut h = Harness::with_config(config, with_namespaces(), ["2", "", "new.example.com"]);

        assert!(h.manager.deploy_prometheus().unwrap());
        assert_eq!(fs::read_to_string(&values).unwrap(), "server:\n  retention: 30d\n");
        let out = h.output();
        assert!(out.contains("No hostname entries found in values file"));
        assert!(!out.contains("Updated values file with hostname"));
        assert!(h.calls().iter().any(|c| c.starts_with("helm upgrade --install")));
    }

    #[test]
    fn missing_helm_is_installed_without_a_shell_pipe() {
        let dir = tempfile::tempdir().unwrap();
        let exec = with_namespaces().missing(&["helm", "version"]);
        let mut h = Harness::with_config(config_in(&dir), exec, ["1", "", ""]);

        assert!(h.manager.deploy_prometheus().unwrap());

        let calls = h.executor.calls();
        assert_eq!(calls[1].program(), "curl");
        assert_eq!(
            calls[1].arg_list().last().map(String::as_str),
            Some("https://raw.githubusercontent.com/helm/helm/main/scripts/get-helm-3")
        );
        assert_eq!(calls[2].program(), "bash");
        assert!(h.output().contains("Helm installed successfully"));
    }

    #[test]
    fn helm_installer_goes_to_a_private_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exec = with_namespaces().missing(&["helm", "version"]);
        let mut h = Harness::with_config(config_in(&dir), exec, ["1", "", ""]);

        assert!(h.manager.deploy_prometheus().unwrap());

        let calls = h.executor.calls();
        let downloaded = PathBuf::from(&calls[1].arg_list()[2]);
        let executed = PathBuf::from(&calls[2].arg_list()[0]);
        assert_eq!(downloaded, executed);
        assert_ne!(executed, env::temp_dir().join(INSTALLER_NAME));
        assert_eq!(executed.file_name().and_then(|n| n.to_str()), Some(INSTALLER_NAME));

        let parent = executed.parent().unwrap();
        assert!(parent
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("helm-installer-")));
        assert!(!parent.exists());
    }

    #[test]
    fn failed_helm_install_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let exec = FakeExecutor::new()
            .fail(&["helm", "version"], 127, "")
            .fail(&["curl"], 6, "Could not resolve host");
        let mut h = Harness::with_config(config_in(&dir), exec, Vec::<String>::new());

        assert!(!h.manager.deploy_prometheus().unwrap());
        assert_eq!(h.calls().len(), 2);
        assert!(h.output().contains("Failed to install Helm"));
    }

    #[test]
    fn repo_add_failure_aborts_before_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let exec = FakeExecutor::new().fail(&["helm", "repo", "add"], 1, "network down");
        let mut h = Harness::with_config(config_in(&dir), exec, ["unused"]);

        assert!(!h.manager.deploy_prometheus().unwrap());
        assert!(h.prompter.questions().is_empty());
        assert!(h.output().contains("Failed to add Prometheus Helm repository"));
    }

    #[test]
    fn empty_namespace_runs_no_install() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let values = config.values_file.clone();
        let mut h = Harness::with_config(config, with_namespaces(), [""]);

        assert!(!h.manager.deploy_prometheus().unwrap());
        assert!(!h.calls().iter().any(|c| c.starts_with("helm upgrade")));
        assert!(!std::path::Path::new(&values).exists());
    }

    #[test]
    fn failed_install_skips_status_listing() {
        let dir = tempfile::tempdir().unwrap();
        let exec = with_namespaces().fail(&["helm", "upgrade"], 1, "timed out");
        let mut h = Harness::with_config(config_in(&dir), exec, ["2", "", ""]);

        assert!(!h.manager.deploy_prometheus().unwrap());
        assert!(!h.calls().iter().any(|c| c.starts_with("kubectl get pods")));
        assert!(h.output().contains("Failed to deploy Prometheus to namespace: team-prom"));
    }

    #[test]
    fn unwritable_values_path_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir);
        config.values_file = dir
            .path()
            .join("missing-dir")
            .join("values.yaml")
            .display()
            .to_string();
        let mut h = Harness::with_config(config, with_namespaces(), ["2", "", ""]);

        assert!(!h.manager.deploy_prometheus().unwrap());
        assert!(!h.calls().iter().any(|c| c.starts_with("helm upgrade")));
        assert!(h.output().contains("Failed to write values file"));
    }
}
