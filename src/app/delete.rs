// src/app/delete.rs
use super::manager::default_release_name;
use super::select::resolve_index;
use super::ResourceManager;
use crate::cluster::{helm, kubectl, HelmRelease, ResourceKind};
use crate::error::Result;
use crate::types::DeleteChoice;
use crate::ui::danger;

/// Namespace deletion proceeds only on this exact answer.
const NAMESPACE_DELETE_CONFIRMATION: &str = "yes";

pub fn confirms_namespace_deletion(answer: &str) -> bool {
    answer == NAMESPACE_DELETE_CONFIRMATION
}

impl ResourceManager {
    pub fn delete_resources(&mut self) -> Result<bool> {
        self.console.header("Deleting Kubernetes Resources");
        self.console.numbered(DeleteChoice::ITEMS);
        self.console.line("");

        let choice = self.ask("Enter your choice (1-3)")?;
        match DeleteChoice::parse(&choice) {
            Some(DeleteChoice::Release) => self.delete_release(),
            Some(DeleteChoice::Namespace) => self.delete_namespace(),
            Some(DeleteChoice::Back) => Ok(true),
            None => {
                self.console.error("Invalid choice");
                Ok(false)
            }
        }
    }

    fn delete_release(&mut self) -> Result<bool> {
        let Some(namespace) = self.choose_namespace(
            "Enter namespace number or name containing Prometheus deployment",
            "Enter namespace containing Prometheus deployment",
        )?
        else {
            return Ok(false);
        };
        self.console.info(&format!("Using namespace: {}", namespace));

        let release = self.choose_release(&namespace)?;
        if release.is_empty() {
            self.console.error("Release name cannot be empty");
            return Ok(false);
        }
        if self.reject_option_like("release", &release) {
            return Ok(false);
        }

        if self.run(&helm::uninstall(&release, &namespace)).success {
            self.console.success(&format!(
                "Successfully deleted Prometheus deployment: {}",
                release
            ));
            self.log(&format!("Uninstalled release {} from {}", release, namespace));
            Ok(true)
        } else {
            self.console
                .error(&format!("Failed to delete Prometheus deployment: {}", release));
            Ok(false)
        }
    }

    /// Lists releases in `namespace` and takes a number or name. Any problem
    /// with the listing degrades to a free-text prompt with a default.
    fn choose_release(&mut self, namespace: &str) -> Result<String> {
        self.console.info(&format!(
            "Fetching Helm releases in namespace '{}'...",
            namespace
        ));
        let outcome = self.run_quiet(&helm::list_json(namespace));
        let listing = outcome.output.trim();

        let releases: Vec<HelmRelease> =
            if outcome.success && !listing.is_empty() && listing != "[]" {
                match helm::parse_release_list(listing) {
                    Ok(releases) => releases,
                    Err(e) => {
                        self.console
                            .warning("Could not parse the Helm release list");
                        self.log(&format!("helm list parse error: {}", e));
                        Vec::new()
                    }
                }
            } else {
                Vec::new()
            };

        if releases.is_empty() {
            return self.ask_with_default(
                "Enter Prometheus release name",
                &default_release_name(namespace),
            );
        }

        self.console.info("Available Helm releases:");
        self.console.numbered(
            releases
                .iter()
                .map(|r| format!("{} (Chart: {})", r.name, r.chart)),
        );
        self.console.line("");

        let answer = self.ask("Enter release number or name to delete")?;
        Ok(match resolve_index(&answer, releases.len()) {
            Some(i) => releases[i].name.clone(),
            None => answer,
        })
    }

    fn delete_namespace(&mut self) -> Result<bool> {
        let Some(namespace) = self.choose_namespace(
            "Enter namespace number or name to delete",
            "Enter namespace to delete",
        )?
        else {
            return Ok(false);
        };
        self.console.info(&format!("Selected namespace: {}", namespace));

        self.console
            .info(&format!("Resources in namespace '{}':", namespace));
        self.run(&kubectl::get(ResourceKind::All, &namespace));

        self.console.line("");
        self.console.line(&danger(&format!(
            "WARNING: Are you sure you want to delete namespace '{}'?",
            namespace
        )));
        let confirm = self.ask(
            "This will delete ALL resources in the namespace and CANNOT be undone. (yes/no)",
        )?;
        if !confirms_namespace_deletion(&confirm) {
            self.console.info("Namespace deletion cancelled");
            return Ok(false);
        }

        if self.run(&kubectl::delete_namespace(&namespace)).success {
            self.console
                .success(&format!("Successfully deleted namespace: {}", namespace));
            self.log(&format!("Deleted namespace {}", namespace));
            Ok(true)
        } else {
            self.console
                .error(&format!("Failed to delete namespace: {}", namespace));
            Ok(false)
        }
    }
}
