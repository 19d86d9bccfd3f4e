// src/app/status.rs
use super::ResourceManager;
use crate::cluster::{helm, kubectl, ResourceKind};
use crate::error::Result;
use crate::types::StatusView;

impl ResourceManager {
    /// Read-only views over one namespace. Always returns `true` once a
    /// namespace was chosen; listing failures are shown, not propagated.
    pub fn check_resource_status(&mut self) -> Result<bool> {
        self.console.header("Resource Status Check");

        let Some(namespace) = self.choose_namespace(
            "Enter namespace number or name to check",
            "Enter namespace to check",
        )?
        else {
            return Ok(false);
        };
        self.console
            .info(&format!("Checking resources in namespace: {}", namespace));

        self.console.line("");
        self.console.line("Select resource type to check:");
        self.console.numbered(StatusView::ITEMS);
        self.console.line("");

        let choice = self.ask("Enter your choice (1-7)")?;
        match StatusView::parse(&choice) {
            Some(StatusView::Summary) => {
                self.console
                    .info(&format!("All resources in namespace '{}':", namespace));
                self.run(&kubectl::get(ResourceKind::All, &namespace));
                self.run(&kubectl::get(ResourceKind::Ingresses, &namespace));
                self.run(&helm::list(&namespace));
            }
            Some(StatusView::Resource(kind)) => self.show_resource(kind, &namespace)?,
            Some(StatusView::Releases) => self.show_releases(&namespace)?,
            Some(StatusView::Events) => {
                self.console.info(&format!(
                    "Events in namespace '{}' (most recent first):",
                    namespace
                ));
                self.run(&kubectl::events(&namespace));
            }
            None => self.console.error("Invalid choice"),
        }

        Ok(true)
    }

    /// Lists one kind, then optionally describes a named object. Pods also
    /// offer their logs.
    fn show_resource(&mut self, kind: ResourceKind, namespace: &str) -> Result<()> {
        self.console
            .info(&format!("{} in namespace '{}':", kind.title(), namespace));
        self.run(&kubectl::get(kind, namespace));

        self.console.line("");
        let name = self.ask(&format!(
            "Enter {} name to see details (or press Enter to skip)",
            kind.singular()
        ))?;
        if name.is_empty() || self.reject_option_like(kind.singular(), &name) {
            return Ok(());
        }

        if let Some(describe) = kubectl::describe(kind, &name, namespace) {
            self.run(&describe);
        }

        if kind == ResourceKind::Pods {
            self.console.line("");
            let show_logs = self.ask("Do you want to see logs for this pod? (y/n)")?;
            if show_logs.eq_ignore_ascii_case("y") {
                self.run(&kubectl::logs(&name, namespace));
            }
        }
        Ok(())
    }

    fn show_releases(&mut self, namespace: &str) -> Result<()> {
        self.console
            .info(&format!("Helm releases in namespace '{}':", namespace));
        self.run(&helm::list(namespace));

        self.console.line("");
        let release = self.ask("Enter release name to see details (or press Enter to skip)")?;
        if release.is_empty() || self.reject_option_like("release", &release) {
            return Ok(());
        }
        self.run(&helm::status(&release, namespace));
        Ok(())
    }
}
