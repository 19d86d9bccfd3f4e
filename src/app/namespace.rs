// src/app/namespace.rs
use super::ResourceManager;
use crate::cluster::kubectl;
use crate::error::Result;

/// `<username>-<purpose>`
pub fn derive_namespace(username: &str, purpose: &str) -> String {
    format!("{}-{}", username, purpose)
}

impl ResourceManager {
    pub fn create_namespace(&mut self) -> Result<bool> {
        self.console.header("Creating Kubernetes Namespace");

        let username = self.ask("Enter your username or identifier (e.g., 'azni')")?;
        if username.is_empty() {
            self.console.error("Username cannot be empty");
            return Ok(false);
        }

        let purpose = self.ask("Enter namespace purpose (e.g., 'eks', 'prom', 'app')")?;
        if purpose.is_empty() {
            self.console.error("Purpose cannot be empty");
            return Ok(false);
        }

        let namespace = derive_namespace(&username, &purpose);
        if self.reject_option_like("namespace", &namespace) {
            return Ok(false);
        }
        self.console
            .info(&format!("Generated namespace name: {}", namespace));

        let confirm = self.ask(&format!("Create namespace '{}'? (y/n)", namespace))?;
        if !confirm.eq_ignore_ascii_case("y") {
            self.console.info("Namespace creation cancelled");
            return Ok(false);
        }

        if self.run(&kubectl::create_namespace(&namespace)).success {
            self.console
                .success(&format!("Successfully created namespace: {}", namespace));
            self.log(&format!("Created namespace {}", namespace));
            Ok(true)
        } else {
            self.console
                .error(&format!("Failed to create namespace: {}", namespace));
            Ok(false)
        }
    }
}
