// src/app/run.rs
use super::ResourceManager;
use crate::error::{ManagerError, Result};
use crate::types::MenuChoice;

/// Shows the main menu until the operator exits. Handler failures are
/// reported and the menu comes back; only closed input ends the loop early.
pub fn run_menu(manager: &mut ResourceManager) -> Result<()> {
    loop {
        manager.console.header("Kubernetes Resource Manager");
        manager.console.numbered(MenuChoice::ITEMS);
        manager.console.line("");

        let answer = match manager.ask("Enter your choice (1-6)") {
            Ok(answer) => answer,
            Err(ManagerError::InputClosed) => return Err(ManagerError::InputClosed),
            Err(e) => {
                report_prompt_error(manager, &e);
                continue;
            }
        };
        let choice = MenuChoice::parse(&answer);
        let outcome = match choice {
            Some(MenuChoice::Exit) => {
                manager.console.info("Exiting...");
                manager.log("Session ended");
                return Ok(());
            }
            Some(MenuChoice::Connect) => manager.connect_to_cluster(),
            Some(MenuChoice::CreateNamespace) => manager.create_namespace(),
            Some(MenuChoice::Deploy) => manager.deploy_prometheus(),
            Some(MenuChoice::Status) => manager.check_resource_status(),
            Some(MenuChoice::Delete) => manager.delete_resources(),
            None => {
                manager.console.error("Invalid choice");
                Ok(false)
            }
        };

        match outcome {
            Ok(success) => {
                if let Some(choice) = choice {
                    manager.log(&format!(
                        "{:?} {}",
                        choice,
                        if success { "succeeded" } else { "did not complete" }
                    ));
                }
            }
            Err(ManagerError::InputClosed) => return Err(ManagerError::InputClosed),
            Err(e) => {
                manager.console.error(&format!("Error: {}", e));
                manager.log(&format!("Handler error: {}", e));
            }
        }

        manager.console.line("");
        match manager.ask("Press Enter to continue...") {
            Ok(_) => {}
            Err(ManagerError::InputClosed) => return Err(ManagerError::InputClosed),
            Err(e) => report_prompt_error(manager, &e),
        }
    }
}

fn report_prompt_error(manager: &mut ResourceManager, e: &ManagerError) {
    manager.console.error(&format!("Could not read input: {}", e));
    manager.log(&format!("Prompt error: {}", e));
}
