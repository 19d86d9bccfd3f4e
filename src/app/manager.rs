// src/app/manager.rs
use crate::config::ManagerConfig;
use crate::error::{ManagerError, Result};
use crate::exec::{CommandLine, CommandOutcome, CommandRunner, Executor};
use crate::ui::{Console, Prompter};
use crate::utils::logging::Logger;

/// Everything a handler needs: defaults, terminal output, the answer source
/// and the command runner. Handlers live in sibling modules as `impl` blocks.
pub struct ResourceManager {
    pub config: ManagerConfig,
    pub(crate) console: Console,
    prompter: Box<dyn Prompter>,
    runner: CommandRunner,
    logger: Box<dyn Logger>,
}

impl ResourceManager {
    pub fn new(
        config: ManagerConfig,
        console: Console,
        prompter: Box<dyn Prompter>,
        executor: Box<dyn Executor>,
        logger: Box<dyn Logger>,
    ) -> Self {
        Self {
            config,
            console,
            prompter,
            runner: CommandRunner::new(executor),
            logger,
        }
    }

    pub fn log(&mut self, message: &str) {
        self.logger.log(message);
    }

    /// Runs `command` and prints its stdout.
    pub(crate) fn run(&mut self, command: &CommandLine) -> CommandOutcome {
        self.runner
            .run(&mut self.console, self.logger.as_mut(), command, true)
    }

    /// Runs `command` keeping stdout for the caller only.
    pub(crate) fn run_quiet(&mut self, command: &CommandLine) -> CommandOutcome {
        self.runner
            .run(&mut self.console, self.logger.as_mut(), command, false)
    }

    pub(crate) fn ask(&mut self, question: &str) -> Result<String> {
        self.prompter.ask(question)
    }

    pub(crate) fn ask_with_default(&mut self, question: &str, default: &str) -> Result<String> {
        self.prompter.ask_with_default(question, default)
    }

    /// Prints an error and returns `true` when `name` would be read as a flag
    /// by the external CLIs.
    pub(crate) fn reject_option_like(&mut self, kind: &'static str, name: &str) -> bool {
        if !name.starts_with('-') {
            return false;
        }
        let err = ManagerError::InvalidName {
            kind,
            name: name.to_string(),
        };
        self.console.error(&err.to_string());
        self.logger.log(&err.to_string());
        true
    }
}

/// `<namespace>-prom`
pub fn default_release_name(namespace: &str) -> String {
    format!("{}-prom", namespace)
}
