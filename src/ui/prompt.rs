// src/ui/prompt.rs
use crate::error::{ManagerError, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of answers to interactive questions.
pub trait Prompter: Send {
    /// Returns the raw answer without the trailing newline. An empty string
    /// means the operator just pressed Enter.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Like [`Prompter::ask`] but substitutes `default` for an empty answer.
    fn ask_with_default(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} (default: {})", question, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

/// Reads from the controlling terminal with dialoguer, or line by line from
/// stdin when input is piped.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask_piped(question: &str) -> Result<String> {
        print!("{}: ", question);
        let _ = io::stdout().flush();

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ManagerError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return Self::ask_piped(question);
        }

        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|_| ManagerError::InputClosed)
    }
}
