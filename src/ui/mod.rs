// src/ui/mod.rs
mod console;
mod prompt;
mod styles;

pub use console::Console;
pub use prompt::{Prompter, TerminalPrompter};
pub use styles::{danger, styled, Level};
