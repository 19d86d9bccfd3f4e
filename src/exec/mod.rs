// src/exec/mod.rs
mod command;
mod runner;

pub use command::CommandLine;
pub use runner::{CommandOutcome, CommandRunner, Executor, ProcessExecutor};

#[cfg(test)]
pub(crate) use runner::tests::FakeExecutor;
