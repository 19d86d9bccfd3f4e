// src/exec/runner.rs
use super::CommandLine;
use crate::ui::Console;
use crate::utils::logging::Logger;
use std::io;
use std::process::Command;

/// Captured result of a process that ran to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawns a command and waits for it. `Err` means the process never ran.
pub trait Executor: Send {
    fn execute(&mut self, command: &CommandLine) -> io::Result<ExecOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&mut self, command: &CommandLine) -> io::Result<ExecOutput> {
        let output = Command::new(command.program())
            .args(command.arg_list())
            .output()?;

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// What a caller gets back: a flag and the text worth looking at (stdout on
/// success, stderr or the spawn error otherwise).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub output: String,
}

impl CommandOutcome {
    fn ok(output: String) -> Self {
        Self {
            success: true,
            output,
        }
    }

    fn failed(output: String) -> Self {
        Self {
            success: false,
            output,
        }
    }
}

pub struct CommandRunner {
    executor: Box<dyn Executor>,
}

impl CommandRunner {
    pub fn new(executor: Box<dyn Executor>) -> Self {
        Self { executor }
    }

    /// Runs `command`, reporting progress and failures on `console`.
    /// Never fails: every problem is folded into the returned outcome.
    pub fn run(
        &mut self,
        console: &mut Console,
        logger: &mut dyn Logger,
        command: &CommandLine,
        show_output: bool,
    ) -> CommandOutcome {
        console.info(&format!("Running: {}", command));
        logger.log(&format!("Running: {}", command));
        logger.debug_log(&format!("argv: {:?}", command.argv()));

        let output = match self.executor.execute(command) {
            Ok(output) => output,
            Err(e) => {
                console.error(&format!("An error occurred: {}", e));
                logger.log(&format!("Failed to start {}: {}", command.program(), e));
                return CommandOutcome::failed(e.to_string());
            }
        };

        if !output.stdout.is_empty() {
            logger.debug_log(&format!("stdout: {}", output.stdout.trim_end()));
        }
        if !output.stderr.is_empty() {
            logger.debug_log(&format!("stderr: {}", output.stderr.trim_end()));
        }

        if output.success() {
            logger.log(&format!("Command succeeded: {}", command));
            if show_output && !output.stdout.is_empty() {
                console.line(output.stdout.trim_end_matches('\n'));
            }
            return CommandOutcome::ok(output.stdout);
        }

        match output.code {
            Some(code) => {
                console.error(&format!("Command failed with exit code {}", code));
                logger.log(&format!("Command failed with exit code {}: {}", code, command));
            }
            None => {
                console.error("Command terminated by signal");
                logger.log(&format!("Command terminated by signal: {}", command));
            }
        }
        if !output.stderr.is_empty() {
            console.error(&format!("Error: {}", output.stderr.trim_end()));
        }
        if show_output && !output.stdout.is_empty() {
            console.line(output.stdout.trim_end_matches('\n'));
        }

        CommandOutcome::failed(output.stderr)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ui::testing::capture;
    use crate::utils::logging::tests::MemoryLogger;
    use std::sync::{Arc, Mutex};

    enum Reply {
        Output(ExecOutput),
        SpawnError(io::ErrorKind, String),
    }

    /// Records every command and answers from prefix rules. Commands that
    /// match no rule succeed with empty output.
    #[derive(Clone, Default)]
    pub(crate) struct FakeExecutor {
        rules: Arc<Mutex<Vec<(Vec<String>, Reply)>>>,
        calls: Arc<Mutex<Vec<CommandLine>>>,
    }

    impl FakeExecutor {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        fn rule(self, prefix: &[&str], reply: Reply) -> Self {
            self.rules
                .lock()
                .unwrap()
                .push((prefix.iter().map(|s| s.to_string()).collect(), reply));
            self
        }

        pub(crate) fn succeed(self, prefix: &[&str], stdout: &str) -> Self {
            self.rule(
                prefix,
                Reply::Output(ExecOutput {
                    code: Some(0),
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                }),
            )
        }

        pub(crate) fn fail(self, prefix: &[&str], code: i32, stderr: &str) -> Self {
            self.rule(
                prefix,
                Reply::Output(ExecOutput {
                    code: Some(code),
                    stdout: String::new(),
                    stderr: stderr.to_string(),
                }),
            )
        }

        pub(crate) fn missing(self, prefix: &[&str]) -> Self {
            self.rule(
                prefix,
                Reply::SpawnError(io::ErrorKind::NotFound, "No such file or directory".into()),
            )
        }

        pub(crate) fn calls(&self) -> Vec<CommandLine> {
            self.calls.lock().unwrap().clone()
        }

        /// Calls rendered as display strings, convenient for assertions.
        pub(crate) fn call_strings(&self) -> Vec<String> {
            self.calls().iter().map(ToString::to_string).collect()
        }
    }

    impl Executor for FakeExecutor {
        fn execute(&mut self, command: &CommandLine) -> io::Result<ExecOutput> {
            self.calls.lock().unwrap().push(command.clone());
            let argv = command.argv();
            let rules = self.rules.lock().unwrap();
            for (prefix, reply) in rules.iter() {
                if argv.len() >= prefix.len() && argv.iter().zip(prefix).all(|(a, p)| *a == p.as_str()) {
                    return match reply {
                        Reply::Output(output) => Ok(output.clone()),
                        Reply::SpawnError(kind, msg) => Err(io::Error::new(*kind, msg.clone())),
                    };
                }
            }
            Ok(ExecOutput {
                code: Some(0),
                ..ExecOutput::default()
            })
        }
    }

    fn run_with(executor: FakeExecutor, show_output: bool) -> (CommandOutcome, String, Vec<String>) {
        let (mut console, buffer) = capture();
        let logger = MemoryLogger::default();
        let mut log_handle = logger.clone();
        let mut runner = CommandRunner::new(Box::new(executor));
        let cmd = CommandLine::new("kubectl").args(["get", "pods"]);
        let outcome = runner.run(&mut console, &mut log_handle, &cmd, show_output);
        let lines = logger.lines.lock().unwrap().clone();
        (outcome, buffer.contents(), lines)
    }

    #[test]
    fn success_returns_stdout_and_prints_it() {
        let exec = FakeExecutor::new().succeed(&["kubectl"], "pod-a Running\n");
        let (outcome, out, log) = run_with(exec, true);

        assert!(outcome.success);
        assert_eq!(outcome.output, "pod-a Running\n");
        assert!(out.contains("Running: kubectl get pods"));
        assert!(out.contains("pod-a Running"));
        assert!(log.iter().any(|l| l == "Running: kubectl get pods"));
    }

    #[test]
    fn hidden_output_is_not_printed() {
        let exec = FakeExecutor::new().succeed(&["kubectl"], "secret-listing\n");
        let (outcome, out, _) = run_with(exec, false);

        assert!(outcome.success);
        assert!(!out.contains("secret-listing"));
    }

    #[test]
    fn nonzero_exit_reports_code_and_stderr() {
        let exec = FakeExecutor::new().fail(&["kubectl"], 1, "forbidden\n");
        let (outcome, out, _) = run_with(exec, true);

        assert!(!outcome.success);
        assert_eq!(outcome.output, "forbidden\n");
        assert!(out.contains("Command failed with exit code 1"));
        assert!(out.contains("Error: forbidden"));
    }

    #[test]
    fn missing_binary_is_folded_into_outcome() {
        let exec = FakeExecutor::new().missing(&["kubectl"]);
        let (outcome, out, _) = run_with(exec, true);

        assert!(!outcome.success);
        assert!(outcome.output.contains("No such file"));
        assert!(out.contains("An error occurred:"));
    }

    #[test]
    fn process_executor_reports_missing_binary_as_spawn_error() {
        let mut executor = ProcessExecutor;
        let cmd = CommandLine::new("definitely-not-a-real-binary-k8s-rm");
        assert!(executor.execute(&cmd).is_err());
    }
}
