// src/main.rs
mod app;
mod cluster;
mod config;
mod error;
mod exec;
mod types;
mod ui;
mod utils;
mod values;

use app::ResourceManager;
use clap::Parser;
use config::ManagerConfig;
use exec::ProcessExecutor;
use types::Args;
use ui::{styled, Console, Level, TerminalPrompter};
use utils::logging::{default_log_path, FileLogger, Logger, NullLogger};

fn build_logger(args: &Args) -> Box<dyn Logger> {
    let path = match &args.log_file {
        Some(path) => shellexpand::tilde(path).to_string().into(),
        None => default_log_path(),
    };

    match FileLogger::new(&path, args.debug) {
        Ok(mut logger) => {
            let location = logger.path().display().to_string();
            logger.log(&format!("Session started, logging to {}", location));
            Box::new(logger)
        }
        Err(e) => {
            eprintln!(
                "{}",
                styled(
                    Level::Warning,
                    &format!("Cannot open log file {}: {}", path.display(), e)
                )
            );
            Box::new(NullLogger)
        }
    }
}

fn load_config(args: &Args, console: &mut Console, logger: &mut dyn Logger) -> ManagerConfig {
    let Some(path) = &args.config else {
        return ManagerConfig::default();
    };

    let path = shellexpand::tilde(path).to_string();
    match ManagerConfig::load_from_file(&path) {
        Ok(config) => {
            logger.log(&format!("Loaded configuration from {}", path));
            config
        }
        Err(e) => {
            console.warning(&format!("{}; using built-in defaults", e));
            logger.log(&format!("Config load failed: {}", e));
            ManagerConfig::default()
        }
    }
}

fn report_cancelled() {
    println!();
    println!("{}", styled(Level::Info, "Operation cancelled by user"));
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let mut console = Console::stdout();
    let mut logger = build_logger(&args);
    let config = load_config(&args, &mut console, logger.as_mut());

    let mut manager = ResourceManager::new(
        config,
        console,
        Box::new(TerminalPrompter::new()),
        Box::new(ProcessExecutor),
        logger,
    );

    // The menu blocks on stdin and child processes, so it runs off the
    // async workers while Ctrl-C is awaited here.
    let menu = tokio::task::spawn_blocking(move || app::run_menu(&mut manager));

    tokio::select! {
        result = menu => match result {
            Ok(Ok(())) => {}
            Ok(Err(_)) => report_cancelled(),
            Err(e) => eprintln!("{}", styled(Level::Error, &format!("Menu task failed: {}", e))),
        },
        _ = tokio::signal::ctrl_c() => report_cancelled(),
    }

    // The blocking reader may still be parked on stdin; do not wait for it
    std::process::exit(0);
}
