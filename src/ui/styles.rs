// src/ui/styles.rs
use crossterm::style::Stylize;

pub const HEADER_WIDTH: usize = 60;

/// Semantic level of a console line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Header,
    Success,
    Error,
    Info,
    Warning,
}

impl Level {
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Level::Header => None,
            Level::Success => Some("✓"),
            Level::Error => Some("✗"),
            Level::Info => Some("ℹ"),
            Level::Warning => Some("⚠"),
        }
    }
}

/// Returns `text` prefixed with the level's symbol and wrapped in its colour.
pub fn styled(level: Level, text: &str) -> String {
    let body = match level.symbol() {
        Some(symbol) => format!("{} {}", symbol, text),
        None => text.to_string(),
    };

    match level {
        Level::Header => body.magenta().bold().to_string(),
        Level::Success => body.green().bold().to_string(),
        Level::Error => body.red().bold().to_string(),
        Level::Info => body.blue().to_string(),
        Level::Warning => body.yellow().to_string(),
    }
}

/// Red bold text without a symbol, used for the destructive confirmation.
pub fn danger(text: &str) -> String {
    text.red().bold().to_string()
}

/// Three header lines: a rule, the centred title, a rule.
pub fn header_lines(title: &str) -> [String; 3] {
    let rule = "=".repeat(HEADER_WIDTH);
    [
        styled(Level::Header, &rule),
        styled(Level::Header, &format!("{:^width$}", title, width = HEADER_WIDTH)),
        styled(Level::Header, &rule),
    ]
}
