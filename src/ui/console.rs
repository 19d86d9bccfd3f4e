// src/ui/console.rs
use super::styles::{header_lines, styled, Level};
use std::io::{self, Write};

/// Terminal output sink. Write failures are ignored; a closed stdout must
/// not stop the operator from finishing a destructive step.
pub struct Console {
    out: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn header(&mut self, title: &str) {
        self.line("");
        for line in header_lines(title) {
            self.line(&line);
        }
        self.line("");
    }

    pub fn success(&mut self, text: &str) {
        self.leveled(Level::Success, text);
    }

    pub fn error(&mut self, text: &str) {
        self.leveled(Level::Error, text);
    }

    pub fn info(&mut self, text: &str) {
        self.leveled(Level::Info, text);
    }

    pub fn warning(&mut self, text: &str) {
        self.leveled(Level::Warning, text);
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    /// Numbered list, 1-indexed, one entry per line.
    pub fn numbered<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, item) in items.into_iter().enumerate() {
            self.line(&format!("{}. {}", i + 1, item.as_ref()));
        }
    }

    fn leveled(&mut self, level: Level, text: &str) {
        let styled = styled(level, text);
        self.line(&styled);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Write target that can be read back after the console is consumed.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(pub(crate) Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn capture() -> (Console, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Console::new(Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn numbered_list_is_one_indexed() {
        let (mut console, buffer) = capture();
        console.numbered(["default", "kube-system"]);
        assert_eq!(buffer.contents(), "1. default\n2. kube-system\n");
    }

    #[test]
    fn header_prints_title_between_rules() {
        let (mut console, buffer) = capture();
        console.header("Resource Status Check");
        let out = buffer.contents();
        assert!(out.contains("Resource Status Check"));
        assert_eq!(out.matches(&"=".repeat(60)).count(), 2);
    }
}
