// src/app/select.rs
use super::ResourceManager;
use crate::cluster::kubectl;
use crate::error::Result;

/// Maps an answer to a 0-based index when it is a plain number within
/// `1..=len`. Anything else (signs, spaces, overflow, zero) is not an index.
pub fn resolve_index(input: &str, len: usize) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// The listed entry the answer points at, or the answer itself as a name.
pub fn resolve_selection(items: &[String], input: &str) -> String {
    match resolve_index(input, items.len()) {
        Some(i) => items[i].clone(),
        None => input.to_string(),
    }
}

impl ResourceManager {
    /// Lists namespaces and lets the operator pick one by number or name.
    /// Falls back to a free-text prompt when the listing is unavailable.
    /// Returns `None` after reporting an empty or flag-like answer.
    pub(crate) fn choose_namespace(
        &mut self,
        list_prompt: &str,
        manual_prompt: &str,
    ) -> Result<Option<String>> {
        self.console.info("Fetching available namespaces...");
        let outcome = self.run_quiet(&kubectl::list_namespace_names());
        let namespaces = if outcome.success {
            kubectl::parse_namespace_names(&outcome.output)
        } else {
            Vec::new()
        };

        let namespace = if namespaces.is_empty() {
            self.ask(manual_prompt)?
        } else {
            self.console.info("Available namespaces:");
            self.console.numbered(&namespaces);
            self.console.line("");
            let answer = self.ask(list_prompt)?;
            resolve_selection(&namespaces, &answer)
        };

        if namespace.is_empty() {
            self.console.error("Namespace cannot be empty");
            return Ok(None);
        }
        if self.reject_option_like("namespace", &namespace) {
            return Ok(None);
        }
        Ok(Some(namespace))
    }
}
