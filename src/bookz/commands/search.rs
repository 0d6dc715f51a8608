use crate::commands::{CmdMessage, CmdResult, Command};
use crate::error::{CatalogError, Result};
use crate::store::Library;

/// Valid iff the trimmed argument is a single non-empty word.
pub fn parse(raw: &str) -> Result<Command> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(CatalogError::Validation(format!(
            "SEARCH expects a single non-empty word, got \"{}\"",
            trimmed
        )));
    }
    Ok(Command::Search {
        term: trimmed.to_string(),
    })
}

/// Print every title containing the term as a case-insensitive substring,
/// in collection order.
pub fn run(library: &Library, term: &str) -> CmdResult {
    let mut result = CmdResult::default();
    let term_lower = term.to_lowercase();

    let mut hits = 0;
    for entry in library.entries() {
        if entry.title().to_lowercase().contains(&term_lower) {
            result.add_message(CmdMessage::info(entry.title()));
            hits += 1;
        }
    }

    if hits == 0 {
        result.add_message(CmdMessage::info(format!(
            "No hits found for search term: {}",
            term
        )));
    }

    result
}
