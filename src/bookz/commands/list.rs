use crate::commands::{CmdMessage, CmdResult, Command, EMPTY_LIBRARY_MESSAGE};
use crate::error::{CatalogError, Result};
use crate::store::Library;

const MODE_SHORT: &str = "short";
const MODE_LONG: &str = "long";

/// How LIST renders each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// No argument; same rendering as `short`.
    #[default]
    Default,
    Short,
    Long,
}

/// Valid iff the trimmed argument is empty, `short`, or `long`.
pub fn parse(raw: &str) -> Result<Command> {
    let mode = match raw.trim() {
        "" => ListMode::Default,
        MODE_SHORT => ListMode::Short,
        MODE_LONG => ListMode::Long,
        other => {
            return Err(CatalogError::Validation(format!(
                "LIST expects no argument, \"{}\" or \"{}\", got \"{}\"",
                MODE_SHORT, MODE_LONG, other
            )))
        }
    };
    Ok(Command::List { mode })
}

pub fn run(library: &Library, mode: ListMode) -> CmdResult {
    let mut result = CmdResult::default();

    if library.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIBRARY_MESSAGE));
        return result;
    }

    result.add_message(CmdMessage::info(format!(
        "{} books in library:",
        library.len()
    )));

    for entry in library.entries() {
        match mode {
            ListMode::Default | ListMode::Short => {
                result.add_message(CmdMessage::info(entry.title()));
            }
            // Trailing newline separates long-form entries with a blank
            // line when printed.
            ListMode::Long => result.add_message(CmdMessage::info(format!("{}\n", entry))),
        }
    }

    result
}
