use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::BookEntry;
use crate::store::Library;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod add;
pub mod group;
pub mod list;
pub mod remove;
pub mod search;

/// Printed whenever a command runs against an empty library.
pub const EMPTY_LIBRARY_MESSAGE: &str = "The library has no book entries.";

/// The dispatch keyword of a command line, before its arguments are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    List,
    Group,
    Remove,
    Search,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            CommandKind::Add => "ADD",
            CommandKind::List => "LIST",
            CommandKind::Group => "GROUP",
            CommandKind::Remove => "REMOVE",
            CommandKind::Search => "SEARCH",
        };
        write!(f, "{}", keyword)
    }
}

impl FromStr for CommandKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ADD" => Ok(CommandKind::Add),
            "LIST" => Ok(CommandKind::List),
            "GROUP" => Ok(CommandKind::Group),
            "REMOVE" => Ok(CommandKind::Remove),
            "SEARCH" => Ok(CommandKind::Search),
            other => Err(CatalogError::Validation(format!(
                "Unknown command: {}",
                other
            ))),
        }
    }
}

/// The dimension GROUP buckets by and REMOVE matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Title,
    Author,
}

impl EntryField {
    /// Exact-match parse of the TITLE / AUTHOR keywords.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "TITLE" => Some(EntryField::Title),
            "AUTHOR" => Some(EntryField::Author),
            _ => None,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryField::Title => write!(f, "TITLE"),
            EntryField::Author => write!(f, "AUTHOR"),
        }
    }
}

/// A validated, executable command.
///
/// Values of this type only exist after [`Command::parse`] has accepted the
/// raw argument text, so execution never observes unvalidated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { path: PathBuf },
    List { mode: list::ListMode },
    Group { field: EntryField },
    Remove { field: EntryField, term: String },
    Search { term: String },
}

impl Command {
    /// Validate raw argument text into a command of the given kind.
    ///
    /// Fails with a human-readable reason when the text does not match the
    /// kind's grammar; nothing is constructed on failure.
    pub fn parse(kind: CommandKind, raw: &str, config: &CatalogConfig) -> Result<Command> {
        match kind {
            CommandKind::Add => add::parse(raw, config),
            CommandKind::List => list::parse(raw),
            CommandKind::Group => group::parse(raw),
            CommandKind::Remove => remove::parse(raw),
            CommandKind::Search => search::parse(raw),
        }
    }

    /// Run the command against the library.
    pub fn execute(&self, library: &mut Library) -> CmdResult {
        match self {
            Command::Add { path } => add::run(library, path),
            Command::List { mode } => list::run(library, *mode),
            Command::Group { field } => group::run(library, *field),
            Command::Remove { field, term } => remove::run(library, *field, term),
            Command::Search { term } => search::run(library, term),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command execution.
///
/// `messages` holds every output line in print order; `affected_entries`
/// carries the records a mutating command removed.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<BookEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<BookEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    /// The message contents in print order, for callers that only need text.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
