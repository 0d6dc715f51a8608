//! # API Facade
//!
//! Thin entry point over the command layer. The facade owns the library
//! and the validation config, dispatches raw text to the right command
//! constructor, and returns structured results. It never touches stdout or
//! stderr; rendering belongs to whatever shell sits on top.

use crate::commands::{CmdResult, Command, CommandKind};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::Library;

pub struct CatalogApi {
    library: Library,
    config: CatalogConfig,
}

impl CatalogApi {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            library: Library::new(),
            config,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Validate and execute one command. Construction failures surface as
    /// errors before the library is touched.
    pub fn run_command(&mut self, kind: CommandKind, raw: &str) -> Result<CmdResult> {
        let command = Command::parse(kind, raw, &self.config)?;
        Ok(command.execute(&mut self.library))
    }

    /// Split one line of free text into keyword and argument text, then run
    /// it. The keyword is everything up to the first whitespace.
    pub fn run_line(&mut self, line: &str) -> Result<CmdResult> {
        let line = line.trim();
        let (keyword, raw) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };
        let kind: CommandKind = keyword.parse()?;
        self.run_command(kind, raw)
    }
}

impl Default for CatalogApi {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
