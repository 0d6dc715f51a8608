use crate::commands::{CmdMessage, CmdResult, Command};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::Library;
use std::path::{Path, PathBuf};

/// Valid iff the trimmed argument ends with the configured record-source
/// extension (".csv" by default).
pub fn parse(raw: &str, config: &CatalogConfig) -> Result<Command> {
    let trimmed = raw.trim();
    if trimmed.ends_with(&config.data_extension) {
        Ok(Command::Add {
            path: PathBuf::from(trimmed),
        })
    } else {
        Err(CatalogError::Validation(format!(
            "ADD expects a path ending in {}, got \"{}\"",
            config.data_extension, trimmed
        )))
    }
}

/// Load the source and merge its entries into the library. Load failures
/// are reported as a single diagnostic message, never raised.
pub fn run(library: &mut Library, path: &Path) -> CmdResult {
    let mut result = CmdResult::default();
    if let Err(e) = library.load_data(path) {
        result.add_message(CmdMessage::error(format!("ERROR: {}", e)));
    }
    result
}
