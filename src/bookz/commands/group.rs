use crate::commands::{CmdMessage, CmdResult, Command, EntryField, EMPTY_LIBRARY_MESSAGE};
use crate::error::{CatalogError, Result};
use crate::model::BookEntry;
use crate::store::Library;
use std::collections::BTreeMap;

const GROUP_PREFIX: &str = "## ";
const GROUP_ELEMENT_PREFIX: &str = "\t";
/// Label for titles whose first character is a digit.
const DIGIT_GROUP: &str = "[0-9]";

/// Valid iff the trimmed argument is exactly `TITLE` or `AUTHOR`.
pub fn parse(raw: &str) -> Result<Command> {
    let trimmed = raw.trim();
    EntryField::parse(trimmed)
        .map(|field| Command::Group { field })
        .ok_or_else(|| {
            CatalogError::Validation(format!(
                "GROUP expects TITLE or AUTHOR, got \"{}\"",
                trimmed
            ))
        })
}

pub fn run(library: &Library, field: EntryField) -> CmdResult {
    let mut result = CmdResult::default();

    if library.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_LIBRARY_MESSAGE));
        return result;
    }

    result.add_message(CmdMessage::info(format!("Grouped data by {}", field)));

    let index = match field {
        EntryField::Title => group_by_title(library.entries()),
        EntryField::Author => group_by_author(library.entries()),
    };

    // BTreeMap iteration yields labels sorted lexicographically ascending.
    for (label, titles) in index {
        result.add_message(CmdMessage::info(format!("{}{}", GROUP_PREFIX, label)));
        for title in titles {
            result.add_message(CmdMessage::info(format!(
                "{}{}",
                GROUP_ELEMENT_PREFIX, title
            )));
        }
    }

    result
}

/// Bucket every title under its uppercased initial, or under the digit
/// group when the title starts with a digit. Titles keep collection order
/// within each bucket.
fn group_by_title(entries: &[BookEntry]) -> BTreeMap<String, Vec<&str>> {
    let mut index: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for entry in entries {
        index
            .entry(title_group_label(entry.title()))
            .or_default()
            .push(entry.title());
    }
    index
}

fn title_group_label(title: &str) -> String {
    // Titles are validated non-empty at construction.
    match title.chars().next() {
        Some(c) if c.is_ascii_digit() => DIGIT_GROUP.to_string(),
        Some(c) => c.to_uppercase().collect(),
        None => DIGIT_GROUP.to_string(),
    }
}

/// Bucket every title once under each of its distinct authors.
fn group_by_author(entries: &[BookEntry]) -> BTreeMap<String, Vec<&str>> {
    let mut index: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for entry in entries {
        let mut seen: Vec<&str> = Vec::new();
        for author in entry.authors() {
            if seen.contains(&author.as_str()) {
                continue;
            }
            seen.push(author);
            index
                .entry(author.clone())
                .or_default()
                .push(entry.title());
        }
    }
    index
}
