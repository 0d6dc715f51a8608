use crate::commands::{CmdMessage, CmdResult, Command, EntryField};
use crate::error::{CatalogError, Result};
use crate::store::Library;

const MIN_TOKENS: usize = 2;

/// Valid iff the trimmed argument starts with `TITLE` or `AUTHOR` followed
/// by a non-empty removal term.
pub fn parse(raw: &str) -> Result<Command> {
    let trimmed = raw.trim();

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Err(CatalogError::Validation(format!(
            "REMOVE expects TITLE or AUTHOR followed by a removal term, got \"{}\"",
            trimmed
        )));
    }

    let field = EntryField::parse(tokens[0]).ok_or_else(|| {
        CatalogError::Validation(format!(
            "REMOVE expects TITLE or AUTHOR as its first word, got \"{}\"",
            tokens[0]
        ))
    })?;

    // Everything after the first token and its separator, trimmed, is the
    // term; inner whitespace is preserved.
    let term = trimmed[tokens[0].len()..].trim();
    if term.is_empty() {
        return Err(CatalogError::Validation(
            "REMOVE expects a non-empty removal term".to_string(),
        ));
    }

    Ok(Command::Remove {
        field,
        term: term.to_string(),
    })
}

pub fn run(library: &mut Library, field: EntryField, term: &str) -> CmdResult {
    match field {
        EntryField::Title => remove_title(library, term),
        EntryField::Author => remove_author(library, term),
    }
}

/// Remove the first entry whose title equals the term exactly.
fn remove_title(library: &mut Library, term: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match library.remove_first_by(|e| e.title() == term) {
        Some(removed) => {
            result.add_message(CmdMessage::success(format!(
                "{}: removed successfully.",
                term
            )));
            result.affected_entries.push(removed);
        }
        None => result.add_message(CmdMessage::warning(format!("{}: not found.", term))),
    }
    result
}

/// Remove every entry naming the term among its authors.
fn remove_author(library: &mut Library, term: &str) -> CmdResult {
    let removed = library.remove_all_by(|e| e.authors().iter().any(|a| a == term));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} books removed for author: {}",
        removed.len(),
        term
    )));
    result.with_affected_entries(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookEntry;

    fn entry(title: &str, authors: &[&str]) -> BookEntry {
        BookEntry::new(
            title.to_string(),
            authors.iter().map(|a| a.to_string()).collect(),
            3.0,
            "isbn".to_string(),
            100,
        )
        .unwrap()
    }

    fn library_with(entries: Vec<BookEntry>) -> Library {
        let mut library = Library::new();
        library.add_entries(entries);
        library
    }

    #[test]
    fn parses_field_and_term() {
        assert_eq!(
            parse("TITLE Dune").unwrap(),
            Command::Remove {
                field: EntryField::Title,
                term: "Dune".to_string()
            }
        );
        assert_eq!(
            parse("  AUTHOR Frank Herbert  ").unwrap(),
            Command::Remove {
                field: EntryField::Author,
                term: "Frank Herbert".to_string()
            }
        );
    }

    #[test]
    fn rejects_missing_pieces() {
        assert!(parse("").is_err());
        assert!(parse("TITLE").is_err());
        assert!(parse("TITLE   ").is_err());
        assert!(parse("GENRE Dune").is_err());
        assert!(parse("title Dune").is_err());
    }

    #[test]
    fn removes_first_matching_title_only() {
        let mut library = library_with(vec![
            entry("Dune", &["Herbert"]),
            entry("Dune", &["Anderson"]),
        ]);
        let result = run(&mut library, EntryField::Title, "Dune");

        assert_eq!(result.lines(), ["Dune: removed successfully."]);
        assert_eq!(result.affected_entries.len(), 1);
        assert_eq!(result.affected_entries[0].authors(), ["Herbert".to_string()]);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn missing_title_reports_not_found() {
        let mut library = library_with(vec![entry("Dune", &["Herbert"])]);
        let result = run(&mut library, EntryField::Title, "Foundation");

        assert_eq!(result.lines(), ["Foundation: not found."]);
        assert!(result.affected_entries.is_empty());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn title_match_is_exact() {
        let mut library = library_with(vec![entry("Dune", &["Herbert"])]);
        let result = run(&mut library, EntryField::Title, "dune");
        assert_eq!(result.lines(), ["dune: not found."]);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn removes_every_book_naming_the_author() {
        let mut library = library_with(vec![
            entry("One", &["A"]),
            entry("Two", &["B"]),
            entry("Three", &["C", "A"]),
        ]);
        let result = run(&mut library, EntryField::Author, "A");

        assert_eq!(result.lines(), ["2 books removed for author: A"]);
        assert_eq!(result.affected_entries.len(), 2);
        assert_eq!(library.len(), 1);
        assert_eq!(library.entries()[0].title(), "Two");
    }

    #[test]
    fn unknown_author_removes_zero() {
        let mut library = library_with(vec![entry("One", &["A"])]);
        let result = run(&mut library, EntryField::Author, "X");

        assert_eq!(result.lines(), ["0 books removed for author: X"]);
        assert_eq!(library.len(), 1);
    }
}
