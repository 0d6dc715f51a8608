use crate::error::{CatalogError, Result};
use crate::model::BookEntry;
use std::fs;
use std::path::Path;

const DATA_VALUES_SEPARATOR: char = ',';
const AUTHOR_SEPARATOR: char = '-';
const FIELD_COUNT: usize = 5;

const TITLE_INDEX: usize = 0;
const AUTHORS_INDEX: usize = 1;
const RATING_INDEX: usize = 2;
const ISBN_INDEX: usize = 3;
const PAGES_INDEX: usize = 4;

/// Two-phase decoder for the line-oriented record-source format.
///
/// [`load_file_content`](Self::load_file_content) reads a source into an
/// internal line buffer; [`parse_file_content`](Self::parse_file_content)
/// decodes that buffer into entries. I/O failures and per-row decode
/// failures surface from their own phase.
#[derive(Debug, Default)]
pub struct CatalogFileLoader {
    // None until a load has succeeded; a failed load leaves any previously
    // loaded content in place.
    file_content: Option<Vec<String>>,
}

impl CatalogFileLoader {
    pub fn new() -> Self {
        Self { file_content: None }
    }

    /// Read all lines from the given source, replacing any previously
    /// loaded content. On failure the buffer is left untouched.
    pub fn load_file_content(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.file_content = Some(text.lines().map(str::to_string).collect());
        Ok(())
    }

    /// Has a source been loaded successfully?
    pub fn content_loaded(&self) -> bool {
        self.file_content.is_some()
    }

    /// Decode the loaded lines into entries, skipping the header line.
    ///
    /// The first malformed row fails the whole parse; callers get either
    /// every entry of the source or none.
    pub fn parse_file_content(&self) -> Result<Vec<BookEntry>> {
        let lines = self
            .file_content
            .as_ref()
            .ok_or(CatalogError::NoContentLoaded)?;

        lines
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, line)| parse_entry(index + 1, line))
            .collect()
    }
}

/// Decode one data row. `line_number` is 1-based within the source file.
fn parse_entry(line_number: usize, line: &str) -> Result<BookEntry> {
    let decode_err = |reason: String| CatalogError::Decode {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split(DATA_VALUES_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(decode_err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let rating: f32 = fields[RATING_INDEX]
        .parse()
        .map_err(|_| decode_err(format!("invalid rating \"{}\"", fields[RATING_INDEX])))?;
    let pages: u32 = fields[PAGES_INDEX]
        .parse()
        .map_err(|_| decode_err(format!("invalid page count \"{}\"", fields[PAGES_INDEX])))?;
    let authors: Vec<String> = fields[AUTHORS_INDEX]
        .split(AUTHOR_SEPARATOR)
        .map(str::to_string)
        .collect();

    BookEntry::new(
        fields[TITLE_INDEX].to_string(),
        authors,
        rating,
        fields[ISBN_INDEX].to_string(),
        pages,
    )
    .map_err(|e| decode_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_with(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TITLE,AUTHORS,RATING,ISBN,PAGES").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn decodes_rows_in_file_order() {
        let file = source_with(&[
            "Dune,Herbert,4.5,0441013597,412",
            "Foo,A-B,3.0,123,100",
        ]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();

        let entries = loader.parse_file_content().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), "Dune");
        assert_eq!(entries[0].authors(), ["Herbert".to_string()]);
        assert_eq!(entries[1].title(), "Foo");
        assert_eq!(
            entries[1].authors(),
            ["A".to_string(), "B".to_string()]
        );
        assert_eq!(entries[1].pages(), 100);
    }

    #[test]
    fn header_line_is_discarded() {
        let file = source_with(&[]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();
        assert!(loader.parse_file_content().unwrap().is_empty());
    }

    #[test]
    fn parse_before_load_reports_missing_content() {
        let loader = CatalogFileLoader::new();
        assert!(!loader.content_loaded());
        assert!(matches!(
            loader.parse_file_content(),
            Err(CatalogError::NoContentLoaded)
        ));
    }

    #[test]
    fn load_failure_is_a_source_read_error() {
        let mut loader = CatalogFileLoader::new();
        let missing = Path::new("no-such-directory/books.csv");
        assert!(matches!(
            loader.load_file_content(missing),
            Err(CatalogError::SourceRead(_))
        ));
        assert!(!loader.content_loaded());
    }

    #[test]
    fn non_numeric_rating_aborts_the_parse() {
        let file = source_with(&[
            "Dune,Herbert,4.5,0441013597,412",
            "Bad,Author,high,123,100",
        ]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();

        // Line 1 is the header, so the bad row is file line 3.
        match loader.parse_file_content() {
            Err(CatalogError::Decode { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected decode failure, got {:?}", other),
        }
    }

    #[test]
    fn negative_pages_fail_to_decode() {
        let file = source_with(&["Dune,Herbert,4.5,0441013597,-412"]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();
        assert!(matches!(
            loader.parse_file_content(),
            Err(CatalogError::Decode { line: 2, .. })
        ));
    }

    #[test]
    fn wrong_column_count_fails_to_decode() {
        let file = source_with(&["Dune,Herbert,4.5,0441013597"]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();
        assert!(matches!(
            loader.parse_file_content(),
            Err(CatalogError::Decode { line: 2, .. })
        ));
    }

    #[test]
    fn out_of_range_rating_fails_to_decode() {
        let file = source_with(&["Dune,Herbert,5.5,0441013597,412"]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();
        assert!(matches!(
            loader.parse_file_content(),
            Err(CatalogError::Decode { line: 2, .. })
        ));
    }

    #[test]
    fn failed_reload_keeps_previous_content() {
        let file = source_with(&["Dune,Herbert,4.5,0441013597,412"]);
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(file.path()).unwrap();

        let missing = Path::new("no-such-directory/books.csv");
        assert!(loader.load_file_content(missing).is_err());
        assert!(loader.content_loaded());
        assert_eq!(loader.parse_file_content().unwrap().len(), 1);
    }
}
