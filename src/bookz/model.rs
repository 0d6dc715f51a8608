use crate::error::{CatalogError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

const MIN_RATING: f32 = 0.0;
const MAX_RATING: f32 = 5.0;
const AUTHORS_SEPARATOR: &str = ", ";

/// A single immutable catalog entry.
///
/// Fields are validated once at construction; a `BookEntry` that exists
/// always satisfies the catalog invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    title: String,
    authors: Vec<String>,
    rating: f32,
    isbn: String,
    pages: u32,
}

impl BookEntry {
    /// Build a validated entry.
    ///
    /// Fails if the title is empty, the author list is empty, any author is
    /// empty, or the rating falls outside `[0, 5]`. Page counts are
    /// non-negative by type.
    pub fn new(
        title: String,
        authors: Vec<String>,
        rating: f32,
        isbn: String,
        pages: u32,
    ) -> Result<Self> {
        if title.is_empty() {
            return Err(CatalogError::Validation(
                "Given title must not be empty".to_string(),
            ));
        }
        if authors.is_empty() {
            return Err(CatalogError::Validation(
                "Given authors must not be empty".to_string(),
            ));
        }
        if authors.iter().any(String::is_empty) {
            return Err(CatalogError::Validation(
                "An author of the book must not be empty".to_string(),
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CatalogError::Validation(format!(
                "Given rating must be between {} and {}, but it is: {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }

        Ok(Self {
            title,
            authors,
            rating,
            isbn,
            pages,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors.join(AUTHORS_SEPARATOR))?;
        writeln!(f, "Rating: {:.2}", self.rating)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(f, "{} pages", self.pages)
    }
}

// Ratings are validated to lie in [0, 5], so they are never NaN and the
// partial float comparison is total here.
impl Eq for BookEntry {}

impl Hash for BookEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.authors.hash(state);
        self.rating.to_bits().hash(state);
        self.isbn.hash(state);
        self.pages.hash(state);
    }
}
