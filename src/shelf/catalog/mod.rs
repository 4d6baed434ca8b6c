//! # Catalog
//!
//! The catalog is the sole owner of [`Book`] records. It keeps them in
//! insertion order, which doubles as paging order, and hands out the numeric
//! ids users type at the prompt.
//!
//! ## Id Lifecycle
//!
//! Ids are positional, not stable. At every observable moment the books hold
//! the contiguous range `1..=count` in sequence order:
//!
//! - `add` appends with `id = count + 1`
//! - `remove` (and `remove_id`) drop one book, then renumber the rest by
//!   position, so old id 3 becomes id 2 after id 2 is removed
//!
//! Callers that need a key that survives renumbering use
//! `book.metadata.uuid` instead.
//!
//! ## Outcomes
//!
//! Lookup style operations never fail with `Err`. They return an [`Outcome`]
//! carrying a success flag, an optional [`Notice`] and the matching books.
//! "Nothing matched" is an empty match list with `success == true`, not a
//! failure.

use crate::model::Book;
use thiserror::Error;
use tracing::debug;

mod mutate;
mod search;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Why a lookup did not produce a single, usable match.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    #[error("title required")]
    TitleRequired,

    #[error("too many matches")]
    TooManyMatches,

    #[error("multiple candidates")]
    MultipleCandidates,
}

/// Result of `find`, `remove` and `edit`.
///
/// `matches` is `None` only when the query was rejected before scanning
/// (see [`Notice::TitleRequired`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub info: Option<Notice>,
    pub matches: Option<Vec<Book>>,
}

impl Outcome {
    pub(crate) fn found(matches: Vec<Book>) -> Self {
        Self {
            success: true,
            info: None,
            matches: Some(matches),
        }
    }

    pub(crate) fn rejected(notice: Notice) -> Self {
        Self {
            success: false,
            info: Some(notice),
            matches: None,
        }
    }

    pub fn matches(&self) -> &[Book] {
        self.matches.as_deref().unwrap_or_default()
    }

    pub fn into_matches(self) -> Vec<Book> {
        self.matches.unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book and returns it with its freshly assigned id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        pages: impl Into<String>,
        author: impl Into<String>,
    ) -> &Book {
        let id = self.books.len() + 1;
        self.books
            .push(Book::new(id, title.into(), pages.into(), author.into()));
        debug!(id, "book added");
        &self.books[id - 1]
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Direct id lookup, without the title fallback `find` applies.
    pub fn get(&self, id: usize) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// Books at positions `[index * size, index * size + size)`.
    ///
    /// Pages past the end are empty rather than an error, and the last page
    /// may be short. Nothing is remembered between calls.
    pub fn page(&self, index: usize, size: usize) -> &[Book] {
        let start = index.saturating_mul(size);
        if start >= self.books.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.books.len());
        &self.books[start..end]
    }

    /// Number of pages needed to show every book at `size` per page.
    pub fn page_count(&self, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        self.books.len().div_ceil(size)
    }

    /// Reassigns ids `1..=count` by position.
    fn renumber(&mut self) {
        for (position, book) in self.books.iter_mut().enumerate() {
            book.reset_id(position + 1);
        }
    }

    fn position_of(&self, uuid: &uuid::Uuid) -> Option<usize> {
        self.books.iter().position(|b| &b.metadata.uuid == uuid)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CatalogFixture {
        pub catalog: Catalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        /// Adds `count` books titled "Book 1", "Book 2", ...
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.catalog.add(
                    format!("Book {}", i + 1),
                    format!("{}", (i + 1) * 100),
                    format!("Author {}", i + 1),
                );
            }
            self
        }

        pub fn with_book(mut self, title: &str, pages: &str, author: &str) -> Self {
            self.catalog.add(title, pages, author);
            self
        }

        /// The three books the interactive demo starts with.
        pub fn with_demo_books(mut self) -> Self {
            seed_demo_books(&mut self.catalog);
            self
        }
    }

    /// Panics unless ids run `1..=count` in sequence order.
    pub fn assert_contiguous(catalog: &Catalog) {
        let ids: Vec<usize> = catalog.iter().map(Book::id).collect();
        let expected: Vec<usize> = (1..=catalog.count()).collect();
        assert_eq!(ids, expected);
    }
}

/// Seeds the catalog with the demo books the shell offers with `--demo`.
pub fn seed_demo_books(catalog: &mut Catalog) {
    for n in 1..=3 {
        catalog.add(format!("Test {}", n), "123", "Jesse K.");
    }
}
