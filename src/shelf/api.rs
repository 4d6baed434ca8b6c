//! # API Facade
//!
//! The API layer is a **thin facade** over the [`Catalog`]. It is the single
//! entry point the shell (or any other front end) talks to.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** each user action to the catalog
//! - **Normalizes inputs** (e.g. turning typed text into a book id)
//! - **Translates outcomes** into a [`CmdResult`] with leveled messages
//!
//! It does no printing and never exits the process. Whether a message is
//! shown in green or red is the caller's concern; the facade only picks the
//! [`MessageLevel`].

use crate::catalog::{Catalog, Notice, Outcome};
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookFilter, BookUpdate};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Where a page sits in the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_books: usize,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The catalog's success flag; `true` for plain listings.
    pub success: bool,
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub page: Option<PageInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }
}

/// The main API facade for shelf operations.
///
/// Owns the catalog for the lifetime of the session. All UI clients should
/// go through it rather than touching the [`Catalog`] directly.
#[derive(Debug, Default)]
pub struct ShelfApi {
    catalog: Catalog,
}

impl ShelfApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn count(&self) -> usize {
        self.catalog.count()
    }

    pub fn add_book(&mut self, title: &str, pages: &str, author: &str) -> Result<CmdResult> {
        let book = self.catalog.add(title, pages, author).clone();
        let mut result = CmdResult::ok();
        result.add_message(CmdMessage::success(format!(
            "Book added ({}): {}",
            book.id(),
            book.title()
        )));
        Ok(result.with_affected_books(vec![book]))
    }

    pub fn find_books(&self, filter: &BookFilter) -> Result<CmdResult> {
        let outcome = self.catalog.find(filter, None);
        let mut result = from_outcome(&outcome);
        if outcome.success && outcome.matches().is_empty() {
            result.add_message(CmdMessage::info("No matching books."));
        }
        Ok(result.with_listed_books(outcome.into_matches()))
    }

    /// Looks a book up by the id the user typed.
    pub fn select_book(&self, input: &str) -> Result<CmdResult> {
        let id = parse_id(input)?;
        let mut result = CmdResult::ok();
        match self.catalog.get(id) {
            Some(book) => Ok(result.with_listed_books(vec![book.clone()])),
            None => {
                result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
                Ok(result)
            }
        }
    }

    pub fn remove_books(&mut self, filter: &BookFilter) -> Result<CmdResult> {
        let outcome = self.catalog.remove(filter);
        let mut result = from_outcome(&outcome);
        if outcome.info == Some(Notice::TooManyMatches) {
            result.add_message(CmdMessage::info(
                "Add pages or author to narrow the search, or pick the book by id.",
            ));
            return Ok(result.with_listed_books(outcome.into_matches()));
        }
        match outcome.matches() {
            [] if outcome.success => result.add_message(CmdMessage::info("No matching books.")),
            [removed] => result.add_message(removed_message(removed)),
            _ => {}
        }
        Ok(result.with_affected_books(outcome.into_matches()))
    }

    pub fn remove_selected(&mut self, id: usize) -> Result<CmdResult> {
        let mut result = CmdResult::ok();
        match self.catalog.remove_id(id) {
            Some(removed) => {
                result.add_message(removed_message(&removed));
                Ok(result.with_affected_books(vec![removed]))
            }
            None => {
                result.success = false;
                result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
                Ok(result)
            }
        }
    }

    pub fn edit_books(&mut self, filter: &BookFilter, update: &BookUpdate) -> Result<CmdResult> {
        let outcome = self.catalog.edit(filter, update);
        let mut result = from_outcome(&outcome);
        if outcome.info == Some(Notice::MultipleCandidates) {
            return Ok(result.with_listed_books(outcome.into_matches()));
        }
        match outcome.matches() {
            [] if outcome.success => result.add_message(CmdMessage::info("No matching books.")),
            [edited] => result.add_message(updated_message(edited)),
            _ => {}
        }
        Ok(result.with_affected_books(outcome.into_matches()))
    }

    pub fn edit_selected(&mut self, id: usize, update: &BookUpdate) -> Result<CmdResult> {
        let mut result = CmdResult::ok();
        match self.catalog.edit_id(id, update) {
            Some(edited) => {
                result.add_message(updated_message(edited));
                Ok(result.with_affected_books(vec![edited.clone()]))
            }
            None => {
                result.success = false;
                result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
                Ok(result)
            }
        }
    }

    pub fn book_page(&self, index: usize, size: usize) -> Result<CmdResult> {
        if size == 0 {
            return Err(ShelfError::InvalidOption(
                "page size must be at least 1".into(),
            ));
        }
        let mut result = CmdResult::ok();
        if self.catalog.is_empty() {
            result.add_message(CmdMessage::info("No books in the library."));
        }
        let page = PageInfo {
            index,
            size,
            total_pages: self.catalog.page_count(size),
            total_books: self.catalog.count(),
        };
        let books = self.catalog.page(index, size).to_vec();
        debug!(index, size, listed = books.len(), "page listed");
        Ok(result.with_listed_books(books).with_page(page))
    }
}

/// Parses a typed book id. Anything but a positive integer is an invalid option.
pub fn parse_id(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ShelfError::InvalidOption(format!(
            "'{}' is not a book id",
            input.trim()
        ))),
    }
}

fn from_outcome(outcome: &Outcome) -> CmdResult {
    let mut result = CmdResult {
        success: outcome.success,
        ..CmdResult::default()
    };
    match outcome.info {
        Some(Notice::TitleRequired) => {
            result.add_message(CmdMessage::error("A title is required."))
        }
        Some(notice @ (Notice::TooManyMatches | Notice::MultipleCandidates)) => result
            .add_message(CmdMessage::warning(format!(
                "{}: {} books match; be more specific.",
                sentence_case(&notice.to_string()),
                outcome.matches().len()
            ))),
        None => {}
    }
    result
}

fn removed_message(book: &Book) -> CmdMessage {
    CmdMessage::success(format!("Book removed ({}): {}", book.id(), book.title()))
}

fn updated_message(book: &Book) -> CmdMessage {
    CmdMessage::success(format!("Book updated ({}): {}", book.id(), book.title()))
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
