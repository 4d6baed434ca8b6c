use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bookkeeping that travels with a book but never takes part in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Stable key; unlike the display id it survives renumbering.
    pub uuid: Uuid,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4(),
            added_at: now,
            updated_at: now,
        }
    }
}

/// A single catalog record.
///
/// Field values are plain strings and are compared verbatim: the page count
/// is never parsed, so `"100"` and `"0100"` are different books. The `id` is
/// owned by the [`Catalog`](crate::catalog::Catalog) and only it may change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    pages: String,
    author: String,
    id: usize,
    pub metadata: Metadata,
}

impl Book {
    pub(crate) fn new(id: usize, title: String, pages: String, author: String) -> Self {
        Self {
            title,
            pages,
            author,
            id,
            metadata: Metadata::new(),
        }
    }

    /// Snapshot of `(title, pages, author)`.
    pub fn details(&self) -> (&str, &str, &str) {
        (&self.title, &self.pages, &self.author)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn reset_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Overwrites every field the update carries a non-empty value for.
    ///
    /// Returns whether anything changed. Calling it with an empty update is
    /// valid and leaves the book untouched.
    pub fn reset_details(&mut self, update: &BookUpdate) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut self.title, &update.title),
            (&mut self.pages, &update.pages),
            (&mut self.author, &update.author),
        ] {
            if let Some(value) = non_empty(value) {
                if slot.as_str() != value {
                    *slot = value.to_string();
                    changed = true;
                }
            }
        }
        if changed {
            self.metadata.updated_at = Utc::now();
        }
        changed
    }
}

/// Query fields for find, remove and edit.
///
/// The title is required by every title search; pages and author narrow the
/// result when present. An empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub pages: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// A filter that matches exactly the current values of `book`.
    pub fn exact(book: &Book) -> Self {
        let (title, pages, author) = book.details();
        Self::new().title(title).pages(pages).author(author)
    }

    pub(crate) fn title_value(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub(crate) fn matches(&self, book: &Book) -> bool {
        let (title, pages, author) = book.details();
        self.title_value() == Some(title)
            && non_empty(&self.pages).is_none_or(|p| p == pages)
            && non_empty(&self.author).is_none_or(|a| a == author)
    }
}

/// Replacement values for an edit. Absent or empty fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub pages: Option<String>,
    pub author: Option<String>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        non_empty(&self.title).is_none()
            && non_empty(&self.pages).is_none()
            && non_empty(&self.author).is_none()
    }
}

/// Reuses the query fields as replacement values, the way a single
/// title/pages/author triple drives both halves of an edit.
impl From<&BookFilter> for BookUpdate {
    fn from(filter: &BookFilter) -> Self {
        Self {
            title: filter.title.clone(),
            pages: filter.pages.clone(),
            author: filter.author.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book::new(1, "T".into(), "100".into(), "A".into())
    }

    #[test]
    fn details_is_a_snapshot() {
        let b = book();
        assert_eq!(b.details(), ("T", "100", "A"));
        assert_eq!(b.id(), 1);
    }

    #[test]
    fn reset_details_only_overwrites_non_empty_fields() {
        let mut b = book();
        let changed = b.reset_details(&BookUpdate::new().pages("150").author(""));
        assert!(changed);
        assert_eq!(b.details(), ("T", "150", "A"));
    }

    #[test]
    fn reset_details_noop_is_harmless() {
        let mut b = book();
        let before = b.metadata.updated_at;
        assert!(!b.reset_details(&BookUpdate::new()));
        assert!(!b.reset_details(&BookUpdate::new().title("T")));
        assert_eq!(b.details(), ("T", "100", "A"));
        assert_eq!(b.metadata.updated_at, before);
    }

    #[test]
    fn reset_id_keeps_uuid() {
        let mut b = book();
        let uuid = b.metadata.uuid;
        b.reset_id(7);
        assert_eq!(b.id(), 7);
        assert_eq!(b.metadata.uuid, uuid);
    }

    #[test]
    fn filter_treats_empty_as_wildcard() {
        let b = book();
        assert!(BookFilter::new().title("T").matches(&b));
        assert!(BookFilter::new().title("T").pages("").author("").matches(&b));
        assert!(BookFilter::new().title("T").author("A").matches(&b));
        assert!(!BookFilter::new().title("T").author("B").matches(&b));
        assert!(!BookFilter::new().title("").matches(&b));
        assert!(!BookFilter::new().matches(&b));
    }

    #[test]
    fn filter_compares_verbatim() {
        let b = book();
        assert!(!BookFilter::new().title("t").matches(&b));
        assert!(!BookFilter::new().title("T").pages("0100").matches(&b));
        assert!(!BookFilter::new().title("T ").matches(&b));
    }

    #[test]
    fn exact_filter_matches_source_book() {
        let b = book();
        assert!(BookFilter::exact(&b).matches(&b));
    }

    #[test]
    fn update_from_filter_copies_fields() {
        let filter = BookFilter::new().title("T").pages("150");
        let update = BookUpdate::from(&filter);
        assert_eq!(update.title.as_deref(), Some("T"));
        assert_eq!(update.pages.as_deref(), Some("150"));
        assert_eq!(update.author, None);
        assert!(BookUpdate::new().author("").is_empty());
    }
}
