use super::{Catalog, Notice, Outcome};
use crate::model::{Book, BookFilter};
use tracing::debug;

impl Catalog {
    /// Looks books up by id or by title.
    ///
    /// With an `id`, the first book carrying it is the single match. An id
    /// that matches nothing falls through to the title search below rather
    /// than reporting an empty result.
    ///
    /// The title search requires a non-empty title and compares every given
    /// field verbatim; empty pages or author match anything.
    pub fn find(&self, filter: &BookFilter, id: Option<usize>) -> Outcome {
        if let Some(id) = id {
            if let Some(book) = self.get(id) {
                debug!(id, "find matched by id");
                return Outcome::found(vec![book.clone()]);
            }
            debug!(id, "no book with id, falling back to title search");
        }

        if filter.title_value().is_none() {
            return Outcome::rejected(Notice::TitleRequired);
        }

        let matches: Vec<Book> = self
            .books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();
        debug!(matches = matches.len(), "find by title");
        Outcome::found(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::CatalogFixture;
    use super::*;

    fn titles(outcome: &Outcome) -> Vec<&str> {
        outcome.matches().iter().map(Book::title).collect()
    }

    #[test]
    fn find_by_id_bypasses_title_requirement() {
        let catalog = CatalogFixture::new().with_books(3).catalog;
        let outcome = catalog.find(&BookFilter::new(), Some(2));
        assert!(outcome.success);
        assert_eq!(outcome.info, None);
        assert_eq!(outcome.matches().len(), 1);
        assert_eq!(outcome.matches()[0].id(), 2);
    }

    #[test]
    fn find_by_id_ignores_other_fields() {
        let catalog = CatalogFixture::new().with_books(3).catalog;
        let filter = BookFilter::new().title("Book 1");
        let outcome = catalog.find(&filter, Some(3));
        assert_eq!(titles(&outcome), vec!["Book 3"]);
    }

    #[test]
    fn unmatched_id_falls_back_to_title() {
        let catalog = CatalogFixture::new().with_books(3).catalog;
        let filter = BookFilter::new().title("Book 1");
        let outcome = catalog.find(&filter, Some(99));
        assert!(outcome.success);
        assert_eq!(titles(&outcome), vec!["Book 1"]);
    }

    #[test]
    fn unmatched_id_without_title_requires_title() {
        let catalog = CatalogFixture::new().with_books(3).catalog;
        let outcome = catalog.find(&BookFilter::new(), Some(99));
        assert!(!outcome.success);
        assert_eq!(outcome.info, Some(Notice::TitleRequired));
        assert_eq!(outcome.matches, None);
    }

    #[test]
    fn missing_title_is_rejected() {
        let catalog = CatalogFixture::new().with_books(2).catalog;
        for filter in [
            BookFilter::new(),
            BookFilter::new().title(""),
            BookFilter::new().pages("100").author("Author 1"),
        ] {
            let outcome = catalog.find(&filter, None);
            assert!(!outcome.success);
            assert_eq!(outcome.info, Some(Notice::TitleRequired));
            assert_eq!(
                outcome.info.map(|n| n.to_string()).as_deref(),
                Some("title required")
            );
            assert!(outcome.matches.is_none());
        }
    }

    #[test]
    fn title_search_narrows_by_pages_and_author() {
        let catalog = CatalogFixture::new()
            .with_book("T", "100", "A")
            .with_book("T", "100", "B")
            .with_book("T", "200", "A")
            .with_book("U", "100", "A")
            .catalog;

        let all = catalog.find(&BookFilter::new().title("T"), None);
        assert_eq!(all.matches().len(), 3);

        let by_pages = catalog.find(&BookFilter::new().title("T").pages("100"), None);
        let ids: Vec<usize> = by_pages.matches().iter().map(Book::id).collect();
        assert_eq!(ids, vec![1, 2]);

        let filter = BookFilter::new().title("T").pages("100").author("B");
        let exact = catalog.find(&filter, None);
        let ids: Vec<usize> = exact.matches().iter().map(Book::id).collect();
        assert_eq!(ids, vec![2]);

        let by_author = catalog.find(&BookFilter::new().title("T").author("A"), None);
        let ids: Vec<usize> = by_author.matches().iter().map(Book::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn no_match_is_success_with_empty_list() {
        let catalog = CatalogFixture::new().with_books(2).catalog;
        let outcome = catalog.find(&BookFilter::new().title("Missing"), None);
        assert!(outcome.success);
        assert_eq!(outcome.info, None);
        assert_eq!(outcome.matches, Some(vec![]));
    }

    #[test]
    fn page_count_is_compared_as_text() {
        let catalog = CatalogFixture::new().with_book("T", "100", "A").catalog;
        let padded = catalog.find(&BookFilter::new().title("T").pages("0100"), None);
        assert!(padded.matches().is_empty());
        let exact = catalog.find(&BookFilter::new().title("T").pages("100"), None);
        assert_eq!(exact.matches().len(), 1);
    }

    #[test]
    fn title_match_is_case_sensitive() {
        let catalog = CatalogFixture::new().with_book("Dune", "412", "Herbert").catalog;
        assert!(catalog
            .find(&BookFilter::new().title("dune"), None)
            .matches()
            .is_empty());
    }

    #[test]
    fn find_does_not_mutate() {
        let catalog = CatalogFixture::new().with_books(3).catalog;
        let before: Vec<Book> = catalog.iter().cloned().collect();
        let _ = catalog.find(&BookFilter::new().title("Book 2"), Some(1));
        let after: Vec<Book> = catalog.iter().cloned().collect();
        assert_eq!(before, after);
    }
}
