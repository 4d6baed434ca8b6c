use super::{Catalog, Notice, Outcome};
use crate::model::{Book, BookFilter, BookUpdate};
use tracing::info;

impl Catalog {
    /// Removes the single book matching `filter`, then renumbers.
    ///
    /// A rejected query is passed through. No match is a successful no-op.
    /// More than one match removes nothing and reports
    /// [`Notice::TooManyMatches`] with the ambiguous set. On success the
    /// removed book is returned as the only match.
    pub fn remove(&mut self, filter: &BookFilter) -> Outcome {
        let found = self.find(filter, None);
        if !found.success {
            return found;
        }

        let mut matches = found.into_matches();
        match matches.len() {
            0 => Outcome::found(matches),
            1 => {
                let target = matches.remove(0);
                match self.take(&target) {
                    Some(removed) => Outcome::found(vec![removed]),
                    None => Outcome::found(vec![]),
                }
            }
            _ => Outcome {
                success: false,
                info: Some(Notice::TooManyMatches),
                matches: Some(matches),
            },
        }
    }

    /// Applies `update` to the single book matching `filter`.
    ///
    /// A rejected query or an empty result is passed through unchanged. With
    /// several matches nothing is edited and the candidates come back with
    /// [`Notice::MultipleCandidates`]. On success the edited book is the only
    /// match.
    pub fn edit(&mut self, filter: &BookFilter, update: &BookUpdate) -> Outcome {
        let found = self.find(filter, None);
        let count = found.matches().len();
        if !found.success || count == 0 {
            return found;
        }
        if count > 1 {
            return Outcome {
                info: Some(Notice::MultipleCandidates),
                ..found
            };
        }

        let id = found.matches()[0].id();
        match self.edit_id(id, update) {
            Some(edited) => Outcome::found(vec![edited.clone()]),
            None => Outcome::found(vec![]),
        }
    }

    /// Removes the book with `id` and renumbers the rest.
    pub fn remove_id(&mut self, id: usize) -> Option<Book> {
        let target = self.get(id)?.clone();
        self.take(&target)
    }

    /// Applies `update` to the book with `id`.
    pub fn edit_id(&mut self, id: usize, update: &BookUpdate) -> Option<&Book> {
        let book = self.books.iter_mut().find(|b| b.id() == id)?;
        if book.reset_details(update) {
            info!(id, title = book.title(), "book updated");
        }
        Some(&*book)
    }

    fn take(&mut self, target: &Book) -> Option<Book> {
        let position = self.position_of(&target.metadata.uuid)?;
        let removed = self.books.remove(position);
        self.renumber();
        info!(
            id = removed.id(),
            title = removed.title(),
            remaining = self.books.len(),
            "book removed"
        );
        Some(removed)
    }
}
