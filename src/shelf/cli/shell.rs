//! The interactive menu loop.
//!
//! [`Shell`] is generic over its input and output so sessions can be driven
//! from a string in tests. Every catalog operation goes through
//! [`ShelfApi`]; the shell only prompts, parses and prints.

use super::input::{
    BrowseChoice, MainChoice, ManageChoice, SelectedChoice, SettingsChoice, BROWSE_OPTIONS,
    MAIN_OPTIONS, MANAGE_OPTIONS, SELECTED_OPTIONS, SETTINGS_OPTIONS,
};
use super::print::{
    print_books, print_error, print_messages, print_options, print_page_footer,
};
use console::Term;
use shelf::api::{parse_id, CmdMessage, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::Result;
use shelf::model::{Book, BookFilter, BookUpdate};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Whether the user is still in the session after a menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, R, W> {
    api: &'a mut ShelfApi,
    config: ShelfConfig,
    config_path: Option<PathBuf>,
    input: R,
    out: W,
    /// Stdout is a real terminal; screen wiping only ever happens then.
    terminal: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        api: &'a mut ShelfApi,
        config: ShelfConfig,
        config_path: Option<PathBuf>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            api,
            config,
            config_path,
            input,
            out,
            terminal: false,
        }
    }

    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    #[cfg(test)]
    fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(books = self.api.count(), "session started");
        loop {
            self.clear_screen()?;
            print_options(&mut self.out, MAIN_OPTIONS)?;
            let Some(line) = self.prompt("Select an option")? else {
                break;
            };
            if line.is_empty() {
                writeln!(self.out, "You must type something...")?;
                self.pause()?;
                continue;
            }

            let flow = match line.parse::<MainChoice>() {
                Ok(MainChoice::Exit) => Flow::Quit,
                Ok(MainChoice::Manage) => self.manage_menu()?,
                Ok(MainChoice::View) => self.browse_menu()?,
                Ok(MainChoice::Settings) => self.settings_menu()?,
                Err(e) => {
                    print_error(&mut self.out, &e)?;
                    self.pause()?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.clear_screen()?;
        info!(books = self.api.count(), "session ended");
        Ok(())
    }

    fn manage_menu(&mut self) -> Result<Flow> {
        loop {
            self.clear_screen()?;
            print_options(&mut self.out, MANAGE_OPTIONS)?;
            let Some(line) = self.prompt("Select an option")? else {
                return Ok(Flow::Quit);
            };
            if line.is_empty() {
                writeln!(self.out, "You must type something in...")?;
                self.pause()?;
                continue;
            }

            let choice = match line.parse::<ManageChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    print_error(&mut self.out, &e)?;
                    self.pause()?;
                    continue;
                }
            };
            debug!(?choice, "manage menu");
            let flow = match choice {
                ManageChoice::Back => return Ok(Flow::Continue),
                ManageChoice::Add => self.add_book()?,
                ManageChoice::Remove => self.remove_book()?,
                ManageChoice::Edit => self.edit_book()?,
                ManageChoice::Find => self.find_book()?,
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
            self.pause()?;
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.required("Title")? else {
            return Ok(Flow::Quit);
        };
        let Some(pages) = self.required("Pages")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.required("Author")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.add_book(&title, &pages, &author)?;
        print_messages(&mut self.out, &result.messages)?;
        print_books(&mut self.out, &result.affected_books)?;
        Ok(Flow::Continue)
    }

    fn find_book(&mut self) -> Result<Flow> {
        let Some(filter) = self.read_filter()? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.find_books(&filter)?;
        print_books(&mut self.out, &result.listed_books)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> Result<Flow> {
        let Some(filter) = self.read_filter()? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.remove_books(&filter)?;
        print_messages(&mut self.out, &result.messages)?;
        print_books(&mut self.out, &result.affected_books)?;
        if result.listed_books.is_empty() {
            return Ok(Flow::Continue);
        }

        print_books(&mut self.out, &result.listed_books)?;
        match self.pick_candidate(&result.listed_books, "Id to remove (blank to cancel)")? {
            Pick::Chosen(id) => {
                let removed = self.api.remove_selected(id)?;
                print_messages(&mut self.out, &removed.messages)?;
                Ok(Flow::Continue)
            }
            Pick::Cancelled => Ok(Flow::Continue),
            Pick::Eof => Ok(Flow::Quit),
        }
    }

    fn edit_book(&mut self) -> Result<Flow> {
        let Some(filter) = self.read_filter()? else {
            return Ok(Flow::Quit);
        };
        let found = self.api.find_books(&filter)?;
        print_messages(&mut self.out, &found.messages)?;

        let target = match found.listed_books.as_slice() {
            [] => return Ok(Flow::Continue),
            [single] => {
                print_books(&mut self.out, std::slice::from_ref(single))?;
                EditTarget::Details(BookFilter::exact(single))
            }
            candidates => {
                print_books(&mut self.out, candidates)?;
                match self.pick_candidate(candidates, "Id to edit (blank to cancel)")? {
                    Pick::Chosen(id) => EditTarget::Id(id),
                    Pick::Cancelled => return Ok(Flow::Continue),
                    Pick::Eof => return Ok(Flow::Quit),
                }
            }
        };

        let Some(update) = self.read_update()? else {
            return Ok(Flow::Quit);
        };
        let result = match target {
            EditTarget::Id(id) => self.api.edit_selected(id, &update)?,
            EditTarget::Details(exact) => self.api.edit_books(&exact, &update)?,
        };
        print_messages(&mut self.out, &result.messages)?;
        print_books(&mut self.out, &result.affected_books)?;
        Ok(Flow::Continue)
    }

    fn browse_menu(&mut self) -> Result<Flow> {
        let mut index = 0;
        loop {
            self.clear_screen()?;
            let result = self.api.book_page(index, self.config.page_size)?;
            let Some(page) = result.page else {
                return Ok(Flow::Continue);
            };
            if result.listed_books.is_empty() && page.total_pages > 0 {
                // The page we were on vanished after removals.
                index = page.total_pages - 1;
                continue;
            }
            print_books(&mut self.out, &result.listed_books)?;
            print_messages(&mut self.out, &result.messages)?;
            print_page_footer(&mut self.out, &page)?;
            print_options(&mut self.out, BROWSE_OPTIONS)?;

            let Some(line) = self.prompt("Select an option")? else {
                return Ok(Flow::Quit);
            };
            if line.is_empty() {
                writeln!(self.out, "You must type something...")?;
                self.pause()?;
                continue;
            }

            let message = match line.parse::<BrowseChoice>() {
                Ok(BrowseChoice::Exit) => return Ok(Flow::Continue),
                Ok(BrowseChoice::Next) if page.has_next() => {
                    index += 1;
                    None
                }
                Ok(BrowseChoice::Next) => Some(CmdMessage::info("Already on the last page.")),
                Ok(BrowseChoice::Previous) if page.has_previous() => {
                    index -= 1;
                    None
                }
                Ok(BrowseChoice::Previous) => Some(CmdMessage::info("Already on the first page.")),
                Ok(BrowseChoice::Select(raw)) => {
                    if self.select_book(&raw)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                    None
                }
                Err(e) => Some(CmdMessage::error(e)),
            };
            if let Some(message) = message {
                print_messages(&mut self.out, &[message])?;
                self.pause()?;
            }
        }
    }

    fn select_book(&mut self, raw: &str) -> Result<Flow> {
        let result = match self.api.select_book(raw) {
            Ok(result) => result,
            Err(e) => {
                print_error(&mut self.out, &e.to_string())?;
                self.pause()?;
                return Ok(Flow::Continue);
            }
        };
        print_messages(&mut self.out, &result.messages)?;
        let Some(book) = result.listed_books.first() else {
            self.pause()?;
            return Ok(Flow::Continue);
        };

        self.clear_screen()?;
        print_books(&mut self.out, std::slice::from_ref(book))?;
        loop {
            print_options(&mut self.out, SELECTED_OPTIONS)?;
            let Some(line) = self.prompt("Select an option")? else {
                return Ok(Flow::Quit);
            };
            let outcome = match line.parse::<SelectedChoice>() {
                Ok(SelectedChoice::Back) => return Ok(Flow::Continue),
                Ok(SelectedChoice::Remove) => self.api.remove_selected(book.id())?,
                Ok(SelectedChoice::Edit) => {
                    let Some(update) = self.read_update()? else {
                        return Ok(Flow::Quit);
                    };
                    self.api.edit_selected(book.id(), &update)?
                }
                Err(e) => {
                    print_error(&mut self.out, &e)?;
                    continue;
                }
            };
            print_messages(&mut self.out, &outcome.messages)?;
            print_books(&mut self.out, &outcome.affected_books)?;
            self.pause()?;
            return Ok(Flow::Continue);
        }
    }

    fn settings_menu(&mut self) -> Result<Flow> {
        loop {
            self.clear_screen()?;
            writeln!(
                self.out,
                " Page size: {}  Color: {}  Wipe screen: {}",
                self.config.page_size,
                on_off(self.config.color),
                on_off(self.config.clear_screen)
            )?;
            print_options(&mut self.out, SETTINGS_OPTIONS)?;
            let Some(line) = self.prompt("Select an option")? else {
                return Ok(Flow::Quit);
            };

            let message = match line.parse::<SettingsChoice>() {
                Ok(SettingsChoice::Back) => return Ok(Flow::Continue),
                Ok(SettingsChoice::PageSize) => {
                    let Some(value) = self.prompt("Page size (1-50)")? else {
                        return Ok(Flow::Quit);
                    };
                    match self.config.set_page_size(&value) {
                        Ok(()) => CmdMessage::success(format!(
                            "Page size set to {}.",
                            self.config.page_size
                        )),
                        Err(e) => CmdMessage::error(e.to_string()),
                    }
                }
                Ok(SettingsChoice::Color) => {
                    self.config.color = !self.config.color;
                    colored::control::set_override(self.config.color && self.terminal);
                    CmdMessage::success(format!("Color {}.", on_off(self.config.color)))
                }
                Ok(SettingsChoice::WipeScreen) => {
                    self.config.clear_screen = !self.config.clear_screen;
                    CmdMessage::success(format!(
                        "Screen wiping {}.",
                        on_off(self.config.clear_screen)
                    ))
                }
                Ok(SettingsChoice::Save) => match &self.config_path {
                    Some(path) => match self.config.save(path) {
                        Ok(()) => {
                            info!(path = %path.display(), "settings saved");
                            CmdMessage::success(format!("Settings saved to {}.", path.display()))
                        }
                        Err(e) => CmdMessage::error(e.to_string()),
                    },
                    None => CmdMessage::warning("No config location available."),
                },
                Err(e) => CmdMessage::error(e),
            };
            print_messages(&mut self.out, &[message])?;
            self.pause()?;
        }
    }

    fn read_filter(&mut self) -> Result<Option<BookFilter>> {
        let Some(title) = self.prompt("Title")? else {
            return Ok(None);
        };
        let Some(pages) = self.prompt("Pages (optional)")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("Author (optional)")? else {
            return Ok(None);
        };
        Ok(Some(BookFilter {
            title: field(title),
            pages: field(pages),
            author: field(author),
        }))
    }

    fn read_update(&mut self) -> Result<Option<BookUpdate>> {
        writeln!(self.out, "Leave a field blank to keep its current value.")?;
        let Some(title) = self.prompt("New title")? else {
            return Ok(None);
        };
        let Some(pages) = self.prompt("New pages")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("New author")? else {
            return Ok(None);
        };
        Ok(Some(BookUpdate {
            title: field(title),
            pages: field(pages),
            author: field(author),
        }))
    }

    fn pick_candidate(&mut self, candidates: &[Book], label: &str) -> Result<Pick> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(Pick::Eof);
            };
            if line.is_empty() {
                return Ok(Pick::Cancelled);
            }
            match parse_id(&line) {
                Ok(id) if candidates.iter().any(|b| b.id() == id) => return Ok(Pick::Chosen(id)),
                Ok(id) => print_error(
                    &mut self.out,
                    &format!("Book {} is not one of the matches.", id),
                )?,
                Err(e) => print_error(&mut self.out, &e.to_string())?,
            }
        }
    }

    /// Prompts until a non-empty value is entered. `None` means input ended.
    fn required(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                Some(value) if value.is_empty() => {
                    writeln!(self.out, "{} cannot be empty.", label)?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Writes `label > ` and reads one trimmed line. `None` means input ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{} > ", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Holds the screen until Enter so output survives the next wipe.
    fn pause(&mut self) -> Result<()> {
        if !self.wipes() {
            return Ok(());
        }
        write!(self.out, "Press Enter to continue > ")?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.wipes() {
            self.out.flush()?;
            Term::stdout().clear_screen()?;
        }
        Ok(())
    }

    fn wipes(&self) -> bool {
        self.terminal && self.config.clear_screen
    }
}

/// The book an edit applies to: a picked id, or a lone match re-resolved by
/// its full details.
enum EditTarget {
    Id(usize),
    Details(BookFilter),
}

enum Pick {
    Chosen(usize),
    Cancelled,
    Eof,
}

fn field(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::catalog::Catalog;
    use std::io::Cursor;

    fn api_with(books: &[(&str, &str, &str)]) -> ShelfApi {
        let mut catalog = Catalog::new();
        for (title, pages, author) in books {
            catalog.add(*title, *pages, *author);
        }
        ShelfApi::new(catalog)
    }

    fn numbered(count: usize) -> ShelfApi {
        let mut catalog = Catalog::new();
        for i in 1..=count {
            catalog.add(format!("Book {}", i), format!("{}", i * 100), "Anon");
        }
        ShelfApi::new(catalog)
    }

    fn session(api: &mut ShelfApi, config: ShelfConfig, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Shell::new(api, config, None, Cursor::new(input.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_find() {
        let mut api = ShelfApi::default();
        let out = session(
            &mut api,
            ShelfConfig::default(),
            "m\na\nDune\n412\nFrank Herbert\nf\nDune\n\n\nb\ne\n",
        );
        assert!(out.contains("Book added (1): Dune"));
        assert!(out.contains(" Book Title: Dune"));
        assert!(out.contains(" Author: Frank Herbert"));
        assert_eq!(api.count(), 1);
    }

    #[test]
    fn add_reprompts_empty_fields() {
        let mut api = ShelfApi::default();
        let out = session(&mut api, ShelfConfig::default(), "m\na\n\nX\n\n1\nA\nb\ne\n");
        assert!(out.contains("Title cannot be empty."));
        assert!(out.contains("Pages cannot be empty."));
        assert_eq!(api.catalog().get(1).map(Book::pages), Some("1"));
    }

    #[test]
    fn typed_fields_are_trimmed() {
        let mut api = ShelfApi::default();
        session(&mut api, ShelfConfig::default(), "m\na\n  Dune  \n 412\nFrank \nb\ne\n");
        let book = api.catalog().get(1).unwrap();
        assert_eq!(book.details(), ("Dune", "412", "Frank"));
    }

    #[test]
    fn empty_line_and_bad_option() {
        let mut api = ShelfApi::default();
        let out = session(&mut api, ShelfConfig::default(), "\nzz\ne\n");
        assert!(out.contains("You must type something..."));
        assert!(out.contains("Invalid option: zz"));
    }

    #[test]
    fn end_of_input_quits_from_any_menu() {
        let mut api = ShelfApi::default();
        session(&mut api, ShelfConfig::default(), "m\na\nHalf");
        assert_eq!(api.count(), 0);
        session(&mut api, ShelfConfig::default(), "v\n");
        session(&mut api, ShelfConfig::default(), "");
    }

    #[test]
    fn find_without_title_reports_error() {
        let mut api = numbered(2);
        let out = session(&mut api, ShelfConfig::default(), "m\nf\n\n\n\nb\ne\n");
        assert!(out.contains("A title is required."));
    }

    #[test]
    fn ambiguous_remove_picks_by_id() {
        let mut api = api_with(&[("T", "100", "A"), ("T", "100", "B")]);
        let out = session(
            &mut api,
            ShelfConfig::default(),
            "m\nr\nT\n\n\n7\n2\nb\ne\n",
        );
        assert!(out.contains("Too many matches: 2 books match"));
        assert!(out.contains("Book 7 is not one of the matches."));
        assert!(out.contains("Book removed (2): T"));
        assert_eq!(api.count(), 1);
        assert_eq!(api.catalog().get(1).map(Book::author), Some("A"));
    }

    #[test]
    fn ambiguous_remove_can_be_cancelled() {
        let mut api = api_with(&[("T", "100", "A"), ("T", "100", "B")]);
        session(&mut api, ShelfConfig::default(), "m\nr\nT\n\n\n\nb\ne\n");
        assert_eq!(api.count(), 2);
    }

    #[test]
    fn remove_renumbers() {
        let mut api = numbered(3);
        let out = session(&mut api, ShelfConfig::default(), "m\nr\nBook 1\n\n\nb\ne\n");
        assert!(out.contains("Book removed (1): Book 1"));
        assert_eq!(api.catalog().get(1).map(Book::title), Some("Book 2"));
        assert_eq!(api.catalog().get(2).map(Book::title), Some("Book 3"));
    }

    #[test]
    fn edit_single_match_keeps_blank_fields() {
        let mut api = numbered(2);
        let out = session(
            &mut api,
            ShelfConfig::default(),
            "m\ne\nBook 1\n\n\n\n500\n\nb\ne\n",
        );
        assert!(out.contains("Book updated (1): Book 1"));
        let book = api.catalog().get(1).unwrap();
        assert_eq!(book.details(), ("Book 1", "500", "Anon"));
    }

    #[test]
    fn edit_multiple_candidates_picks_by_id() {
        let mut api = api_with(&[("T", "100", "A"), ("T", "200", "B")]);
        session(
            &mut api,
            ShelfConfig::default(),
            "m\ne\nT\n\n\n2\nRenamed\n\n\nb\ne\n",
        );
        assert_eq!(api.catalog().get(1).map(Book::title), Some("T"));
        assert_eq!(api.catalog().get(2).map(Book::title), Some("Renamed"));
    }

    #[test]
    fn browse_pages_forward_and_back() {
        let mut api = numbered(25);
        let out = session(&mut api, ShelfConfig::default(), "v\nn\nn\nn\np\ne\ne\n");
        assert!(out.contains(" Page 1 of 3 (25 books)"));
        assert!(out.contains(" Page 3 of 3 (25 books)"));
        assert!(out.contains("Already on the last page."));
        assert!(out.contains(" Book Title: Book 25"));
    }

    #[test]
    fn browse_previous_on_first_page() {
        let mut api = numbered(1);
        let out = session(&mut api, ShelfConfig::default(), "v\np\ne\ne\n");
        assert!(out.contains("Already on the first page."));
    }

    #[test]
    fn browse_empty_catalog() {
        let mut api = ShelfApi::default();
        let out = session(&mut api, ShelfConfig::default(), "v\ne\ne\n");
        assert!(out.contains("No books in the library."));
    }

    #[test]
    fn browse_select_and_remove() {
        let mut api = numbered(3);
        let out = session(&mut api, ShelfConfig::default(), "v\n2\nr\ne\ne\n");
        assert!(out.contains("Book removed (2): Book 2"));
        assert_eq!(api.catalog().get(2).map(Book::title), Some("Book 3"));
    }

    #[test]
    fn browse_select_and_edit() {
        let mut api = numbered(2);
        session(&mut api, ShelfConfig::default(), "v\n1\ne\n\n\nZed\ne\ne\n");
        assert_eq!(api.catalog().get(1).map(Book::author), Some("Zed"));
    }

    #[test]
    fn browse_select_unknown_id() {
        let mut api = numbered(2);
        let out = session(&mut api, ShelfConfig::default(), "v\n9\n1x\ne\ne\n");
        assert!(out.contains("No book with id 9."));
        assert!(out.contains("'1x' is not a book id"));
    }

    #[test]
    fn browse_messages_wait_before_the_next_screen() {
        let mut api = numbered(1);
        colored::control::set_override(false);
        let mut out = Vec::new();
        Shell::new(
            &mut api,
            ShelfConfig::default(),
            None,
            Cursor::new("v\nzz\n\n9\n\nn\n\n\n\n1x\n\ne\ne\n"),
            &mut out,
        )
        .with_terminal(true)
        .run()
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        for message in [
            "Invalid option: zz",
            "No book with id 9.",
            "Already on the last page.",
            "You must type something...",
            "'1x' is not a book id",
        ] {
            let at = out.find(message).unwrap();
            let rest = &out[at..];
            let line_end = rest.find('\n').unwrap();
            assert!(
                rest[line_end + 1..].starts_with("Press Enter to continue > "),
                "no pause after {:?}",
                message
            );
        }
    }

    #[test]
    fn browse_clamps_after_last_page_empties() {
        let mut api = numbered(3);
        let config = ShelfConfig {
            page_size: 2,
            ..ShelfConfig::default()
        };
        let out = session(&mut api, config, "v\nn\n3\nr\ne\ne\n");
        assert!(out.contains("Book removed (3): Book 3"));
        assert!(out.contains(" Page 1 of 1 (2 books)"));
    }

    #[test]
    fn settings_change_page_size() {
        let mut api = ShelfApi::default();
        let mut out = Vec::new();
        let mut shell = Shell::new(
            &mut api,
            ShelfConfig::default(),
            None,
            Cursor::new("s\np\n99\np\n5\ns\nb\ne\n"),
            &mut out,
        );
        shell.run().unwrap();
        assert_eq!(shell.config().page_size, 5);
        drop(shell);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("page size must be a number from 1 to 50"));
        assert!(out.contains("Page size set to 5."));
        assert!(out.contains("No config location available."));
    }

    #[test]
    fn settings_save_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut api = ShelfApi::default();
        let mut out = Vec::new();
        Shell::new(
            &mut api,
            ShelfConfig::default(),
            Some(path.clone()),
            Cursor::new("s\nw\np\n3\ns\nb\ne\n"),
            &mut out,
        )
        .run()
        .unwrap();

        let saved = ShelfConfig::load(&path).unwrap();
        assert_eq!(saved.page_size, 3);
        assert!(!saved.clear_screen);
    }
}
