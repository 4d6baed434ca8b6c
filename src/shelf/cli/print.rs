use chrono::{DateTime, Utc};
use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel, PageInfo};
use shelf::model::Book;
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(content)])
}

/// Prints the options of a menu on one line: ` Add Book | Remove Book | Back`.
pub(super) fn print_options<W: Write>(out: &mut W, options: &[&str]) -> io::Result<()> {
    writeln!(out, " {}", options.join(" | "))
}

/// Renders a book as a block framed by a border as wide as its title line.
pub(super) fn book_block(book: &Book) -> String {
    let (title, pages, author) = book.details();
    let heading = format!(" Book Title: {}", title);
    let border = format!("+{}+", "-".repeat(heading.width()));

    let mut block = String::new();
    block.push_str(&border);
    block.push('\n');
    block.push_str(&heading);
    block.push('\n');
    block.push_str(&border);
    block.push('\n');
    block.push_str(&format!(" Id: {}\n", book.id()));
    block.push_str(&format!(" Pages: {}\n", pages));
    block.push_str(&format!(" Author: {}\n", author));
    block
}

pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        write!(out, "{}", book_block(book))?;
        writeln!(
            out,
            " {}",
            format!("added {}", format_time_ago(book.metadata.added_at)).dimmed()
        )?;
        writeln!(out)?;
    }
    Ok(())
}

pub(super) fn print_page_footer<W: Write>(out: &mut W, page: &PageInfo) -> io::Result<()> {
    if page.total_books == 0 {
        return Ok(());
    }
    writeln!(
        out,
        " Page {} of {} ({} books)",
        page.index + 1,
        page.total_pages.max(1),
        page.total_books
    )
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
