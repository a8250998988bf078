//! Line-command parsing.
//!
//! The browser reads one command per line from standard input:
//!
//! | Input        | Event                      |
//! |--------------|----------------------------|
//! | `/text`      | search for `text` (`/` alone clears it) |
//! | `g <genre>`  | filter by genre (`g` alone clears it)   |
//! | `n`, `p`     | next / previous page       |
//! | `<number>`   | go to page                 |
//! | `d <id>`     | show details               |
//! | `x`          | close details              |
//! | `t <id>`     | toggle wishlist            |
//! | `h`, `w`     | home / wishlist view       |
//! | `q`          | quit                       |
//!
//! An empty line redraws the screen.

use super::handler::Event;
use crate::domain::BookId;
use thiserror::Error;

/// Reasons a command line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("'{0}' needs a book id")]
    MissingId(&'static str),

    #[error("invalid book id: {0}")]
    InvalidId(String),

    #[error("invalid page number: {0}")]
    InvalidPage(String),
}

/// Parses one input line into an [`Event`].
///
/// # Errors
///
/// Returns [`CommandError`] for unrecognized commands and malformed arguments.
///
/// ```rust
/// use shelfwise::app::{parse_command, Event};
///
/// assert_eq!(parse_command("/whale").unwrap(), Event::SearchInput("whale".into()));
/// assert_eq!(parse_command("3").unwrap(), Event::GoToPage(3));
/// ```
pub fn parse_command(line: &str) -> Result<Event, CommandError> {
    let line = line.trim();

    if let Some(text) = line.strip_prefix('/') {
        return Ok(Event::SearchInput(text.trim().to_string()));
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => Ok(Event::Resize),
        "g" => Ok(Event::GenreSelected(argument.to_string())),
        "n" if argument.is_empty() => Ok(Event::NextPage),
        "p" if argument.is_empty() => Ok(Event::PrevPage),
        "x" if argument.is_empty() => Ok(Event::CloseDetails),
        "h" if argument.is_empty() => Ok(Event::ShowHome),
        "w" if argument.is_empty() => Ok(Event::ShowWishlist),
        "q" if argument.is_empty() => Ok(Event::Quit),
        "d" => parse_id("d", argument).map(Event::ShowDetails),
        "t" => parse_id("t", argument).map(Event::ToggleWishlist),
        digits if argument.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
            .parse()
            .map(Event::GoToPage)
            .map_err(|_| CommandError::InvalidPage(digits.to_string())),
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}

fn parse_id(command: &'static str, argument: &str) -> Result<BookId, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    if !argument.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::InvalidId(argument.to_string()));
    }
    Ok(BookId::new(argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_commands() {
        assert_eq!(parse_command("/moby dick").unwrap(), Event::SearchInput("moby dick".into()));
        assert_eq!(parse_command("/").unwrap(), Event::SearchInput(String::new()));
        assert_eq!(parse_command("  /  whale  ").unwrap(), Event::SearchInput("whale".into()));
    }

    #[test]
    fn genre_commands() {
        assert_eq!(
            parse_command("g Science Fiction").unwrap(),
            Event::GenreSelected("Science Fiction".into())
        );
        assert_eq!(parse_command("g").unwrap(), Event::GenreSelected(String::new()));
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_command("n").unwrap(), Event::NextPage);
        assert_eq!(parse_command("p").unwrap(), Event::PrevPage);
        assert_eq!(parse_command("7").unwrap(), Event::GoToPage(7));
        assert_eq!(parse_command("h").unwrap(), Event::ShowHome);
        assert_eq!(parse_command("w").unwrap(), Event::ShowWishlist);
        assert_eq!(parse_command("x").unwrap(), Event::CloseDetails);
        assert_eq!(parse_command("q").unwrap(), Event::Quit);
        assert_eq!(parse_command("").unwrap(), Event::Resize);
    }

    #[test]
    fn id_commands() {
        assert_eq!(parse_command("d 84").unwrap(), Event::ShowDetails(BookId::from(84)));
        assert_eq!(parse_command("t 1342").unwrap(), Event::ToggleWishlist(BookId::from(1342)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("t").unwrap_err(), CommandError::MissingId("t"));
        assert_eq!(parse_command("d abc").unwrap_err(), CommandError::InvalidId("abc".into()));
        assert_eq!(
            parse_command("99999999999").unwrap_err(),
            CommandError::InvalidPage("99999999999".into())
        );
        assert_eq!(parse_command("zz").unwrap_err(), CommandError::Unknown("zz".into()));
        assert!(matches!(parse_command("q now"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(CommandError::Unknown("zz".into()).to_string(), "unknown command: zz");
        assert_eq!(CommandError::MissingId("t").to_string(), "'t' needs a book id");
    }
}
