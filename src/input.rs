//! Line-oriented command parsing for the terminal view

use crate::error::CommandError;
use crate::pipeline::{SortDirection, SortKey, SortOrder};
use crate::view_state::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    ShowCategories,
    Help,
    Quit,
}

/// Parse one line of user input.
///
/// Blank lines re-render the current view and parse as `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "/" => Command::Event(Event::SearchChanged(rest.to_string())),
        "category" | "cat" => {
            let category = match rest {
                "" => None,
                all if all.eq_ignore_ascii_case("all") => None,
                name => Some(name.to_string()),
            };
            Command::Event(Event::CategorySelected(category))
        }
        "categories" => Command::ShowCategories,
        "sort" => Command::Event(Event::SortChanged(parse_sort(rest)?)),
        "page" => {
            let page = rest
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidPage(rest.to_string()))?;
            Command::Event(Event::PageRequested(page))
        }
        "next" | "n" => Command::Event(Event::NextPage),
        "prev" | "previous" | "p" => Command::Event(Event::PreviousPage),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn parse_sort(args: &str) -> Result<Option<SortOrder>, CommandError> {
    let mut parts = args.split_whitespace();
    let Some(key) = parts.next() else {
        return Ok(None);
    };
    if key.eq_ignore_ascii_case("off") || key.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let key = SortKey::from_name(key).ok_or_else(|| CommandError::InvalidSortKey(key.to_string()))?;
    let direction = match parts.next() {
        Some(direction) => SortDirection::from_name(direction)
            .ok_or_else(|| CommandError::InvalidSortDirection(direction.to_string()))?,
        None => SortDirection::default(),
    };

    Ok(Some(SortOrder::new(key, direction)))
}
