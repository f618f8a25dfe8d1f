use newsdesk_core::{Category, Msg};
use thiserror::Error;

use super::constants::SCROLL_STEP;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    /// Re-select the current page.
    Retry,
    Scroll(isize),
    Help,
    Redraw,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}', type `help` for a list")]
    UnknownCommand(String),
    #[error("{0}")]
    UnknownCategory(#[from] newsdesk_core::UnknownCategory),
    #[error("'{0}' is not a page number (pages start at 1)")]
    InvalidPage(String),
    #[error("'{0}' is not a line count")]
    InvalidCount(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// Parses one line typed at the prompt.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Redraw);
    }
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Command::Dispatch(Msg::SearchChanged(text.trim().to_string())));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "clear" => Command::Dispatch(Msg::SearchChanged(String::new())),
        "cat" | "category" | "c" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("cat"));
            }
            Command::Dispatch(Msg::CategorySelected(rest.parse::<Category>()?))
        }
        "page" | "g" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("page"));
            }
            Command::Dispatch(Msg::PageSelected(parse_page(rest)?))
        }
        "n" | "next" => Command::Dispatch(Msg::NextPageClicked),
        "p" | "prev" => Command::Dispatch(Msg::PrevPageClicked),
        "r" | "retry" => Command::Retry,
        "j" | "down" => Command::Scroll(parse_count(rest)?),
        "k" | "up" => Command::Scroll(-parse_count(rest)?),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ if word.chars().all(|ch| ch.is_ascii_digit()) && rest.is_empty() => {
            Command::Dispatch(Msg::PageSelected(parse_page(word)?))
        }
        _ => return Err(InputError::UnknownCommand(word.to_string())),
    };
    Ok(command)
}

fn parse_page(raw: &str) -> Result<u32, InputError> {
    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(InputError::InvalidPage(raw.to_string())),
    }
}

fn parse_count(raw: &str) -> Result<isize, InputError> {
    if raw.is_empty() {
        return Ok(SCROLL_STEP as isize);
    }
    raw.parse::<isize>()
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| InputError::InvalidCount(raw.to_string()))
}
