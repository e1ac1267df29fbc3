use std::str::FromStr;

use thiserror::Error;

use crate::browser::{Column, Field};
use crate::browser::table::UnknownColumn;

pub const HELP: &str = "\
Commands:
  search [TID]          search by TID (no TID: search with an empty box)
  all                   show all records
  first <text>          set First Name
  last <text>           set Last Name
  address <text>        set Address
  submit                add the record from the form
  sort <column>         sort by tid, first, last or address (again to reverse)
  page <n>              go to page n
  show                  redraw the page
  help                  show this help
  quit                  exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Replace the search box text and run the search.
    Search(String),
    ShowAll,
    SetField(Field, String),
    Submit,
    Sort(Column),
    Page(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid page number {0:?}")]
    InvalidPage(String),

    #[error(transparent)]
    InvalidColumn(#[from] UnknownColumn),
}

impl FromStr for PageCommand {
    type Err = CommandError;

    /// The first word selects the command; the rest of the line, with
    /// surrounding whitespace removed, is its argument.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => PageCommand::Search(rest.to_string()),
            "all" | "a" => PageCommand::ShowAll,
            "first" => PageCommand::SetField(Field::FirstName, rest.to_string()),
            "last" => PageCommand::SetField(Field::LastName, rest.to_string()),
            "address" => PageCommand::SetField(Field::Address, rest.to_string()),
            "submit" => PageCommand::Submit,
            "sort" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("sort"));
                }
                PageCommand::Sort(rest.parse()?)
            }
            "page" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("page"));
                }
                match rest.parse::<usize>() {
                    Ok(n) if n > 0 => PageCommand::Page(n),
                    _ => return Err(CommandError::InvalidPage(rest.to_string())),
                }
            }
            "show" | "" => PageCommand::Show,
            "help" | "?" => PageCommand::Help,
            "quit" | "exit" | "q" => PageCommand::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}
